//! Bridge to the injected EIP-1193 wallet provider (`window.ethereum`).

use alloy::primitives::{Address, U256};
use js_sys::{Function, Object, Promise, Reflect, JSON};
use serde_json::{json, Value};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::rpc;

fn js_err(err: JsValue) -> String {
    Reflect::get(&err, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .unwrap_or_else(|| format!("{err:?}"))
}

fn provider() -> Option<JsValue> {
    let window = web_sys::window()?;
    let ethereum = Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
    if ethereum.is_undefined() || ethereum.is_null() {
        None
    } else {
        Some(ethereum)
    }
}

/// Whether a wallet extension injected a provider.
pub fn is_available() -> bool {
    provider().is_some()
}

/// Send one `request({ method, params })` to the wallet.
async fn request(method: &str, params: &[Value]) -> Result<Value, String> {
    let ethereum = provider().ok_or("no injected wallet found")?;

    let args = Object::new();
    Reflect::set(&args, &JsValue::from_str("method"), &JsValue::from_str(method)).map_err(js_err)?;
    let params_js = JSON::parse(&Value::from(params.to_vec()).to_string()).map_err(js_err)?;
    Reflect::set(&args, &JsValue::from_str("params"), &params_js).map_err(js_err)?;

    let request_fn: Function = Reflect::get(&ethereum, &JsValue::from_str("request"))
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "wallet provider has no request()".to_string())?;
    let promise: Promise = request_fn
        .call1(&ethereum, &args)
        .map_err(js_err)?
        .dyn_into()
        .map_err(|_| "wallet request() did not return a promise".to_string())?;

    let result = JsFuture::from(promise).await.map_err(js_err)?;
    if result.is_undefined() {
        return Ok(Value::Null);
    }
    let text: String = JSON::stringify(&result).map_err(js_err)?.into();
    serde_json::from_str(&text).map_err(|e| format!("wallet response: {e}"))
}

fn first_account(value: &Value) -> Option<Address> {
    value
        .as_array()?
        .first()?
        .as_str()?
        .parse::<Address>()
        .ok()
}

/// Accounts already authorised for this site, without prompting.
pub async fn current_account() -> Result<Option<Address>, String> {
    request("eth_accounts", &[]).await.map(|v| first_account(&v))
}

/// Ask the user to connect; resolves to the selected account.
pub async fn connect() -> Result<Option<Address>, String> {
    request("eth_requestAccounts", &[])
        .await
        .map(|v| first_account(&v))
}

pub async fn chain_id() -> Result<Option<u64>, String> {
    let value = request("eth_chainId", &[]).await?;
    if value.is_null() {
        return Ok(None);
    }
    let id = rpc::parse_hex_u256(&value)?;
    Ok(u64::try_from(id).ok())
}

/// Native balance through the wallet, falling back to a public node.
pub async fn balance(account: Address) -> Result<U256, String> {
    if is_available() {
        match request("eth_getBalance", &[json!(account.to_string()), json!("latest")]).await {
            Ok(value) => return rpc::parse_hex_u256(&value),
            Err(e) => web_sys::console::warn_1(&format!("wallet balance failed: {e}").into()),
        }
    }
    rpc::fetch_balance(rpc::FALLBACK_RPC_URL, account).await
}

/// Invoke `on_change` whenever the wallet reports a new account or chain.
pub fn watch(on_change: impl Fn() + 'static) {
    let Some(ethereum) = provider() else {
        return;
    };
    let Ok(on) = Reflect::get(&ethereum, &JsValue::from_str("on")) else {
        return;
    };
    let Ok(on) = on.dyn_into::<Function>() else {
        return;
    };

    let on_change = std::rc::Rc::new(on_change);
    for event in ["accountsChanged", "chainChanged"] {
        let on_change = on_change.clone();
        let listener = Closure::<dyn FnMut(JsValue)>::new(move |_: JsValue| on_change());
        if let Err(err) = on.call2(&ethereum, &JsValue::from_str(event), listener.as_ref()) {
            web_sys::console::warn_1(&format!("cannot watch {event}: {}", js_err(err)).into());
        }
        // Lives as long as the page.
        listener.forget();
    }
}
