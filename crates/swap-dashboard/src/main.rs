//! StreetSwap front-end shell, browser-based WASM application.
//!
//! Owns the wallet, balance and preference state and hands the header a
//! fresh snapshot of it on every change.

mod components;
mod device;
mod rpc;
mod state;
mod wallet;

use components::header::Header;
use device::{viewport_width, LocalStoragePreferences, UserAgentViewport};
use state::{header_snapshot, WalletAction, WalletState};
use swap_header::providers::PreferenceStore;
use swap_header::{ActiveConnection, HeaderConfig, NativeAmount};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

fn log_error(context: &str, err: &str) {
    web_sys::console::error_1(&format!("{context}: {err}").into());
}

/// Re-read account, chain and balance from the wallet.
fn refresh_wallet(wallet_state: UseReducerDispatcher<WalletState>) {
    spawn_local(async move {
        let account = wallet::current_account().await.unwrap_or_else(|e| {
            log_error("eth_accounts failed", &e);
            None
        });
        let chain_id = wallet::chain_id().await.unwrap_or_else(|e| {
            log_error("eth_chainId failed", &e);
            None
        });
        wallet_state.dispatch(WalletAction::Connected(ActiveConnection { account, chain_id }));

        if let Some(account) = account {
            match wallet::balance(account).await {
                Ok(wei) => wallet_state.dispatch(WalletAction::Balance {
                    account,
                    amount: NativeAmount::from_wei(wei),
                }),
                Err(e) => log_error("balance lookup failed", &e),
            }
        }
    });
}

// ---------------------------------------------------------------------------
// App component
// ---------------------------------------------------------------------------

#[function_component(App)]
fn app() -> Html {
    let wallet_state = use_reducer(WalletState::default);
    let dark_mode = use_state(|| LocalStoragePreferences.dark_mode());
    let width = use_state(viewport_width);

    {
        let dispatcher = wallet_state.dispatcher();
        use_effect_with((), move |_| {
            refresh_wallet(dispatcher.clone());
            wallet::watch(move || refresh_wallet(dispatcher.clone()));
            || ()
        });
    }

    {
        let width = width.clone();
        use_effect_with((), move |_| {
            let listener = listen_resize(move || width.set(viewport_width()));
            move || drop(listener)
        });
    }

    let on_connect = {
        let dispatcher = wallet_state.dispatcher();
        Callback::from(move |_: ()| {
            let dispatcher = dispatcher.clone();
            spawn_local(async move {
                if let Err(e) = wallet::connect().await {
                    log_error("wallet connection rejected", &e);
                    return;
                }
                refresh_wallet(dispatcher);
            });
        })
    };

    let on_toggle_dark = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: ()| {
            let next = !*dark_mode;
            LocalStoragePreferences.set_dark_mode(next);
            dark_mode.set(next);
        })
    };

    let snapshot = header_snapshot(&wallet_state, *dark_mode, &UserAgentViewport);

    html! {
        <div class="app">
            <Header
                snapshot={snapshot}
                width={*width}
                config={HeaderConfig::default()}
                wallet_available={wallet::is_available()}
                on_connect={on_connect}
                on_toggle_dark={on_toggle_dark}
            />
        </div>
    }
}

/// Listen for window resizes until the returned guard is dropped.
fn listen_resize(on_resize: impl Fn() + 'static) -> Option<ResizeListener> {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;

    let window = web_sys::window()?;
    let closure = Closure::<dyn Fn()>::new(on_resize);
    window
        .add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref())
        .ok()?;
    Some(ResizeListener { window, closure })
}

struct ResizeListener {
    window: web_sys::Window,
    closure: wasm_bindgen::closure::Closure<dyn Fn()>,
}

impl Drop for ResizeListener {
    fn drop(&mut self) {
        use wasm_bindgen::JsCast;
        let _ = self
            .window
            .remove_event_listener_with_callback("resize", self.closure.as_ref().unchecked_ref());
    }
}

// ---------------------------------------------------------------------------
// WASM entry point
// ---------------------------------------------------------------------------

fn main() {
    yew::Renderer::<App>::new().render();
}
