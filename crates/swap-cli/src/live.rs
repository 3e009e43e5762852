//! Wallet state read from a live JSON-RPC node.

use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use eyre::{Context, Result};
use swap_header::{ActiveConnection, NativeAmount};

/// Connection and balance as a node currently reports them.
pub struct LiveState {
    pub connection: ActiveConnection,
    pub balance: Option<NativeAmount>,
}

/// Read the chain id and, when an account is given, its native balance.
///
/// A failed balance read leaves the balance unknown instead of failing the
/// whole render; only an unreachable node is an error.
///
/// # Errors
/// Returns error if the URL is malformed or `eth_chainId` fails.
#[tracing::instrument(skip_all, fields(rpc_url = %rpc_url))]
pub async fn fetch_live_state(rpc_url: &str, account: Option<Address>) -> Result<LiveState> {
    let provider =
        ProviderBuilder::new().on_http(rpc_url.parse().wrap_err("invalid RPC URL format")?);

    let chain_id = provider
        .get_chain_id()
        .await
        .wrap_err("failed to read chain id with eth_chainId")?;

    let balance = match account {
        Some(account) => match provider.get_balance(account).await {
            Ok(wei) => Some(NativeAmount::from_wei(wei)),
            Err(err) => {
                tracing::warn!(%account, error = %err, "balance lookup failed, treating as unknown");
                None
            }
        },
        None => None,
    };

    tracing::info!(
        chain_id,
        account = ?account,
        has_balance = balance.is_some(),
        "read wallet state from RPC"
    );

    Ok(LiveState {
        connection: ActiveConnection {
            account,
            chain_id: Some(chain_id),
        },
        balance,
    })
}
