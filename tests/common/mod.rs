//! Shared test helpers and utilities.
//!
//! Provides factory functions for header snapshots and collaborator doubles
//! with sensible defaults.

#![allow(dead_code)]

use alloy::primitives::{address, Address};
use swap_header::amount::NATIVE_DECIMALS;
use swap_header::providers::{
    FixedViewport, HeaderContext, MemoryPreferences, StaticBalances, StaticConnection,
};
use swap_header::{ActiveConnection, HeaderConfig, HeaderSnapshot, HeaderView, NativeAmount};

/// First Hardhat/Anvil development account.
pub const ALICE: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");

/// Second Hardhat/Anvil development account.
pub const BOB: Address = address!("70997970c51812e339d9b73b0245ad59e15ebbf9");

pub const BSC_MAINNET: u64 = 56;
pub const BSC_TESTNET: u64 = 97;

/// Parses a whole-token amount such as `"1.5"`.
///
/// # Panics
/// Panics if the literal is not a valid amount.
pub fn bnb(amount: &str) -> NativeAmount {
    NativeAmount::parse(amount, NATIVE_DECIMALS).expect("test amount literal should parse")
}

/// Creates a desktop, light-theme snapshot.
///
/// # Example
/// ```ignore
/// let snap = sample_snapshot(Some(ALICE), Some(56), Some("1.5"));
/// assert!(!snap.is_mobile);
/// ```
pub fn sample_snapshot(
    account: Option<Address>,
    chain_id: Option<u64>,
    balance: Option<&str>,
) -> HeaderSnapshot {
    HeaderSnapshot {
        connection: ActiveConnection { account, chain_id },
        balance: balance.map(bnb),
        dark_mode: false,
        is_mobile: false,
    }
}

/// Same as [`sample_snapshot`] on a mobile device.
pub fn mobile_snapshot(
    account: Option<Address>,
    chain_id: Option<u64>,
    balance: Option<&str>,
) -> HeaderSnapshot {
    HeaderSnapshot {
        is_mobile: true,
        ..sample_snapshot(account, chain_id, balance)
    }
}

/// Renders through in-memory collaborators instead of a prepared snapshot.
///
/// `balances` is the full balance table the provider knows; the header only
/// asks for the connected account.
pub fn render_with_sources(
    connection: ActiveConnection,
    balances: &[(Address, &str)],
    mobile: bool,
) -> HeaderView {
    let mut table = StaticBalances::new();
    for (account, amount) in balances {
        table.insert(*account, bnb(amount));
    }
    let connection = StaticConnection(connection);
    let preferences = MemoryPreferences::new(false);
    let viewport = FixedViewport { mobile };

    HeaderContext {
        connection: &connection,
        balances: &table,
        preferences: &preferences,
        viewport: &viewport,
    }
    .render(&HeaderConfig::default())
}
