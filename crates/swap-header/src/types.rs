//! Snapshot types read by the header.

use alloy::primitives::Address;

use crate::amount::NativeAmount;

/// Connected wallet and the network it is on. Either part may be missing
/// while the wallet is locked, disconnected or still initialising.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveConnection {
    pub account: Option<Address>,
    pub chain_id: Option<u64>,
}

impl ActiveConnection {
    pub const fn disconnected() -> Self {
        Self {
            account: None,
            chain_id: None,
        }
    }

    pub const fn new(account: Address, chain_id: u64) -> Self {
        Self {
            account: Some(account),
            chain_id: Some(chain_id),
        }
    }
}

/// Everything the header reads from the outside world at one point in time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeaderSnapshot {
    pub connection: ActiveConnection,
    /// Native balance of `connection.account`, if known.
    pub balance: Option<NativeAmount>,
    pub dark_mode: bool,
    /// Small or touch device; hides the network badge.
    pub is_mobile: bool,
}
