//! Collaborators that own the state the header displays.
//!
//! The header never reaches into globals. Callers hand it a
//! [`HeaderContext`] of borrowed sources; the context takes a
//! [`HeaderSnapshot`] and the view is derived from that alone.

use alloy::primitives::Address;
use std::collections::BTreeMap;

use crate::amount::NativeAmount;
use crate::config::HeaderConfig;
use crate::types::{ActiveConnection, HeaderSnapshot};
use crate::view::{render_header, HeaderView};

/// Current wallet connection.
pub trait ConnectionSource {
    fn active_connection(&self) -> ActiveConnection;
}

/// Native balances keyed by address.
pub trait BalanceSource {
    /// Balances for the requested addresses. `None` entries must be skipped,
    /// and addresses whose balance is still unknown map to `None`.
    fn balances(&self, addresses: &[Option<Address>]) -> BTreeMap<Address, Option<NativeAmount>>;
}

/// Persisted user preferences.
pub trait PreferenceStore {
    fn dark_mode(&self) -> bool;
    fn set_dark_mode(&mut self, dark: bool);
}

/// Viewport class of the device the header is drawn on.
pub trait ViewportDetector {
    fn is_mobile(&self) -> bool;
}

/// Borrowed collaborators for one header evaluation.
pub struct HeaderContext<'a> {
    pub connection: &'a dyn ConnectionSource,
    pub balances: &'a dyn BalanceSource,
    pub preferences: &'a dyn PreferenceStore,
    pub viewport: &'a dyn ViewportDetector,
}

impl HeaderContext<'_> {
    /// Read every source once.
    pub fn snapshot(&self) -> HeaderSnapshot {
        let connection = self.connection.active_connection();
        let balance = connection.account.and_then(|account| {
            self.balances
                .balances(&[Some(account)])
                .get(&account)
                .copied()
                .flatten()
        });

        HeaderSnapshot {
            connection,
            balance,
            dark_mode: self.preferences.dark_mode(),
            is_mobile: self.viewport.is_mobile(),
        }
    }

    /// Snapshot the sources and derive the header view.
    pub fn render(&self, config: &HeaderConfig) -> HeaderView {
        render_header(&self.snapshot(), config)
    }
}

/// Fixed connection state.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticConnection(pub ActiveConnection);

impl ConnectionSource for StaticConnection {
    fn active_connection(&self) -> ActiveConnection {
        self.0
    }
}

/// Fixed balance table.
#[derive(Clone, Debug, Default)]
pub struct StaticBalances {
    known: BTreeMap<Address, NativeAmount>,
}

impl StaticBalances {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_balance(mut self, account: Address, amount: NativeAmount) -> Self {
        self.known.insert(account, amount);
        self
    }

    pub fn insert(&mut self, account: Address, amount: NativeAmount) {
        self.known.insert(account, amount);
    }
}

impl BalanceSource for StaticBalances {
    fn balances(&self, addresses: &[Option<Address>]) -> BTreeMap<Address, Option<NativeAmount>> {
        addresses
            .iter()
            .flatten()
            .map(|address| (*address, self.known.get(address).copied()))
            .collect()
    }
}

/// Preferences held in memory only.
#[derive(Clone, Copy, Debug, Default)]
pub struct MemoryPreferences {
    dark_mode: bool,
}

impl MemoryPreferences {
    pub const fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }
}

impl PreferenceStore for MemoryPreferences {
    fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    fn set_dark_mode(&mut self, dark: bool) {
        self.dark_mode = dark;
    }
}

/// Viewport with a known class.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedViewport {
    pub mobile: bool,
}

impl ViewportDetector for FixedViewport {
    fn is_mobile(&self) -> bool {
        self.mobile
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};

    const ALICE: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    const BOB: Address = address!("70997970c51812e339d9b73b0245ad59e15ebbf9");

    #[test]
    fn static_balances_tolerate_absent_entries() {
        let balances = StaticBalances::new().with_balance(ALICE, NativeAmount::from_wei(U256::from(7u8)));

        let result = balances.balances(&[None, Some(ALICE), Some(BOB), None]);
        assert_eq!(result.len(), 2);
        assert_eq!(result[&ALICE], Some(NativeAmount::from_wei(U256::from(7u8))));
        assert_eq!(result[&BOB], None);

        assert!(balances.balances(&[None]).is_empty());
    }

    #[test]
    fn snapshot_skips_balance_without_account() {
        let connection = StaticConnection(ActiveConnection {
            account: None,
            chain_id: Some(56),
        });
        let balances = StaticBalances::new().with_balance(ALICE, NativeAmount::from_wei(U256::from(1u8)));
        let prefs = MemoryPreferences::new(true);
        let viewport = FixedViewport { mobile: false };
        let ctx = HeaderContext {
            connection: &connection,
            balances: &balances,
            preferences: &prefs,
            viewport: &viewport,
        };

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.balance, None);
        assert_eq!(snapshot.connection.chain_id, Some(56));
        assert!(snapshot.dark_mode);
    }

    #[test]
    fn snapshot_reads_balance_of_active_account() {
        let amount = NativeAmount::from_wei(U256::from(42u8));
        let connection = StaticConnection(ActiveConnection::new(BOB, 97));
        let balances = StaticBalances::new().with_balance(BOB, amount);
        let prefs = MemoryPreferences::default();
        let viewport = FixedViewport { mobile: true };
        let ctx = HeaderContext {
            connection: &connection,
            balances: &balances,
            preferences: &prefs,
            viewport: &viewport,
        };

        let snapshot = ctx.snapshot();
        assert_eq!(snapshot.balance, Some(amount));
        assert!(snapshot.is_mobile);
        assert!(!snapshot.dark_mode);
    }

    #[test]
    fn preference_setter_updates_value() {
        let mut prefs = MemoryPreferences::default();
        prefs.set_dark_mode(true);
        assert!(prefs.dark_mode());
    }
}
