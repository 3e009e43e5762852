//! Wallet state shared by the app shell.

use std::rc::Rc;

use alloy::primitives::Address;
use swap_header::providers::{
    HeaderContext, MemoryPreferences, StaticBalances, StaticConnection, ViewportDetector,
};
use swap_header::{ActiveConnection, HeaderSnapshot, NativeAmount};
use yew::prelude::*;

/// Latest connection plus every balance read so far.
#[derive(Clone, Debug, Default)]
pub struct WalletState {
    pub connection: ActiveConnection,
    pub balances: StaticBalances,
}

pub enum WalletAction {
    /// Wallet reported a new account/chain.
    Connected(ActiveConnection),
    /// A balance lookup finished.
    Balance {
        account: Address,
        amount: NativeAmount,
    },
}

impl Reducible for WalletState {
    type Action = WalletAction;

    fn reduce(self: Rc<Self>, action: WalletAction) -> Rc<Self> {
        match action {
            WalletAction::Connected(connection) => {
                if connection == self.connection {
                    return self;
                }
                Rc::new(Self {
                    connection,
                    balances: self.balances.clone(),
                })
            }
            WalletAction::Balance { account, amount } => {
                // Replies for an account the wallet already switched away from are stale.
                if self.connection.account != Some(account) {
                    return self;
                }
                let mut balances = self.balances.clone();
                balances.insert(account, amount);
                Rc::new(Self {
                    connection: self.connection,
                    balances,
                })
            }
        }
    }
}

/// Snapshot for the header. Dark mode comes from app state, not storage,
/// so the toggle works even when `localStorage` is unavailable.
pub fn header_snapshot(
    state: &WalletState,
    dark_mode: bool,
    viewport: &dyn ViewportDetector,
) -> HeaderSnapshot {
    let connection = StaticConnection(state.connection);
    let preferences = MemoryPreferences::new(dark_mode);
    HeaderContext {
        connection: &connection,
        balances: &state.balances,
        preferences: &preferences,
        viewport,
    }
    .snapshot()
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::{address, U256};
    use swap_header::providers::FixedViewport;

    const ALICE: Address = address!("f39fd6e51aad88f6f4ce6ab8827279cfffb92266");
    const BOB: Address = address!("70997970c51812e339d9b73b0245ad59e15ebbf9");

    fn wei(n: u64) -> NativeAmount {
        NativeAmount::from_wei(U256::from(n))
    }

    fn desktop() -> FixedViewport {
        FixedViewport { mobile: false }
    }

    #[test]
    fn late_reply_for_previous_account_keeps_current_balance() {
        let state = Rc::new(WalletState::default())
            .reduce(WalletAction::Connected(ActiveConnection::new(ALICE, 56)))
            .reduce(WalletAction::Connected(ActiveConnection::new(BOB, 56)))
            .reduce(WalletAction::Balance {
                account: BOB,
                amount: wei(2),
            })
            .reduce(WalletAction::Balance {
                account: ALICE,
                amount: wei(1),
            });

        let snapshot = header_snapshot(&state, false, &desktop());
        assert_eq!(snapshot.connection.account, Some(BOB));
        assert_eq!(snapshot.balance, Some(wei(2)));
    }

    #[test]
    fn balances_merge_across_account_switches() {
        let state = Rc::new(WalletState::default())
            .reduce(WalletAction::Connected(ActiveConnection::new(ALICE, 56)))
            .reduce(WalletAction::Balance {
                account: ALICE,
                amount: wei(1),
            })
            .reduce(WalletAction::Connected(ActiveConnection::new(BOB, 56)))
            .reduce(WalletAction::Balance {
                account: BOB,
                amount: wei(2),
            })
            .reduce(WalletAction::Connected(ActiveConnection::new(ALICE, 56)));

        let snapshot = header_snapshot(&state, false, &desktop());
        assert_eq!(snapshot.balance, Some(wei(1)));
    }

    #[test]
    fn dark_mode_comes_from_app_state() {
        let state = WalletState::default();
        assert!(header_snapshot(&state, true, &desktop()).dark_mode);
        assert!(!header_snapshot(&state, false, &desktop()).dark_mode);
    }

    #[test]
    fn unchanged_connection_keeps_same_state() {
        let state = Rc::new(WalletState::default())
            .reduce(WalletAction::Connected(ActiveConnection::new(ALICE, 97)));
        let again = state
            .clone()
            .reduce(WalletAction::Connected(ActiveConnection::new(ALICE, 97)));
        assert!(Rc::ptr_eq(&state, &again));
    }
}
