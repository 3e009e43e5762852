//! Wallet connect button / connected-account chip.

use alloy::primitives::Address;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Web3StatusProps {
    pub account: Option<Address>,
    /// Whether a wallet extension is present at all.
    pub wallet_available: bool,
    pub on_connect: Callback<()>,
}

/// `0x1234…abcd` form of an address.
fn shorten(account: &Address) -> String {
    let full = account.to_checksum(None);
    format!("{}…{}", &full[..6], &full[full.len() - 4..])
}

#[function_component(Web3Status)]
pub fn web3_status(props: &Web3StatusProps) -> Html {
    match (&props.account, props.wallet_available) {
        (Some(account), _) => html! {
            <span class="web3-status web3-status--connected" title={account.to_checksum(None)}>
                { shorten(account) }
            </span>
        },
        (None, true) => {
            let on_connect = props.on_connect.clone();
            html! {
                <button
                    class="web3-status web3-status--connect"
                    onclick={Callback::from(move |_: MouseEvent| on_connect.emit(()))}
                >
                    {"Connect to a wallet"}
                </button>
            }
        }
        (None, false) => html! {
            <a
                class="web3-status web3-status--install"
                href="https://metamask.io/download/"
                target="_blank"
                rel="noopener noreferrer"
            >
                {"Install a wallet"}
            </a>
        },
    }
}
