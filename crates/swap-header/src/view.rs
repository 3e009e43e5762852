//! Header view derivation.
//!
//! [`render_header`] is a pure function of a [`HeaderSnapshot`]: the same
//! snapshot always yields the same [`HeaderView`], and no missing input can
//! make it fail. Absent values only remove the element that depends on them.

use serde::Serialize;

use crate::chain::network_label;
use crate::config::HeaderConfig;
use crate::nav::{nav_links, NavLink};
use crate::types::HeaderSnapshot;

/// Logo image wrapped in a link back to the home page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LogoLink {
    pub href: String,
    pub src: String,
    pub alt: String,
    pub height: u32,
}

/// Warning shown when the wallet is on a non-default network.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkBadge {
    pub label: &'static str,
}

/// Account pill: balance text followed by the wallet status widget.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AccountElement {
    /// A wallet account is connected.
    pub active: bool,
    /// Formatted balance, e.g. `1.235 BNB`.
    pub balance_text: Option<String>,
    /// Wallet connect/status widget; always present.
    pub wallet_status: bool,
}

/// Settings and menu cluster on the right.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderControls {
    pub settings: bool,
    pub menu: bool,
}

/// Everything the header draws for one snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub logo: LogoLink,
    pub nav: Vec<NavLink>,
    pub network_badge: Option<NetworkBadge>,
    pub account: AccountElement,
    pub controls: HeaderControls,
    /// Theme the snapshot was taken under.
    pub dark_mode: bool,
}

/// Badge for the snapshot's chain. Hidden on mobile, and for chains that
/// are unknown, absent, or the default supported network.
pub fn network_badge(snapshot: &HeaderSnapshot) -> Option<NetworkBadge> {
    if snapshot.is_mobile {
        return None;
    }
    network_label(snapshot.connection.chain_id).map(|label| NetworkBadge { label })
}

/// Balance text, present only when both an account and its balance are.
pub fn balance_text(snapshot: &HeaderSnapshot, config: &HeaderConfig) -> Option<String> {
    snapshot.connection.account?;
    let balance = snapshot.balance?;
    Some(format!(
        "{} {}",
        balance.to_significant(config.significant_digits),
        config.native_symbol
    ))
}

pub fn render_header(snapshot: &HeaderSnapshot, config: &HeaderConfig) -> HeaderView {
    let network_badge = network_badge(snapshot);
    let balance_text = balance_text(snapshot, config);

    tracing::trace!(
        account = ?snapshot.connection.account,
        chain_id = ?snapshot.connection.chain_id,
        badge = ?network_badge.as_ref().map(|b| b.label),
        balance = ?balance_text,
        "rendered header"
    );

    HeaderView {
        logo: LogoLink {
            href: config.home_href.clone(),
            src: config.logo_src.clone(),
            alt: config.logo_alt.clone(),
            height: config.logo_height,
        },
        nav: nav_links().to_vec(),
        network_badge,
        account: AccountElement {
            active: snapshot.connection.account.is_some(),
            balance_text,
            wallet_status: true,
        },
        controls: HeaderControls {
            settings: true,
            menu: true,
        },
        dark_mode: snapshot.dark_mode,
    }
}
