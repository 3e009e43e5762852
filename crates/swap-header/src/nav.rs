//! Fixed navigation links shown in the middle of the header.

use serde::Serialize;

/// Where a link opens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    SameTab,
    NewTab,
}

impl LinkTarget {
    /// Value for the anchor's `target` attribute, if any.
    pub const fn as_attr(self) -> Option<&'static str> {
        match self {
            Self::SameTab => None,
            Self::NewTab => Some("_blank"),
        }
    }
}

/// Layout group a link belongs to. Grouped rows stack on narrow screens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavGroup {
    Rewards,
    Trade,
    Standalone,
}

/// One outbound or in-app navigation link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
    pub target: LinkTarget,
    /// Highlighted as the current page.
    pub active: bool,
    pub group: NavGroup,
}

pub const NAV_LINKS: [NavLink; 5] = [
    NavLink {
        label: "Farm",
        href: "https://traphouse.vip",
        target: LinkTarget::SameTab,
        active: false,
        group: NavGroup::Rewards,
    },
    NavLink {
        label: "Stake",
        href: "https://traphouse.vip/pool",
        target: LinkTarget::SameTab,
        active: false,
        group: NavGroup::Rewards,
    },
    NavLink {
        label: "Exchange",
        href: "#/swap",
        target: LinkTarget::SameTab,
        active: true,
        group: NavGroup::Trade,
    },
    NavLink {
        label: "Analytics",
        href: "https://streetswap.info",
        target: LinkTarget::NewTab,
        active: false,
        group: NavGroup::Trade,
    },
    NavLink {
        label: "NFT Market",
        href: "#/swap",
        target: LinkTarget::NewTab,
        active: false,
        group: NavGroup::Standalone,
    },
];

/// The navigation bar. Takes no input and always yields the same links.
pub fn nav_links() -> &'static [NavLink] {
    &NAV_LINKS
}

/// Links split into consecutive layout groups, in display order.
pub fn nav_groups() -> Vec<(NavGroup, Vec<NavLink>)> {
    let mut groups: Vec<(NavGroup, Vec<NavLink>)> = Vec::new();
    for link in nav_links() {
        match groups.last_mut() {
            Some((group, links)) if *group == link.group => links.push(*link),
            _ => groups.push((link.group, vec![*link])),
        }
    }
    groups
}
