//! Header styling as a pure function of theme and viewport.
//!
//! Front-ends compute a [`HeaderStyle`] once per (theme, width) change and
//! apply it as inline styles; the view derivation never looks at either.

use serde::Serialize;

/// Colour of nav links that are neither active nor hovered.
pub const NAV_LINK_COLOR: &str = "#9797d3";

/// Media breakpoints, by maximum width in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Viewport {
    ExtraSmall,
    Small,
    Medium,
    Large,
    Wide,
}

impl Viewport {
    pub const EXTRA_SMALL_MAX: u32 = 500;
    pub const SMALL_MAX: u32 = 720;
    pub const MEDIUM_MAX: u32 = 960;
    pub const LARGE_MAX: u32 = 1280;

    pub const fn from_width(width: u32) -> Self {
        if width <= Self::EXTRA_SMALL_MAX {
            Self::ExtraSmall
        } else if width <= Self::SMALL_MAX {
            Self::Small
        } else if width <= Self::MEDIUM_MAX {
            Self::Medium
        } else if width <= Self::LARGE_MAX {
            Self::Large
        } else {
            Self::Wide
        }
    }
}

/// Colours the header pulls from the app theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub bg1: &'static str,
    pub bg6: &'static str,
    pub text6: &'static str,
}

pub const DARK_PALETTE: Palette = Palette {
    bg1: "#212429",
    bg6: "#1b1b3a",
    text6: "#ffffff",
};

pub const LIGHT_PALETTE: Palette = Palette {
    bg1: "#ffffff",
    bg6: "#ecebfa",
    text6: "#3b3b8f",
};

pub const fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        DARK_PALETTE
    } else {
        LIGHT_PALETTE
    }
}

/// Inline style attributes for each header part.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HeaderStyle {
    pub frame: String,
    pub nav: String,
    pub nav_link: String,
    pub nav_link_active: String,
    pub controls: String,
    pub element_wrap: String,
    pub account: String,
    /// `None` hides the balance text entirely.
    pub balance: Option<String>,
}

/// Derive the header styles for a theme, a viewport width and whether an
/// account is connected.
pub fn header_style(dark_mode: bool, width: u32, account_active: bool) -> HeaderStyle {
    let colors = palette(dark_mode);
    let viewport = Viewport::from_width(width);

    let frame = if viewport == Viewport::ExtraSmall {
        "display: flex; align-items: center; justify-content: space-between; \
         flex-direction: column; width: 100%; top: 0; position: relative; \
         z-index: 2; padding: 12px 0 0 0;"
    } else {
        "display: flex; align-items: center; justify-content: space-between; \
         flex-direction: column; width: 100%; top: 0; position: absolute; z-index: 2;"
    };

    let nav = if width <= 680 {
        "display: none;".to_string()
    } else {
        let direction = if width <= 1400 { "column" } else { "row" };
        format!(
            "display: flex; align-items: center; justify-content: center; flex: 1; \
             flex-direction: {direction}; font-size: 16px; line-height: 45px; font-weight: 500;"
        )
    };

    let padding = if width <= 1800 { "0 16px" } else { "0 27.5px" };
    let nav_link = format!("color: {NAV_LINK_COLOR}; padding: {padding}; text-decoration: none;");
    let nav_link_active = format!(
        "color: {}; padding: {padding}; text-decoration: none;",
        colors.text6
    );

    let controls = if viewport <= Viewport::Medium {
        "display: flex; flex-direction: column; align-items: flex-end; flex: 1;"
    } else {
        "display: flex; flex-direction: row; align-items: center; flex: 1;"
    };

    let element_wrap = if viewport <= Viewport::Small {
        "display: flex; align-items: center; margin-top: 0.5rem;"
    } else {
        "display: flex; align-items: center;"
    };

    let account_bg = if account_active { colors.bg6 } else { colors.bg1 };
    let account = format!(
        "display: flex; flex-direction: row; align-items: center; \
         background-color: {account_bg}; border-radius: 12px; white-space: nowrap; \
         pointer-events: auto;"
    );

    let balance = (viewport != Viewport::ExtraSmall).then(|| {
        "flex-shrink: 0; padding-left: 0.75rem; padding-right: 0.5rem; font-weight: 500;"
            .to_string()
    });

    HeaderStyle {
        frame: frame.to_string(),
        nav,
        nav_link,
        nav_link_active,
        controls: controls.to_string(),
        element_wrap: element_wrap.to_string(),
        account,
        balance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewport_breakpoints() {
        assert_eq!(Viewport::from_width(320), Viewport::ExtraSmall);
        assert_eq!(Viewport::from_width(500), Viewport::ExtraSmall);
        assert_eq!(Viewport::from_width(501), Viewport::Small);
        assert_eq!(Viewport::from_width(960), Viewport::Medium);
        assert_eq!(Viewport::from_width(1280), Viewport::Large);
        assert_eq!(Viewport::from_width(1920), Viewport::Wide);
    }

    #[test]
    fn nav_hidden_on_narrow_screens() {
        assert_eq!(header_style(false, 600, false).nav, "display: none;");
        assert!(header_style(false, 1000, false).nav.contains("flex-direction: column"));
        assert!(header_style(false, 1600, false).nav.contains("flex-direction: row"));
    }

    #[test]
    fn link_padding_tightens_below_1800() {
        assert!(header_style(false, 1700, false).nav_link.contains("0 16px"));
        assert!(header_style(false, 1900, false).nav_link.contains("0 27.5px"));
    }

    #[test]
    fn balance_hidden_on_extra_small() {
        assert!(header_style(true, 400, true).balance.is_none());
        assert!(header_style(true, 800, true).balance.is_some());
    }

    #[test]
    fn frame_becomes_relative_on_extra_small() {
        assert!(header_style(false, 400, false).frame.contains("position: relative"));
        assert!(header_style(false, 1200, false).frame.contains("position: absolute"));
    }

    #[test]
    fn account_background_follows_connection_and_theme() {
        assert!(header_style(true, 1200, true).account.contains(DARK_PALETTE.bg6));
        assert!(header_style(true, 1200, false).account.contains(DARK_PALETTE.bg1));
        assert!(header_style(false, 1200, true).account.contains(LIGHT_PALETTE.bg6));
    }

    #[test]
    fn active_link_uses_theme_text_colour() {
        let style = header_style(false, 1200, false);
        assert!(style.nav_link_active.contains(LIGHT_PALETTE.text6));
        assert!(style.nav_link.contains(NAV_LINK_COLOR));
    }

    #[test]
    fn controls_stack_up_to_medium() {
        assert!(header_style(false, 900, false).controls.contains("column"));
        assert!(header_style(false, 1200, false).controls.contains("row"));
    }
}
