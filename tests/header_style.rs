//! Integration tests for theme/viewport style derivation.

mod common;

use common::*;
use swap_header::style::{header_style, palette, Viewport};
use swap_header::{render_header, HeaderConfig};

/// Styles for a rendered view follow its theme and connection state.
#[test]
fn style_follows_rendered_view() {
    let mut snap = sample_snapshot(Some(ALICE), Some(BSC_MAINNET), Some("1"));
    snap.dark_mode = true;
    let view = render_header(&snap, &HeaderConfig::default());

    let style = header_style(view.dark_mode, 1440, view.account.active);
    assert!(style.account.contains(palette(true).bg6));
    assert!(style.balance.is_some());
}

#[test]
fn narrow_phone_layout() {
    let style = header_style(false, 375, false);
    assert_eq!(Viewport::from_width(375), Viewport::ExtraSmall);
    assert_eq!(style.nav, "display: none;");
    assert!(style.balance.is_none());
    assert!(style.frame.contains("position: relative"));
    assert!(style.controls.contains("flex-direction: column"));
    assert!(style.element_wrap.contains("margin-top: 0.5rem"));
}

#[test]
fn wide_desktop_layout() {
    let style = header_style(true, 1920, true);
    assert!(style.nav.contains("flex-direction: row"));
    assert!(style.nav_link.contains("0 27.5px"));
    assert!(style.controls.contains("flex-direction: row"));
    assert!(!style.element_wrap.contains("margin-top"));
}

#[test]
fn style_is_deterministic() {
    for width in [320, 600, 900, 1300, 1500, 2000] {
        assert_eq!(header_style(true, width, false), header_style(true, width, false));
    }
}
