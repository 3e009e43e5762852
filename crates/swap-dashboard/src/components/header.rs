//! Top header bar: logo, nav, network badge, balance, wallet and settings.

use swap_header::style::header_style;
use swap_header::{render_header, HeaderConfig, HeaderSnapshot};
use yew::prelude::*;

use super::menu::Menu;
use super::nav::Nav;
use super::settings::Settings;
use super::web3_status::Web3Status;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    /// Wallet, balance and device state at the time of this render.
    pub snapshot: HeaderSnapshot,
    /// Viewport width in CSS pixels.
    pub width: u32,
    pub config: HeaderConfig,
    pub wallet_available: bool,
    pub on_connect: Callback<()>,
    pub on_toggle_dark: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let view = render_header(&props.snapshot, &props.config);
    let style = header_style(view.dark_mode, props.width, view.account.active);

    html! {
        <div class="header" style={style.frame}>
            <div
                class="header__row"
                style="display: flex; justify-content: space-between; align-items: flex-start; \
                       width: 100%; padding: 1rem 1rem 0 1rem;"
            >
                <div class="header__logo" style="display: flex; align-items: center; flex: 1; justify-content: start;">
                    <a class="header__title" href={view.logo.href.clone()}>
                        <div class="header__icon">
                            <img
                                style={format!("height: {}px", view.logo.height)}
                                src={view.logo.src.clone()}
                                alt={view.logo.alt.clone()}
                            />
                        </div>
                    </a>
                </div>

                <Nav
                    style={style.nav.clone()}
                    link_style={style.nav_link.clone()}
                    active_link_style={style.nav_link_active.clone()}
                />

                <div class="header__controls" style={style.controls}>
                    <div class="header__element" style="display: flex; align-items: center; flex: 1; justify-content: flex-end;">
                        <div class="header__testnet">
                            if let Some(badge) = &view.network_badge {
                                <div class="card card--yellow header__network">{ badge.label }</div>
                            }
                        </div>
                        <div class="header__account" style={style.account}>
                            if let (Some(text), Some(balance_style)) = (&view.account.balance_text, &style.balance) {
                                <span class="header__balance" style={balance_style.clone()}>{ text }</span>
                            }
                            <Web3Status
                                account={props.snapshot.connection.account}
                                wallet_available={props.wallet_available}
                                on_connect={props.on_connect.clone()}
                            />
                        </div>
                    </div>
                    <div class="header__element-wrap" style={style.element_wrap}>
                        <Settings dark_mode={view.dark_mode} on_toggle_dark={props.on_toggle_dark.clone()} />
                        <Menu />
                    </div>
                </div>
            </div>
        </div>
    }
}
