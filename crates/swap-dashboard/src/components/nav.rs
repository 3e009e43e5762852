//! Navigation links in the middle of the header.

use swap_header::nav::{nav_groups, NavGroup, NavLink};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavProps {
    /// Inline style of the `<nav>` container.
    pub style: AttrValue,
    pub link_style: AttrValue,
    pub active_link_style: AttrValue,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let link = |l: &NavLink| {
        let style = if l.active {
            props.active_link_style.clone()
        } else {
            props.link_style.clone()
        };
        html! {
            <a
                class={classes!("nav__link", l.active.then_some("active"))}
                href={l.href}
                target={l.target.as_attr()}
                rel={l.target.as_attr().map(|_| "noopener noreferrer")}
                style={style}
            >
                { l.label }
            </a>
        }
    };

    html! {
        <nav class="nav" style={props.style.clone()}>
            { for nav_groups().into_iter().map(|(group, links)| match group {
                NavGroup::Standalone => html! { <>{ for links.iter().map(link) }</> },
                _ => html! {
                    <div class="nav__row" style="display: flex;">
                        { for links.iter().map(link) }
                    </div>
                },
            })}
        </nav>
    }
}
