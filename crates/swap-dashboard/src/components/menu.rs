//! Overflow menu with community links.

use yew::prelude::*;

const MENU_LINKS: &[(&str, &str)] = &[
    ("Docs", "https://docs.traphouse.vip"),
    ("Code", "https://github.com/thugs-defi"),
    ("Analytics", "https://streetswap.info"),
];

#[function_component(Menu)]
pub fn menu() -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    html! {
        <div class="menu">
            <button class="menu__button" title="Menu" onclick={toggle}>{"⋯"}</button>
            if *open {
                <div class="menu__panel">
                    { for MENU_LINKS.iter().map(|(label, href)| html! {
                        <a class="menu__item" href={*href} target="_blank" rel="noopener noreferrer">
                            { *label }
                        </a>
                    })}
                </div>
            }
        </div>
    }
}
