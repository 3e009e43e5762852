//! Settings toggle (dark mode).

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SettingsProps {
    pub dark_mode: bool,
    pub on_toggle_dark: Callback<()>,
}

#[function_component(Settings)]
pub fn settings(props: &SettingsProps) -> Html {
    let open = use_state(|| false);
    let toggle_open = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };
    let on_toggle_dark = {
        let cb = props.on_toggle_dark.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div class="settings">
            <button class="settings__button" title="Settings" onclick={toggle_open}>{"⚙"}</button>
            if *open {
                <div class="settings__panel">
                    <span class="settings__label">{"Dark mode"}</span>
                    <button class="settings__toggle" onclick={on_toggle_dark}>
                        { if props.dark_mode { "On" } else { "Off" } }
                    </button>
                </div>
            }
        </div>
    }
}
