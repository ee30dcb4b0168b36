use yew::prelude::*;

use super::{controls_panel::ControlsPanel, password_modal::PasswordModal, stats_panel::StatsPanel};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub clicks: u64,
    pub rate: u64,
    pub has_password: bool,
    pub on_click: Callback<()>,
    pub to_shop: Callback<()>,
    pub on_set_password: Callback<String>,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let setting_password = use_state(|| false);

    let duck_cb = {
        let cb = props.on_click.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let open_password = {
        let setting_password = setting_password.clone();
        Callback::from(move |_| setting_password.set(true))
    };
    let cancel_password = {
        let setting_password = setting_password.clone();
        Callback::from(move |_| setting_password.set(false))
    };
    let set_password = {
        let setting_password = setting_password.clone();
        let cb = props.on_set_password.clone();
        Callback::from(move |password: String| {
            cb.emit(password);
            setting_password.set(false);
        })
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#e6edf3; overflow:hidden;">
            <div id="top-bar" style="padding:12px; font-size:16px; font-weight:600; text-align:center;">{"Duck Clicker"}</div>
            <ControlsPanel
                to_shop={props.to_shop.clone()}
                on_open_password={open_password}
            />
            <div style="display:flex; flex-direction:column; align-items:center; justify-content:center; gap:18px; height:calc(100% - 60px);">
                <StatsPanel clicks={props.clicks} rate={props.rate} />
                <button
                    onclick={duck_cb}
                    title="Click the duck"
                    style="width:200px; height:200px; border-radius:32px; border:2px solid #30363d; background:#1c2128; font-size:120px; line-height:1; cursor:pointer;"
                >
                    {"🦆"}
                </button>
            </div>
            <PasswordModal
                show={*setting_password}
                has_password={props.has_password}
                on_cancel={cancel_password}
                on_set={set_password}
            />
        </div>
    }
}
