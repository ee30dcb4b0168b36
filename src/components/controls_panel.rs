use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ControlsPanelProps {
    pub to_shop: Callback<()>,
    pub on_open_password: Callback<()>,
}

#[function_component]
pub fn ControlsPanel(props: &ControlsPanelProps) -> Html {
    let shop_cb = {
        let cb = props.to_shop.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let password_cb = {
        let cb = props.on_open_password.clone();
        Callback::from(move |_| cb.emit(()))
    };
    html! {<div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px;">
        <button id="shop-button" onclick={shop_cb}>{"🛍 Shop"}</button>
        <button onclick={password_cb}>{"🔑 Set Password"}</button>
    </div>}
}
