use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct PasswordModalProps {
    pub show: bool,
    /// A password is already stored and will be replaced.
    pub has_password: bool,
    pub on_cancel: Callback<()>,
    pub on_set: Callback<String>,
}

#[function_component]
pub fn PasswordModal(props: &PasswordModalProps) -> Html {
    let pending = use_state(String::new);

    // Start empty each time the modal opens
    {
        let pending = pending.clone();
        use_effect_with(props.show, move |_| {
            pending.set(String::new());
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let oninput = {
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pending.set(input.value());
        })
    };
    let cancel_cb = {
        let cb = props.on_cancel.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let set_cb = {
        let cb = props.on_set.clone();
        let pending = pending.clone();
        Callback::from(move |_| cb.emit((*pending).clone()))
    };

    let note = if props.has_password {
        "Replaces the current password. It is required the next time Duck Clicker starts."
    } else {
        "The password is required the next time Duck Clicker starts."
    };

    html! {<div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
        <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; display:flex; flex-direction:column; gap:14px;">
            <h3 style="margin:0; font-size:18px;">{"Set password"}</h3>
            <input
                type="password"
                placeholder="Password"
                value={(*pending).clone()}
                oninput={oninput}
                style="padding:6px 8px; border-radius:6px; border:1px solid #30363d; background:#0d1117; color:#fff;"
            />
            <div style="display:flex; gap:8px; justify-content:flex-end;">
                <button onclick={cancel_cb} style="min-width:90px;">{"Cancel"}</button>
                <button onclick={set_cb} style="min-width:90px; background:#1f6feb; border:1px solid #388bfd; color:#fff;">{"Set"}</button>
            </div>
            <div style="font-size:11px; line-height:1.4; opacity:0.7;">{ note }</div>
        </div>
    </div>}
}
