use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AuthViewProps {
    /// Returns whether the password matched.
    pub on_authenticate: Callback<String, bool>,
}

#[function_component(AuthView)]
pub fn auth_view(props: &AuthViewProps) -> Html {
    let pending = use_state(String::new);
    let wrong_password = use_state(|| false);

    let oninput = {
        let pending = pending.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            pending.set(input.value());
        })
    };
    let submit = {
        let cb = props.on_authenticate.clone();
        let pending = pending.clone();
        let wrong_password = wrong_password.clone();
        Callback::from(move |_: ()| {
            if !cb.emit((*pending).clone()) {
                wrong_password.set(true);
            }
        })
    };
    let onclick = {
        let submit = submit.clone();
        Callback::from(move |_: MouseEvent| submit.emit(()))
    };
    let onkeydown = Callback::from(move |e: KeyboardEvent| {
        if e.key() == "Enter" {
            e.prevent_default();
            submit.emit(());
        }
    });

    html! {
        <div style="display:flex; align-items:center; justify-content:center; width:100vw; height:100vh; background:#0d1117;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:20px 24px; min-width:320px; display:flex; flex-direction:column; gap:12px;">
                <div style="font-size:16px; font-weight:600;">{"Enter your password to access Duck Clicker"}</div>
                { if *wrong_password {
                    html!{ <div style="font-size:13px; color:#f85149;">{"Incorrect password"}</div> }
                } else { html!{} } }
                <input
                    type="password"
                    placeholder="Password"
                    value={(*pending).clone()}
                    oninput={oninput}
                    onkeydown={onkeydown}
                    style="padding:6px 8px; border-radius:6px; border:1px solid #30363d; background:#0d1117; color:#fff;"
                />
                <button onclick={onclick} style="background:#1f6feb; border:1px solid #388bfd; color:#fff;">{"Authenticate"}</button>
            </div>
        </div>
    }
}
