use crate::model::{CurrencyBalance, UpgradeItem};
use crate::util::format_clicks;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ShopViewProps {
    pub clicks: u64,
    /// Already in shop order.
    pub items: Vec<UpgradeItem>,
    pub on_purchase: Callback<String>,
    pub to_game: Callback<()>,
}

#[function_component(ShopView)]
pub fn shop_view(props: &ShopViewProps) -> Html {
    let balance = CurrencyBalance::new(props.clicks);

    let rows: Vec<Html> = props
        .items
        .iter()
        .map(|item| {
            // Mirrors the controller's check; the controller still decides.
            let affordable = balance.can_afford(item.price);
            let onclick_cb = {
                let purchase = props.on_purchase.clone();
                let name = item.name.clone();
                Callback::from(move |_| purchase.emit(name.clone()))
            };
            html! {
                <button
                    key={item.name.clone()}
                    disabled={!affordable}
                    onclick={onclick_cb}
                    title={format!("+{} each", format_clicks(item.clicks_per_second))}
                    style={format!("display:flex; align-items:center; gap:12px; width:100%; text-align:left; padding:10px 14px; border-radius:8px; border:1px solid #30363d; background:#161b22; color:#e6edf3; opacity:{};", if affordable { "1" } else { "0.5" })}
                >
                    <div style="flex:1; display:flex; flex-direction:column; gap:2px;">
                        <span style="font-weight:600;">{ item.name.clone() }</span>
                        <span style="font-size:12px; opacity:0.7;">{ format!("Price: {}", format_clicks(item.price)) }</span>
                    </div>
                    <span style="font-variant-numeric:tabular-nums; font-weight:600;">{ format!("x{}", item.amount_purchased) }</span>
                </button>
            }
        })
        .collect();

    let back_cb = {
        let cb = props.to_game.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#e6edf3; overflow:auto;">
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:160px; display:flex; flex-direction:column; gap:6px; z-index:20;">
                <div style="font-weight:600;">{ format_clicks(props.clicks) }</div>
                <button onclick={back_cb}>{"Back"}</button>
            </div>
            <div style="max-width:480px; margin:0 auto; padding:56px 12px 12px 12px; display:flex; flex-direction:column; gap:8px;">
                <h2 style="margin:0 0 8px 0;">{"Shop"}</h2>
                { for rows }
            </div>
        </div>
    }
}
