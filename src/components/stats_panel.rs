use crate::util::{format_clicks, format_rate};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub clicks: u64,
    pub rate: u64,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    html! {
        <div style="display:flex; flex-direction:column; align-items:center; gap:4px;">
            <div style="font-size:28px; font-weight:700; font-variant-numeric:tabular-nums; color:#d4af37;">{ format_clicks(props.clicks) }</div>
            <div style="font-size:14px; opacity:0.8; font-variant-numeric:tabular-nums;">{ format_rate(props.rate) }</div>
        </div>
    }
}
