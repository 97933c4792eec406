use crate::engine::{LevelProgress, RankInfo};
use crate::util::{format_number, format_number_precise};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub balance: f64,
    pub rate: f64,
    pub level: LevelProgress,
    pub rank: RankInfo,
    pub on_open_ranks: Callback<()>,
}

#[function_component]
pub fn StatsPanel(props: &StatsPanelProps) -> Html {
    let row_style = "display:flex; align-items:center; gap:8px;"; // icon | label | value
    let icon_style = "width:20px; text-align:center; flex-shrink:0;";
    let label_style = "flex:1; font-weight:500;";
    let value_style =
        "min-width:90px; text-align:right; font-variant-numeric:tabular-nums; font-weight:600;";

    let xp_pct = if props.level.xp_for_next > 0 {
        (props.level.current_xp as f64 / props.level.xp_for_next as f64 * 100.0).min(100.0)
    } else {
        0.0
    };
    let rank_cb = {
        let cb = props.on_open_ranks.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };

    html! {
        <div style="position:absolute; top:12px; left:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:10px 14px; min-width:230px; display:flex; flex-direction:column; gap:10px; font-size:14px;">
            <div style={row_style}>
                <span style={format!("{} color:#d4af37;", icon_style)}>{"🪙"}</span>
                <span style={format!("{} color:#d4af37;", label_style)}>{"Balance"}</span>
                <span style={format!("{} color:#d4af37;", value_style)}>{ format_number(props.balance) }</span>
            </div>
            <div style={row_style}>
                <span style={format!("{} color:#58a6ff;", icon_style)}>{"⚡"}</span>
                <span style={format!("{} color:#58a6ff;", label_style)}>{"Rate"}</span>
                <span style={format!("{} color:#58a6ff;", value_style)}>{ format!("{}/s", format_number_precise(props.rate)) }</span>
            </div>
            <div style="display:flex; flex-direction:column; gap:4px;">
                <div style={row_style}>
                    <span style={format!("{} color:#3fb950;", icon_style)}>{"⭐"}</span>
                    <span style={format!("{} color:#3fb950;", label_style)}>{ format!("Level {}", props.level.level) }</span>
                    <span style={format!("{} color:#3fb950; font-size:11px;", value_style)}>
                        { format!("{}/{}", format_number(props.level.current_xp as f64), format_number(props.level.xp_for_next as f64)) }
                    </span>
                </div>
                <div style="height:6px; width:100%; background:#161b22; border-radius:3px; overflow:hidden;">
                    <div style={format!("height:100%; width:{:.1}%; background:#3fb950;", xp_pct)}></div>
                </div>
            </div>
            <div style={format!("{} cursor:pointer;", row_style)} onclick={rank_cb} title="Show rank ladder">
                <span style={icon_style}>{ props.rank.icon }</span>
                <span style={label_style}>{ props.rank.title }</span>
                <span style={format!("{} font-size:11px; opacity:0.7;", value_style)}>{ format!("#{}", props.rank.rank) }</span>
            </div>
        </div>
    }
}
