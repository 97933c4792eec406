use crate::engine::{rank_for, RANKS};
use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RankModalProps {
    pub show: bool,
    pub total_earned: f64,
    pub on_close: Callback<()>,
}

#[function_component]
pub fn RankModal(props: &RankModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let current = rank_for(props.total_earned);

    let rows: Vec<Html> = RANKS
        .iter()
        .enumerate()
        .map(|(i, tier)| {
            let reached = (i + 1) as u32 <= current.rank;
            let is_current = (i + 1) as u32 == current.rank;
            let row_bg = if is_current {
                "background:#1c2d1c; border:1px solid #3fb950;"
            } else if reached {
                "background:#161b22; border:1px solid #30363d;"
            } else {
                "background:#0d1117; border:1px solid #21262d; opacity:0.6;"
            };
            html! {
                <div style={format!("display:flex; align-items:center; gap:10px; padding:6px 10px; border-radius:8px; {}", row_bg)}>
                    <span style="width:22px; text-align:center;">{ tier.icon }</span>
                    <span style="flex:1; font-weight:600;">{ tier.title }</span>
                    <span style="font-size:12px; opacity:0.8; font-variant-numeric:tabular-nums;">
                        { format!("{} DRX", format_number(tier.threshold)) }
                    </span>
                </div>
            }
        })
        .collect();

    let progress_line = if (current.rank as usize) < RANKS.len() {
        format!(
            "Next rank at {} DRX",
            format_number(current.next_rank_at)
        )
    } else {
        "Top rank reached".to_string()
    };

    html! {
        <div style="position:absolute; inset:0; display:flex; align-items:center; justify-content:center; background:rgba(0,0,0,0.55); z-index:50;">
            <div style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:16px 20px; min-width:320px; max-width:420px; max-height:80vh; overflow-y:auto; display:flex; flex-direction:column; gap:10px;">
                <div style="display:flex; justify-content:space-between; align-items:center;">
                    <h3 style="margin:0; font-size:18px;">{"Miner Ranks"}</h3>
                    <button onclick={close_cb.clone()} style="padding:4px 8px;">{"Close"}</button>
                </div>
                <div style="font-size:13px; opacity:0.85;">
                    { format!("{} {} — {}", current.icon, current.title, progress_line) }
                </div>
                <div style="display:flex; flex-direction:column; gap:6px;">
                    { for rows }
                </div>
            </div>
        </div>
    }
}
