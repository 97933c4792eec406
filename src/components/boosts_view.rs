use crate::engine;
use crate::model::{BoostKind, Session};
use crate::util::format_number;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct BoostsViewProps {
    pub session: UseReducerHandle<Session>,
    pub buy_boost: Callback<BoostKind>,
    pub to_mine: Callback<()>,
    pub reset: Callback<()>,
}

#[function_component(BoostsView)]
pub fn boosts_view(props: &BoostsViewProps) -> Html {
    let cfg = &props.session.config;
    let user = &props.session.user;
    let balance = user.total_earned;

    let cards: Vec<Html> = BoostKind::ALL
        .iter()
        .map(|kind| {
            let kind = *kind;
            let level = user.boosts.level(kind);
            let cost = engine::boost_cost(cfg, kind, level);
            let affordable = balance >= cost as f64;
            let buy_cb = {
                let cb = props.buy_boost.clone();
                Callback::from(move |_: MouseEvent| cb.emit(kind))
            };
            html! {
                <div style="width:220px; border:2px solid #374151; border-radius:14px; padding:12px 14px; background:#111821; display:flex; flex-direction:column; gap:8px;">
                    <div style="font-weight:700; font-size:15px; letter-spacing:.5px;">{ kind.label() }</div>
                    <div style="font-size:12px; line-height:1.3; opacity:0.85; min-height:32px;">{ kind.effect_line() }</div>
                    <div style="font-size:11px; opacity:0.7;">{ format!("Level {}", level) }</div>
                    <button
                        disabled={!affordable}
                        onclick={buy_cb}
                        style="height:28px; font-size:12px; border-radius:8px; border:1px solid #30363d; background:#1c2128; color:#fff;"
                    >
                        { format!("Buy ({} DRX)", format_number(cost as f64)) }
                    </button>
                </div>
            }
        })
        .collect();

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#e6edf3; overflow:hidden;">
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.95); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:180px; display:flex; flex-direction:column; gap:6px;">
                <div style="font-weight:600;">{ format!("Balance: {} DRX", format_number(balance)) }</div>
                <button onclick={{
                    let cb = props.to_mine.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(()))
                }}>{"Back"}</button>
                <button onclick={{
                    let cb = props.reset.clone();
                    Callback::from(move |_: MouseEvent| {
                        if let Some(win) = web_sys::window() {
                            if win
                                .confirm_with_message(
                                    "This will wipe your balance, XP and boosts. Are you sure?",
                                )
                                .unwrap_or(false)
                            {
                                cb.emit(());
                            }
                        } else {
                            cb.emit(());
                        }
                    })
                }} style="background:#3b1d1d; border:1px solid #5d2d2d; color:#fff;">{"Reset Progress"}</button>
            </div>
            <div style="padding:24px 12px; display:flex; flex-direction:column; align-items:center; gap:18px;">
                <h2 style="margin:0;">{"Boosts"}</h2>
                <p style="margin:0; font-size:13px; opacity:0.8;">{"Each purchase doubles the next one's price."}</p>
                <div style="display:flex; gap:16px; flex-wrap:wrap; justify-content:center;">
                    { for cards }
                </div>
            </div>
        </div>
    }
}
