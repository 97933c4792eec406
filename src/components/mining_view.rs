use super::{rank_modal::RankModal, stats_panel::StatsPanel};
use crate::engine;
use crate::model::Session;
use crate::util::{format_number, format_number_precise, format_time};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct MiningViewProps {
    pub session: UseReducerHandle<Session>,
    pub start_mining: Callback<()>,
    pub claim_rewards: Callback<()>,
    pub to_boosts: Callback<()>,
}

#[function_component(MiningView)]
pub fn mining_view(props: &MiningViewProps) -> Html {
    let now_ms = use_state(js_sys::Date::now);
    let show_ranks = use_state(|| false);

    // 1 Hz sampling tick: refresh the clock, everything below derives
    // from (session, now). Cleared on unmount.
    {
        let now_ms = now_ms.clone();
        use_effect_with((), move |_| {
            let window = web_sys::window().expect("no global `window` exists");
            let tick = Closure::wrap(Box::new(move || {
                now_ms.set(js_sys::Date::now());
            }) as Box<dyn FnMut()>);
            let id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick.as_ref().unchecked_ref(),
                    1000,
                )
                .unwrap();
            move || {
                window.clear_interval_with_handle(id);
                drop(tick);
            }
        });
    }

    let cfg = &props.session.config;
    let user = &props.session.user;
    let now = *now_ms;

    let duration = engine::mining_duration(user, now);
    let pending = engine::pending_rewards(cfg, user, now);
    let claimable = engine::can_claim(cfg, user, now);
    let min_time = user.min_claim_time.unwrap_or(cfg.min_claim_time);
    let time_left = min_time.saturating_sub(duration);
    let rate = user.mining_rate.unwrap_or(cfg.base_mining_rate);
    let level = engine::level_progress(cfg, user.xp);
    let rank = engine::rank_for(user.total_earned);

    let start_cb = {
        let cb = props.start_mining.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let claim_cb = {
        let cb = props.claim_rewards.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let boosts_cb = {
        let cb = props.to_boosts.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let open_ranks = {
        let show_ranks = show_ranks.clone();
        Callback::from(move |_| show_ranks.set(true))
    };
    let close_ranks = {
        let show_ranks = show_ranks.clone();
        Callback::from(move |_| show_ranks.set(false))
    };

    let action_button = if !user.is_mining {
        html! {
            <button
                onclick={start_cb}
                style="width:100%; max-width:288px; padding:12px; border-radius:12px; font-weight:700; font-size:16px; border:1px solid #1f6feb; background:#1f6feb; color:#fff; cursor:pointer;"
            >
                {"Start Mining"}
            </button>
        }
    } else {
        let label = if claimable {
            "Claim".to_string()
        } else {
            format!("Wait {}", format_time(time_left))
        };
        let style = if claimable {
            "width:100%; max-width:288px; padding:12px; border-radius:12px; font-weight:700; font-size:16px; border:1px solid #d4a017; background:#f0883e; color:#fff; cursor:pointer;"
        } else {
            "width:100%; max-width:288px; padding:12px; border-radius:12px; font-weight:700; font-size:16px; border:1px solid #30363d; background:#21262d; color:#8b949e; cursor:not-allowed;"
        };
        html! {
            <button onclick={claim_cb} disabled={!claimable} style={style}>{ label }</button>
        }
    };

    html! {
        <div style="position:relative; width:100vw; height:100vh; background:#0d1117; color:#e6edf3; overflow:hidden;">
            <StatsPanel
                balance={user.total_earned}
                rate={rate}
                level={level}
                rank={rank}
                on_open_ranks={open_ranks.clone()}
            />
            <div style="position:absolute; top:12px; right:12px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; padding:8px; min-width:140px; display:flex; flex-direction:column; gap:6px;">
                <button onclick={boosts_cb}>{"Boosts"}</button>
                <button onclick={{
                    let cb = open_ranks.clone();
                    Callback::from(move |_: MouseEvent| cb.emit(()))
                }}>{"Ranks"}</button>
            </div>
            <div style="position:absolute; top:50%; left:50%; transform:translate(-50%, -50%); display:flex; flex-direction:column; align-items:center; gap:10px; width:100%; max-width:320px; text-align:center;">
                <div style="font-size:34px; font-weight:900; font-family:monospace;">
                    { format_number(pending) }{" DRX"}
                </div>
                { if user.is_mining && pending > 0.0 {
                    html! { <div style="background:#1c2128; border:1px solid #d4a017; color:#f0c674; padding:6px 14px; border-radius:9999px; font-size:14px; font-weight:700;">
                        { format!("+{} DRX", format_number_precise(pending)) }
                    </div> }
                } else { html! {} } }
                <div style="display:flex; align-items:center; gap:8px; font-size:14px;">
                    <span style="font-weight:700;">{ format!("{}/s ⚡", format_number_precise(rate)) }</span>
                    { if user.is_mining && time_left > 0 {
                        html! { <span style="color:#58a6ff; font-weight:700;">{ format_time(time_left) }</span> }
                    } else if user.is_mining && claimable {
                        html! { <span style="color:#3fb950; font-weight:700;">{"Ready!"}</span> }
                    } else { html! {} } }
                </div>
                { action_button }
            </div>
            <RankModal
                show={*show_ranks}
                total_earned={user.total_earned}
                on_close={close_ranks}
            />
        </div>
    }
}
