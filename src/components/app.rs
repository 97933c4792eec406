use super::{boosts_view::BoostsView, mining_view::MiningView};
use crate::model::{BoostKind, Session, SessionAction, UserState};
use crate::util::{clog, format_number_precise};
use yew::prelude::*;

const USER_KEY: &str = "drx_user";

#[derive(PartialEq, Clone)]
enum View {
    Mine,
    Boosts,
}

#[function_component(App)]
pub fn app() -> Html {
    let view = use_state(|| View::Mine);
    let session = use_reducer(Session::new);
    let last_balance = use_mut_ref(|| None::<f64>);

    // Load the persisted user record once on mount.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(raw)) = store.get_item(USER_KEY) {
                        if let Ok(user) = serde_json::from_str::<UserState>(&raw) {
                            session.dispatch(SessionAction::LoadUser(user));
                        }
                    }
                }
            }
            || ()
        });
    }

    // Persist every user change. A failed save is dropped; the session
    // keeps running on the in-memory record.
    {
        let user = session.user.clone();
        use_effect_with(user, move |user| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(s) = serde_json::to_string(user) {
                        let _ = store.set_item(USER_KEY, &s);
                    }
                }
            }
            || ()
        });
    }

    // Log balance movements (claims, purchases) to the console.
    {
        let last_balance = last_balance.clone();
        let balance = session.user.total_earned;
        use_effect_with(balance, move |b| {
            let mut prev = last_balance.borrow_mut();
            if let Some(p) = *prev {
                if p != *b {
                    clog(&format!(
                        "balance: {} -> {}",
                        format_number_precise(p),
                        format_number_precise(*b)
                    ));
                }
            }
            *prev = Some(*b);
            || ()
        });
    }

    let to_mine = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Mine))
    };
    let to_boosts = {
        let view = view.clone();
        Callback::from(move |_| view.set(View::Boosts))
    };

    let start_mining = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::StartMining {
                now_ms: js_sys::Date::now(),
            });
        })
    };
    let claim_rewards = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::ClaimRewards {
                now_ms: js_sys::Date::now(),
            });
        })
    };
    let buy_boost = {
        let session = session.clone();
        Callback::from(move |kind: BoostKind| {
            session.dispatch(SessionAction::BuyBoost { kind });
        })
    };
    let reset = {
        let session = session.clone();
        Callback::from(move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = store.remove_item(USER_KEY);
                }
            }
            session.dispatch(SessionAction::Reset);
        })
    };

    let content = match *view {
        View::Mine => html! { <MiningView
            session={session.clone()}
            start_mining={start_mining.clone()}
            claim_rewards={claim_rewards.clone()}
            to_boosts={to_boosts.clone()}
        /> },
        View::Boosts => html! { <BoostsView
            session={session.clone()}
            buy_boost={buy_boost.clone()}
            to_mine={to_mine.clone()}
            reset={reset.clone()}
        /> },
    };

    html! { <div id="root">{ content }</div> }
}
