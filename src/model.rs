//! User snapshot and the session store that owns it.
//!
//! The engine reads `UserState` through a shared reference and never writes
//! it. Every state transition (start mining, claim, boost purchase) goes
//! through the `Session` reducer, so claims for a user cannot interleave.

use crate::config::GameConfig;
use crate::engine;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use yew::Reducible;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoostKind {
    MiningSpeed,
    ClaimTime,
    MiningRate,
}

impl BoostKind {
    pub const ALL: [BoostKind; 3] = [
        BoostKind::MiningSpeed,
        BoostKind::ClaimTime,
        BoostKind::MiningRate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BoostKind::MiningSpeed => "Mining Speed",
            BoostKind::ClaimTime => "Claim Time",
            BoostKind::MiningRate => "Mining Rate",
        }
    }

    pub fn effect_line(self) -> &'static str {
        match self {
            BoostKind::MiningSpeed => "Raises the XP multiplier applied to every claim.",
            BoostKind::ClaimTime => "Shortens the wait before a claim unlocks.",
            BoostKind::MiningRate => "Multiplies the DRX earned per second.",
        }
    }
}

/// Purchased boost levels. Every track starts at level 1 (unboosted).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boosts {
    pub mining_speed_level: u32,
    pub mining_rate_level: u32,
    pub claim_time_level: u32,
}

impl Default for Boosts {
    fn default() -> Self {
        Self {
            mining_speed_level: 1,
            mining_rate_level: 1,
            claim_time_level: 1,
        }
    }
}

impl Boosts {
    pub fn level(&self, kind: BoostKind) -> u32 {
        match kind {
            BoostKind::MiningSpeed => self.mining_speed_level,
            BoostKind::ClaimTime => self.claim_time_level,
            BoostKind::MiningRate => self.mining_rate_level,
        }
    }
}

/// The authoritative user record. Read-only to the engine.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub is_mining: bool,
    /// Epoch milliseconds; set iff `is_mining`.
    pub mining_start_time: Option<f64>,
    /// DRX per second; `None` falls back to the configured base rate.
    pub mining_rate: Option<f64>,
    /// Seconds before a claim unlocks; `None` falls back to config.
    pub min_claim_time: Option<u64>,
    /// Lifetime DRX total; doubles as the spendable balance.
    pub total_earned: f64,
    pub xp: u64,
    pub boosts: Boosts,
}

impl UserState {
    /// Fresh account with the welcome bonus applied.
    pub fn fresh(cfg: &GameConfig) -> Self {
        Self {
            total_earned: cfg.welcome_bonus,
            ..Default::default()
        }
    }
}

/// Reducer-owned session: the config plus the user record it governs.
#[derive(Clone, Debug, PartialEq)]
pub struct Session {
    pub config: GameConfig,
    pub user: UserState,
}

impl Session {
    pub fn new() -> Self {
        let config = GameConfig::default();
        let user = UserState::fresh(&config);
        Self { config, user }
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    /// Replace the user with a persisted snapshot.
    LoadUser(UserState),
    StartMining { now_ms: f64 },
    ClaimRewards { now_ms: f64 },
    BuyBoost { kind: BoostKind },
    Reset,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: SessionAction) -> Rc<Self> {
        use SessionAction::*;
        let mut new = (*self).clone();
        match action {
            LoadUser(user) => {
                new.user = user;
            }
            StartMining { now_ms } => {
                if new.user.is_mining {
                    return self;
                }
                new.user.is_mining = true;
                new.user.mining_start_time = Some(now_ms);
            }
            ClaimRewards { now_ms } => {
                if !engine::can_claim(&new.config, &new.user, now_ms) {
                    return self;
                }
                let duration = engine::mining_duration(&new.user, now_ms);
                let reward = engine::mining_rewards(&new.config, &new.user, duration);
                new.user.total_earned += reward.earned;
                new.user.xp = new.user.xp.saturating_add(reward.xp);
                new.user.is_mining = false;
                new.user.mining_start_time = None;
            }
            BuyBoost { kind } => {
                let level = new.user.boosts.level(kind);
                let cost = engine::boost_cost(&new.config, kind, level) as f64;
                if new.user.total_earned < cost {
                    return self;
                }
                new.user.total_earned -= cost;
                let next = level.saturating_add(1);
                match kind {
                    BoostKind::MiningSpeed => {
                        new.user.boosts.mining_speed_level = next;
                    }
                    BoostKind::MiningRate => {
                        new.user.boosts.mining_rate_level = next;
                        new.user.mining_rate = Some(new.config.base_mining_rate * next as f64);
                    }
                    BoostKind::ClaimTime => {
                        new.user.boosts.claim_time_level = next;
                        let cut = new.config.claim_time_step.saturating_mul((next - 1) as u64);
                        new.user.min_claim_time = Some(
                            new.config
                                .min_claim_time
                                .saturating_sub(cut)
                                .max(new.config.claim_time_floor),
                        );
                    }
                }
            }
            Reset => {
                new.user = UserState::fresh(&new.config);
            }
        }
        Rc::new(new)
    }
}

// TODO: sync the session with a remote account service once one exists;
// localStorage is the only store for now.
