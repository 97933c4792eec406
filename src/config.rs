//! Tunable game constants.
//! Everything the engine and session store read lives here so balance
//! changes never touch code. The struct serializes so a hosted build can
//! ship overrides as JSON.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// DRX per second when the user has no stored rate.
    pub base_mining_rate: f64,
    /// Seconds of mining before a claim unlocks.
    pub min_claim_time: u64,
    /// Session length (seconds) at which the daily bonus pays out.
    pub max_mining_time: u64,
    /// Flat DRX added when a session reaches `max_mining_time`.
    pub daily_mining_reward: f64,
    /// Flat XP added when a session reaches `max_mining_time`.
    pub daily_xp_bonus: u64,
    /// XP per 30 minutes of mining, before boost scaling.
    pub base_xp_reward: u64,
    /// Hard ceiling for the level curve.
    pub max_level: u32,
    /// DRX granted to a brand-new account.
    pub welcome_bonus: f64,
    // Boost base costs; each purchase doubles the next one.
    pub mining_speed_cost: u64,
    pub claim_time_cost: u64,
    pub mining_rate_cost: u64,
    /// Seconds shaved off the claim threshold per claim-time boost level.
    pub claim_time_step: u64,
    /// The claim threshold never drops below this.
    pub claim_time_floor: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            base_mining_rate: 0.001,
            min_claim_time: 300,
            max_mining_time: 86_400,
            daily_mining_reward: 100.0,
            daily_xp_bonus: 100,
            base_xp_reward: 30,
            max_level: 50,
            welcome_bonus: 100.0,
            mining_speed_cost: 100,
            claim_time_cost: 150,
            mining_rate_cost: 200,
            claim_time_step: 30,
            claim_time_floor: 60,
        }
    }
}
