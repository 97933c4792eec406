//! Progression engine: reward, level, rank and cost math over a user snapshot.
//!
//! Every function here is pure and total. The wall clock is never read
//! internally; callers pass `now_ms` (from `js_sys::Date::now()` in the app,
//! a constant in tests), so equal inputs always produce equal outputs.
//! The engine never mutates `UserState` — all transitions happen in the
//! session store.

use crate::config::GameConfig;
use crate::model::{BoostKind, UserState};

/// Whether a settled session pays the flat daily bonus on top of accrual.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RewardKind {
    Normal,
    Bonus,
}

/// Outcome of settling a mining session of a given duration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RewardResult {
    pub earned: f64,
    pub kind: RewardKind,
    pub xp: u64,
}

/// Position on the level curve derived from cumulative XP.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelProgress {
    pub level: u32,
    /// XP accrued toward the next level.
    pub current_xp: u64,
    /// Requirement for the next level.
    pub xp_for_next: u64,
}

/// Cosmetic tier derived from lifetime earnings.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankInfo {
    pub rank: u32,
    pub title: &'static str,
    /// Threshold of the next tier; the top tier points at its own threshold.
    pub next_rank_at: f64,
    pub icon: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankTier {
    pub threshold: f64,
    pub title: &'static str,
    pub icon: &'static str,
}

/// Rank ladder, ascending. Thresholds are inclusive lower bounds.
pub const RANKS: [RankTier; 11] = [
    RankTier { threshold: 0.0, title: "Rookie Miner", icon: "🥉" },
    RankTier { threshold: 1_000.0, title: "Bronze Miner", icon: "🥉" },
    RankTier { threshold: 5_000.0, title: "Silver Miner", icon: "🥈" },
    RankTier { threshold: 15_000.0, title: "Gold Miner", icon: "🥇" },
    RankTier { threshold: 50_000.0, title: "Platinum Miner", icon: "💎" },
    RankTier { threshold: 150_000.0, title: "Diamond Miner", icon: "💎" },
    RankTier { threshold: 500_000.0, title: "Master Miner", icon: "👑" },
    RankTier { threshold: 1_500_000.0, title: "Grandmaster Miner", icon: "👑" },
    RankTier { threshold: 5_000_000.0, title: "Legend Miner", icon: "🏆" },
    RankTier { threshold: 15_000_000.0, title: "Mythical Miner", icon: "⭐" },
    RankTier { threshold: 50_000_000.0, title: "Ultimate Miner", icon: "🌟" },
];

/// Whole seconds the current session has been running.
/// 0 when idle, when the start stamp is missing, or when the clock reads
/// earlier than the stamp (skew clamps instead of going negative).
pub fn mining_duration(user: &UserState, now_ms: f64) -> u64 {
    if !user.is_mining {
        return 0;
    }
    let Some(start_ms) = user.mining_start_time else {
        return 0;
    };
    let elapsed_ms = now_ms - start_ms;
    if !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
        return 0;
    }
    (elapsed_ms / 1000.0).floor() as u64
}

/// A claim unlocks once the session has run for the user's claim threshold
/// (falling back to the configured default). The boundary is inclusive.
pub fn can_claim(cfg: &GameConfig, user: &UserState, now_ms: f64) -> bool {
    if !user.is_mining || user.mining_start_time.is_none() {
        return false;
    }
    let min_time = user.min_claim_time.unwrap_or(cfg.min_claim_time);
    mining_duration(user, now_ms) >= min_time
}

/// Settle a session of `duration_secs`: linear DRX accrual, time-based XP
/// scaled by the stronger of the two mining boosts (max, not sum, so the
/// tracks do not stack), and the one-time daily bonus at the 24h mark.
/// Accrual past the bonus threshold stays linear.
pub fn mining_rewards(cfg: &GameConfig, user: &UserState, duration_secs: u64) -> RewardResult {
    let rate = user
        .mining_rate
        .filter(|r| r.is_finite() && *r > 0.0)
        .unwrap_or(cfg.base_mining_rate);
    let mut earned = rate * duration_secs as f64;

    // XP per half hour of mining, then the boost multiplier halved.
    let base_xp = (duration_secs as f64 / 1800.0 * cfg.base_xp_reward as f64).floor();
    let boost = user
        .boosts
        .mining_speed_level
        .max(user.boosts.mining_rate_level)
        .max(1);
    let mut xp = (base_xp * boost as f64 * 0.5).floor() as u64;

    let kind = if duration_secs >= cfg.max_mining_time {
        earned += cfg.daily_mining_reward;
        xp += cfg.daily_xp_bonus;
        RewardKind::Bonus
    } else {
        RewardKind::Normal
    };

    RewardResult { earned, kind, xp }
}

/// Live preview of what a claim would pay right now. Grows every second
/// while mining; 0 when idle.
pub fn pending_rewards(cfg: &GameConfig, user: &UserState, now_ms: f64) -> f64 {
    let duration = mining_duration(user, now_ms);
    if duration == 0 {
        return 0.0;
    }
    mining_rewards(cfg, user, duration).earned
}

/// XP required to complete `level`. Level 1 costs 100 and every level after
/// costs ten times the one before. The curve leaves u64 range around level
/// 20 and saturates there rather than overflowing.
pub fn xp_for_level(level: u32) -> u64 {
    10u64
        .checked_pow(level.saturating_sub(1))
        .and_then(|p| p.checked_mul(100))
        .unwrap_or(u64::MAX)
}

/// Walk cumulative XP up the curve: level = highest fully completed level
/// plus one, capped at `cfg.max_level`. Requirement growth is monotonic so
/// the loop always terminates.
pub fn level_progress(cfg: &GameConfig, total_xp: u64) -> LevelProgress {
    let mut level = 1u32;
    let mut remaining = total_xp;
    while level < cfg.max_level && remaining >= xp_for_level(level) {
        remaining -= xp_for_level(level);
        level += 1;
    }
    LevelProgress {
        level,
        current_xp: remaining,
        xp_for_next: xp_for_level(level),
    }
}

/// Highest tier whose threshold the lifetime total has reached. The top tier
/// is terminal: its `next_rank_at` points at its own threshold.
pub fn rank_for(total_earned: f64) -> RankInfo {
    let earned = if total_earned.is_finite() { total_earned } else { 0.0 };
    let mut rank = 1u32;
    let mut tier = &RANKS[0];
    let mut next_rank_at = RANKS[1].threshold;
    for (i, t) in RANKS.iter().enumerate() {
        if earned >= t.threshold {
            rank = (i + 1) as u32;
            tier = t;
            next_rank_at = match RANKS.get(i + 1) {
                Some(next) => next.threshold,
                None => t.threshold,
            };
        } else {
            break;
        }
    }
    RankInfo {
        rank,
        title: tier.title,
        next_rank_at,
        icon: tier.icon,
    }
}

/// Cost of raising a boost from `current_level`: the kind's base cost doubled
/// for every level already bought. Saturates instead of overflowing.
pub fn boost_cost(cfg: &GameConfig, kind: BoostKind, current_level: u32) -> u64 {
    let base = match kind {
        BoostKind::MiningSpeed => cfg.mining_speed_cost,
        BoostKind::ClaimTime => cfg.claim_time_cost,
        BoostKind::MiningRate => cfg.mining_rate_cost,
    };
    2u64.checked_pow(current_level.saturating_sub(1))
        .and_then(|m| m.checked_mul(base))
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Boosts;

    fn cfg() -> GameConfig {
        GameConfig::default()
    }

    fn miner(start_ms: f64) -> UserState {
        UserState {
            is_mining: true,
            mining_start_time: Some(start_ms),
            ..Default::default()
        }
    }

    #[test]
    fn test_earned_is_rate_times_duration() {
        let user = UserState::default();
        let r = mining_rewards(&cfg(), &user, 500);
        assert!((r.earned - 0.001 * 500.0).abs() < 1e-12);
        assert_eq!(r.kind, RewardKind::Normal);

        let fast = UserState {
            mining_rate: Some(0.5),
            ..Default::default()
        };
        let r = mining_rewards(&cfg(), &fast, 120);
        assert!((r.earned - 60.0).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_rate_falls_back_to_base() {
        let user = UserState {
            mining_rate: Some(f64::NAN),
            ..Default::default()
        };
        let r = mining_rewards(&cfg(), &user, 1000);
        assert!((r.earned - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_daily_bonus_at_24h() {
        let user = UserState::default();
        let r = mining_rewards(&cfg(), &user, 86_400);
        assert_eq!(r.kind, RewardKind::Bonus);
        // 86.4 DRX of accrual plus the flat 100 DRX bonus.
        assert!((r.earned - (86.4 + 100.0)).abs() < 1e-9);
        // floor(86400/1800 * 30) = 1440, halved at boost level 1, plus 100.
        assert_eq!(r.xp, 720 + 100);

        // One second short: normal claim, no bonus XP.
        let r = mining_rewards(&cfg(), &user, 86_399);
        assert_eq!(r.kind, RewardKind::Normal);
    }

    #[test]
    fn test_no_clamp_past_24h() {
        let user = UserState::default();
        let day = mining_rewards(&cfg(), &user, 86_400);
        let two_days = mining_rewards(&cfg(), &user, 2 * 86_400);
        // Accrual keeps growing linearly; the flat bonus is paid once.
        assert!((two_days.earned - day.earned - 86.4).abs() < 1e-9);
        assert_eq!(two_days.kind, RewardKind::Bonus);
    }

    #[test]
    fn test_xp_uses_stronger_boost() {
        let mut user = UserState::default();
        user.boosts = Boosts {
            mining_speed_level: 3,
            mining_rate_level: 5,
            claim_time_level: 1,
        };
        // floor(3600/1800 * 30) = 60, then floor(60 * 5 * 0.5) = 150.
        let r = mining_rewards(&cfg(), &user, 3600);
        assert_eq!(r.xp, 150);

        // Swapping the two levels changes nothing: max, not sum.
        user.boosts.mining_speed_level = 5;
        user.boosts.mining_rate_level = 3;
        assert_eq!(mining_rewards(&cfg(), &user, 3600).xp, 150);
    }

    #[test]
    fn test_duration_and_clock_skew() {
        let user = miner(1_000_000.0);
        assert_eq!(mining_duration(&user, 1_000_000.0 + 65_500.0), 65);
        // Clock behind the start stamp clamps to zero.
        assert_eq!(mining_duration(&user, 999_000.0), 0);
        // Idle users have no duration regardless of the stamp.
        let idle = UserState {
            mining_start_time: Some(0.0),
            ..Default::default()
        };
        assert_eq!(mining_duration(&idle, 1e12), 0);
    }

    #[test]
    fn test_claim_boundary_inclusive() {
        let user = miner(0.0);
        assert!(!can_claim(&cfg(), &user, 299_999.0));
        assert!(can_claim(&cfg(), &user, 300_000.0));
        assert!(!can_claim(&cfg(), &UserState::default(), 1e12));

        // Per-user threshold overrides the default.
        let quick = UserState {
            min_claim_time: Some(60),
            ..miner(0.0)
        };
        assert!(can_claim(&cfg(), &quick, 60_000.0));
    }

    #[test]
    fn test_pending_rewards_idempotent() {
        let user = miner(0.0);
        let a = pending_rewards(&cfg(), &user, 450_000.0);
        let b = pending_rewards(&cfg(), &user, 450_000.0);
        assert_eq!(a, b);
        assert!((a - 0.45).abs() < 1e-12);
        assert_eq!(pending_rewards(&cfg(), &UserState::default(), 450_000.0), 0.0);
    }

    #[test]
    fn test_xp_curve_tenfold() {
        assert_eq!(xp_for_level(1), 100);
        assert_eq!(xp_for_level(2), 1_000);
        for level in 2..15 {
            assert_eq!(xp_for_level(level), xp_for_level(level - 1) * 10);
        }
        // Deep levels saturate instead of overflowing.
        assert_eq!(xp_for_level(40), u64::MAX);
    }

    #[test]
    fn test_level_progress() {
        let cfg = cfg();
        let p = level_progress(&cfg, 0);
        assert_eq!((p.level, p.current_xp, p.xp_for_next), (1, 0, 100));

        let p = level_progress(&cfg, 99);
        assert_eq!((p.level, p.current_xp), (1, 99));

        // Exactly one full level: 100 XP completes level 1.
        let p = level_progress(&cfg, 100);
        assert_eq!((p.level, p.current_xp, p.xp_for_next), (2, 0, 1_000));

        let p = level_progress(&cfg, 1_150);
        assert_eq!((p.level, p.current_xp, p.xp_for_next), (3, 50, 10_000));
    }

    #[test]
    fn test_level_progress_inverse_consistent() {
        let cfg = cfg();
        for total in [0u64, 1, 99, 100, 1_099, 1_100, 11_100, 123_456_789] {
            let p = level_progress(&cfg, total);
            let spent: u64 = (1..p.level).map(xp_for_level).sum();
            assert_eq!(spent + p.current_xp, total, "total {}", total);
        }
    }

    #[test]
    fn test_rank_ladder() {
        let r = rank_for(0.0);
        assert_eq!((r.rank, r.title), (1, "Rookie Miner"));
        assert_eq!(r.next_rank_at, 1_000.0);

        // A value exactly on a threshold belongs to that tier.
        let r = rank_for(1_000.0);
        assert_eq!((r.rank, r.title), (2, "Bronze Miner"));

        let r = rank_for(999.9);
        assert_eq!(r.rank, 1);

        // Terminal tier points at its own threshold.
        let r = rank_for(50_000_000.0);
        assert_eq!((r.rank, r.title), (11, "Ultimate Miner"));
        assert_eq!(r.next_rank_at, 50_000_000.0);
        assert_eq!(rank_for(9e99).rank, 11);

        // Garbage input ranks as the first tier.
        assert_eq!(rank_for(-5.0).rank, 1);
        assert_eq!(rank_for(f64::NAN).rank, 1);
    }

    #[test]
    fn test_boost_cost_doubles() {
        let cfg = cfg();
        assert_eq!(boost_cost(&cfg, BoostKind::MiningSpeed, 1), 100);
        assert_eq!(boost_cost(&cfg, BoostKind::MiningSpeed, 2), 200);
        assert_eq!(boost_cost(&cfg, BoostKind::MiningSpeed, 5), 1_600);
        assert_eq!(boost_cost(&cfg, BoostKind::ClaimTime, 1), 150);
        assert_eq!(boost_cost(&cfg, BoostKind::MiningRate, 1), 200);
        assert_eq!(boost_cost(&cfg, BoostKind::MiningRate, 3), 800);
        // Absurd levels saturate.
        assert_eq!(boost_cost(&cfg, BoostKind::MiningRate, 200), u64::MAX);
    }
}
