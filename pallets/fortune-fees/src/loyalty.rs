//! Loyalty ledger: tier lookup, perks and per-swap progression.

use alloc::vec::Vec;
use primitives::params::MAX_VOLUME_MILESTONES;

use crate::types::{LoyaltyConfig, LoyaltyData, LoyaltyStats, LoyaltyTier, Milestone};

/// What changed while recording one swap.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoyaltyProgress {
  pub upgraded: Option<LoyaltyTier>,
  pub milestones: Vec<Milestone>,
}

/// Highest level whose threshold is at or below `swap_count`; Bronze is the floor.
pub fn tier_for_swaps(swap_count: u64, config: &LoyaltyConfig) -> LoyaltyTier {
  LoyaltyTier::ALL
    .iter()
    .rev()
    .find(|tier| config.level(**tier).swap_threshold <= swap_count)
    .copied()
    .unwrap_or_default()
}

pub fn tier_of(data: &LoyaltyData, config: &LoyaltyConfig) -> LoyaltyTier {
  tier_for_swaps(data.swap_count, config)
}

/// Level bonus plus every milestone bonus earned so far.
pub fn lucky_bonus(data: &LoyaltyData, config: &LoyaltyConfig) -> u16 {
  config
    .level(data.current_tier)
    .lucky_bonus_bps
    .saturating_add(data.milestone_bonus_bps)
}

pub fn fee_discount(data: &LoyaltyData, config: &LoyaltyConfig) -> u16 {
  config.level(data.current_tier).fee_discount_bps
}

pub fn cooldown_reduction(data: &LoyaltyData, config: &LoyaltyConfig) -> u8 {
  config.level(data.current_tier).cooldown_reduction_pct
}

pub fn stats_of(data: &LoyaltyData, config: &LoyaltyConfig) -> LoyaltyStats {
  let level = config.level(data.current_tier);
  LoyaltyStats {
    tier: data.current_tier,
    swaps: data.swap_count,
    volume: data.total_volume,
    lucky_bonus_bps: level.lucky_bonus_bps,
    fee_discount_bps: level.fee_discount_bps,
    cooldown_reduction_pct: level.cooldown_reduction_pct,
    milestone_bonus_bps: data.milestone_bonus_bps,
  }
}

pub fn swaps_until_next_tier(data: &LoyaltyData, config: &LoyaltyConfig) -> u64 {
  match data.current_tier.next() {
    Some(next) => config
      .level(next)
      .swap_threshold
      .saturating_sub(data.swap_count),
    None => 0,
  }
}

/// Count one completed swap of `volume` and apply any upgrade or milestone it unlocks.
pub fn record_swap(
  data: &mut LoyaltyData,
  config: &LoyaltyConfig,
  volume: u128,
  volume_unit: u128,
) -> LoyaltyProgress {
  data.swap_count = data.swap_count.saturating_add(1);
  data.total_volume = data.total_volume.saturating_add(volume);

  let mut progress = LoyaltyProgress::default();
  let tier = tier_of(data, config);
  if tier > data.current_tier {
    data.current_tier = tier;
    progress.upgraded = Some(tier);
  }
  progress.milestones = reach_milestones(data, volume_unit);
  progress
}

/// Grant every milestone the record qualifies for and has not reached yet.
///
/// Idempotent: a second call on the same record grants nothing.
pub fn reach_milestones(data: &mut LoyaltyData, volume_unit: u128) -> Vec<Milestone> {
  let mut reached = Vec::new();
  for (threshold, milestone) in Milestone::SWAP_COUNT {
    if data.swap_count >= threshold && !data.has_reached(milestone) {
      data.mark_reached(milestone);
      reached.push(milestone);
    }
  }

  let levels = data
    .total_volume
    .checked_div(volume_unit)
    .unwrap_or_default()
    .min(u128::from(MAX_VOLUME_MILESTONES)) as u8;
  for level in 1..=levels {
    let milestone = Milestone::Volume(level);
    if !data.has_reached(milestone) {
      data.mark_reached(milestone);
      reached.push(milestone);
    }
  }
  reached
}

#[cfg(test)]
mod tests {
  use super::*;

  fn record(swap_count: u64) -> LoyaltyData {
    LoyaltyData {
      swap_count,
      ..Default::default()
    }
  }

  #[test]
  fn tier_follows_thresholds() {
    let config = LoyaltyConfig::default();
    assert_eq!(tier_for_swaps(0, &config), LoyaltyTier::Bronze);
    assert_eq!(tier_for_swaps(19, &config), LoyaltyTier::Bronze);
    assert_eq!(tier_for_swaps(20, &config), LoyaltyTier::Silver);
    assert_eq!(tier_for_swaps(50, &config), LoyaltyTier::Gold);
    assert_eq!(tier_for_swaps(499, &config), LoyaltyTier::Diamond);
    assert_eq!(tier_for_swaps(u64::MAX, &config), LoyaltyTier::Legendary);
  }

  #[test]
  fn tier_is_monotonic_in_swap_count() {
    let config = LoyaltyConfig::default();
    let mut previous = LoyaltyTier::Bronze;
    for swaps in 0..600 {
      let tier = tier_for_swaps(swaps, &config);
      assert!(tier >= previous);
      previous = tier;
    }
  }

  #[test]
  fn swaps_until_next_tier_counts_down() {
    let config = LoyaltyConfig::default();
    assert_eq!(swaps_until_next_tier(&record(0), &config), 20);
    assert_eq!(swaps_until_next_tier(&record(19), &config), 1);
    let legendary = LoyaltyData {
      swap_count: 900,
      current_tier: LoyaltyTier::Legendary,
      ..Default::default()
    };
    assert_eq!(swaps_until_next_tier(&legendary, &config), 0);
  }

  #[test]
  fn upgrade_is_reported_once() {
    let config = LoyaltyConfig::default();
    let mut data = record(19);
    let progress = record_swap(&mut data, &config, 1, 100);
    assert_eq!(progress.upgraded, Some(LoyaltyTier::Silver));
    assert_eq!(data.current_tier, LoyaltyTier::Silver);
    let progress = record_swap(&mut data, &config, 1, 100);
    assert_eq!(progress.upgraded, None);
  }

  #[test]
  fn cached_tier_never_drops_when_thresholds_rise() {
    let mut config = LoyaltyConfig::default();
    let mut data = record(25);
    data.current_tier = LoyaltyTier::Silver;
    config.silver.swap_threshold = 40;
    config.gold.swap_threshold = 60;
    let progress = record_swap(&mut data, &config, 0, 100);
    assert_eq!(progress.upgraded, None);
    assert_eq!(data.current_tier, LoyaltyTier::Silver);
  }

  #[test]
  fn swap_count_milestones_fire_once() {
    let config = LoyaltyConfig::default();
    let mut data = record(49);
    let progress = record_swap(&mut data, &config, 0, 100);
    assert_eq!(progress.milestones, vec![Milestone::Swaps50]);
    assert_eq!(data.milestone_bonus_bps, 100);
    assert!(reach_milestones(&mut data, 100).is_empty());
    assert_eq!(data.milestone_bonus_bps, 100);

    data.swap_count = 499;
    let progress = record_swap(&mut data, &config, 0, 100);
    assert_eq!(
      progress.milestones,
      vec![Milestone::Swaps100, Milestone::Swaps500]
    );
    assert_eq!(data.milestone_bonus_bps, 800);
  }

  #[test]
  fn volume_milestones_are_per_level_and_capped() {
    let mut data = LoyaltyData {
      total_volume: 250,
      ..Default::default()
    };
    let reached = reach_milestones(&mut data, 100);
    assert_eq!(reached, vec![Milestone::Volume(1), Milestone::Volume(2)]);
    assert_eq!(data.milestone_bonus_bps, 40);

    data.total_volume = 10_000_000;
    let reached = reach_milestones(&mut data, 100);
    assert_eq!(reached.len(), 48);
    assert_eq!(reached.last(), Some(&Milestone::Volume(50)));
    assert_eq!(data.milestone_bonus_bps, 1_000);
    assert!(reach_milestones(&mut data, 100).is_empty());
  }

  #[test]
  fn zero_volume_unit_disables_volume_milestones() {
    let mut data = LoyaltyData {
      total_volume: 1_000,
      ..Default::default()
    };
    assert!(reach_milestones(&mut data, 0).is_empty());
  }

  #[test]
  fn perks_follow_cached_tier_and_milestones() {
    let config = LoyaltyConfig::default();
    let data = LoyaltyData {
      swap_count: 60,
      current_tier: LoyaltyTier::Gold,
      milestone_bonus_bps: 100,
      ..Default::default()
    };
    assert_eq!(lucky_bonus(&data, &config), 350);
    assert_eq!(fee_discount(&data, &config), 10);
    assert_eq!(cooldown_reduction(&data, &config), 25);
    let stats = stats_of(&data, &config);
    assert_eq!(stats.tier, LoyaltyTier::Gold);
    assert_eq!(stats.swaps, 60);
    assert_eq!(stats.milestone_bonus_bps, 100);
  }
}
