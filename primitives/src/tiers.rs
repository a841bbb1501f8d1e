//! Fee tiers, loyalty ladder and milestone vocabulary shared by the engine and its hosts.

use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

use crate::ecosystem::params::{
  BPS_DENOMINATOR, MAX_COOLDOWN_REDUCTION_PCT, MAX_LOYALTY_FEE_DISCOUNT_BPS,
  MAX_LOYALTY_LUCKY_BONUS_BPS, SWAP_MILESTONES, VOLUME_MILESTONE_BONUS_BPS,
};

/// Per-swap outcome bucket, ordered from most to least favorable.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum TierKind {
  Lucky,
  Discounted,
  Normal,
  Unlucky,
}

impl TierKind {
  /// Selection order used when walking cumulative chances.
  pub const ALL: [TierKind; 4] = [
    TierKind::Lucky,
    TierKind::Discounted,
    TierKind::Normal,
    TierKind::Unlucky,
  ];
}

/// Odds and fee of a single tier, both in basis points.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct Tier {
  pub chance_bps: u16,
  pub fee_bps: u16,
}

impl Tier {
  pub const fn new(chance_bps: u16, fee_bps: u16) -> Self {
    Self {
      chance_bps,
      fee_bps,
    }
  }
}

/// The active four-tier table.
///
/// Chances must sum to exactly [`BPS_DENOMINATOR`]; fees are free-form.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct TierSet {
  pub lucky: Tier,
  pub discounted: Tier,
  pub normal: Tier,
  pub unlucky: Tier,
}

impl Default for TierSet {
  fn default() -> Self {
    Self {
      lucky: Tier::new(500, 0),
      discounted: Tier::new(2_000, 15),
      normal: Tier::new(6_500, 30),
      unlucky: Tier::new(1_000, 100),
    }
  }
}

impl TierSet {
  pub fn tier(&self, kind: TierKind) -> &Tier {
    match kind {
      TierKind::Lucky => &self.lucky,
      TierKind::Discounted => &self.discounted,
      TierKind::Normal => &self.normal,
      TierKind::Unlucky => &self.unlucky,
    }
  }

  fn tier_mut(&mut self, kind: TierKind) -> &mut Tier {
    match kind {
      TierKind::Lucky => &mut self.lucky,
      TierKind::Discounted => &mut self.discounted,
      TierKind::Normal => &mut self.normal,
      TierKind::Unlucky => &mut self.unlucky,
    }
  }

  pub fn chance_sum(&self) -> u32 {
    TierKind::ALL
      .iter()
      .map(|kind| u32::from(self.tier(*kind).chance_bps))
      .sum()
  }

  pub fn has_valid_chances(&self) -> bool {
    self.chance_sum() == u32::from(BPS_DENOMINATOR)
  }

  /// Chances in selection order (Lucky, Discounted, Normal, Unlucky).
  pub fn chances(&self) -> [u16; 4] {
    TierKind::ALL.map(|kind| self.tier(kind).chance_bps)
  }

  /// Fees in selection order (Lucky, Discounted, Normal, Unlucky).
  pub fn fees(&self) -> [u16; 4] {
    TierKind::ALL.map(|kind| self.tier(kind).fee_bps)
  }

  pub fn with_chances(mut self, chances: [u16; 4]) -> Self {
    for (kind, chance) in TierKind::ALL.iter().zip(chances) {
      self.tier_mut(*kind).chance_bps = chance;
    }
    self
  }

  pub fn with_fees(mut self, fees: [u16; 4]) -> Self {
    for (kind, fee) in TierKind::ALL.iter().zip(fees) {
      self.tier_mut(*kind).fee_bps = fee;
    }
    self
  }
}

/// Loyalty classification driven by cumulative swap count.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  Ord,
  PartialEq,
  PartialOrd,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum LoyaltyTier {
  #[default]
  Bronze,
  Silver,
  Gold,
  Diamond,
  Legendary,
}

impl LoyaltyTier {
  /// Ladder order, lowest first.
  pub const ALL: [LoyaltyTier; 5] = [
    LoyaltyTier::Bronze,
    LoyaltyTier::Silver,
    LoyaltyTier::Gold,
    LoyaltyTier::Diamond,
    LoyaltyTier::Legendary,
  ];

  pub fn next(self) -> Option<LoyaltyTier> {
    match self {
      LoyaltyTier::Bronze => Some(LoyaltyTier::Silver),
      LoyaltyTier::Silver => Some(LoyaltyTier::Gold),
      LoyaltyTier::Gold => Some(LoyaltyTier::Diamond),
      LoyaltyTier::Diamond => Some(LoyaltyTier::Legendary),
      LoyaltyTier::Legendary => None,
    }
  }
}

/// Perks and entry threshold of one loyalty level.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct LoyaltyLevel {
  /// Swaps required to reach this level
  pub swap_threshold: u64,
  /// Added to the base Lucky chance
  pub lucky_bonus_bps: u16,
  /// Subtracted from the selected tier's fee
  pub fee_discount_bps: u16,
  /// Percentage shaved off the Lucky cooldown
  pub cooldown_reduction_pct: u8,
}

impl LoyaltyLevel {
  pub const fn new(
    swap_threshold: u64,
    lucky_bonus_bps: u16,
    fee_discount_bps: u16,
    cooldown_reduction_pct: u8,
  ) -> Self {
    Self {
      swap_threshold,
      lucky_bonus_bps,
      fee_discount_bps,
      cooldown_reduction_pct,
    }
  }

  fn within_caps(&self) -> bool {
    self.lucky_bonus_bps <= MAX_LOYALTY_LUCKY_BONUS_BPS
      && self.fee_discount_bps <= MAX_LOYALTY_FEE_DISCOUNT_BPS
      && self.cooldown_reduction_pct <= MAX_COOLDOWN_REDUCTION_PCT
  }
}

/// The five-level loyalty ladder.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub struct LoyaltyConfig {
  pub bronze: LoyaltyLevel,
  pub silver: LoyaltyLevel,
  pub gold: LoyaltyLevel,
  pub diamond: LoyaltyLevel,
  pub legendary: LoyaltyLevel,
}

impl Default for LoyaltyConfig {
  fn default() -> Self {
    Self {
      bronze: LoyaltyLevel::new(0, 0, 0, 0),
      silver: LoyaltyLevel::new(20, 100, 5, 10),
      gold: LoyaltyLevel::new(50, 250, 10, 25),
      diamond: LoyaltyLevel::new(100, 500, 20, 50),
      legendary: LoyaltyLevel::new(500, 1_000, 30, 75),
    }
  }
}

impl LoyaltyConfig {
  pub fn level(&self, tier: LoyaltyTier) -> &LoyaltyLevel {
    match tier {
      LoyaltyTier::Bronze => &self.bronze,
      LoyaltyTier::Silver => &self.silver,
      LoyaltyTier::Gold => &self.gold,
      LoyaltyTier::Diamond => &self.diamond,
      LoyaltyTier::Legendary => &self.legendary,
    }
  }

  /// Bronze starts at zero, thresholds strictly ascend and every perk stays under its cap.
  pub fn is_valid(&self) -> bool {
    if self.bronze.swap_threshold != 0 {
      return false;
    }
    let ascending = LoyaltyTier::ALL
      .windows(2)
      .all(|pair| self.level(pair[0]).swap_threshold < self.level(pair[1]).swap_threshold);
    ascending
      && LoyaltyTier::ALL
        .iter()
        .all(|tier| self.level(*tier).within_caps())
  }
}

/// One-time bonus a trader can earn.
///
/// `Volume(n)` is the n-th complete volume increment, `1..=MAX_VOLUME_MILESTONES`.
#[derive(
  Clone,
  Copy,
  Debug,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  TypeInfo,
  Serialize,
  Deserialize,
)]
pub enum Milestone {
  Swaps50,
  Swaps100,
  Swaps500,
  Volume(u8),
}

impl Milestone {
  /// Swap-count milestones paired with their threshold, in ascending order.
  pub const SWAP_COUNT: [(u64, Milestone); 3] = [
    (SWAP_MILESTONES[0].0, Milestone::Swaps50),
    (SWAP_MILESTONES[1].0, Milestone::Swaps100),
    (SWAP_MILESTONES[2].0, Milestone::Swaps500),
  ];

  /// Position in the reached-set bitmap.
  pub fn bit(&self) -> u32 {
    match self {
      Milestone::Swaps50 => 0,
      Milestone::Swaps100 => 1,
      Milestone::Swaps500 => 2,
      Milestone::Volume(level) => 2 + u32::from(*level),
    }
  }

  pub fn bonus_bps(&self) -> u16 {
    match self {
      Milestone::Swaps50 => SWAP_MILESTONES[0].1,
      Milestone::Swaps100 => SWAP_MILESTONES[1].1,
      Milestone::Swaps500 => SWAP_MILESTONES[2].1,
      Milestone::Volume(_) => VOLUME_MILESTONE_BONUS_BPS,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ecosystem::params::MAX_VOLUME_MILESTONES;

  #[test]
  fn default_tier_set_sums_to_full_scale() {
    let tiers = TierSet::default();
    assert_eq!(tiers.chance_sum(), 10_000);
    assert!(tiers.has_valid_chances());
  }

  #[test]
  fn with_chances_keeps_fees() {
    let tiers = TierSet::default().with_chances([10_000, 0, 0, 0]);
    assert_eq!(tiers.chances(), [10_000, 0, 0, 0]);
    assert_eq!(tiers.fees(), TierSet::default().fees());
    assert!(tiers.has_valid_chances());
    let broken = tiers.with_chances([5_000, 0, 0, 4_999]);
    assert!(!broken.has_valid_chances());
  }

  #[test]
  fn loyalty_tiers_are_ordered() {
    assert!(LoyaltyTier::Bronze < LoyaltyTier::Silver);
    assert!(LoyaltyTier::Diamond < LoyaltyTier::Legendary);
    assert_eq!(LoyaltyTier::Legendary.next(), None);
    assert_eq!(LoyaltyTier::Gold.next(), Some(LoyaltyTier::Diamond));
  }

  #[test]
  fn default_loyalty_config_is_valid() {
    assert!(LoyaltyConfig::default().is_valid());
  }

  #[test]
  fn loyalty_config_rejects_flat_thresholds() {
    let mut config = LoyaltyConfig::default();
    config.gold.swap_threshold = config.silver.swap_threshold;
    assert!(!config.is_valid());
  }

  #[test]
  fn loyalty_config_rejects_nonzero_floor() {
    let mut config = LoyaltyConfig::default();
    config.bronze.swap_threshold = 1;
    assert!(!config.is_valid());
  }

  #[test]
  fn loyalty_config_enforces_caps() {
    let mut config = LoyaltyConfig::default();
    config.legendary.lucky_bonus_bps = 2_001;
    assert!(!config.is_valid());

    let mut config = LoyaltyConfig::default();
    config.diamond.fee_discount_bps = 501;
    assert!(!config.is_valid());

    let mut config = LoyaltyConfig::default();
    config.silver.cooldown_reduction_pct = 91;
    assert!(!config.is_valid());

    let mut config = LoyaltyConfig::default();
    config.legendary = LoyaltyLevel::new(1_000, 2_000, 500, 90);
    assert!(config.is_valid());
  }

  #[test]
  fn milestone_bits_are_unique_and_fit_u64() {
    let mut seen = 0u64;
    let all = Milestone::SWAP_COUNT
      .iter()
      .map(|(_, m)| *m)
      .chain((1..=MAX_VOLUME_MILESTONES).map(Milestone::Volume));
    for milestone in all {
      let bit = milestone.bit();
      assert!(bit < 64);
      assert_eq!(seen & (1 << bit), 0, "duplicate bit for {milestone:?}");
      seen |= 1 << bit;
    }
  }

  #[test]
  fn genesis_types_round_trip_through_json() {
    let tiers = TierSet::default().with_fees([1, 2, 3, 4]);
    let json = serde_json::to_string(&tiers).unwrap();
    let decoded: TierSet = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, tiers);

    let config = LoyaltyConfig::default();
    let json = serde_json::to_string(&config).unwrap();
    let decoded: LoyaltyConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, config);
  }
}
