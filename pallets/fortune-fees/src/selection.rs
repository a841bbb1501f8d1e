//! Tier selection by cumulative-probability bucketing.

use primitives::params::MAX_LUCKY_CHANCE_BPS;

use crate::{
  loyalty,
  types::{LoyaltyConfig, LoyaltyData, TierKind, TierSet},
};

/// Selected tier and the fee to charge after the loyalty discount.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TierSelection {
  pub tier: TierKind,
  pub fee_bps: u16,
}

/// Lucky chance after loyalty and milestone bonuses.
///
/// Bonuses stop at [`MAX_LUCKY_CHANCE_BPS`]; a base chance already above the cap is kept.
pub fn adjusted_lucky_chance(base_bps: u16, bonus_bps: u16) -> u16 {
  let ceiling = MAX_LUCKY_CHANCE_BPS.max(base_bps);
  base_bps.saturating_add(bonus_bps).min(ceiling)
}

/// Map `roll` onto a tier.
///
/// Buckets are half-open and walked Lucky, Discounted, Normal, Unlucky. A roll past every
/// bucket lands on Unlucky.
pub fn select_tier(
  roll: u16,
  tiers: &TierSet,
  data: &LoyaltyData,
  config: &LoyaltyConfig,
) -> TierSelection {
  let lucky_chance =
    adjusted_lucky_chance(tiers.lucky.chance_bps, loyalty::lucky_bonus(data, config));
  let roll = u32::from(roll);
  let mut upper = 0u32;
  let tier = TierKind::ALL
    .into_iter()
    .find(|kind| {
      let chance = match kind {
        TierKind::Lucky => lucky_chance,
        other => tiers.tier(*other).chance_bps,
      };
      upper += u32::from(chance);
      roll < upper
    })
    .unwrap_or(TierKind::Unlucky);

  let fee_bps = tiers
    .tier(tier)
    .fee_bps
    .saturating_sub(loyalty::fee_discount(data, config));
  TierSelection { tier, fee_bps }
}
