//! Ecosystem Constants for the Fortune Fees engine
//!
//! This module centralizes the fixed economic parameters of the fee lottery: the basis-point
//! scale, the hard caps that keep the game balanced, the milestone table and the defaults a
//! runtime starts from.
//!
//! These constants are the single source of truth and are re-used by the pallet, its mock
//! runtime and any runtime configuration via the primitives crate.

use sp_arithmetic::{Rounding, helpers_128bit::multiply_by_rational_with_rounding};

/// Balance type alias for consistency across ecosystem
pub type Balance = u128;

/// `amount * bps / 10_000`, rounded down.
///
/// `bps` may exceed the full scale. Saturates at `Balance::MAX` instead of overflowing.
pub fn apply_bps(amount: Balance, bps: u16) -> Balance {
  multiply_by_rational_with_rounding(
    amount,
    Balance::from(bps),
    Balance::from(params::BPS_DENOMINATOR),
    Rounding::Down,
  )
  .unwrap_or(Balance::MAX)
}

/// Ecosystem parameters defining mathematical constants and thresholds.
pub mod params {
  /// Basis-point denominator (10_000 bps = 100%).
  pub const BPS_DENOMINATOR: u16 = 10_000;

  /// Upper bound of a roll; rolls are drawn from `[0, ROLL_RANGE)`.
  pub const ROLL_RANGE: u16 = BPS_DENOMINATOR;

  /// Hard cap on the loyalty-boosted Lucky chance (30%).
  ///
  /// Loyalty and milestone bonuses stop adding odds past this point. A base Lucky chance
  /// configured above the cap is left as configured.
  pub const MAX_LUCKY_CHANCE_BPS: u16 = 3_000;

  /// Maximum Lucky bonus a loyalty level may grant (20%).
  pub const MAX_LOYALTY_LUCKY_BONUS_BPS: u16 = 2_000;

  /// Maximum fee discount a loyalty level may grant (5%).
  pub const MAX_LOYALTY_FEE_DISCOUNT_BPS: u16 = 500;

  /// Maximum cooldown reduction a loyalty level may grant (90%).
  pub const MAX_COOLDOWN_REDUCTION_PCT: u8 = 90;

  /// Swap-count milestones: (swap count, bonus bps).
  pub const SWAP_MILESTONES: [(u64, u16); 3] = [(50, 100), (100, 200), (500, 500)];

  /// Bonus granted for each complete volume increment.
  pub const VOLUME_MILESTONE_BONUS_BPS: u16 = 20;

  /// Ceiling on the number of volume increments that earn a bonus.
  pub const MAX_VOLUME_MILESTONES: u8 = 50;

  /// Default Lucky cooldown (one hour, in seconds).
  pub const DEFAULT_COOLDOWN_SECS: u64 = 3_600;

  /// Default share of the Unlucky fee that is burned (50%).
  pub const DEFAULT_BURN_SHARE_BPS: u16 = 5_000;
}
