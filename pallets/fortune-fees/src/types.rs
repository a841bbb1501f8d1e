use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use polkadot_sdk::sp_runtime::{DispatchError, DispatchResult, RuntimeDebug};
use scale_info::TypeInfo;

pub use primitives::{
  AssetKind, LoyaltyConfig, LoyaltyLevel, LoyaltyTier, Milestone, SwapDirection, Tier, TierKind,
  TierSet,
};

/// Caller-chosen nonce that, together with the trader, identifies one swap.
pub type Salt = [u8; 32];

/// Per-trader loyalty record.
///
/// Created zero-valued on first access and only ever moved forward by
/// [`crate::loyalty::record_swap`].
#[derive(
  Clone,
  Copy,
  Decode,
  DecodeWithMemTracking,
  Default,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  RuntimeDebug,
  TypeInfo,
)]
pub struct LoyaltyData {
  pub swap_count: u64,
  pub total_volume: u128,
  /// Cached tier, never decreases
  pub current_tier: LoyaltyTier,
  pub milestone_bonus_bps: u16,
  /// Bitmap indexed by [`Milestone::bit`]
  pub milestones_reached: u64,
}

impl LoyaltyData {
  pub fn has_reached(&self, milestone: Milestone) -> bool {
    self.milestones_reached & (1u64 << milestone.bit()) != 0
  }

  pub(crate) fn mark_reached(&mut self, milestone: Milestone) {
    self.milestones_reached |= 1u64 << milestone.bit();
    self.milestone_bonus_bps = self
      .milestone_bonus_bps
      .saturating_add(milestone.bonus_bps());
  }
}

/// Read-only snapshot of a trader's loyalty standing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LoyaltyStats {
  pub tier: LoyaltyTier,
  pub swaps: u64,
  pub volume: u128,
  pub lucky_bonus_bps: u16,
  pub fee_discount_bps: u16,
  pub cooldown_reduction_pct: u8,
  pub milestone_bonus_bps: u16,
}

/// Tier decided in the pre-swap phase, waiting for settlement.
#[derive(
  Clone,
  Copy,
  Decode,
  DecodeWithMemTracking,
  Encode,
  Eq,
  MaxEncodedLen,
  PartialEq,
  RuntimeDebug,
  TypeInfo,
)]
pub struct PendingTierResult {
  pub tier: TierKind,
  pub fee_bps: u16,
  pub burn_asset: AssetKind,
}

/// Realized, absolute token flows reported by the host after settlement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct SwapDelta {
  /// Amount of `SwapDirection::asset_in` that entered the pool
  pub amount_in: u128,
  /// Amount of `SwapDirection::asset_out` that left the pool. Informational only: burns
  /// and loyalty volume are settled on `amount_in`.
  pub amount_out: u128,
}

impl SwapDelta {
  pub fn new(amount_in: u128, amount_out: u128) -> Self {
    Self {
      amount_in,
      amount_out,
    }
  }
}

/// Handle returned by the pre-swap phase and consumed by the post-swap phase.
#[must_use = "a swap ticket must be settled to release its pending tier"]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapTicket<AccountId, Hash> {
  pub trader: AccountId,
  pub salt: Salt,
  pub swap_id: Hash,
  pub tier: TierKind,
  /// Fee the host must charge, in bps of the input amount
  pub fee_bps: u16,
}

/// Burn slice the host has to account for.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BurnInstruction<AccountId> {
  pub asset: AssetKind,
  pub amount: u128,
  pub destination: AccountId,
}

/// Outcome of a settled swap.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SwapSettlement<AccountId> {
  pub tier: TierKind,
  pub fee_bps: u16,
  pub burn: Option<BurnInstruction<AccountId>>,
}

/// Current fee configuration as one value.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeeSettings<AccountId> {
  pub tiers: TierSet,
  pub cooldown_period: u64,
  pub burn_destination: AccountId,
  pub burn_share_bps: u16,
}

/// Coarse entropy mixed into every roll.
///
/// Block authors and traders can predict it; outcomes are not secret.
pub trait EntropySource {
  fn entropy() -> [u8; 32];
}

/// Moves the burned slice of an Unlucky fee to the burn destination.
///
/// `source` is the trader whose swap paid the fee.
pub trait BurnRoutingAdapter<AccountId> {
  fn route_burn(
    source: &AccountId,
    asset: AssetKind,
    amount: u128,
    destination: &AccountId,
  ) -> DispatchResult;
}

impl<AccountId> BurnRoutingAdapter<AccountId> for () {
  fn route_burn(_: &AccountId, _: AssetKind, _: u128, _: &AccountId) -> DispatchResult {
    Ok(())
  }
}

/// Interface an exchange host calls around each swap
pub trait SwapFeeHooks<AccountId> {
  /// Decide the tier and return the fee to charge, in bps
  fn before_swap(who: &AccountId, salt: Salt, direction: SwapDirection)
  -> Result<u16, DispatchError>;

  /// Settle loyalty, cooldown and burn once amounts are known
  fn after_swap(who: &AccountId, salt: Salt, delta: SwapDelta) -> DispatchResult;
}

/// Helper for benchmarking
#[cfg(feature = "runtime-benchmarks")]
pub trait BenchmarkHelper<AccountId> {
  /// Make sure `who` can cover a burn of `amount` in `asset`
  fn fund_burn_source(who: &AccountId, asset: AssetKind, amount: u128) -> DispatchResult;
}

#[cfg(feature = "runtime-benchmarks")]
impl<AccountId> BenchmarkHelper<AccountId> for () {
  fn fund_burn_source(_: &AccountId, _: AssetKind, _: u128) -> DispatchResult {
    Ok(())
  }
}
