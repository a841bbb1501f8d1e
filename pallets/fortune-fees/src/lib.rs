//! Fortune Fees Pallet
//!
//! Probabilistic fee tiers for an exchange host. Every swap rolls one of four tiers (Lucky,
//! Discounted, Normal, Unlucky), the trader's loyalty standing shifts the odds and the fee,
//! and part of every Unlucky fee is routed to a burn destination.
//!
//! The host drives a two-phase protocol around each swap:
//! - [`Pallet::begin_swap`] rolls the tier, enforces the Lucky cooldown and parks the result
//!   under `hash(trader, salt)`. The returned [`SwapTicket`] carries the fee to charge.
//! - [`Pallet::end_swap`] (or [`Pallet::settle`] with the ticket) consumes the parked result,
//!   advances the trader's loyalty record, routes the burn and emits the outcome event.
//!
//! Hosts that prefer a trait seam can use the [`SwapFeeHooks`] implementation instead.
//! Configuration is owner-gated; `AdminOrigin` can recover ownership.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub use pallet::*;

#[cfg(test)]
pub mod mock;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod fees;
pub mod loyalty;
pub mod roll;
pub mod selection;
pub mod types;
pub mod weights;

pub use roll::ParentHashEntropy;
pub use selection::TierSelection;
pub use types::*;
pub use weights::WeightInfo;

pub const LOG_TARGET: &str = "runtime::fortune-fees";

/// Proof that the caller is the configured owner.
///
/// Only [`Pallet::ensure_owner`] hands these out, so every `do_set_*` mutator is owner-gated
/// by its signature.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnerCap<AccountId> {
  owner: AccountId,
}

impl<AccountId> OwnerCap<AccountId> {
  pub fn owner(&self) -> &AccountId {
    &self.owner
  }
}

#[frame::pallet]
pub mod pallet {
  use super::{LOG_TARGET, OwnerCap, WeightInfo};
  use crate::{
    fees, loyalty,
    roll::roll,
    selection::{self, TierSelection},
    types::*,
  };
  use frame::deps::{
    frame_support::{storage::with_storage_layer, traits::UnixTime},
    sp_runtime::{
      DispatchError,
      traits::{Hash as HashT, Zero},
    },
  };
  use frame::prelude::*;
  use primitives::params::BPS_DENOMINATOR;

  /// Configuration trait for the fortune fees pallet
  #[pallet::config]
  pub trait Config: frame_system::Config<RuntimeEvent: From<Event<Self>>> {
    /// Wall-clock source for cooldowns and the roll
    type UnixTime: UnixTime;

    /// Coarse entropy mixed into every roll
    type Entropy: EntropySource;

    /// Moves the burned slice of Unlucky fees
    type BurnRouter: BurnRoutingAdapter<Self::AccountId>;

    /// Origin that can force-set the owner
    type AdminOrigin: EnsureOrigin<Self::RuntimeOrigin>;

    /// Lucky cooldown used until the owner sets one, in seconds
    #[pallet::constant]
    type DefaultCooldownPeriod: Get<u64>;

    /// Burn share used until the owner sets one, in bps of the Unlucky fee
    #[pallet::constant]
    type DefaultBurnShareBps: Get<u16>;

    /// Burn destination used until the owner sets one
    #[pallet::constant]
    type DefaultBurnDestination: Get<Self::AccountId>;

    /// Volume step that earns one volume milestone. Zero disables volume milestones.
    #[pallet::constant]
    type VolumeMilestoneUnit: Get<u128>;

    /// Weight information for extrinsics
    type WeightInfo: WeightInfo;

    /// Helper for benchmarking
    #[cfg(feature = "runtime-benchmarks")]
    type BenchmarkHelper: crate::types::BenchmarkHelper<Self::AccountId>;
  }

  #[pallet::pallet]
  pub struct Pallet<T>(PhantomData<T>);

  /// Principal allowed to change the configuration
  #[pallet::storage]
  #[pallet::getter(fn owner)]
  pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

  /// Active chance and fee table
  #[pallet::storage]
  #[pallet::getter(fn tiers)]
  pub type Tiers<T: Config> = StorageValue<_, TierSet, ValueQuery>;

  /// Base Lucky cooldown in seconds, before loyalty reductions
  #[pallet::storage]
  #[pallet::getter(fn cooldown_period)]
  pub type CooldownPeriod<T: Config> = StorageValue<_, u64, ValueQuery, T::DefaultCooldownPeriod>;

  #[pallet::storage]
  #[pallet::getter(fn burn_destination)]
  pub type BurnDestination<T: Config> =
    StorageValue<_, T::AccountId, ValueQuery, T::DefaultBurnDestination>;

  /// Share of an Unlucky fee that is burned, in bps
  #[pallet::storage]
  #[pallet::getter(fn burn_share_bps)]
  pub type BurnShareBps<T: Config> = StorageValue<_, u16, ValueQuery, T::DefaultBurnShareBps>;

  /// Loyalty ladder
  #[pallet::storage]
  #[pallet::getter(fn loyalty_config)]
  pub type LoyaltySettings<T: Config> = StorageValue<_, LoyaltyConfig, ValueQuery>;

  /// Per-trader loyalty record
  #[pallet::storage]
  #[pallet::getter(fn loyalty_of)]
  pub type Loyalty<T: Config> =
    StorageMap<_, Blake2_128Concat, T::AccountId, LoyaltyData, ValueQuery>;

  /// Timestamp of the last granted Lucky tier per trader
  #[pallet::storage]
  #[pallet::getter(fn last_lucky_at)]
  pub type LastLuckyAt<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u64, OptionQuery>;

  /// Tiers decided by `begin_swap` and not yet settled, keyed by `hash(trader, salt)`
  #[pallet::storage]
  #[pallet::getter(fn pending_tier)]
  pub type PendingTiers<T: Config> =
    StorageMap<_, Identity, T::Hash, PendingTierResult, OptionQuery>;

  /// Burned amount per currency. Never decreases.
  #[pallet::storage]
  #[pallet::getter(fn total_burned)]
  pub type TotalBurned<T: Config> = StorageMap<_, Blake2_128Concat, AssetKind, u128, ValueQuery>;

  /// Events for the fortune fees pallet
  #[pallet::event]
  #[pallet::generate_deposit(pub(super) fn deposit_event)]
  pub enum Event<T: Config> {
    /// Lucky tier granted
    Lucky {
      trader: T::AccountId,
      fee_bps: u16,
      timestamp: u64,
    },
    /// Discounted tier settled
    Discounted { trader: T::AccountId, fee_bps: u16 },
    /// Normal tier settled
    Normal { trader: T::AccountId, fee_bps: u16 },
    /// Unlucky tier settled; `burn_amount` went to the burn destination
    Unlucky {
      trader: T::AccountId,
      fee_bps: u16,
      burn_amount: u128,
    },
    /// Burn routed and added to the ledger
    FeeBurned {
      asset: AssetKind,
      amount: u128,
      destination: T::AccountId,
      new_total: u128,
    },
    /// Trader reached a higher loyalty tier
    LoyaltyTierUpgraded {
      trader: T::AccountId,
      new_tier: LoyaltyTier,
    },
    /// Trader crossed a milestone for the first time
    MilestoneReached {
      trader: T::AccountId,
      milestone: Milestone,
      bonus_bps: u16,
    },
    SetChances {
      lucky: u16,
      discounted: u16,
      normal: u16,
      unlucky: u16,
    },
    SetFees {
      lucky: u16,
      discounted: u16,
      normal: u16,
      unlucky: u16,
    },
    SetCooldown { old_period: u64, new_period: u64 },
    SetBurnConfig {
      destination: T::AccountId,
      share_bps: u16,
    },
    SetLoyaltyConfig { config: LoyaltyConfig },
    OwnershipTransferred {
      previous: Option<T::AccountId>,
      new_owner: T::AccountId,
    },
  }

  /// Errors for the fortune fees pallet
  #[pallet::error]
  pub enum Error<T> {
    /// Caller is not the owner
    NotOwner,
    /// Tier chances must sum to exactly 10000 bps
    InvalidChanceSum,
    /// Loyalty thresholds not strictly ascending from zero, or a perk above its cap
    InvalidLoyaltyConfig,
    /// Burn share above 10000 bps
    BurnShareTooHigh,
    /// Lucky tier rolled before the trader's cooldown elapsed
    CooldownActive,
  }

  #[pallet::call]
  impl<T: Config> Pallet<T> {
    /// Replace the four tier chances (owner only)
    #[pallet::call_index(0)]
    #[pallet::weight(T::WeightInfo::set_chances())]
    pub fn set_chances(
      origin: OriginFor<T>,
      lucky: u16,
      discounted: u16,
      normal: u16,
      unlucky: u16,
    ) -> DispatchResult {
      let cap = Self::ensure_owner(origin)?;
      Self::do_set_chances(&cap, [lucky, discounted, normal, unlucky])
    }

    /// Replace the four tier fees (owner only)
    #[pallet::call_index(1)]
    #[pallet::weight(T::WeightInfo::set_fees())]
    pub fn set_fees(
      origin: OriginFor<T>,
      lucky: u16,
      discounted: u16,
      normal: u16,
      unlucky: u16,
    ) -> DispatchResult {
      let cap = Self::ensure_owner(origin)?;
      Self::do_set_fees(&cap, [lucky, discounted, normal, unlucky])
    }

    /// Update the base Lucky cooldown (owner only)
    #[pallet::call_index(2)]
    #[pallet::weight(T::WeightInfo::set_cooldown_period())]
    pub fn set_cooldown_period(origin: OriginFor<T>, period: u64) -> DispatchResult {
      let cap = Self::ensure_owner(origin)?;
      Self::do_set_cooldown_period(&cap, period)
    }

    /// Update burn destination and share (owner only)
    #[pallet::call_index(3)]
    #[pallet::weight(T::WeightInfo::set_burn_config())]
    pub fn set_burn_config(
      origin: OriginFor<T>,
      destination: T::AccountId,
      share_bps: u16,
    ) -> DispatchResult {
      let cap = Self::ensure_owner(origin)?;
      Self::do_set_burn_config(&cap, destination, share_bps)
    }

    /// Replace the loyalty ladder (owner only)
    #[pallet::call_index(4)]
    #[pallet::weight(T::WeightInfo::set_loyalty_config())]
    pub fn set_loyalty_config(origin: OriginFor<T>, config: LoyaltyConfig) -> DispatchResult {
      let cap = Self::ensure_owner(origin)?;
      Self::do_set_loyalty_config(&cap, config)
    }

    /// Hand ownership to another account (owner only)
    #[pallet::call_index(5)]
    #[pallet::weight(T::WeightInfo::transfer_ownership())]
    pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      let cap = Self::ensure_owner(origin)?;
      Self::do_transfer_ownership(cap, new_owner)
    }

    /// Set the owner regardless of the current one (admin only)
    #[pallet::call_index(6)]
    #[pallet::weight(T::WeightInfo::force_set_owner())]
    pub fn force_set_owner(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
      T::AdminOrigin::ensure_origin(origin)?;
      let previous = Owner::<T>::get();
      Owner::<T>::put(&new_owner);
      log::info!(target: LOG_TARGET, "owner forced from {:?} to {:?}", previous, new_owner);
      Self::deposit_event(Event::OwnershipTransferred {
        previous,
        new_owner,
      });
      Ok(())
    }
  }

  #[pallet::hooks]
  impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
    fn integrity_test() {
      assert!(
        T::DefaultBurnShareBps::get() <= BPS_DENOMINATOR,
        "DefaultBurnShareBps must not exceed 10000"
      );
    }
  }

  impl<T: Config> Pallet<T> {
    /// Check that `origin` is signed by the owner and return the matching capability.
    pub fn ensure_owner(origin: OriginFor<T>) -> Result<OwnerCap<T::AccountId>, DispatchError> {
      let who = ensure_signed(origin)?;
      ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::NotOwner);
      Ok(OwnerCap { owner: who })
    }

    pub fn do_set_chances(_cap: &OwnerCap<T::AccountId>, chances: [u16; 4]) -> DispatchResult {
      let tiers = Tiers::<T>::get().with_chances(chances);
      ensure!(tiers.has_valid_chances(), Error::<T>::InvalidChanceSum);
      Tiers::<T>::put(tiers);
      let [lucky, discounted, normal, unlucky] = chances;
      log::info!(target: LOG_TARGET, "tier chances set to {:?}", chances);
      Self::deposit_event(Event::SetChances {
        lucky,
        discounted,
        normal,
        unlucky,
      });
      Ok(())
    }

    pub fn do_set_fees(_cap: &OwnerCap<T::AccountId>, fees: [u16; 4]) -> DispatchResult {
      Tiers::<T>::mutate(|tiers| *tiers = tiers.with_fees(fees));
      let [lucky, discounted, normal, unlucky] = fees;
      log::info!(target: LOG_TARGET, "tier fees set to {:?}", fees);
      Self::deposit_event(Event::SetFees {
        lucky,
        discounted,
        normal,
        unlucky,
      });
      Ok(())
    }

    pub fn do_set_cooldown_period(_cap: &OwnerCap<T::AccountId>, new_period: u64) -> DispatchResult {
      let old_period = CooldownPeriod::<T>::get();
      CooldownPeriod::<T>::put(new_period);
      log::info!(target: LOG_TARGET, "cooldown {}s -> {}s", old_period, new_period);
      Self::deposit_event(Event::SetCooldown {
        old_period,
        new_period,
      });
      Ok(())
    }

    pub fn do_set_burn_config(
      _cap: &OwnerCap<T::AccountId>,
      destination: T::AccountId,
      share_bps: u16,
    ) -> DispatchResult {
      ensure!(share_bps <= BPS_DENOMINATOR, Error::<T>::BurnShareTooHigh);
      BurnDestination::<T>::put(&destination);
      BurnShareBps::<T>::put(share_bps);
      log::info!(target: LOG_TARGET, "burning {} bps to {:?}", share_bps, destination);
      Self::deposit_event(Event::SetBurnConfig {
        destination,
        share_bps,
      });
      Ok(())
    }

    pub fn do_set_loyalty_config(
      _cap: &OwnerCap<T::AccountId>,
      config: LoyaltyConfig,
    ) -> DispatchResult {
      ensure!(config.is_valid(), Error::<T>::InvalidLoyaltyConfig);
      LoyaltySettings::<T>::put(config);
      log::info!(target: LOG_TARGET, "loyalty ladder replaced");
      Self::deposit_event(Event::SetLoyaltyConfig { config });
      Ok(())
    }

    /// Consumes the capability: the previous owner holds no authority afterwards.
    pub fn do_transfer_ownership(
      cap: OwnerCap<T::AccountId>,
      new_owner: T::AccountId,
    ) -> DispatchResult {
      Owner::<T>::put(&new_owner);
      log::info!(target: LOG_TARGET, "owner {:?} -> {:?}", cap.owner, new_owner);
      Self::deposit_event(Event::OwnershipTransferred {
        previous: Some(cap.owner),
        new_owner,
      });
      Ok(())
    }

    /// Storage key of the pending tier for one swap.
    pub fn swap_id(trader: &T::AccountId, salt: &Salt) -> T::Hash {
      T::Hashing::hash_of(&(trader, salt))
    }

    /// Current time in whole seconds.
    pub fn now() -> u64 {
      T::UnixTime::now().as_secs()
    }

    /// Roll `trader` would get for `salt` right now.
    pub fn roll_for(trader: &T::AccountId, salt: &Salt) -> u16 {
      roll(trader, salt, Self::now(), &T::Entropy::entropy())
    }

    /// Tier and fee `roll` maps to for `trader`, without the cooldown check.
    pub fn preview_tier(trader: &T::AccountId, roll: u16) -> TierSelection {
      selection::select_tier(
        roll,
        &Tiers::<T>::get(),
        &Loyalty::<T>::get(trader),
        &LoyaltySettings::<T>::get(),
      )
    }

    /// Fails with `CooldownActive` while `trader` may not be granted another Lucky tier.
    pub fn check_cooldown(trader: &T::AccountId, now: u64) -> DispatchResult {
      Self::ensure_cooldown_elapsed(
        trader,
        &Loyalty::<T>::get(trader),
        &LoyaltySettings::<T>::get(),
        now,
      )
    }

    fn ensure_cooldown_elapsed(
      trader: &T::AccountId,
      data: &LoyaltyData,
      config: &LoyaltyConfig,
      now: u64,
    ) -> DispatchResult {
      let cooldown = fees::adjusted_cooldown(
        CooldownPeriod::<T>::get(),
        loyalty::cooldown_reduction(data, config),
      );
      fees::check_cooldown(now, LastLuckyAt::<T>::get(trader), cooldown).map_err(|ready_at| {
        log::debug!(
          target: LOG_TARGET,
          "lucky tier for {:?} blocked until {}",
          trader,
          ready_at
        );
        Error::<T>::CooldownActive.into()
      })
    }

    /// Pre-swap phase: decide the tier and park it until settlement.
    ///
    /// Fails the whole swap with `CooldownActive` when Lucky is rolled too early; nothing is
    /// written in that case.
    pub fn begin_swap(
      trader: &T::AccountId,
      salt: Salt,
      direction: SwapDirection,
    ) -> Result<SwapTicket<T::AccountId, T::Hash>, DispatchError> {
      let now = Self::now();
      let rolled = roll(trader, &salt, now, &T::Entropy::entropy());
      let data = Loyalty::<T>::get(trader);
      let config = LoyaltySettings::<T>::get();
      let TierSelection { tier, fee_bps } =
        selection::select_tier(rolled, &Tiers::<T>::get(), &data, &config);

      if tier == TierKind::Lucky {
        Self::ensure_cooldown_elapsed(trader, &data, &config, now)?;
      }

      let swap_id = Self::swap_id(trader, &salt);
      PendingTiers::<T>::insert(
        swap_id,
        PendingTierResult {
          tier,
          fee_bps,
          burn_asset: direction.burn_asset(),
        },
      );
      log::debug!(
        target: LOG_TARGET,
        "swap {:?}: roll {} selected {:?} at {} bps",
        swap_id,
        rolled,
        tier,
        fee_bps
      );
      Ok(SwapTicket {
        trader: trader.clone(),
        salt,
        swap_id,
        tier,
        fee_bps,
      })
    }

    /// Post-swap phase for the swap identified by `trader` and `salt`.
    ///
    /// Returns `Ok(None)` when no tier is pending, so a repeated or stray call changes
    /// nothing. The pending tier is released on every path. A burn that cannot be routed
    /// rejects the settlement: loyalty, burn ledger and events stay untouched.
    pub fn end_swap(
      trader: &T::AccountId,
      salt: Salt,
      delta: SwapDelta,
    ) -> Result<Option<SwapSettlement<T::AccountId>>, DispatchError> {
      let swap_id = Self::swap_id(trader, &salt);
      let Some(pending) = PendingTiers::<T>::take(swap_id) else {
        log::debug!(target: LOG_TARGET, "no pending tier for swap {:?}", swap_id);
        return Ok(None);
      };
      with_storage_layer(|| {
        Self::record_loyalty(trader, delta.amount_in);
        let burn = Self::settle_tier(trader, &pending, delta.amount_in)?;
        Ok(Some(SwapSettlement {
          tier: pending.tier,
          fee_bps: pending.fee_bps,
          burn,
        }))
      })
    }

    /// [`Self::end_swap`] for a ticket returned by [`Self::begin_swap`].
    pub fn settle(
      ticket: SwapTicket<T::AccountId, T::Hash>,
      delta: SwapDelta,
    ) -> Result<Option<SwapSettlement<T::AccountId>>, DispatchError> {
      Self::end_swap(&ticket.trader, ticket.salt, delta)
    }

    fn record_loyalty(trader: &T::AccountId, volume: u128) {
      let config = LoyaltySettings::<T>::get();
      let progress = Loyalty::<T>::mutate(trader, |data| {
        loyalty::record_swap(data, &config, volume, T::VolumeMilestoneUnit::get())
      });
      if let Some(new_tier) = progress.upgraded {
        Self::deposit_event(Event::LoyaltyTierUpgraded {
          trader: trader.clone(),
          new_tier,
        });
      }
      for milestone in progress.milestones {
        Self::deposit_event(Event::MilestoneReached {
          trader: trader.clone(),
          milestone,
          bonus_bps: milestone.bonus_bps(),
        });
      }
    }

    fn settle_tier(
      trader: &T::AccountId,
      pending: &PendingTierResult,
      flow: u128,
    ) -> Result<Option<BurnInstruction<T::AccountId>>, DispatchError> {
      let trader = trader.clone();
      let fee_bps = pending.fee_bps;
      let (event, burn) = match pending.tier {
        TierKind::Lucky => {
          let timestamp = Self::now();
          LastLuckyAt::<T>::insert(&trader, timestamp);
          let event = Event::Lucky {
            trader,
            fee_bps,
            timestamp,
          };
          (event, None)
        }
        TierKind::Discounted => (Event::Discounted { trader, fee_bps }, None),
        TierKind::Normal => (Event::Normal { trader, fee_bps }, None),
        TierKind::Unlucky => {
          let burn = Self::settle_burn(&trader, pending, flow)?;
          let burn_amount = burn.as_ref().map_or(0, |burn| burn.amount);
          let event = Event::Unlucky {
            trader,
            fee_bps,
            burn_amount,
          };
          (event, burn)
        }
      };
      Self::deposit_event(event);
      Ok(burn)
    }

    /// Route the burned slice of an Unlucky fee and add it to the ledger.
    fn settle_burn(
      trader: &T::AccountId,
      pending: &PendingTierResult,
      flow: u128,
    ) -> Result<Option<BurnInstruction<T::AccountId>>, DispatchError> {
      let breakdown = fees::burn_breakdown(pending.fee_bps, flow, BurnShareBps::<T>::get());
      if breakdown.burn_amount.is_zero() {
        return Ok(None);
      }
      let asset = pending.burn_asset;
      let amount = breakdown.burn_amount;
      let destination = BurnDestination::<T>::get();
      T::BurnRouter::route_burn(trader, asset, amount, &destination)?;

      let new_total = TotalBurned::<T>::mutate(asset, |total| {
        *total = total.saturating_add(amount);
        *total
      });
      log::debug!(
        target: LOG_TARGET,
        "burned {} of {:?} ({} retained), total {}",
        amount,
        asset,
        breakdown.retained,
        new_total
      );
      Self::deposit_event(Event::FeeBurned {
        asset,
        amount,
        destination: destination.clone(),
        new_total,
      });
      Ok(Some(BurnInstruction {
        asset,
        amount,
        destination,
      }))
    }

    pub fn stats_of(trader: &T::AccountId) -> LoyaltyStats {
      loyalty::stats_of(&Loyalty::<T>::get(trader), &LoyaltySettings::<T>::get())
    }

    pub fn swaps_until_next_tier(trader: &T::AccountId) -> u64 {
      loyalty::swaps_until_next_tier(&Loyalty::<T>::get(trader), &LoyaltySettings::<T>::get())
    }

    pub fn fee_settings() -> FeeSettings<T::AccountId> {
      FeeSettings {
        tiers: Tiers::<T>::get(),
        cooldown_period: CooldownPeriod::<T>::get(),
        burn_destination: BurnDestination::<T>::get(),
        burn_share_bps: BurnShareBps::<T>::get(),
      }
    }
  }

  impl<T: Config> SwapFeeHooks<T::AccountId> for Pallet<T> {
    fn before_swap(
      who: &T::AccountId,
      salt: Salt,
      direction: SwapDirection,
    ) -> Result<u16, DispatchError> {
      Self::begin_swap(who, salt, direction).map(|ticket| ticket.fee_bps)
    }

    fn after_swap(who: &T::AccountId, salt: Salt, delta: SwapDelta) -> DispatchResult {
      Self::end_swap(who, salt, delta).map(|_| ())
    }
  }

  /// Genesis configuration: owner plus the initial tier table and loyalty ladder
  #[pallet::genesis_config]
  #[derive(frame::prelude::DefaultNoBound)]
  pub struct GenesisConfig<T: Config> {
    pub owner: Option<T::AccountId>,
    pub tiers: TierSet,
    pub loyalty: LoyaltyConfig,
    #[serde(skip)]
    pub _marker: core::marker::PhantomData<T>,
  }

  #[pallet::genesis_build]
  impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
    fn build(&self) {
      assert!(self.tiers.has_valid_chances(), "tier chances must sum to 10000");
      assert!(self.loyalty.is_valid(), "invalid loyalty ladder");
      if let Some(owner) = &self.owner {
        Owner::<T>::put(owner);
      }
      Tiers::<T>::put(self.tiers);
      LoyaltySettings::<T>::put(self.loyalty);
    }
  }
}
