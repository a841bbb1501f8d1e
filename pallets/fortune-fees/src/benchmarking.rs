use crate::*;
use polkadot_sdk::frame_benchmarking::v2::*;
use polkadot_sdk::frame_support::traits::{EnsureOrigin, Get};
use polkadot_sdk::frame_system::RawOrigin;

fn install_owner<T: Config>() -> T::AccountId {
  let owner: T::AccountId = whitelisted_caller();
  Owner::<T>::put(&owner);
  owner
}

fn direction() -> SwapDirection {
  SwapDirection::new(AssetKind::Native, AssetKind::Local(1))
}

#[benchmarks]
mod benches {
  use super::*;

  #[benchmark]
  fn set_chances() {
    let owner = install_owner::<T>();

    #[extrinsic_call]
    set_chances(RawOrigin::Signed(owner), 1_000, 2_000, 6_000, 1_000);

    assert_eq!(Tiers::<T>::get().chances(), [1_000, 2_000, 6_000, 1_000]);
  }

  #[benchmark]
  fn set_fees() {
    let owner = install_owner::<T>();

    #[extrinsic_call]
    set_fees(RawOrigin::Signed(owner), 0, 10, 25, 150);

    assert_eq!(Tiers::<T>::get().fees(), [0, 10, 25, 150]);
  }

  #[benchmark]
  fn set_cooldown_period() {
    let owner = install_owner::<T>();

    #[extrinsic_call]
    set_cooldown_period(RawOrigin::Signed(owner), 600);
  }

  #[benchmark]
  fn set_burn_config() {
    let owner = install_owner::<T>();
    let destination: T::AccountId = account("sink", 0, 0);

    #[extrinsic_call]
    set_burn_config(RawOrigin::Signed(owner), destination.clone(), 7_500);

    assert_eq!(BurnDestination::<T>::get(), destination);
  }

  #[benchmark]
  fn set_loyalty_config() {
    let owner = install_owner::<T>();
    let config = LoyaltyConfig {
      silver: LoyaltyLevel::new(10, 150, 10, 20),
      ..Default::default()
    };

    #[extrinsic_call]
    set_loyalty_config(RawOrigin::Signed(owner), config);

    assert_eq!(LoyaltySettings::<T>::get(), config);
  }

  #[benchmark]
  fn transfer_ownership() {
    let owner = install_owner::<T>();
    let next: T::AccountId = account("next", 0, 0);

    #[extrinsic_call]
    transfer_ownership(RawOrigin::Signed(owner), next.clone());

    assert_eq!(Owner::<T>::get(), Some(next));
  }

  #[benchmark]
  fn force_set_owner() -> Result<(), BenchmarkError> {
    let origin = T::AdminOrigin::try_successful_origin().map_err(|_| BenchmarkError::Weightless)?;
    let next: T::AccountId = account("next", 0, 0);

    #[extrinsic_call]
    _(origin as T::RuntimeOrigin, next.clone());

    assert_eq!(Owner::<T>::get(), Some(next));
    Ok(())
  }

  // Lucky roll plus the cooldown lookups
  #[benchmark]
  fn begin_swap() {
    let trader: T::AccountId = account("trader", 0, 0);
    Tiers::<T>::put(TierSet::default().with_chances([10_000, 0, 0, 0]));
    CooldownPeriod::<T>::put(0);
    LastLuckyAt::<T>::insert(&trader, 0);
    Loyalty::<T>::insert(
      &trader,
      LoyaltyData {
        swap_count: 20,
        current_tier: LoyaltyTier::Silver,
        ..Default::default()
      },
    );
    let salt = [1u8; 32];

    #[block]
    {
      assert!(Pallet::<T>::begin_swap(&trader, salt, direction()).is_ok());
    }

    assert!(PendingTiers::<T>::contains_key(Pallet::<T>::swap_id(&trader, &salt)));
  }

  // Unlucky settlement with a routed burn, a tier upgrade and every volume milestone
  #[benchmark]
  fn end_swap() -> Result<(), BenchmarkError> {
    let trader: T::AccountId = account("trader", 0, 0);
    Tiers::<T>::put(TierSet::default().with_chances([0, 0, 0, 10_000]));
    Loyalty::<T>::insert(
      &trader,
      LoyaltyData {
        swap_count: 19,
        ..Default::default()
      },
    );
    let salt = [2u8; 32];
    let amount_in = T::VolumeMilestoneUnit::get()
      .saturating_mul(100)
      .max(1_000_000);
    T::BenchmarkHelper::fund_burn_source(&trader, AssetKind::Native, amount_in)
      .map_err(|_| BenchmarkError::Stop("failed to fund burn source"))?;
    let ticket = Pallet::<T>::begin_swap(&trader, salt, direction())
      .map_err(|_| BenchmarkError::Stop("failed to begin swap"))?;

    #[block]
    {
      assert!(Pallet::<T>::settle(ticket, SwapDelta::new(amount_in, amount_in)).is_ok());
    }

    assert!(!PendingTiers::<T>::contains_key(Pallet::<T>::swap_id(&trader, &salt)));
    assert_eq!(Loyalty::<T>::get(&trader).swap_count, 20);
    Ok(())
  }

  #[cfg(test)]
  use crate::mock::{Test, new_test_ext};
  #[cfg(test)]
  impl_benchmark_test_suite!(Pallet, new_test_ext(), Test);
}
