#![cfg_attr(rustfmt, rustfmt_skip)]
#![allow(unused_parens)]
#![allow(unused_imports)]
#![allow(missing_docs)]

use polkadot_sdk::frame_support::{traits::Get, weights::{Weight, constants::RocksDbWeight}};
use core::marker::PhantomData;

pub trait WeightInfo {
	fn set_chances() -> Weight;
	fn set_fees() -> Weight;
	fn set_cooldown_period() -> Weight;
	fn set_burn_config() -> Weight;
	fn set_loyalty_config() -> Weight;
	fn transfer_ownership() -> Weight;
	fn force_set_owner() -> Weight;
	fn begin_swap() -> Weight;
	fn end_swap() -> Weight;
}

pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: polkadot_sdk::frame_system::Config> WeightInfo for SubstrateWeight<T> {
	fn set_chances() -> Weight {
		Weight::from_parts(12_000_000, 1600)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_fees() -> Weight {
		Weight::from_parts(11_000_000, 1600)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_cooldown_period() -> Weight {
		Weight::from_parts(9_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(2))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn set_burn_config() -> Weight {
		Weight::from_parts(10_000_000, 1550)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(2))
	}
	fn set_loyalty_config() -> Weight {
		Weight::from_parts(13_000_000, 1700)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(9_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn force_set_owner() -> Weight {
		Weight::from_parts(8_000_000, 1500)
			.saturating_add(T::DbWeight::get().reads(1))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn begin_swap() -> Weight {
		Weight::from_parts(30_000_000, 3600)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(1))
	}
	fn end_swap() -> Weight {
		Weight::from_parts(45_000_000, 4200)
			.saturating_add(T::DbWeight::get().reads(6))
			.saturating_add(T::DbWeight::get().writes(5))
	}
}

impl WeightInfo for () {
	fn set_chances() -> Weight {
		Weight::from_parts(12_000_000, 1600)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_fees() -> Weight {
		Weight::from_parts(11_000_000, 1600)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_cooldown_period() -> Weight {
		Weight::from_parts(9_000_000, 1500)
			.saturating_add(RocksDbWeight::get().reads(2))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn set_burn_config() -> Weight {
		Weight::from_parts(10_000_000, 1550)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(2))
	}
	fn set_loyalty_config() -> Weight {
		Weight::from_parts(13_000_000, 1700)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn transfer_ownership() -> Weight {
		Weight::from_parts(9_000_000, 1500)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn force_set_owner() -> Weight {
		Weight::from_parts(8_000_000, 1500)
			.saturating_add(RocksDbWeight::get().reads(1))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn begin_swap() -> Weight {
		Weight::from_parts(30_000_000, 3600)
			.saturating_add(RocksDbWeight::get().reads(6))
			.saturating_add(RocksDbWeight::get().writes(1))
	}
	fn end_swap() -> Weight {
		Weight::from_parts(45_000_000, 4200)
			.saturating_add(RocksDbWeight::get().reads(6))
			.saturating_add(RocksDbWeight::get().writes(5))
	}
}
