extern crate alloc;

use crate as pallet_fortune_fees;
use crate::types::{BurnRoutingAdapter, EntropySource, LoyaltyConfig, TierSet};
use alloc::vec::Vec;
use core::{cell::RefCell, time::Duration};
use polkadot_sdk::frame_support::{
  construct_runtime, derive_impl,
  traits::{ConstU16, ConstU64, ConstU128, UnixTime},
};
use polkadot_sdk::frame_system::{self, EnsureRoot};
use polkadot_sdk::sp_runtime::{
  BuildStorage, DispatchError, DispatchResult,
  testing::H256,
  traits::{BlakeTwo256, IdentityLookup},
};
use primitives::{
  AssetKind,
  params::{DEFAULT_BURN_SHARE_BPS, DEFAULT_COOLDOWN_SECS},
};

type Block = frame_system::mocking::MockBlock<Test>;
pub type AccountId = u64;

pub const OWNER: AccountId = 1;
pub const ALICE: AccountId = 2;
pub const BOB: AccountId = 3;
pub const BURN_SINK: AccountId = 99;

/// Wall clock at the start of every test, in seconds
pub const GENESIS_TIME: u64 = 1_700_000_000;

/// Volume step per volume milestone
pub const VOLUME_UNIT: u128 = 100;

/// A burn the mock router was asked to perform
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoutedBurn {
  pub source: AccountId,
  pub asset: AssetKind,
  pub amount: u128,
  pub destination: AccountId,
}

thread_local! {
  static NOW: RefCell<u64> = const { RefCell::new(GENESIS_TIME) };
  static ENTROPY: RefCell<[u8; 32]> = const { RefCell::new([7u8; 32]) };
  static ROUTED_BURNS: RefCell<Vec<RoutedBurn>> = const { RefCell::new(Vec::new()) };
  static ROUTER_FAILS: RefCell<bool> = const { RefCell::new(false) };
}

construct_runtime!(
  pub struct Test {
    System: frame_system,
    FortuneFees: pallet_fortune_fees,
  }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
  type Block = Block;
  type AccountId = AccountId;
  type Lookup = IdentityLookup<Self::AccountId>;
  type Hash = H256;
  type Hashing = BlakeTwo256;
}

pub struct MockTime;
impl UnixTime for MockTime {
  fn now() -> Duration {
    Duration::from_secs(NOW.with(|now| *now.borrow()))
  }
}

pub struct MockEntropy;
impl EntropySource for MockEntropy {
  fn entropy() -> [u8; 32] {
    ENTROPY.with(|entropy| *entropy.borrow())
  }
}

pub struct MockBurnRouter;
impl BurnRoutingAdapter<AccountId> for MockBurnRouter {
  fn route_burn(
    source: &AccountId,
    asset: AssetKind,
    amount: u128,
    destination: &AccountId,
  ) -> DispatchResult {
    if ROUTER_FAILS.with(|fails| *fails.borrow()) {
      return Err(DispatchError::Other("burn route closed"));
    }
    ROUTED_BURNS.with(|burns| {
      burns.borrow_mut().push(RoutedBurn {
        source: *source,
        asset,
        amount,
        destination: *destination,
      })
    });
    Ok(())
  }
}

impl pallet_fortune_fees::Config for Test {
  type UnixTime = MockTime;
  type Entropy = MockEntropy;
  type BurnRouter = MockBurnRouter;
  type AdminOrigin = EnsureRoot<AccountId>;
  type DefaultCooldownPeriod = ConstU64<DEFAULT_COOLDOWN_SECS>;
  type DefaultBurnShareBps = ConstU16<DEFAULT_BURN_SHARE_BPS>;
  type DefaultBurnDestination = ConstU64<BURN_SINK>;
  type VolumeMilestoneUnit = ConstU128<VOLUME_UNIT>;
  type WeightInfo = ();
  #[cfg(feature = "runtime-benchmarks")]
  type BenchmarkHelper = ();
}

pub fn set_now(secs: u64) {
  NOW.with(|now| *now.borrow_mut() = secs);
}

pub fn advance(secs: u64) {
  NOW.with(|now| *now.borrow_mut() += secs);
}

pub fn set_entropy(entropy: [u8; 32]) {
  ENTROPY.with(|current| *current.borrow_mut() = entropy);
}

pub fn routed_burns() -> Vec<RoutedBurn> {
  ROUTED_BURNS.with(|burns| burns.borrow().clone())
}

pub fn set_router_failure(fails: bool) {
  ROUTER_FAILS.with(|current| *current.borrow_mut() = fails);
}

fn reset_mocks() {
  set_now(GENESIS_TIME);
  set_entropy([7u8; 32]);
  set_router_failure(false);
  ROUTED_BURNS.with(|burns| burns.borrow_mut().clear());
}

pub struct ExtBuilder {
  owner: Option<AccountId>,
  tiers: TierSet,
  loyalty: LoyaltyConfig,
}

impl Default for ExtBuilder {
  fn default() -> Self {
    Self {
      owner: Some(OWNER),
      tiers: TierSet::default(),
      loyalty: LoyaltyConfig::default(),
    }
  }
}

impl ExtBuilder {
  pub fn without_owner(mut self) -> Self {
    self.owner = None;
    self
  }

  /// Chances in Lucky, Discounted, Normal, Unlucky order
  pub fn chances(mut self, chances: [u16; 4]) -> Self {
    self.tiers = self.tiers.with_chances(chances);
    self
  }

  pub fn fees(mut self, fees: [u16; 4]) -> Self {
    self.tiers = self.tiers.with_fees(fees);
    self
  }

  pub fn loyalty(mut self, loyalty: LoyaltyConfig) -> Self {
    self.loyalty = loyalty;
    self
  }

  pub fn build(self) -> polkadot_sdk::sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default()
      .build_storage()
      .unwrap();

    pallet_fortune_fees::GenesisConfig::<Test> {
      owner: self.owner,
      tiers: self.tiers,
      loyalty: self.loyalty,
      _marker: Default::default(),
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = polkadot_sdk::sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
      System::set_block_number(1);
      reset_mocks();
    });
    ext
  }
}

pub fn new_test_ext() -> polkadot_sdk::sp_io::TestExternalities {
  ExtBuilder::default().build()
}
