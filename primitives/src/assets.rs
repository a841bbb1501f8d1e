use codec::{Decode, DecodeWithMemTracking, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use serde::{Deserialize, Serialize};

/// Currency identifier used by the burn ledger and the swap hooks.
///
/// - `Native`: The system's native token.
/// - `Local(u32)`: Local assets (managed by pallet-assets or an equivalent ledger).
/// - `Foreign(u32)`: Assets bridged in from another consensus system.
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
pub enum AssetKind {
  #[default]
  Native,
  Local(u32),
  Foreign(u32),
}

/// Direction of a swap: which currency flows into the pool and which flows out.
///
/// The fee (and therefore any burn) is always denominated in `asset_in`.
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
pub struct SwapDirection {
  pub asset_in: AssetKind,
  pub asset_out: AssetKind,
}

impl SwapDirection {
  pub fn new(asset_in: AssetKind, asset_out: AssetKind) -> Self {
    Self {
      asset_in,
      asset_out,
    }
  }

  /// The single currency the burn slice is taken from.
  pub fn burn_asset(&self) -> AssetKind {
    self.asset_in
  }

  pub fn reversed(&self) -> Self {
    Self::new(self.asset_out, self.asset_in)
  }
}
