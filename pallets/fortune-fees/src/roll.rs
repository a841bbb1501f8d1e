//! Deterministic roll in `[0, ROLL_RANGE)`.
//!
//! The roll is a pure function of the trader, the swap salt, the current time and one coarse
//! entropy value. Anyone who knows those inputs can predict the outcome; hosts that need
//! unpredictable odds must not rely on this engine.

use codec::Encode;
use core::marker::PhantomData;
use polkadot_sdk::{frame_system, sp_io::hashing::blake2_256};
use primitives::params::ROLL_RANGE;

use crate::types::{EntropySource, Salt};

/// Hash the inputs and reduce the 256-bit digest modulo [`ROLL_RANGE`].
///
/// Plain modulo reduction, so lower values are very slightly favored.
pub fn roll<AccountId: Encode>(
  trader: &AccountId,
  salt: &Salt,
  now: u64,
  entropy: &[u8; 32],
) -> u16 {
  let digest = (trader, salt, now, entropy).using_encoded(blake2_256);
  reduce(&digest)
}

/// Big-endian digest modulo [`ROLL_RANGE`].
fn reduce(digest: &[u8; 32]) -> u16 {
  let modulus = u32::from(ROLL_RANGE);
  let remainder = digest
    .iter()
    .fold(0u32, |acc, byte| (acc * 256 + u32::from(*byte)) % modulus);
  // remainder < ROLL_RANGE
  remainder as u16
}

/// Entropy taken from the parent block hash.
pub struct ParentHashEntropy<T>(PhantomData<T>);

impl<T: frame_system::Config> EntropySource for ParentHashEntropy<T> {
  fn entropy() -> [u8; 32] {
    frame_system::Pallet::<T>::parent_hash().using_encoded(blake2_256)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use hex_literal::hex;

  #[test]
  fn reduce_is_exact_modulo() {
    assert_eq!(reduce(&[0u8; 32]), 0);
    let ten_thousand = hex!("0000000000000000000000000000000000000000000000000000000000002710");
    assert_eq!(reduce(&ten_thousand), 0);
    let nine_nine_nine_nine =
      hex!("000000000000000000000000000000000000000000000000000000000000270f");
    assert_eq!(reduce(&nine_nine_nine_nine), 9_999);
    // 2^256 - 1 = ...639935
    let all_ones = hex!("ffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffffff");
    assert_eq!(reduce(&all_ones), 9_935);
  }

  #[test]
  fn roll_is_reproducible() {
    let entropy = hex!("0101010101010101010101010101010101010101010101010101010101010101");
    let salt = [9u8; 32];
    let first = roll(&42u64, &salt, 1_700_000_000, &entropy);
    let second = roll(&42u64, &salt, 1_700_000_000, &entropy);
    assert_eq!(first, second);
    assert!(first < ROLL_RANGE);
  }

  #[test]
  fn rolls_stay_in_range_and_vary_with_salt() {
    let entropy = [3u8; 32];
    let mut distinct = alloc::collections::BTreeSet::new();
    for n in 0u8..64 {
      let mut salt = [0u8; 32];
      salt[0] = n;
      let value = roll(&7u64, &salt, 1_000, &entropy);
      assert!(value < ROLL_RANGE);
      distinct.insert(value);
    }
    assert!(distinct.len() > 1);
  }
}
