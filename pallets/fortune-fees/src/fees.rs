//! Fee engine arithmetic: Lucky cooldown and the Unlucky burn slice.

use primitives::{apply_bps, params::BPS_DENOMINATOR};

/// Split of an Unlucky fee between the burn and the host's regular fee recipients.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct BurnBreakdown {
  pub total_fee: u128,
  pub burn_amount: u128,
  /// Left to the host's normal fee distribution
  pub retained: u128,
}

/// Base cooldown shortened by the loyalty reduction percentage.
pub fn adjusted_cooldown(base_secs: u64, reduction_pct: u8) -> u64 {
  let reduction = u128::from(base_secs) * u128::from(reduction_pct.min(100)) / 100;
  // reduction <= base_secs
  base_secs.saturating_sub(reduction as u64)
}

/// `Err(ready_at)` while the previous Lucky grant is still cooling down.
pub fn check_cooldown(now: u64, last_lucky: Option<u64>, cooldown_secs: u64) -> Result<(), u64> {
  match last_lucky {
    Some(last) => {
      let ready_at = last.saturating_add(cooldown_secs);
      if now < ready_at { Err(ready_at) } else { Ok(()) }
    }
    None => Ok(()),
  }
}

pub fn burn_breakdown(fee_bps: u16, realized_flow: u128, burn_share_bps: u16) -> BurnBreakdown {
  let total_fee = apply_bps(realized_flow, fee_bps);
  let burn_amount = apply_bps(total_fee, burn_share_bps.min(BPS_DENOMINATOR));
  BurnBreakdown {
    total_fee,
    burn_amount,
    retained: total_fee.saturating_sub(burn_amount),
  }
}
