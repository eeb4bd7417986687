//! Claim eligibility rules.
//!
//! Evaluated fresh on every request from the stored [`ClaimRecord`]. The same
//! checks back both `RequestTokens` and the `CanClaim` query, so the query can
//! never disagree with the outcome of an actual claim.
//!
//! Checks run in a fixed order:
//! 1. pause flag
//! 2. cooldown since the last successful claim
//! 3. remaining lifetime allowance

use cosmwasm_std::{StdResult, Uint128};

use crate::error::ContractError;
use crate::state::{ClaimRecord, CLAIM_AMOUNT, COOLDOWN_PERIOD, MAX_LIFETIME_CLAIM};

/// Fails with the first rule the claim would violate.
///
/// Exactly `COOLDOWN_PERIOD` seconds after the last claim is eligible, and a
/// claim that lands exactly on `MAX_LIFETIME_CLAIM` is allowed.
pub fn ensure_claimable(
    paused: bool,
    record: &ClaimRecord,
    now: u64,
) -> Result<(), ContractError> {
    if paused {
        return Err(ContractError::FaucetPaused);
    }

    if record.last_claim_time != 0 && now.saturating_sub(record.last_claim_time) < COOLDOWN_PERIOD
    {
        return Err(ContractError::CooldownActive {
            claimable_at: claimable_at(record),
        });
    }

    if record.total_claimed.checked_add(CLAIM_AMOUNT)? > MAX_LIFETIME_CLAIM {
        return Err(ContractError::LifetimeLimitReached);
    }

    Ok(())
}

/// Earliest block time (seconds) at which the cooldown is over.
/// Returns 0 if the address has never claimed.
pub fn claimable_at(record: &ClaimRecord) -> u64 {
    if record.last_claim_time == 0 {
        0
    } else {
        record.last_claim_time + COOLDOWN_PERIOD
    }
}

/// Amount the address may still receive over its lifetime.
pub fn remaining_allowance(record: &ClaimRecord) -> StdResult<Uint128> {
    Ok(MAX_LIFETIME_CLAIM.checked_sub(record.total_claimed)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: u64 = 1_700_000_000;

    fn claimed(times: u128, last_claim_time: u64) -> ClaimRecord {
        ClaimRecord {
            last_claim_time,
            total_claimed: CLAIM_AMOUNT * Uint128::from(times),
        }
    }

    #[test]
    fn test_first_claim_is_eligible() {
        let record = ClaimRecord::default();
        assert!(ensure_claimable(false, &record, NOW).is_ok());
        assert_eq!(claimable_at(&record), 0);
        assert_eq!(remaining_allowance(&record).unwrap(), MAX_LIFETIME_CLAIM);
    }

    #[test]
    fn test_paused_blocks_everyone() {
        assert_eq!(
            ensure_claimable(true, &ClaimRecord::default(), NOW),
            Err(ContractError::FaucetPaused)
        );
        // Pause is reported ahead of cooldown and lifetime failures
        assert_eq!(
            ensure_claimable(true, &claimed(10, NOW), NOW),
            Err(ContractError::FaucetPaused)
        );
    }

    #[test]
    fn test_cooldown_boundary() {
        let record = claimed(1, NOW);

        assert_eq!(
            ensure_claimable(false, &record, NOW + COOLDOWN_PERIOD - 1),
            Err(ContractError::CooldownActive {
                claimable_at: NOW + COOLDOWN_PERIOD
            })
        );
        assert!(ensure_claimable(false, &record, NOW + COOLDOWN_PERIOD).is_ok());
        assert!(ensure_claimable(false, &record, NOW + COOLDOWN_PERIOD + 1).is_ok());
    }

    #[test]
    fn test_cooldown_reported_before_lifetime_limit() {
        let record = claimed(10, NOW);
        assert_eq!(
            ensure_claimable(false, &record, NOW + 1),
            Err(ContractError::CooldownActive {
                claimable_at: NOW + COOLDOWN_PERIOD
            })
        );
    }

    #[test]
    fn test_claim_reaching_cap_exactly_is_allowed() {
        let record = claimed(9, NOW);
        assert!(ensure_claimable(false, &record, NOW + COOLDOWN_PERIOD).is_ok());
        assert_eq!(remaining_allowance(&record).unwrap(), CLAIM_AMOUNT);
    }

    #[test]
    fn test_claim_over_cap_is_rejected() {
        let record = claimed(10, NOW);
        assert_eq!(
            ensure_claimable(false, &record, NOW + COOLDOWN_PERIOD),
            Err(ContractError::LifetimeLimitReached)
        );
        assert_eq!(remaining_allowance(&record).unwrap(), Uint128::zero());

        // A partial allowance smaller than one claim is not enough either
        let record = ClaimRecord {
            last_claim_time: NOW,
            total_claimed: MAX_LIFETIME_CLAIM - Uint128::new(1),
        };
        assert_eq!(
            ensure_claimable(false, &record, NOW + COOLDOWN_PERIOD),
            Err(ContractError::LifetimeLimitReached)
        );
    }
}
