//! The `tes`/`tec`/`ter`/`tef`/`tem` result-code taxonomy.
//!
//! Mirrors rippled's public result-code ranges (`tesSUCCESS = 0`, `tec* >= 100`,
//! negative `tem`/`tef`/`ter` bands) so a host can translate an [`EngineResult`]
//! straight into the wire code clients already expect, without this crate
//! owning the wire codec itself.

use strum_macros::{AsRefStr, Display};

/// Whether a result leaves a transaction's fee claimed against the issuing
/// account, per rippled's `isTecClaim`/`isTemMalformed`/`isTefFailure` split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultClass {
    /// `tesSUCCESS`: the transaction fully applied.
    Success,
    /// `tec*`: the transaction claimed a fee but its intended effect did not
    /// apply (e.g. an unfunded offer, a missing destination).
    ClaimedCost,
    /// `tem*`: malformed, can never succeed regardless of ledger state.
    Malformed,
    /// `tef*`: failed due to the transaction's own state (already applied,
    /// bad sequence) — will never succeed if retried unmodified.
    Failure,
    /// `ter*`: retriable, depends on ledger state that may change (e.g. an
    /// account that doesn't exist yet could be funded by a parallel tx).
    Retry,
}

/// The full space of engine outcomes the dispatcher can return.
///
/// Only the subset exercised by `engine::payment`, `engine::offer` and
/// `engine::amm` is represented; this is a result taxonomy, not a complete
/// port of rippled's `transResultInfoArray`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr)]
pub enum EngineResult {
    /// The transaction fully applied.
    TesSuccess,

    // --- tec: claimed a fee, did not achieve its purpose ---
    /// A payment or offer claimed funds it could not fully deliver.
    TecPathPartial,
    /// Source account has insufficient funds for the requested delivery.
    TecUnfundedPayment,
    /// An `OfferCreate`/`AMMBid` had no funds behind it at apply time.
    TecUnfundedOffer,
    /// Destination account does not exist and the payment can't fund it.
    TecNoDst,
    /// Destination exists but can't be credited (e.g. below reserve, no XRP).
    TecNoDstInsufXrp,
    /// The source lacks authorization to hold/send the requested currency.
    TecNoAuth,
    /// No trust line exists between the relevant accounts for this currency.
    TecNoLine,
    /// A trust line is frozen or the global freeze flag is set.
    TecFrozen,
    /// Creating the requested ledger entry would have exceeded the owner's reserve.
    TecInsufficientReserve,
    /// The owner directory for this account is full.
    TecDirFull,
    /// `DepositAuth` is enabled and the sender isn't preauthorized.
    TecNoPermission,
    /// An `AMM*` transaction's pool or bid inputs failed an AMM-specific rule.
    TecAmmInvalidTokens,
    /// An offer/AMM action targeted an account/object already gone.
    TecAmmUnfunded,
    /// Supplied `asset`/`asset2` did not match an existing AMM instance.
    TecAmmNotFound,
    /// The offer pointed to by `OfferSequence` no longer exists to cancel.
    TecNoEntry,
    /// An otherwise-valid action was expired (e.g. stale `AMMBid` auction slot).
    TecExpired,
    /// A `tfFillOrKill` offer could not be filled in full and was discarded.
    TecKilled,
    /// An `AMMCreate` targeted an asset pair that already has an `AMM` instance.
    TecDuplicate,

    // --- tem: malformed, resubmission can never succeed ---
    /// A numeric field was zero, negative, or otherwise out of domain.
    TemBadAmount,
    /// `asset` and `asset2` (or equivalent currency pair) were identical.
    TemRedundant,
    /// An unrecognized or mutually exclusive flag combination was set.
    TemInvalidFlag,
    /// A required field was missing or a forbidden field was present.
    TemMalformed,
    /// The transaction type is recognized but the amendment gating it is
    /// not enabled on this ledger (e.g. an `AMM*` transaction with the
    /// `AMM` amendment turned off, §5.3).
    TemDisabled,

    // --- tef: failed due to the transaction's own prior-state ---
    /// The exact transaction (by sequence/hash) was already applied.
    TefAlreadyApplied,
    /// Something the engine treats as "this should never happen" — a
    /// serialization failure, a balance that went negative mid-apply.
    /// Distinct from user-caused `tec*`/`tem*` results (§5.1).
    TefInternal,

    // --- ter: retriable, ledger state may change ---
    /// `Sequence` is ahead of the account's current sequence.
    TerPreSeq,
    /// The source account does not exist yet.
    TerNoAccount,
}

impl EngineResult {
    /// The numeric code a wire codec would serialize, in rippled's ranges:
    /// `tes` = 0, `tec` >= 100, `tem` in `[-299, -200]`, `tef` in `[-199, -100]`,
    /// `ter` in `[-99, -1]`.
    pub fn code(&self) -> i32 {
        match self {
            Self::TesSuccess => 0,

            Self::TecPathPartial => 101,
            Self::TecUnfundedPayment => 104,
            Self::TecUnfundedOffer => 103,
            Self::TecNoDst => 105,
            Self::TecNoDstInsufXrp => 125,
            Self::TecNoAuth => 106,
            Self::TecNoLine => 107,
            Self::TecFrozen => 137,
            Self::TecInsufficientReserve => 141,
            Self::TecDirFull => 121,
            Self::TecNoPermission => 139,
            Self::TecAmmInvalidTokens => 165,
            Self::TecAmmUnfunded => 166,
            Self::TecAmmNotFound => 168,
            Self::TecNoEntry => 158,
            Self::TecExpired => 148,
            Self::TecDuplicate => 149,
            Self::TecKilled => 150,

            Self::TemBadAmount => -298,
            Self::TemRedundant => -282,
            Self::TemInvalidFlag => -278,
            Self::TemMalformed => -299,
            Self::TemDisabled => -273,

            Self::TefAlreadyApplied => -190,
            Self::TefInternal => -181,

            Self::TerPreSeq => -98,
            Self::TerNoAccount => -96,
        }
    }

    pub fn class(&self) -> ResultClass {
        match self {
            Self::TesSuccess => ResultClass::Success,
            Self::TecPathPartial
            | Self::TecUnfundedPayment
            | Self::TecUnfundedOffer
            | Self::TecNoDst
            | Self::TecNoDstInsufXrp
            | Self::TecNoAuth
            | Self::TecNoLine
            | Self::TecFrozen
            | Self::TecInsufficientReserve
            | Self::TecDirFull
            | Self::TecNoPermission
            | Self::TecAmmInvalidTokens
            | Self::TecAmmUnfunded
            | Self::TecAmmNotFound
            | Self::TecNoEntry
            | Self::TecExpired
            | Self::TecDuplicate
            | Self::TecKilled => ResultClass::ClaimedCost,
            Self::TemBadAmount
            | Self::TemRedundant
            | Self::TemInvalidFlag
            | Self::TemMalformed
            | Self::TemDisabled => ResultClass::Malformed,
            Self::TefAlreadyApplied | Self::TefInternal => ResultClass::Failure,
            Self::TerPreSeq | Self::TerNoAccount => ResultClass::Retry,
        }
    }

    /// Whether the fee is claimed against the account even though the
    /// transaction's intended effect did not apply (`tec*`).
    pub fn claims_fee(&self) -> bool {
        self.class() == ResultClass::ClaimedCost
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::TesSuccess)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tes_success_is_zero_and_claims_no_fee() {
        assert_eq!(EngineResult::TesSuccess.code(), 0);
        assert!(!EngineResult::TesSuccess.claims_fee());
    }

    #[test]
    fn tec_codes_claim_the_fee() {
        assert!(EngineResult::TecUnfundedOffer.claims_fee());
        assert!(EngineResult::TecUnfundedOffer.code() >= 100);
    }

    #[test]
    fn tem_and_tef_never_claim_fee() {
        assert!(!EngineResult::TemBadAmount.claims_fee());
        assert!(!EngineResult::TefInternal.claims_fee());
        assert!(EngineResult::TemBadAmount.code() < -199);
        assert!(EngineResult::TefInternal.code() < 0 && EngineResult::TefInternal.code() >= -199);
    }
}
