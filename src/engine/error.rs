//! Top-level engine error, following the teacher's one-`exceptions.rs`-per-module
//! convention (`models/transactions/exceptions.rs`): each component gets its
//! own `thiserror`-derived enum, bridged `#[from]` into this crate-wide type.
//!
//! Unlike the model layer's `thiserror-no-std`, the engine targets `std`
//! (the `engine` feature pulls it in, see `Cargo.toml`), so this uses plain
//! `thiserror` instead.

use alloc::string::String;
use thiserror::Error;

use super::amm::AmmError;
use super::offer::OfferError;
use super::payment::PaymentError;
use super::result::EngineResult;
use super::state_table::StateTableError;
use super::trust_line::TrustLineError;

/// Any failure surfaced while applying a transaction.
///
/// Every variant maps to an [`EngineResult`] via [`EngineError::result`] so a
/// caller always gets a symbolic result code instead of an unhandled error
/// path (§7 propagation policy in the design notes).
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum EngineError {
    #[error(transparent)]
    StateTable(#[from] StateTableError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error(transparent)]
    Offer(#[from] OfferError),
    #[error(transparent)]
    Amm(#[from] AmmError),
    #[error(transparent)]
    TrustLine(#[from] TrustLineError),
    /// A state invariant broke in a way that isn't attributable to the
    /// submitted transaction (e.g. serialization failure, negative balance
    /// surfacing mid-apply). Always maps to `tefINTERNAL`.
    #[error("internal engine invariant violated: {0}")]
    Internal(String),
}

impl EngineError {
    pub fn result(&self) -> EngineResult {
        match self {
            Self::StateTable(e) => e.result(),
            Self::Payment(e) => e.result(),
            Self::Offer(e) => e.result(),
            Self::Amm(e) => e.result(),
            Self::TrustLine(e) => e.result(),
            Self::Internal(_) => EngineResult::TefInternal,
        }
    }
}
