//! Transaction execution core: the part of an XRPL-compatible node that turns
//! a validated transaction plus a ledger snapshot into a result code and a
//! set of ledger-entry mutations. Binary wire format, networking, consensus
//! and persistent storage are the host's problem; this crate only needs
//! read/write access to ledger-entry bytes keyed by a `Keylet`
//! ([`ledger_view::LedgerView`]).
//!
//! Module layout mirrors the dependency order components actually need each
//! other in: `keylet` and `ledger_view` are the foundation, `amount` and
//! `trust_line` supply the arithmetic and balance-sheet primitives every
//! transaction-level module builds on, `state_table` is the per-transaction
//! mutation tracker every apply function threads through, and `payment`/
//! `offer`/`amm` are the transaction-type-specific engines `dispatch` routes
//! to.

pub mod amendments;
pub mod amm;
pub mod amount;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod field_catalog;
pub mod keylet;
pub mod ledger_view;
pub mod offer;
pub mod payment;
pub mod quality;
pub mod result;
pub mod state_table;
pub mod trust_line;

pub use config::EngineConfig;
pub use dispatch::{apply, DispatchOutcome, EngineTransaction};
pub use error::EngineError;
pub use ledger_view::{LedgerView, MemoryLedgerView};
pub use result::{EngineResult, ResultClass};
pub use state_table::{AffectedNode, StateTable};
