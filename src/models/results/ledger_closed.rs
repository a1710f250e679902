use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Response format for the ledger_closed method, which returns the unique
/// identifiers of the most recently closed ledger.
///
/// See Ledger Closed:
/// `<https://xrpl.org/ledger_closed.html>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct LedgerClosed<'a> {
    /// The unique Hash of this ledger version, in hexadecimal.
    pub ledger_hash: Cow<'a, str>,

    /// The ledger index of this ledger version.
    pub ledger_index: u32,
}
