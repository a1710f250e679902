use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Response format for the channel_verify method, which verifies the
/// signature of a payment channel claim.
///
/// See Channel Verify:
/// `<https://xrpl.org/channel_verify.html>`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ChannelVerify<'a> {
    /// The credentials specified in the request, if any.
    pub credentials: Option<Cow<'a, [Cow<'a, str>]>>,
    /// Whether the signature is valid for the stated amount, channel,
    /// and public key.
    pub signature_verified: bool,
    /// The identifying hash of the ledger that was used to generate
    /// this response.
    pub ledger_hash: Option<Cow<'a, str>>,
    /// The ledger index of the ledger version that was used to generate
    /// this response.
    pub ledger_index: Option<u32>,
    /// The ledger index of the current in-progress ledger version.
    pub ledger_current_index: Option<u32>,
    /// If true, the information comes from a validated ledger version.
    pub validated: Option<bool>,
}
