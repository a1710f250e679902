pub mod account_root;
pub mod amendments;
pub mod amm;
pub mod check;
pub mod deposit_preauth;
pub mod directory_node;
pub mod escrow;
pub mod fee_settings;
pub mod ledger_hashes;
pub mod negative_unl;
pub mod nftoken_offer;
pub mod nftoken_page;
pub mod offer;
pub mod pay_channel;
pub mod ripple_state;
pub mod signer_list;
pub mod ticket;

// `bridge`, `xchain_owned_claim_id` and `xchain_owned_create_account_claim_id`
// are left unwired: they depend on an `XChainBridge` type that was never
// defined anywhere in this crate, and cross-chain bridge transactions are
// outside this crate's scope. The source files stay in the tree for
// reference; see DESIGN.md.

pub use account_root::*;
pub use amendments::*;
pub use amm::*;
pub use check::*;
pub use deposit_preauth::*;
pub use directory_node::*;
pub use escrow::*;
pub use fee_settings::*;
pub use ledger_hashes::*;
pub use negative_unl::*;
pub use nftoken_offer::*;
pub use nftoken_page::*;
pub use offer::*;
pub use pay_channel::*;
pub use ripple_state::*;
pub use signer_list::*;
pub use ticket::*;
pub use xchain_owned_create_account_claim_id::*;

use alloc::borrow::Cow;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use strum::IntoEnumIterator;
use strum_macros::Display;

use crate::models::transactions::FlagCollection;

/// The type of a ledger entry, as it appears in the `LedgerEntryType` field of
/// every ledger object. Serializes as the PascalCase name shown here; the
/// numeric form (`type_code`) is the value written into the object's binary
/// header and used to build keylets.
///
/// See Ledger Object Types:
/// `<https://xrpl.org/ledger-entry-types.html>`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq)]
pub enum LedgerEntryType {
    AccountRoot,
    Amendments,
    AMM,
    Bridge,
    Check,
    DepositPreauth,
    DirectoryNode,
    Escrow,
    FeeSettings,
    LedgerHashes,
    NegativeUNL,
    NFTokenOffer,
    NFTokenPage,
    Offer,
    PayChannel,
    RippleState,
    SignerList,
    Ticket,
    XChainOwnedClaimID,
    XChainOwnedCreateAccountClaimID,
}

impl LedgerEntryType {
    /// The `LedgerEntryType` code as it is written into the object's binary
    /// header and used as the family tag in keylet construction.
    pub fn type_code(&self) -> u16 {
        match self {
            LedgerEntryType::AccountRoot => 0x0061,
            LedgerEntryType::DirectoryNode => 0x0064,
            LedgerEntryType::RippleState => 0x0072,
            LedgerEntryType::Ticket => 0x0054,
            LedgerEntryType::SignerList => 0x0053,
            LedgerEntryType::Offer => 0x006F,
            LedgerEntryType::LedgerHashes => 0x0068,
            LedgerEntryType::Amendments => 0x0066,
            LedgerEntryType::FeeSettings => 0x0073,
            LedgerEntryType::Escrow => 0x0075,
            LedgerEntryType::PayChannel => 0x0078,
            LedgerEntryType::Check => 0x0043,
            LedgerEntryType::DepositPreauth => 0x0070,
            LedgerEntryType::NegativeUNL => 0x004E,
            LedgerEntryType::NFTokenPage => 0x0050,
            LedgerEntryType::NFTokenOffer => 0x0037,
            LedgerEntryType::AMM => 0x0079,
            LedgerEntryType::Bridge => 0x0069,
            LedgerEntryType::XChainOwnedClaimID => 0x0071,
            LedgerEntryType::XChainOwnedCreateAccountClaimID => 0x0074,
        }
    }
}

/// Fields shared by every ledger object that was generalized onto the
/// `CommonFields`/`LedgerObject` pair instead of repeating `ledger_entry_type`
/// and `flags` on each struct (compare `AccountRoot`, `Offer` and
/// `DirectoryNode`, which predate this and still inline those two fields).
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonFields<'a, F>
where
    F: IntoEnumIterator + Serialize,
{
    #[serde(rename = "LedgerEntryType")]
    pub ledger_entry_type: LedgerEntryType,
    #[serde(rename = "Flags", with = "crate::_serde::lgr_obj_flags")]
    pub flags: FlagCollection<F>,
    #[serde(rename = "index")]
    pub index: Option<Cow<'a, str>>,
    #[serde(rename = "ledger_index")]
    pub ledger_index: Option<Cow<'a, str>>,
}

impl<'a, F> CommonFields<'a, F>
where
    F: IntoEnumIterator + Serialize,
{
    pub fn get_ledger_entry_type(&self) -> LedgerEntryType {
        self.ledger_entry_type
    }
}

/// Implemented by every ledger object that carries `CommonFields`, so engine
/// code can read an object's type without matching on the concrete struct.
pub trait LedgerObject<F>
where
    F: IntoEnumIterator + Serialize,
{
    fn get_ledger_entry_type(&self) -> LedgerEntryType;
}

/// Any ledger object, as found in `account_state` on a full ledger dump.
/// Untagged: the concrete variant is recovered from each struct's own
/// `LedgerEntryType` field during deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LedgerEntry<'a> {
    AccountRoot(AccountRoot<'a>),
    Amendments(Amendments<'a>),
    AMM(AMM<'a>),
    Check(Check<'a>),
    DepositPreauth(DepositPreauth<'a>),
    DirectoryNode(DirectoryNode<'a>),
    Escrow(Escrow<'a>),
    FeeSettings(FeeSettings<'a>),
    LedgerHashes(LedgerHashes<'a>),
    NegativeUNL(NegativeUNL<'a>),
    Offer(Offer<'a>),
    PayChannel(PayChannel<'a>),
    RippleState(RippleState<'a>),
    SignerList(SignerList<'a>),
    Ticket(Ticket<'a>),
}
