use alloc::string::ToString;
use alloc::{borrow::Cow, vec::Vec};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::requests::Marker;
use crate::models::{XRPLModelException, XRPLModelResult};

use super::{
    exceptions::XRPLResultException, metadata::TransactionMetadata, XRPLResponse, XRPLResult,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum AccountTxVersionMap<'a> {
    Default(AccountTx<'a>),
    V1(AccountTxV1<'a>),
}

impl Default for AccountTxVersionMap<'_> {
    fn default() -> Self {
        Self::Default(AccountTx::default())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountTxBase<'a, T> {
    /// Unique Address identifying the related account
    pub account: Cow<'a, str>,
    /// The ledger index of the earliest ledger actually searched for
    /// transactions.
    pub ledger_index_min: Option<u32>,
    /// The ledger index of the most recent ledger actually searched for
    /// transactions.
    pub ledger_index_max: Option<u32>,
    /// The limit value used in the request. (This may differ from the actual
    /// limit value enforced by the server.)
    pub limit: Option<u16>,
    /// Array of transactions matching the request's criteria, as explained
    /// below.
    pub transactions: Vec<T>,
    /// If included and set to true, the information in this response comes
    /// from a validated ledger version. Otherwise, the information is
    /// subject to change.
    pub validated: Option<bool>,
    /// Server-defined value indicating the response is paginated. Pass this
    /// to the next call to resume where this call left off.
    pub marker: Option<Marker<'a>>,
}

/// Response from an account_tx request, containing information about
/// transactions related to a specific account.
///
/// See Account TX:
/// `<https://xrpl.org/account_tx.html>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountTx<'a> {
    #[serde(flatten)]
    pub base: AccountTxBase<'a, AccountTxTransaction<'a>>,
    /// (JSON mode) The transaction results metadata in JSON.
    pub meta: Option<TransactionMetadata<'a>>,
    /// (Binary mode) The transaction results metadata as a hex string.
    pub meta_blob: Option<Cow<'a, str>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountTxV1<'a> {
    #[serde(flatten)]
    pub base: AccountTxBase<'a, AccountTxTransactionV1<'a>>,
    /// If binary is true, then this is a hex string of the transaction
    /// results metadata. Otherwise, the transaction results metadata is
    /// included in JSON format.
    pub meta: Option<TransactionMetadata<'a>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct TransactionBase<'a> {
    /// The ledger index of the ledger version that included this transaction.
    pub ledger_index: u32,
    /// Whether or not the transaction is included in a validated ledger. Any
    /// transaction not yet in a validated ledger is subject to change.
    pub validated: bool,
    /// (Binary mode) A unique hex string defining the transaction.
    pub tx_blob: Option<Cow<'a, str>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountTxTransaction<'a> {
    #[serde(flatten)]
    pub base: TransactionBase<'a>,
    /// The ledger close time represented in ISO 8601 time format.
    pub close_time_iso: Cow<'a, str>,
    /// The unique hash identifier of the transaction.
    pub hash: Cow<'a, str>,
    /// A hex string of the ledger version that included this transaction.
    pub ledger_hash: Cow<'a, str>,
    /// (JSON mode) JSON object defining the transaction.
    pub tx_json: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct AccountTxTransactionV1<'a> {
    #[serde(flatten)]
    pub base: TransactionBase<'a>,
    /// (Binary mode) A hex string of the transaction in binary format.
    pub tx: Cow<'a, str>,
}

impl<'a> TryFrom<XRPLResult<'a>> for AccountTxVersionMap<'a> {
    type Error = XRPLModelException;

    fn try_from(result: XRPLResult<'a>) -> XRPLModelResult<Self> {
        match result {
            XRPLResult::AccountTx(account_tx) => Ok(account_tx),
            res => Err(XRPLResultException::UnexpectedResultType(
                "AccountTx".to_string(),
                res.get_name(),
            )
            .into()),
        }
    }
}

// impl<'a> TryFrom<XRPLResponse<'a>> for AccountTxVersionMap<'a> {
//     type Error = XRPLModelException;
//
//     fn try_from(response: XRPLResponse<'a>) -> XRPLModelResult<Self> {
//         match response.result {
//             Some(result) => AccountTxVersionMap::try_from(result),
//             None => Err(XRPLModelException::MissingField("result".to_string())),
//         }
//     }
// }
