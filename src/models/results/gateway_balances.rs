use alloc::{borrow::Cow, collections::BTreeMap};

use serde::{Deserialize, Serialize};

/// Response format for the gateway_balances method, which calculates the total
/// balances issued by a given account.
///
/// See Gateway Balances:
/// `<https://xrpl.org/gateway_balances.html>`
#[serde_with::skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GatewayBalances<'a> {
    /// The address of the account that issued the balances.
    pub account: Cow<'a, str>,
    /// (Omitted if empty) Total amounts held that are issued by others.
    /// In the recommended configuration, the issuing address should have none.
    pub assets: Option<BTreeMap<Cow<'a, str>, Cow<'a, [AssetBalance<'a>]>>>,
    /// (Omitted if empty) Amounts issued to the hotwallet addresses from the
    /// request. The keys are addresses and the values are arrays of currency
    /// amounts they hold.
    pub balances: Option<BTreeMap<Cow<'a, str>, Cow<'a, [AssetBalance<'a>]>>>,
    /// (Omitted if empty) Total amounts issued to addresses not excluded,
    /// as a map of currencies to the total value issued.
    pub obligations: Option<BTreeMap<Cow<'a, str>, Cow<'a, str>>>,
    /// (May be omitted) The identifying hash of the ledger version that was
    /// used to generate this response.
    pub ledger_hash: Option<Cow<'a, str>>,
    /// (May be omitted) The ledger index of the ledger version that was used
    /// to generate this response.
    pub ledger_index: Option<u32>,
    /// (Omitted if ledger_current_index is provided) The ledger index of the
    /// current in-progress ledger version, which was used to retrieve this
    /// information.
    pub ledger_current_index: Option<u32>,
}

/// Represents a balance for a specific currency in the assets field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AssetBalance<'a> {
    /// The currency code of the balance.
    pub currency: Cow<'a, str>,
    /// The amount of the currency.
    pub value: Cow<'a, str>,
}

impl<'a> Default for AssetBalance<'a> {
    fn default() -> Self {
        Self {
            currency: Cow::Borrowed("XRP"),
            value: Cow::Borrowed("0"),
        }
    }
}
