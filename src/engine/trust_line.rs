//! `RippleState` (trust line) helpers (§4.3): low/high balance bookkeeping,
//! the canonical account ordering rippled stores every trust line under,
//! and the `TrustSet` apply logic that creates/updates/clears a line,
//! built on `models::ledger::objects::RippleState`.

use alloc::borrow::Cow;
use alloc::string::ToString;
use thiserror::Error;

use crate::core::addresscodec::{decode_classic_address, encode_classic_address};
use crate::engine::amount::IouAmount;
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::keylet;
use crate::engine::ledger_view::LedgerView;
use crate::engine::result::EngineResult;
use crate::engine::state_table::StateTable;
use crate::models::amount::{Amount, IssuedCurrencyAmount};
use crate::models::ledger::objects::{AccountRoot, LedgerEntry, RippleState, RippleStateFlag};
use crate::models::transactions::trust_set::{TrustSet, TrustSetFlag};
use crate::models::transactions::Transaction;
use crate::models::FlagCollection;

/// A sentinel address rippled substitutes for `Account`/`Destination` in
/// trust-line-related metadata rows when no "real" account is the sensible
/// counterparty value — the all-zero-but-one-bit AccountID.
pub const ACCOUNT_ONE: [u8; 20] = {
    let mut bytes = [0u8; 20];
    bytes[19] = 1;
    bytes
};

/// Whether `account` is the "low" side of a trust line between `account`
/// and `other`, per rippled's unsigned byte-wise account ID comparison.
pub fn is_low_account(account: &[u8; 20], other: &[u8; 20]) -> bool {
    account < other
}

/// Reads the balance of a `RippleState` object from `account`'s perspective:
/// `RippleState::balance` is stored from the low account's point of view, so
/// the high account's view is the negation.
pub fn balance_from(state: &RippleState<'_>, account_is_low: bool) -> Result<IouAmount, EngineError> {
    let stored = match &state.balance {
        Amount::IssuedCurrencyAmount(amount) => IouAmount::try_from(amount)?,
        Amount::XRPAmount(_) => {
            return Err(EngineError::Internal(
                "RippleState.balance must be an issued currency amount".into(),
            ))
        }
    };
    Ok(if account_is_low { stored } else { stored.neg() })
}

/// Builds the `Balance` field to store on a `RippleState` object given a new
/// balance from `account`'s perspective (mirrors `balance_from`'s inverse).
pub fn balance_to_store<'a>(
    currency: Cow<'a, str>,
    balance_from_account: IouAmount,
    account_is_low: bool,
) -> IssuedCurrencyAmount<'a> {
    let stored = if account_is_low {
        balance_from_account
    } else {
        balance_from_account.neg()
    };
    IssuedCurrencyAmount::new(
        currency,
        Cow::Borrowed(""),
        stored.value().to_string().into(),
    )
}

/// The limit `account` has extended to `other` on this trust line, read from
/// the correct side (`low_limit` if `account` is low, `high_limit` otherwise).
pub fn limit_for(state: &RippleState<'_>, account_is_low: bool) -> Result<IouAmount, EngineError> {
    let amount = if account_is_low {
        &state.low_limit
    } else {
        &state.high_limit
    };
    match amount {
        Amount::IssuedCurrencyAmount(amount) => IouAmount::try_from(amount),
        Amount::XRPAmount(_) => Err(EngineError::Internal(
            "RippleState limit must be an issued currency amount".into(),
        )),
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum TrustLineError {
    #[error("the account setting the trust line does not exist")]
    OwnerMissing,
    #[error("a trust line cannot be extended to the account's own currency")]
    SelfReferential,
    #[error("the counterparty account for this trust line does not exist")]
    CounterpartyMissing,
    #[error("opening this trust line would drop the owner below its reserve")]
    InsufficientReserve,
}

impl TrustLineError {
    pub fn result(&self) -> EngineResult {
        match self {
            Self::OwnerMissing => EngineResult::TerNoAccount,
            Self::SelfReferential => EngineResult::TemMalformed,
            Self::CounterpartyMissing => EngineResult::TecNoDst,
            Self::InsufficientReserve => EngineResult::TecInsufficientReserve,
        }
    }
}

fn account_id(address: &str) -> Result<[u8; 20], EngineError> {
    let bytes = decode_classic_address(address)
        .map_err(|e| EngineError::Internal(alloc::format!("malformed account address: {e}")))?;
    bytes
        .try_into()
        .map_err(|_| EngineError::Internal("decoded account id was not 20 bytes".to_string()))
}

fn read_account(
    table: &mut StateTable,
    view: &dyn LedgerView,
    id: &[u8; 20],
) -> Option<AccountRoot<'static>> {
    match table.read(view, &keylet::account(id))? {
        LedgerEntry::AccountRoot(root) => Some(root),
        _ => None,
    }
}

fn drops_of(root: &AccountRoot<'static>) -> Result<crate::engine::amount::Drops, EngineError> {
    match &root.balance {
        Some(Amount::XRPAmount(amount)) => crate::engine::amount::Drops::try_from(amount),
        _ => Err(EngineError::Internal("AccountRoot.balance must be an XRP amount".into())),
    }
}

fn bump_owner_count(
    table: &mut StateTable,
    view: &dyn LedgerView,
    id: &[u8; 20],
    delta: i64,
) -> Result<(), EngineError> {
    let key = keylet::account(id);
    let Some(mut root) = read_account(table, view, id) else {
        return Err(EngineError::Internal("owner account vanished mid-apply".into()));
    };
    root.owner_count = (root.owner_count as i64 + delta).max(0) as u32;
    table.modify(&key, LedgerEntry::AccountRoot(root)).map_err(EngineError::from)
}

fn set_flag(state: &mut RippleState<'static>, flag: RippleStateFlag) {
    if !state.common_fields.flags.0.contains(&flag) {
        state.common_fields.flags.0.push(flag);
    }
}

fn clear_flag(state: &mut RippleState<'static>, flag: &RippleStateFlag) {
    state.common_fields.flags.0.retain(|f| f != flag);
}

fn apply_flags(state: &mut RippleState<'static>, tx: &TrustSet<'_>, owner_is_low: bool) {
    let (auth_flag, no_ripple_flag, freeze_flag) = if owner_is_low {
        (RippleStateFlag::LsfLowAuth, RippleStateFlag::LsfLowNoRipple, RippleStateFlag::LsfLowFreeze)
    } else {
        (RippleStateFlag::LsfHighAuth, RippleStateFlag::LsfHighNoRipple, RippleStateFlag::LsfHighFreeze)
    };
    if tx.has_flag(&TrustSetFlag::TfSetAuth) {
        set_flag(state, auth_flag);
    }
    if tx.has_flag(&TrustSetFlag::TfSetNoRipple) {
        set_flag(state, no_ripple_flag.clone());
    }
    if tx.has_flag(&TrustSetFlag::TfClearNoRipple) {
        clear_flag(state, &no_ripple_flag);
    }
    if tx.has_flag(&TrustSetFlag::TfSetFreeze) {
        set_flag(state, freeze_flag.clone());
    }
    if tx.has_flag(&TrustSetFlag::TfClearFreeze) {
        clear_flag(state, &freeze_flag);
    }
}

fn set_limit(state: &mut RippleState<'static>, owner_is_low: bool, limit: IouAmount) {
    let target = if owner_is_low { &mut state.low_limit } else { &mut state.high_limit };
    if let Amount::IssuedCurrencyAmount(existing) = target {
        existing.value = limit.value().to_string().into();
    }
}

fn set_quality(
    state: &mut RippleState<'static>,
    owner_is_low: bool,
    quality_in: Option<u32>,
    quality_out: Option<u32>,
) {
    if owner_is_low {
        if quality_in.is_some() {
            state.low_quality_in = quality_in;
        }
        if quality_out.is_some() {
            state.low_quality_out = quality_out;
        }
    } else {
        if quality_in.is_some() {
            state.high_quality_in = quality_in;
        }
        if quality_out.is_some() {
            state.high_quality_out = quality_out;
        }
    }
}

/// Whether an existing `RippleState` can be erased outright: both sides owe
/// nothing and neither has extended a limit. Quality settings and the auth
/// flags don't block deletion — only an outstanding balance or limit does.
fn is_deletable(state: &RippleState<'static>) -> bool {
    let zero = |amount: &Amount<'_>| match amount {
        Amount::IssuedCurrencyAmount(a) => IouAmount::try_from(a).map(|v| v.is_zero()).unwrap_or(false),
        Amount::XRPAmount(_) => false,
    };
    zero(&state.balance) && zero(&state.low_limit) && zero(&state.high_limit)
}

fn new_ripple_state(
    owner_address: &str,
    issuer_address: &str,
    owner_is_low: bool,
    currency: &str,
) -> Result<RippleState<'static>, EngineError> {
    let (low_address, high_address) = if owner_is_low {
        (owner_address.to_string(), issuer_address.to_string())
    } else {
        (issuer_address.to_string(), owner_address.to_string())
    };
    let balance_issuer = encode_classic_address(&ACCOUNT_ONE)
        .map_err(|e| EngineError::Internal(alloc::format!("failed to encode ACCOUNT_ONE: {e}")))?;
    Ok(RippleState::new(
        FlagCollection::default(),
        None,
        None,
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
            currency.to_string().into(),
            balance_issuer.into(),
            "0".into(),
        )),
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
            currency.to_string().into(),
            high_address.into(),
            "0".into(),
        )),
        "0".into(),
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
            currency.to_string().into(),
            low_address.into(),
            "0".into(),
        )),
        "0".into(),
        "".into(),
        0,
        None,
        None,
        None,
        None,
    ))
}

/// Applies a `TrustSet` transaction (§4.7): creates, updates, or clears a
/// trust line's limit/quality/no-ripple/freeze/auth settings. Balances are
/// never touched here — only `engine::payment`/`engine::offer` move IOU
/// value across a line once it exists.
pub fn apply(
    table: &mut StateTable,
    view: &dyn LedgerView,
    config: &EngineConfig,
    owner_address: &str,
    tx: &TrustSet<'_>,
) -> Result<EngineResult, EngineError> {
    let owner_id = account_id(owner_address)?;
    let issuer_id = account_id(&tx.limit_amount.issuer)?;
    if owner_id == issuer_id {
        return Ok(TrustLineError::SelfReferential.result());
    }

    let Some(owner_root) = read_account(table, view, &owner_id) else {
        return Ok(TrustLineError::OwnerMissing.result());
    };
    if !table.exists(view, &keylet::account(&issuer_id)) {
        return Ok(TrustLineError::CounterpartyMissing.result());
    }

    let owner_is_low = is_low_account(&owner_id, &issuer_id);
    let currency = tx.limit_amount.currency.to_string();
    let requested_limit = IouAmount::try_from(&tx.limit_amount)?;
    let line_key = keylet::line(&owner_id, &issuer_id, currency.as_bytes());

    let existed = table.exists(view, &line_key);
    let mut state = match table.read(view, &line_key) {
        Some(LedgerEntry::RippleState(state)) => state,
        _ => {
            if !existed
                && requested_limit.is_zero()
                && tx.quality_in.is_none()
                && tx.quality_out.is_none()
            {
                return Ok(EngineResult::TesSuccess);
            }
            if drops_of(&owner_root)?.0 < config.reserve_for(owner_root.owner_count + 1) {
                return Ok(TrustLineError::InsufficientReserve.result());
            }
            new_ripple_state(owner_address, &tx.limit_amount.issuer, owner_is_low, &currency)?
        }
    };

    apply_flags(&mut state, tx, owner_is_low);
    set_limit(&mut state, owner_is_low, requested_limit);
    set_quality(&mut state, owner_is_low, tx.quality_in, tx.quality_out);

    if existed {
        if is_deletable(&state) {
            table.erase(&line_key)?;
            bump_owner_count(table, view, &owner_id, -1)?;
            bump_owner_count(table, view, &issuer_id, -1)?;
        } else {
            table.modify(&line_key, LedgerEntry::RippleState(state))?;
        }
    } else {
        table.insert(line_key, LedgerEntry::RippleState(state))?;
        bump_owner_count(table, view, &owner_id, 1)?;
        bump_owner_count(table, view, &issuer_id, 1)?;
    }

    Ok(EngineResult::TesSuccess)
}
