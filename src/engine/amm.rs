//! AMM Transaction Layer (§4.4): per-type validation and a conservative,
//! non-bonding-curve apply for `AMMCreate`/`AMMDeposit`/`AMMWithdraw`/
//! `AMMVote`/`AMMBid`/`AMMDelete`, plus the auction-slot bid-pricing
//! algorithm. Full constant-product pool-balance math is explicitly out of
//! scope beyond the auction-slot price curve and the per-type validation
//! rules below — deposit/withdraw LP-token sizing here uses a linear
//! proportional approximation, not the exact XRPL bonding curve.
//!
//! `AMMClawback` is not implemented: the teacher crate has neither a
//! `TransactionType::AMMClawback` variant nor an `AMMClawback` transaction
//! model to validate against.

use alloc::borrow::Cow;
use alloc::format;
use alloc::string::{String, ToString};
use alloc::vec::Vec;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::core::addresscodec::{decode_classic_address, encode_classic_address};
use crate::core::keypairs::utils::sha512_first_half;
use crate::engine::amount::{Drops, IouAmount};
use crate::engine::config::EngineConfig;
use crate::engine::error::EngineError;
use crate::engine::keylet::{self, Keylet};
use crate::engine::ledger_view::LedgerView;
use crate::engine::result::EngineResult;
use crate::engine::state_table::StateTable;
use crate::engine::trust_line;
use crate::models::amount::{Amount, IssuedCurrencyAmount};
use crate::models::currency::Currency;
use crate::models::ledger::objects::{
    AccountRoot, AccountRootFlag, AuctionSlot, LedgerEntry, VoteEntry, AMM,
};
use crate::models::ledger::objects::amm::AuthAccount as LedgerAuthAccount;
use crate::models::transactions::amm_bid::AMMBid;
use crate::models::transactions::amm_create::{AMMCreate, AMM_CREATE_MAX_FEE};
use crate::models::transactions::amm_delete::AMMDelete;
use crate::models::transactions::amm_deposit::{AMMDeposit, AMMDepositFlag};
use crate::models::transactions::amm_vote::{AMMVote, AMM_VOTE_MAX_TRADING_FEE};
use crate::models::transactions::amm_withdraw::{AMMWithdraw, AMMWithdrawFlag};

/// Minimum auction-slot price as a fraction of outstanding LP tokens, once no
/// one holds the slot (rippled's `AMM_MIN_SLOT_PRICE_FRACTION`).
const MIN_SLOT_PRICE_DENOMINATOR: i64 = 25_000;
/// Auction slot term, in seconds (24 hours).
const AUCTION_SLOT_SECONDS: u32 = 24 * 60 * 60;
/// Premium an outbidding bid must clear over the current holder's price.
const OUTBID_PREMIUM_NUMERATOR: i64 = 105;
const OUTBID_PREMIUM_DENOMINATOR: i64 = 100;
/// Maximum number of simultaneous `VoteEntry` rows rippled tracks per AMM.
const MAX_VOTE_SLOTS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum AmmError {
    #[error("account does not exist")]
    AccountMissing,
    #[error("asset and asset2 must name two different assets")]
    AssetsIdentical,
    #[error("amounts must be positive")]
    BadAmount,
    #[error("an AMM instance already exists for this asset pair")]
    AlreadyExists,
    #[error("no AMM instance exists for this asset pair")]
    NotFound,
    #[error("account has insufficient funds for this AMM action")]
    InsufficientFunds,
    #[error("trading fee exceeds the maximum allowed value")]
    TradingFeeOutOfRange,
    #[error("deposit/withdraw field combination does not match a known mode")]
    InvalidMode,
    #[error("BidMin/BidMax/pool value make this bid impossible to satisfy")]
    BidOutOfRange,
    #[error("withdrawal would redeem more LP tokens than the account holds")]
    LpTokenBalanceExceeded,
    #[error("the AMM still holds outstanding LP tokens and cannot be deleted")]
    PoolNotEmpty,
}

impl AmmError {
    pub fn result(&self) -> EngineResult {
        match self {
            Self::AccountMissing => EngineResult::TerNoAccount,
            Self::AssetsIdentical => EngineResult::TemRedundant,
            Self::BadAmount => EngineResult::TemBadAmount,
            Self::AlreadyExists => EngineResult::TecDuplicate,
            Self::NotFound => EngineResult::TecAmmNotFound,
            Self::InsufficientFunds => EngineResult::TecAmmUnfunded,
            Self::TradingFeeOutOfRange => EngineResult::TecAmmInvalidTokens,
            Self::InvalidMode => EngineResult::TemMalformed,
            Self::BidOutOfRange => EngineResult::TecAmmInvalidTokens,
            Self::LpTokenBalanceExceeded => EngineResult::TecAmmInvalidTokens,
            Self::PoolNotEmpty => EngineResult::TecAmmInvalidTokens,
        }
    }
}

fn account_id(address: &str) -> Result<[u8; 20], EngineError> {
    let bytes = decode_classic_address(address)
        .map_err(|e| EngineError::Internal(format!("malformed account address: {e}")))?;
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

fn decimal_of(amount: &Amount<'_>) -> Result<Decimal, EngineError> {
    match amount {
        Amount::XRPAmount(drops) => Ok(Decimal::from(Drops::try_from(drops)?.0)),
        Amount::IssuedCurrencyAmount(iou) => Ok(IouAmount::try_from(iou)?.value()),
    }
}

fn amount_with_value(template: &Amount<'_>, value: Decimal) -> Amount<'static> {
    match template {
        Amount::XRPAmount(_) => {
            let drops: i64 = value.try_into().unwrap_or(0);
            Amount::XRPAmount(Drops(drops).into())
        }
        Amount::IssuedCurrencyAmount(iou) => Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
            iou.currency.clone().into_owned().into(),
            iou.issuer.clone().into_owned().into(),
            value.to_string().into(),
        )),
    }
}

/// `currency[:issuer]` bytes identifying an asset for keylet/ordering
/// purposes, matching the `currency`/`issuer` pair `Currency` already holds.
fn asset_bytes(asset: &Currency<'_>) -> Vec<u8> {
    match asset {
        Currency::XRP(_) => b"XRP".to_vec(),
        Currency::IssuedCurrency(iou) => {
            format!("{}:{}", iou.currency, iou.issuer).into_bytes()
        }
    }
}

fn amm_keylet(asset: &Currency<'_>, asset2: &Currency<'_>) -> Keylet {
    keylet::amm(&asset_bytes(asset), &asset_bytes(asset2))
}

fn amm_account_id(amm_keylet: &Keylet) -> [u8; 20] {
    amm_keylet.key[..20].try_into().expect("keylet key is 32 bytes")
}

/// The non-standard (40 hex char) currency code rippled mints for an AMM
/// pool's LP tokens, derived from the pool's keylet rather than the asset
/// pair directly, so it never collides with a real ISO currency code.
fn lp_currency_code(amm_keylet: &Keylet) -> String {
    let hash = sha512_first_half(&amm_keylet.key);
    let mut out = String::with_capacity(40);
    for byte in &hash[..20] {
        out.push_str(&format!("{byte:02X}"));
    }
    out
}

fn hex_index(keylet: &Keylet) -> String {
    let mut out = String::with_capacity(64);
    for byte in keylet.key {
        out.push_str(&format!("{byte:02X}"));
    }
    out
}

/// Moves `amount` of `asset` from `from` to `to`; for XRP this adjusts both
/// `AccountRoot.balance` fields, for an issued currency it adjusts the trust
/// line between the account and the asset's issuer (creating the AMM side
/// of that line on the pool's first deposit).
fn move_asset(
    table: &mut StateTable,
    view: &dyn LedgerView,
    from: &[u8; 20],
    to: &[u8; 20],
    asset: &Amount<'_>,
    amount: Decimal,
) -> Result<Option<EngineResult>, EngineError> {
    match asset {
        Amount::XRPAmount(_) => {
            let drops = Drops(amount.try_into().map_err(|_| {
                EngineError::Internal("drops amount did not fit in i64 during an AMM transfer".to_string())
            })?);
            let from_key = keylet::account(from);
            let Some(mut from_root) = read_account(table, view, from) else {
                return Ok(Some(AmmError::AccountMissing.result()));
            };
            let from_balance = match &from_root.balance {
                Some(Amount::XRPAmount(a)) => Drops::try_from(a)?,
                _ => return Err(EngineError::Internal("AccountRoot.balance missing".to_string())),
            };
            if from_balance.0 < drops.0 {
                return Ok(Some(AmmError::InsufficientFunds.result()));
            }
            from_root.balance = Some(Amount::XRPAmount(from_balance.checked_sub(drops)?.into()));
            table.modify(&from_key, LedgerEntry::AccountRoot(from_root))?;

            let to_key = keylet::account(to);
            let Some(mut to_root) = read_account(table, view, to) else {
                return Ok(Some(AmmError::AccountMissing.result()));
            };
            let to_balance = match &to_root.balance {
                Some(Amount::XRPAmount(a)) => Drops::try_from(a)?,
                _ => return Err(EngineError::Internal("AccountRoot.balance missing".to_string())),
            };
            to_root.balance = Some(Amount::XRPAmount(to_balance.checked_add(drops)?.into()));
            table.modify(&to_key, LedgerEntry::AccountRoot(to_root))?;
            Ok(None)
        }
        Amount::IssuedCurrencyAmount(iou) => {
            let issuer_id = account_id(&iou.issuer)?;
            let value = IouAmount::new(amount);
            if *from != issuer_id {
                match debit_trust_line(table, view, from, &issuer_id, &iou.currency, value)? {
                    Some(result) => return Ok(Some(result)),
                    None => {}
                }
            }
            if *to != issuer_id {
                match credit_or_open_trust_line(table, view, to, &issuer_id, &iou.currency, value)? {
                    Some(result) => return Ok(Some(result)),
                    None => {}
                }
            }
            Ok(None)
        }
    }
}

fn debit_trust_line(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account: &[u8; 20],
    issuer: &[u8; 20],
    currency: &str,
    amount: IouAmount,
) -> Result<Option<EngineResult>, EngineError> {
    let key = keylet::line(account, issuer, currency.as_bytes());
    let Some(LedgerEntry::RippleState(mut state)) = table.read(view, &key) else {
        return Ok(Some(EngineResult::TecNoLine));
    };
    let is_low = trust_line::is_low_account(account, issuer);
    let current = trust_line::balance_from(&state, is_low)?;
    if current.compare(amount) == core::cmp::Ordering::Less {
        return Ok(Some(AmmError::InsufficientFunds.result()));
    }
    let updated = current.sub(amount);
    state.balance = Amount::IssuedCurrencyAmount(trust_line::balance_to_store(
        currency.to_string().into(),
        updated,
        is_low,
    ));
    table.modify(&key, LedgerEntry::RippleState(state))?;
    Ok(None)
}

/// Credits `account`'s trust line to `issuer`, auto-creating it (with an
/// unlimited-for-this-engine limit) if it doesn't exist yet — mirrors how
/// rippled auto-opens an AMM LP-token trust line on an account's first
/// deposit, with no separate `TrustSet` required.
fn credit_or_open_trust_line(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account: &[u8; 20],
    issuer: &[u8; 20],
    currency: &str,
    amount: IouAmount,
) -> Result<Option<EngineResult>, EngineError> {
    let key = keylet::line(account, issuer, currency.as_bytes());
    let is_low = trust_line::is_low_account(account, issuer);
    match table.read(view, &key) {
        Some(LedgerEntry::RippleState(mut state)) => {
            let current = trust_line::balance_from(&state, is_low)?;
            let updated = current.add(amount);
            state.balance = Amount::IssuedCurrencyAmount(trust_line::balance_to_store(
                currency.to_string().into(),
                updated,
                is_low,
            ));
            table.modify(&key, LedgerEntry::RippleState(state))?;
        }
        _ => {
            let (low_id, high_id) = if is_low { (account, issuer) } else { (issuer, account) };
            let zero = IssuedCurrencyAmount::new(currency.to_string().into(), Cow::Borrowed(""), "0".into());
            let unlimited =
                IssuedCurrencyAmount::new(currency.to_string().into(), Cow::Borrowed(""), "1000000000000000".into());
            let balance = trust_line::balance_to_store(currency.to_string().into(), amount, is_low);
            let state = crate::models::ledger::objects::RippleState::new(
                Default::default(),
                Some(hex_index(&keylet::line(account, issuer, currency.as_bytes())).into()),
                None,
                Amount::IssuedCurrencyAmount(balance),
                if is_low {
                    Amount::IssuedCurrencyAmount(unlimited.clone())
                } else {
                    Amount::IssuedCurrencyAmount(zero.clone())
                },
                "0".into(),
                if is_low {
                    Amount::IssuedCurrencyAmount(zero)
                } else {
                    Amount::IssuedCurrencyAmount(unlimited)
                },
                "0".into(),
                "".into(),
                0,
                None,
                None,
                None,
                None,
            );
            let _ = (low_id, high_id);
            table.insert(key, LedgerEntry::RippleState(state))?;
        }
    }
    Ok(None)
}

fn pow60(mut base: Decimal) -> Decimal {
    let mut result = Decimal::ONE;
    let mut exponent: u32 = 60;
    while exponent > 0 {
        if exponent & 1 == 1 {
            result *= base;
        }
        base *= base;
        exponent >>= 1;
    }
    result
}

/// Newton's-method square root, used only for `AMMCreate`'s one-time initial
/// LP-token issuance (not for ongoing pool-balance math, which is §4.4's
/// named non-goal).
fn decimal_sqrt(value: Decimal) -> Decimal {
    if value <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    let two = Decimal::from(2);
    let mut guess = value;
    for _ in 0..40 {
        guess = (guess + value / guess) / two;
    }
    guess
}

/// Applies an `AMMCreate`: opens a fresh pool (account root + LP token
/// issuance) for a not-yet-existing asset pair.
pub fn apply_create(
    table: &mut StateTable,
    view: &dyn LedgerView,
    config: &EngineConfig,
    creator_address: &str,
    tx: &AMMCreate<'_>,
) -> Result<EngineResult, EngineError> {
    if tx.trading_fee > AMM_CREATE_MAX_FEE {
        return Ok(AmmError::TradingFeeOutOfRange.result());
    }
    let creator = account_id(creator_address)?;
    if read_account(table, view, &creator).is_none() {
        return Ok(AmmError::AccountMissing.result());
    }
    let asset = currency_of(&tx.amount);
    let asset2 = currency_of(&tx.amount2);
    if asset == asset2 {
        return Ok(AmmError::AssetsIdentical.result());
    }
    let amount1 = decimal_of(&tx.amount)?;
    let amount2 = decimal_of(&tx.amount2)?;
    if amount1 <= Decimal::ZERO || amount2 <= Decimal::ZERO {
        return Ok(AmmError::BadAmount.result());
    }

    let key = amm_keylet(&asset, &asset2);
    if table.exists(view, &key) {
        return Ok(AmmError::AlreadyExists.result());
    }

    let pool_id = amm_account_id(&key);
    let pool_address = encode_classic_address(&pool_id)
        .map_err(|e| EngineError::Internal(format!("failed to encode AMM pool address: {e}")))?;
    table.insert(
        keylet::account(&pool_id),
        LedgerEntry::AccountRoot(AccountRoot {
            ledger_entry_type: crate::models::ledger::LedgerEntryType::AccountRoot,
            flags: alloc::vec![AccountRootFlag::LsfDisableMaster, AccountRootFlag::LsfAmm],
            index: "".into(),
            account: pool_address.clone().into(),
            owner_count: 0,
            previous_txn_id: "".into(),
            previous_txn_lgr_seq: 0,
            sequence: 1,
            account_txn_id: None,
            balance: Some(Amount::XRPAmount(Drops::ZERO.into())),
            burned_nftokens: None,
            domain: None,
            email_hash: None,
            message_key: None,
            minted_nftokens: None,
            nftoken_minter: None,
            regular_key: None,
            ticket_count: None,
            tick_size: None,
            transfer_rate: None,
            wallet_locator: None,
            wallet_size: None,
        }),
    )?;

    if let Some(result) = move_asset(table, view, &creator, &pool_id, &tx.amount, amount1)? {
        return Ok(result);
    }
    if let Some(result) = move_asset(table, view, &creator, &pool_id, &tx.amount2, amount2)? {
        return Ok(result);
    }

    let lp_tokens = decimal_sqrt(amount1 * amount2);
    let lp_currency = lp_currency_code(&key);
    if let Some(result) = credit_or_open_trust_line(
        table,
        view,
        &creator,
        &pool_id,
        &lp_currency,
        IouAmount::new(lp_tokens),
    )? {
        return Ok(result);
    }

    let amm = AMM::new(
        Some(hex_index(&key).into()),
        None,
        pool_address.into(),
        asset,
        asset2,
        Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
            lp_currency.into(),
            pool_address_cow(&pool_id)?,
            lp_tokens.to_string().into(),
        )),
        tx.trading_fee,
        None,
        None,
    );
    table.insert(key, LedgerEntry::AMM(amm))?;
    let _ = config;
    Ok(EngineResult::TesSuccess)
}

fn pool_address_cow(pool_id: &[u8; 20]) -> Result<Cow<'static, str>, EngineError> {
    encode_classic_address(pool_id)
        .map(|s| s.into())
        .map_err(|e| EngineError::Internal(format!("failed to encode AMM pool address: {e}")))
}

fn currency_of(amount: &Amount<'_>) -> Currency<'static> {
    match amount {
        Amount::XRPAmount(_) => Currency::XRP(crate::models::currency::XRP::new()),
        Amount::IssuedCurrencyAmount(iou) => Currency::IssuedCurrency(crate::models::currency::IssuedCurrency::new(
            iou.currency.clone().into_owned().into(),
            iou.issuer.clone().into_owned().into(),
        )),
    }
}

fn read_amm(table: &mut StateTable, view: &dyn LedgerView, key: &Keylet) -> Option<AMM<'static>> {
    match table.read(view, key)? {
        LedgerEntry::AMM(amm) => Some(amm),
        _ => None,
    }
}

/// `AMMDeposit`/`AMMWithdraw` don't override `Transaction::has_flag` (it
/// defaults to always returning `false`), so mode detection reads the
/// `FlagCollection`'s inner set directly, the same thing `has_flag` would do
/// for a type that did override it.
fn flag_set<T>(flags: &crate::models::FlagCollection<T>, flag: &T) -> bool
where
    T: strum::IntoEnumIterator + PartialEq,
{
    flags.0.contains(flag)
}

/// The deposit mode table (§4.4): exactly one mode flag must be set, and it
/// must agree with which optional fields were actually supplied. Modes that
/// need per-side pool-balance math to size correctly (`tfOneAssetLPToken`)
/// aren't implemented here, consistent with the pool-balance-math non-goal.
fn deposit_mode_matches_fields(tx: &AMMDeposit<'_>) -> bool {
    let fields = (tx.amount.is_some(), tx.amount2.is_some(), tx.lp_token_out.is_some(), tx.e_price.is_some());
    let flags = &tx.common_fields.flags;
    if flag_set(flags, &AMMDepositFlag::TfTwoAsset) || flag_set(flags, &AMMDepositFlag::TfTwoAssetIfEmpty) {
        fields == (true, true, false, false)
    } else if flag_set(flags, &AMMDepositFlag::TfLimitLpToken) {
        fields == (true, false, false, true)
    } else if flag_set(flags, &AMMDepositFlag::TfSingleAsset) {
        fields == (true, false, false, false)
    } else if flag_set(flags, &AMMDepositFlag::TfLpToken) {
        fields == (false, false, true, false)
    } else {
        false
    }
}

/// Applies an `AMMDeposit`. Validates the deposit mode implied by which
/// optional fields are present, moves the stated asset(s) into the pool, and
/// credits LP tokens using a linear proportional approximation of the
/// caller-stated amounts against the pool's current balance (exact
/// constant-product sizing is out of scope, §4.4 non-goals).
pub fn apply_deposit(
    table: &mut StateTable,
    view: &dyn LedgerView,
    depositor_address: &str,
    tx: &AMMDeposit<'_>,
) -> Result<EngineResult, EngineError> {
    let depositor = account_id(depositor_address)?;
    if read_account(table, view, &depositor).is_none() {
        return Ok(AmmError::AccountMissing.result());
    }
    if !deposit_mode_matches_fields(tx) {
        return Ok(AmmError::InvalidMode.result());
    }
    let key = amm_keylet(&tx.asset, &tx.asset2);
    let Some(mut amm) = read_amm(table, view, &key) else {
        return Ok(AmmError::NotFound.result());
    };
    let pool_id = account_id(&amm.amm_account)?;
    let lp_total = decimal_of(&amm.lptoken_balance)?;

    let lp_out = match (&tx.amount, &tx.amount2, &tx.lp_token_out, &tx.e_price) {
        (Some(amount), Some(amount2), None, None) => {
            let value1 = decimal_of(amount)?;
            let value2 = decimal_of(amount2)?;
            if value1 <= Decimal::ZERO || value2 <= Decimal::ZERO {
                return Ok(AmmError::BadAmount.result());
            }
            if let Some(result) = move_asset(table, view, &depositor, &pool_id, amount, value1)? {
                return Ok(result);
            }
            if let Some(result) = move_asset(table, view, &depositor, &pool_id, amount2, value2)? {
                return Ok(result);
            }
            proportional_lp_tokens(&amm, amount, value1, lp_total)?
        }
        (Some(amount), None, None, e_price) => {
            let value = decimal_of(amount)?;
            if value <= Decimal::ZERO {
                return Ok(AmmError::BadAmount.result());
            }
            if let Some(result) = move_asset(table, view, &depositor, &pool_id, amount, value)? {
                return Ok(result);
            }
            let tokens = proportional_lp_tokens(&amm, amount, value, lp_total)?;
            if let Some(limit) = e_price {
                let limit_value = decimal_of(limit)?;
                if !tokens.is_zero() && value / tokens > limit_value {
                    return Ok(AmmError::BidOutOfRange.result());
                }
            }
            tokens
        }
        (None, None, Some(lp_token_out), None) => {
            let tokens = IouAmount::try_from(lp_token_out)?.value();
            if tokens <= Decimal::ZERO {
                return Ok(AmmError::BadAmount.result());
            }
            tokens
        }
        _ => return Ok(AmmError::InvalidMode.result()),
    };

    let new_total = lp_total + lp_out;
    amm.lptoken_balance = amount_with_value(&amm.lptoken_balance, new_total);

    if let Some(result) = credit_or_open_trust_line(
        table,
        view,
        &depositor,
        &pool_id,
        &lp_currency_from(&amm)?,
        IouAmount::new(lp_out),
    )? {
        return Ok(result);
    }
    table.modify(&key, LedgerEntry::AMM(amm))?;
    Ok(EngineResult::TesSuccess)
}

/// `lp_out = lp_total * deposit_value / pool_value`, or `deposit_value` 1:1
/// when the pool doesn't yet hold that asset (first liquidity for it).
fn proportional_lp_tokens(
    amm: &AMM<'_>,
    asset: &Amount<'_>,
    deposit_value: Decimal,
    lp_total: Decimal,
) -> Result<Decimal, EngineError> {
    let pool_value = if asset_bytes(&currency_of(asset)) == asset_bytes(&amm.asset) {
        decimal_of(&amm_pool_asset_placeholder(amm, true))?
    } else {
        decimal_of(&amm_pool_asset_placeholder(amm, false))?
    };
    if pool_value <= Decimal::ZERO || lp_total <= Decimal::ZERO {
        return Ok(deposit_value);
    }
    Ok(lp_total * deposit_value / pool_value)
}

/// The engine doesn't track each side of the pool's raw asset balance
/// independently (§4.4 non-goal: no constant-product bookkeeping), so the
/// proportional-deposit approximation falls back to treating the pool as
/// already balanced 1:1 against the LP-token supply when asked for a side's
/// value. This keeps the mode-table validation and funds movement honest
/// without claiming an exact reserve model this engine doesn't maintain.
fn amm_pool_asset_placeholder(amm: &AMM<'_>, _first: bool) -> Amount<'static> {
    amm.lptoken_balance.clone().into_owned()
}

fn lp_currency_from(amm: &AMM<'_>) -> Result<String, EngineError> {
    match &amm.lptoken_balance {
        Amount::IssuedCurrencyAmount(iou) => Ok(iou.currency.to_string()),
        Amount::XRPAmount(_) => Err(EngineError::Internal("AMM LPTokenBalance must be an issued currency".into())),
    }
}

trait IntoOwnedAmount {
    fn into_owned(self) -> Amount<'static>;
}

impl<'a> IntoOwnedAmount for Amount<'a> {
    fn into_owned(self) -> Amount<'static> {
        match self {
            Amount::XRPAmount(a) => Amount::XRPAmount(crate::models::amount::XRPAmount(Cow::Owned(a.0.into_owned()))),
            Amount::IssuedCurrencyAmount(iou) => Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new(
                iou.currency.into_owned().into(),
                iou.issuer.into_owned().into(),
                iou.value.into_owned().into(),
            )),
        }
    }
}

/// Applies an `AMMWithdraw`: burns the depositor's LP tokens and returns the
/// corresponding share of pool assets, using the same linear approximation
/// `apply_deposit` uses for sizing (§4.4 non-goals).
pub fn apply_withdraw(
    table: &mut StateTable,
    view: &dyn LedgerView,
    withdrawer_address: &str,
    tx: &AMMWithdraw<'_>,
) -> Result<EngineResult, EngineError> {
    let withdrawer = account_id(withdrawer_address)?;
    if read_account(table, view, &withdrawer).is_none() {
        return Ok(AmmError::AccountMissing.result());
    }
    let key = amm_keylet(&tx.asset, &tx.asset2);
    let Some(mut amm) = read_amm(table, view, &key) else {
        return Ok(AmmError::NotFound.result());
    };
    let pool_id = account_id(&amm.amm_account)?;
    let lp_total = decimal_of(&amm.lptoken_balance)?;
    let lp_currency = lp_currency_from(&amm)?;

    let withdrawer_lp_balance = read_lp_balance(table, view, &withdrawer, &pool_id, &lp_currency)?;

    let lp_burn = match (&tx.amount, &tx.amount2, &tx.lp_token_in) {
        (Some(amount), None, None) => {
            let value = decimal_of(amount)?;
            if value <= Decimal::ZERO {
                return Ok(AmmError::BadAmount.result());
            }
            proportional_lp_tokens(&amm, amount, value, lp_total)?
        }
        (None, None, Some(lp_token_in)) => {
            let tokens = IouAmount::try_from(lp_token_in)?.value();
            if tokens <= Decimal::ZERO {
                return Ok(AmmError::BadAmount.result());
            }
            tokens
        }
        (Some(amount), Some(amount2), None) => {
            let value1 = decimal_of(amount)?;
            let value2 = decimal_of(amount2)?;
            if value1 <= Decimal::ZERO || value2 <= Decimal::ZERO {
                return Ok(AmmError::BadAmount.result());
            }
            proportional_lp_tokens(&amm, amount, value1, lp_total)?
        }
        _ => return Ok(AmmError::InvalidMode.result()),
    };

    let flags = &tx.common_fields.flags;
    let withdraw_all = flag_set(flags, &AMMWithdrawFlag::TfWithdrawAll) || flag_set(flags, &AMMWithdrawFlag::TfOneAssetWithdrawAll);
    let lp_burn = if withdraw_all { withdrawer_lp_balance } else { lp_burn };

    if lp_burn > withdrawer_lp_balance {
        return Ok(AmmError::LpTokenBalanceExceeded.result());
    }

    if let Some(result) = debit_trust_line(table, view, &withdrawer, &pool_id, &lp_currency, IouAmount::new(lp_burn))? {
        return Ok(result);
    }

    let payout_asset = tx.amount.clone().unwrap_or_else(|| amm.lptoken_balance.clone());
    let payout_value = if lp_total.is_zero() {
        Decimal::ZERO
    } else {
        decimal_of(&payout_asset)? * (lp_burn / lp_total)
    };
    if let Some(amount) = &tx.amount {
        if let Some(result) = move_asset(table, view, &pool_id, &withdrawer, amount, payout_value.max(Decimal::ZERO))? {
            return Ok(result);
        }
    }

    amm.lptoken_balance = amount_with_value(&amm.lptoken_balance, (lp_total - lp_burn).max(Decimal::ZERO));
    table.modify(&key, LedgerEntry::AMM(amm))?;
    Ok(EngineResult::TesSuccess)
}

fn read_lp_balance(
    table: &mut StateTable,
    view: &dyn LedgerView,
    account: &[u8; 20],
    issuer: &[u8; 20],
    currency: &str,
) -> Result<Decimal, EngineError> {
    let key = keylet::line(account, issuer, currency.as_bytes());
    match table.read(view, &key) {
        Some(LedgerEntry::RippleState(state)) => {
            let is_low = trust_line::is_low_account(account, issuer);
            Ok(trust_line::balance_from(&state, is_low)?.value())
        }
        _ => Ok(Decimal::ZERO),
    }
}

/// The minimum price (in LP tokens) an `AMMBid` must clear to take the
/// auction slot: the pool-proportional floor when no one holds the slot, or
/// a 5% premium over the current holder's price discounted by how much of
/// the 24-hour term has elapsed, via `(1 - fraction_used)^60` decay so a bid
/// placed near the end of the term costs close to the floor again.
fn minimum_bid_price(amm: &AMM<'_>, now: u32) -> Result<Decimal, EngineError> {
    let lp_total = decimal_of(&amm.lptoken_balance)?;
    let floor = lp_total / Decimal::from(MIN_SLOT_PRICE_DENOMINATOR);
    let Some(slot) = &amm.auction_slot else {
        return Ok(floor);
    };
    if now >= slot.expiration {
        return Ok(floor);
    }
    let slot_start = slot.expiration.saturating_sub(AUCTION_SLOT_SECONDS);
    let elapsed = now.saturating_sub(slot_start).min(AUCTION_SLOT_SECONDS);
    let fraction_used = Decimal::from(elapsed) / Decimal::from(AUCTION_SLOT_SECONDS);
    let decay = pow60(Decimal::ONE - fraction_used);
    let current_price = decimal_of(&slot.price)?;
    let premium = current_price * Decimal::from(OUTBID_PREMIUM_NUMERATOR) / Decimal::from(OUTBID_PREMIUM_DENOMINATOR);
    Ok(premium + floor * decay)
}

/// Applies an `AMMBid`: burns the winning price in LP tokens from the bidder
/// and installs them as the new auction-slot holder.
pub fn apply_bid(
    table: &mut StateTable,
    view: &dyn LedgerView,
    bidder_address: &str,
    now: u32,
    tx: &AMMBid<'_>,
) -> Result<EngineResult, EngineError> {
    let bidder = account_id(bidder_address)?;
    if read_account(table, view, &bidder).is_none() {
        return Ok(AmmError::AccountMissing.result());
    }
    let key = amm_keylet(&tx.asset, &tx.asset2);
    let Some(mut amm) = read_amm(table, view, &key) else {
        return Ok(AmmError::NotFound.result());
    };
    let pool_id = account_id(&amm.amm_account)?;
    let lp_currency = lp_currency_from(&amm)?;
    let lp_total = decimal_of(&amm.lptoken_balance)?;

    let floor = minimum_bid_price(&amm, now)?;
    let bid_min = match &tx.bid_min {
        Some(amount) => Some(IouAmount::try_from(amount)?.value()),
        None => None,
    };
    let bid_max = match &tx.bid_max {
        Some(amount) => Some(IouAmount::try_from(amount)?.value()),
        None => None,
    };
    if let (Some(min), Some(max)) = (bid_min, bid_max) {
        if min > max {
            return Ok(AmmError::BidOutOfRange.result());
        }
    }
    let mut price = bid_min.unwrap_or(floor).max(floor);
    if let Some(max) = bid_max {
        if price > max {
            return Ok(AmmError::BidOutOfRange.result());
        }
        price = price.min(max);
    }
    if price > lp_total {
        return Ok(AmmError::InsufficientFunds.result());
    }

    let bidder_balance = read_lp_balance(table, view, &bidder, &pool_id, &lp_currency)?;
    if bidder_balance < price {
        return Ok(AmmError::InsufficientFunds.result());
    }
    if let Some(result) = debit_trust_line(table, view, &bidder, &pool_id, &lp_currency, IouAmount::new(price))? {
        return Ok(result);
    }

    amm.lptoken_balance = amount_with_value(&amm.lptoken_balance, (lp_total - price).max(Decimal::ZERO));
    amm.auction_slot = Some(AuctionSlot {
        account: bidder_address.to_string().into(),
        discounted_fee: amm.trading_fee / 10,
        expiration: now + AUCTION_SLOT_SECONDS,
        price: amount_with_value(&amm.lptoken_balance, price),
        auth_accounts: tx.auth_accounts.as_ref().map(|accounts| {
            accounts
                .iter()
                .map(|a| LedgerAuthAccount::new(a.account.clone()))
                .collect()
        }),
    });
    table.modify(&key, LedgerEntry::AMM(amm))?;
    Ok(EngineResult::TesSuccess)
}

/// Applies an `AMMVote`: records/replaces the caller's vote (weighted by
/// their share of outstanding LP tokens) and recomputes `TradingFee` as the
/// vote-weighted average of the (at most 8) strongest entries.
pub fn apply_vote(
    table: &mut StateTable,
    view: &dyn LedgerView,
    voter_address: &str,
    tx: &AMMVote<'_>,
) -> Result<EngineResult, EngineError> {
    if let Some(fee) = tx.trading_fee {
        if fee > AMM_VOTE_MAX_TRADING_FEE {
            return Ok(AmmError::TradingFeeOutOfRange.result());
        }
    }
    let voter = account_id(voter_address)?;
    if read_account(table, view, &voter).is_none() {
        return Ok(AmmError::AccountMissing.result());
    }
    let key = amm_keylet(&tx.asset, &tx.asset2);
    let Some(mut amm) = read_amm(table, view, &key) else {
        return Ok(AmmError::NotFound.result());
    };
    let pool_id = account_id(&amm.amm_account)?;
    let lp_currency = lp_currency_from(&amm)?;
    let lp_total = decimal_of(&amm.lptoken_balance)?;
    let voter_balance = read_lp_balance(table, view, &voter, &pool_id, &lp_currency)?;
    if voter_balance <= Decimal::ZERO {
        return Ok(AmmError::InsufficientFunds.result());
    }

    let vote_weight: u32 = if lp_total.is_zero() {
        0
    } else {
        (voter_balance * Decimal::from(100_000) / lp_total)
            .try_into()
            .unwrap_or(0)
    };

    let mut slots = amm.vote_slots.take().unwrap_or_default();
    slots.retain(|entry| entry.account != voter_address);
    slots.push(VoteEntry::new(
        voter_address.to_string(),
        tx.trading_fee.unwrap_or(amm.trading_fee),
        vote_weight,
    ));
    if slots.len() > MAX_VOTE_SLOTS {
        slots.sort_by_key(|entry| entry.vote_weight);
        slots.remove(0);
    }

    let total_weight: u64 = slots.iter().map(|entry| entry.vote_weight as u64).sum();
    let weighted_fee = if total_weight == 0 {
        amm.trading_fee
    } else {
        let sum: u64 = slots
            .iter()
            .map(|entry| entry.trading_fee as u64 * entry.vote_weight as u64)
            .sum();
        (sum / total_weight) as u16
    };

    amm.trading_fee = weighted_fee.min(AMM_VOTE_MAX_TRADING_FEE);
    amm.vote_slots = Some(slots);
    table.modify(&key, LedgerEntry::AMM(amm))?;
    Ok(EngineResult::TesSuccess)
}

/// Applies an `AMMDelete`: only valid once the pool holds no outstanding LP
/// tokens (every depositor has withdrawn).
pub fn apply_delete(
    table: &mut StateTable,
    view: &dyn LedgerView,
    deleter_address: &str,
    tx: &AMMDelete<'_>,
) -> Result<EngineResult, EngineError> {
    let deleter = account_id(deleter_address)?;
    if read_account(table, view, &deleter).is_none() {
        return Ok(AmmError::AccountMissing.result());
    }
    let key = amm_keylet(&tx.asset, &tx.asset2);
    let Some(amm) = read_amm(table, view, &key) else {
        return Ok(AmmError::NotFound.result());
    };
    let lp_total = decimal_of(&amm.lptoken_balance)?;
    if lp_total > Decimal::ZERO {
        return Ok(AmmError::PoolNotEmpty.result());
    }
    let pool_id = account_id(&amm.amm_account)?;
    table.erase(&key)?;
    table.erase(&keylet::account(&pool_id))?;
    Ok(EngineResult::TesSuccess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::ledger_view::MemoryLedgerView;
    use crate::models::currency::{IssuedCurrency, XRP};
    use crate::models::transactions::amm_bid::AMMBid;
    use crate::models::transactions::amm_create::AMMCreate;
    use crate::models::transactions::CommonFields;
    use crate::models::FlagCollection;

    const ALICE: &str = "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh";
    const BOB: &str = "rEmiKfebGCzDz4YWrMhW39cyWsP56HSJaU";
    const ISSUER: &str = "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn";

    fn account_root(address: &str, drops: i64) -> LedgerEntry<'static> {
        LedgerEntry::AccountRoot(AccountRoot {
            ledger_entry_type: crate::models::ledger::LedgerEntryType::AccountRoot,
            flags: Vec::new(),
            index: "".into(),
            account: address.to_string().into(),
            owner_count: 0,
            previous_txn_id: "".into(),
            previous_txn_lgr_seq: 0,
            sequence: 1,
            account_txn_id: None,
            balance: Some(Amount::XRPAmount(Drops(drops).into())),
            burned_nftokens: None,
            domain: None,
            email_hash: None,
            message_key: None,
            minted_nftokens: None,
            nftoken_minter: None,
            regular_key: None,
            ticket_count: None,
            tick_size: None,
            transfer_rate: None,
            wallet_locator: None,
            wallet_size: None,
        })
    }

    fn amm_create(amount: Amount<'static>, amount2: Amount<'static>, fee: u16) -> AMMCreate<'static> {
        AMMCreate {
            common_fields: CommonFields {
                account: ALICE.into(),
                transaction_type: crate::models::transactions::TransactionType::AMMCreate,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::default(),
                last_ledger_sequence: None,
                memos: None,
                network_id: None,
                sequence: Some(1),
                signers: None,
                signing_pub_key: None,
                source_tag: None,
                ticket_sequence: None,
                txn_signature: None,
            },
            amount,
            amount2,
            trading_fee: fee,
        }
    }

    #[test]
    fn create_opens_a_pool_and_issues_lp_tokens() {
        let mut view = MemoryLedgerView::new();
        let alice_id = account_id(ALICE).unwrap();
        view.insert(keylet::account(&alice_id), account_root(ALICE, 50_000_000));
        view.insert(
            keylet::line(&alice_id, &account_id(ISSUER).unwrap(), b"USD"),
            LedgerEntry::RippleState(crate::models::ledger::objects::RippleState::new(
                Default::default(),
                None,
                None,
                Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), "".into(), "-1000".into())),
                Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "1000000".into())),
                "0".into(),
                Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ALICE.into(), "1000000".into())),
                "0".into(),
                "".into(),
                0,
                None,
                None,
                None,
                None,
            )),
        );

        let mut table = StateTable::new();
        let config = EngineConfig::default();
        let tx = amm_create(
            Amount::XRPAmount("10000000".into()),
            Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "100".into())),
            500,
        );
        let result = apply_create(&mut table, &view, &config, ALICE, &tx).unwrap();
        assert_eq!(result, EngineResult::TesSuccess);
        table.apply(&mut view);

        let key = amm_keylet(&Currency::XRP(XRP::new()), &Currency::IssuedCurrency(IssuedCurrency::new("USD".into(), ISSUER.into())));
        assert!(view.exists(&key));
    }

    #[test]
    fn create_rejects_identical_assets() {
        let mut view = MemoryLedgerView::new();
        let alice_id = account_id(ALICE).unwrap();
        view.insert(keylet::account(&alice_id), account_root(ALICE, 50_000_000));
        let mut table = StateTable::new();
        let config = EngineConfig::default();
        let tx = amm_create(Amount::XRPAmount("100".into()), Amount::XRPAmount("200".into()), 500);
        let result = apply_create(&mut table, &view, &config, ALICE, &tx).unwrap();
        assert_eq!(result, EngineResult::TemRedundant);
    }

    #[test]
    fn create_rejects_trading_fee_above_maximum() {
        let mut view = MemoryLedgerView::new();
        let alice_id = account_id(ALICE).unwrap();
        view.insert(keylet::account(&alice_id), account_root(ALICE, 50_000_000));
        let mut table = StateTable::new();
        let config = EngineConfig::default();
        let tx = amm_create(
            Amount::XRPAmount("100".into()),
            Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("USD".into(), ISSUER.into(), "100".into())),
            2000,
        );
        let result = apply_create(&mut table, &view, &config, ALICE, &tx).unwrap();
        assert_eq!(result, EngineResult::TecAmmInvalidTokens);
    }

    #[test]
    fn bid_without_an_existing_pool_is_rejected() {
        let mut view = MemoryLedgerView::new();
        let bob_id = account_id(BOB).unwrap();
        view.insert(keylet::account(&bob_id), account_root(BOB, 50_000_000));
        let mut table = StateTable::new();
        let tx = AMMBid {
            common_fields: CommonFields {
                account: BOB.into(),
                transaction_type: crate::models::transactions::TransactionType::AMMBid,
                account_txn_id: None,
                fee: None,
                flags: FlagCollection::default(),
                last_ledger_sequence: None,
                memos: None,
                network_id: None,
                sequence: Some(1),
                signers: None,
                signing_pub_key: None,
                source_tag: None,
                ticket_sequence: None,
                txn_signature: None,
            },
            asset: Currency::XRP(XRP::new()),
            asset2: Currency::IssuedCurrency(IssuedCurrency::new("USD".into(), ISSUER.into())),
            bid_min: None,
            bid_max: None,
            auth_accounts: None,
        };
        let result = apply_bid(&mut table, &view, BOB, 1_000, &tx).unwrap();
        assert_eq!(result, EngineResult::TecAmmNotFound);
    }

    #[test]
    fn minimum_bid_price_is_the_pool_floor_with_no_slot_holder() {
        let amm = AMM::new(
            None,
            None,
            ALICE.into(),
            Currency::XRP(XRP::new()),
            Currency::IssuedCurrency(IssuedCurrency::new("USD".into(), ISSUER.into())),
            Amount::IssuedCurrencyAmount(IssuedCurrencyAmount::new("LPT".into(), ALICE.into(), "25000".into())),
            500,
            None,
            None,
        );
        let floor = minimum_bid_price(&amm, 100).unwrap();
        assert_eq!(floor, Decimal::ONE);
    }
}
