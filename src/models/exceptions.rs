//! General XRPL Model Exception.

use alloc::borrow::Cow;
use alloc::string::{String, ToString};
use serde::{Deserialize, Serialize};
use strum_macros::Display;

use super::transactions::exceptions::{
    XRPLAMMCreateException, XRPLAccountSetException, XRPLPaymentException,
};

/// Convenience alias for model validation (`Model::get_errors`, builder
/// methods) that can fail with an [`XRPLModelException`].
pub type XRPLModelResult<T> = Result<T, XRPLModelException>;

#[derive(Debug, PartialEq)]
#[non_exhaustive]
pub enum XRPLModelException {
    InvalidICCannotBeXRP,
    /// Exactly one of `fields` must be set, but none were.
    ExpectedOneOf(&'static [&'static str]),
    /// `field` is set but none of `other_fields` is, though one is required.
    FieldRequiresField {
        field1: Cow<'static, str>,
        field2: Cow<'static, str>,
    },
    /// `field` cannot be combined with any of `other_fields`.
    InvalidFieldCombination {
        field: &'static str,
        other_fields: &'static [&'static str],
    },
    /// `field` does not match the expected `format`.
    InvalidValueFormat {
        field: Cow<'static, str>,
        found: String,
        format: Cow<'static, str>,
    },
    /// `field` is required but missing.
    MissingField(String),
    /// `field1` must be strictly greater than `field2`.
    ValueBelowValue {
        field1: Cow<'static, str>,
        field2: Cow<'static, str>,
        field1_val: u32,
        field2_val: u32,
    },
    ValueTooHigh {
        field: Cow<'static, str>,
        max: u32,
        found: u32,
    },
    ValueTooLong {
        field: Cow<'static, str>,
        max: usize,
        found: usize,
    },
    ValueTooLow {
        field: Cow<'static, str>,
        min: u32,
        found: u32,
    },
    /// `field` must not be zero.
    ValueZero(String),
    /// Carries the message of one of the lifetime-parameterized, per-transaction
    /// exception types (e.g. `XRPLPaymentException`), which cannot be stored
    /// directly since `XRPLModelException` itself is not lifetime-parameterized.
    TransactionError(String),
    XRPLRequestError(XRPLRequestException),
}

impl core::fmt::Display for XRPLModelException {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InvalidICCannotBeXRP => write!(f, "an issued currency cannot be XRP"),
            Self::ExpectedOneOf(fields) => write!(f, "expected exactly one of {fields:?} to be set"),
            Self::FieldRequiresField { field1, field2 } => {
                write!(f, "field `{field1}` requires field `{field2}` to be set")
            }
            Self::InvalidFieldCombination { field, other_fields } => write!(
                f,
                "field `{field}` cannot be combined with {other_fields:?}"
            ),
            Self::InvalidValueFormat {
                field,
                found,
                format,
            } => write!(
                f,
                "The value of the field `{field:?}` does not have the correct format (expected {format:?}, found {found:?})"
            ),
            Self::MissingField(field) => write!(f, "missing required field `{field}`"),
            Self::ValueBelowValue {
                field1,
                field2,
                field1_val,
                field2_val,
            } => write!(
                f,
                "field `{field1}` ({field1_val}) must be greater than field `{field2}` ({field2_val})"
            ),
            Self::ValueTooHigh { field, max, found } => write!(
                f,
                "The value of the field `{field:?}` is defined above its maximum (max {max}, found {found})"
            ),
            Self::ValueTooLong { field, max, found } => write!(
                f,
                "The value of the field `{field:?}` exceeds its maximum length of characters (max {max}, found {found})"
            ),
            Self::ValueTooLow { field, min, found } => write!(
                f,
                "The value of the field `{field:?}` is defined below its minimum (min {min}, found {found})"
            ),
            Self::ValueZero(field) => write!(f, "field `{field}` must not be zero"),
            Self::TransactionError(message) => write!(f, "{message}"),
            Self::XRPLRequestError(error) => write!(f, "{error}"),
        }
    }
}

impl<'a> From<XRPLPaymentException<'a>> for XRPLModelException {
    fn from(value: XRPLPaymentException<'a>) -> Self {
        Self::TransactionError(value.to_string())
    }
}

impl<'a> From<XRPLAMMCreateException<'a>> for XRPLModelException {
    fn from(value: XRPLAMMCreateException<'a>) -> Self {
        Self::TransactionError(value.to_string())
    }
}

impl<'a> From<XRPLAccountSetException<'a>> for XRPLModelException {
    fn from(value: XRPLAccountSetException<'a>) -> Self {
        Self::TransactionError(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum XRPLRequestException {
    ChannelAuthorizeError(ChannelAuthorizeException),
    SignAndSubmitError(SignAndSubmitException),
    SignForError(SignForException),
    SignError(SignException),
    LedgerEntryError(LedgerEntryException),
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum ChannelAuthorizeException {
    InvalidMustSetExactlyOneOf { fields: String },
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum LedgerEntryException {
    InvalidMustSetExactlyOneOf { fields: String },
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum SignAndSubmitException {
    InvalidMustSetExactlyOneOf { fields: String },
    InvalidMustOmitKeyTypeIfSecretProvided,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum SignForException {
    InvalidMustSetExactlyOneOf { fields: String },
    InvalidMustOmitKeyTypeIfSecretProvided,
}

#[derive(Debug, Clone, PartialEq, Display)]
pub enum SignException {
    InvalidMustSetExactlyOneOf { fields: String },
    InvalidMustOmitKeyTypeIfSecretProvided,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct JSONRPCException {
    code: i32,
    message: String,
}

#[cfg(feature = "std")]
impl alloc::error::Error for XRPLModelException {}
