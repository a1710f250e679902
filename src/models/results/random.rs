use alloc::borrow::Cow;

use serde::{Deserialize, Serialize};

/// Response format for the random command, which provides a random number to
/// be used as a source of entropy for random number generation by clients.
///
/// A successful result contains a 256-bit hex value that can be used for
/// random number generation purposes.
///
/// See Random:
/// `<https://xrpl.org/random.html#random>`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Random<'a> {
    /// A random 256-bit value represented as a hexadecimal string.
    pub random: Cow<'a, str>,
}
