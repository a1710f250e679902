//! Miscellaneous helper functions.

use core::convert::TryInto;
use ripemd160::Ripemd160;
use sha2::{Digest, Sha512};

/// Returns the first 32 bytes of SHA-512
/// hash of message.
pub fn sha512_first_half(message: &[u8]) -> [u8; 32] {
    let mut sha512 = Sha512::new();

    sha512.update(message);
    sha512.finalize()[..32]
        .try_into()
        .expect("Invalid slice length")
}

/// Returns the account ID for a given public key.
/// To learn about the relationship between keys
/// and account IDs, see:
/// https://xrpl.org/cryptographic-keys.html#account-id-and-address
pub fn get_account_id(public_key: &[u8]) -> [u8; 20] {
    let mut sha512 = Sha512::new();
    let mut ripemd160 = Ripemd160::new();

    sha512.update(public_key);
    ripemd160.update(&sha512.finalize());

    ripemd160.finalize()[..]
        .try_into()
        .expect("Invalid slice length")
}
