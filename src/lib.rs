#![no_std]
#![allow(dead_code)] // Remove eventually

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std as alloc;

mod _anyhow;
mod _serde;

pub mod constants;
#[cfg(feature = "core")]
pub mod core;
#[cfg(feature = "engine")]
pub mod engine;
pub mod macros;
#[cfg(feature = "models")]
pub mod models;
pub mod utils;
pub mod wallet;
