//! This file is the root of the `qoi_core` Rust crate.
//!
//! Its responsibilities are strictly limited to:
//! 1.  Declaring all the top-level modules of our library (`bridge`, `codec`,
//!     etc.) so the Rust compiler knows they exist.
//! 2.  Re-exporting the small, stable public API surface: the stateless
//!     `encode`/`decode` entry points plus the format vocabulary they speak.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bridge;

mod codec;
mod error;
mod observability;
mod types;
mod utils;

//==================================================================================
// 2. Public API Re-exports
//==================================================================================
pub use bridge::format::{Channels, Colorspace, QoiHeader};
pub use bridge::stateless_api::{decode, encode, DecodedImage};
pub use error::QoiError;
pub use observability::enable_verbose_logging;
pub use types::Pixel;
