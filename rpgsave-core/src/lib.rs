//! # rpgsave-core
//!
//! Codec for RPG Maker MV save containers.
//!
//! `.rpgsave` files hold the game state as JSON text compressed with the
//! lz-string algorithm and packed into the base64 alphabet. This crate provides
//! the bit-exact implementation of that scheme together with the [`Codec`]
//! abstraction consumed by the command-line pipeline.
//!
//! ```
//! use rpgsave_core::{Codec, LzStringCodec};
//!
//! let codec = LzStringCodec;
//! let container = codec.compress(br#"{"hp":10}"#).unwrap();
//! assert_eq!(codec.decompress(&container).unwrap(), br#"{"hp":10}"#);
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod lzstring;

pub use codec::{Codec, LzStringCodec};
pub use config::ConversionSummary;
pub use error::{Error, Result};
