//! Format-preserving encryption with the FFX family of Feistel ciphers.
//!
//! This crate implements deterministic symmetric ciphers that map a string
//! of symbols in a radix alphabet to a string of the same length over the
//! same alphabet, keyed by an AES key and parameterized by a public tweak.
//!
//! # Variants
//!
//! - **FF1**: NIST SP 800-38G algorithms 7/8; variable-length tweak,
//!   radices 2 through 2^16
//! - **FF3**: NIST SP 800-38G algorithms 9/10; fixed 8-byte tweak,
//!   byte-reversed AES keying
//! - **FFX**: the generic parameterized Feistel framework of Bellare,
//!   Rogaway and Spies, accepting custom parameter packs
//! - **A2 / A10**: the radix-2 and radix-10 parameter sets from the FFX
//!   specification
//! - **IFX**: an experimental construction over non-uniform per-position
//!   radices (e.g. mixed digits and letters)
//!
//! # Quick Start
//!
//! Encrypt a 16-digit number while keeping it a 16-digit number:
//!
//! ```rust
//! use ffx::{AesKey, Ff1};
//!
//! let key = AesKey::new(&[0x2B; 16]).unwrap();
//! let ff1 = Ff1::new(10, 32).unwrap();
//!
//! let digits = [4u16, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 3, 4, 4, 4, 4];
//! let encrypted = ff1.encrypt(&key, b"card-number", &digits).unwrap();
//!
//! assert_eq!(encrypted.len(), digits.len());
//! assert!(encrypted.iter().all(|&d| d < 10));
//! assert_eq!(ff1.decrypt(&key, b"card-number", &encrypted).unwrap(), digits);
//! ```
//!
//! Encrypt a value whose positions have different alphabets:
//!
//! ```rust
//! use ffx::{AesKey, Ifx};
//!
//! // one digit, three letters, three digits
//! let ifx = Ifx::new(&[10, 26, 26, 26, 10, 10, 10]).unwrap();
//! let key = AesKey::new(&[0x2B; 16]).unwrap();
//!
//! let plate = [7u16, 11, 4, 19, 0, 4, 2];
//! let encrypted = ifx.encrypt(&key, b"region-9", &plate).unwrap();
//! assert_eq!(ifx.decrypt(&key, b"region-9", &encrypted).unwrap(), plate);
//! ```
//!
//! # Security Considerations
//!
//! - Format-preserving ciphers are deterministic: equal inputs under the
//!   same key and tweak produce equal outputs. Vary the tweak per record.
//! - The domain of short inputs is small by construction; the minimum
//!   length rules (radix^minlen >= 100) are a floor, not a comfort zone.
//! - IFX is a proof of concept with no cryptanalysis behind it and is not
//!   recommended for sensitive data.
//! - No authentication: pair with a MAC or AEAD where integrity matters.

pub mod a10;
pub mod a2;
pub mod ciphers;
pub mod common;
pub mod ff1;
pub mod ff3;
pub mod ffx;
pub mod ifx;

#[cfg(test)]
mod conformance;

pub use a10::A10;
pub use a2::A2;
pub use ciphers::AesKey;
pub use common::Error;
pub use ff1::Ff1;
pub use ff3::Ff3;
pub use ffx::{Arithmetic, FeistelMethod, Ffx, FfxParameters};
pub use ifx::Ifx;
