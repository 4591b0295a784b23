//! Numeric and byte-string primitives shared across the FPE algorithms.
//!
//! Symbol strings are slices of `u16` values interpreted as big-endian
//! numerals in a given radix. Byte strings use big-endian, unsigned
//! interpretation throughout; the one deliberate exception is IFX's signed
//! decoding, which lives in [`crate::ifx`].

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{Signed, ToPrimitive, Zero};

/// Unified error type for all FPE operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Key material is not 16, 24 or 32 bytes of raw AES key.
    InvalidKey,
    /// Radix is outside [MINRADIX..MAXRADIX].
    RadixOutOfRange,
    /// Input length is outside the permitted range.
    LengthOutOfRange,
    /// Tweak length is outside the permitted range.
    TweakLengthOutOfRange,
    /// A symbol value is out of range for its radix.
    SymbolOutOfRange,
    /// Numeric value does not fit the requested representation.
    ValueOutOfRange,
    /// Operand lengths do not match.
    LengthMismatch,
    /// Round count is below the minimum required by the Feistel method.
    TooFewRounds,
    /// Modulus is not a positive integer.
    NonPositiveModulus,
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::InvalidKey => write!(f, "key is not valid raw AES key material"),
            Error::RadixOutOfRange => write!(f, "radix out of range"),
            Error::LengthOutOfRange => write!(f, "input length out of range"),
            Error::TweakLengthOutOfRange => write!(f, "tweak length out of range"),
            Error::SymbolOutOfRange => write!(f, "symbol out of range for radix"),
            Error::ValueOutOfRange => write!(f, "value out of range for representation"),
            Error::LengthMismatch => write!(f, "operand lengths do not match"),
            Error::TooFewRounds => write!(f, "too few Feistel rounds"),
            Error::NonPositiveModulus => write!(f, "modulus must be positive"),
        }
    }
}

impl std::error::Error for Error {}

/// Minimum length of plaintext, ciphertext and byte-string inputs.
pub const MINLEN: usize = 2;

/// Maximum length of plaintext, ciphertext, tweak and byte-string inputs.
pub const MAXLEN: usize = 4096;

/// Minimum radix for symbol values.
pub const MINRADIX: u32 = 2;

/// Maximum radix for symbol values.
pub const MAXRADIX: u32 = 1 << 16;

/// AES block length in bytes.
pub const BLOCK_LENGTH: usize = 16;

/// radix^m as an unconstrained integer.
pub(crate) fn radix_pow(radix: u32, m: usize) -> BigUint {
    BigUint::from(radix).pow(m as u32)
}

/// NUMradix(X): the number that the numeral string X represents in the
/// given radix, with the numerals valued in decreasing order of
/// significance (big-endian).
pub fn num_radix(x: &[u16], radix: u32) -> Result<BigUint, Error> {
    if !(MINRADIX..=MAXRADIX).contains(&radix) {
        return Err(Error::RadixOutOfRange);
    }
    if x.is_empty() || x.len() > MAXLEN {
        return Err(Error::LengthOutOfRange);
    }

    let mut n = BigUint::zero();
    for &symbol in x {
        if u32::from(symbol) >= radix {
            return Err(Error::SymbolOutOfRange);
        }
        n = n * radix + symbol;
    }
    Ok(n)
}

/// NUM(X): the nonnegative integer that the byte string X represents in
/// big-endian order. The leading bit carries no sign.
pub fn num(x: &[u8]) -> Result<BigUint, Error> {
    if x.is_empty() || x.len() > MAXLEN {
        return Err(Error::LengthOutOfRange);
    }
    Ok(BigUint::from_bytes_be(x))
}

/// STRmRadix(x): representation of x as a string of m numerals in the
/// given radix, in decreasing order of significance. Rejects x >= radix^m.
pub fn str_radix(x: &BigUint, radix: u32, m: usize) -> Result<Vec<u16>, Error> {
    if !(MINRADIX..=MAXRADIX).contains(&radix) {
        return Err(Error::RadixOutOfRange);
    }
    if m < 1 || m > MAXLEN {
        return Err(Error::LengthOutOfRange);
    }
    if *x >= radix_pow(radix, m) {
        return Err(Error::ValueOutOfRange);
    }

    let big_radix = BigUint::from(radix);
    let mut out = vec![0u16; m];
    let mut rem = x.clone();
    for slot in out.iter_mut().rev() {
        let (q, r) = rem.div_rem(&big_radix);
        // r < radix <= 2^16, so the conversion cannot fail
        *slot = r.to_u16().unwrap();
        rem = q;
    }
    Ok(out)
}

/// REV(X): the symbol string X in reverse order.
pub fn rev(x: &[u16]) -> Vec<u16> {
    let mut y = x.to_vec();
    y.reverse();
    y
}

/// REVB(X): the byte string X in reverse order.
pub fn revb(x: &[u8]) -> Vec<u8> {
    let mut y = x.to_vec();
    y.reverse();
    y
}

/// Bitwise xor of two byte strings of equal, nonzero length.
pub fn xor(a: &[u8], b: &[u8]) -> Result<Vec<u8>, Error> {
    if a.is_empty() {
        return Err(Error::LengthOutOfRange);
    }
    if a.len() != b.len() {
        return Err(Error::LengthMismatch);
    }
    Ok(a.iter().zip(b.iter()).map(|(x, y)| x ^ y).collect())
}

/// Euclidean remainder x mod m, always in [0, m).
pub fn modulo(x: i64, m: i64) -> Result<i64, Error> {
    if m < 1 {
        return Err(Error::NonPositiveModulus);
    }
    Ok(x.rem_euclid(m))
}

/// Euclidean remainder for unconstrained integers.
pub fn modulo_big(x: &BigInt, m: &BigInt) -> Result<BigInt, Error> {
    if !m.is_positive() {
        return Err(Error::NonPositiveModulus);
    }
    Ok(x.mod_floor(m))
}

/// [x]^s: the nonnegative integer x encoded as exactly s big-endian bytes.
pub fn bytestring(x: u64, s: usize) -> Result<Vec<u8>, Error> {
    if s > MAXLEN {
        return Err(Error::LengthOutOfRange);
    }
    if s < 8 && (x >> (8 * s as u32)) != 0 {
        return Err(Error::ValueOutOfRange);
    }

    let mut out = vec![0u8; s];
    let be = x.to_be_bytes();
    let k = s.min(8);
    out[s - k..].copy_from_slice(&be[8 - k..]);
    Ok(out)
}

/// [x]^s for unconstrained integers.
pub fn bytestring_big(x: &BigUint, s: usize) -> Result<Vec<u8>, Error> {
    if s > MAXLEN {
        return Err(Error::LengthOutOfRange);
    }
    if x.bits() > 8 * s as u64 {
        return Err(Error::ValueOutOfRange);
    }

    let mut out = vec![0u8; s];
    if !x.is_zero() {
        let raw = x.to_bytes_be();
        out[s - raw.len()..].copy_from_slice(&raw);
    }
    Ok(out)
}

/// Base-2 logarithm.
pub fn log2(x: u32) -> f64 {
    f64::from(x).log2()
}

/// Largest integer not greater than x. Inputs are nonnegative reals; the
/// floating argument precludes accidental integer division at call sites.
pub fn floor(x: f64) -> usize {
    x.floor() as usize
}

/// Smallest integer not less than x. Inputs are nonnegative reals.
pub fn ceiling(x: f64) -> usize {
    x.ceil() as usize
}

/// X || Y.
pub fn concatenate<T: Copy>(a: &[T], b: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(a.len() + b.len());
    out.extend_from_slice(a);
    out.extend_from_slice(b);
    out
}
