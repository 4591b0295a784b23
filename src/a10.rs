//! A10: the radix-10 FFX parameter set from "The FFX Mode of Operation
//! for Format-Preserving Encryption" (Bellare, Rogaway and Spies).
//!
//! A10 encrypts decimal strings of 4 to 36 digits with blockwise
//! arithmetic and a CBC-MAC round function. The MAC output is consumed as
//! two 64-bit halves so that up to 18 digits can be derived per round.

use crate::ciphers::{self, AesKey};
use crate::common::{self, Error};
use crate::ffx::{Arithmetic, FeistelMethod, Ffx, FfxParameters};

/// FFX parameter set for A10.
pub struct A10Parameters;

impl FfxParameters for A10Parameters {
    fn radix(&self) -> u32 {
        10
    }

    fn min_len(&self) -> usize {
        4
    }

    fn max_len(&self) -> usize {
        36
    }

    fn min_tweak_len(&self) -> usize {
        0
    }

    fn max_tweak_len(&self) -> usize {
        usize::MAX
    }

    fn method(&self) -> FeistelMethod {
        FeistelMethod::Two
    }

    fn arithmetic(&self) -> Arithmetic {
        Arithmetic::Blockwise
    }

    fn split(&self, n: usize) -> usize {
        common::floor(n as f64 / 2.0)
    }

    fn rounds(&self, n: usize) -> usize {
        if n <= 5 {
            24
        } else if n <= 9 {
            18
        } else {
            12
        }
    }

    fn round_function(
        &self,
        key: &AesKey,
        n: usize,
        tweak: &[u8],
        i: usize,
        b: &[u16],
    ) -> Result<Vec<u16>, Error> {
        let t = tweak.len();
        let split = self.split(n);
        let rounds = self.rounds(n);

        // P = [vers]^2 || [method] || [addition] || [radix] || [n] ||
        //     [split(n)] || [rnds(n)] || [t]^8
        let mut p = vec![
            0x00,
            0x01,
            0x02,
            0x01, // addition 1: blockwise
            0x0A,
            n as u8,
            split as u8,
            rounds as u8,
        ];
        p.extend_from_slice(&common::bytestring(t as u64, 8)?);

        // Q = T || [0]^((-t-9) mod 16) || [i] || [num10(B)]^8
        let mut q = tweak.to_vec();
        let pad = common::modulo(-(t as i64) - 9, 16)? as usize;
        q.extend_from_slice(&common::bytestring(0, pad)?);
        q.extend_from_slice(&common::bytestring(i as u64, 1)?);
        q.extend_from_slice(&common::bytestring_big(&common::num_radix(b, 10)?, 8)?);

        // Y = CBC-MAC(P || Q), consumed as two 64-bit halves
        let y = ciphers::prf(key, &common::concatenate(&p, &q))?;
        let y1 = common::num(&y[..8])?;
        let y2 = common::num(&y[8..])?;

        let m = if i % 2 == 0 { split } else { n - split };

        // z = y'' mod 10^m when m <= 9, otherwise the low nine digits come
        // from y'' and the rest from y'
        let z = if m <= 9 {
            y2 % common::radix_pow(10, m)
        } else {
            let billion = common::radix_pow(10, 9);
            (y1 % common::radix_pow(10, m - 9)) * &billion + y2 % &billion
        };

        common::str_radix(&z, 10, m)
    }
}

/// A10 encryption and decryption over decimal strings.
pub struct A10 {
    ffx: Ffx<A10Parameters>,
}

impl A10 {
    /// Construct an A10 instance.
    pub fn new() -> Result<Self, Error> {
        Ok(A10 {
            ffx: Ffx::new(A10Parameters)?,
        })
    }

    /// A10.Encrypt(K, T, X) over decimal symbols.
    pub fn encrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        self.ffx.encrypt(key, tweak, x)
    }

    /// A10.Decrypt(K, T, X).
    pub fn decrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        self.ffx.decrypt(key, tweak, x)
    }
}
