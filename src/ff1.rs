//! FF1 format-preserving encryption, NIST SP 800-38G algorithms 7 and 8.
//!
//! FF1 is a ten-round balanced Feistel cipher over base-radix numeral
//! strings, with a variable-length tweak. It is realized here as a
//! parameter set for the generic [`Ffx`] driver; the round function below
//! is steps 3-6.v of the specification, and the driver's blockwise
//! arithmetic supplies steps 6.vi-6.ix.

use crate::ciphers::{self, AesKey};
use crate::common::{self, Error};
use crate::ffx::{Arithmetic, FeistelMethod, Ffx, FfxParameters};

/// FFX parameter set for FF1.
pub struct Ff1Parameters {
    radix: u32,
    min_len: usize,
    max_tweak_len: usize,
}

impl Ff1Parameters {
    /// Build the FF1 pack for use with [`Ffx`] directly.
    pub fn new(radix: u32, max_tweak_len: usize) -> Result<Self, Error> {
        if !(common::MINRADIX..=common::MAXRADIX).contains(&radix) {
            return Err(Error::RadixOutOfRange);
        }
        if max_tweak_len > common::MAXLEN {
            return Err(Error::TweakLengthOutOfRange);
        }

        // smallest n with radix^n >= 100, never below MINLEN
        let min_len = common::MINLEN.max(common::ceiling(
            100f64.ln() / f64::from(radix).ln(),
        ));

        Ok(Ff1Parameters {
            radix,
            min_len,
            max_tweak_len,
        })
    }
}

impl FfxParameters for Ff1Parameters {
    fn radix(&self) -> u32 {
        self.radix
    }

    fn min_len(&self) -> usize {
        self.min_len
    }

    fn max_len(&self) -> usize {
        common::MAXLEN
    }

    fn min_tweak_len(&self) -> usize {
        0
    }

    fn max_tweak_len(&self) -> usize {
        self.max_tweak_len
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

    fn rounds(&self, _n: usize) -> usize {
        10
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

        // 1. u = floor(n/2); v = n - u
        let u = common::floor(n as f64 / 2.0);
        let v = n - u;

        // 3. b = ceiling(ceiling(v * LOG(radix)) / 8)
        let bits = common::ceiling(v as f64 * common::log2(self.radix));
        let b_len = common::ceiling(bits as f64 / 8.0);

        // 4. d = 4 * ceiling(b/4) + 4
        let d = 4 * common::ceiling(b_len as f64 / 4.0) + 4;

        // 5. P = [1] || [2] || [1] || [radix]^3 || [10] || [u mod 256] ||
        //        [n]^4 || [t]^4
        let mut p = vec![0x01u8, 0x02, 0x01];
        p.extend_from_slice(&common::bytestring(u64::from(self.radix), 3)?);
        p.push(0x0A);
        p.push(common::modulo(u as i64, 256)? as u8);
        p.extend_from_slice(&common::bytestring(n as u64, 4)?);
        p.extend_from_slice(&common::bytestring(t as u64, 4)?);

        // 6.i. Q = T || [0]^((-t-b-1) mod 16) || [i] || [NUMradix(B)]^b
        let mut q = tweak.to_vec();
        let pad = common::modulo(-(t as i64) - b_len as i64 - 1, 16)? as usize;
        q.extend_from_slice(&common::bytestring(0, pad)?);
        q.extend_from_slice(&common::bytestring(i as u64, 1)?);
        q.extend_from_slice(&common::bytestring_big(
            &common::num_radix(b, self.radix)?,
            b_len,
        )?);

        // 6.ii. R = PRF(P || Q)
        let r = ciphers::prf(key, &common::concatenate(&p, &q))?;

        // 6.iii. S = first d bytes of R || CIPH(R xor [1]^16) || ...
        let mut s = r.to_vec();
        for j in 1..common::ceiling(d as f64 / 16.0) {
            let block = common::xor(&r, &common::bytestring(j as u64, 16)?)?;
            s.extend_from_slice(&ciphers::ciph(key, &block)?);
        }
        s.truncate(d);

        // 6.iv-6.v. y = NUM(S) constrained to [0, radix^m)
        let m = if i % 2 == 0 { u } else { v };
        let y = common::num(&s)? % common::radix_pow(self.radix, m);
        common::str_radix(&y, self.radix, m)
    }
}

/// FF1 encryption and decryption for a fixed radix and maximum tweak
/// length.
///
/// ```
/// use ffx::{AesKey, Ff1};
///
/// let key = AesKey::new(&[0u8; 16]).unwrap();
/// let ff1 = Ff1::new(10, 16).unwrap();
///
/// let pan = [4u16, 0, 1, 2, 8, 8, 8, 8, 8, 8, 8, 1, 8, 8, 1, 8];
/// let hidden = ff1.encrypt(&key, b"account", &pan).unwrap();
/// assert_eq!(hidden.len(), pan.len());
/// assert!(hidden.iter().all(|&d| d < 10));
///
/// assert_eq!(ff1.decrypt(&key, b"account", &hidden).unwrap(), pan);
/// ```
pub struct Ff1 {
    ffx: Ffx<Ff1Parameters>,
}

impl Ff1 {
    /// Construct an FF1 instance.
    ///
    /// # Errors
    /// Returns `Error::RadixOutOfRange` for a radix outside
    /// [MINRADIX..MAXRADIX] and `Error::TweakLengthOutOfRange` for a
    /// maximum tweak length above MAXLEN.
    pub fn new(radix: u32, max_tweak_len: usize) -> Result<Self, Error> {
        Ok(Ff1 {
            ffx: Ffx::new(Ff1Parameters::new(radix, max_tweak_len)?)?,
        })
    }

    /// FF1.Encrypt(K, T, X).
    pub fn encrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        self.ffx.encrypt(key, tweak, x)
    }

    /// FF1.Decrypt(K, T, X).
    pub fn decrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        self.ffx.decrypt(key, tweak, x)
    }
}
