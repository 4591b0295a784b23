//! FF3 format-preserving encryption, NIST SP 800-38G algorithms 9 and 10.
//!
//! FF3 is an eight-round Feistel cipher with a fixed 8-byte tweak and a
//! byte-reversal convention: the AES key and every cipher block are
//! processed in reverse byte order. Realized as a parameter set for the
//! [`Ffx`] driver; the reversed-half arithmetic variant reproduces steps
//! 4.v and 4.vi of the specification, which operate on REV(A) and REV(B).

use crate::ciphers::{self, AesKey};
use crate::common::{self, Error};
use crate::ffx::{Arithmetic, FeistelMethod, Ffx, FfxParameters};

/// FFX parameter set for FF3.
pub struct Ff3Parameters {
    radix: u32,
    min_len: usize,
    max_len: usize,
}

impl Ff3Parameters {
    /// Build the FF3 pack for use with [`Ffx`] directly.
    pub fn new(radix: u32) -> Result<Self, Error> {
        if !(common::MINRADIX..=common::MAXRADIX).contains(&radix) {
            return Err(Error::RadixOutOfRange);
        }

        // 2 <= minlen <= maxlen <= 2 * floor(log(2^96) / log(radix))
        let min_len = common::MINLEN.max(common::ceiling(
            100f64.ln() / f64::from(radix).ln(),
        ));
        let max_len = min_len.max(2 * common::floor(
            2f64.powi(96).ln() / f64::from(radix).ln(),
        ));

        Ok(Ff3Parameters {
            radix,
            min_len,
            max_len,
        })
    }
}

impl FfxParameters for Ff3Parameters {
    fn radix(&self) -> u32 {
        self.radix
    }

    fn min_len(&self) -> usize {
        self.min_len
    }

    fn max_len(&self) -> usize {
        self.max_len
    }

    fn min_tweak_len(&self) -> usize {
        8
    }

    fn max_tweak_len(&self) -> usize {
        8
    }

    fn method(&self) -> FeistelMethod {
        FeistelMethod::Two
    }

    fn arithmetic(&self) -> Arithmetic {
        Arithmetic::ReversedBlockwise
    }

    fn split(&self, n: usize) -> usize {
        common::ceiling(n as f64 / 2.0)
    }

    fn rounds(&self, _n: usize) -> usize {
        8
    }

    fn round_function(
        &self,
        key: &AesKey,
        n: usize,
        tweak: &[u8],
        i: usize,
        b: &[u16],
    ) -> Result<Vec<u16>, Error> {
        // byte reversal of the raw key material; AesKey is always RAW
        let rev_key = key.reversed();

        // 1. u = ceiling(n/2); v = n - u
        let u = common::ceiling(n as f64 / 2.0);
        let v = n - u;

        // 3. T_L = T[0..31], T_R = T[32..63]
        let t_l = &tweak[..4];
        let t_r = &tweak[4..8];

        // 4.i. even rounds use (u, T_R), odd rounds use (v, T_L)
        let (m, w) = if i % 2 == 0 { (u, t_r) } else { (v, t_l) };

        // 4.ii. P = (W xor [i]^4) || [NUMradix(REV(B))]^12
        let p = common::concatenate(
            &common::xor(w, &common::bytestring(i as u64, 4)?)?,
            &common::bytestring_big(
                &common::num_radix(&common::rev(b), self.radix)?,
                12,
            )?,
        );

        // 4.iii. S = REVB(CIPH_REVB(K)(REVB(P)))
        let s = common::revb(&ciphers::ciph(&rev_key, &common::revb(&p))?);

        // 4.iv. y = NUM(S) constrained to [0, radix^m)
        let y = common::num(&s)? % common::radix_pow(self.radix, m);
        common::str_radix(&y, self.radix, m)
    }
}

/// FF3 encryption and decryption for a fixed radix.
///
/// The tweak is always exactly 8 bytes; the input length bounds follow
/// from the radix (a half-string must fit in 96 bits).
pub struct Ff3 {
    ffx: Ffx<Ff3Parameters>,
}

impl Ff3 {
    /// Construct an FF3 instance.
    ///
    /// # Errors
    /// Returns `Error::RadixOutOfRange` for a radix outside
    /// [MINRADIX..MAXRADIX].
    pub fn new(radix: u32) -> Result<Self, Error> {
        Ok(Ff3 {
            ffx: Ffx::new(Ff3Parameters::new(radix)?)?,
        })
    }

    /// The smallest accepted input length for this radix.
    pub fn min_len(&self) -> usize {
        self.ffx.params().min_len
    }

    /// The largest accepted input length for this radix.
    pub fn max_len(&self) -> usize {
        self.ffx.params().max_len
    }

    /// FF3.Encrypt(K, T, X).
    pub fn encrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        self.ffx.encrypt(key, tweak, x)
    }

    /// FF3.Decrypt(K, T, X).
    pub fn decrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        self.ffx.decrypt(key, tweak, x)
    }
}
