//! IFX: experimental format-preserving encryption over non-uniform
//! radices, where each position of the input has its own alphabet size
//! (mixed digits and letters, for example).
//!
//! The radix vector W is factored into primes and greedily split into two
//! cofactors u <= v with u * v = product(W); a Thorp-like Feistel schedule
//! then walks the input between the two cofactor domains. Round values are
//! decoded as signed two's-complement integers, and the per-call subkey
//! seed and the round inputs use minimal two's-complement encodings; both
//! conventions are visible in ciphertexts and must not be "fixed".
//!
//! IFX is a proof of concept for the encoding and splitting method. It has
//! had no cryptanalysis and is not recommended for sensitive data.

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_traits::{One, ToPrimitive, Zero};

use crate::ciphers::{self, AesKey};
use crate::common::{self, Error};

/// IFX encryption and decryption over a fixed radix vector.
///
/// Instances are immutable after construction and may be shared across
/// threads; each call derives its own AES state.
pub struct Ifx {
    w: Vec<u32>,
    product: BigUint,
    u: BigUint,
    v: BigUint,
    rounds: usize,
}

impl Ifx {
    /// Construct an IFX instance for the radix vector W.
    ///
    /// Each W[i] is the alphabet size of position i. W must have at least
    /// two elements, every element in [2, 2^16), and product(W) >= 100.
    pub fn new(w: &[u32]) -> Result<Self, Error> {
        if w.len() < 2 || w.len() > common::MAXLEN {
            return Err(Error::LengthOutOfRange);
        }
        for &radix in w {
            if radix < common::MINRADIX || radix >= common::MAXRADIX {
                return Err(Error::RadixOutOfRange);
            }
        }

        let product = product(w)?;
        if product < BigUint::from(100u32) {
            return Err(Error::ValueOutOfRange);
        }
        let root = isqrt(&product);

        // G <- descending(factors(W)), then assign each prime to u while
        // u stays within floor(sqrt(w)), otherwise to v
        let mut primes = factors(w)?;
        primes.sort_unstable_by(|a, b| b.cmp(a));

        let mut u = BigUint::one();
        let mut v = BigUint::one();
        for g in primes {
            let grown = &u * g;
            if grown <= root {
                u = grown;
            } else {
                v *= g;
            }
        }

        let rounds = rounds(&u, &v)?;

        Ok(Ifx {
            w: w.to_vec(),
            product,
            u,
            v,
            rounds,
        })
    }

    /// The number of Feistel rounds this instance runs.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// IFX.Encrypt(K, T, X): encrypt a vector with 0 <= X[i] < W[i],
    /// producing a vector over the same per-position ranges.
    pub fn encrypt(&self, key: &AesKey, tweak: &[u8], x: &[u16]) -> Result<Vec<u16>, Error> {
        let x = self.num(x)?;
        let (mut a, mut b) = x.div_rem(&self.v);

        let seed = self.subkey_seed(key, tweak)?;
        let du = BigInt::from(self.u.clone());
        let dv = BigInt::from(self.v.clone());

        for i in 0..self.rounds {
            let d = if i % 2 == 0 { &du } else { &dv };
            let f = self.round_value(key, &seed, i, &b)?;
            let c = common::modulo_big(&(BigInt::from(a) + f), d)?
                .magnitude()
                .clone();
            a = b;
            b = c;
        }

        let y = a * &self.v + b;
        self.str(&y)
    }

    /// IFX.Decrypt(K, T, Y): invert [`Ifx::encrypt`] for the same key and
    /// tweak.
    pub fn decrypt(&self, key: &AesKey, tweak: &[u8], y: &[u16]) -> Result<Vec<u16>, Error> {
        let y = self.num(y)?;
        let (mut a, mut b) = y.div_rem(&self.v);

        let seed = self.subkey_seed(key, tweak)?;
        let du = BigInt::from(self.u.clone());
        let dv = BigInt::from(self.v.clone());

        for i in (0..self.rounds).rev() {
            let d = if i % 2 == 0 { &du } else { &dv };
            let c = b;
            b = a;
            let f = self.round_value(key, &seed, i, &b)?;
            a = common::modulo_big(&(BigInt::from(c) - f), d)?
                .magnitude()
                .clone();
        }

        let x = a * &self.v + b;
        self.str(&x)
    }

    /// Mixed-radix num(X): y = ((X[0]*W[1] + X[1])*W[2] + ...) + X[n-1].
    fn num(&self, x: &[u16]) -> Result<BigUint, Error> {
        if x.len() != self.w.len() {
            return Err(Error::LengthOutOfRange);
        }

        let mut y = BigUint::zero();
        for (&symbol, &radix) in x.iter().zip(&self.w) {
            if u32::from(symbol) >= radix {
                return Err(Error::SymbolOutOfRange);
            }
            y = y * radix + symbol;
        }
        Ok(y)
    }

    /// Mixed-radix str(y): inverse of [`Ifx::num`] for y < product(W).
    fn str(&self, y: &BigUint) -> Result<Vec<u16>, Error> {
        if *y >= self.product {
            return Err(Error::ValueOutOfRange);
        }

        let mut out = vec![0u16; self.w.len()];
        let mut rem = y.clone();
        for (slot, &radix) in out.iter_mut().zip(&self.w).rev() {
            let (q, r) = rem.div_rem(&BigUint::from(radix));
            // r < radix < 2^16
            *slot = r.to_u16().unwrap();
            rem = q;
        }
        Ok(out)
    }

    /// The 16-byte per-call subkey seed P: the CBC-MAC of
    /// R || S || padding || T || U || V under a zero IV.
    fn subkey_seed(&self, key: &AesKey, tweak: &[u8]) -> Result<[u8; 16], Error> {
        let r_bytes = signed_bytes(&BigInt::from(self.rounds));
        let u_bytes = signed_bytes(&BigInt::from(self.u.clone()));
        let v_bytes = signed_bytes(&BigInt::from(self.v.clone()));
        let s = tweak.len() + u_bytes.len() + v_bytes.len() + r_bytes.len();
        let s_bytes = signed_bytes(&BigInt::from(s));

        let pad = common::modulo(-((s + s_bytes.len()) as i64), 16)? as usize;
        let mut o = Vec::with_capacity(s + s_bytes.len() + pad);
        o.extend_from_slice(&r_bytes);
        o.extend_from_slice(&s_bytes);
        o.extend_from_slice(&padding(pad));
        o.extend_from_slice(tweak);
        o.extend_from_slice(&u_bytes);
        o.extend_from_slice(&v_bytes);

        ciphers::prf(key, &o)
    }

    /// One round value f: the CBC-MAC of [i] || padding || [b] under the
    /// subkey seed as IV, decoded as a signed two's-complement integer.
    fn round_value(
        &self,
        key: &AesKey,
        seed: &[u8; 16],
        i: usize,
        b: &BigUint,
    ) -> Result<BigInt, Error> {
        let i_bytes = signed_bytes(&BigInt::from(i));
        let b_bytes = signed_bytes(&BigInt::from(b.clone()));

        let pad = common::modulo(-((i_bytes.len() + b_bytes.len()) as i64), 16)? as usize;
        let mut q = Vec::with_capacity(i_bytes.len() + pad + b_bytes.len());
        q.extend_from_slice(&i_bytes);
        q.extend_from_slice(&padding(pad));
        q.extend_from_slice(&b_bytes);

        let f = ciphers::cbc_mac(key, seed, &q)?;
        signed_integer(&f)
    }
}

/// Product of the radices, as an unconstrained integer. Zero elements are
/// rejected.
pub(crate) fn product(w: &[u32]) -> Result<BigUint, Error> {
    if w.is_empty() {
        return Err(Error::LengthOutOfRange);
    }

    let mut y = BigUint::one();
    for &x in w {
        if x == 0 {
            return Err(Error::ValueOutOfRange);
        }
        y *= x;
    }
    Ok(y)
}

/// Prime factors, with multiplicity, of every element of W.
pub(crate) fn factors(w: &[u32]) -> Result<Vec<u32>, Error> {
    if w.is_empty() {
        return Err(Error::LengthOutOfRange);
    }
    let max = w.iter().copied().max().unwrap();
    let table = primes(max)?;

    let mut g = Vec::with_capacity(w.len());
    for &x in w {
        if x < 2 {
            return Err(Error::ValueOutOfRange);
        }
        g.extend_from_slice(&table[x as usize]);
    }
    Ok(g)
}

/// Modified Sieve of Eratosthenes: for every k in [2, x], the list of
/// prime factors of k with multiplicity. Entries 0 and 1 stay empty.
///
/// Space grows linearly in x; x is capped at 2^16 - 1, matching the
/// largest permitted radix.
pub(crate) fn primes(x: u32) -> Result<Vec<Vec<u32>>, Error> {
    if !(2..=65535).contains(&x) {
        return Err(Error::ValueOutOfRange);
    }
    let x = x as usize;

    let mut table: Vec<Vec<u32>> = vec![Vec::new(); x + 1];
    let root = common::ceiling((x as f64).sqrt());

    // mark each prime i in every multiple from i^2 upward
    for i in 2..=root {
        if !table[i].is_empty() {
            continue;
        }
        let mut j = i;
        while j * i <= x {
            table[j * i].push(i as u32);
            j += 1;
        }
    }

    // complete each entry: untouched numbers are prime; for the rest,
    // divide out the distinct primes found so far and append the factor
    // list of the quotient
    for i in 2..=x {
        if table[i].is_empty() {
            table[i].push(i as u32);
        } else {
            let partial: u32 = table[i].iter().product();
            let j = i / partial as usize;
            if j > 1 {
                let rest = table[j].clone();
                table[i].extend_from_slice(&rest);
            }
        }
    }
    Ok(table)
}

/// Integer square root by the Babylonian method: the largest y with
/// y^2 <= x.
pub(crate) fn isqrt(x: &BigUint) -> BigUint {
    if x.is_zero() || x.is_one() {
        return x.clone();
    }

    let two = BigUint::from(2u32);
    let mut y = x / &two;
    while y > x / &y {
        y = (x / &y + &y) / &two;
    }
    y
}

/// Round count for cofactor radices u and v:
/// 4 * ceiling((bitlen(u-1) + bitlen(v-1)) / min(bitlen(u-1), bitlen(v-1))).
pub(crate) fn rounds(u: &BigUint, v: &BigUint) -> Result<usize, Error> {
    let two = BigUint::from(2u32);
    if *u < two || *v < two {
        return Err(Error::ValueOutOfRange);
    }

    let x = (u - 1u32).bits() as usize;
    let y = (v - 1u32).bits() as usize;
    let min = x.min(y);
    Ok(4 * ((x + y + min - 1) / min))
}

/// x zero bytes.
pub(crate) fn padding(x: usize) -> Vec<u8> {
    vec![0u8; x]
}

/// Minimal two's-complement big-endian encoding of x.
pub(crate) fn signed_bytes(x: &BigInt) -> Vec<u8> {
    x.to_signed_bytes_be()
}

/// Two's-complement big-endian decoding; the leading bit is the sign.
pub(crate) fn signed_integer(x: &[u8]) -> Result<BigInt, Error> {
    if x.is_empty() {
        return Err(Error::LengthOutOfRange);
    }
    Ok(BigInt::from_signed_bytes_be(x))
}
