//! AES cipher functions shared by the FPE algorithms.
//!
//! CIPH is single-block AES-ECB; PRF is the CBC-MAC of a block string with
//! a zero IV, as defined in NIST SP 800-38G algorithm 6. A fresh cipher
//! context is built per call, so a shared engine can serve concurrent
//! callers with distinct keys.

use aes::cipher::{generic_array::GenericArray, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256};

use crate::common::{Error, BLOCK_LENGTH, MAXLEN};

/// Raw AES key material, validated at construction.
///
/// The variants are the only key shapes the block cipher accepts, which
/// makes the "AES, RAW format" requirement of the FPE algorithms
/// structural: a value of this type is always raw AES key bytes.
#[derive(Clone, PartialEq, Eq)]
pub enum AesKey {
    Aes128([u8; 16]),
    Aes192([u8; 24]),
    Aes256([u8; 32]),
}

impl AesKey {
    /// Wrap raw key bytes.
    ///
    /// # Errors
    /// Returns `Error::InvalidKey` unless the key is 16, 24 or 32 bytes.
    pub fn new(key: &[u8]) -> Result<Self, Error> {
        match key.len() {
            16 => Ok(AesKey::Aes128(key.try_into().unwrap())),
            24 => Ok(AesKey::Aes192(key.try_into().unwrap())),
            32 => Ok(AesKey::Aes256(key.try_into().unwrap())),
            _ => Err(Error::InvalidKey),
        }
    }

    /// REVB(K): the key with its raw bytes in reverse order, as required
    /// by the FF3 round function.
    pub fn reversed(&self) -> AesKey {
        match self {
            AesKey::Aes128(k) => {
                let mut r = *k;
                r.reverse();
                AesKey::Aes128(r)
            }
            AesKey::Aes192(k) => {
                let mut r = *k;
                r.reverse();
                AesKey::Aes192(r)
            }
            AesKey::Aes256(k) => {
                let mut r = *k;
                r.reverse();
                AesKey::Aes256(r)
            }
        }
    }
}

fn validate_block_string(x: &[u8]) -> Result<(), Error> {
    if x.is_empty() || x.len() > MAXLEN || x.len() % BLOCK_LENGTH != 0 {
        return Err(Error::LengthOutOfRange);
    }
    Ok(())
}

fn ecb_encrypt<C: BlockEncrypt>(cipher: &C, data: &mut [u8]) {
    for block in data.chunks_exact_mut(BLOCK_LENGTH) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }
}

fn cbc_chain<C: BlockEncrypt>(cipher: &C, y: &mut [u8; BLOCK_LENGTH], x: &[u8]) {
    for block in x.chunks_exact(BLOCK_LENGTH) {
        for (a, b) in y.iter_mut().zip(block) {
            *a ^= b;
        }
        cipher.encrypt_block(GenericArray::from_mut_slice(y.as_mut_slice()));
    }
}

/// CIPH(K, X): AES-ECB encryption of a block string.
///
/// X must be a nonempty multiple of 16 bytes, at most `MAXLEN` long; the
/// output has the same length.
pub fn ciph(key: &AesKey, x: &[u8]) -> Result<Vec<u8>, Error> {
    validate_block_string(x)?;

    let mut out = x.to_vec();
    match key {
        AesKey::Aes128(k) => ecb_encrypt(&Aes128::new(GenericArray::from_slice(k)), &mut out),
        AesKey::Aes192(k) => ecb_encrypt(&Aes192::new(GenericArray::from_slice(k)), &mut out),
        AesKey::Aes256(k) => ecb_encrypt(&Aes256::new(GenericArray::from_slice(k)), &mut out),
    }
    Ok(out)
}

/// CBC-MAC of a block string under the given IV: the last block of the
/// CBC encryption of X.
pub(crate) fn cbc_mac(
    key: &AesKey,
    iv: &[u8; BLOCK_LENGTH],
    x: &[u8],
) -> Result<[u8; BLOCK_LENGTH], Error> {
    validate_block_string(x)?;

    let mut y = *iv;
    match key {
        AesKey::Aes128(k) => cbc_chain(&Aes128::new(GenericArray::from_slice(k)), &mut y, x),
        AesKey::Aes192(k) => cbc_chain(&Aes192::new(GenericArray::from_slice(k)), &mut y, x),
        AesKey::Aes256(k) => cbc_chain(&Aes256::new(GenericArray::from_slice(k)), &mut y, x),
    }
    Ok(y)
}

/// PRF(K, X): iterated CIPH over the blocks of X starting from a zero
/// block, returning the final 16-byte block.
pub fn prf(key: &AesKey, x: &[u8]) -> Result<[u8; BLOCK_LENGTH], Error> {
    cbc_mac(key, &[0u8; BLOCK_LENGTH], x)
}
