//! Known-answer tests against the NIST SP 800-38G sample vectors and the
//! IFX reference vectors.
//!
//! Every vector is checked in both directions: encryption must reproduce
//! the expected ciphertext bit-exactly, and decryption must recover the
//! plaintext.

#[cfg(test)]
mod tests {
    use crate::ciphers::AesKey;
    use crate::common::MAXLEN;
    use crate::ff1::Ff1;
    use crate::ff3::Ff3;
    use crate::ifx::Ifx;

    struct FpeVector {
        radix: u32,
        key: &'static str,
        tweak: &'static str,
        plaintext: &'static [u16],
        ciphertext: &'static [u16],
    }

    fn check_ff1(vector: &FpeVector) {
        let ff1 = Ff1::new(vector.radix, MAXLEN).unwrap();
        let key = AesKey::new(&hex::decode(vector.key).unwrap()).unwrap();
        let tweak = hex::decode(vector.tweak).unwrap();

        let ct = ff1.encrypt(&key, &tweak, vector.plaintext).unwrap();
        assert_eq!(ct, vector.ciphertext, "FF1 encrypt, key {}", vector.key);

        let pt = ff1.decrypt(&key, &tweak, vector.ciphertext).unwrap();
        assert_eq!(pt, vector.plaintext, "FF1 decrypt, key {}", vector.key);
    }

    fn check_ff3(vector: &FpeVector) {
        let ff3 = Ff3::new(vector.radix).unwrap();
        let key = AesKey::new(&hex::decode(vector.key).unwrap()).unwrap();
        let tweak = hex::decode(vector.tweak).unwrap();

        let ct = ff3.encrypt(&key, &tweak, vector.plaintext).unwrap();
        assert_eq!(ct, vector.ciphertext, "FF3 encrypt, key {}", vector.key);

        let pt = ff3.decrypt(&key, &tweak, vector.ciphertext).unwrap();
        assert_eq!(pt, vector.plaintext, "FF3 decrypt, key {}", vector.key);
    }

    const PT_TEN: &[u16] = &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
    const PT_NINETEEN: &[u16] = &[
        0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
    ];

    #[test]
    fn test_ff1_aes128_samples() {
        check_ff1(&FpeVector {
            radix: 10,
            key: "2B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "",
            plaintext: PT_TEN,
            ciphertext: &[2, 4, 3, 3, 4, 7, 7, 4, 8, 4],
        });
        check_ff1(&FpeVector {
            radix: 10,
            key: "2B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "39383736353433323130",
            plaintext: PT_TEN,
            ciphertext: &[6, 1, 2, 4, 2, 0, 0, 7, 7, 3],
        });
        check_ff1(&FpeVector {
            radix: 36,
            key: "2B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "3737373770717273373737",
            plaintext: PT_NINETEEN,
            ciphertext: &[
                10, 9, 29, 31, 4, 0, 22, 21, 21, 9, 20, 13, 30, 5, 0, 9, 14, 30, 22,
            ],
        });
    }

    #[test]
    fn test_ff1_aes192_samples() {
        check_ff1(&FpeVector {
            radix: 10,
            key: "2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F",
            tweak: "",
            plaintext: PT_TEN,
            ciphertext: &[2, 8, 3, 0, 6, 6, 8, 1, 3, 2],
        });
        check_ff1(&FpeVector {
            radix: 10,
            key: "2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F",
            tweak: "39383736353433323130",
            plaintext: PT_TEN,
            ciphertext: &[2, 4, 9, 6, 6, 5, 5, 5, 4, 9],
        });
    }

    #[test]
    fn test_ff1_aes256_samples() {
        check_ff1(&FpeVector {
            radix: 10,
            key: "2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "",
            plaintext: PT_TEN,
            ciphertext: &[6, 6, 5, 7, 6, 6, 7, 0, 0, 9],
        });
        check_ff1(&FpeVector {
            radix: 10,
            key: "2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "39383736353433323130",
            plaintext: PT_TEN,
            ciphertext: &[1, 0, 0, 1, 6, 2, 3, 4, 6, 3],
        });
        check_ff1(&FpeVector {
            radix: 36,
            key: "2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "3737373770717273373737",
            plaintext: PT_NINETEEN,
            ciphertext: &[
                33, 28, 8, 10, 0, 10, 35, 17, 2, 10, 31, 34, 10, 21, 34, 35, 30, 32, 13,
            ],
        });
    }

    #[test]
    fn test_ff1_multiblock_s_extension() {
        // radix 256 with 80 symbols makes d = 44, forcing the
        // CIPH(R xor [j]) concatenation in step 6.iii
        check_ff1(&FpeVector {
            radix: 256,
            key: "2B7E151628AED2A6ABF7158809CF4F3CEF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "3737373770717273373737",
            plaintext: &[
                77, 104, 140, 63, 156, 241, 168, 217, 77, 120, 141, 248, 199, 103, 250, 164, 56,
                175, 134, 207, 120, 221, 126, 109, 156, 169, 100, 89, 115, 18, 217, 150, 78, 71,
                81, 206, 168, 98, 98, 156, 95, 122, 38, 63, 68, 30, 212, 125, 250, 155, 29, 218,
                189, 20, 234, 97, 130, 113, 229, 168, 221, 55, 161, 90, 45, 240, 130, 241, 58, 61,
                170, 204, 41, 160, 144, 147, 174, 65, 87, 23,
            ],
            ciphertext: &[
                68, 111, 39, 159, 6, 189, 255, 68, 203, 183, 154, 249, 35, 48, 199, 152, 118, 215,
                63, 117, 164, 44, 164, 195, 236, 192, 41, 33, 25, 92, 8, 156, 151, 239, 253, 22,
                223, 23, 228, 167, 170, 8, 34, 25, 11, 181, 38, 5, 111, 145, 154, 135, 59, 238,
                62, 185, 132, 63, 216, 218, 107, 179, 121, 95, 87, 20, 239, 2, 80, 133, 216, 171,
                142, 192, 139, 64, 105, 203, 160, 125,
            ],
        });
    }

    const FF3_PT_18: &[u16] = &[8, 9, 0, 1, 2, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0];
    const FF3_PT_29: &[u16] = &[
        8, 9, 0, 1, 2, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 0, 0, 0, 0, 0, 7, 8, 9, 0, 0, 0, 0, 0, 0,
    ];

    #[test]
    fn test_ff3_aes128_samples() {
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "D8E7920AFA330A73",
            plaintext: FF3_PT_18,
            ciphertext: &[7, 5, 0, 9, 1, 8, 8, 1, 4, 0, 5, 8, 6, 5, 4, 6, 0, 7],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "9A768A92F60E12D8",
            plaintext: FF3_PT_18,
            ciphertext: &[0, 1, 8, 9, 8, 9, 8, 3, 9, 1, 8, 9, 3, 9, 5, 3, 8, 4],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "D8E7920AFA330A73",
            plaintext: FF3_PT_29,
            ciphertext: &[
                4, 8, 5, 9, 8, 3, 6, 7, 1, 6, 2, 2, 5, 2, 5, 6, 9, 6, 2, 9, 3, 9, 7, 4, 1, 6, 2,
                2, 6,
            ],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "0000000000000000",
            plaintext: FF3_PT_29,
            ciphertext: &[
                3, 4, 6, 9, 5, 2, 2, 4, 8, 2, 1, 7, 3, 4, 5, 3, 5, 1, 2, 2, 6, 1, 3, 7, 0, 1, 4,
                3, 4,
            ],
        });
        check_ff3(&FpeVector {
            radix: 26,
            key: "EF4359D8D580AA4F7F036D6F04FC6A94",
            tweak: "9A768A92F60E12D8",
            plaintext: PT_NINETEEN,
            ciphertext: &[
                16, 2, 25, 20, 4, 0, 18, 9, 9, 2, 15, 23, 2, 0, 12, 19, 10, 20, 11,
            ],
        });
    }

    #[test]
    fn test_ff3_aes192_samples() {
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6",
            tweak: "D8E7920AFA330A73",
            plaintext: FF3_PT_18,
            ciphertext: &[6, 4, 6, 9, 6, 5, 3, 9, 3, 8, 7, 5, 0, 2, 8, 7, 5, 5],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6",
            tweak: "9A768A92F60E12D8",
            plaintext: FF3_PT_18,
            ciphertext: &[9, 6, 1, 6, 1, 0, 5, 1, 4, 4, 9, 1, 4, 2, 4, 4, 4, 6],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6",
            tweak: "D8E7920AFA330A73",
            plaintext: FF3_PT_29,
            ciphertext: &[
                5, 3, 0, 4, 8, 8, 8, 4, 0, 6, 5, 3, 5, 0, 2, 0, 4, 5, 4, 1, 7, 8, 6, 3, 8, 0, 8,
                0, 7,
            ],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6",
            tweak: "0000000000000000",
            plaintext: FF3_PT_29,
            ciphertext: &[
                9, 8, 0, 8, 3, 8, 0, 2, 6, 7, 8, 8, 2, 0, 3, 8, 9, 2, 9, 5, 0, 4, 1, 4, 8, 3, 5,
                1, 2,
            ],
        });
        check_ff3(&FpeVector {
            radix: 26,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6",
            tweak: "9A768A92F60E12D8",
            plaintext: PT_NINETEEN,
            ciphertext: &[
                18, 0, 18, 17, 14, 2, 19, 15, 19, 7, 10, 9, 24, 25, 15, 9, 25, 8, 8,
            ],
        });
    }

    #[test]
    fn test_ff3_aes256_samples() {
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "D8E7920AFA330A73",
            plaintext: FF3_PT_18,
            ciphertext: &[9, 2, 2, 0, 1, 1, 2, 0, 5, 5, 6, 2, 7, 7, 7, 4, 9, 5],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "9A768A92F60E12D8",
            plaintext: FF3_PT_18,
            ciphertext: &[5, 0, 4, 1, 4, 9, 8, 6, 5, 5, 7, 8, 0, 5, 6, 1, 4, 0],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "D8E7920AFA330A73",
            plaintext: FF3_PT_29,
            ciphertext: &[
                0, 4, 3, 4, 4, 3, 4, 3, 2, 3, 5, 7, 9, 2, 5, 9, 9, 1, 6, 5, 7, 3, 4, 6, 2, 2, 6,
                9, 9,
            ],
        });
        check_ff3(&FpeVector {
            radix: 10,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "0000000000000000",
            plaintext: FF3_PT_29,
            ciphertext: &[
                3, 0, 8, 5, 9, 2, 3, 9, 9, 9, 9, 3, 7, 4, 0, 5, 3, 8, 7, 2, 3, 6, 5, 5, 5, 5, 8,
                2, 2,
            ],
        });
        check_ff3(&FpeVector {
            radix: 26,
            key: "EF4359D8D580AA4F7F036D6F04FC6A942B7E151628AED2A6ABF7158809CF4F3C",
            tweak: "9A768A92F60E12D8",
            plaintext: PT_NINETEEN,
            ciphertext: &[
                25, 0, 11, 2, 16, 24, 13, 15, 19, 10, 9, 11, 17, 11, 7, 11, 20, 3, 8,
            ],
        });
    }

    #[test]
    fn test_ifx_reference_vectors() {
        let ifx = Ifx::new(&[10, 26, 26, 26, 10, 10, 10]).unwrap();
        let key =
            AesKey::new(&hex::decode("2B7E151628AED2A6ABF7158809CF4F3C").unwrap()).unwrap();
        let pt = [0u16, 1, 2, 3, 4, 5, 6];

        // empty tweak
        let ct = ifx.encrypt(&key, &[], &pt).unwrap();
        assert_eq!(ct, vec![7, 0, 3, 13, 6, 6, 8]);
        assert_eq!(ifx.decrypt(&key, &[], &ct).unwrap(), pt);

        // 16-byte tweak
        let tweak = hex::decode("C0C1C2C3C4C5C6C7C8C9CACBCCCDCECF").unwrap();
        let ct = ifx.encrypt(&key, &tweak, &pt).unwrap();
        assert_eq!(ct, vec![4, 3, 2, 15, 5, 8, 4]);
        assert_eq!(ifx.decrypt(&key, &tweak, &ct).unwrap(), pt);
    }
}
