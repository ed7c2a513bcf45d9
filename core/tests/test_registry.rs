// # 🧪 Cipher registry lookups

#[cfg(test)]
mod tests {
    use seedstream_core::crypto::{iv_length, resolve, supported_ciphers, CipherFamily, CipherMode, CryptoError};

    #[test]
    fn lookup_is_case_insensitive() {
        let info = resolve("AES-256-CTR").unwrap();
        assert_eq!(info.name, "aes-256-ctr");
        assert_eq!(info.family, CipherFamily::Aes256);
        assert_eq!(info.mode, CipherMode::Ctr);
    }

    #[test]
    fn aliases_resolve_to_canonical_names() {
        assert_eq!(resolve("des3").unwrap().name, "des-ede3-cbc");
        assert_eq!(resolve("Blowfish").unwrap().name, "bf-cbc");
        assert_eq!(resolve("aes128").unwrap().name, "aes-128-cbc");
    }

    #[test]
    fn unknown_name_is_unsupported() {
        match resolve("not-a-cipher") {
            Err(CryptoError::UnsupportedCipher { name }) => assert_eq!(name, "not-a-cipher"),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn iv_lengths() {
        assert_eq!(iv_length("aes-256-ctr").unwrap(), 16);
        assert_eq!(iv_length("aes-128-ecb").unwrap(), 0);
        assert_eq!(iv_length("aes-128-gcm").unwrap(), 12);
        assert_eq!(iv_length("chacha20").unwrap(), 16);
        assert_eq!(iv_length("chacha20-poly1305").unwrap(), 12);
        assert_eq!(iv_length("des-ede3-cbc").unwrap(), 8);
        assert_eq!(iv_length("rc4").unwrap(), 0);
        assert!(iv_length("aes-512-cbc").is_err());
    }

    #[test]
    fn key_lengths() {
        assert_eq!(resolve("aes-192-ofb").unwrap().key_len(), 24);
        assert_eq!(resolve("des-ede").unwrap().key_len(), 16);
        assert_eq!(resolve("bf-ecb").unwrap().max_key_len(), 56);
    }

    #[test]
    fn listing_is_sorted_and_complete() {
        let names: Vec<_> = supported_ciphers().collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        for name in ["aes-256-ctr", "chacha20", "rc4", "sm4-ctr", "camellia-128-cfb8", "cast5-ofb"] {
            assert!(names.contains(&name), "{name} missing");
        }
        assert!(names.iter().all(|n| resolve(n).is_ok()));
    }
}
