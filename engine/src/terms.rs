//! The terms-and-conditions digest managers sign before registering.

use compete_crypto::personal_message_digest;
use compete_types::H256;

/// Fixed digest of the competition's terms and conditions.
pub const TERMS_AND_CONDITIONS: H256 = H256::new([
    0x1a, 0x46, 0xb4, 0x5c, 0xc8, 0x49, 0xe2, 0x6b, 0xb3, 0x15, 0x92, 0x98, 0xc3, 0xc2, 0x18, 0xef,
    0x30, 0x0d, 0x01, 0x5e, 0xd3, 0xe2, 0x34, 0x95, 0xe7, 0x7f, 0x0e, 0x52, 0x9c, 0xe9, 0xf6, 0x9e,
]);

/// The digest a manager's wallet signs when signing [`TERMS_AND_CONDITIONS`].
pub fn terms_signing_digest() -> H256 {
    personal_message_digest(&TERMS_AND_CONDITIONS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use compete_crypto::recover_signer;
    use compete_types::{Address, SignatureParts};

    #[test]
    fn terms_constant_matches_published_hex() {
        assert_eq!(
            TERMS_AND_CONDITIONS.to_string(),
            "0x1a46b45cc849e26bb3159298c3c218ef300d015ed3e23495e77f0e529ce9f69e"
        );
    }

    #[test]
    fn signing_digest_is_prefixed() {
        assert_ne!(terms_signing_digest(), TERMS_AND_CONDITIONS);
        assert_eq!(terms_signing_digest(), terms_signing_digest());
    }

    #[test]
    fn recovers_wallet_signature_over_terms() {
        // eth_sign of the terms by key 0x4c0883a6...3f362318.
        assert_eq!(
            terms_signing_digest().to_string(),
            "0x1dd7608adca3c9b293a146af9e1c16a5a26d8c5e26131680315c5284c3047c80"
        );
        let signature = SignatureParts::new(
            27,
            H256::from_hex("0x3960bbd684ec6c5c69779aa5a57f4e415cc5ca7fccadf70b1e9064147f35327c")
                .unwrap(),
            H256::from_hex("0x2a9b1baa16722c769d7bb8d2f536c0d6b7b974c1d31dc5651c59bc687ede0e67")
                .unwrap(),
        );
        assert_eq!(
            recover_signer(&terms_signing_digest(), &signature),
            Some(Address::from_hex("0x2c7536e3605d9c16a7a3d7b1898e529396a65c23").unwrap())
        );
    }
}
