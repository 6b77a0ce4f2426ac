//! Recoverable secp256k1 signing and signer recovery.

use compete_types::{Address, SecretKey, SignatureParts, H256};
use libsecp256k1::{recover, sign, Message, RecoveryId, Signature};

use crate::address::address_from_public_key;
use crate::hash::personal_message_digest;

/// Sign a 32-byte digest, returning `(v, r, s)` with `v` in the 27/28 form.
///
/// Returns `None` if the secret key is not a valid scalar.
pub fn sign_digest(digest: &H256, secret: &SecretKey) -> Option<SignatureParts> {
    let sk = libsecp256k1::SecretKey::parse(&secret.0).ok()?;
    let (sig, rid) = sign(&Message::parse(digest.as_bytes()), &sk);
    let compact = sig.serialize();
    let mut r = [0u8; 32];
    let mut s = [0u8; 32];
    r.copy_from_slice(&compact[..32]);
    s.copy_from_slice(&compact[32..]);
    Some(SignatureParts::new(
        rid.serialize() + SignatureParts::V_OFFSET,
        H256::new(r),
        H256::new(s),
    ))
}

/// Sign `message` the way a wallet's `eth_sign` does (personal-message prefix).
pub fn sign_personal(message: &H256, secret: &SecretKey) -> Option<SignatureParts> {
    sign_digest(&personal_message_digest(message), secret)
}

/// Recover the address that produced `signature` over `digest`.
///
/// Returns `None` when `v` does not resolve to recovery id 0 or 1, when
/// `r`/`s` are out of range, or when no public key can be recovered. The
/// caller compares the result against the identity it expects.
pub fn recover_signer(digest: &H256, signature: &SignatureParts) -> Option<Address> {
    let rid = RecoveryId::parse(signature.recovery_id()?).ok()?;
    let sig = Signature::parse_standard(&signature.compact()).ok()?;
    let public = recover(&Message::parse(digest.as_bytes()), &sig, &rid).ok()?;
    Some(address_from_public_key(&public))
}

/// Recover the signer of a personal-message signature over `message`.
pub fn recover_personal_signer(message: &H256, signature: &SignatureParts) -> Option<Address> {
    recover_signer(&personal_message_digest(message), signature)
}
