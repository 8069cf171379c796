#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Dispatch surface.
//!
//! [`evaluate`] is the single routing table from operation kind to invariant:
//! one match arm per kind, no wildcard. Kinds without an invariant have an
//! explicit `Ok(())` arm so a check can be attached later without touching
//! callers.
//!
//! The `test_*` functions are the per-kind entry points the harness calls once
//! per executed (or declined) operation. They return normally or abort the
//! process; nothing is returned to the caller.

use xcheck_types::OperationOutcome;
use xcheck_types::component::{
    Bignum, Ciphertext, Cleartext, Digest as DigestOutput, EccKeyPair, EccPublicKey,
    EcdsaSignature, Key, Mac, Secret, Signature,
};
use xcheck_types::operation::{
    BignumCalc, Cmac, Digest, EccGenerateKeyPair, EccPrivateToPublic, EcdhDerive, EcdsaSign,
    EcdsaVerify, Hmac, KdfArgon2, KdfHkdf, KdfPbkdf, KdfPbkdf1, KdfPbkdf2, KdfScrypt, KdfSsh,
    KdfTls1Prf, KdfX963, Sign, SymmetricDecrypt, SymmetricEncrypt, Verify,
};

use crate::abort;
use crate::config::{InvariantConfig, global_config};
use crate::key_size::key_size_violation;
use crate::regression::chacha20_poly1305_iv_violation;
use crate::violation::InvariantViolation;

/// Evaluates every invariant attached to the outcome's kind.
///
/// Pure: no configuration is consulted and nothing is reported.
///
/// # Errors
/// Returns the first violated invariant.
pub fn evaluate(outcome: OperationOutcome<'_>) -> Result<(), InvariantViolation> {
    match outcome {
        OperationOutcome::Digest(_, _) => Ok(()),
        OperationOutcome::Hmac(_, _) => Ok(()),
        OperationOutcome::SymmetricEncrypt(op, result) => {
            chacha20_poly1305_iv_violation(op, result)
        }
        OperationOutcome::SymmetricDecrypt(_, _) => Ok(()),
        OperationOutcome::Cmac(_, _) => Ok(()),
        OperationOutcome::KdfScrypt(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfHkdf(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfTls1Prf(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfPbkdf(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfPbkdf1(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfPbkdf2(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfArgon2(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfSsh(op, result) => key_size_violation(op, result),
        OperationOutcome::KdfX963(op, result) => key_size_violation(op, result),
        OperationOutcome::Sign(_, _) => Ok(()),
        OperationOutcome::Verify(_, _) => Ok(()),
        OperationOutcome::EccPrivateToPublic(_, _) => Ok(()),
        OperationOutcome::EccGenerateKeyPair(_, _) => Ok(()),
        OperationOutcome::EcdsaSign(_, _) => Ok(()),
        OperationOutcome::EcdsaVerify(_, _) => Ok(()),
        OperationOutcome::EcdhDerive(_, _) => Ok(()),
        OperationOutcome::BignumCalc(_, _) => Ok(()),
    }
}

/// Checks `outcome` under `config`, aborting the process on a violation.
pub fn check_with(config: &InvariantConfig, outcome: OperationOutcome<'_>) {
    run(config.is_active(outcome.kind()), outcome);
}

/// Checks `outcome` under the process-wide configuration, aborting the
/// process on a violation.
pub fn check(outcome: OperationOutcome<'_>) {
    run(global_config().is_active(outcome.kind()), outcome);
}

fn run(active: bool, outcome: OperationOutcome<'_>) {
    let kind = outcome.kind();
    if !active {
        tracing::trace!(operation = kind.name(), "invariant checks disabled");
        return;
    }
    tracing::trace!(operation = kind.name(), has_result = outcome.has_result(), "checking");
    abort::enforce(evaluate(outcome));
}

/// Digest entry point; no invariant yet.
pub fn test_digest(op: &Digest, result: Option<&DigestOutput>) {
    check(OperationOutcome::Digest(op, result));
}

/// HMAC entry point; no invariant yet.
pub fn test_hmac(op: &Hmac, result: Option<&Mac>) {
    check(OperationOutcome::Hmac(op, result));
}

/// Runs the CVE-2019-1543 ChaCha20-Poly1305 IV check.
pub fn test_symmetric_encrypt(op: &SymmetricEncrypt, result: Option<&Ciphertext>) {
    check(OperationOutcome::SymmetricEncrypt(op, result));
}

/// Symmetric decryption entry point; no invariant yet.
pub fn test_symmetric_decrypt(op: &SymmetricDecrypt, result: Option<&Cleartext>) {
    check(OperationOutcome::SymmetricDecrypt(op, result));
}

/// CMAC entry point; no invariant yet.
pub fn test_cmac(op: &Cmac, result: Option<&Mac>) {
    check(OperationOutcome::Cmac(op, result));
}

/// scrypt entry point: produced key length must equal `key_size`.
pub fn test_kdf_scrypt(op: &KdfScrypt, result: Option<&Key>) {
    check(OperationOutcome::KdfScrypt(op, result));
}

/// HKDF entry point: produced key length must equal `key_size`.
pub fn test_kdf_hkdf(op: &KdfHkdf, result: Option<&Key>) {
    check(OperationOutcome::KdfHkdf(op, result));
}

/// TLS 1.x PRF entry point: produced key length must equal `key_size`.
pub fn test_kdf_tls1_prf(op: &KdfTls1Prf, result: Option<&Key>) {
    check(OperationOutcome::KdfTls1Prf(op, result));
}

/// PKCS#12 PBKDF entry point: produced key length must equal `key_size`.
pub fn test_kdf_pbkdf(op: &KdfPbkdf, result: Option<&Key>) {
    check(OperationOutcome::KdfPbkdf(op, result));
}

/// PBKDF1 entry point: produced key length must equal `key_size`.
pub fn test_kdf_pbkdf1(op: &KdfPbkdf1, result: Option<&Key>) {
    check(OperationOutcome::KdfPbkdf1(op, result));
}

/// PBKDF2 entry point: produced key length must equal `key_size`.
pub fn test_kdf_pbkdf2(op: &KdfPbkdf2, result: Option<&Key>) {
    check(OperationOutcome::KdfPbkdf2(op, result));
}

/// Argon2 entry point: produced key length must equal `key_size`.
pub fn test_kdf_argon2(op: &KdfArgon2, result: Option<&Key>) {
    check(OperationOutcome::KdfArgon2(op, result));
}

/// SSH KDF entry point: produced key length must equal `key_size`.
pub fn test_kdf_ssh(op: &KdfSsh, result: Option<&Key>) {
    check(OperationOutcome::KdfSsh(op, result));
}

/// ANSI X9.63 KDF entry point: produced key length must equal `key_size`.
pub fn test_kdf_x963(op: &KdfX963, result: Option<&Key>) {
    check(OperationOutcome::KdfX963(op, result));
}

/// Signing entry point; no invariant yet.
pub fn test_sign(op: &Sign, result: Option<&Signature>) {
    check(OperationOutcome::Sign(op, result));
}

/// Signature verification entry point; no invariant yet.
pub fn test_verify(op: &Verify, result: Option<&bool>) {
    check(OperationOutcome::Verify(op, result));
}

/// EC public key derivation entry point; no invariant yet.
pub fn test_ecc_private_to_public(op: &EccPrivateToPublic, result: Option<&EccPublicKey>) {
    check(OperationOutcome::EccPrivateToPublic(op, result));
}

/// EC key generation entry point; no invariant yet.
pub fn test_ecc_generate_key_pair(op: &EccGenerateKeyPair, result: Option<&EccKeyPair>) {
    check(OperationOutcome::EccGenerateKeyPair(op, result));
}

/// ECDSA signing entry point; no invariant yet.
pub fn test_ecdsa_sign(op: &EcdsaSign, result: Option<&EcdsaSignature>) {
    check(OperationOutcome::EcdsaSign(op, result));
}

/// ECDSA verification entry point; no invariant yet.
pub fn test_ecdsa_verify(op: &EcdsaVerify, result: Option<&bool>) {
    check(OperationOutcome::EcdsaVerify(op, result));
}

/// ECDH entry point; no invariant yet.
pub fn test_ecdh_derive(op: &EcdhDerive, result: Option<&Secret>) {
    check(OperationOutcome::EcdhDerive(op, result));
}

/// Bignum arithmetic entry point; no invariant yet.
pub fn test_bignum_calc(op: &BignumCalc, result: Option<&Bignum>) {
    check(OperationOutcome::BignumCalc(op, result));
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use xcheck_types::{Buffer, CipherType, DigestType, OperationKind, SymmetricCipher};

    fn hkdf(key_size: usize) -> KdfHkdf {
        KdfHkdf {
            digest_type: DigestType::Sha256,
            password: Buffer::from(&b"ikm"[..]),
            salt: Buffer::default(),
            info: Buffer::default(),
            key_size,
        }
    }

    fn chacha_encrypt(iv_len: usize) -> SymmetricEncrypt {
        SymmetricEncrypt {
            cipher: SymmetricCipher {
                cipher_type: CipherType::ChaCha20Poly1305,
                key: Buffer::zeroed(32),
                iv: Buffer::zeroed(iv_len),
            },
            cleartext: Buffer::default(),
            aad: None,
            ciphertext_size: 16,
            tag_size: Some(16),
        }
    }

    #[test]
    fn test_evaluate_routes_kdf_to_key_size() {
        let op = hkdf(42);
        let key = Buffer::zeroed(41);
        let err = evaluate(OperationOutcome::KdfHkdf(&op, Some(&key))).unwrap_err();
        assert_eq!(err.diagnostics(), ["KDF_HKDF", "invalid keySize"]);
    }

    #[test]
    fn test_evaluate_routes_encrypt_to_regression() {
        let op = chacha_encrypt(16);
        let ct = Ciphertext::new(Buffer::default(), Some(Buffer::zeroed(16)));
        let err = evaluate(OperationOutcome::SymmetricEncrypt(&op, Some(&ct))).unwrap_err();
        assert!(matches!(err, InvariantViolation::ChaCha20Poly1305IvTooLong { iv_len: 16, .. }));
    }

    #[test]
    fn test_check_with_disabled_kind_skips_violation() {
        let op = hkdf(32);
        let key = Buffer::zeroed(1);
        let config = InvariantConfig::default().without(OperationKind::KdfHkdf);
        // Would abort if the kind were active.
        check_with(&config, OperationOutcome::KdfHkdf(&op, Some(&key)));
    }

    #[test]
    fn test_check_with_all_disabled_skips_violation() {
        let op = chacha_encrypt(24);
        let ct = Ciphertext::new(Buffer::default(), None);
        check_with(&InvariantConfig::disabled(), OperationOutcome::SymmetricEncrypt(&op, Some(&ct)));
    }

    #[test]
    fn test_entry_points_pass_valid_results() {
        let op = hkdf(32);
        let key = Buffer::zeroed(32);
        test_kdf_hkdf(&op, Some(&key));
        test_kdf_hkdf(&op, None);

        let enc = chacha_encrypt(12);
        let ct = Ciphertext::new(Buffer::default(), Some(Buffer::zeroed(16)));
        test_symmetric_encrypt(&enc, Some(&ct));
    }
}
