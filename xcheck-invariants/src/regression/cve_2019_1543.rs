//! CVE-2019-1543: ChaCha20-Poly1305 with long nonces
//!
//! Advisory: <https://www.openssl.org/news/secadv/20190306.txt>
//!
//! OpenSSL accepted ChaCha20-Poly1305 IVs of up to 16 bytes although the
//! construction (RFC 8439) is only defined for 12. Only the last 12 bytes were
//! used, so callers that treated the extra leading bytes as unique got nonce
//! reuse. A conformant backend refuses to encrypt with such an IV; producing a
//! ciphertext for one reproduces the defect.
//!
//! XChaCha20-Poly1305 legitimately takes 24-byte nonces and is not covered.

use xcheck_types::operation::SymmetricEncrypt;
use xcheck_types::{CipherType, Ciphertext, Operation};

use crate::violation::InvariantViolation;

/// Longest IV a ChaCha20-Poly1305 encryption may accept.
pub const CHACHA20_POLY1305_MAX_IV_LEN: usize = 12;

/// Checks that ChaCha20-Poly1305 encryption did not succeed with an over-long IV.
///
/// # Errors
/// Returns [`InvariantViolation::ChaCha20Poly1305IvTooLong`] if the cipher is
/// ChaCha20-Poly1305, a ciphertext was produced, and the IV exceeds
/// [`CHACHA20_POLY1305_MAX_IV_LEN`].
pub fn chacha20_poly1305_iv_violation(
    op: &SymmetricEncrypt,
    result: Option<&Ciphertext>,
) -> Result<(), InvariantViolation> {
    if op.cipher.cipher_type != CipherType::ChaCha20Poly1305 {
        return Ok(());
    }

    if result.is_none() {
        return Ok(());
    }

    let iv_len = op.cipher.iv.len();
    if iv_len > CHACHA20_POLY1305_MAX_IV_LEN {
        return Err(InvariantViolation::ChaCha20Poly1305IvTooLong { operation: op.name(), iv_len });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use xcheck_types::{Buffer, SymmetricCipher};

    fn encrypt(cipher_type: CipherType, iv_len: usize) -> SymmetricEncrypt {
        SymmetricEncrypt {
            cipher: SymmetricCipher {
                cipher_type,
                key: Buffer::zeroed(32),
                iv: Buffer::zeroed(iv_len),
            },
            cleartext: Buffer::from(&b"attack at dawn"[..]),
            aad: None,
            ciphertext_size: 64,
            tag_size: Some(16),
        }
    }

    fn ciphertext() -> Ciphertext {
        Ciphertext::new(Buffer::zeroed(14), Some(Buffer::zeroed(16)))
    }

    #[test]
    fn test_short_iv_passes() {
        let op = encrypt(CipherType::ChaCha20Poly1305, 8);
        assert!(chacha20_poly1305_iv_violation(&op, Some(&ciphertext())).is_ok());
    }

    #[test]
    fn test_boundary_iv_passes() {
        let op = encrypt(CipherType::ChaCha20Poly1305, 12);
        assert!(chacha20_poly1305_iv_violation(&op, Some(&ciphertext())).is_ok());
    }

    #[test]
    fn test_long_iv_with_result_is_violation() {
        let op = encrypt(CipherType::ChaCha20Poly1305, 16);
        match chacha20_poly1305_iv_violation(&op, Some(&ciphertext())) {
            Err(InvariantViolation::ChaCha20Poly1305IvTooLong { operation, iv_len }) => {
                assert_eq!(operation, "SymmetricEncrypt");
                assert_eq!(iv_len, 16);
            }
            other => panic!("Expected ChaCha20Poly1305IvTooLong, got {:?}", other),
        }
    }

    #[test]
    fn test_thirteen_byte_iv_is_violation() {
        let op = encrypt(CipherType::ChaCha20Poly1305, 13);
        assert!(chacha20_poly1305_iv_violation(&op, Some(&ciphertext())).is_err());
    }

    #[test]
    fn test_long_iv_without_result_passes() {
        let op = encrypt(CipherType::ChaCha20Poly1305, 16);
        assert!(chacha20_poly1305_iv_violation(&op, None).is_ok());
    }

    #[test]
    fn test_other_ciphers_ignored() {
        for cipher in CipherType::ALL {
            if cipher == CipherType::ChaCha20Poly1305 {
                continue;
            }
            let op = encrypt(cipher, 24);
            assert!(
                chacha20_poly1305_iv_violation(&op, Some(&ciphertext())).is_ok(),
                "{cipher} must not be checked"
            );
        }
    }
}
