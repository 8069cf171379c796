#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Requested-versus-produced key length.
//!
//! A KDF must return exactly as many bytes as the caller asked for, whatever
//! the algorithm. One generic predicate covers every KDF kind.

use xcheck_types::{ByteLength, KeySizeRequest, Operation};

use crate::violation::InvariantViolation;

/// Checks that a produced key has the requested length.
///
/// The result type is the descriptor's [`Operation::Output`], so a key can
/// only be checked against the request that produced it. An absent result
/// never violates this invariant.
///
/// # Errors
/// Returns [`InvariantViolation::InvalidKeySize`] if a result is present and
/// its length differs from `op.key_size()`.
pub fn key_size_violation<Op>(
    op: &Op,
    result: Option<&Op::Output>,
) -> Result<(), InvariantViolation>
where
    Op: Operation + KeySizeRequest,
    Op::Output: ByteLength,
{
    let Some(key) = result else {
        return Ok(());
    };

    let requested = op.key_size();
    let actual = key.byte_len();
    if requested != actual {
        return Err(InvariantViolation::InvalidKeySize { operation: op.name(), requested, actual });
    }

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use xcheck_types::operation::{KdfPbkdf2, KdfScrypt};
    use xcheck_types::{Buffer, DigestType};

    fn pbkdf2(key_size: usize) -> KdfPbkdf2 {
        KdfPbkdf2 {
            digest_type: DigestType::Sha256,
            password: Buffer::from(&b"password"[..]),
            salt: Buffer::from(&b"salt"[..]),
            iterations: 1000,
            key_size,
        }
    }

    #[test]
    fn test_matching_length_passes() {
        let op = pbkdf2(32);
        let key = Buffer::zeroed(32);
        assert!(key_size_violation(&op, Some(&key)).is_ok());
    }

    #[test]
    fn test_short_key_is_violation() {
        let op = pbkdf2(32);
        let key = Buffer::zeroed(16);
        match key_size_violation(&op, Some(&key)) {
            Err(InvariantViolation::InvalidKeySize { operation, requested, actual }) => {
                assert_eq!(operation, "KDF_PBKDF2");
                assert_eq!(requested, 32);
                assert_eq!(actual, 16);
            }
            other => panic!("Expected InvalidKeySize, got {:?}", other),
        }
    }

    #[test]
    fn test_long_key_is_violation() {
        let op = pbkdf2(16);
        let key = Buffer::zeroed(17);
        assert!(key_size_violation(&op, Some(&key)).is_err());
    }

    #[test]
    fn test_absent_result_passes() {
        let op = pbkdf2(32);
        assert!(key_size_violation(&op, None).is_ok());
    }

    #[test]
    fn test_output_type_follows_descriptor() {
        fn check<Op>(op: &Op, key: &Op::Output) -> bool
        where
            Op: Operation + KeySizeRequest,
            Op::Output: ByteLength,
        {
            key_size_violation(op, Some(key)).is_ok()
        }

        let op = pbkdf2(24);
        let key: <KdfPbkdf2 as Operation>::Output = Buffer::zeroed(24);
        assert!(check(&op, &key));
        assert!(!check(&op, &Buffer::zeroed(23)));
    }

    #[test]
    fn test_zero_length_request() {
        let op = KdfScrypt {
            password: Buffer::default(),
            salt: Buffer::default(),
            n: 1024,
            r: 8,
            p: 1,
            key_size: 0,
        };
        assert!(key_size_violation(&op, Some(&Buffer::default())).is_ok());
        let err = key_size_violation(&op, Some(&Buffer::zeroed(1))).unwrap_err();
        assert_eq!(err.operation(), "KDF_SCRYPT");
    }

    proptest! {
        #[test]
        fn test_violation_iff_lengths_differ(requested in 0usize..128, actual in 0usize..128) {
            let op = pbkdf2(requested);
            let key = Buffer::zeroed(actual);
            prop_assert_eq!(key_size_violation(&op, Some(&key)).is_err(), requested != actual);
        }
    }
}
