#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for HKDF output length
//!
//! Takes whole `KdfHkdf` descriptors from the fuzzer, derives with the
//! RustCrypto HKDF backend, and hands every result, or the refusal, to the
//! key size check.

use hkdf::Hkdf;
use libfuzzer_sys::fuzz_target;
use sha2::{Sha256, Sha512};
use xcheck_invariants::dispatch::test_kdf_hkdf;
use xcheck_invariants::logging::{TracingConfig, init_tracing};
use xcheck_types::operation::KdfHkdf;
use xcheck_types::{Buffer, DigestType, Key};

/// HKDF output is capped at 255 blocks of the hash length.
const MAX_BLOCKS: usize = 255;

fn derive(op: &KdfHkdf) -> Option<Key> {
    if !matches!(op.digest_type, DigestType::Sha256 | DigestType::Sha512) {
        return None;
    }
    // Declined before allocating; the backend would refuse anyway.
    if op.key_size > MAX_BLOCKS.checked_mul(op.digest_type.output_len())? {
        return None;
    }

    let salt = Some(op.salt.as_bytes());
    let ikm = op.password.as_bytes();
    let mut okm = vec![0u8; op.key_size];
    let expanded = match op.digest_type {
        DigestType::Sha512 => Hkdf::<Sha512>::new(salt, ikm).expand(op.info.as_bytes(), &mut okm),
        _ => Hkdf::<Sha256>::new(salt, ikm).expand(op.info.as_bytes(), &mut okm),
    };
    expanded.ok()?;
    Some(Buffer::new(okm))
}

fuzz_target!(
    init: {
        init_tracing(&TracingConfig::default());
    },
    |op: KdfHkdf| {
        let key = derive(&op);
        test_kdf_hkdf(&op, key.as_ref());
    }
);
