#![deny(unsafe_code)]
#![no_main]

//! Fuzz testing for ChaCha20-Poly1305 encryption
//!
//! Encrypts arbitrary cleartext under arbitrary IVs. The backend only accepts
//! 12-byte nonces; the IV length check aborts if any other IV ever yields a
//! ciphertext.

use arbitrary::Arbitrary;
use chacha20poly1305::{
    ChaCha20Poly1305, Nonce,
    aead::{Aead, KeyInit, Payload},
};
use libfuzzer_sys::fuzz_target;
use xcheck_invariants::dispatch::test_symmetric_encrypt;
use xcheck_invariants::logging::{TracingConfig, init_tracing};
use xcheck_types::operation::SymmetricEncrypt;
use xcheck_types::{Buffer, CipherType, Ciphertext, SymmetricCipher};

const TAG_LEN: usize = 16;
const NONCE_LEN: usize = 12;

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    key: [u8; 32],
    iv: Vec<u8>,
    cleartext: Vec<u8>,
    aad: Option<Vec<u8>>,
}

fn encrypt(op: &SymmetricEncrypt) -> Option<Ciphertext> {
    if op.cipher.iv.len() != NONCE_LEN {
        return None;
    }
    let key: [u8; 32] = op.cipher.key.as_bytes().try_into().ok()?;
    let cipher = ChaCha20Poly1305::new(&key.into());
    let payload = Payload {
        msg: op.cleartext.as_bytes(),
        aad: op.aad.as_ref().map_or(&[][..], Buffer::as_bytes),
    };
    let mut sealed = cipher.encrypt(Nonce::from_slice(op.cipher.iv.as_bytes()), payload).ok()?;

    let tag = sealed.split_off(sealed.len().checked_sub(TAG_LEN)?);
    Some(Ciphertext::new(Buffer::new(sealed), Some(Buffer::new(tag))))
}

fuzz_target!(
    init: {
        init_tracing(&TracingConfig::default());
    },
    |input: FuzzInput| {
        let (Ok(cleartext_len), Ok(tag_size)) =
            (u64::try_from(input.cleartext.len()), u64::try_from(TAG_LEN))
        else {
            return;
        };
        let op = SymmetricEncrypt {
            cipher: SymmetricCipher {
                cipher_type: CipherType::ChaCha20Poly1305,
                key: Buffer::from(&input.key[..]),
                iv: Buffer::new(input.iv),
            },
            cleartext: Buffer::new(input.cleartext),
            aad: input.aad.map(Buffer::new),
            ciphertext_size: cleartext_len.saturating_add(tag_size),
            tag_size: Some(tag_size),
        };

        let ciphertext = encrypt(&op);
        test_symmetric_encrypt(&op, ciphertext.as_ref());
    }
);
