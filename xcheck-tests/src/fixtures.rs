//! Sample descriptors and results for every operation kind.

use xcheck_invariants::dispatch;
use xcheck_types::operation::{
    BignumCalc, Cmac, Digest, EccGenerateKeyPair, EccPrivateToPublic, EcdhDerive, EcdsaSign,
    EcdsaVerify, Hmac, KdfArgon2, KdfHkdf, KdfPbkdf, KdfPbkdf1, KdfPbkdf2, KdfScrypt, KdfSsh,
    KdfTls1Prf, KdfX963, Sign, SymmetricDecrypt, SymmetricEncrypt, Verify,
};
use xcheck_types::{
    ArgonType, Bignum, Buffer, CalcOp, CipherType, Ciphertext, CurveType, DigestType, EccKeyPair,
    EccPublicKey, EcdsaSignature, Key, OperationKind, OperationOutcome, SymmetricCipher,
};

/// One descriptor of any KDF kind.
#[derive(Debug, Clone)]
pub enum KdfRequest {
    Scrypt(KdfScrypt),
    Hkdf(KdfHkdf),
    Tls1Prf(KdfTls1Prf),
    Pbkdf(KdfPbkdf),
    Pbkdf1(KdfPbkdf1),
    Pbkdf2(KdfPbkdf2),
    Argon2(KdfArgon2),
    Ssh(KdfSsh),
    X963(KdfX963),
}

/// The nine KDF kinds.
pub fn kdf_kinds() -> impl Iterator<Item = OperationKind> {
    OperationKind::ALL.into_iter().filter(OperationKind::is_kdf)
}

/// Kinds that currently carry no invariant.
pub fn no_op_kinds() -> impl Iterator<Item = OperationKind> {
    OperationKind::ALL
        .into_iter()
        .filter(|k| !k.is_kdf() && *k != OperationKind::SymmetricEncrypt)
}

fn bytes(s: &str) -> Buffer {
    Buffer::from(s.as_bytes())
}

impl KdfRequest {
    /// Descriptor of `kind` requesting `key_size` bytes; `None` for non-KDF kinds.
    #[must_use]
    pub fn new(kind: OperationKind, key_size: usize) -> Option<Self> {
        let request = match kind {
            OperationKind::KdfScrypt => Self::Scrypt(KdfScrypt {
                password: bytes("password"),
                salt: bytes("NaCl"),
                n: 1024,
                r: 8,
                p: 16,
                key_size,
            }),
            OperationKind::KdfHkdf => Self::Hkdf(KdfHkdf {
                digest_type: DigestType::Sha256,
                password: bytes("input key material"),
                salt: bytes("salt"),
                info: bytes("info"),
                key_size,
            }),
            OperationKind::KdfTls1Prf => Self::Tls1Prf(KdfTls1Prf {
                digest_type: DigestType::Sha256,
                secret: bytes("secret"),
                seed: bytes("seed"),
                key_size,
            }),
            OperationKind::KdfPbkdf => Self::Pbkdf(KdfPbkdf {
                digest_type: DigestType::Sha1,
                password: bytes("password"),
                salt: bytes("salt"),
                iterations: 2,
                key_size,
            }),
            OperationKind::KdfPbkdf1 => Self::Pbkdf1(KdfPbkdf1 {
                digest_type: DigestType::Sha1,
                password: bytes("password"),
                salt: bytes("saltsalt"),
                iterations: 2,
                key_size,
            }),
            OperationKind::KdfPbkdf2 => Self::Pbkdf2(KdfPbkdf2 {
                digest_type: DigestType::Sha256,
                password: bytes("password"),
                salt: bytes("salt"),
                iterations: 4096,
                key_size,
            }),
            OperationKind::KdfArgon2 => Self::Argon2(KdfArgon2 {
                argon_type: ArgonType::Argon2id,
                password: bytes("password"),
                salt: bytes("somesalt"),
                threads: 1,
                memory: 64,
                iterations: 2,
                key_size,
            }),
            OperationKind::KdfSsh => Self::Ssh(KdfSsh {
                digest_type: DigestType::Sha256,
                key: bytes("shared secret"),
                xcghash: Buffer::zeroed(32),
                session_id: Buffer::zeroed(32),
                key_letter: b'A',
                key_size,
            }),
            OperationKind::KdfX963 => Self::X963(KdfX963 {
                digest_type: DigestType::Sha256,
                secret: bytes("shared secret"),
                info: bytes("info"),
                key_size,
            }),
            _ => return None,
        };
        Some(request)
    }

    #[must_use]
    pub fn kind(&self) -> OperationKind {
        self.outcome(None).kind()
    }

    /// Pairs the descriptor with a produced key.
    #[must_use]
    pub fn outcome<'a>(&'a self, key: Option<&'a Key>) -> OperationOutcome<'a> {
        match self {
            Self::Scrypt(op) => OperationOutcome::KdfScrypt(op, key),
            Self::Hkdf(op) => OperationOutcome::KdfHkdf(op, key),
            Self::Tls1Prf(op) => OperationOutcome::KdfTls1Prf(op, key),
            Self::Pbkdf(op) => OperationOutcome::KdfPbkdf(op, key),
            Self::Pbkdf1(op) => OperationOutcome::KdfPbkdf1(op, key),
            Self::Pbkdf2(op) => OperationOutcome::KdfPbkdf2(op, key),
            Self::Argon2(op) => OperationOutcome::KdfArgon2(op, key),
            Self::Ssh(op) => OperationOutcome::KdfSsh(op, key),
            Self::X963(op) => OperationOutcome::KdfX963(op, key),
        }
    }

    /// Calls the kind's `dispatch::test_*` entry point.
    pub fn run_entry_point(&self, key: Option<&Key>) {
        match self {
            Self::Scrypt(op) => dispatch::test_kdf_scrypt(op, key),
            Self::Hkdf(op) => dispatch::test_kdf_hkdf(op, key),
            Self::Tls1Prf(op) => dispatch::test_kdf_tls1_prf(op, key),
            Self::Pbkdf(op) => dispatch::test_kdf_pbkdf(op, key),
            Self::Pbkdf1(op) => dispatch::test_kdf_pbkdf1(op, key),
            Self::Pbkdf2(op) => dispatch::test_kdf_pbkdf2(op, key),
            Self::Argon2(op) => dispatch::test_kdf_argon2(op, key),
            Self::Ssh(op) => dispatch::test_kdf_ssh(op, key),
            Self::X963(op) => dispatch::test_kdf_x963(op, key),
        }
    }
}

/// Symmetric encryption request with an all-zero key and an IV of `iv_len` bytes.
#[must_use]
pub fn symmetric_encrypt(cipher_type: CipherType, iv_len: usize) -> SymmetricEncrypt {
    SymmetricEncrypt {
        cipher: SymmetricCipher { cipher_type, key: Buffer::zeroed(32), iv: Buffer::zeroed(iv_len) },
        cleartext: bytes("Ladies and Gentlemen of the class of '99"),
        aad: Some(bytes("header")),
        ciphertext_size: 128,
        tag_size: Some(16),
    }
}

/// A plausible AEAD ciphertext.
#[must_use]
pub fn ciphertext() -> Ciphertext {
    Ciphertext::new(Buffer::zeroed(40), Some(Buffer::zeroed(16)))
}

fn cipher(cipher_type: CipherType) -> SymmetricCipher {
    SymmetricCipher { cipher_type, key: Buffer::zeroed(16), iv: Buffer::zeroed(16) }
}

fn point() -> EccPublicKey {
    EccPublicKey { x: Bignum::new("1"), y: Bignum::new("2") }
}

/// Calls every no-op entry point once, with sample results when `with_result`
/// is set and `None` otherwise. The sample results have wrong lengths and
/// degenerate values.
pub fn run_no_op_entry_points(with_result: bool) {
    let junk = Buffer::zeroed(3);
    let flag = false;
    let bn = Bignum::new("-0");
    let pubkey = point();
    let keypair = EccKeyPair { private_key: Bignum::new("0"), public_key: point() };
    let sig = EcdsaSignature { r: Bignum::new("0"), s: Bignum::new("0") };

    let some = |b| if with_result { Some(b) } else { None };

    dispatch::test_digest(
        &Digest { digest_type: DigestType::Sha256, cleartext: bytes("abc") },
        some(&junk),
    );
    dispatch::test_hmac(
        &Hmac { digest_type: DigestType::Sha512, cleartext: bytes("abc"), key: Buffer::default() },
        some(&junk),
    );
    dispatch::test_symmetric_decrypt(
        &SymmetricDecrypt {
            cipher: cipher(CipherType::ChaCha20Poly1305),
            ciphertext: Buffer::zeroed(16),
            tag: None,
            aad: None,
            cleartext_size: 0,
        },
        some(&junk),
    );
    dispatch::test_cmac(
        &Cmac { cipher: cipher(CipherType::Aes128Cbc), cleartext: bytes("abc") },
        some(&junk),
    );
    dispatch::test_sign(
        &Sign { digest_type: DigestType::Sha256, cleartext: bytes("m"), private_key: junk.clone() },
        some(&junk),
    );
    dispatch::test_verify(
        &Verify {
            digest_type: DigestType::Sha256,
            cleartext: bytes("m"),
            public_key: junk.clone(),
            signature: junk.clone(),
        },
        if with_result { Some(&flag) } else { None },
    );
    dispatch::test_ecc_private_to_public(
        &EccPrivateToPublic { curve: CurveType::Secp256k1, private_key: Bignum::new("0") },
        if with_result { Some(&pubkey) } else { None },
    );
    dispatch::test_ecc_generate_key_pair(
        &EccGenerateKeyPair { curve: CurveType::Secp384r1 },
        if with_result { Some(&keypair) } else { None },
    );
    dispatch::test_ecdsa_sign(
        &EcdsaSign {
            curve: CurveType::Secp256r1,
            private_key: Bignum::new("1"),
            cleartext: bytes("m"),
        },
        if with_result { Some(&sig) } else { None },
    );
    dispatch::test_ecdsa_verify(
        &EcdsaVerify {
            curve: CurveType::Secp256r1,
            public_key: point(),
            cleartext: bytes("m"),
            signature: sig.clone(),
        },
        if with_result { Some(&flag) } else { None },
    );
    dispatch::test_ecdh_derive(
        &EcdhDerive { curve: CurveType::X25519, public_key1: point(), public_key2: point() },
        some(&junk),
    );
    dispatch::test_bignum_calc(
        &BignumCalc {
            calc_op: CalcOp::ExpMod,
            bn0: Bignum::new("2"),
            bn1: Bignum::new("10"),
            bn2: Bignum::new("0"),
            bn3: Bignum::default(),
        },
        if with_result { Some(&bn) } else { None },
    );
}
