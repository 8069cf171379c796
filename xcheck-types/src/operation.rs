#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Operation descriptors.
//!
//! A descriptor is the immutable request handed to every backend. Each
//! descriptor type is bound to its [`OperationKind`] and to the shape of the
//! result a backend may produce for it via the [`Operation`] trait.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::component::{
    Bignum, Buffer, Ciphertext, Cleartext, Digest as DigestOutput, EccKeyPair, EccPublicKey,
    EcdsaSignature, Key, Mac, Secret, Signature,
};
use crate::error::TypeError;
use crate::ids::{ArgonType, CalcOp, CipherType, CurveType, DigestType};

/// Closed set of operation kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum OperationKind {
    /// Message digest.
    Digest,
    /// HMAC.
    Hmac,
    /// Symmetric encryption.
    SymmetricEncrypt,
    /// Symmetric decryption.
    SymmetricDecrypt,
    /// CMAC.
    Cmac,
    /// scrypt.
    KdfScrypt,
    /// HKDF.
    KdfHkdf,
    /// TLS 1.x PRF.
    KdfTls1Prf,
    /// PKCS#12 PBKDF.
    KdfPbkdf,
    /// PBKDF1.
    KdfPbkdf1,
    /// PBKDF2.
    KdfPbkdf2,
    /// Argon2.
    KdfArgon2,
    /// SSH KDF.
    KdfSsh,
    /// ANSI X9.63 KDF.
    KdfX963,
    /// Generic signing.
    Sign,
    /// Generic verification.
    Verify,
    /// EC public key derivation.
    EccPrivateToPublic,
    /// EC key generation.
    EccGenerateKeyPair,
    /// ECDSA signing.
    EcdsaSign,
    /// ECDSA verification.
    EcdsaVerify,
    /// ECDH key agreement.
    EcdhDerive,
    /// Bignum arithmetic.
    BignumCalc,
}

impl OperationKind {
    /// Every operation kind, in declaration order.
    pub const ALL: [OperationKind; 22] = [
        Self::Digest,
        Self::Hmac,
        Self::SymmetricEncrypt,
        Self::SymmetricDecrypt,
        Self::Cmac,
        Self::KdfScrypt,
        Self::KdfHkdf,
        Self::KdfTls1Prf,
        Self::KdfPbkdf,
        Self::KdfPbkdf1,
        Self::KdfPbkdf2,
        Self::KdfArgon2,
        Self::KdfSsh,
        Self::KdfX963,
        Self::Sign,
        Self::Verify,
        Self::EccPrivateToPublic,
        Self::EccGenerateKeyPair,
        Self::EcdsaSign,
        Self::EcdsaVerify,
        Self::EcdhDerive,
        Self::BignumCalc,
    ];

    /// Name used in diagnostics and configuration.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Digest => "Digest",
            Self::Hmac => "HMAC",
            Self::SymmetricEncrypt => "SymmetricEncrypt",
            Self::SymmetricDecrypt => "SymmetricDecrypt",
            Self::Cmac => "CMAC",
            Self::KdfScrypt => "KDF_SCRYPT",
            Self::KdfHkdf => "KDF_HKDF",
            Self::KdfTls1Prf => "KDF_TLS1_PRF",
            Self::KdfPbkdf => "KDF_PBKDF",
            Self::KdfPbkdf1 => "KDF_PBKDF1",
            Self::KdfPbkdf2 => "KDF_PBKDF2",
            Self::KdfArgon2 => "KDF_ARGON2",
            Self::KdfSsh => "KDF_SSH",
            Self::KdfX963 => "KDF_X963",
            Self::Sign => "Sign",
            Self::Verify => "Verify",
            Self::EccPrivateToPublic => "ECC_PrivateToPublic",
            Self::EccGenerateKeyPair => "ECC_GenerateKeyPair",
            Self::EcdsaSign => "ECDSA_Sign",
            Self::EcdsaVerify => "ECDSA_Verify",
            Self::EcdhDerive => "ECDH_Derive",
            Self::BignumCalc => "BignumCalc",
        }
    }

    /// Returns `true` for the key-derivation family.
    #[must_use]
    pub const fn is_kdf(&self) -> bool {
        matches!(
            self,
            Self::KdfScrypt
                | Self::KdfHkdf
                | Self::KdfTls1Prf
                | Self::KdfPbkdf
                | Self::KdfPbkdf1
                | Self::KdfPbkdf2
                | Self::KdfArgon2
                | Self::KdfSsh
                | Self::KdfX963
        )
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OperationKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| TypeError::UnknownOperationKind(s.to_string()))
    }
}

/// Binds a descriptor type to its kind and result shape.
pub trait Operation {
    /// Kind tag of this descriptor.
    const KIND: OperationKind;

    /// What a backend returns when it completes the operation.
    type Output;

    /// Diagnostic name of the operation.
    fn name(&self) -> &'static str {
        Self::KIND.name()
    }
}

/// Descriptors that ask the backend for a key of a given size.
pub trait KeySizeRequest {
    /// Requested output length in bytes.
    fn key_size(&self) -> usize;
}

/// Cipher selection with key and IV, shared by cipher and MAC operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct SymmetricCipher {
    /// Cipher and mode.
    pub cipher_type: CipherType,
    /// Raw key bytes.
    pub key: Buffer,
    /// IV or nonce; may be empty.
    pub iv: Buffer,
}

/// Hash a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Digest {
    /// Hash function.
    pub digest_type: DigestType,
    /// Input message.
    pub cleartext: Buffer,
}

/// Keyed-hash MAC over a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Hmac {
    /// Hash function.
    pub digest_type: DigestType,
    /// Input message.
    pub cleartext: Buffer,
    /// Secret key.
    pub key: Buffer,
}

/// Encrypt under a symmetric cipher, optionally with AAD and a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct SymmetricEncrypt {
    /// Cipher, key and IV.
    pub cipher: SymmetricCipher,
    /// Input message.
    pub cleartext: Buffer,
    /// Additional authenticated data for AEAD ciphers.
    pub aad: Option<Buffer>,
    /// Output buffer capacity offered to the backend.
    pub ciphertext_size: u64,
    /// Requested tag length for AEAD ciphers.
    pub tag_size: Option<u64>,
}

/// Decrypt under a symmetric cipher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct SymmetricDecrypt {
    /// Cipher, key and IV.
    pub cipher: SymmetricCipher,
    /// Bytes to decrypt.
    pub ciphertext: Buffer,
    /// Detached tag for AEAD ciphers.
    pub tag: Option<Buffer>,
    /// Additional authenticated data for AEAD ciphers.
    pub aad: Option<Buffer>,
    /// Output buffer capacity offered to the backend.
    pub cleartext_size: u64,
}

/// Cipher-based MAC over a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Cmac {
    /// Cipher, key and IV.
    pub cipher: SymmetricCipher,
    /// Input message.
    pub cleartext: Buffer,
}

/// scrypt key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfScrypt {
    /// Password or input keying material.
    pub password: Buffer,
    /// Salt.
    pub salt: Buffer,
    /// CPU/memory cost.
    pub n: u64,
    /// Block size.
    pub r: u64,
    /// Parallelism.
    pub p: u64,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// HKDF (RFC 5869) extract-and-expand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfHkdf {
    /// Hash function.
    pub digest_type: DigestType,
    /// Password or input keying material.
    pub password: Buffer,
    /// Salt.
    pub salt: Buffer,
    /// Context information.
    pub info: Buffer,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// TLS 1.0/1.1/1.2 PRF.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfTls1Prf {
    /// Hash function.
    pub digest_type: DigestType,
    /// Shared secret.
    pub secret: Buffer,
    /// PRF seed.
    pub seed: Buffer,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// PKCS#12 password-based key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfPbkdf {
    /// Hash function.
    pub digest_type: DigestType,
    /// Password or input keying material.
    pub password: Buffer,
    /// Salt.
    pub salt: Buffer,
    /// Iteration count.
    pub iterations: u32,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// PBKDF1 (RFC 8018).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfPbkdf1 {
    /// Hash function.
    pub digest_type: DigestType,
    /// Password or input keying material.
    pub password: Buffer,
    /// Salt.
    pub salt: Buffer,
    /// Iteration count.
    pub iterations: u32,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// PBKDF2 (RFC 8018).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfPbkdf2 {
    /// Hash function.
    pub digest_type: DigestType,
    /// Password or input keying material.
    pub password: Buffer,
    /// Salt.
    pub salt: Buffer,
    /// Iteration count.
    pub iterations: u32,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// Argon2 password hashing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfArgon2 {
    /// Argon2 variant.
    pub argon_type: ArgonType,
    /// Password or input keying material.
    pub password: Buffer,
    /// Salt.
    pub salt: Buffer,
    /// Degree of parallelism.
    pub threads: u8,
    /// Memory cost in KiB.
    pub memory: u32,
    /// Iteration count.
    pub iterations: u32,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// SSH key derivation (RFC 4253, section 7.2).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfSsh {
    /// Hash function.
    pub digest_type: DigestType,
    /// Secret key.
    pub key: Buffer,
    /// Exchange hash `H`.
    pub xcghash: Buffer,
    /// Session identifier.
    pub session_id: Buffer,
    /// Single-byte key letter ('A'..='F') selecting the derived key.
    pub key_letter: u8,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// ANSI X9.63 key derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct KdfX963 {
    /// Hash function.
    pub digest_type: DigestType,
    /// Shared secret.
    pub secret: Buffer,
    /// Context information.
    pub info: Buffer,
    /// Requested output length in bytes.
    pub key_size: usize,
}

/// Sign a message with a serialized private key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Sign {
    /// Hash function.
    pub digest_type: DigestType,
    /// Input message.
    pub cleartext: Buffer,
    /// PEM or DER private key understood by the backend.
    pub private_key: Buffer,
}

/// Verify a signature with a serialized public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Verify {
    /// Hash function.
    pub digest_type: DigestType,
    /// Input message.
    pub cleartext: Buffer,
    /// Serialized public key.
    pub public_key: Buffer,
    /// Signature to check.
    pub signature: Buffer,
}

/// Derive the public point for a private scalar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EccPrivateToPublic {
    /// Curve.
    pub curve: CurveType,
    /// Private scalar.
    pub private_key: Bignum,
}

/// Generate a fresh EC key pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EccGenerateKeyPair {
    /// Curve.
    pub curve: CurveType,
}

/// ECDSA signature over a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EcdsaSign {
    /// Curve.
    pub curve: CurveType,
    /// Private scalar.
    pub private_key: Bignum,
    /// Input message.
    pub cleartext: Buffer,
}

/// ECDSA signature verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EcdsaVerify {
    /// Curve.
    pub curve: CurveType,
    /// Public key.
    pub public_key: EccPublicKey,
    /// Input message.
    pub cleartext: Buffer,
    /// Signature to check.
    pub signature: EcdsaSignature,
}

/// ECDH shared secret between two public points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EcdhDerive {
    /// Curve.
    pub curve: CurveType,
    /// First public point.
    pub public_key1: EccPublicKey,
    /// Second public point.
    pub public_key2: EccPublicKey,
}

/// Arbitrary-precision arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct BignumCalc {
    /// Operation to perform.
    pub calc_op: CalcOp,
    /// First operand.
    pub bn0: Bignum,
    /// Second operand.
    pub bn1: Bignum,
    /// Third operand (modulus for `ExpMod`).
    pub bn2: Bignum,
    /// Fourth operand.
    pub bn3: Bignum,
}

macro_rules! impl_operation {
    ($($ty:ident => $kind:ident, $output:ty;)+) => {
        $(
            impl Operation for $ty {
                const KIND: OperationKind = OperationKind::$kind;
                type Output = $output;
            }
        )+
    };
}

impl_operation! {
    Digest => Digest, DigestOutput;
    Hmac => Hmac, Mac;
    SymmetricEncrypt => SymmetricEncrypt, Ciphertext;
    SymmetricDecrypt => SymmetricDecrypt, Cleartext;
    Cmac => Cmac, Mac;
    KdfScrypt => KdfScrypt, Key;
    KdfHkdf => KdfHkdf, Key;
    KdfTls1Prf => KdfTls1Prf, Key;
    KdfPbkdf => KdfPbkdf, Key;
    KdfPbkdf1 => KdfPbkdf1, Key;
    KdfPbkdf2 => KdfPbkdf2, Key;
    KdfArgon2 => KdfArgon2, Key;
    KdfSsh => KdfSsh, Key;
    KdfX963 => KdfX963, Key;
    Sign => Sign, Signature;
    Verify => Verify, bool;
    EccPrivateToPublic => EccPrivateToPublic, EccPublicKey;
    EccGenerateKeyPair => EccGenerateKeyPair, EccKeyPair;
    EcdsaSign => EcdsaSign, EcdsaSignature;
    EcdsaVerify => EcdsaVerify, bool;
    EcdhDerive => EcdhDerive, Secret;
    BignumCalc => BignumCalc, Bignum;
}

macro_rules! impl_key_size_request {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl KeySizeRequest for $ty {
                fn key_size(&self) -> usize {
                    self.key_size
                }
            }
        )+
    };
}

impl_key_size_request!(
    KdfScrypt, KdfHkdf, KdfTls1Prf, KdfPbkdf, KdfPbkdf1, KdfPbkdf2, KdfArgon2, KdfSsh, KdfX963,
);
