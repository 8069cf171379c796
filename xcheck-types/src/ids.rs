#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Algorithm identifiers carried by operation descriptors.
//!
//! Names are the canonical upper-case identifiers used in diagnostics and in
//! serialized corpora, e.g. `CHACHA20_POLY1305` or `SHA256`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TypeError;

/// Symmetric cipher identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum CipherType {
    /// AES-128 in ECB mode.
    Aes128Ecb,
    /// AES-128 in CBC mode.
    Aes128Cbc,
    /// AES-128 in CTR mode.
    Aes128Ctr,
    /// AES-128-GCM.
    Aes128Gcm,
    /// AES-128-CCM.
    Aes128Ccm,
    /// AES-192-GCM.
    Aes192Gcm,
    /// AES-256 in CBC mode.
    Aes256Cbc,
    /// AES-256 in CTR mode.
    Aes256Ctr,
    /// AES-256-GCM.
    Aes256Gcm,
    /// AES-256-CCM.
    Aes256Ccm,
    /// Raw ChaCha20 stream cipher.
    ChaCha20,
    /// ChaCha20-Poly1305 AEAD (RFC 8439).
    ChaCha20Poly1305,
    /// XChaCha20-Poly1305 AEAD (extended 24-byte nonce).
    XChaCha20Poly1305,
    /// Triple DES in CBC mode.
    DesEde3Cbc,
}

impl CipherType {
    /// Every known cipher identifier.
    pub const ALL: [CipherType; 14] = [
        Self::Aes128Ecb,
        Self::Aes128Cbc,
        Self::Aes128Ctr,
        Self::Aes128Gcm,
        Self::Aes128Ccm,
        Self::Aes192Gcm,
        Self::Aes256Cbc,
        Self::Aes256Ctr,
        Self::Aes256Gcm,
        Self::Aes256Ccm,
        Self::ChaCha20,
        Self::ChaCha20Poly1305,
        Self::XChaCha20Poly1305,
        Self::DesEde3Cbc,
    ];

    /// Canonical identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Aes128Ecb => "AES_128_ECB",
            Self::Aes128Cbc => "AES_128_CBC",
            Self::Aes128Ctr => "AES_128_CTR",
            Self::Aes128Gcm => "AES_128_GCM",
            Self::Aes128Ccm => "AES_128_CCM",
            Self::Aes192Gcm => "AES_192_GCM",
            Self::Aes256Cbc => "AES_256_CBC",
            Self::Aes256Ctr => "AES_256_CTR",
            Self::Aes256Gcm => "AES_256_GCM",
            Self::Aes256Ccm => "AES_256_CCM",
            Self::ChaCha20 => "CHACHA20",
            Self::ChaCha20Poly1305 => "CHACHA20_POLY1305",
            Self::XChaCha20Poly1305 => "XCHACHA20_POLY1305",
            Self::DesEde3Cbc => "DES_EDE3_CBC",
        }
    }

    /// Returns `true` for authenticated constructions.
    #[must_use]
    pub const fn is_aead(&self) -> bool {
        matches!(
            self,
            Self::Aes128Gcm
                | Self::Aes128Ccm
                | Self::Aes192Gcm
                | Self::Aes256Gcm
                | Self::Aes256Ccm
                | Self::ChaCha20Poly1305
                | Self::XChaCha20Poly1305
        )
    }
}

impl fmt::Display for CipherType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CipherType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TypeError::UnknownIdentifier { kind: "cipher", name: s.to_string() })
    }
}

/// Message digest identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum DigestType {
    /// MD5.
    Md5,
    /// SHA-1.
    Sha1,
    /// SHA-224.
    Sha224,
    /// SHA-256.
    Sha256,
    /// SHA-384.
    Sha384,
    /// SHA-512.
    Sha512,
    /// SHA3-256.
    Sha3_256,
    /// SHA3-512.
    Sha3_512,
    /// BLAKE2b-512.
    Blake2b512,
    /// RIPEMD-160.
    Ripemd160,
}

impl DigestType {
    /// Every known digest identifier.
    pub const ALL: [DigestType; 10] = [
        Self::Md5,
        Self::Sha1,
        Self::Sha224,
        Self::Sha256,
        Self::Sha384,
        Self::Sha512,
        Self::Sha3_256,
        Self::Sha3_512,
        Self::Blake2b512,
        Self::Ripemd160,
    ];

    /// Canonical identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Md5 => "MD5",
            Self::Sha1 => "SHA1",
            Self::Sha224 => "SHA224",
            Self::Sha256 => "SHA256",
            Self::Sha384 => "SHA384",
            Self::Sha512 => "SHA512",
            Self::Sha3_256 => "SHA3-256",
            Self::Sha3_512 => "SHA3-512",
            Self::Blake2b512 => "BLAKE2B512",
            Self::Ripemd160 => "RIPEMD160",
        }
    }

    /// Digest output length in bytes.
    #[must_use]
    pub const fn output_len(&self) -> usize {
        match self {
            Self::Md5 => 16,
            Self::Sha1 | Self::Ripemd160 => 20,
            Self::Sha224 => 28,
            Self::Sha256 | Self::Sha3_256 => 32,
            Self::Sha384 => 48,
            Self::Sha512 | Self::Sha3_512 | Self::Blake2b512 => 64,
        }
    }
}

impl fmt::Display for DigestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DigestType {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| TypeError::UnknownIdentifier { kind: "digest", name: s.to_string() })
    }
}

/// Elliptic curve identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum CurveType {
    /// secp256k1.
    Secp256k1,
    /// NIST P-256.
    Secp256r1,
    /// NIST P-384.
    Secp384r1,
    /// NIST P-521.
    Secp521r1,
    /// Curve25519 for key agreement.
    X25519,
    /// Edwards25519 for signatures.
    Ed25519,
}

impl CurveType {
    /// Canonical identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Secp256k1 => "secp256k1",
            Self::Secp256r1 => "secp256r1",
            Self::Secp384r1 => "secp384r1",
            Self::Secp521r1 => "secp521r1",
            Self::X25519 => "x25519",
            Self::Ed25519 => "ed25519",
        }
    }
}

impl fmt::Display for CurveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bignum calculation selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum CalcOp {
    /// `bn0 + bn1`.
    Add,
    /// `bn0 - bn1`.
    Sub,
    /// `bn0 * bn1`.
    Mul,
    /// `bn0 / bn1`.
    Div,
    /// `bn0 mod bn1`.
    Mod,
    /// `bn0 ^ bn1 mod bn2`.
    ExpMod,
    /// `bn0 * bn0`.
    Sqr,
    /// `gcd(bn0, bn1)`.
    Gcd,
    /// `bn0 ^ -1 mod bn1`.
    InvMod,
    /// Three-way comparison of `bn0` and `bn1`.
    Cmp,
    /// `|bn0|`.
    Abs,
    /// `-bn0`.
    Neg,
}

/// Argon2 variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub enum ArgonType {
    /// Data-dependent memory access.
    Argon2d,
    /// Data-independent memory access.
    Argon2i,
    /// Hybrid of the two.
    Argon2id,
}
