#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

//! Components: the byte strings and structured values that make up operation
//! inputs and backend results.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Anything whose size in bytes can be queried.
///
/// Implemented by every key-shaped result so length invariants can be written
/// once over all of them.
pub trait ByteLength {
    /// Length in bytes.
    fn byte_len(&self) -> usize;
}

/// Owned byte string.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(transparent)]
pub struct Buffer(Vec<u8>);

impl Buffer {
    /// Wraps the given bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Buffer of `len` zero bytes.
    #[must_use]
    pub fn zeroed(len: usize) -> Self {
        Self(vec![0u8; len])
    }

    /// Borrowed view of the bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the buffer holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Consumes the buffer, returning the bytes.
    #[must_use]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl ByteLength for Buffer {
    fn byte_len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Buffer({})", hex::encode(&self.0))
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl From<&[u8]> for Buffer {
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl AsRef<[u8]> for Buffer {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Derived or generated key material.
pub type Key = Buffer;
/// Decrypted plaintext.
pub type Cleartext = Buffer;
/// HMAC or CMAC output.
pub type Mac = Buffer;
/// Message digest output.
pub type Digest = Buffer;
/// Generic (non-ECDSA) signature.
pub type Signature = Buffer;
/// Shared secret from key agreement.
pub type Secret = Buffer;

/// Symmetric encryption output with an optional detached tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct Ciphertext {
    /// Encrypted bytes, including an appended tag for non-detached modes.
    pub ciphertext: Buffer,
    /// Detached authentication tag.
    pub tag: Option<Buffer>,
}

impl Ciphertext {
    /// Pairs ciphertext with an optional tag.
    #[must_use]
    pub fn new(ciphertext: Buffer, tag: Option<Buffer>) -> Self {
        Self { ciphertext, tag }
    }
}

/// Arbitrary-precision integer in decimal notation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
#[serde(transparent)]
pub struct Bignum(pub String);

impl Bignum {
    /// Wraps a decimal string as-is; no validation.
    #[must_use]
    pub fn new(decimal: impl Into<String>) -> Self {
        Self(decimal.into())
    }

    /// The decimal digits.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Bignum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Affine EC public key coordinates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EccPublicKey {
    /// Affine x coordinate.
    pub x: Bignum,
    /// Affine y coordinate.
    pub y: Bignum,
}

/// EC private scalar with its public point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EccKeyPair {
    /// Private scalar.
    pub private_key: Bignum,
    /// Matching public point.
    pub public_key: EccPublicKey,
}

/// ECDSA `(r, s)` pair.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "arbitrary", derive(arbitrary::Arbitrary))]
pub struct EcdsaSignature {
    /// `r` component.
    pub r: Bignum,
    /// `s` component.
    pub s: Bignum,
}
