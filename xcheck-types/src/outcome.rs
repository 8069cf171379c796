//! Descriptor/result pairs as one closed sum type.
//!
//! Each variant borrows the descriptor a backend was given and the result it
//! produced, `None` when the backend declined or failed. Consumers match on
//! this enum exhaustively, so adding a kind forces every consumer to handle it.

use crate::component::{
    Bignum, Ciphertext, Cleartext, Digest as DigestOutput, EccKeyPair, EccPublicKey,
    EcdsaSignature, Key, Mac, Secret, Signature,
};
use crate::operation::{
    BignumCalc, Cmac, Digest, EccGenerateKeyPair, EccPrivateToPublic, EcdhDerive, EcdsaSign,
    EcdsaVerify, Hmac, KdfArgon2, KdfHkdf, KdfPbkdf, KdfPbkdf1, KdfPbkdf2, KdfScrypt, KdfSsh,
    KdfTls1Prf, KdfX963, OperationKind, Sign, SymmetricDecrypt, SymmetricEncrypt, Verify,
};

/// A completed (or declined) operation.
#[derive(Debug, Clone, Copy)]
pub enum OperationOutcome<'a> {
    /// `Digest` with its `DigestOutput` result.
    Digest(&'a Digest, Option<&'a DigestOutput>),
    /// `Hmac` with its `Mac` result.
    Hmac(&'a Hmac, Option<&'a Mac>),
    /// `SymmetricEncrypt` with its `Ciphertext` result.
    SymmetricEncrypt(&'a SymmetricEncrypt, Option<&'a Ciphertext>),
    /// `SymmetricDecrypt` with its `Cleartext` result.
    SymmetricDecrypt(&'a SymmetricDecrypt, Option<&'a Cleartext>),
    /// `Cmac` with its `Mac` result.
    Cmac(&'a Cmac, Option<&'a Mac>),
    /// `KdfScrypt` with its `Key` result.
    KdfScrypt(&'a KdfScrypt, Option<&'a Key>),
    /// `KdfHkdf` with its `Key` result.
    KdfHkdf(&'a KdfHkdf, Option<&'a Key>),
    /// `KdfTls1Prf` with its `Key` result.
    KdfTls1Prf(&'a KdfTls1Prf, Option<&'a Key>),
    /// `KdfPbkdf` with its `Key` result.
    KdfPbkdf(&'a KdfPbkdf, Option<&'a Key>),
    /// `KdfPbkdf1` with its `Key` result.
    KdfPbkdf1(&'a KdfPbkdf1, Option<&'a Key>),
    /// `KdfPbkdf2` with its `Key` result.
    KdfPbkdf2(&'a KdfPbkdf2, Option<&'a Key>),
    /// `KdfArgon2` with its `Key` result.
    KdfArgon2(&'a KdfArgon2, Option<&'a Key>),
    /// `KdfSsh` with its `Key` result.
    KdfSsh(&'a KdfSsh, Option<&'a Key>),
    /// `KdfX963` with its `Key` result.
    KdfX963(&'a KdfX963, Option<&'a Key>),
    /// `Sign` with its `Signature` result.
    Sign(&'a Sign, Option<&'a Signature>),
    /// `Verify` with its `bool` result.
    Verify(&'a Verify, Option<&'a bool>),
    /// `EccPrivateToPublic` with its `EccPublicKey` result.
    EccPrivateToPublic(&'a EccPrivateToPublic, Option<&'a EccPublicKey>),
    /// `EccGenerateKeyPair` with its `EccKeyPair` result.
    EccGenerateKeyPair(&'a EccGenerateKeyPair, Option<&'a EccKeyPair>),
    /// `EcdsaSign` with its `EcdsaSignature` result.
    EcdsaSign(&'a EcdsaSign, Option<&'a EcdsaSignature>),
    /// `EcdsaVerify` with its `bool` result.
    EcdsaVerify(&'a EcdsaVerify, Option<&'a bool>),
    /// `EcdhDerive` with its `Secret` result.
    EcdhDerive(&'a EcdhDerive, Option<&'a Secret>),
    /// `BignumCalc` with its `Bignum` result.
    BignumCalc(&'a BignumCalc, Option<&'a Bignum>),
}

impl OperationOutcome<'_> {
    /// Kind tag of the wrapped descriptor.
    #[must_use]
    pub const fn kind(&self) -> OperationKind {
        match self {
            Self::Digest(..) => OperationKind::Digest,
            Self::Hmac(..) => OperationKind::Hmac,
            Self::SymmetricEncrypt(..) => OperationKind::SymmetricEncrypt,
            Self::SymmetricDecrypt(..) => OperationKind::SymmetricDecrypt,
            Self::Cmac(..) => OperationKind::Cmac,
            Self::KdfScrypt(..) => OperationKind::KdfScrypt,
            Self::KdfHkdf(..) => OperationKind::KdfHkdf,
            Self::KdfTls1Prf(..) => OperationKind::KdfTls1Prf,
            Self::KdfPbkdf(..) => OperationKind::KdfPbkdf,
            Self::KdfPbkdf1(..) => OperationKind::KdfPbkdf1,
            Self::KdfPbkdf2(..) => OperationKind::KdfPbkdf2,
            Self::KdfArgon2(..) => OperationKind::KdfArgon2,
            Self::KdfSsh(..) => OperationKind::KdfSsh,
            Self::KdfX963(..) => OperationKind::KdfX963,
            Self::Sign(..) => OperationKind::Sign,
            Self::Verify(..) => OperationKind::Verify,
            Self::EccPrivateToPublic(..) => OperationKind::EccPrivateToPublic,
            Self::EccGenerateKeyPair(..) => OperationKind::EccGenerateKeyPair,
            Self::EcdsaSign(..) => OperationKind::EcdsaSign,
            Self::EcdsaVerify(..) => OperationKind::EcdsaVerify,
            Self::EcdhDerive(..) => OperationKind::EcdhDerive,
            Self::BignumCalc(..) => OperationKind::BignumCalc,
        }
    }

    /// Whether the backend produced a result.
    #[must_use]
    pub const fn has_result(&self) -> bool {
        match self {
            Self::Digest(_, r) => r.is_some(),
            Self::Hmac(_, r) | Self::Cmac(_, r) => r.is_some(),
            Self::SymmetricEncrypt(_, r) => r.is_some(),
            Self::SymmetricDecrypt(_, r) => r.is_some(),
            Self::KdfScrypt(_, r) => r.is_some(),
            Self::KdfHkdf(_, r) => r.is_some(),
            Self::KdfTls1Prf(_, r) => r.is_some(),
            Self::KdfPbkdf(_, r) => r.is_some(),
            Self::KdfPbkdf1(_, r) => r.is_some(),
            Self::KdfPbkdf2(_, r) => r.is_some(),
            Self::KdfArgon2(_, r) => r.is_some(),
            Self::KdfSsh(_, r) => r.is_some(),
            Self::KdfX963(_, r) => r.is_some(),
            Self::Sign(_, r) => r.is_some(),
            Self::Verify(_, r) | Self::EcdsaVerify(_, r) => r.is_some(),
            Self::EccPrivateToPublic(_, r) => r.is_some(),
            Self::EccGenerateKeyPair(_, r) => r.is_some(),
            Self::EcdsaSign(_, r) => r.is_some(),
            Self::EcdhDerive(_, r) => r.is_some(),
            Self::BignumCalc(_, r) => r.is_some(),
        }
    }
}
