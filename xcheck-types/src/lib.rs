//! # xcheck Types
//!
//! Operation/result model shared by the xcheck invariant layer and the
//! harness that drives cryptographic backends.
//!
//! ## What's Here
//!
//! - **ids**: `CipherType`, `DigestType`, `CurveType`, `CalcOp`, `ArgonType`
//! - **component**: `Buffer` and the result shapes (`Key`, `Ciphertext`, ...)
//! - **operation**: one descriptor per `OperationKind`, the `Operation` and
//!   `KeySizeRequest` traits
//! - **outcome**: `OperationOutcome`, the tagged `(descriptor, result)` pair
//! - **error**: `TypeError` for name parsing
//!
//! Descriptors and results are owned by the harness for the duration of one
//! operation; everything downstream only borrows them.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::panic)]

/// Result components and the `ByteLength` trait.
pub mod component;
/// Error types for identifier parsing.
pub mod error;
/// Algorithm identifiers.
pub mod ids;
/// Operation descriptors and operation kinds.
pub mod operation;
/// Descriptor/result pairs.
pub mod outcome;

pub use component::{
    Bignum, Buffer, ByteLength, Ciphertext, Cleartext, EccKeyPair, EccPublicKey, EcdsaSignature,
    Key, Mac, Secret, Signature,
};
pub use error::{Result, TypeError};
pub use ids::{ArgonType, CalcOp, CipherType, CurveType, DigestType};
pub use operation::{KeySizeRequest, Operation, OperationKind, SymmetricCipher};
pub use outcome::OperationOutcome;
