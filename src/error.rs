// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A collection of all possible errors encountered while proving.

/// Defines all possible errors that can be encountered while proving.
#[derive(Debug)]
pub enum Error {
    // FFT / polynomial errors
    /// This error occurs when an evaluation domain of the requested size
    /// cannot be constructed.
    InvalidEvalDomainSize {
        /// Log size of the requested group.
        log_size_of_group: u32,
        /// Two-adicity of the scalar field.
        adicity: u32,
    },
    /// Arithmetic was attempted between two [`Polynomial`](crate::polynomial::Polynomial)s
    /// with different bases or lengths.
    BasisMismatch,

    // Prover errors, see §7 of the design spec.
    /// A required wire label is absent from the witness, or the gate
    /// constraint identity failed to hold. Fatal, raised in round 1.
    MalformedWitness,
    /// The permutation grand product did not telescope to one. Fatal,
    /// raised in round 2.
    InvalidPermutation,
    /// A polynomial expected to be exactly divisible had non-zero
    /// coefficients above its expected degree.
    DegreeOverflow,
    /// `commit` was called with a polynomial longer than the SRS supports.
    SetupMismatch,

    // Proof verification errors
    /// This error occurs when a proof verification fails.
    ProofVerificationError,
    /// This error occurs when the circuit is not provided with all of the
    /// required inputs.
    CircuitInputsNotFound,
    /// PublicInput serialization error.
    InvalidPublicInputBytes,

    // Preprocessing errors
    /// This error occurs when the lengths of the gate-selector /
    /// permutation vectors of a [`Program`](crate::program::Program) are
    /// inconsistent with each other.
    MismatchedPolyLen,

    /// Polynomial Commitment errors.
    PCError {
        /// The underlying error.
        error: ark_poly_commit::error::Error,
    },

    /// This error occurs when the user tries to create a `Setup` and
    /// supplies the max degree as zero.
    DegreeIsZero,
    /// This error occurs when the user tries to trim a `Setup`
    /// to a degree that is larger than the maximum degree.
    TruncatedDegreeTooLarge,
    /// This error occurs when the user tries to trim a `Setup`
    /// down to a degree that is zero.
    TruncatedDegreeIsZero,
    /// This error occurs when the user tries to commit to a polynomial whose
    /// degree is larger than the supported degree for that proving key.
    PolynomialDegreeTooLarge,
    /// This error occurs when the user tries to commit to a polynomial whose
    /// degree is zero.
    PolynomialDegreeIsZero,
    /// This error occurs when the pairing check fails at being equal to the
    /// identity.
    PairingCheckFailure,

    /// Not enough bytes were left to read out of a slice during
    /// deserialization.
    NotEnoughBytes,
    /// A malformed point was decoded from a byte array.
    PointMalformed,
    /// A malformed scalar was decoded from a byte array.
    ScalarMalformed,
}

impl From<ark_poly_commit::error::Error> for Error {
    fn from(error: ark_poly_commit::error::Error) -> Self {
        Self::PCError { error }
    }
}

#[cfg(feature = "std")]
impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidEvalDomainSize {
                log_size_of_group,
                adicity,
            } => write!(
                f,
                "log-size of the evaluation domain group > TWO_ADICITY: \
                 size: {:?} > TWO_ADICITY = {:?}",
                log_size_of_group, adicity
            ),
            Self::BasisMismatch => write!(
                f,
                "polynomial arithmetic requires matching basis and length"
            ),
            Self::MalformedWitness => {
                write!(f, "witness does not satisfy the gate constraints")
            }
            Self::InvalidPermutation => write!(
                f,
                "permutation grand product did not telescope to one"
            ),
            Self::DegreeOverflow => write!(
                f,
                "polynomial has non-zero coefficients above its expected degree"
            ),
            Self::SetupMismatch => write!(
                f,
                "polynomial is longer than the structured reference string"
            ),
            Self::ProofVerificationError => {
                write!(f, "proof verification failed")
            }
            Self::CircuitInputsNotFound => {
                write!(f, "circuit inputs not found")
            }
            Self::InvalidPublicInputBytes => {
                write!(f, "invalid public input bytes")
            }
            Self::MismatchedPolyLen => {
                write!(f, "the length of the wires is not the same")
            }
            Self::PCError { error } => {
                write!(f, "{:?}", error)
            }
            Self::DegreeIsZero => {
                write!(f, "cannot create a Setup with max degree 0")
            }
            Self::TruncatedDegreeTooLarge => {
                write!(f, "cannot trim more than the maximum degree")
            }
            Self::TruncatedDegreeIsZero => write!(
                f,
                "cannot trim a Setup to a maximum size of zero"
            ),
            Self::PolynomialDegreeTooLarge => write!(
                f,
                "setup is not large enough to commit to said polynomial"
            ),
            Self::PolynomialDegreeIsZero => {
                write!(f, "cannot commit to polynomial of zero degree")
            }
            Self::PairingCheckFailure => write!(f, "pairing check failed"),
            Self::NotEnoughBytes => write!(f, "not enough bytes left to read"),
            Self::PointMalformed => write!(f, "point bytes malformed"),
            Self::ScalarMalformed => write!(f, "scalar bytes malformed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
