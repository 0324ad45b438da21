// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The finished proof object: nine KZG commitments and six scalar
//! evaluations, serialized exactly as `ark-serialize` derives them.

use ark_ec::PairingEngine;
use ark_poly_commit::kzg10::Commitment;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, SerializationError, Write};

/// A PLONK proof for the standard arithmetic gate over `E::Fr`.
#[derive(CanonicalSerialize, CanonicalDeserialize, Clone, Debug)]
pub struct Proof<E: PairingEngine> {
    /// Commitment to the left-wire polynomial `A`.
    pub a_comm: Commitment<E>,
    /// Commitment to the right-wire polynomial `B`.
    pub b_comm: Commitment<E>,
    /// Commitment to the output-wire polynomial `C`.
    pub c_comm: Commitment<E>,
    /// Commitment to the permutation grand product `Z`.
    pub z_comm: Commitment<E>,
    /// Commitment to the low third of the quotient polynomial.
    pub t_lo_comm: Commitment<E>,
    /// Commitment to the middle third of the quotient polynomial.
    pub t_mid_comm: Commitment<E>,
    /// Commitment to the high third of the quotient polynomial.
    pub t_hi_comm: Commitment<E>,
    /// KZG opening proof for every polynomial opened at `ζ`.
    pub w_z_comm: Commitment<E>,
    /// KZG opening proof for `Z` opened at `ζω`.
    pub w_zw_comm: Commitment<E>,
    /// `A(ζ)`.
    pub a_eval: E::Fr,
    /// `B(ζ)`.
    pub b_eval: E::Fr,
    /// `C(ζ)`.
    pub c_eval: E::Fr,
    /// `S_σ1(ζ)`.
    pub s1_eval: E::Fr,
    /// `S_σ2(ζ)`.
    pub s2_eval: E::Fr,
    /// `Z(ζω)`.
    pub z_shifted_eval: E::Fr,
}
