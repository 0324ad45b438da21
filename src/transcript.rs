// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! This is an extension over the [Merlin Transcript](Transcript) which adds a
//! few extra functionalities.

use ark_ec::PairingEngine;
use ark_ff::{Field, PrimeField};
use ark_poly_commit::kzg10::Commitment;
use ark_serialize::CanonicalSerialize;
use core::marker::PhantomData;
use merlin::Transcript;

/// Wrapper around [`Transcript`]
#[derive(derivative::Derivative)]
#[derivative(Clone)]
pub struct TranscriptWrapper<E>
where
    E: PairingEngine,
{
    /// Base Transcript
    pub transcript: Transcript,

    /// Type Parameter Marker
    __: PhantomData<E>,
}

impl<E> TranscriptWrapper<E>
where
    E: PairingEngine,
{
    /// Builds a new [`TranscriptWrapper`] with the given `label`.
    #[inline]
    pub fn new(label: &'static [u8]) -> Self {
        Self {
            transcript: Transcript::new(label),
            __: PhantomData,
        }
    }
}

/// Transcript adds an abstraction over the Merlin transcript
/// For convenience
pub(crate) trait TranscriptProtocol<E>
where
    E: PairingEngine,
{
    /// Append a `commitment` with the given `label`.
    fn append_commitment(&mut self, label: &'static [u8], comm: &Commitment<E>);

    /// Append a scalar with the given `label`.
    fn append_scalar(&mut self, label: &'static [u8], s: &E::Fr);

    /// Compute a `label`ed challenge variable.
    fn challenge_scalar(&mut self, label: &'static [u8]) -> E::Fr;

    /// Append domain separator for the circuit size.
    fn circuit_domain_sep(&mut self, n: u64);
}

impl<E> TranscriptProtocol<E> for TranscriptWrapper<E>
where
    E: PairingEngine,
{
    fn append_commitment(
        &mut self,
        label: &'static [u8],
        comm: &Commitment<E>,
    ) {
        let mut bytes = Vec::new();
        comm.0.serialize(&mut bytes).unwrap();
        self.transcript.append_message(label, &bytes);
    }

    fn append_scalar(&mut self, label: &'static [u8], s: &E::Fr) {
        let mut bytes = Vec::new();
        s.serialize(&mut bytes).unwrap();
        self.transcript.append_message(label, &bytes)
    }

    fn challenge_scalar(&mut self, label: &'static [u8]) -> E::Fr {
        // XXX: review this: assure from_random_bytes returnes a valid Field
        // element
        let size = E::Fr::size_in_bits() / 8;
        let mut buf = vec![0u8; size];
        self.transcript.challenge_bytes(label, &mut buf);
        E::Fr::from_random_bytes(&buf).unwrap()
    }

    fn circuit_domain_sep(&mut self, n: u64) {
        self.transcript.append_message(b"dom-sep", b"circuit_size");
        self.transcript.append_u64(b"n", n);
    }
}

/// The prover's first-round message: commitments to the wire polynomials.
pub struct Message1<E: PairingEngine> {
    /// Commitment to the left-wire polynomial `A`.
    pub a_comm: Commitment<E>,
    /// Commitment to the right-wire polynomial `B`.
    pub b_comm: Commitment<E>,
    /// Commitment to the output-wire polynomial `C`.
    pub c_comm: Commitment<E>,
}

/// The prover's second-round message: the permutation grand product
/// commitment.
pub struct Message2<E: PairingEngine> {
    /// Commitment to the grand product polynomial `Z`.
    pub z_comm: Commitment<E>,
}

/// The prover's third-round message: the three pieces the quotient
/// polynomial was split into.
pub struct Message3<E: PairingEngine> {
    /// Commitment to the low third of `T`.
    pub t_lo_comm: Commitment<E>,
    /// Commitment to the middle third of `T`.
    pub t_mid_comm: Commitment<E>,
    /// Commitment to the high third of `T`.
    pub t_hi_comm: Commitment<E>,
}

/// The prover's fourth-round message: openings of every committed
/// polynomial at `ζ` (and `Z` at `ζω`).
pub struct Message4<E: PairingEngine> {
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

impl<E> TranscriptWrapper<E>
where
    E: PairingEngine,
{
    /// Seeds the transcript with the circuit's group order, its common
    /// preprocessed input commitments and its public input, binding every
    /// challenge derived afterwards to this exact circuit and statement.
    #[allow(clippy::too_many_arguments)]
    pub fn seed_circuit(
        &mut self,
        n: u64,
        q_l: &Commitment<E>,
        q_r: &Commitment<E>,
        q_m: &Commitment<E>,
        q_o: &Commitment<E>,
        q_c: &Commitment<E>,
        s_sigma_1: &Commitment<E>,
        s_sigma_2: &Commitment<E>,
        s_sigma_3: &Commitment<E>,
        public_input: &[E::Fr],
    ) {
        self.circuit_domain_sep(n);
        self.append_commitment(b"q_l", q_l);
        self.append_commitment(b"q_r", q_r);
        self.append_commitment(b"q_m", q_m);
        self.append_commitment(b"q_o", q_o);
        self.append_commitment(b"q_c", q_c);
        self.append_commitment(b"s_sigma_1", s_sigma_1);
        self.append_commitment(b"s_sigma_2", s_sigma_2);
        self.append_commitment(b"s_sigma_3", s_sigma_3);
        for value in public_input {
            self.append_scalar(b"pi", value);
        }
    }

    /// Absorbs the round 1 message and squeezes `(β, γ)`.
    pub fn round_1(&mut self, message: &Message1<E>) -> (E::Fr, E::Fr) {
        self.append_commitment(b"a_comm", &message.a_comm);
        self.append_commitment(b"b_comm", &message.b_comm);
        self.append_commitment(b"c_comm", &message.c_comm);
        let beta = self.challenge_scalar(b"beta");
        let gamma = self.challenge_scalar(b"gamma");
        (beta, gamma)
    }

    /// Absorbs the round 2 message and squeezes `(α, h)`: the permutation
    /// challenge and the coset cofactor used to expand round 3's
    /// polynomials.
    pub fn round_2(&mut self, message: &Message2<E>) -> (E::Fr, E::Fr) {
        self.append_commitment(b"z_comm", &message.z_comm);
        let alpha = self.challenge_scalar(b"alpha");
        let h = self.challenge_scalar(b"h");
        (alpha, h)
    }

    /// Absorbs the round 3 message and squeezes `ζ`.
    pub fn round_3(&mut self, message: &Message3<E>) -> E::Fr {
        self.append_commitment(b"t_lo_comm", &message.t_lo_comm);
        self.append_commitment(b"t_mid_comm", &message.t_mid_comm);
        self.append_commitment(b"t_hi_comm", &message.t_hi_comm);
        self.challenge_scalar(b"zeta")
    }

    /// Absorbs the round 4 message and squeezes `v`, the opening
    /// batching challenge used to build round 5's aggregate proofs.
    pub fn round_4(&mut self, message: &Message4<E>) -> E::Fr {
        self.append_scalar(b"a_eval", &message.a_eval);
        self.append_scalar(b"b_eval", &message.b_eval);
        self.append_scalar(b"c_eval", &message.c_eval);
        self.append_scalar(b"s1_eval", &message.s1_eval);
        self.append_scalar(b"s2_eval", &message.s2_eval);
        self.append_scalar(b"z_shifted_eval", &message.z_shifted_eval);
        self.challenge_scalar(b"v")
    }
}
