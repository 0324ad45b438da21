// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A thin adapter over `ark-poly-commit`'s KZG10 scheme: committing a
//! monomial-basis [`Polynomial`] to a single curve point.

use crate::error::Error;
use crate::polynomial::{Basis, Polynomial};
use ark_ec::PairingEngine;
use ark_poly::univariate::DensePolynomial;
use ark_poly::UVPolynomial;
use ark_poly_commit::kzg10::{Commitment, Powers, UniversalParams, VerifierKey, KZG10};
use std::borrow::Cow;

/// `ark-poly-commit` 0.3's `KZG10::trim` is only implemented `pub(crate)`
/// under its own `#[cfg(test)]` module, so it is unreachable from a
/// downstream crate. This reimplements the identical specialization: slice
/// the universal parameters' powers down to `supported_degree` and carry the
/// degree-0 term into a `VerifierKey`.
fn trim_powers<E: PairingEngine>(
    pp: &UniversalParams<E>,
    mut supported_degree: usize,
) -> (Powers<'_, E>, VerifierKey<E>) {
    if supported_degree == 1 {
        supported_degree += 1;
    }
    let powers_of_g = pp.powers_of_g[..=supported_degree].to_vec();
    let powers_of_gamma_g = (0..=supported_degree)
        .map(|i| pp.powers_of_gamma_g[&i])
        .collect();

    let powers = Powers {
        powers_of_g: Cow::Owned(powers_of_g),
        powers_of_gamma_g: Cow::Owned(powers_of_gamma_g),
    };
    let vk = VerifierKey {
        g: pp.powers_of_g[0],
        gamma_g: pp.powers_of_gamma_g[&0],
        h: pp.h,
        beta_h: pp.beta_h,
        prepared_h: pp.prepared_h.clone(),
        prepared_beta_h: pp.prepared_beta_h.clone(),
    };
    (powers, vk)
}

/// The trimmed powers of tau needed to commit to polynomials of bounded
/// degree. Produced once per supported circuit size via [`Setup::trim`].
pub struct Setup<'a, E: PairingEngine> {
    powers: Powers<'a, E>,
}

impl<'a, E: PairingEngine> Setup<'a, E> {
    /// Trims a universal SRS down to the powers needed to commit to
    /// polynomials of degree at most `supported_degree`, returning both the
    /// prover-facing [`Setup`] and the verifier key.
    pub fn trim(
        pp: &'a UniversalParams<E>,
        supported_degree: usize,
    ) -> Result<(Self, VerifierKey<E>), Error> {
        let (powers, verifier_key) = trim_powers(pp, supported_degree);
        Ok((Self { powers }, verifier_key))
    }

    /// Commits to a monomial-basis polynomial. Non-hiding: this core proves
    /// knowledge of a satisfying witness, it does not claim zero-knowledge
    /// (see the crate-level documentation's Non-goals).
    pub fn commit(&self, poly: &Polynomial<E::Fr>) -> Result<Commitment<E>, Error> {
        if poly.basis() != Basis::Monomial {
            return Err(Error::BasisMismatch);
        }
        if poly.len() > self.powers.powers_of_g.len() {
            return Err(Error::SetupMismatch);
        }
        let dense = DensePolynomial::from_coefficients_slice(poly.values());
        let (commitment, _randomness) =
            KZG10::<E, DensePolynomial<E::Fr>>::commit(&self.powers, &dense, None, None)
                .map_err(Error::from)?;
        Ok(commitment)
    }

    /// Generates a fresh universal SRS for tests and benches. Gated behind
    /// the `testing` feature (and always available under `cfg(test)`)
    /// because a real deployment's SRS must come from a trusted setup
    /// ceremony, not `rand::thread_rng`.
    #[cfg(any(test, feature = "testing"))]
    pub fn generate_for_testing<R: ark_std::rand::RngCore>(
        max_degree: usize,
        rng: &mut R,
    ) -> Result<UniversalParams<E>, Error> {
        if max_degree == 0 {
            return Err(Error::DegreeIsZero);
        }
        KZG10::<E, DensePolynomial<E::Fr>>::setup(max_degree, false, rng)
            .map_err(Error::from)
    }
}
