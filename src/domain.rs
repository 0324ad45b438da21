// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Roots of unity over the scalar field.
//!
//! `n` must be a power of two dividing `p - 1`; we lean entirely on
//! [`ark_ff`]'s Montgomery-form field arithmetic and
//! [`ark_poly::GeneralEvaluationDomain`] rather than reimplementing modular
//! reduction or a bespoke FFT domain.

use crate::error::Error;
use ark_ff::FftField;
use ark_poly::{EvaluationDomain, GeneralEvaluationDomain};

/// Returns `[ω⁰, ω¹, …, ω^(n-1)]` where `ω` is a primitive `n`-th root of
/// unity of `F`. `n` must be a power of two.
pub fn roots_of_unity<F: FftField>(n: usize) -> Result<Vec<F>, Error> {
    let domain = evaluation_domain::<F>(n)?;
    Ok(domain.elements().collect())
}

/// Returns the primitive `n`-th root of unity of `F` alone. `n` must be a
/// power of two.
pub fn root_of_unity<F: FftField>(n: usize) -> Result<F, Error> {
    let domain = evaluation_domain::<F>(n)?;
    Ok(group_gen(&domain))
}

pub(crate) fn evaluation_domain<F: FftField>(
    n: usize,
) -> Result<GeneralEvaluationDomain<F>, Error> {
    GeneralEvaluationDomain::<F>::new(n).ok_or(Error::InvalidEvalDomainSize {
        log_size_of_group: (n.next_power_of_two().trailing_zeros()),
        adicity: <<F as FftField>::FftParams as ark_ff::FftParameters>::TWO_ADICITY,
    })
}

/// `GeneralEvaluationDomain` stores its primitive root of unity as a public
/// field on whichever concrete domain (`Radix2` or `MixedRadix`) it wraps,
/// rather than exposing it through the `EvaluationDomain` trait; this reaches
/// into either variant uniformly.
pub(crate) fn group_gen<F: FftField>(domain: &GeneralEvaluationDomain<F>) -> F {
    match domain {
        GeneralEvaluationDomain::Radix2(d) => d.group_gen,
        GeneralEvaluationDomain::MixedRadix(d) => d.group_gen,
    }
}

/// See [`group_gen`]: same rationale, for the inverse root of unity.
pub(crate) fn group_gen_inv<F: FftField>(domain: &GeneralEvaluationDomain<F>) -> F {
    match domain {
        GeneralEvaluationDomain::Radix2(d) => d.group_gen_inv,
        GeneralEvaluationDomain::MixedRadix(d) => d.group_gen_inv,
    }
}

/// See [`group_gen`]: same rationale, for the inverse of the domain size.
pub(crate) fn size_inv<F: FftField>(domain: &GeneralEvaluationDomain<F>) -> F {
    match domain {
        GeneralEvaluationDomain::Radix2(d) => d.size_inv,
        GeneralEvaluationDomain::MixedRadix(d) => d.size_inv,
    }
}
