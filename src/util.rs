// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The random linear combination used throughout the permutation argument:
//! `x + β·y + γ`.

use crate::polynomial::Polynomial;
use ark_ff::FftField;

/// `x + β·y + γ` over scalars.
pub fn rlc<F: FftField>(x: F, y: F, beta: F, gamma: F) -> F {
    x + beta * y + gamma
}

/// `x + β·y + γ` applied pointwise to two polynomials sharing a basis and
/// length.
pub fn rlc_poly<F: FftField>(
    x: &Polynomial<F>,
    y: &Polynomial<F>,
    beta: F,
    gamma: F,
) -> Polynomial<F> {
    (x + &y.scale(beta)).add_scalar(gamma)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::polynomial::Basis;
    use ark_bn254::Fr;

    #[test]
    fn rlc_matches_pointwise_definition() {
        let x = Polynomial::new(vec![Fr::from(1u64), Fr::from(2u64)], Basis::Lagrange);
        let y = Polynomial::new(vec![Fr::from(3u64), Fr::from(4u64)], Basis::Lagrange);
        let beta = Fr::from(5u64);
        let gamma = Fr::from(7u64);

        let combined = rlc_poly(&x, &y, beta, gamma);
        for i in 0..2 {
            assert_eq!(
                combined.values()[i],
                rlc(x.values()[i], y.values()[i], beta, gamma)
            );
        }
    }
}
