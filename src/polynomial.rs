// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A polynomial tagged with the basis its values are expressed in.
//!
//! Arithmetic is defined pointwise and only between polynomials sharing the
//! same basis and length; this mirrors the teacher's reliance on
//! [`ark_poly::GeneralEvaluationDomain`] for FFT/IFFT, generalized with an
//! explicit basis tag so that mixing, say, a Lagrange-basis wire polynomial
//! with a coset-extended one is a compile-reachable runtime error
//! ([`Error::BasisMismatch`]) rather than silently wrong arithmetic.

use crate::domain;
use crate::error::Error;
use ark_ff::{batch_inversion, FftField};
use ark_poly::EvaluationDomain;
use core::ops::{Add, Div, Mul, Sub};

/// The basis a [`Polynomial`]'s values are expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Basis {
    /// Values at the `n`-th roots of unity: `values[i] == p(ω^i)`.
    Lagrange,
    /// Coefficients of `X⁰, X¹, …, X^(n-1)`.
    Monomial,
    /// Values at `h·μ^i` for `i ∈ [0, 4n)`, where `μ` is a primitive
    /// `4n`-th root of unity and `h` is a coset cofactor.
    CosetExtendedLagrange,
}

/// A sequence of scalars together with a tag identifying the basis they are
/// expressed in. See the module documentation for the arithmetic contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<F: FftField> {
    values: Vec<F>,
    basis: Basis,
}

impl<F: FftField> Polynomial<F> {
    /// Builds a polynomial from its values/coefficients and basis tag.
    pub fn new(values: Vec<F>, basis: Basis) -> Self {
        Self { values, basis }
    }

    /// The all-zero polynomial of length `n` in the given basis.
    pub fn zero(n: usize, basis: Basis) -> Self {
        Self::new(vec![F::zero(); n], basis)
    }

    /// Number of values/coefficients.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the polynomial holds no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The basis this polynomial's values are expressed in.
    pub fn basis(&self) -> Basis {
        self.basis
    }

    /// The raw underlying values/coefficients.
    pub fn values(&self) -> &[F] {
        &self.values
    }

    /// Consumes the polynomial, returning its raw values/coefficients.
    pub fn into_values(self) -> Vec<F> {
        self.values
    }

    fn check_compatible(&self, other: &Self) -> Result<(), Error> {
        if self.basis != other.basis || self.values.len() != other.values.len()
        {
            Err(Error::BasisMismatch)
        } else {
            Ok(())
        }
    }

    /// Pointwise addition, failing if `self` and `other` do not share a
    /// basis and length.
    pub fn checked_add(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatible(other)?;
        Ok(Self::new(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| *a + *b)
                .collect(),
            self.basis,
        ))
    }

    /// Pointwise subtraction, failing if `self` and `other` do not share a
    /// basis and length.
    pub fn checked_sub(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatible(other)?;
        Ok(Self::new(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| *a - *b)
                .collect(),
            self.basis,
        ))
    }

    /// Pointwise multiplication, failing if `self` and `other` do not share
    /// a basis and length.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatible(other)?;
        Ok(Self::new(
            self.values
                .iter()
                .zip(other.values.iter())
                .map(|(a, b)| *a * *b)
                .collect(),
            self.basis,
        ))
    }

    /// Pointwise division. Fails with [`Error::BasisMismatch`] on a
    /// basis/length mismatch and with [`Error::DegreeOverflow`] if any
    /// divisor value is zero (the polynomials this core divides are only
    /// ever divided by something proven non-vanishing on the evaluation
    /// set, so a zero there means the caller's invariant broke).
    pub fn checked_div(&self, other: &Self) -> Result<Self, Error> {
        self.check_compatible(other)?;
        if other.values.iter().any(|v| v.is_zero()) {
            return Err(Error::DegreeOverflow);
        }
        let mut inv = other.values.clone();
        batch_inversion(&mut inv);
        Ok(Self::new(
            self.values
                .iter()
                .zip(inv.iter())
                .map(|(a, b)| *a * *b)
                .collect(),
            self.basis,
        ))
    }

    /// Scales every value/coefficient by `scalar`.
    pub fn scale(&self, scalar: F) -> Self {
        Self::new(self.values.iter().map(|v| *v * scalar).collect(), self.basis)
    }

    /// Adds the constant polynomial `scalar` to `self`. In the Lagrange and
    /// coset-extended Lagrange bases a constant shifts every value equally;
    /// in the monomial basis it only touches the `X⁰` coefficient.
    pub fn add_scalar(&self, scalar: F) -> Self {
        match self.basis {
            Basis::Lagrange | Basis::CosetExtendedLagrange => Self::new(
                self.values.iter().map(|v| *v + scalar).collect(),
                self.basis,
            ),
            Basis::Monomial => {
                let mut values = self.values.clone();
                match values.first_mut() {
                    Some(constant) => *constant += scalar,
                    None => values.push(scalar),
                }
                Self::new(values, Basis::Monomial)
            }
        }
    }

    /// Subtracts the constant polynomial `scalar` from `self`. See
    /// [`add_scalar`](Self::add_scalar) for the basis-dependent semantics.
    pub fn sub_scalar(&self, scalar: F) -> Self {
        self.add_scalar(-scalar)
    }

    /// Zero-extends a monomial coefficient vector to `len` coefficients,
    /// leaving the polynomial it represents unchanged. `len` must be at
    /// least `self.len()`.
    pub fn pad_to(&self, len: usize) -> Self {
        debug_assert!(
            len >= self.values.len(),
            "pad_to must not truncate a polynomial"
        );
        let mut values = self.values.clone();
        values.resize(len, F::zero());
        Self::new(values, self.basis)
    }

    /// Produces the polynomial whose `i`-th value equals `self`'s value at
    /// index `(i + k) mod len`. Used to realise `Z(Xω)` from `Z(X)` in the
    /// coset extended Lagrange basis, where a unit rotation corresponds to
    /// multiplication by `μ⁴ = ω` (`k = 4`).
    pub fn shift(&self, k: usize) -> Self {
        let n = self.values.len();
        if n == 0 {
            return self.clone();
        }
        let k = k % n;
        let mut values = Vec::with_capacity(n);
        for i in 0..n {
            values.push(self.values[(i + k) % n]);
        }
        Self::new(values, self.basis)
    }

    /// Evaluates a Lagrange-basis polynomial at an arbitrary point `z`, in
    /// `O(n)` scalar operations, using the standard barycentric formula.
    pub fn barycentric_eval(&self, z: F) -> Result<F, Error> {
        if self.basis != Basis::Lagrange {
            return Err(Error::BasisMismatch);
        }
        let n = self.values.len();
        let domain = domain::evaluation_domain::<F>(n)?;

        let z_h_at_z = domain.evaluate_vanishing_polynomial(z);
        if z_h_at_z.is_zero() {
            // z coincides with a root of unity: return the exact value
            // rather than dividing by zero.
            let omega = domain::group_gen(&domain);
            let mut power = F::one();
            for v in self.values.iter() {
                if power == z {
                    return Ok(*v);
                }
                power *= omega;
            }
            // z was a root of the *padded* domain but not one we hold a
            // value for (can happen if `n` was rounded up); value is 0.
            return Ok(F::zero());
        }

        let omega_inv = domain::group_gen_inv(&domain);
        let mut denominators = Vec::with_capacity(n);
        let mut omega_inv_pow = F::one();
        for _ in 0..n {
            denominators.push(omega_inv_pow * z - F::one());
            omega_inv_pow *= omega_inv;
        }
        batch_inversion(&mut denominators);

        let numerator = z_h_at_z * domain::size_inv(&domain);
        let sum: F = self
            .values
            .iter()
            .zip(denominators.iter())
            .map(|(v, d)| *v * *d)
            .sum();
        Ok(sum * numerator)
    }

    /// Converts monomial coefficients to the Lagrange basis of the same
    /// length (an FFT).
    pub fn fft(&self) -> Result<Self, Error> {
        if self.basis != Basis::Monomial {
            return Err(Error::BasisMismatch);
        }
        let domain = domain::evaluation_domain::<F>(self.values.len())?;
        Ok(Self::new(domain.fft(&self.values), Basis::Lagrange))
    }

    /// Converts a Lagrange-basis polynomial to monomial coefficients of the
    /// same length (an IFFT).
    pub fn ifft(&self) -> Result<Self, Error> {
        if self.basis != Basis::Lagrange {
            return Err(Error::BasisMismatch);
        }
        let domain = domain::evaluation_domain::<F>(self.values.len())?;
        Ok(Self::new(domain.ifft(&self.values), Basis::Monomial))
    }

    /// `fft_expand`: moves a length-`n` Lagrange polynomial into the
    /// coset-extended Lagrange basis of length `4n`, i.e. its values at
    /// `h·μ^i` for a primitive `4n`-th root of unity `μ`.
    ///
    /// Implemented as IFFT to monomial, scale coefficient `i` by `h^i`,
    /// zero-pad to `4n`, FFT of size `4n` — the cofactor `h` is a
    /// per-proof Fiat–Shamir challenge, so (unlike
    /// [`EvaluationDomain::coset_fft`]) it cannot be baked in as the
    /// field's fixed multiplicative generator.
    pub fn to_coset_extended_lagrange(&self, h: F) -> Result<Self, Error> {
        if self.basis != Basis::Lagrange {
            return Err(Error::BasisMismatch);
        }
        let n = self.values.len();
        let domain = domain::evaluation_domain::<F>(n)?;
        let mut coeffs = domain.ifft(&self.values);

        let mut h_pow = F::one();
        for c in coeffs.iter_mut() {
            *c *= h_pow;
            h_pow *= h;
        }
        coeffs.resize(4 * n, F::zero());

        let domain_4n = domain::evaluation_domain::<F>(4 * n)?;
        Ok(Self::new(
            domain_4n.fft(&coeffs),
            Basis::CosetExtendedLagrange,
        ))
    }

    /// Inverse of [`to_coset_extended_lagrange`](Self::to_coset_extended_lagrange):
    /// recovers the length-`4n` monomial coefficients from a coset-extended
    /// Lagrange polynomial. The top `n` of those coefficients are expected
    /// to vanish whenever this is used to recover a quotient or
    /// linearisation polynomial of bounded degree — callers must check
    /// that invariant themselves, since it is the caller's contract (e.g.
    /// "`T` has degree `< 3n`"), not a property of this conversion.
    pub fn coset_extended_lagrange_to_coeffs(
        &self,
        h: F,
    ) -> Result<Self, Error> {
        if self.basis != Basis::CosetExtendedLagrange {
            return Err(Error::BasisMismatch);
        }
        let len = self.values.len();
        let domain = domain::evaluation_domain::<F>(len)?;
        let mut coeffs = domain.ifft(&self.values);

        let h_inv = h.inverse().ok_or(Error::BasisMismatch)?;
        let mut h_pow_inv = F::one();
        for c in coeffs.iter_mut() {
            *c *= h_pow_inv;
            h_pow_inv *= h_inv;
        }
        Ok(Self::new(coeffs, Basis::Monomial))
    }
}

macro_rules! impl_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<F: FftField> $trait<&Polynomial<F>> for &Polynomial<F> {
            type Output = Polynomial<F>;
            fn $method(self, rhs: &Polynomial<F>) -> Polynomial<F> {
                self.$checked(rhs).unwrap_or_else(|_| {
                    panic!(
                        "polynomial {} requires matching basis and length",
                        stringify!($method)
                    )
                })
            }
        }

        impl<F: FftField> $trait<&Polynomial<F>> for Polynomial<F> {
            type Output = Polynomial<F>;
            fn $method(self, rhs: &Polynomial<F>) -> Polynomial<F> {
                (&self).$method(rhs)
            }
        }

        impl<F: FftField> $trait<Polynomial<F>> for Polynomial<F> {
            type Output = Polynomial<F>;
            fn $method(self, rhs: Polynomial<F>) -> Polynomial<F> {
                (&self).$method(&rhs)
            }
        }

        impl<F: FftField> $trait<Polynomial<F>> for &Polynomial<F> {
            type Output = Polynomial<F>;
            fn $method(self, rhs: Polynomial<F>) -> Polynomial<F> {
                self.$method(&rhs)
            }
        }
    };
}

impl_binop!(Add, add, checked_add);
impl_binop!(Sub, sub, checked_sub);
impl_binop!(Mul, mul, checked_mul);
impl_binop!(Div, div, checked_div);

macro_rules! impl_scalar_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl<F: FftField> $trait<F> for &Polynomial<F> {
            type Output = Polynomial<F>;
            fn $method(self, rhs: F) -> Polynomial<F> {
                self.$inner(rhs)
            }
        }

        impl<F: FftField> $trait<F> for Polynomial<F> {
            type Output = Polynomial<F>;
            fn $method(self, rhs: F) -> Polynomial<F> {
                (&self).$inner(rhs)
            }
        }
    };
}

impl_scalar_op!(Add, add, add_scalar);
impl_scalar_op!(Sub, sub, sub_scalar);
impl_scalar_op!(Mul, mul, scale);

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::{One, UniformRand, Zero};
    use rand::thread_rng;

    fn lagrange(values: Vec<u64>) -> Polynomial<Fr> {
        Polynomial::new(values.into_iter().map(Fr::from).collect(), Basis::Lagrange)
    }

    #[test]
    fn monomial_add_scalar_only_touches_constant_term() {
        let p = Polynomial::new(
            vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)],
            Basis::Monomial,
        );
        let shifted = p.add_scalar(Fr::from(10u64));
        assert_eq!(
            shifted.values(),
            &[Fr::from(11u64), Fr::from(2u64), Fr::from(3u64)]
        );
    }

    #[test]
    fn pad_to_preserves_evaluation() {
        let mut rng = thread_rng();
        let n = 4;
        let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();
        let p = Polynomial::new(coeffs, Basis::Monomial);
        let padded = p.pad_to(8);
        assert_eq!(padded.len(), 8);
        assert_eq!(&padded.values()[..n], p.values());
        assert!(padded.values()[n..].iter().all(Zero::is_zero));
    }

    #[test]
    fn pointwise_add_sub_mul() {
        let a = lagrange(vec![1, 2, 3, 4]);
        let b = lagrange(vec![10, 20, 30, 40]);
        assert_eq!((&a + &b).values(), lagrange(vec![11, 22, 33, 44]).values());
        assert_eq!((&b - &a).values(), lagrange(vec![9, 18, 27, 36]).values());
        assert_eq!((&a * &b).values(), lagrange(vec![10, 40, 90, 160]).values());
    }

    #[test]
    fn basis_mismatch_is_rejected() {
        let a = lagrange(vec![1, 2, 3, 4]);
        let b = Polynomial::new(
            vec![Fr::from(1u64), Fr::from(2u64), Fr::from(3u64), Fr::from(4u64)],
            Basis::Monomial,
        );
        assert!(matches!(a.checked_add(&b), Err(Error::BasisMismatch)));
    }

    #[test]
    fn length_mismatch_is_rejected() {
        let a = lagrange(vec![1, 2, 3, 4]);
        let b = lagrange(vec![1, 2]);
        assert!(matches!(a.checked_add(&b), Err(Error::BasisMismatch)));
    }

    #[test]
    #[should_panic(expected = "matching basis and length")]
    fn operator_panics_on_mismatch() {
        let a = lagrange(vec![1, 2, 3, 4]);
        let b = lagrange(vec![1, 2]);
        let _ = &a + &b;
    }

    #[test]
    fn division_requires_nonzero_divisor() {
        let a = lagrange(vec![1, 2, 3, 4]);
        let b = lagrange(vec![1, 0, 1, 1]);
        assert!(matches!(a.checked_div(&b), Err(Error::DegreeOverflow)));
    }

    #[test]
    fn shift_rotates_values() {
        let a = lagrange(vec![1, 2, 3, 4, 5]);
        assert_eq!(a.shift(1).values(), lagrange(vec![2, 3, 4, 5, 1]).values());
        assert_eq!(a.shift(4).values(), lagrange(vec![5, 1, 2, 3, 4]).values());
        assert_eq!(a.shift(5).values(), a.values());
    }

    #[test]
    fn fft_ifft_round_trip_is_identity() {
        let mut rng = thread_rng();
        let n = 8;
        let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();
        let monomial = Polynomial::new(coeffs.clone(), Basis::Monomial);
        let lagrange = monomial.fft().unwrap();
        let back = lagrange.ifft().unwrap();
        assert_eq!(back.values(), coeffs.as_slice());
    }

    #[test]
    fn barycentric_eval_matches_fft_evaluation_at_domain_points() {
        let mut rng = thread_rng();
        let n = 8;
        let coeffs: Vec<Fr> = (0..n).map(|_| Fr::rand(&mut rng)).collect();
        let monomial = Polynomial::new(coeffs, Basis::Monomial);
        let lagrange = monomial.fft().unwrap();

        let omega = domain::root_of_unity::<Fr>(n).unwrap();
        let mut power = Fr::one();
        for v in lagrange.values() {
            assert_eq!(lagrange.barycentric_eval(power).unwrap(), *v);
            power *= omega;
        }
    }

    #[test]
    fn barycentric_eval_matches_off_domain_evaluation() {
        let n = 8;
        // p(X) = 1 + 2X -> evaluates to 1 + 2*z at any z.
        let monomial = Polynomial::new(
            {
                let mut v = vec![Fr::zero(); n];
                v[0] = Fr::from(1u64);
                v[1] = Fr::from(2u64);
                v
            },
            Basis::Monomial,
        );
        let lagrange = monomial.fft().unwrap();
        let z = Fr::from(1234u64);
        assert_eq!(
            lagrange.barycentric_eval(z).unwrap(),
            Fr::from(1u64) + Fr::from(2u64) * z
        );
    }

    #[test]
    fn fft_expand_round_trip_is_identity_below_degree_n() {
        // Round-trip law from §8: fft_expand -> coset_extended_lagrange_to_coeffs
        // -> truncate to n -> fft() is identity on any Lagrange polynomial of
        // length n whose monomial degree is < n.
        let n = 8;
        let values = lagrange(vec![5, 7, 11, 13, 17, 19, 23, 29]);
        let h = Fr::from(7u64);

        let expanded = values.to_coset_extended_lagrange(h).unwrap();
        assert_eq!(expanded.len(), 4 * n);

        let coeffs = expanded.coset_extended_lagrange_to_coeffs(h).unwrap();
        let truncated =
            Polynomial::new(coeffs.values()[..n].to_vec(), Basis::Monomial);
        let back = truncated.fft().unwrap();

        assert_eq!(back.values(), values.values());
        assert!(coeffs.values()[n..].iter().all(Zero::is_zero));
    }

    #[test]
    fn coset_extended_values_match_direct_evaluation() {
        let n = 4;
        let values = lagrange(vec![1, 2, 3, 4]);
        let h = Fr::from(5u64);
        let expanded = values.to_coset_extended_lagrange(h).unwrap();

        let mu = domain::root_of_unity::<Fr>(4 * n).unwrap();
        let monomial = values.ifft().unwrap();
        let mut point = h;
        for i in 0..4 * n {
            let mut acc = Fr::zero();
            let mut p = Fr::one();
            for c in monomial.values() {
                acc += *c * p;
                p *= point;
            }
            assert_eq!(expanded.values()[i], acc);
            point *= mu;
        }
    }
}
