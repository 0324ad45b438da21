// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! A gate-constraint system in the standard PLONK arithmetic form
//! `q_L·a + q_R·b + q_M·a·b + q_O·c + q_C + PI = 0`, and the permutation
//! argument's wiring between gates.
//!
//! This is deliberately not a circuit-building DSL: a [`Program`] is
//! whatever already knows how to hand back its gates, its group order and
//! its common preprocessed input. [`Circuit`] is the one concrete
//! implementation this crate ships, built directly from a flat list of
//! [`Gate`]s.

use crate::domain;
use crate::error::Error;
use crate::polynomial::{Basis, Polynomial};
use crate::witness::{WireLabel, Witness};
use ark_ff::FftField;
use hashbrown::HashMap;

/// The selector coefficients and wire references of a single gate, plus its
/// public input contribution (`0` for a purely private gate).
#[derive(Clone, Debug)]
pub struct Gate<F: FftField> {
    /// Left input wire, or `None` for the constant zero.
    pub wire_a: Option<WireLabel>,
    /// Right input wire, or `None` for the constant zero.
    pub wire_b: Option<WireLabel>,
    /// Output wire, or `None` for the constant zero.
    pub wire_c: Option<WireLabel>,
    /// Left-input selector.
    pub q_l: F,
    /// Right-input selector.
    pub q_r: F,
    /// Multiplication selector.
    pub q_m: F,
    /// Output selector.
    pub q_o: F,
    /// Constant selector.
    pub q_c: F,
    /// This gate's public input value, added into the constraint as `+ PI`.
    pub pi: F,
}

impl<F: FftField> Gate<F> {
    /// A constraint-free padding gate: every selector and the public input
    /// are zero, and no wires are referenced.
    pub fn dummy() -> Self {
        Self {
            wire_a: None,
            wire_b: None,
            wire_c: None,
            q_l: F::zero(),
            q_r: F::zero(),
            q_m: F::zero(),
            q_o: F::zero(),
            q_c: F::zero(),
            pi: F::zero(),
        }
    }

    /// A plain addition gate `a + b = c` with no public input.
    pub fn addition(a: impl Into<WireLabel>, b: impl Into<WireLabel>, c: impl Into<WireLabel>) -> Self {
        Self {
            wire_a: Some(a.into()),
            wire_b: Some(b.into()),
            wire_c: Some(c.into()),
            q_l: F::one(),
            q_r: F::one(),
            q_m: F::zero(),
            q_o: -F::one(),
            q_c: F::zero(),
            pi: F::zero(),
        }
    }

    /// A plain multiplication gate `a * b = c` with no public input.
    pub fn multiplication(
        a: impl Into<WireLabel>,
        b: impl Into<WireLabel>,
        c: impl Into<WireLabel>,
    ) -> Self {
        Self {
            wire_a: Some(a.into()),
            wire_b: Some(b.into()),
            wire_c: Some(c.into()),
            q_l: F::zero(),
            q_r: F::zero(),
            q_m: F::one(),
            q_o: -F::one(),
            q_c: F::zero(),
            pi: F::zero(),
        }
    }

    /// A gate asserting that wire `a` equals the public constant `value`:
    /// `a - value = 0`.
    pub fn public_assertion(a: impl Into<WireLabel>, value: F) -> Self {
        Self {
            wire_a: Some(a.into()),
            wire_b: None,
            wire_c: None,
            q_l: F::one(),
            q_r: F::zero(),
            q_m: F::zero(),
            q_o: F::zero(),
            q_c: F::zero(),
            pi: -value,
        }
    }
}

/// The Lagrange-basis selector and permutation polynomials shared by prover
/// and verifier, derived once from a [`Program`]'s gate list.
pub struct CommonPreprocessedInput<F: FftField> {
    /// Left-input selector.
    pub q_l: Polynomial<F>,
    /// Right-input selector.
    pub q_r: Polynomial<F>,
    /// Multiplication selector.
    pub q_m: Polynomial<F>,
    /// Output selector.
    pub q_o: Polynomial<F>,
    /// Constant selector.
    pub q_c: Polynomial<F>,
    /// Permutation polynomial for the left wire column.
    pub s_sigma_1: Polynomial<F>,
    /// Permutation polynomial for the right wire column.
    pub s_sigma_2: Polynomial<F>,
    /// Permutation polynomial for the output wire column.
    pub s_sigma_3: Polynomial<F>,
}

/// Anything that can hand back a padded gate list, its group order, its
/// public input and its common preprocessed input.
pub trait Program<F: FftField> {
    /// The number of gates, padded up to a power of two.
    fn group_order(&self) -> usize;

    /// The padded gate list, length [`Self::group_order`].
    fn gates(&self) -> &[Gate<F>];

    /// The public input as a length-`n` Lagrange-basis polynomial: gate `i`
    /// contributes `PI(ω^i) = gates()[i].pi`.
    fn public_input_polynomial(&self) -> Polynomial<F> {
        Polynomial::new(
            self.gates().iter().map(|gate| gate.pi).collect(),
            Basis::Lagrange,
        )
    }

    /// Resolves a [`Witness`] against this program's wires, returning the
    /// three length-`n` Lagrange-basis wire polynomials `A`, `B`, `C`.
    /// Fails with [`Error::MalformedWitness`] if a referenced label has no
    /// assignment, or if any gate's constraint identity does not hold.
    fn wire_polynomials(
        &self,
        witness: &Witness<F>,
    ) -> Result<[Polynomial<F>; 3], Error> {
        let mut a = Vec::with_capacity(self.group_order());
        let mut b = Vec::with_capacity(self.group_order());
        let mut c = Vec::with_capacity(self.group_order());

        for gate in self.gates() {
            let a_value = witness.get(gate.wire_a.as_deref())?;
            let b_value = witness.get(gate.wire_b.as_deref())?;
            let c_value = witness.get(gate.wire_c.as_deref())?;

            let lhs = gate.q_l * a_value
                + gate.q_r * b_value
                + gate.q_m * a_value * b_value
                + gate.q_o * c_value
                + gate.q_c
                + gate.pi;
            if !lhs.is_zero() {
                return Err(Error::MalformedWitness);
            }

            a.push(a_value);
            b.push(b_value);
            c.push(c_value);
        }

        Ok([
            Polynomial::new(a, Basis::Lagrange),
            Polynomial::new(b, Basis::Lagrange),
            Polynomial::new(c, Basis::Lagrange),
        ])
    }

    /// Computes the selector and permutation polynomials shared between
    /// prover and verifier.
    fn common_preprocessed_input(&self) -> Result<CommonPreprocessedInput<F>, Error>;
}

/// Domain separator distinguishing the right wire column's permutation
/// values from the left column's (`k1` in the PLONK paper).
const K1: u64 = 2;
/// Domain separator distinguishing the output wire column (`k2`).
const K2: u64 = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum WireKind {
    Left,
    Right,
    Output,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct WireSlot {
    kind: WireKind,
    index: usize,
}

/// A flat gate list, padded to a power of two, together with the variable
/// wiring needed to build its permutation argument.
pub struct Circuit<F: FftField> {
    gates: Vec<Gate<F>>,
    group_order: usize,
}

impl<F: FftField> Circuit<F> {
    /// Builds a circuit from `gates`, right-padding with
    /// [`Gate::dummy`] up to the next power of two. Fails with
    /// [`Error::MalformedWitness`] if `gates` is empty: there is no
    /// meaningful group order for an empty gate list.
    pub fn new(mut gates: Vec<Gate<F>>) -> Result<Self, Error> {
        if gates.is_empty() {
            return Err(Error::MalformedWitness);
        }
        let group_order = gates.len().next_power_of_two();
        gates.resize_with(group_order, Gate::dummy);
        Ok(Self { gates, group_order })
    }

    fn variable_map(&self) -> HashMap<&WireLabel, Vec<WireSlot>> {
        let mut map: HashMap<&WireLabel, Vec<WireSlot>> = HashMap::new();
        for (index, gate) in self.gates.iter().enumerate() {
            if let Some(label) = gate.wire_a.as_ref() {
                map.entry(label).or_default().push(WireSlot {
                    kind: WireKind::Left,
                    index,
                });
            }
            if let Some(label) = gate.wire_b.as_ref() {
                map.entry(label).or_default().push(WireSlot {
                    kind: WireKind::Right,
                    index,
                });
            }
            if let Some(label) = gate.wire_c.as_ref() {
                map.entry(label).or_default().push(WireSlot {
                    kind: WireKind::Output,
                    index,
                });
            }
        }
        map
    }

    /// Builds the permutation `σ*` over the `3n` wire slots: every variable's
    /// occurrences are linked into a single cycle, and every slot belonging
    /// to no variable (an unused wire) maps to itself.
    fn compute_sigma_star(&self) -> HashMap<WireSlot, WireSlot> {
        let n = self.group_order;
        let mut sigma = HashMap::with_capacity(3 * n);
        for kind in [WireKind::Left, WireKind::Right, WireKind::Output] {
            for index in 0..n {
                let slot = WireSlot { kind, index };
                sigma.insert(slot, slot);
            }
        }
        for slots in self.variable_map().values() {
            if slots.len() < 2 {
                continue;
            }
            for (j, &slot) in slots.iter().enumerate() {
                sigma.insert(slot, slots[(j + 1) % slots.len()]);
            }
        }
        sigma
    }
}

impl<F: FftField> Program<F> for Circuit<F> {
    fn group_order(&self) -> usize {
        self.group_order
    }

    fn gates(&self) -> &[Gate<F>] {
        &self.gates
    }

    fn common_preprocessed_input(&self) -> Result<CommonPreprocessedInput<F>, Error> {
        let n = self.group_order;

        let mut q_l = Vec::with_capacity(n);
        let mut q_r = Vec::with_capacity(n);
        let mut q_m = Vec::with_capacity(n);
        let mut q_o = Vec::with_capacity(n);
        let mut q_c = Vec::with_capacity(n);
        for gate in &self.gates {
            q_l.push(gate.q_l);
            q_r.push(gate.q_r);
            q_m.push(gate.q_m);
            q_o.push(gate.q_o);
            q_c.push(gate.q_c);
        }

        let sigma = self.compute_sigma_star();
        let roots = domain::roots_of_unity::<F>(n)?;
        let value_of = |slot: WireSlot| -> F {
            let k = match slot.kind {
                WireKind::Left => F::one(),
                WireKind::Right => F::from(K1),
                WireKind::Output => F::from(K2),
            };
            k * roots[slot.index]
        };

        let mut s_sigma_1 = Vec::with_capacity(n);
        let mut s_sigma_2 = Vec::with_capacity(n);
        let mut s_sigma_3 = Vec::with_capacity(n);
        for index in 0..n {
            s_sigma_1.push(value_of(sigma[&WireSlot {
                kind: WireKind::Left,
                index,
            }]));
            s_sigma_2.push(value_of(sigma[&WireSlot {
                kind: WireKind::Right,
                index,
            }]));
            s_sigma_3.push(value_of(sigma[&WireSlot {
                kind: WireKind::Output,
                index,
            }]));
        }

        Ok(CommonPreprocessedInput {
            q_l: Polynomial::new(q_l, Basis::Lagrange),
            q_r: Polynomial::new(q_r, Basis::Lagrange),
            q_m: Polynomial::new(q_m, Basis::Lagrange),
            q_o: Polynomial::new(q_o, Basis::Lagrange),
            q_c: Polynomial::new(q_c, Basis::Lagrange),
            s_sigma_1: Polynomial::new(s_sigma_1, Basis::Lagrange),
            s_sigma_2: Polynomial::new(s_sigma_2, Basis::Lagrange),
            s_sigma_3: Polynomial::new(s_sigma_3, Basis::Lagrange),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use ark_bn254::Fr;
    use ark_ff::Zero;

    /// The worked example from the proving algorithm's test vector:
    /// `c = a*b`, `e = c*d`, with `a=3, b=4, c=12, d=5, e=60` and `e` bound
    /// to the public value `60`.
    fn example_circuit() -> Circuit<Fr> {
        Circuit::new(vec![
            Gate::public_assertion("e", Fr::from(60u64)),
            Gate::multiplication("a", "b", "c"),
            Gate::multiplication("c", "d", "e"),
        ])
        .unwrap()
    }

    fn example_witness() -> Witness<Fr> {
        let mut witness = Witness::new();
        witness.insert("a", Fr::from(3u64));
        witness.insert("b", Fr::from(4u64));
        witness.insert("c", Fr::from(12u64));
        witness.insert("d", Fr::from(5u64));
        witness.insert("e", Fr::from(60u64));
        witness
    }

    #[test]
    fn pads_to_power_of_two() {
        let circuit = example_circuit();
        assert_eq!(circuit.group_order(), 4);
        assert_eq!(circuit.gates().len(), 4);
    }

    #[test]
    fn satisfying_witness_resolves() {
        let circuit = example_circuit();
        let witness = example_witness();
        let [a, b, c] = circuit.wire_polynomials(&witness).unwrap();
        assert_eq!(a.values()[0], Fr::from(3u64));
        assert_eq!(b.values()[0], Fr::from(4u64));
        assert_eq!(c.values()[0], Fr::from(12u64));
    }

    #[test]
    fn wire_and_public_input_vectors_match_the_worked_example() {
        // `e = (a·b)·d`, public input `e = 60`, gate order
        // [public_assertion(e), mult(a,b,c), mult(c,d,e)].
        let circuit = example_circuit();
        let witness = example_witness();
        let [a, b, c] = circuit.wire_polynomials(&witness).unwrap();

        assert_eq!(
            a.values(),
            &[Fr::from(60u64), Fr::from(3u64), Fr::from(12u64), Fr::zero()]
        );
        assert_eq!(
            b.values(),
            &[Fr::zero(), Fr::from(4u64), Fr::from(5u64), Fr::zero()]
        );
        assert_eq!(
            c.values(),
            &[Fr::zero(), Fr::from(12u64), Fr::from(60u64), Fr::zero()]
        );

        let pi = circuit.public_input_polynomial();
        assert_eq!(pi.values()[0], -Fr::from(60u64));
        assert_eq!(pi.values()[1], Fr::zero());
        assert_eq!(pi.values()[2], Fr::zero());
        assert_eq!(pi.values()[3], Fr::zero());
    }

    #[test]
    fn unsatisfying_witness_is_rejected() {
        let circuit = example_circuit();
        let mut witness = example_witness();
        witness.insert("e", Fr::from(61u64));
        assert!(matches!(
            circuit.wire_polynomials(&witness),
            Err(Error::MalformedWitness)
        ));
    }

    #[test]
    fn missing_assignment_is_rejected() {
        let circuit = example_circuit();
        let witness: Witness<Fr> = Witness::new();
        assert!(matches!(
            circuit.wire_polynomials(&witness),
            Err(Error::MalformedWitness)
        ));
    }

    #[test]
    fn permutation_links_shared_variables() {
        let circuit = example_circuit();
        let cpi = circuit.common_preprocessed_input().unwrap();
        // "c" occurs as gate 1's output and gate 2's left input, so their
        // sigma values must cross-reference rather than both be identity.
        let roots = domain::roots_of_unity::<Fr>(4).unwrap();
        assert_ne!(cpi.s_sigma_1.values()[2], roots[2]);
    }
}
