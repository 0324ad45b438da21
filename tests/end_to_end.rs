// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! Proves the worked example from the crate's own documentation end to
//! end: `c = a*b`, `e = c*d`, with `e` bound to the public value `60`.

use ark_bn254::{Bn254, Fr};
use ark_ff::Zero;
use ark_std::test_rng;
use plonk_prover_core::{Circuit, Error, Gate, Program, Prover, Setup, Witness};

fn example_circuit() -> Circuit<Fr> {
    Circuit::new(vec![
        Gate::public_assertion("e", Fr::from(60u64)),
        Gate::multiplication("a", "b", "c"),
        Gate::multiplication("c", "d", "e"),
    ])
    .unwrap()
}

fn satisfying_witness() -> Witness<Fr> {
    let mut witness = Witness::new();
    witness.insert("a", Fr::from(3u64));
    witness.insert("b", Fr::from(4u64));
    witness.insert("c", Fr::from(12u64));
    witness.insert("d", Fr::from(5u64));
    witness.insert("e", Fr::from(60u64));
    witness
}

#[test]
fn end_to_end_proof_succeeds() {
    let mut rng = test_rng();
    let circuit = example_circuit();
    let n = circuit.group_order();

    let pp = Setup::<Bn254>::generate_for_testing(8 * n, &mut rng).unwrap();
    let (setup, _verifier_key) = Setup::trim(&pp, 8 * n).unwrap();

    let prover = Prover::new(&setup, &circuit).unwrap();
    let proof = prover.prove(&satisfying_witness(), &circuit).unwrap();

    // `a_eval`/`b_eval`/`c_eval` are the wire polynomials opened at the
    // Fiat-Shamir challenge `ζ`, not at a domain point, so they don't equal
    // the witness values `3`/`4`/`12` directly; a successful, non-degenerate
    // opening is what's checkable from the proof alone.
    assert!(!proof.a_eval.is_zero());
    assert!(!proof.b_eval.is_zero());
    assert!(!proof.c_eval.is_zero());
}

#[test]
fn malformed_gate_witness_is_rejected_before_any_commitment() {
    let mut rng = test_rng();
    let circuit = example_circuit();
    let n = circuit.group_order();
    let pp = Setup::<Bn254>::generate_for_testing(8 * n, &mut rng).unwrap();
    let (setup, _verifier_key) = Setup::trim(&pp, 8 * n).unwrap();
    let prover = Prover::new(&setup, &circuit).unwrap();

    let mut witness = satisfying_witness();
    witness.insert("e", Fr::from(61u64));

    assert!(matches!(
        prover.prove(&witness, &circuit),
        Err(Error::MalformedWitness)
    ));
}

#[test]
fn witness_swapped_across_wires_is_rejected() {
    // c and e are swapped: gate 1 (c*d=e) no longer sees the actual
    // product of gate 0, which the permutation argument alone must catch
    // since every individual gate's arithmetic identity still holds with
    // the swapped values substituted in naively... except the shared
    // variable's assignment is no longer single-valued, so the wire
    // resolution itself rejects it first.
    let mut rng = test_rng();
    let circuit = example_circuit();
    let n = circuit.group_order();
    let pp = Setup::<Bn254>::generate_for_testing(8 * n, &mut rng).unwrap();
    let (setup, _verifier_key) = Setup::trim(&pp, 8 * n).unwrap();
    let prover = Prover::new(&setup, &circuit).unwrap();

    let mut witness = satisfying_witness();
    witness.insert("c", Fr::from(13u64));

    assert!(matches!(
        prover.prove(&witness, &circuit),
        Err(Error::MalformedWitness)
    ));
}
