// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE
// or https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//
// Copyright (c) ZK-INFRA. All rights reserved.

//! The prover's private assignment of field elements to variable names.

use crate::error::Error;
use ark_ff::FftField;
use hashbrown::HashMap;

/// A variable name referenced by a gate's left/right/output wire.
pub type WireLabel = String;

/// Maps variable names to their assigned field values. A wire that is
/// simply absent from a gate (`None`) is not looked up here at all — it is
/// treated as the constant zero directly by the caller.
#[derive(Clone, Debug, Default)]
pub struct Witness<F: FftField> {
    values: HashMap<WireLabel, F>,
}

impl<F: FftField> Witness<F> {
    /// An empty witness.
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    /// Assigns `value` to `label`, overwriting any previous assignment.
    pub fn insert(&mut self, label: impl Into<WireLabel>, value: F) -> &mut Self {
        self.values.insert(label.into(), value);
        self
    }

    /// Resolves an `Option<&str>` wire reference: `None` is the constant
    /// zero, `Some(label)` must be present in the witness.
    pub fn get(&self, label: Option<&str>) -> Result<F, Error> {
        match label {
            None => Ok(F::zero()),
            Some(label) => self
                .values
                .get(label)
                .copied()
                .ok_or(Error::MalformedWitness),
        }
    }
}

impl<F: FftField> FromIterator<(WireLabel, F)> for Witness<F> {
    fn from_iter<T: IntoIterator<Item = (WireLabel, F)>>(iter: T) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
