use num::BigUint;
use num::Zero;

use crate::basic_types::HashMap;
use crate::basic_types::Literal;

/// A sparse map from literals to positive coefficients, the working representation of the
/// constraint being derived during conflict analysis. Absent literals have weight zero; a
/// weight is never stored as zero.
#[derive(Debug, Clone, Default)]
pub struct WeightedLiterals {
    weights: HashMap<Literal, BigUint>,
}

impl WeightedLiterals {
    /// Adds `amount` to the weight of `literal`. Adding zero leaves the map untouched.
    pub fn accumulate(&mut self, literal: Literal, amount: BigUint) {
        if amount.is_zero() {
            return;
        }
        *self
            .weights
            .entry(literal)
            .or_insert_with(BigUint::zero) += amount;
    }

    pub fn get(&self, literal: Literal) -> Option<&BigUint> {
        self.weights.get(&literal)
    }

    /// The weight of `literal`, zero when it does not occur.
    pub fn weight(&self, literal: Literal) -> BigUint {
        self.weights.get(&literal).cloned().unwrap_or_default()
    }

    pub fn contains(&self, literal: Literal) -> bool {
        self.weights.contains_key(&literal)
    }

    pub fn remove(&mut self, literal: Literal) -> Option<BigUint> {
        self.weights.remove(&literal)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Literal, &BigUint)> + '_ {
        self.weights.iter().map(|(&literal, weight)| (literal, weight))
    }

    /// Multiplies every weight by `factor`.
    pub fn scale(&mut self, factor: &BigUint) {
        for weight in self.weights.values_mut() {
            *weight *= factor;
        }
    }

    /// Caps every weight at `degree` (coefficient saturation).
    pub fn saturate(&mut self, degree: &BigUint) {
        for weight in self.weights.values_mut() {
            if &*weight > degree {
                weight.clone_from(degree);
            }
        }
    }

    pub fn retain(&mut self, keep: impl FnMut(&Literal, &mut BigUint) -> bool) {
        self.weights.retain(keep);
    }

    /// Overwrites every stored weight with one.
    pub fn make_unit(&mut self) {
        for weight in self.weights.values_mut() {
            *weight = BigUint::from(1u32);
        }
    }
}
