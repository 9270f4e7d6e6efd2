use std::fmt::Display;
use std::fmt::Formatter;

use num::BigInt;
use num::Signed;
use num::Zero;

use crate::basic_types::HashMap;
use crate::basic_types::Literal;

/// A linear objective `sum(coefficient_i * literal_i) + offset` to be minimised.
///
/// Terms are normalised so that every literal is positive: `c * ~x` contributes `c - c * x`.
/// Coefficients may therefore be negative, and terms over the same variable are combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObjectiveFunction {
    literals: Vec<Literal>,
    coefficients: Vec<BigInt>,
    offset: BigInt,
}

impl ObjectiveFunction {
    pub fn new(terms: impl IntoIterator<Item = (Literal, BigInt)>) -> Self {
        let mut combined: HashMap<Literal, BigInt> = HashMap::default();
        let mut offset = BigInt::zero();

        for (literal, coefficient) in terms {
            if coefficient.is_zero() {
                continue;
            }

            if literal.is_positive() {
                *combined.entry(literal).or_insert_with(BigInt::zero) += coefficient;
            } else {
                offset += &coefficient;
                *combined.entry(!literal).or_insert_with(BigInt::zero) -= coefficient;
            }
        }

        let mut entries = combined
            .into_iter()
            .filter(|(_, coefficient)| !coefficient.is_zero())
            .collect::<Vec<_>>();
        entries.sort_by_key(|(literal, _)| literal.to_u32());

        let (literals, coefficients) = entries.into_iter().unzip();
        Self {
            literals,
            coefficients,
            offset,
        }
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn offset(&self) -> &BigInt {
        &self.offset
    }

    pub fn iter(&self) -> impl Iterator<Item = (Literal, &BigInt)> + '_ {
        self.literals
            .iter()
            .copied()
            .zip(self.coefficients.iter())
    }

    /// Adds a constant to the objective.
    pub fn shifted(mut self, amount: BigInt) -> Self {
        self.offset += amount;
        self
    }

    /// Turns a maximisation objective into the minimisation of its negation.
    pub fn negated(self) -> Self {
        Self {
            literals: self.literals,
            coefficients: self.coefficients.into_iter().map(|c| -c).collect(),
            offset: -self.offset,
        }
    }

    /// The smallest value the objective can take over any assignment.
    pub fn lower_bound(&self) -> BigInt {
        self.coefficients
            .iter()
            .filter(|coefficient| coefficient.is_negative())
            .fold(self.offset.clone(), |bound, coefficient| bound + coefficient)
    }

    /// The largest value the objective can take over any assignment.
    pub fn upper_bound(&self) -> BigInt {
        self.coefficients
            .iter()
            .filter(|coefficient| coefficient.is_positive())
            .fold(self.offset.clone(), |bound, coefficient| bound + coefficient)
    }

    /// `upper_bound - lower_bound`; the number of distinct values is at most `range + 1`.
    pub fn range(&self) -> BigInt {
        self.upper_bound() - self.lower_bound()
    }

    /// Evaluates the objective under a total assignment.
    pub fn value_under(&self, is_true: impl Fn(Literal) -> bool) -> BigInt {
        self.iter()
            .filter(|(literal, _)| is_true(*literal))
            .fold(self.offset.clone(), |value, (_, coefficient)| {
                value + coefficient
            })
    }
}

impl Display for ObjectiveFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (index, (literal, coefficient)) in self.iter().enumerate() {
            if index > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{coefficient} {literal}")?;
        }

        if self.is_empty() {
            write!(f, "{}", self.offset)
        } else if !self.offset.is_zero() {
            write!(f, " + {}", self.offset)
        } else {
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::PropositionalVariable;

    fn lit(index: u32, positive: bool) -> Literal {
        Literal::new(PropositionalVariable::new(index), positive)
    }

    #[test]
    fn negative_literals_are_normalised_away() {
        let objective = ObjectiveFunction::new([(lit(0, false), BigInt::from(2))]);

        assert_eq!(objective.offset(), &BigInt::from(2));
        assert_eq!(
            objective.iter().collect::<Vec<_>>(),
            vec![(lit(0, true), &BigInt::from(-2))]
        );

        assert_eq!(objective.value_under(|_| true), BigInt::zero());
        assert_eq!(objective.value_under(|_| false), BigInt::from(2));
    }

    #[test]
    fn terms_over_the_same_variable_are_combined() {
        let objective = ObjectiveFunction::new([
            (lit(1, true), BigInt::from(3)),
            (lit(1, false), BigInt::from(1)),
            (lit(0, true), BigInt::from(4)),
        ]);

        assert_eq!(objective.offset(), &BigInt::from(1));
        assert_eq!(
            objective.iter().collect::<Vec<_>>(),
            vec![
                (lit(0, true), &BigInt::from(4)),
                (lit(1, true), &BigInt::from(2)),
            ]
        );
    }

    #[test]
    fn bounds_and_range() {
        let objective = ObjectiveFunction::new([
            (lit(0, true), BigInt::from(5)),
            (lit(1, false), BigInt::from(3)),
        ])
        .shifted(BigInt::from(1));

        // 5 x0 - 3 x1 + 4
        assert_eq!(objective.lower_bound(), BigInt::from(1));
        assert_eq!(objective.upper_bound(), BigInt::from(9));
        assert_eq!(objective.range(), BigInt::from(8));
    }

    #[test]
    fn negation_flips_bounds() {
        let objective = ObjectiveFunction::new([
            (lit(0, true), BigInt::from(5)),
            (lit(1, true), BigInt::from(-2)),
        ]);
        let negated = objective.clone().negated();

        assert_eq!(negated.lower_bound(), -objective.upper_bound());
        assert_eq!(negated.upper_bound(), -objective.lower_bound());
    }
}
