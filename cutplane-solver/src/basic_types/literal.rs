use super::PropositionalVariable;

/// A positive or negative occurrence of a [`PropositionalVariable`]. The code is
/// `2 * variable + 1` for the positive literal and `2 * variable` for its negation, so the two
/// polarities of a variable are adjacent codes.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Literal {
    code: u32,
}

impl Literal {
    pub fn new(propositional_variable: PropositionalVariable, is_positive: bool) -> Literal {
        Literal {
            code: propositional_variable.index() * 2 + (is_positive as u32),
        }
    }

    pub fn is_positive(&self) -> bool {
        (self.code & 1) == 1
    }

    pub fn is_negative(&self) -> bool {
        (self.code & 1) == 0
    }

    pub fn get_propositional_variable(&self) -> PropositionalVariable {
        PropositionalVariable::new(self.code / 2)
    }

    pub fn to_u32(self) -> u32 {
        self.code
    }
}

impl std::ops::Not for Literal {
    type Output = Literal;
    fn not(self) -> Literal {
        Literal::new(self.get_propositional_variable(), !self.is_positive())
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            write!(f, "~{}", self.get_propositional_variable())
        } else {
            write!(f, "{}", self.get_propositional_variable())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_flips_polarity_and_keeps_the_variable() {
        let variable = PropositionalVariable::new(7);
        let literal = Literal::new(variable, true);

        assert!(literal.is_positive());
        assert!((!literal).is_negative());
        assert_eq!((!literal).get_propositional_variable(), variable);
        assert_eq!(!!literal, literal);
    }

    #[test]
    fn polarities_of_a_variable_have_adjacent_codes() {
        let variable = PropositionalVariable::new(5);
        let positive = Literal::new(variable, true);

        assert_eq!(positive.to_u32(), 11);
        assert_eq!((!positive).to_u32(), 10);
    }

    #[test]
    fn display_marks_negative_literals() {
        let variable = PropositionalVariable::new(3);
        assert_eq!(Literal::new(variable, true).to_string(), "x3");
        assert_eq!(Literal::new(variable, false).to_string(), "~x3");
    }
}
