/*!
Conjunctions --- ordered sequences of literals, all of which must be proved.

A conjunction serves two roles: the tail of a rule, and a query.
Either way, literals are proved left to right, so the order of the sequence is the order of the search.

A conjunction also exposes the user-written variables it mentions, in first-mention order and with the wildcard `_` excluded --- exactly the variables a query answer reports bindings for.
*/

use crate::structures::literal::Literal;
use crate::structures::term::Variable;

/// An ordered sequence of literals, interpreted as their conjunction.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Conjunction {
    literals: Vec<Literal>,
}

impl Conjunction {
    /// A conjunction of the given literals, in the given order.
    pub fn new(literals: Vec<Literal>) -> Self {
        Conjunction { literals }
    }

    /// The literals of the conjunction.
    pub fn literals(&self) -> &[Literal] {
        &self.literals
    }

    /// The number of literals in the conjunction.
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Whether the conjunction holds no literals.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// An iterator over the literals of the conjunction.
    pub fn iter(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// The variables mentioned by the conjunction, in first-mention order.
    ///
    /// Wildcards are excluded, and each distinct variable appears once.
    pub fn variables(&self) -> Vec<Variable> {
        let mut mentioned = Vec::new();
        for literal in &self.literals {
            literal.variables(&mut mentioned);
        }

        let mut distinct: Vec<Variable> = Vec::new();
        for variable in mentioned {
            if variable.is_wildcard() {
                continue;
            }
            if !distinct.iter().any(|seen| seen == &variable) {
                distinct.push(variable);
            }
        }
        distinct
    }
}

impl From<Vec<Literal>> for Conjunction {
    fn from(literals: Vec<Literal>) -> Self {
        Conjunction::new(literals)
    }
}

impl std::fmt::Display for Conjunction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, literal) in self.literals.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            literal.fmt(f)?;
        }
        Ok(())
    }
}
