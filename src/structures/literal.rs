/*!
Literals --- a functor applied to argument terms, paired with a polarity.

The polarity distinguishes the two flavours a literal takes in a program:
- A *positive* literal appears as a fact, a rule head, or a goal.
- A *negative* literal is one marked for negation as failure, and appears only inside rule tails and queries.

The arity of a literal is the number of its arguments, and a functor is identified by name *and* arity during resolution: `p\1` and `p\2` share a clause bucket but never unify.

# Example

```rust
# use hornlog::structures::literal::Literal;
# use hornlog::structures::term::{Atom, Term};
let literal = Literal::new("parent", vec![Term::Atom(Atom::new("a")), Term::Atom(Atom::new("b"))]);

assert_eq!(literal.arity(), 2);
assert!(literal.polarity());
assert_eq!(literal.to_string(), "parent(a, b)");
assert_eq!(literal.negate().to_string(), "not(parent(a, b))");
```
*/

use crate::structures::term::{Term, Variable};

/// A functor name applied to argument terms, with a polarity.
///
/// A polarity of `false` marks the literal for negation as failure.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Literal {
    name: String,
    terms: Vec<Term>,
    polarity: bool,
}

impl Literal {
    /// A fresh positive literal.
    pub fn new(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal {
            name: name.into(),
            terms,
            polarity: true,
        }
    }

    /// A fresh literal marked for negation as failure.
    pub fn negative(name: impl Into<String>, terms: Vec<Term>) -> Self {
        Literal {
            name: name.into(),
            terms,
            polarity: false,
        }
    }

    /// The literal with its polarity flipped.
    pub fn negate(&self) -> Self {
        Literal {
            name: self.name.clone(),
            terms: self.terms.clone(),
            polarity: !self.polarity,
        }
    }

    /// The positive counterpart of the literal, for proving the subgoal a negation wraps.
    pub fn positive(&self) -> Self {
        Literal {
            name: self.name.clone(),
            terms: self.terms.clone(),
            polarity: true,
        }
    }

    /// The functor name of the literal.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument terms of the literal.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// The arity of the literal, i.e. the count of its arguments.
    pub fn arity(&self) -> usize {
        self.terms.len()
    }

    /// The polarity of the literal: `true` for positive, `false` for negation as failure.
    pub fn polarity(&self) -> bool {
        self.polarity
    }

    /// Whether every argument of the literal is ground.
    pub fn is_ground(&self) -> bool {
        self.terms.iter().all(Term::is_ground)
    }

    /// Appends every variable of the literal to `found`, in order of occurrence.
    pub fn variables(&self, found: &mut Vec<Variable>) {
        for term in &self.terms {
            term.variables(found);
        }
    }
}

impl std::fmt::Display for Literal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if !self.polarity {
            write!(f, "not({})", self.positive())
        } else if self.terms.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{}(", self.name)?;
            for (index, term) in self.terms.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                term.fmt(f)?;
            }
            write!(f, ")")
        }
    }
}
