/*!
Substitutions --- finite mappings from variable identities to terms.

A substitution is the output of [unification](crate::procedures::unify) and the running state of a proof.
The empty substitution is the identity.

Substitutions are value-like: once handed to a caller a substitution is never mutated, and each resolution step computes a new substitution from its inputs by [composition](Substitution::compose).

Two invariants are kept by construction, so that [application](Substitution::apply) terminates and is idempotent:
1. No variable is bound to itself. Identity bindings are dropped on the way in.
2. A bound term never mentions a variable which was already bound when the binding was made. Unification resolves a term through the substitution before binding it.

# Example

```rust
# use hornlog::structures::substitution::Substitution;
# use hornlog::structures::term::{Atom, Term, Variable};
let x = Variable::new(0, "X");
let y = Variable::new(1, "Y");

let mut sub = Substitution::default();
sub.bind(&x, Term::Variable(y.clone()));
sub.bind(&y, Term::Atom(Atom::new("a")));

// Application resolves chains of bindings.
assert_eq!(sub.apply(&Term::Variable(x)), Term::Atom(Atom::new("a")));
```
*/

use std::collections::HashMap;

use crate::structures::conjunction::Conjunction;
use crate::structures::literal::Literal;
use crate::structures::term::{Term, Variable, VariableId};

/// A finite mapping from variable identities to terms.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Substitution {
    bindings: HashMap<VariableId, Term>,
}

impl Substitution {
    /// Whether the substitution is the identity.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// The number of bindings in the substitution.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// The term bound to `variable`, if any.
    pub fn get(&self, variable: &Variable) -> Option<&Term> {
        self.bindings.get(&variable.id())
    }

    /// Binds `variable` to `term`.
    /// Binding a variable to itself is dropped, as applying such a binding would never terminate.
    pub fn bind(&mut self, variable: &Variable, term: Term) {
        if let Term::Variable(bound) = &term {
            if bound.id() == variable.id() {
                return;
            }
        }
        self.bindings.insert(variable.id(), term);
    }

    /// An iterator over the (id, term) pairs of the substitution.
    pub fn iter(&self) -> impl Iterator<Item = (&VariableId, &Term)> {
        self.bindings.iter()
    }

    /// The term with the substitution applied.
    ///
    /// A bound variable is replaced by its bound term with the substitution applied in turn, an unbound variable is returned unchanged, an atom is unchanged, and application maps over the elements of a list.
    pub fn apply(&self, term: &Term) -> Term {
        match term {
            Term::Variable(variable) => match self.bindings.get(&variable.id()) {
                Some(bound) => self.apply(bound),
                None => term.clone(),
            },

            Term::Atom(_) => term.clone(),

            Term::List(elements) => {
                Term::List(elements.iter().map(|element| self.apply(element)).collect())
            }
        }
    }

    /// The literal with the substitution applied to each argument.
    pub fn apply_literal(&self, literal: &Literal) -> Literal {
        let terms = literal.terms().iter().map(|term| self.apply(term)).collect();

        match literal.polarity() {
            true => Literal::new(literal.name(), terms),
            false => Literal::negative(literal.name(), terms),
        }
    }

    /// The conjunction with the substitution applied to each literal.
    pub fn apply_conjunction(&self, conjunction: &Conjunction) -> Conjunction {
        Conjunction::new(
            conjunction
                .iter()
                .map(|literal| self.apply_literal(literal))
                .collect(),
        )
    }

    /// The composition of the substitution with `other`, such that applying the result is applying `self` and then `other`.
    ///
    /// [None] when the two disagree on a shared variable after mutual application --- composition is then no substitution at all.
    pub fn compose(&self, other: &Substitution) -> Option<Substitution> {
        let mut joined = Substitution::default();

        for (id, term) in &self.bindings {
            let applied = other.apply(term);
            if let Term::Variable(variable) = &applied {
                if variable.id() == *id {
                    continue;
                }
            }
            joined.bindings.insert(*id, applied);
        }

        for (id, term) in &other.bindings {
            match joined.bindings.get(id) {
                None => {
                    joined.bindings.insert(*id, term.clone());
                }

                Some(existing) => {
                    if *existing != self.apply(term) {
                        return None;
                    }
                }
            }
        }

        Some(joined)
    }
}
