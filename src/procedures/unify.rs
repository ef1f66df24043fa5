/*!
Unification --- the computation of most general unifiers.

Unification either returns the substitution with the fewest bindings making two structures syntactically equal, or reports that no unifier exists.
Syntactic equality is modulo atom equality, so `a` unifies with `'a'`.

The cases, Robinson-style:
- Two atoms unify exactly when equal, with nothing bound.
- A variable unifies with any term it does not occur in.
- Two lists unify elementwise when of equal length, each pair folded into the running substitution.
- Two literals unify argumentwise when their functor names, arities, and polarities agree.
- Two conjunctions unify literalwise when of equal length.

# The occurs check

A variable occurs in a term when the term is that variable, or is a list any of whose elements contain it.
Binding a variable to a term containing it would build an infinite structure, so such a unification fails.
The check is always made --- soundness over performance.

```rust
# use hornlog::procedures::unify::unify;
# use hornlog::structures::term::{Term, Variable};
let x = Variable::new(0, "X");

let var = Term::Variable(x.clone());
let list = Term::List(vec![Term::Variable(x)]);

assert!(unify(&var, &list).is_none());
```

# Solved form

Before a variable is bound, the candidate term is resolved through the running substitution.
As a consequence no bound term mentions an already-bound variable, application of a returned substitution is idempotent, and applying a returned substitution to both inputs yields equal terms.

```rust
# use hornlog::procedures::unify::unify;
# use hornlog::structures::term::{Atom, Term, Variable};
let t1 = Term::List(vec![Term::Variable(Variable::new(0, "X")), Term::Atom(Atom::new("b"))]);
let t2 = Term::List(vec![Term::Atom(Atom::new("a")), Term::Variable(Variable::new(1, "Y"))]);

let sigma = unify(&t1, &t2).unwrap();
assert_eq!(sigma.apply(&t1), sigma.apply(&t2));
```
*/

use crate::misc::log::targets::{self};
use crate::structures::conjunction::Conjunction;
use crate::structures::literal::Literal;
use crate::structures::substitution::Substitution;
use crate::structures::term::{Term, Variable};

/// The most general unifier of two terms, or [None] when no unifier exists.
pub fn unify(t1: &Term, t2: &Term) -> Option<Substitution> {
    let mut sub = Substitution::default();
    match unify_terms(t1, t2, &mut sub) {
        true => Some(sub),
        false => None,
    }
}

/// The most general unifier of two literals, or [None] when the functors differ or no unifier exists.
pub fn unify_literals(l1: &Literal, l2: &Literal) -> Option<Substitution> {
    let mut sub = Substitution::default();
    match unify_literals_into(l1, l2, &mut sub) {
        true => Some(sub),
        false => None,
    }
}

/// The most general unifier of two conjunctions, literal by literal.
pub fn unify_conjunctions(c1: &Conjunction, c2: &Conjunction) -> Option<Substitution> {
    if c1.len() != c2.len() {
        return None;
    }

    let mut sub = Substitution::default();
    for (l1, l2) in c1.iter().zip(c2.iter()) {
        if !unify_literals_into(l1, l2, &mut sub) {
            return None;
        }
    }
    Some(sub)
}

/// Whether a variable occurs in a term.
pub fn occurs(variable: &Variable, term: &Term) -> bool {
    match term {
        Term::Variable(other) => variable == other,
        Term::Atom(_) => false,
        Term::List(elements) => elements.iter().any(|element| occurs(variable, element)),
    }
}

/// Folds the unification of two terms into the running substitution.
fn unify_terms(t1: &Term, t2: &Term, sub: &mut Substitution) -> bool {
    match (t1, t2) {
        (Term::Atom(a1), Term::Atom(a2)) => a1 == a2,

        (Term::Variable(variable), _) => unify_variable(variable, t2, sub),

        (_, Term::Variable(variable)) => unify_variable(variable, t1, sub),

        (Term::List(e1), Term::List(e2)) => {
            e1.len() == e2.len()
                && e1
                    .iter()
                    .zip(e2.iter())
                    .all(|(element1, element2)| unify_terms(element1, element2, sub))
        }

        _ => false,
    }
}

/// Unifies a variable with a term under the running substitution.
///
/// An already-bound variable defers to its binding.
/// Otherwise the term is resolved through the substitution, the occurs check is made, and the binding is recorded.
fn unify_variable(variable: &Variable, term: &Term, sub: &mut Substitution) -> bool {
    if let Some(bound) = sub.get(variable).cloned() {
        return unify_terms(&bound, term, sub);
    }

    let resolved = sub.apply(term);

    if let Term::Variable(other) = &resolved {
        if other == variable {
            return true;
        }
    }

    if occurs(variable, &resolved) {
        log::trace!(target: targets::UNIFICATION, "Occurs check: {variable} in {resolved}");
        return false;
    }

    log::trace!(target: targets::UNIFICATION, "Bind: {variable} to {resolved}");
    sub.bind(variable, resolved);
    true
}

/// Folds the unification of two literals into the running substitution.
fn unify_literals_into(l1: &Literal, l2: &Literal, sub: &mut Substitution) -> bool {
    l1.name() == l2.name()
        && l1.arity() == l2.arity()
        && l1.polarity() == l2.polarity()
        && l1
            .terms()
            .iter()
            .zip(l2.terms().iter())
            .all(|(term1, term2)| unify_terms(term1, term2, sub))
}
