/*!
Clauses --- facts and rules, the units of a program.

The canonical textual representation of a clause is as written in source, with the terminating period as optional:

```rust
# use hornlog::structures::clause::Clause;
# use hornlog::structures::conjunction::Conjunction;
# use hornlog::structures::literal::Literal;
# use hornlog::structures::term::{Term, Variable};
let head = Literal::new("mortal", vec![Term::Variable(Variable::new(0, "X"))]);
let tail = Conjunction::new(vec![Literal::new("man", vec![Term::Variable(Variable::new(0, "X"))])]);
let clause = Clause::Rule { head, tail };

assert_eq!(clause.name(), "mortal");
assert_eq!(clause.as_text(true), "mortal(X) :- man(X).");
```

# Renaming

A clause is stored with the variable ids its source was parsed with, and those ids are shared across every use of the clause.
Before a clause takes part in a resolution step it must be [freshly copied](Clause::fresh_copy): every variable is consistently re-identified through a clause-wide map, with new ids drawn from the counters of the context.
This is what lets one rule match many goals without the bindings of one use leaking into another.
*/

use std::collections::HashMap;

use crate::context::Counters;
use crate::structures::conjunction::Conjunction;
use crate::structures::literal::Literal;
use crate::structures::term::{Term, Variable, VariableId};

/// A clause: a fact, or a rule made of a head and a tail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Clause {
    /// A positive literal, asserted true.
    Fact(Literal),

    /// A head literal which holds whenever every literal of the tail does.
    Rule {
        /// The positive literal the rule concludes.
        head: Literal,

        /// The conjunction to prove, left to right.
        tail: Conjunction,
    },
}

impl Clause {
    /// The functor name of the clause's head, under which the clause is stored.
    pub fn name(&self) -> &str {
        self.head().name()
    }

    /// The head literal of the clause.
    pub fn head(&self) -> &Literal {
        match self {
            Clause::Fact(fact) => fact,
            Clause::Rule { head, .. } => head,
        }
    }

    /// A copy of the clause with every variable re-identified.
    ///
    /// Occurrences of one variable stay shared within the copy, and no variable of the copy is shared with any other clause instantiation.
    pub fn fresh_copy(&self, counters: &mut Counters) -> Clause {
        let mut renamed: HashMap<VariableId, Variable> = HashMap::new();

        match self {
            Clause::Fact(fact) => Clause::Fact(rename_literal(fact, &mut renamed, counters)),

            Clause::Rule { head, tail } => Clause::Rule {
                head: rename_literal(head, &mut renamed, counters),
                tail: Conjunction::new(
                    tail.iter()
                        .map(|literal| rename_literal(literal, &mut renamed, counters))
                        .collect(),
                ),
            },
        }
    }

    /// A string of the clause as written in source, with the terminating period as optional.
    pub fn as_text(&self, period: bool) -> String {
        let text = match self {
            Clause::Fact(fact) => fact.to_string(),
            Clause::Rule { head, tail } => format!("{head} :- {tail}"),
        };

        match period {
            true => format!("{text}."),
            false => text,
        }
    }
}

impl std::fmt::Display for Clause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_text(true))
    }
}

/// The literal with its terms renamed through `renamed`, minting ids for variables not yet seen.
fn rename_literal(
    literal: &Literal,
    renamed: &mut HashMap<VariableId, Variable>,
    counters: &mut Counters,
) -> Literal {
    let terms = literal
        .terms()
        .iter()
        .map(|term| rename_term(term, renamed, counters))
        .collect();

    match literal.polarity() {
        true => Literal::new(literal.name(), terms),
        false => Literal::negative(literal.name(), terms),
    }
}

fn rename_term(
    term: &Term,
    renamed: &mut HashMap<VariableId, Variable>,
    counters: &mut Counters,
) -> Term {
    match term {
        Term::Variable(variable) => {
            let fresh = renamed
                .entry(variable.id())
                .or_insert_with(|| counters.fresh_variable(variable.name()));
            Term::Variable(fresh.clone())
        }

        Term::Atom(_) => term.clone(),

        Term::List(elements) => Term::List(
            elements
                .iter()
                .map(|element| rename_term(element, renamed, counters))
                .collect(),
        ),
    }
}
