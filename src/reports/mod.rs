/*!
Reports for a frontend.

A [Report] is the stringly-typed envelope the core hands outward: the [Display](std::fmt::Display) implementation produces exactly the text a frontend shows.

- An answer with no derivations is the single line `false.`.
- An answer with derivations is the line `true.` followed by one line per derivation of the form `X = t, Y = u`, listing the user-written variables of the query in first-mention order with wildcards excluded.
  A variable left unbound by a derivation is printed as itself, and a derivation of a query without variables adds no line.
- Errors are wrapped as `In knowledge base: …` or `In query: …` depending on which operation raised them.

# Example

```rust
# use hornlog::config::Config;
# use hornlog::context::Context;
# use hornlog::reports::Report;
let mut ctx = Context::from_config(Config::default());

let report = match ctx.load_program("p(a") {
    Ok(()) => unreachable!(),
    Err(e) => Report::KnowledgeBase(e),
};

assert_eq!(report.to_string(), "In knowledge base: Expected RPAREN. Got EOF.");
```
*/

use crate::structures::conjunction::Conjunction;
use crate::structures::substitution::Substitution;
use crate::structures::term::Term;
use crate::types::err::ErrorKind;

/// High-level reports regarding a load or a query.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Report {
    /// The answer to a query.
    Answer(Answer),

    /// An error while loading a program.
    KnowledgeBase(ErrorKind),

    /// An error while answering a query.
    Query(ErrorKind),
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Answer(answer) => answer.fmt(f),
            Self::KnowledgeBase(e) => write!(f, "In knowledge base: {e}"),
            Self::Query(e) => write!(f, "In query: {e}"),
        }
    }
}

/// The answer to a query: the bindings of the query's variables, one row per derivation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Answer {
    /// Per derivation, the (name, bound term) pairs of the query's variables.
    derivations: Vec<Vec<(String, Term)>>,
}

impl Answer {
    /// The answer given by the derivations of a goal.
    ///
    /// The variables reported are those of the goal, in first-mention order, wildcards excluded.
    pub fn new(goal: &Conjunction, proofs: &[Substitution]) -> Self {
        let variables = goal.variables();

        let derivations = proofs
            .iter()
            .map(|sub| {
                variables
                    .iter()
                    .map(|variable| {
                        let bound = sub.apply(&Term::Variable(variable.clone()));
                        (variable.name().to_string(), bound)
                    })
                    .collect()
            })
            .collect();

        Answer { derivations }
    }

    /// Whether the query held, i.e. whether there was at least one derivation.
    pub fn is_true(&self) -> bool {
        !self.derivations.is_empty()
    }

    /// Per derivation, the (name, bound term) pairs of the query's variables.
    pub fn derivations(&self) -> &[Vec<(String, Term)>] {
        &self.derivations
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.derivations.is_empty() {
            return write!(f, "false.");
        }

        write!(f, "true.")?;

        for derivation in &self.derivations {
            if derivation.is_empty() {
                continue;
            }

            write!(f, "\n")?;
            for (index, (name, term)) in derivation.iter().enumerate() {
                if index > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{name} = {term}")?;
            }
        }

        Ok(())
    }
}
