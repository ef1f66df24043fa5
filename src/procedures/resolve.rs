/*!
Resolution --- SLD proof search over conjunctive goals, with negation as failure.

# Overview

A goal is proved literal by literal, left to right, threading a running substitution through the positions of the conjunction.
At each position the literal is taken under the running substitution and dispatched on its polarity:

- A positive literal collects candidate head instantiations from the clause database, and for each candidate the most general unifier with the literal is composed onto the running substitution before the next position is tried.
  Every branch is explored, so answers arrive in clause-insertion, depth-first order.
- A literal marked for negation as failure succeeds exactly when the whole subproof of its positive counterpart yields zero answers, and in that case the running substitution continues unchanged.

Roughly, the loop is as diagrammed:

```none
          +--------------------+
  +-------| next position      |<---------------------+
  |       +--------------------+                      |
  |                 |                                 |
  |                 | positive literal                | unifier composed
  |                 ⌄                                 |
  |       +--------------------+     +----------------------+
  |       | expand clauses     |---->| unify head with goal |
  |       +--------------------+     +----------------------+
  |                 |
  |                 | no functor in the database
  |                 ⌄
  |           fatal error: No such predicate
  |
  +--> end of goal: emit the running substitution
```

Candidate heads come from [query_single](crate::context::Context::query_single):
- A fact contributes the goal literal under their unifier.
- A rule whose head unifies with the goal contributes one instantiation per solution of its tail, the tail being proved under the head unifier first.

Every clause is [freshly copied](crate::structures::clause::Clause::fresh_copy) before use, so one use of a rule cannot leak bindings into another.

# Termination

Search is not guaranteed to terminate on left-recursive programs --- inherent to this style of resolution without tabling.
On programs whose proof tree is finite, the full tree is explored.
*/

use std::rc::Rc;

use crate::context::Context;
use crate::misc::log::targets::{self};
use crate::procedures::unify::unify_literals;
use crate::structures::clause::Clause;
use crate::structures::conjunction::Conjunction;
use crate::structures::literal::Literal;
use crate::structures::substitution::Substitution;
use crate::types::err::{self};

impl Context {
    /// Answers a conjunctive goal: one conjunction per successful derivation, in depth-first order.
    ///
    /// Each answer is the goal with every variable replaced under the substitution which proved it.
    /// An empty result means the goal failed, while an unknown functor is an error.
    pub fn answer_query(
        &mut self,
        goal: &Conjunction,
    ) -> Result<Vec<Conjunction>, err::ErrorKind> {
        let proofs = self.prove(goal)?;
        Ok(proofs
            .iter()
            .map(|sub| sub.apply_conjunction(goal))
            .collect())
    }

    /// Proves a conjunctive goal: one substitution per successful derivation, in depth-first order.
    pub fn prove(&mut self, goal: &Conjunction) -> Result<Vec<Substitution>, err::ErrorKind> {
        self.counters.queries += 1;
        log::debug!(target: targets::RESOLUTION, "Goal: {goal}.");

        let proofs = self.prove_from(goal, 0, &Substitution::default())?;

        self.counters.solutions += proofs.len();
        log::debug!(target: targets::RESOLUTION, "Derivations: {}", proofs.len());
        Ok(proofs)
    }

    /// Proves the goal from position `index` on, under the running substitution.
    fn prove_from(
        &mut self,
        goal: &Conjunction,
        index: usize,
        sub: &Substitution,
    ) -> Result<Vec<Substitution>, err::ErrorKind> {
        // Every literal proved: the running substitution is a derivation.
        if index == goal.len() {
            return Ok(vec![sub.clone()]);
        }

        let literal = sub.apply_literal(&goal.literals()[index]);

        match literal.polarity() {
            true => {
                // The trivial goal holds without consulting the database.
                if literal.name() == "true" && literal.arity() == 0 {
                    return self.prove_from(goal, index + 1, sub);
                }

                let mut proofs = Vec::new();

                for head in self.query_single(&literal)? {
                    let Some(unifier) = unify_literals(&head, &literal) else {
                        continue;
                    };

                    let Some(joined) = sub.compose(&unifier) else {
                        continue;
                    };

                    proofs.append(&mut self.prove_from(goal, index + 1, &joined)?);
                }

                Ok(proofs)
            }

            false => {
                if self.config.ground_negation && !literal.is_ground() {
                    return Err(err::ResolutionError::UngroundNegation(literal.to_string()).into());
                }

                // Negation as finite failure: the whole positive subproof must yield nothing.
                let positive = Conjunction::new(vec![literal.positive()]);
                let refutations = self.prove_from(&positive, 0, &Substitution::default())?;

                match refutations.is_empty() {
                    true => self.prove_from(goal, index + 1, sub),
                    false => Ok(Vec::new()),
                }
            }
        }
    }

    /// The head instantiations under which a positive goal literal succeeds, one per derivation.
    ///
    /// A functor heading no clause in the database is a fatal error rather than a silent failure --- this is what surfaces typos in queries.
    pub fn query_single(&mut self, goal: &Literal) -> Result<Vec<Literal>, err::ErrorKind> {
        let Some(bucket) = self.clause_db.clauses_named(goal.name()) else {
            log::debug!(target: targets::RESOLUTION, "Unknown predicate: {}\\{}", goal.name(), goal.arity());
            return Err(err::ResolutionError::UnknownPredicate {
                name: goal.name().to_string(),
                arity: goal.arity(),
            }
            .into());
        };

        let candidates: Vec<Rc<Clause>> = bucket.to_vec();
        let mut heads = Vec::new();

        for candidate in candidates {
            match candidate.fresh_copy(&mut self.counters) {
                Clause::Fact(fact) => {
                    if let Some(unifier) = unify_literals(&fact, goal) {
                        heads.push(unifier.apply_literal(goal));
                    }
                }

                Clause::Rule { head, tail } => {
                    let Some(head_unifier) = unify_literals(&head, goal) else {
                        continue;
                    };

                    let head = head_unifier.apply_literal(&head);
                    let tail = head_unifier.apply_conjunction(&tail);

                    for tail_sub in self.prove_from(&tail, 0, &Substitution::default())? {
                        if let Some(full) = head_unifier.compose(&tail_sub) {
                            heads.push(full.apply_literal(&head));
                        }
                    }
                }
            }
        }

        log::trace!(target: targets::RESOLUTION, "{} instantiations for {goal}", heads.len());
        Ok(heads)
    }
}
