/*!
A database of clauses --- the knowledge base a context answers queries against.

Clauses are bucketed by the functor name of their head, and within a bucket the insertion order is kept: resolution tries clauses in the order the program wrote them.
A clause is stored only under its head name, so lookup by any other name returns nothing.

The database is built once per program load and treated as read-only while queries are answered.
Clauses are shared by reference count, as one resolution step may hold a bucket while deeper steps read others.

Fields of the database are private to ensure the use of methods which may be needed to uphold invariants.
*/

use std::collections::HashMap;
use std::rc::Rc;

use crate::misc::log::targets::{self};
use crate::structures::clause::Clause;

/// A database of clauses, bucketed by head functor name.
#[derive(Clone, Debug, Default)]
pub struct ClauseDB {
    /// Buckets of clauses, in insertion order.
    buckets: HashMap<String, Vec<Rc<Clause>>>,

    /// A count of every clause added.
    clause_count: usize,
}

impl ClauseDB {
    /// Adds a clause to the database, under the functor name of its head.
    pub fn add_clause(&mut self, clause: Clause) {
        log::debug!(target: targets::CLAUSE_DB, "Added: {}", clause.as_text(true));

        self.buckets
            .entry(clause.name().to_string())
            .or_default()
            .push(Rc::new(clause));
        self.clause_count += 1;
    }

    /// The clauses whose head has the given functor name, in insertion order.
    /// [None] when no clause has been stored under the name.
    pub fn clauses_named(&self, name: &str) -> Option<&[Rc<Clause>]> {
        self.buckets.get(name).map(|bucket| bucket.as_slice())
    }

    /// The count of every clause in the database.
    pub fn clause_count(&self) -> usize {
        self.clause_count
    }

    /// The count of distinct head functor names in the database.
    pub fn predicate_count(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the database holds no clauses.
    pub fn is_empty(&self) -> bool {
        self.clause_count == 0
    }

    /// An iterator over every clause of the database, without order across buckets.
    pub fn all_clauses(&self) -> impl Iterator<Item = &Rc<Clause>> {
        self.buckets.values().flatten()
    }
}
