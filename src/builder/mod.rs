/*!
Tools for building the program of a context.

# Basic methods

The library has two basic methods for putting clauses into a context:
- [load_program](crate::context::Context::load_program), to read a whole program from its textual representation.
- [add_clause](crate::context::Context::add_clause), to add a clause built programmatically.

Loading a program tokenizes and parses the source, and on success *replaces* the clause database of the context.
On failure the database is left as it was, and the error notes what went wrong, e.g. `Expected PERIOD. Got EOF.` --- a frontend wraps this in the `In knowledge base: …` envelope via a [Report](crate::reports::Report).

Queries go through the same machinery: [parse_query](crate::context::Context::parse_query) yields the conjunction a goal text denotes.

# Examples

A program loaded from source.

```rust
# use hornlog::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

assert!(ctx.load_program("parent(pesho, gosho). parent(gosho, ana).").is_ok());
assert_eq!(ctx.clause_db.clause_count(), 2);
assert_eq!(ctx.clause_db.predicate_count(), 1);
```

A clause built from structures directly.

```rust
# use hornlog::{config::Config, context::Context};
# use hornlog::structures::clause::Clause;
# use hornlog::structures::literal::Literal;
# use hornlog::structures::term::{Atom, Term};
let mut ctx = Context::from_config(Config::default());

let fact = Literal::new("parent", vec![Term::Atom(Atom::new("a")), Term::Atom(Atom::new("b"))]);
ctx.add_clause(Clause::Fact(fact));

assert_eq!(ctx.answer("parent(a, X).").to_string(), "true.\nX = b");
```
*/

pub mod parser;
pub mod tokenizer;

use crate::builder::parser::Parser;
use crate::builder::tokenizer::tokenize;
use crate::context::Context;
use crate::misc::log::targets::{self};
use crate::structures::clause::Clause;
use crate::structures::conjunction::Conjunction;
use crate::types::err::{self};

impl Context {
    /// Tokenizes and parses a program, replacing the clause database of the context.
    ///
    /// The database is untouched when the source fails to tokenize or parse.
    pub fn load_program(&mut self, source: &str) -> Result<(), err::ErrorKind> {
        let tokens = tokenize(source)?;

        let db = {
            let mut parser = Parser::new(tokens, &mut self.counters);
            parser.parse_program()?
        };

        log::info!(
            target: targets::CLAUSE_DB,
            "Loaded {} clauses over {} predicates",
            db.clause_count(),
            db.predicate_count()
        );

        self.clause_db = db;
        Ok(())
    }

    /// Adds a single clause to the database of the context.
    pub fn add_clause(&mut self, clause: Clause) {
        self.clause_db.add_clause(clause);
    }

    /// Tokenizes and parses a query text into the conjunction it denotes.
    pub fn parse_query(&mut self, source: &str) -> Result<Conjunction, err::ErrorKind> {
        let tokens = tokenize(source)?;

        let mut parser = Parser::new(tokens, &mut self.counters);
        let goal = parser.parse_goal()?;

        log::debug!(target: targets::PARSER, "Query: {goal}.");
        Ok(goal)
    }
}
