/*!
A library for answering queries against pure Horn-clause programs.

hornlog is an interpreter for a small language in the Prolog family.
A *program* is a collection of clauses --- facts and rules --- and a *query* is a conjunction of literals.
Given both, the library returns every substitution under which the query is a logical consequence of the program, found by SLD resolution extended with negation as failure.

hornlog is developed to help anyone curious about logic programming to investigate how an interpreter of this kind fits together, whether as a novice or through experimenting with the pieces.

Some guiding principles of hornlog are:
- Modularity, with interaction between parts through documented access points.
- Documentation, of both implementation and theory.
- Soundness over performance --- notably, the occurs check is always made.

# Orientation

The library is designed around the core structure of a [context](crate::context).

A program is added to a context from its [textual representation](crate::builder), and queries are put to the context either as [text](crate::context::Context::answer) or [programmatically](crate::procedures).

Internally, and at a high level, answering a query is viewed in terms of a handful of structures:
- The program is stored in a [clause database](crate::db), keyed by the name of the head of each clause.
- A proof in progress is a position in a conjunction together with a [substitution](crate::structures::substitution).
- [Unification](crate::procedures::unify) extends substitutions, and [resolution](crate::procedures::resolve) drives unification across the clauses of the database.

Useful starting points, then, may be:
- The [structures] to familiarise yourself with the elements of a program (terms, literals, clauses, etc.)
- The high-level [resolution procedure](crate::procedures::resolve) to inspect the dynamics of answering a query.
- The [reports](crate::reports) to see the textual envelope handed to a frontend.

# Examples

+ Load a program of facts and collect every answer to an open query.

```rust
# use hornlog::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

let program = "
    parent('Maria', 'Gosho').
    parent('Maria', 'Ana').
    parent('Gosho', 'Pesho').
";

assert!(ctx.load_program(program).is_ok());

let report = ctx.answer("parent(X, Y).");
assert_eq!(
    report.to_string(),
    "true.
X = 'Maria', Y = 'Gosho'
X = 'Maria', Y = 'Ana'
X = 'Gosho', Y = 'Pesho'"
);
```

+ Chain a rule through a conjunction, with negation as failure.

```rust
# use hornlog::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

let program = "
    parent(pesho, gosho).
    parent(gosho, ana).
    grandparent(X, Z) :- parent(X, Y), parent(Y, Z).
";

assert!(ctx.load_program(program).is_ok());

assert_eq!(ctx.answer("grandparent(G, ana).").to_string(), "true.\nG = pesho");
assert_eq!(ctx.answer("parent(ana, X).").to_string(), "false.");
assert_eq!(ctx.answer("not(parent(ana, ana)).").to_string(), "true.");
```

+ A typo in a query is surfaced as an error rather than a silent failure.

```rust
# use hornlog::{config::Config, context::Context};
let mut ctx = Context::from_config(Config::default());

assert!(ctx.load_program("parent(a, b).").is_ok());

let report = ctx.answer("ancestor.");
assert_eq!(report.to_string(), "In query: No such predicate: ancestor\\0");
```

# Logs

To help diagnose issues, calls to [log!](log) are made throughout the library, and a variety of targets are defined in order to narrow output to relevant parts.
As logging is only built on request, and further can be requested by level, logs are verbose.

The targets are listed in [misc::log].

For example, when used with [env_logger](https://docs.rs/env_logger/latest/env_logger/):
- Logs related to the [clause database](crate::db) can be filtered with `RUST_LOG=clause_db …` or,
- Logs following each resolution step can be found with `RUST_LOG=resolution=trace …`
*/

#![allow(clippy::collapsible_else_if)]
#![allow(clippy::single_match)]

pub mod builder;
pub mod procedures;

pub mod config;
pub mod context;
pub mod structures;
pub mod types;

pub mod reports;

pub mod db;

pub mod misc;
