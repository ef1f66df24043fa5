/*!
The context --- to which a program is added and against which queries are answered.

A context owns the [configuration](crate::config), the [counters](Counters), and the [clause database](crate::db).
The database is built once per [program load](crate::context::Context::load_program) and read-only while queries are answered, and answering is single-threaded, synchronous, and free of I/O.

# Example

```rust
# use hornlog::config::Config;
# use hornlog::context::Context;
let mut ctx = Context::from_config(Config::default());

assert!(ctx.load_program("p(a). p(b).").is_ok());

assert_eq!(ctx.answer("p(X), not(p(c)).").to_string(), "true.\nX = a\nX = b");
assert_eq!(ctx.answer("p(c).").to_string(), "false.");
```
*/

mod counters;
pub use counters::Counters;

use crate::config::Config;
use crate::db::ClauseDB;
use crate::reports::{Answer, Report};

/// The context: configuration, counters, and the clause database.
pub struct Context {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to the context, including the fresh-variable supply.
    pub counters: Counters,

    /// The clause database.
    pub clause_db: ClauseDB,
}

impl Context {
    /// Creates a context from some given configuration, with an empty database.
    pub fn from_config(config: Config) -> Self {
        Context {
            config,
            counters: Counters::default(),
            clause_db: ClauseDB::default(),
        }
    }

    /// Answers a query text, wrapping the outcome for a frontend.
    ///
    /// The report is the answer on success, and otherwise carries whichever error ended the attempt, in the `In query: …` envelope.
    pub fn answer(&mut self, query: &str) -> Report {
        let goal = match self.parse_query(query) {
            Ok(goal) => goal,
            Err(e) => return Report::Query(e),
        };

        let proofs = match self.prove(&goal) {
            Ok(proofs) => proofs,
            Err(e) => return Report::Query(e),
        };

        Report::Answer(Answer::new(&goal, &proofs))
    }
}
