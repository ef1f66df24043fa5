/*!
Miscellaneous items related to [logging](log).

Calls to the log macro are made throughout the library.
These are intended to provide useful information for extending the library and/or fixing issues.

Note, no log implementation is provided.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to the [tokenizer](crate::builder::tokenizer)
    pub const TOKENIZER: &str = "tokenizer";

    /// Logs related to the [parser](crate::builder::parser)
    pub const PARSER: &str = "parser";

    /// Logs related to the [clause database](crate::db)
    pub const CLAUSE_DB: &str = "clause_db";

    /// Logs related to [unification](crate::procedures::unify)
    pub const UNIFICATION: &str = "unification";

    /// Logs related to [resolution](crate::procedures::resolve)
    pub const RESOLUTION: &str = "resolution";
}
