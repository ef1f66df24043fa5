/*!
Configuration of a context.

All configuration for a context is contained within the context, set either before use or by mutating [Config] through the context.

There are few options, as most behaviour of the interpreter is fixed:
- Clauses are tried in the order they were added, and literals left to right.
- The occurs check is always made --- soundness over performance.
*/

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// Whether negation as failure may only be applied to a ground literal.
    ///
    /// Negation as failure is sound when the negated literal is ground under the running substitution.
    /// - When `true`, negation of a literal with unbound variables is a resolution error.
    /// - When `false`, the negation is answered regardless, matching the traditional (unsound) behaviour of interpreters in this family.
    pub ground_negation: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            ground_negation: false,
        }
    }
}
