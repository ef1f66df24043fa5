use crate::structures::term::{Variable, VariableId};

/// Counts for various things which count, roughly.
///
/// The variable count doubles as the fresh-variable supply: every variable of the context --- parsed or renamed --- draws its identity here, so no two instantiations ever share one.
#[derive(Debug, Default)]
pub struct Counters {
    /// A count of every variable identity minted.
    pub variables: VariableId,

    /// A count of every top-level goal proved.
    pub queries: usize,

    /// A count of every derivation found.
    pub solutions: usize,
}

impl Counters {
    /// A variable with a fresh identity and the given name.
    pub fn fresh_variable(&mut self, name: &str) -> Variable {
        let variable = Variable::new(self.variables, name);
        self.variables += 1;
        variable
    }
}
