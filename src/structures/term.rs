/*!
(The internal representation of) terms --- variables, atoms, and lists.

Broadly, terms are the things literals are applied to, and the things substitutions map variables to.

Each [Variable] carries an identity in the form of an integer id, and it is the id --- never the name --- which settles equality, hashing, and substitution lookups.
Two variables spelt `X` from different clause instantiations are different logical variables, and two occurrences of `X` within one clause share an id.
Ids are drawn from a monotonic counter held by the [Counters](crate::context::Counters) of a context, so a variable introduced while renaming a clause can never collide with a user-written one.

An [Atom] is a symbolic constant, equal to another atom when their names agree modulo an optional pair of surrounding single quotes: `a` and `'a'` are the same atom.
Integer literals are carried as atoms --- the interpreter performs no arithmetic reduction.

A [List] is an ordered, finite sequence of terms, nested arbitrarily.
Lists serve both as list literals of the language and as the argument tuple of a [Literal](crate::structures::literal::Literal).

# Example

```rust
# use hornlog::structures::term::{Atom, Term, Variable};
let x = Variable::new(0, "X");
let also_x = Variable::new(0, "Y");
let other_x = Variable::new(1, "X");

// Identity governs equality, not spelling.
assert_eq!(x, also_x);
assert_ne!(x, other_x);

// Atoms tolerate one level of surrounding quotes.
assert_eq!(Atom::new("pesho"), Atom::new("'pesho'"));
assert_ne!(Atom::new("a"), Atom::new("b"));

let list = Term::List(vec![Term::Atom(Atom::new("a")), Term::Variable(x)]);
assert_eq!(list.to_string(), "[a, X]");
```
*/

use std::hash::{Hash, Hasher};

/// The identity of a variable.
pub type VariableId = u64;

/// A first-order variable: a printable name paired with a distinct identity.
#[derive(Clone, Debug)]
pub struct Variable {
    id: VariableId,
    name: String,
}

impl Variable {
    /// A variable with the given id and name.
    pub fn new(id: VariableId, name: impl Into<String>) -> Self {
        Variable {
            id,
            name: name.into(),
        }
    }

    /// The identity of the variable.
    pub fn id(&self) -> VariableId {
        self.id
    }

    /// The name of the variable, as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the variable was written as the wildcard `_`.
    pub fn is_wildcard(&self) -> bool {
        self.name == "_"
    }
}

impl PartialEq for Variable {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Variable {}

impl Hash for Variable {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A symbolic constant, aka. an atom.
#[derive(Clone, Debug)]
pub struct Atom {
    name: String,
}

impl Atom {
    /// An atom with the given name, quoted or not.
    pub fn new(name: impl Into<String>) -> Self {
        Atom { name: name.into() }
    }

    /// The name of the atom, as written.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name of the atom with one level of surrounding single quotes removed, if present.
    fn base(&self) -> &str {
        let name = self.name.as_str();
        if name.len() >= 2 && name.starts_with('\'') && name.ends_with('\'') {
            &name[1..name.len() - 1]
        } else {
            name
        }
    }
}

impl PartialEq for Atom {
    fn eq(&self, other: &Self) -> bool {
        self.base() == other.base()
    }
}

impl Eq for Atom {}

// Hash must agree with the quote-tolerant equality, so the base name is hashed.
impl Hash for Atom {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.base().hash(state);
    }
}

impl std::fmt::Display for Atom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A term: a variable, an atom, or a list of terms.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Term {
    /// A variable.
    Variable(Variable),

    /// An atom.
    Atom(Atom),

    /// An ordered, finite sequence of terms.
    List(Vec<Term>),
}

impl Term {
    /// Whether the term contains no variables.
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Atom(_) => true,
            Term::List(elements) => elements.iter().all(Term::is_ground),
        }
    }

    /// Appends every variable of the term to `found`, in order of occurrence.
    pub fn variables(&self, found: &mut Vec<Variable>) {
        match self {
            Term::Variable(v) => found.push(v.clone()),
            Term::Atom(_) => {}
            Term::List(elements) => {
                for element in elements {
                    element.variables(found);
                }
            }
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Variable(v) => v.fmt(f),
            Term::Atom(a) => a.fmt(f),
            Term::List(elements) => {
                write!(f, "[")?;
                for (index, element) in elements.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    element.fmt(f)?;
                }
                write!(f, "]")
            }
        }
    }
}
