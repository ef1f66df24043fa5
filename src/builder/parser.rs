/*!
The parser --- recursive descent over a token stream, with a single cursor.

Grammar, roughly:

```none
program     = { clause }
clause      = fact | rule
fact        = predicate "."
rule        = predicate ":-" goal
goal        = literal { "," literal } "."
literal     = predicate | "not" "(" predicate ")" | "true"
predicate   = ATOM [ "(" argument { "," argument } ")" ]
argument    = VARIABLE | WILDCARD | ATOM | QUOTED_ATOM | INTEGER | list
list        = "[" [ argument { "," argument } ] "]"
```

A clause is parsed speculatively: first as a fact, and on failure the cursor is rewound and the tokens are parsed as a rule.

A predicate without a parenthesised argument list denotes a zero-argument literal, permitted in goals only --- a clause head must carry arguments, and `true` may not head a clause as the keyword is not an `ATOM` token.

# Variable scope

Within one clause (or one query), every occurrence of a variable name denotes the same logical variable, so the parser keeps a per-clause map from spelling to identity.
The wildcard `_` is never scoped: each occurrence is a fresh variable.
Identities are drawn from the counters of the context, which keeps parsed variables apart from the renamed copies resolution makes later.

# Errors

Errors report the expected against the found token kind, with `EOF` when the stream is exhausted, e.g. `Expected PERIOD. Got EOF.`.
*/

use std::collections::HashMap;

use crate::builder::tokenizer::{Token, TokenKind};
use crate::context::Counters;
use crate::db::ClauseDB;
use crate::misc::log::targets::{self};
use crate::structures::clause::Clause;
use crate::structures::conjunction::Conjunction;
use crate::structures::literal::Literal;
use crate::structures::term::{Atom, Term, Variable};
use crate::types::err::{self};

/// A recursive-descent parser over a token stream.
pub struct Parser<'a> {
    tokens: Vec<Token>,
    cursor: usize,

    /// The spelling-to-identity map of the clause being parsed.
    scope: HashMap<String, Variable>,

    /// The counters of the context, for minting variable identities.
    counters: &'a mut Counters,
}

impl<'a> Parser<'a> {
    /// A parser over the given tokens, minting variables from the given counters.
    pub fn new(tokens: Vec<Token>, counters: &'a mut Counters) -> Self {
        Parser {
            tokens,
            cursor: 0,
            scope: HashMap::new(),
            counters,
        }
    }

    /// The kind of the token at the cursor, or [None] at the end of the stream.
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    /// Whether the token at the cursor has the given kind.
    fn at(&self, kind: TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    /// Consumes the token at the cursor, which must have the given kind, and returns its text.
    fn expect(&mut self, kind: TokenKind) -> Result<String, err::ParseError> {
        match self.tokens.get(self.cursor) {
            Some(token) if token.kind == kind => {
                self.cursor += 1;
                Ok(token.text.clone())
            }

            Some(token) => Err(err::ParseError::Expected {
                expected: kind,
                found: Some(token.kind),
            }),

            None => Err(err::ParseError::Expected {
                expected: kind,
                found: None,
            }),
        }
    }

    /// Parses every clause of a program into a fresh database, in source order.
    pub fn parse_program(&mut self) -> Result<ClauseDB, err::ParseError> {
        let mut db = ClauseDB::default();

        while self.cursor < self.tokens.len() {
            let clause = self.parse_clause()?;
            log::debug!(target: targets::PARSER, "Clause: {}", clause.as_text(true));
            db.add_clause(clause);
        }

        Ok(db)
    }

    /// Parses one clause: speculatively a fact, rewinding to a rule on failure.
    pub fn parse_clause(&mut self) -> Result<Clause, err::ParseError> {
        self.scope.clear();
        let rewind = self.cursor;

        match self.parse_fact() {
            Ok(fact) => Ok(Clause::Fact(fact)),

            Err(_) => {
                self.cursor = rewind;
                self.scope.clear();
                self.parse_rule()
            }
        }
    }

    /// `predicate "."`
    fn parse_fact(&mut self) -> Result<Literal, err::ParseError> {
        let head = self.parse_head()?;
        self.expect(TokenKind::Period)?;
        Ok(head)
    }

    /// `predicate ":-" goal` --- the goal consumes the terminating period.
    fn parse_rule(&mut self) -> Result<Clause, err::ParseError> {
        let head = self.parse_head()?;
        self.expect(TokenKind::Implication)?;
        let tail = self.parse_goal()?;
        Ok(Clause::Rule { head, tail })
    }

    /// A clause head: a positive predicate with a parenthesised argument list.
    fn parse_head(&mut self) -> Result<Literal, err::ParseError> {
        let name = self.expect(TokenKind::Atom)?;
        self.expect(TokenKind::LParen)?;
        let terms = self.parse_arguments()?;
        self.expect(TokenKind::RParen)?;
        Ok(Literal::new(name, terms))
    }

    /// A goal: literals separated by commas, terminated by a period (consumed).
    pub fn parse_goal(&mut self) -> Result<Conjunction, err::ParseError> {
        let mut literals = vec![self.parse_literal()?];

        while self.at(TokenKind::Comma) {
            self.cursor += 1;
            literals.push(self.parse_literal()?);
        }

        self.expect(TokenKind::Period)?;
        Ok(Conjunction::new(literals))
    }

    /// A goal literal: a predicate, a negation, or the trivial goal `true`.
    fn parse_literal(&mut self) -> Result<Literal, err::ParseError> {
        if self.at(TokenKind::Not) {
            self.cursor += 1;
            self.expect(TokenKind::LParen)?;
            let predicate = self.parse_predicate()?;
            self.expect(TokenKind::RParen)?;
            return Ok(predicate.negate());
        }

        if self.at(TokenKind::True) {
            self.cursor += 1;
            return Ok(Literal::new("true", Vec::new()));
        }

        self.parse_predicate()
    }

    /// A predicate, with a zero-argument literal permitted only where the grammar closes it off.
    fn parse_predicate(&mut self) -> Result<Literal, err::ParseError> {
        let name = self.expect(TokenKind::Atom)?;

        if self.at(TokenKind::LParen) {
            self.cursor += 1;
            let terms = self.parse_arguments()?;
            self.expect(TokenKind::RParen)?;
            return Ok(Literal::new(name, terms));
        }

        // Without arguments the literal must be closed off immediately.
        match self.peek() {
            Some(TokenKind::Period) | Some(TokenKind::RParen) | None => {
                Ok(Literal::new(name, Vec::new()))
            }

            found => Err(err::ParseError::Expected {
                expected: TokenKind::LParen,
                found,
            }),
        }
    }

    /// `argument { "," argument }`
    fn parse_arguments(&mut self) -> Result<Vec<Term>, err::ParseError> {
        let mut terms = vec![self.parse_argument()?];

        while self.at(TokenKind::Comma) {
            self.cursor += 1;
            terms.push(self.parse_argument()?);
        }

        Ok(terms)
    }

    /// A single argument: a variable, a wildcard, an atom, an integer, or a list.
    fn parse_argument(&mut self) -> Result<Term, err::ParseError> {
        match self.peek() {
            Some(TokenKind::Variable) => {
                let name = self.expect(TokenKind::Variable)?;
                let variable = match self.scope.get(&name) {
                    Some(seen) => seen.clone(),

                    None => {
                        let fresh = self.counters.fresh_variable(&name);
                        self.scope.insert(name, fresh.clone());
                        fresh
                    }
                };
                Ok(Term::Variable(variable))
            }

            Some(TokenKind::Wildcard) => {
                self.cursor += 1;
                Ok(Term::Variable(self.counters.fresh_variable("_")))
            }

            Some(TokenKind::Atom) => Ok(Term::Atom(Atom::new(self.expect(TokenKind::Atom)?))),

            Some(TokenKind::QuotedAtom) => {
                Ok(Term::Atom(Atom::new(self.expect(TokenKind::QuotedAtom)?)))
            }

            Some(TokenKind::Integer) => {
                Ok(Term::Atom(Atom::new(self.expect(TokenKind::Integer)?)))
            }

            Some(TokenKind::LBracket) => self.parse_list(),

            found => Err(err::ParseError::Expected {
                expected: TokenKind::Atom,
                found,
            }),
        }
    }

    /// `"[" [ argument { "," argument } ] "]"`
    fn parse_list(&mut self) -> Result<Term, err::ParseError> {
        self.expect(TokenKind::LBracket)?;

        if self.at(TokenKind::RBracket) {
            self.cursor += 1;
            return Ok(Term::List(Vec::new()));
        }

        let elements = self.parse_arguments()?;
        self.expect(TokenKind::RBracket)?;
        Ok(Term::List(elements))
    }
}
