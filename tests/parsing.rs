use hornlog::builder::tokenizer::{tokenize, TokenKind};
use hornlog::{config::Config, context::Context};

mod tokens {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .iter()
            .map(|token| token.kind)
            .collect()
    }

    #[test]
    fn a_sample_program() {
        let source = "good('Pain') :- meaningful('Pain'),
                          not(deadly('Pain')).

                      list([]).";

        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Atom,
                TokenKind::LParen,
                TokenKind::QuotedAtom,
                TokenKind::RParen,
                TokenKind::Implication,
                TokenKind::Atom,
                TokenKind::LParen,
                TokenKind::QuotedAtom,
                TokenKind::RParen,
                TokenKind::Comma,
                TokenKind::Not,
                TokenKind::LParen,
                TokenKind::Atom,
                TokenKind::LParen,
                TokenKind::QuotedAtom,
                TokenKind::RParen,
                TokenKind::RParen,
                TokenKind::Period,
                TokenKind::Atom,
                TokenKind::LParen,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::RParen,
                TokenKind::Period,
            ]
        );
    }

    #[test]
    fn keywords_against_atoms() {
        assert_eq!(kinds("not"), vec![TokenKind::Not]);
        assert_eq!(kinds("true"), vec![TokenKind::True]);
        assert_eq!(kinds("nothing"), vec![TokenKind::Atom]);
        assert_eq!(kinds("truely"), vec![TokenKind::Atom]);
    }

    #[test]
    fn wildcards_against_variables() {
        assert_eq!(kinds("_"), vec![TokenKind::Wildcard]);
        assert_eq!(kinds("_X"), vec![TokenKind::Variable]);
        assert_eq!(kinds("X1"), vec![TokenKind::Variable]);
    }

    #[test]
    fn integers_have_no_leading_zero() {
        let tokens = tokenize("0 42 007").unwrap();
        let texts: Vec<&str> = tokens.iter().map(|token| token.text.as_str()).collect();

        assert!(tokens.iter().all(|token| token.kind == TokenKind::Integer));
        assert_eq!(texts, vec!["0", "42", "0", "0", "7"]);
    }

    #[test]
    fn comments_are_stripped() {
        let source = "p(a). % a line comment
                      /* a block comment
                         % with a line comment inside
                       */
                      q(b).";

        assert_eq!(
            kinds(source),
            vec![
                TokenKind::Atom,
                TokenKind::LParen,
                TokenKind::Atom,
                TokenKind::RParen,
                TokenKind::Period,
                TokenKind::Atom,
                TokenKind::LParen,
                TokenKind::Atom,
                TokenKind::RParen,
                TokenKind::Period,
            ]
        );
    }

    #[test]
    fn an_unrecognised_character_is_invalid() {
        let result = tokenize("p(a) ? q.");

        match result {
            Err(e) => assert_eq!(e.to_string(), "Invalid syntax: ? q."),
            Ok(_) => panic!("Tokenized past an invalid character"),
        }
    }

    #[test]
    fn pipe_is_lexed() {
        assert_eq!(
            kinds("[X | T]"),
            vec![
                TokenKind::LBracket,
                TokenKind::Variable,
                TokenKind::Pipe,
                TokenKind::Variable,
                TokenKind::RBracket,
            ]
        );
    }
}

mod programs {
    use super::*;

    #[test]
    fn clauses_round_trip() {
        let mut ctx = Context::from_config(Config::default());

        let program = "p(X, Y, Z) :- q(X, Y), not(r(X, Y, Z)).\np([1, 2, X], _, X).";
        assert!(ctx.load_program(program).is_ok());

        let bucket = ctx.clause_db.clauses_named("p").unwrap();
        assert_eq!(
            bucket[0].as_text(true),
            "p(X, Y, Z) :- q(X, Y), not(r(X, Y, Z))."
        );
        assert_eq!(bucket[1].as_text(true), "p([1, 2, X], _, X).");

        // A pretty-printed clause parses back to itself.
        let reprinted = bucket[0].as_text(true);
        let mut other = Context::from_config(Config::default());
        assert!(other.load_program(&reprinted).is_ok());
        assert_eq!(
            other.clause_db.clauses_named("p").unwrap()[0].as_text(true),
            reprinted
        );
    }

    #[test]
    fn variables_are_scoped_to_their_clause() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("p(X, X). q(X, b).").is_ok());

        let p_terms = ctx.clause_db.clauses_named("p").unwrap()[0].head().terms().to_vec();
        let q_terms = ctx.clause_db.clauses_named("q").unwrap()[0].head().terms().to_vec();

        // Within a clause, one spelling is one variable.
        assert_eq!(p_terms[0], p_terms[1]);

        // Across clauses, the same spelling is a different variable.
        assert_ne!(p_terms[0], q_terms[0]);
    }

    #[test]
    fn wildcards_are_never_shared() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("p(_, _).").is_ok());

        let terms = ctx.clause_db.clauses_named("p").unwrap()[0].head().terms().to_vec();
        assert_ne!(terms[0], terms[1]);
    }
}

mod errors {
    use super::*;

    fn load_error(source: &str) -> String {
        let mut ctx = Context::from_config(Config::default());
        match ctx.load_program(source) {
            Err(e) => e.to_string(),
            Ok(()) => panic!("Parsed: {source}"),
        }
    }

    fn query_error(source: &str) -> String {
        let mut ctx = Context::from_config(Config::default());
        match ctx.parse_query(source) {
            Err(e) => e.to_string(),
            Ok(_) => panic!("Parsed: {source}"),
        }
    }

    #[test]
    fn a_goal_needs_its_period() {
        assert_eq!(query_error("p(a, b, c), q(a, b)"), "Expected PERIOD. Got EOF.");
    }

    #[test]
    fn a_clause_head_needs_arguments() {
        assert_eq!(load_error("p :- q(a)."), "Expected LPAREN. Got IMPLICATION.");
        assert_eq!(load_error("foo."), "Expected LPAREN. Got PERIOD.");
    }

    #[test]
    fn a_zero_argument_literal_must_close_the_goal() {
        assert_eq!(query_error("p, q(a)."), "Expected LPAREN. Got COMMA.");
    }

    #[test]
    fn an_unclosed_argument_list() {
        assert_eq!(load_error("q(b"), "Expected RPAREN. Got EOF.");
    }

    #[test]
    fn an_argument_must_be_a_term() {
        assert_eq!(query_error("p(:-)."), "Expected ATOM. Got IMPLICATION.");
    }
}
