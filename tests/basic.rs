use hornlog::{config::Config, context::Context};

mod basic {
    use super::*;

    #[test]
    fn facts_open_query() {
        let mut ctx = Context::from_config(Config::default());

        let program = "
            parent('Maria', 'Gosho').
            parent('Maria', 'Ana').
            parent('Gosho', 'Pesho').
        ";
        assert!(ctx.load_program(program).is_ok());

        assert_eq!(
            ctx.answer("parent(X, Y).").to_string(),
            "true.\nX = 'Maria', Y = 'Gosho'\nX = 'Maria', Y = 'Ana'\nX = 'Gosho', Y = 'Pesho'"
        );
    }

    #[test]
    fn conjunction_chains_bindings() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(pesho, gosho). parent(gosho, ana).").is_ok());

        assert_eq!(
            ctx.answer("parent(X, Y), parent(Y, Z).").to_string(),
            "true.\nX = pesho, Y = gosho, Z = ana"
        );
    }

    #[test]
    fn unknown_predicate_is_an_error() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(pesho, gosho). parent(gosho, ana).").is_ok());

        assert_eq!(
            ctx.answer("ancestor.").to_string(),
            "In query: No such predicate: ancestor\\0"
        );
    }

    #[test]
    fn no_derivation_is_false() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(a, b).").is_ok());

        assert_eq!(ctx.answer("parent(b, a).").to_string(), "false.");
    }

    #[test]
    fn negation_as_failure_leaves_bindings_alone() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("p(a). p(b).").is_ok());

        assert_eq!(ctx.answer("p(X), not(p(c)).").to_string(), "true.\nX = a\nX = b");
    }

    #[test]
    fn occurs_check_fails_cyclic_binding() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("eq(X, X).").is_ok());

        assert_eq!(ctx.answer("eq(Y, [f, Y]).").to_string(), "false.");
    }
}

mod ground_queries {
    use super::*;

    #[test]
    fn ground_success_is_a_bare_true() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(a, b).").is_ok());

        assert_eq!(ctx.answer("parent(a, b).").to_string(), "true.");
    }

    #[test]
    fn the_trivial_goal_holds() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(a, b).").is_ok());

        assert_eq!(ctx.answer("true.").to_string(), "true.");
        assert_eq!(ctx.answer("parent(a, b), true.").to_string(), "true.");
    }

    #[test]
    fn wildcards_are_not_reported() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(a, b). parent(a, c).").is_ok());

        // Two derivations, but no binding lines: the only variable is a wildcard.
        assert_eq!(ctx.answer("parent(a, _).").to_string(), "true.");
    }
}

mod answers {
    use super::*;

    use hornlog::reports::Report;
    use hornlog::structures::term::{Atom, Term};

    #[test]
    fn the_structured_answer_backs_the_text() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(a, b). parent(a, c).").is_ok());

        let report = ctx.answer("parent(a, X).");
        let Report::Answer(answer) = report else {
            panic!("No answer for parent(a, X).");
        };

        assert!(answer.is_true());
        assert_eq!(answer.derivations().len(), 2);

        assert_eq!(
            answer.derivations()[0],
            vec![("X".to_string(), Term::Atom(Atom::new("b")))]
        );
        assert_eq!(
            answer.derivations()[1],
            vec![("X".to_string(), Term::Atom(Atom::new("c")))]
        );
    }

    #[test]
    fn a_failed_query_has_no_derivations() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("parent(a, b).").is_ok());

        let Report::Answer(answer) = ctx.answer("parent(b, a).") else {
            panic!("No answer for parent(b, a).");
        };

        assert!(!answer.is_true());
        assert!(answer.derivations().is_empty());
    }

    #[test]
    fn an_unbound_variable_is_reported_as_itself() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("p(X, a).").is_ok());

        let Report::Answer(answer) = ctx.answer("p(Y, a).") else {
            panic!("No answer for p(Y, a).");
        };

        assert!(answer.is_true());

        let derivation = &answer.derivations()[0];
        assert_eq!(derivation[0].0, "Y");
        assert!(matches!(&derivation[0].1, Term::Variable(v) if v.name() == "Y"));
    }
}

mod loading {
    use super::*;

    #[test]
    fn a_load_replaces_the_program() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("p(a).").is_ok());
        assert_eq!(ctx.answer("p(a).").to_string(), "true.");

        assert!(ctx.load_program("q(b).").is_ok());
        assert_eq!(
            ctx.answer("p(a).").to_string(),
            "In query: No such predicate: p\\1"
        );
    }

    #[test]
    fn a_failed_load_leaves_the_program() {
        let mut ctx = Context::from_config(Config::default());

        assert!(ctx.load_program("p(a).").is_ok());
        assert!(ctx.load_program("q(b").is_err());

        assert_eq!(ctx.answer("p(a).").to_string(), "true.");
        assert_eq!(ctx.clause_db.clause_count(), 1);
    }

    #[test]
    fn every_loaded_clause_is_reachable() {
        let mut ctx = Context::from_config(Config::default());

        let program = "
            parent(a, b).
            parent(a, c).
            sibling(X, Y) :- parent(Z, X), parent(Z, Y).
        ";
        assert!(ctx.load_program(program).is_ok());

        // Order across buckets is not guaranteed, within a bucket it is.
        let mut clauses: Vec<String> = ctx
            .clause_db
            .all_clauses()
            .map(|clause| clause.as_text(true))
            .collect();
        clauses.sort();

        assert_eq!(
            clauses,
            vec![
                "parent(a, b).",
                "parent(a, c).",
                "sibling(X, Y) :- parent(Z, X), parent(Z, Y).",
            ]
        );
    }
}
