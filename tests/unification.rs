use hornlog::procedures::unify::{occurs, unify, unify_conjunctions, unify_literals};
use hornlog::structures::conjunction::Conjunction;
use hornlog::structures::literal::Literal;
use hornlog::structures::substitution::Substitution;
use hornlog::structures::term::{Atom, Term, Variable};

fn atom(name: &str) -> Term {
    Term::Atom(Atom::new(name))
}

fn var(id: u64, name: &str) -> Term {
    Term::Variable(Variable::new(id, name))
}

mod atoms {
    use super::*;

    #[test]
    fn equality_tolerates_one_level_of_quotes() {
        assert_eq!(Atom::new("a"), Atom::new("'a'"));
        assert_eq!(Atom::new("'Pain'"), Atom::new("Pain"));
        assert_ne!(Atom::new("a"), Atom::new("b"));
    }

    #[test]
    fn equal_atoms_unify_with_nothing_bound() {
        let sigma = unify(&atom("a"), &atom("'a'")).unwrap();
        assert!(sigma.is_empty());

        assert!(unify(&atom("a"), &atom("b")).is_none());
    }
}

mod variables {
    use super::*;

    #[test]
    fn identity_settles_equality() {
        assert_eq!(var(0, "X"), var(0, "Y"));
        assert_ne!(var(0, "X"), var(1, "X"));
    }

    #[test]
    fn the_occurs_check_rejects_cycles() {
        let x = Variable::new(0, "X");

        assert!(occurs(&x, &Term::List(vec![var(0, "X")])));
        assert!(unify(&var(0, "X"), &Term::List(vec![var(0, "X")])).is_none());

        // Nested occurrences count too.
        let nested = Term::List(vec![atom("f"), Term::List(vec![var(0, "X")])]);
        assert!(unify(&var(0, "X"), &nested).is_none());
    }

    #[test]
    fn a_variable_unifies_with_itself_vacuously() {
        let sigma = unify(&var(0, "X"), &var(0, "X")).unwrap();
        assert!(sigma.is_empty());
    }
}

mod laws {
    use super::*;

    fn pairs() -> Vec<(Term, Term)> {
        vec![
            (var(0, "X"), atom("a")),
            (atom("a"), var(0, "X")),
            (var(0, "X"), var(1, "Y")),
            (
                Term::List(vec![var(0, "X"), atom("b")]),
                Term::List(vec![atom("a"), var(1, "Y")]),
            ),
            (
                Term::List(vec![var(0, "X"), var(0, "X")]),
                Term::List(vec![var(1, "Y"), atom("c")]),
            ),
        ]
    }

    #[test]
    fn unifiers_are_sound() {
        for (t1, t2) in pairs() {
            let sigma = unify(&t1, &t2).unwrap();
            assert_eq!(sigma.apply(&t1), sigma.apply(&t2));
        }
    }

    #[test]
    fn unification_is_symmetric() {
        for (t1, t2) in pairs() {
            let forward = unify(&t1, &t2).unwrap();
            let backward = unify(&t2, &t1).unwrap();

            assert_eq!(forward.apply(&t1), forward.apply(&t2));
            assert_eq!(backward.apply(&t1), backward.apply(&t2));
        }

        // And failure is symmetric as well.
        assert!(unify(&atom("a"), &Term::List(vec![atom("a")])).is_none());
        assert!(unify(&Term::List(vec![atom("a")]), &atom("a")).is_none());
    }

    #[test]
    fn application_is_idempotent() {
        for (t1, t2) in pairs() {
            let sigma = unify(&t1, &t2).unwrap();

            for t in [&t1, &t2] {
                let once = sigma.apply(t);
                assert_eq!(sigma.apply(&once), once);
            }
        }
    }
}

mod lists {
    use super::*;

    #[test]
    fn elementwise_binding() {
        let l1 = Term::List(vec![atom("a"), atom("b"), atom("c")]);
        let l2 = Term::List(vec![atom("a"), atom("b"), var(0, "X")]);

        let sigma = unify(&l1, &l2).unwrap();
        assert_eq!(sigma.apply(&var(0, "X")), atom("c"));
    }

    #[test]
    fn length_mismatch_fails() {
        let l1 = Term::List(vec![atom("a"), atom("b")]);
        let l2 = Term::List(vec![atom("a")]);

        assert!(unify(&l1, &l2).is_none());
    }

    #[test]
    fn bindings_thread_through_later_elements() {
        // X picks up a in the first pair, so the second pair forces a against b.
        let l1 = Term::List(vec![var(0, "X"), var(0, "X")]);
        let l2 = Term::List(vec![atom("a"), atom("b")]);

        assert!(unify(&l1, &l2).is_none());
    }
}

mod literals {
    use super::*;

    #[test]
    fn functor_and_arity_must_agree() {
        let p1 = Literal::new("parent", vec![atom("'Maria'"), atom("'Gosho'")]);
        let p2 = Literal::new("parent", vec![atom("'Maria'"), atom("'Ana'")]);
        let p3 = Literal::new("parent", vec![atom("'Maria'"), var(0, "X")]);

        assert!(unify_literals(&p1, &p2).is_none());

        let sigma = unify_literals(&p3, &p1).unwrap();
        assert_eq!(sigma.apply(&var(0, "X")), atom("'Gosho'"));

        let q = Literal::new("parent", vec![atom("'Maria'")]);
        assert!(unify_literals(&p1, &q).is_none());

        let r = Literal::new("sibling", vec![atom("'Maria'"), atom("'Gosho'")]);
        assert!(unify_literals(&p1, &r).is_none());
    }

    #[test]
    fn conjunctions_unify_literal_by_literal() {
        let c1 = Conjunction::new(vec![
            Literal::new("p", vec![var(0, "X")]),
            Literal::new("q", vec![var(0, "X")]),
        ]);
        let c2 = Conjunction::new(vec![
            Literal::new("p", vec![atom("a")]),
            Literal::new("q", vec![var(1, "Y")]),
        ]);

        let sigma = unify_conjunctions(&c1, &c2).unwrap();
        assert_eq!(sigma.apply(&var(1, "Y")), atom("a"));

        let short = Conjunction::new(vec![Literal::new("p", vec![atom("a")])]);
        assert!(unify_conjunctions(&c1, &short).is_none());
    }
}

mod composition {
    use super::*;

    #[test]
    fn composition_applies_left_then_right() {
        let mut first = Substitution::default();
        first.bind(&Variable::new(0, "X"), var(1, "Y"));

        let mut second = Substitution::default();
        second.bind(&Variable::new(1, "Y"), atom("a"));

        let joined = first.compose(&second).unwrap();
        assert_eq!(joined.apply(&var(0, "X")), atom("a"));
        assert_eq!(joined.apply(&var(1, "Y")), atom("a"));
    }

    #[test]
    fn disagreement_on_a_shared_variable_fails() {
        let mut first = Substitution::default();
        first.bind(&Variable::new(0, "X"), atom("a"));

        let mut second = Substitution::default();
        second.bind(&Variable::new(0, "X"), atom("b"));

        assert!(first.compose(&second).is_none());
    }

    #[test]
    fn the_empty_substitution_is_the_identity_of_composition() {
        let mut sigma = Substitution::default();
        sigma.bind(&Variable::new(0, "X"), atom("a"));

        let empty = Substitution::default();

        assert_eq!(sigma.compose(&empty).unwrap(), sigma);
        assert_eq!(empty.compose(&sigma).unwrap(), sigma);
    }
}
