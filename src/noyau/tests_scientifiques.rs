//! Tests scientifiques (campagne) : propriétés du moteur de bout en bout.
//!
//! Chaque test part d’une saisie brute, comme le ferait l’interface.
//! - factorielle / Γ : exactitude + pôles
//! - degrés : sin/cos/tan sur angles remarquables
//! - moteur : parité compute/evaluate, historique borné, mémoire

use std::f64::consts::PI;

use approx::assert_relative_eq;
use proptest::prelude::*;

use super::{factorial, CalcError, Engine, HISTORIQUE_MAX};

fn eval_ok(raw: &str) -> f64 {
    Engine::new()
        .evaluate(raw)
        .unwrap_or_else(|e| panic!("raw={raw:?} err={e}"))
}

fn eval_err(raw: &str) -> CalcError {
    Engine::new()
        .evaluate(raw)
        .expect_err(&format!("raw={raw:?} devrait échouer"))
}

/* ------------------------ Exemples de référence ------------------------ */

#[test]
fn sci_exemples_de_reference() {
    assert_eq!(eval_ok("2+2"), 4.0);
    assert_eq!(eval_ok("√9"), 3.0);
    assert_eq!(eval_ok("2(3)"), 6.0);
    assert_eq!(eval_ok("sin(90)"), 1.0);
    assert_eq!(eval_ok("5!"), 120.0);

    assert_eq!(eval_err("1/0"), CalcError::DivisionByZero);
    assert_eq!(eval_err(""), CalcError::EmptyInput);
}

#[test]
fn sci_notation_calculatrice() {
    assert_eq!(eval_ok("2^10"), 1024.0);
    assert_eq!(eval_ok("(3)4"), 12.0);
    assert_eq!(eval_ok("2√9"), 6.0);
    assert_eq!(eval_ok("√√16"), 2.0);
    assert_eq!(eval_ok("√(√(16))"), 2.0);
    assert_eq!(eval_ok("√(7+9)"), 4.0);
    assert_eq!(eval_ok("log(1000)"), 3.0);
    assert_eq!(eval_ok("3!+2!"), 8.0);
    assert_eq!(eval_ok("10-3!"), 4.0);
    assert_eq!(eval_ok("3!2"), 12.0);
    assert_relative_eq!(eval_ok("2sin(30)"), 1.0, max_relative = 1e-12);
    assert_relative_eq!(eval_ok("cos(60)+sin(30)"), 1.0, max_relative = 1e-12);
    assert_relative_eq!(eval_ok("tan(45)"), 1.0, max_relative = 1e-12);
}

#[test]
fn sci_erreurs_classees() {
    assert_eq!(eval_err("   "), CalcError::EmptyInput);
    assert_eq!(eval_err("√"), CalcError::MalformedExpression);
    assert_eq!(eval_err("-3!"), CalcError::UndefinedFactorial);
    assert_eq!(eval_err("tan(90)"), CalcError::TangentDomainError);
    assert_eq!(eval_err("tan(-270)"), CalcError::TangentDomainError);
    assert_eq!(eval_err("√(0-4)"), CalcError::InvalidExpression);
    assert_eq!(eval_err("log(0)"), CalcError::DivisionByZero);
    assert_eq!(eval_err("171!"), CalcError::DivisionByZero);
    assert_eq!(eval_err("1^(0/0)"), CalcError::InvalidExpression);
    assert_eq!(eval_err("1^(1/0)"), CalcError::InvalidExpression);
    assert_eq!(eval_err("(-1)^(1/0)"), CalcError::InvalidExpression);
    assert_eq!(eval_err("1^(10^400)"), CalcError::InvalidExpression);
    assert!(matches!(eval_err("2 3"), CalcError::SyntaxError(_)));
    assert!(matches!(eval_err("(5)!"), CalcError::SyntaxError(_)));
    assert!(matches!(eval_err("alert(1)"), CalcError::SyntaxError(_)));
    assert!(matches!(eval_err("2+"), CalcError::SyntaxError(_)));
}

/* ------------------------ Factorielle / Γ ------------------------ */

#[test]
fn sci_factorielle_produit_exact() {
    let mut produit = 1.0f64;
    for n in 0..=22u32 {
        if n > 0 {
            produit *= n as f64;
        }
        // exact tant que le produit tient sur 53 bits de mantisse (22! inclus)
        assert_eq!(factorial(n as f64), Ok(produit), "n={n}");
    }
}

#[test]
fn sci_factorielle_demi() {
    assert_relative_eq!(factorial(0.5).unwrap(), PI.sqrt() / 2.0, max_relative = 1e-9);
    assert_relative_eq!(eval_ok("0.5!"), PI.sqrt() / 2.0, max_relative = 1e-9);
}

/* ------------------------ Moteur ------------------------ */

#[test]
fn sci_historique_onze_evaluations() {
    let mut e = Engine::new();
    for k in 0..11 {
        e.evaluate(&format!("{k}*2")).unwrap();
    }

    let h = e.history();
    assert_eq!(h.len(), HISTORIQUE_MAX);
    assert_eq!(h[0], "10*2 = 20");
    assert_eq!(h[HISTORIQUE_MAX - 1], "1*2 = 2");
}

#[test]
fn sci_memoire() {
    let mut e = Engine::new();
    e.memory_add(5.0);
    e.memory_minus(2.0);
    assert_eq!(e.memory_recall(), 3.0);
    e.memory_clear();
    assert_eq!(e.memory_recall(), 0.0);
}

fn saisie() -> impl Strategy<Value = String> {
    let atome = prop::sample::select(vec![
        "1", "2", "3", "4.5", "9", "0", "√9", "5!", "sin(30)", "cos(45)", "tan(60)", "log(100)",
        "(2)", "√(16)",
    ]);
    let op = prop::sample::select(vec!["+", "-", "*", "/", "^", ""]);
    (atome.clone(), prop::collection::vec((op, atome), 0..5)).prop_map(|(tete, suite)| {
        let mut s = tete.to_string();
        for (o, a) in suite {
            s.push_str(o);
            s.push_str(a);
        }
        s
    })
}

proptest! {
    #[test]
    fn sci_parite_compute_evaluate(raw in saisie()) {
        let mut e = Engine::new();
        e.memory_add(1.5);

        let apercu = e.compute(&raw);
        prop_assert!(e.history().is_empty());

        let resultat = e.evaluate(&raw);
        prop_assert_eq!(&resultat, &apercu);
        prop_assert_eq!(e.history().len(), usize::from(resultat.is_ok()));
        prop_assert_eq!(e.memory_recall(), 1.5);
    }
}
