//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! But : marteler le moteur sans brûler la machine.
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - toute erreur doit être CLASSÉE (jamais de panique)
//! - invariant clé : un échec ne laisse aucune trace dans l’historique

use std::time::{Duration, Instant};

use super::{normalize, CalcError, Engine};

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Génération de saisies (bornée) ------------------------ */

fn gen_nombre(rng: &mut Rng) -> String {
    let n = rng.pick(12);
    if rng.coin() {
        format!("{n}")
    } else {
        format!("{n}.{}", rng.pick(10))
    }
}

fn gen_atome(rng: &mut Rng) -> String {
    match rng.pick(7) {
        0 | 1 => gen_nombre(rng),
        2 => format!("√{}", rng.pick(50)),
        3 => format!("{}!", rng.pick(8)),
        4 => format!("sin({})", 15 * rng.pick(25)),
        5 => format!("tan({})", 45 * rng.pick(9)),
        _ => format!("log({})", rng.pick(1000)),
    }
}

fn gen_saisie(rng: &mut Rng, profondeur: usize) -> String {
    if profondeur == 0 {
        return gen_atome(rng);
    }

    let a = gen_saisie(rng, profondeur - 1);
    let b = gen_saisie(rng, profondeur - 1);
    match rng.pick(9) {
        0 => gen_atome(rng),
        1 => format!("({a}+{b})"),
        2 => format!("({a}-{b})"),
        3 => format!("{a}*{b}"),
        4 => format!("({a})/({b})"),
        5 => format!("({a})^2"),
        6 => format!("√({a})"),
        7 => format!("2({a})"),
        _ => format!("({a}){b}"),
    }
}

/// Saisie “bruitée” : caractères du clavier calculatrice dans le désordre.
fn gen_bruit(rng: &mut Rng) -> String {
    const TOUCHES: [&str; 22] = [
        "0", "1", "7", ".", "+", "-", "*", "/", "^", "(", ")", "!", "√", " ", "sin(", "cos(",
        "tan(", "log(", "sqrt(", "x", "=", "π",
    ];
    let n = 1 + rng.pick(14);
    (0..n)
        .map(|_| TOUCHES[rng.pick(TOUCHES.len() as u32) as usize])
        .collect()
}

/* ------------------------ Tests ------------------------ */

#[test]
fn fuzz_safe_determinisme_et_historique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xC0FFEE_u64);
    let mut e = Engine::new();

    let mut seen_ok = 0usize;
    let mut seen_err = 0usize;

    for _ in 0..150 {
        budget(t0, max);

        let saisie = gen_saisie(&mut rng, 3);
        let avant = e.history().to_vec();

        match e.evaluate(&saisie) {
            Ok(v) => {
                assert!(v.is_finite(), "saisie={saisie:?} v={v}");
                assert_eq!(e.compute(&saisie), Ok(v), "déterminisme: {saisie:?}");
                assert!(e.history()[0].starts_with(&saisie));
                seen_ok += 1;
            }
            Err(err) => {
                assert_eq!(e.history(), avant.as_slice(), "saisie={saisie:?} err={err}");
                seen_err += 1;
            }
        }
    }

    // On veut voir un mix des deux, sinon le fuzz ne “balaye” rien.
    assert!(seen_ok > 10, "trop peu de succès: {seen_ok}");
    assert!(seen_err > 0, "aucune erreur vue: fuzz trop “sage”");
}

#[test]
fn fuzz_safe_bruit_clavier_sans_panique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let mut rng = Rng::new(0xBADC0DE_u64);
    let e = Engine::new();

    for _ in 0..400 {
        budget(t0, max);

        let saisie = gen_bruit(&mut rng);
        match e.compute(&saisie) {
            Ok(v) => assert!(v.is_finite()),
            Err(CalcError::EmptyInput) => assert!(saisie.trim().is_empty()),
            Err(_) => {}
        }

        // idempotence de la normalisation sur tout ce qui passe l’étape 2
        if let Ok(canonique) = normalize(&saisie) {
            assert_eq!(normalize(&canonique), Ok(canonique.clone()), "saisie={saisie:?}");
        }
    }
}

#[test]
fn fuzz_safe_racines_imbriquees() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    // √√…√65536 : 4 racines => 2
    let saisie = format!("{}65536", "√".repeat(4));
    budget(t0, max);
    assert_eq!(Engine::new().compute(&saisie), Ok(2.0));

    // √(√(…)) parenthésé
    let mut s = "256".to_string();
    for _ in 0..3 {
        s = format!("√({s})");
    }
    budget(t0, max);
    assert_eq!(Engine::new().compute(&s), Ok(2.0));
}

#[test]
fn fuzz_safe_racines_en_serie() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    // 5000 racines côte à côte : chaque réécriture reste locale
    let saisie = format!("{}0", "√4+".repeat(5_000));
    assert_eq!(Engine::new().compute(&saisie), Ok(10_000.0));
    budget(t0, max);

    let canonique = normalize(&saisie).unwrap();
    assert_eq!(canonique.matches("math.sqrt(4)").count(), 5_000);
    assert!(!canonique.contains('√'));
}

#[test]
fn fuzz_safe_somme_longue_anti_pile() {
    let t0 = Instant::now();
    let max = Duration::from_millis(200);

    let saisie = vec!["1/2"; 300].join("+");
    budget(t0, max);

    assert_eq!(Engine::new().compute(&saisie), Ok(150.0));
}

#[test]
fn fuzz_safe_saisies_geantes_sans_debordement_de_pile() {
    let t0 = Instant::now();
    let max = Duration::from_secs(5);

    let e = Engine::new();

    let somme = format!("{}1", "1+".repeat(50_000));
    assert_eq!(e.compute(&somme), Ok(50_001.0));
    budget(t0, max);

    let negations = format!("{}1", "-".repeat(200_000));
    assert_eq!(e.compute(&negations), Ok(1.0));
    budget(t0, max);

    let puissances = format!("{}2", "1^".repeat(20_000));
    assert_eq!(e.compute(&puissances), Ok(1.0));
    budget(t0, max);
}
