// src/noyau/gamma.rs
//
// Factorielle + fonction Γ
// ------------------------
// - n entier, 0 ≤ n ≤ 170 : produit exact (BigUint), arrondi UNE fois en f64
// - n entier négatif      : pôle de Γ => erreur
// - sinon                 : Γ(n+1) par Lanczos (g = 7, 9 coefficients)
//
// Au-delà de 170!, f64 déborde : Γ renvoie +∞ et l’évaluateur classe le résultat.

use std::f64::consts::PI;

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::erreur::CalcError;

/// Plus grand n dont n! tient dans un f64.
pub const FACTORIELLE_EXACTE_MAX: u32 = 170;

const LANCZOS_G: f64 = 7.0;

/// Table de Lanczos (ordre significatif, valeurs reprises telles quelles).
#[allow(clippy::excessive_precision)]
const LANCZOS_P: [f64; 9] = [
    0.99999999999980993,
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

/// Γ(z) pour z réel.
///
/// Pour z < 0.5 on passe par la réflexion Γ(z)·Γ(1−z) = π / sin(πz) ;
/// 1−z est alors ≥ 0.5, donc une seule “récursion”.
/// Aux entiers ≤ 0 le résultat n’est pas fini (c’est à l’appelant de filtrer).
pub fn gamma(z: f64) -> f64 {
    if z < 0.5 {
        return PI / ((PI * z).sin() * gamma_lanczos(1.0 - z));
    }
    gamma_lanczos(z)
}

/// Série de Lanczos, valable pour z ≥ 0.5.
fn gamma_lanczos(z: f64) -> f64 {
    let z = z - 1.0;

    let mut x = LANCZOS_P[0];
    for (i, p) in LANCZOS_P.iter().enumerate().skip(1) {
        x += p / (z + i as f64);
    }

    let t = z + LANCZOS_G + 0.5;
    (2.0 * PI).sqrt() * t.powf(z + 0.5) * (-t).exp() * x
}

/// n! étendue aux réels : exacte pour les petits entiers, Γ(n+1) ailleurs.
pub fn factorial(n: f64) -> Result<f64, CalcError> {
    if !n.is_finite() {
        return Err(CalcError::InvalidOperand);
    }

    if n.fract() == 0.0 {
        if n < 0.0 {
            return Err(CalcError::UndefinedFactorial);
        }
        if n <= FACTORIELLE_EXACTE_MAX as f64 {
            return Ok(produit_exact(n as u32));
        }
    }

    Ok(gamma(n + 1.0))
}

/// 1·2·…·n en entier exact, puis conversion f64 (arrondi correct).
fn produit_exact(n: u32) -> f64 {
    let p: BigUint = (1..=n).map(BigUint::from).product();
    p.to_f64().unwrap_or(f64::INFINITY)
}
