//! Noyau calculatrice (degrés)
//!
//! Organisation interne :
//! - erreur.rs        : erreurs classées (CalcError)
//! - normalisation.rs : notation calculatrice -> expression canonique
//! - gamma.rs         : factorielle exacte + Γ (Lanczos)
//! - math_degres.rs   : espace `math.*` (trig en degrés)
//! - jetons.rs        : tokenisation de la forme canonique
//! - rpn.rs           : shunting-yard (RPN)
//! - eval.rs          : pipeline sûr, pile de valeurs + classement des non-finis
//! - format.rs        : affichage des résultats
//! - moteur.rs        : mémoire + historique (Engine)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod gamma;
pub mod jetons;
pub mod math_degres;
pub mod moteur;
pub mod normalisation;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::CalcError;
pub use eval::evaluate_arithmetic;
pub use format::format_number;
pub use gamma::{factorial, gamma};
pub use math_degres::{DegreeMath, MathNamespace};
pub use moteur::{Engine, HISTORIQUE_MAX};
pub use normalisation::normalize;
