//! Calculatrice degrés — noyau réutilisable
//!
//! Le noyau ne dépend d’aucune interface : il reçoit une chaîne brute et rend
//! un `f64` ou une `CalcError` ; l’historique se lit via `Engine::history`.

pub mod noyau;

pub use noyau::{
    evaluate_arithmetic, factorial, format_number, gamma, normalize, CalcError, DegreeMath,
    Engine, MathNamespace, HISTORIQUE_MAX,
};
