//! Noyau — évaluation sûre d’une expression canonique
//!
//! tokenize -> RPN -> pile de valeurs (math, factorial) -> classement du résultat
//!
//! Aucun texte n’est “exécuté” : seule une RPN fermée (nombres, 5 opérateurs,
//! moins unaire, `math.<fn>`, `factorial`) est parcourue, sans arbre ni récursion :
//! la profondeur de l’expression ne coûte que de la mémoire tas.

use tracing::trace;

use super::erreur::CalcError;
use super::jetons::{format_tokens, tokenize, Tok};
use super::math_degres::MathNamespace;
use super::rpn::to_rpn;

/// Évalue une expression CANONIQUE (voir normalisation.rs).
///
/// - syntaxe invalide, identifiant inconnu => `SyntaxError`
/// - résultat ±∞                           => `DivisionByZero`
/// - résultat NaN                          => `InvalidExpression`
///
/// Les erreurs levées par `math` ou `factorial` remontent telles quelles.
pub fn evaluate_arithmetic<M, F>(expr: &str, math: &M, factorial: F) -> Result<f64, CalcError>
where
    M: MathNamespace + ?Sized,
    F: Fn(f64) -> Result<f64, CalcError>,
{
    let jetons = tokenize(expr)?;
    let rpn = to_rpn(&jetons)?;
    trace!(rpn = %format_tokens(&rpn), "RPN");

    let v = evaluer_rpn(&rpn, math, &factorial)?;

    classer(v)
}

/// Parcours itératif de la RPN. Les non-finis intermédiaires se propagent
/// comme en IEEE-754 ; seul le résultat final est classé.
fn evaluer_rpn<M, F>(rpn: &[Tok], math: &M, factorial: &F) -> Result<f64, CalcError>
where
    M: MathNamespace + ?Sized,
    F: Fn(f64) -> Result<f64, CalcError> + ?Sized,
{
    let invalide = || CalcError::syntaxe("expression invalide");
    let mut pile: Vec<f64> = Vec::with_capacity(64);

    for tok in rpn {
        let v = match tok {
            Tok::Num(v) => *v,

            Tok::Neg => -pile.pop().ok_or_else(invalide)?,
            Tok::Math(f) => math.appliquer(*f, pile.pop().ok_or_else(invalide)?)?,
            Tok::Factorielle => factorial(pile.pop().ok_or_else(invalide)?)?,

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                let b = pile.pop().ok_or_else(invalide)?;
                let a = pile.pop().ok_or_else(invalide)?;
                match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => a / b,
                    _ => puissance(a, b),
                }
            }

            Tok::LPar | Tok::RPar => {
                return Err(CalcError::syntaxe("parenthèse inattendue en RPN"))
            }
        };
        pile.push(v);
    }

    let v = pile.pop().ok_or_else(invalide)?;
    if !pile.is_empty() {
        return Err(invalide());
    }
    Ok(v)
}

/// `a ** b` sans masquer un exposant non fini : IEEE donne pow(±1, NaN/±∞) = 1,
/// la calculatrice rend NaN.
fn puissance(a: f64, b: f64) -> f64 {
    if !b.is_finite() && a.abs() == 1.0 {
        return f64::NAN;
    }
    a.powf(b)
}

fn classer(v: f64) -> Result<f64, CalcError> {
    if v.is_infinite() {
        return Err(CalcError::DivisionByZero);
    }
    if v.is_nan() {
        return Err(CalcError::InvalidExpression);
    }
    Ok(v)
}
