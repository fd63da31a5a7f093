// src/noyau/erreur.rs
//
// Erreurs classées du noyau.
// Chaque variante correspond à UNE cause ; le message (Display) est affichable tel quel.

use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Entrée vide ou seulement des espaces.
    #[error("Aucune entrée n’a été saisie.")]
    EmptyInput,

    /// La réécriture de √ ne converge pas (opérande absent ou imbrication dégénérée).
    #[error("Expression mal formée autour de √.")]
    MalformedExpression,

    /// Argument de factorielle non fini.
    #[error("Opérande invalide.")]
    InvalidOperand,

    /// Factorielle d’un entier négatif (pôle de Γ).
    #[error("La factorielle d’un entier négatif n’est pas définie.")]
    UndefinedFactorial,

    /// tan(x) avec cos(x) ≈ 0.
    #[error("Tangente indéfinie : le cosinus est trop proche de zéro.")]
    TangentDomainError,

    /// L’expression canonique ne se lit pas comme de l’arithmétique.
    #[error("Erreur de syntaxe : {0}")]
    SyntaxError(String),

    /// Résultat ±∞.
    #[error("Division par zéro impossible.")]
    DivisionByZero,

    /// Résultat NaN.
    #[error("Expression invalide.")]
    InvalidExpression,
}

impl CalcError {
    pub(crate) fn syntaxe(msg: impl Into<String>) -> Self {
        CalcError::SyntaxError(msg.into())
    }
}
