//! Moteur de la calculatrice : mémoire + historique autour du pipeline
//! `normalize -> evaluate_arithmetic`.
//!
//! Contrats :
//! - `compute` ne touche à rien (aperçu en direct).
//! - `evaluate` ajoute UNE ligne d’historique en cas de succès, aucune en cas d’échec.
//! - La mémoire ne bouge que via memory_add / memory_minus / memory_clear.
//!
//! Pas de verrou interne : un `Engine` appartient à une seule session.

use tracing::debug;

use super::erreur::CalcError;
use super::eval::evaluate_arithmetic;
use super::format::format_entree_historique;
use super::gamma::factorial;
use super::math_degres::DegreeMath;
use super::normalisation::normalize;

/// Nombre de lignes d’historique conservées (les plus anciennes sortent).
pub const HISTORIQUE_MAX: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct Engine {
    math: DegreeMath,
    memoire: f64,
    // plus récent en tête
    historique: Vec<String>,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Calcule sans effet de bord.
    pub fn compute(&self, raw: &str) -> Result<f64, CalcError> {
        let canonique = normalize(raw)?;
        evaluate_arithmetic(&canonique, &self.math, factorial)
    }

    /// Calcule puis inscrit "<raw> = <résultat>" en tête de l’historique.
    pub fn evaluate(&mut self, raw: &str) -> Result<f64, CalcError> {
        let v = self.compute(raw)?;

        let ligne = format_entree_historique(raw, v);
        debug!(entree = %ligne, "historique");

        self.historique.insert(0, ligne);
        self.historique.truncate(HISTORIQUE_MAX);
        Ok(v)
    }

    /// Historique, plus récent en premier (au plus HISTORIQUE_MAX lignes).
    pub fn history(&self) -> &[String] {
        &self.historique
    }

    /* ------------------------ Mémoire ------------------------ */

    pub fn memory_add(&mut self, v: f64) {
        self.memoire += fini_ou_zero(v);
    }

    pub fn memory_minus(&mut self, v: f64) {
        self.memoire -= fini_ou_zero(v);
    }

    pub fn memory_recall(&self) -> f64 {
        self.memoire
    }

    pub fn memory_clear(&mut self) {
        self.memoire = 0.0;
    }
}

fn fini_ou_zero(v: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        0.0
    }
}
