// src/noyau/math_degres.rs
//
// Espace `math.*` vu par l’évaluateur
// -----------------------------------
// - sin/cos/tan : argument en DEGRÉS (x·π/180)
// - tan         : refuse si |cos| < SEUIL_COSINUS (asymptote)
// - sqrt/log10  : délégation directe ; NaN/∞ sont classés par l’évaluateur, pas ici

use std::f64::consts::PI;

use super::erreur::CalcError;

/// En dessous, cos(x) est considéré nul et tan(x) indéfinie.
pub const SEUIL_COSINUS: f64 = 1e-10;

/// Fonctions unaires appelables sous le qualificatif `math.`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sqrt,
    Log10,
    Sin,
    Cos,
    Tan,
}

impl Fonction {
    /// Nom après `math.` dans l’expression canonique.
    pub fn nom(self) -> &'static str {
        match self {
            Fonction::Sqrt => "sqrt",
            Fonction::Log10 => "log10",
            Fonction::Sin => "sin",
            Fonction::Cos => "cos",
            Fonction::Tan => "tan",
        }
    }

    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sqrt" => Some(Fonction::Sqrt),
            "log10" => Some(Fonction::Log10),
            "sin" => Some(Fonction::Sin),
            "cos" => Some(Fonction::Cos),
            "tan" => Some(Fonction::Tan),
            _ => None,
        }
    }
}

/// Capacité injectée dans l’évaluateur.
///
/// Une autre implémentation (radians, tables de test…) peut être passée
/// à `evaluate_arithmetic` sans toucher au parseur.
pub trait MathNamespace {
    fn sqrt(&self, x: f64) -> Result<f64, CalcError>;
    fn log10(&self, x: f64) -> Result<f64, CalcError>;
    fn sin(&self, x: f64) -> Result<f64, CalcError>;
    fn cos(&self, x: f64) -> Result<f64, CalcError>;
    fn tan(&self, x: f64) -> Result<f64, CalcError>;

    /// Aiguillage par nom de fonction (utilisé par l’évaluation RPN).
    fn appliquer(&self, f: Fonction, x: f64) -> Result<f64, CalcError> {
        match f {
            Fonction::Sqrt => self.sqrt(x),
            Fonction::Log10 => self.log10(x),
            Fonction::Sin => self.sin(x),
            Fonction::Cos => self.cos(x),
            Fonction::Tan => self.tan(x),
        }
    }
}

/// Espace standard de la calculatrice : trigonométrie en degrés.
#[derive(Clone, Copy, Debug, Default)]
pub struct DegreeMath;

fn radians(degres: f64) -> f64 {
    degres * PI / 180.0
}

impl MathNamespace for DegreeMath {
    fn sqrt(&self, x: f64) -> Result<f64, CalcError> {
        Ok(x.sqrt())
    }

    fn log10(&self, x: f64) -> Result<f64, CalcError> {
        Ok(x.log10())
    }

    fn sin(&self, x: f64) -> Result<f64, CalcError> {
        Ok(radians(x).sin())
    }

    fn cos(&self, x: f64) -> Result<f64, CalcError> {
        Ok(radians(x).cos())
    }

    fn tan(&self, x: f64) -> Result<f64, CalcError> {
        let r = radians(x);
        if r.cos().abs() < SEUIL_COSINUS {
            return Err(CalcError::TangentDomainError);
        }
        Ok(r.tan())
    }
}
