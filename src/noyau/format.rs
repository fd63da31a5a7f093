// src/noyau/format.rs
//
// Affichage d’un résultat f64 (historique + UI).
// - décimal le plus court qui relit la même valeur (Display de f64)
// - notation exponentielle hors de [1e-6, 1e21) : 1e+21, 1.5e-7
// - -0 s’affiche "0"

/// Bornes de la notation décimale “normale”.
const DECIMAL_MIN: f64 = 1e-6;
const DECIMAL_MAX: f64 = 1e21;

/// Texte d’un nombre tel que la calculatrice l’affiche.
pub fn format_number(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if !x.is_finite() {
        return format!("{x}");
    }

    let a = x.abs();
    if (DECIMAL_MIN..DECIMAL_MAX).contains(&a) {
        return format!("{x}");
    }

    // {:e} donne "1e21" / "1.5e-7" : on explicite le signe des exposants positifs
    let txt = format!("{x:e}");
    match txt.split_once('e') {
        Some((mantisse, exposant)) if !exposant.starts_with('-') => {
            format!("{mantisse}e+{exposant}")
        }
        _ => txt,
    }
}

/// Ligne d’historique : "<saisie brute> = <résultat>".
pub fn format_entree_historique(brut: &str, resultat: f64) -> String {
    format!("{brut} = {}", format_number(resultat))
}
