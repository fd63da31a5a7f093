//! src/app/etat.rs
//!
//! État UI (sans vue) : entrée, aperçu, mode erreur, thème, et le `Engine`
//! du noyau qui porte mémoire + historique.
//!
//! Contrats :
//! - Aucune évaluation “maison” ici : tout passe par `Engine`.
//! - L’aperçu avale les erreurs ; `=` les affiche à la place de l’entrée.
//! - Un échec ne touche ni l’historique ni la mémoire (garanti par le noyau).

use calculatrice_degres::{format_number, Engine};

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub apercu: String, // “→ 42”, vide si la saisie ne s’évalue pas
    pub mode_erreur: bool, // l’entrée affiche un message d’erreur
    pub dernier_egal: bool, // l’entrée affiche un résultat fraîchement calculé

    // --- noyau ---
    pub moteur: Engine,

    // --- UX ---
    pub theme_sombre: bool,
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            apercu: String::new(),
            mode_erreur: false,
            dernier_egal: false,
            moteur: Engine::new(),
            theme_sombre: false, // clair par défaut
            focus_entree: true,  // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” ------------------------ */

    /// C / Échap : efface l’entrée et l’aperçu.
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.apercu.clear();
        self.mode_erreur = false;
        self.dernier_egal = false;
        self.focus_entree = true;
    }

    /// Avant toute frappe : un message d’erreur affiché est jeté.
    pub fn sortir_mode_erreur(&mut self) {
        if self.mode_erreur {
            self.entree.clear();
            self.mode_erreur = false;
        }
    }

    /// À appeler avant qu’une frappe (pavé ou clavier physique) n’atteigne l’entrée :
    /// une erreur affichée est jetée, et un chiffre juste après `=` démarre une
    /// nouvelle saisie.
    pub fn avant_frappe(&mut self, texte: &str) {
        self.sortir_mode_erreur();
        if self.dernier_egal && texte.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
            self.entree.clear();
        }
        self.dernier_egal = false;
    }

    /// Insertion d’un fragment (touche du pavé ou fonction).
    pub fn inserer(&mut self, fragment: &str) {
        self.avant_frappe(fragment);
        self.entree.push_str(fragment);
        self.rafraichir_apercu();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier caractère.
    pub fn supprimer_dernier(&mut self) {
        self.sortir_mode_erreur();
        self.entree.pop();
        self.dernier_egal = false;
        self.rafraichir_apercu();
        self.focus_entree = true;
    }

    /// Aperçu en direct : erreurs avalées.
    pub fn rafraichir_apercu(&mut self) {
        self.apercu = match self.moteur.compute(&self.entree) {
            Ok(v) => format!("→ {}", format_number(v)),
            Err(_) => String::new(),
        };
    }

    /// `=` : évalue, historise, et remplace l’entrée par le résultat ou l’erreur.
    pub fn evaluer(&mut self) {
        if self.mode_erreur {
            return;
        }
        match self.moteur.evaluate(&self.entree) {
            Ok(v) => {
                self.entree = format_number(v);
                self.dernier_egal = true;
            }
            Err(e) => {
                self.entree = e.to_string();
                self.mode_erreur = true;
                self.dernier_egal = false;
            }
        }
        self.apercu.clear();
        self.focus_entree = true;
    }

    /* ------------------------ Mémoire ------------------------ */

    /// Valeur numérique de l’entrée telle quelle ; 0 si ce n’est pas un nombre.
    fn entree_numerique(&self) -> f64 {
        if self.mode_erreur {
            return 0.0;
        }
        self.entree.trim().parse::<f64>().unwrap_or(0.0)
    }

    pub fn memoire_plus(&mut self) {
        let v = self.entree_numerique();
        self.moteur.memory_add(v);
        self.focus_entree = true;
    }

    pub fn memoire_moins(&mut self) {
        let v = self.entree_numerique();
        self.moteur.memory_minus(v);
        self.focus_entree = true;
    }

    pub fn memoire_rappel(&mut self) {
        self.sortir_mode_erreur();
        self.entree = format_number(self.moteur.memory_recall());
        self.dernier_egal = false;
        self.rafraichir_apercu();
        self.focus_entree = true;
    }

    pub fn memoire_effacer(&mut self) {
        self.moteur.memory_clear();
        self.focus_entree = true;
    }

    /* ------------------------ Historique ------------------------ */

    /// Clic sur une entrée `"<saisie> = <résultat>"` : on reprend la saisie.
    pub fn reprendre_historique(&mut self, ligne: &str) {
        let saisie = ligne.rsplit_once(" = ").map_or(ligne, |(s, _)| s);
        self.entree = saisie.trim().to_string();
        self.mode_erreur = false;
        self.dernier_egal = false;
        self.rafraichir_apercu();
        self.focus_entree = true;
    }
}
