// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// - Entrée + aperçu en direct (“→ …”)
// - Enter (champ focus) / touche `=` évaluent ; chiffre après `=` => nouvelle saisie
// - Pavé, opérateurs, √ ! ^, fonctions en degrés
// - Mémoire M+ M− MR MC, historique cliquable, copie, thème
//
// Note :
// - PAS de Key::NumEnter (n’existe pas dans egui 0.33.x)

use eframe::egui;

use super::etat::AppCalc;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("Calculatrice degrés");
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.checkbox(&mut self.theme_sombre, "Sombre");
                    });
                });
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                self.ui_touches(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_historique(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        // Clavier physique, AVANT que le champ ne voie les événements :
        // '=' évalue (jamais inséré) ; le texte tapé passe par avant_frappe() ;
        // toute autre touche jette un message d’erreur affiché.
        let (egal, texte, touche) = ui.input_mut(|i| {
            let avant = i.events.len();
            i.events
                .retain(|e| !matches!(e, egui::Event::Text(t) if t.as_str() == "="));
            let egal = i.events.len() != avant;

            let texte = i.events.iter().find_map(|e| match e {
                egui::Event::Text(t) | egui::Event::Paste(t) => Some(t.clone()),
                _ => None,
            });
            let touche = i
                .events
                .iter()
                .any(|e| matches!(e, egui::Event::Key { pressed: true, .. }));
            (egal, texte, touche)
        });
        match texte {
            Some(t) => self.avant_frappe(&t),
            None if touche => self.sortir_mode_erreur(),
            None => {}
        }

        let couleur = if self.mode_erreur {
            ui.visuals().error_fg_color
        } else {
            ui.visuals().text_color()
        };

        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2√9 + sin(30), 5!, 2^10")
                .id_source("entree_edit")
                .text_color(couleur)
                .code_editor(),
        );

        // Si on a cliqué un bouton, on redonne le focus
        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        if resp.changed() {
            self.dernier_egal = false;
            self.rafraichir_apercu();
        }

        // TextEdit singleline rend le focus sur Enter : lost_focus() compte aussi
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if egal || ((resp.has_focus() || resp.lost_focus()) && enter) {
            self.evaluer();
        }

        ui.horizontal(|ui| {
            ui.monospace(&self.apercu);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let copier = ui
                    .add_enabled(!self.entree.trim().is_empty(), egui::Button::new("Copier"))
                    .on_hover_text("Copie l’entrée dans le presse-papiers");
                if copier.clicked() {
                    ui.ctx().copy_text(self.entree.clone());
                    self.focus_entree = true;
                }
            });
        });
    }

    fn ui_touches(&mut self, ui: &mut egui::Ui) {
        // Mémoire + effacement
        ui.horizontal(|ui| {
            self.bouton_action(ui, "M+", "Ajoute l’entrée à la mémoire", Action::MemoirePlus);
            self.bouton_action(ui, "M−", "Retranche l’entrée de la mémoire", Action::MemoireMoins);
            self.bouton_action(ui, "MR", "Rappelle la mémoire", Action::MemoireRappel);
            self.bouton_action(ui, "MC", "Remet la mémoire à zéro", Action::MemoireEffacer);
            ui.separator();
            self.bouton_action(ui, "C", "Efface l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Supprimer);
        });

        ui.add_space(6.0);

        // Fonctions (degrés)
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "sin", "sin(");
            self.bouton_insert(ui, "cos", "cos(");
            self.bouton_insert(ui, "tan", "tan(");
            self.bouton_insert(ui, "log", "log(");
            self.bouton_insert(ui, "√", "√");
            self.bouton_insert(ui, "x!", "!");
            self.bouton_insert(ui, "xʸ", "^");
        });

        ui.add_space(6.0);

        egui::Grid::new("pave_numerique_degres")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                let rangees = [["7", "8", "9", "/"], ["4", "5", "6", "*"], ["1", "2", "3", "-"]];
                for rangee in rangees {
                    for t in rangee {
                        self.bouton_insert(ui, t, t);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", "0");
                self.bouton_insert(ui, ".", ".");
                self.bouton_action(ui, "=", "Évalue l’expression", Action::Egal);
                self.bouton_insert(ui, "+", "+");
                ui.end_row();

                self.bouton_insert(ui, "(", "(");
                self.bouton_insert(ui, ")", ")");
                ui.end_row();
            });
    }

    fn ui_historique(&mut self, ui: &mut egui::Ui) {
        let mut reprise: Option<String> = None;

        egui::CollapsingHeader::new("Historique")
            .default_open(true)
            .show(ui, |ui| {
                if self.moteur.history().is_empty() {
                    ui.weak("(vide)");
                }
                for ligne in self.moteur.history() {
                    let texte = egui::RichText::new(ligne).monospace();
                    let resp = ui
                        .add(egui::Label::new(texte).sense(egui::Sense::click()))
                        .on_hover_text("Reprendre cette saisie");
                    if resp.clicked() {
                        reprise = Some(ligne.clone());
                    }
                }
            });

        if let Some(ligne) = reprise {
            self.reprendre_historique(&ligne);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([52.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Egal => self.evaluer(),
                Action::ClearEntree => self.clear_entree(),
                Action::Supprimer => self.supprimer_dernier(),
                Action::MemoirePlus => self.memoire_plus(),
                Action::MemoireMoins => self.memoire_moins(),
                Action::MemoireRappel => self.memoire_rappel(),
                Action::MemoireEffacer => self.memoire_effacer(),
            }
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, label: &str, fragment: &str) {
        let resp = ui.add_sized([52.0, 30.0], egui::Button::new(label));
        if resp.clicked() {
            self.inserer(fragment);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Egal,
    ClearEntree,
    Supprimer,
    MemoirePlus,
    MemoireMoins,
    MemoireRappel,
    MemoireEffacer,
}
