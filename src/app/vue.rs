// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : expression brute (ou "0") + aperçu en direct (ou flash d’erreur)
// - Pavé : boutons “valeur” (ajoutent leur texte) et boutons “action” (C, DEL, =)
// - "=" : clic court = évaluer ; appui long (≥ seuil) = carré du résultat
//
// Note :
// - Le clavier et le collage sont routés dans app.rs (événements globaux).
// - "=" n’utilise pas `clicked()` : appui/relâche/sortie passent par l’état.

use eframe::egui;

use super::etat::AppCalc;

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        self.ui_ecran(ui);

        ui.add_space(10.0);

        self.ui_pave(ui);
    }

    fn ui_ecran(&self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::top_down(egui::Align::Max), |ui| {
                    ui.label(
                        egui::RichText::new(self.expression_affichee())
                            .monospace()
                            .size(24.0),
                    );

                    // hauteur stable même quand l’aperçu est vide
                    let texte = match self.resultat_affiche() {
                        "" => " ",
                        s => s,
                    };
                    let resultat = egui::RichText::new(texte).monospace().size(18.0);
                    if self.est_en_flash() {
                        ui.colored_label(ui.visuals().error_fg_color, resultat);
                    } else {
                        ui.label(resultat.weak());
                    }
                });
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_action(ui, "C", "Efface l’expression", Action::Effacer);
                self.bouton_valeur(ui, "(");
                self.bouton_valeur(ui, ")");
                self.bouton_valeur(ui, "÷");
                ui.end_row();

                self.bouton_valeur(ui, "7");
                self.bouton_valeur(ui, "8");
                self.bouton_valeur(ui, "9");
                self.bouton_valeur(ui, "×");
                ui.end_row();

                self.bouton_valeur(ui, "4");
                self.bouton_valeur(ui, "5");
                self.bouton_valeur(ui, "6");
                self.bouton_valeur(ui, "−");
                ui.end_row();

                self.bouton_valeur(ui, "1");
                self.bouton_valeur(ui, "2");
                self.bouton_valeur(ui, "3");
                self.bouton_valeur(ui, "+");
                ui.end_row();

                self.bouton_valeur(ui, "0");
                self.bouton_valeur(ui, ".");
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Action::RetourArriere);
                self.bouton_egal(ui);
                ui.end_row();
            });
    }

    /// Bouton “valeur” : ajoute son libellé tel quel (×, ÷, − sont normalisés à l’évaluation).
    fn bouton_valeur(&mut self, ui: &mut egui::Ui, valeur: &str) {
        let resp = ui.add_sized(TAILLE_BOUTON, egui::Button::new(valeur));
        if resp.clicked() {
            self.ajouter(valeur);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::Effacer => self.effacer(),
                Action::RetourArriere => self.retour_arriere(),
            }
        }
    }

    /// "=" : appui => arme l’appui long ; relâche dedans => fin ; sortie => annule.
    fn bouton_egal(&mut self, ui: &mut egui::Ui) {
        let resp = ui
            .add_sized(TAILLE_BOUTON, egui::Button::new("="))
            .on_hover_text("Appui long : carré du résultat");

        let maintenant = ui.input(|i| i.time);
        let enfonce = resp.is_pointer_button_down_on();
        let dedans = resp.contains_pointer();

        if !self.egal_tenu {
            if enfonce && ui.input(|i| i.pointer.any_pressed()) {
                self.egal_tenu = true;
                self.appui_egal_debut(maintenant);
            }
            return;
        }

        match (enfonce, dedans) {
            (true, true) => {}
            (true, false) => {
                self.egal_tenu = false;
                self.appui_egal_quitte();
            }
            (false, true) => {
                self.egal_tenu = false;
                self.appui_egal_fin(maintenant);
            }
            (false, false) => {
                self.egal_tenu = false;
                self.appui_egal_quitte();
            }
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    Effacer,
    RetourArriere,
}
