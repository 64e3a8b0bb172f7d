// src/app.rs
//
// Calculatrice live — module App (racine)
// ---------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs, vue.rs, minuterie.rs, reglages.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l’impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Clavier + collage : traduits ici en `Commande`, une fois par frame.
// - Les minuteries (flash, appui long) avancent via `tic` ; on demande un
//   repaint à l’échéance pour qu’elles tombent sans action utilisateur.

pub mod etat;
pub mod minuterie;
pub mod reglages;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use etat::Commande;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let (maintenant, evenements) = ctx.input(|i| (i.time, i.events.clone()));

        for cmd in evenements.iter().flat_map(commandes_clavier) {
            self.appliquer(cmd, maintenant);
        }

        self.tic(maintenant);

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui);
        });

        if let Some(delai) = self.prochaine_echeance(maintenant) {
            ctx.request_repaint_after(delai);
        }
    }
}

/// Traduit un événement egui en commandes.
///
/// - Enter / "=" : égal
/// - Backspace : retour arrière
/// - Escape : effacer
/// - chiffres, opérateurs, parenthèses, point : ajout
/// - collage : texte brut (filtré par le contrôleur)
pub fn commandes_clavier(ev: &egui::Event) -> Vec<Commande> {
    match ev {
        egui::Event::Key {
            key, pressed: true, ..
        } => match key {
            egui::Key::Enter => vec![Commande::Egal],
            egui::Key::Backspace => vec![Commande::RetourArriere],
            egui::Key::Escape => vec![Commande::Effacer],
            _ => Vec::new(),
        },

        // "=" arrive en texte (pas via Key::Equals, sinon double déclenchement)
        egui::Event::Text(texte) => texte
            .chars()
            .filter_map(|c| match c {
                '=' => Some(Commande::Egal),
                '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.' => {
                    Some(Commande::Ajouter(c.to_string()))
                }
                _ => None,
            })
            .collect(),

        egui::Event::Paste(texte) => vec![Commande::Coller(texte.clone())],

        _ => Vec::new(),
    }
}
