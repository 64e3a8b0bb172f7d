//! src/app/etat.rs
//!
//! État UI + machine à états (sans vue).
//!
//! Rôle : posséder le tampon d’expression, l’aperçu en direct, le flash d’erreur
//! et l’appui long sur "=". Toutes les actions passent par ici.
//!
//! Contrats :
//! - Le temps est injecté (`maintenant`, secondes de l’horloge egui) : aucune
//!   lecture d’horloge cachée, donc des tests déterministes.
//! - Une évaluation ratée ne touche jamais au tampon.
//! - Toute mutation du tampon recalcule l’aperçu et annule un flash en cours.

use std::time::Duration;

use tracing::{debug, info};

use super::minuterie::Minuterie;
use super::reglages::Reglages;
use crate::noyau::eval::{evaluer, CHIFFRES_SIGNIFICATIFS};
use crate::noyau::filtre::filtrer_collage;
use crate::noyau::format::{arrondir_significatif, formater_resultat};
use crate::noyau::tampon::TamponExpression;

/// Ce que montre la zone “résultat”.
#[derive(Clone, Debug, PartialEq)]
pub enum EtatAffichage {
    /// Aperçu en direct du tampon.
    Inactif,
    /// Message d’erreur temporaire (retour à `Inactif` à l’échéance).
    FlashErreur {
        message: String,
        minuterie: Minuterie,
    },
}

/// Une action utilisateur, quelle que soit sa source (bouton, clavier, collage).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Commande {
    Ajouter(String),
    RetourArriere,
    Effacer,
    Egal,
    Coller(String),
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    tampon: TamponExpression,

    // aperçu en direct ("" si l’évaluation échoue)
    apercu: String,

    etat: EtatAffichage,

    // --- appui long sur "=" ---
    appui_long: Option<Minuterie>,
    appui_long_declenche: bool,
    // utilisé par vue.rs pour détecter appui / relâche / sortie
    pub egal_tenu: bool,

    reglages: Reglages,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(Reglages::default())
    }
}

impl AppCalc {
    pub fn new(reglages: Reglages) -> Self {
        Self {
            tampon: TamponExpression::new(),
            apercu: String::new(),
            etat: EtatAffichage::Inactif,
            appui_long: None,
            appui_long_declenche: false,
            egal_tenu: false,
            reglages,
        }
    }

    /* ------------------------ Lecture (pour la vue) ------------------------ */

    pub fn tampon(&self) -> &TamponExpression {
        &self.tampon
    }

    /// Expression brute ("0" si vide).
    pub fn expression_affichee(&self) -> &str {
        self.tampon().affichage()
    }

    /// Zone résultat : message du flash s’il y en a un, sinon l’aperçu.
    pub fn resultat_affiche(&self) -> &str {
        match &self.etat {
            EtatAffichage::FlashErreur { message, .. } => message,
            EtatAffichage::Inactif => &self.apercu,
        }
    }

    pub fn est_en_flash(&self) -> bool {
        matches!(self.etat, EtatAffichage::FlashErreur { .. })
    }

    /* ------------------------ Actions ------------------------ */

    pub fn appliquer(&mut self, cmd: Commande, maintenant: f64) {
        match cmd {
            Commande::Ajouter(s) => self.ajouter(&s),
            Commande::RetourArriere => self.retour_arriere(),
            Commande::Effacer => self.effacer(),
            Commande::Egal => self.valider(maintenant),
            Commande::Coller(s) => self.coller(&s),
        }
    }

    pub fn ajouter(&mut self, fragment: &str) {
        self.tampon.ajouter(fragment);
        self.rafraichir();
    }

    pub fn retour_arriere(&mut self) {
        self.tampon.retour_arriere();
        self.rafraichir();
    }

    pub fn effacer(&mut self) {
        self.tampon.effacer();
        self.rafraichir();
    }

    /// Collage : seuls les caractères de l’alphabet passent ; rien si vide.
    pub fn coller(&mut self, texte: &str) {
        let propre = filtrer_collage(texte);
        if propre.is_empty() {
            debug!("collage ignoré: aucun caractère autorisé");
            return;
        }
        self.ajouter(&propre);
    }

    /// "=" : Ok => le résultat remplace le tampon ; Err => flash d’erreur.
    pub fn valider(&mut self, maintenant: f64) {
        match evaluer(self.tampon.texte()) {
            Ok(v) => {
                info!(expression = %self.tampon.texte(), resultat = v, "résultat validé");
                self.tampon.valider_resultat(v);
                self.rafraichir();
            }
            Err(e) => {
                debug!(erreur = %e, "flash d’erreur");
                self.etat = EtatAffichage::FlashErreur {
                    message: e.to_string(),
                    minuterie: Minuterie::armer(maintenant, self.reglages.delai_flash),
                };
            }
        }
    }

    /* ------------------------ Appui long sur "=" ------------------------ */

    /// Pointeur enfoncé sur "=" : arme la minuterie d’appui long.
    pub fn appui_egal_debut(&mut self, maintenant: f64) {
        self.appui_long = Some(Minuterie::armer(
            maintenant,
            self.reglages.delai_appui_long,
        ));
        self.appui_long_declenche = false;
    }

    /// Pointeur relâché sur "=" : carré si le seuil est atteint, sinon "=" normal.
    pub fn appui_egal_fin(&mut self, maintenant: f64) {
        self.tic(maintenant);
        self.appui_long = None;
        if std::mem::take(&mut self.appui_long_declenche) {
            // le carré est déjà validé : pas de second "="
            return;
        }
        self.valider(maintenant);
    }

    /// Pointeur sorti du bouton avant relâche : annule tout.
    pub fn appui_egal_quitte(&mut self) {
        if self.appui_long.take().is_some() {
            debug!("appui long annulé");
        }
        self.appui_long_declenche = false;
    }

    /* ------------------------ Minuteries ------------------------ */

    /// À appeler à chaque frame : fait avancer les minuteries.
    pub fn tic(&mut self, maintenant: f64) {
        let flash_echu = matches!(
            &self.etat,
            EtatAffichage::FlashErreur { minuterie, .. } if minuterie.est_echue(maintenant)
        );
        if flash_echu {
            self.etat = EtatAffichage::Inactif;
        }

        if self.appui_long.is_some_and(|m| m.est_echue(maintenant)) {
            self.appui_long = None;
            self.appui_long_declenche = true;
            self.valider_carre();
        }
    }

    /// Temps avant la prochaine échéance (pour demander un repaint).
    pub fn prochaine_echeance(&self, maintenant: f64) -> Option<Duration> {
        let flash = match &self.etat {
            EtatAffichage::FlashErreur { minuterie, .. } => Some(minuterie.restant(maintenant)),
            EtatAffichage::Inactif => None,
        };
        let appui = self.appui_long.map(|m| m.restant(maintenant));

        match (flash, appui) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /* ------------------------ Interne ------------------------ */

    fn valider_carre(&mut self) {
        let v = match evaluer(self.tampon.texte()) {
            Ok(v) => v,
            Err(e) => {
                debug!(erreur = %e, "appui long: expression non évaluable");
                return;
            }
        };

        let carre = arrondir_significatif(v * v, CHIFFRES_SIGNIFICATIFS);
        if !carre.is_finite() {
            debug!(valeur = v, "appui long: carré non fini");
            return;
        }

        info!(valeur = v, carre, "appui long: carré validé");
        self.tampon.valider_resultat(carre);
        self.rafraichir();
    }

    /// Recalcule l’aperçu ; un flash en cours est remplacé par l’aperçu.
    fn rafraichir(&mut self) {
        self.etat = EtatAffichage::Inactif;
        self.apercu = evaluer(self.tampon.texte())
            .map(formater_resultat)
            .unwrap_or_default();
    }
}
