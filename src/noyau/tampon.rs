// src/noyau/tampon.rs
//
// Tampon d’expression : le texte tapé, rien d’autre.
// Aucune validation ici (les caractères invalides sont vus à l’évaluation).

use super::format::formater_resultat;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TamponExpression {
    texte: String,
}

impl TamponExpression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texte(&self) -> &str {
        &self.texte
    }

    pub fn est_vide(&self) -> bool {
        self.texte.is_empty()
    }

    /// Texte à afficher : "0" si vide.
    pub fn affichage(&self) -> &str {
        if self.est_vide() {
            "0"
        } else {
            &self.texte
        }
    }

    pub fn ajouter(&mut self, fragment: &str) {
        self.texte.push_str(fragment);
    }

    /// Retire le dernier caractère (un glyphe × compte pour un). Vide => rien.
    pub fn retour_arriere(&mut self) {
        self.texte.pop();
    }

    pub fn effacer(&mut self) {
        self.texte.clear();
    }

    /// Remplace tout le contenu par le texte d’un résultat.
    pub fn valider_resultat(&mut self, valeur: f64) {
        self.texte = formater_resultat(valeur);
    }
}
