// src/noyau/filtre.rs
//
// Liste blanche + normalisation des glyphes.
//
// Contrat (le seul invariant de sûreté du noyau) :
// - rien d’autre que l’alphabet arithmétique n’atteint le tokeniseur.
// - alphabet : [0-9 + - * / ( ) .] + espaces (au sens Unicode, comme \s).

use std::sync::LazyLock;

use regex::Regex;

/// Chaîne entière composée uniquement de l’alphabet (vide acceptée).
static ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9+\-*/().\s]*$").expect("regex littérale valide"));

/// Glyphes alternatifs (boutons, collage) -> équivalent ASCII.
const GLYPHES: [(char, char); 3] = [('×', '*'), ('÷', '/'), ('−', '-')];

/// Remplace ×, ÷, − par *, /, -.
pub fn normaliser_glyphes(s: &str) -> String {
    s.chars().map(normaliser_char).collect()
}

fn normaliser_char(c: char) -> char {
    GLYPHES
        .iter()
        .find(|(glyphe, _)| *glyphe == c)
        .map_or(c, |(_, ascii)| *ascii)
}

/// Vrai si `s` ne contient que des membres de l’alphabet.
pub fn est_dans_alphabet(s: &str) -> bool {
    ALPHABET.is_match(s)
}

/// Un seul caractère (déjà normalisé) appartient-il à l’alphabet ?
pub fn char_autorise(c: char) -> bool {
    matches!(c, '0'..='9' | '+' | '-' | '*' | '/' | '(' | ')' | '.') || c.is_whitespace()
}

/// Collage : normalise puis garde seulement l’alphabet.
/// Le reste est retiré silencieusement (peut donner une chaîne vide).
pub fn filtrer_collage(texte: &str) -> String {
    texte
        .chars()
        .map(normaliser_char)
        .filter(|c| char_autorise(*c))
        .collect()
}
