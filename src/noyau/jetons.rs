// src/noyau/jetons.rs

use super::erreurs::ErreurSyntaxe;

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne (déjà filtrée par la liste blanche) en jetons.
/// Supporte:
/// - nombres décimaux : 12, 1.5, .5, 5.
/// - opérateurs + - * /
/// - parenthèses ( )
/// - espaces ignorés (mais ils séparent deux nombres : "1 2" reste deux jetons)
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurSyntaxe> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        let simple = match c {
            '(' => Some(Tok::LPar),
            ')' => Some(Tok::RPar),
            '+' => Some(Tok::Plus),
            '-' => Some(Tok::Minus),
            '*' => Some(Tok::Star),
            '/' => Some(Tok::Slash),
            _ => None,
        };
        if let Some(t) = simple {
            out.push(t);
            i += 1;
            continue;
        }

        // Nombre : chiffres et au plus un point
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lit: String = chars[start..i].iter().collect();
            out.push(Tok::Num(parse_nombre(&lit)?));
            continue;
        }

        return Err(ErreurSyntaxe::CaractereInattendu(c));
    }

    Ok(out)
}

/// "1.5", ".5", "5." acceptés ; "." et "1.2.3" refusés.
fn parse_nombre(lit: &str) -> Result<f64, ErreurSyntaxe> {
    let points = lit.chars().filter(|c| *c == '.').count();
    let chiffres = lit.chars().any(|c| c.is_ascii_digit());
    if points > 1 || !chiffres {
        return Err(ErreurSyntaxe::NombreInvalide(lit.to_string()));
    }
    lit.parse::<f64>()
        .map_err(|_| ErreurSyntaxe::NombreInvalide(lit.to_string()))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    tokens
        .iter()
        .map(|t| match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
