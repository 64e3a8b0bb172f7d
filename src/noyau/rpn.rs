// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Tok en RPN (postfix), en validant la syntaxe au passage
// - Puis évaluer la RPN sur une pile de f64
//
// Règles:
// - '+' / '-' quand on n’attend PAS une valeur => opérateur unaire (préfixe)
// - unaires : précédence maximale, associatifs à droite ("- -2" = 2)
// - deux valeurs collées ("2 3", "2(3)", ")(") => erreur (pas de multiplication implicite)

use super::erreurs::ErreurSyntaxe;
use super::jetons::Tok;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Pos,
}

#[derive(Clone, Debug, PartialEq)]
pub enum ElemRpn {
    Num(f64),
    Op(Op),
}

/// Pile d’opérateurs du shunting-yard.
#[derive(Clone, Copy, Debug)]
enum Pile {
    Op(Op),
    LPar,
}

fn precedence(op: Op) -> u8 {
    match op {
        Op::Add | Op::Sub => 1,
        Op::Mul | Op::Div => 2,
        Op::Neg | Op::Pos => 3,
    }
}

fn is_unaire(op: Op) -> bool {
    matches!(op, Op::Neg | Op::Pos)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Star, Minus, Num(3)]
///   rpn:    [2, 3, Neg, Mul]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<ElemRpn>, ErreurSyntaxe> {
    let mut out: Vec<ElemRpn> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Pile> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter les unaires et les valeurs collées.
    let mut prev_was_value = false;

    for tok in tokens {
        match tok {
            Tok::Num(v) => {
                if prev_was_value {
                    return Err(ErreurSyntaxe::ValeurInattendue);
                }
                out.push(ElemRpn::Num(*v));
                prev_was_value = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(ErreurSyntaxe::ValeurInattendue);
                }
                ops.push(Pile::LPar);
            }

            Tok::RPar => {
                // "()" ou "2+)" : rien à fermer
                if !prev_was_value {
                    return Err(ErreurSyntaxe::OperandeManquant);
                }
                loop {
                    match ops.pop() {
                        Some(Pile::LPar) => break,
                        Some(Pile::Op(op)) => out.push(ElemRpn::Op(op)),
                        None => return Err(ErreurSyntaxe::ParentheseOrpheline),
                    }
                }
                prev_was_value = true;
            }

            Tok::Plus | Tok::Minus if !prev_was_value => {
                let op = if matches!(tok, Tok::Minus) {
                    Op::Neg
                } else {
                    Op::Pos
                };
                // préfixe : rien à dépiler
                ops.push(Pile::Op(op));
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                if !prev_was_value {
                    return Err(ErreurSyntaxe::OperandeManquant);
                }
                let op = match tok {
                    Tok::Plus => Op::Add,
                    Tok::Minus => Op::Sub,
                    Tok::Star => Op::Mul,
                    _ => Op::Div,
                };

                // binaires : tous associatifs à gauche
                while let Some(Pile::Op(top)) = ops.last() {
                    if precedence(*top) >= precedence(op) {
                        out.push(ElemRpn::Op(*top));
                        ops.pop();
                    } else {
                        break;
                    }
                }

                ops.push(Pile::Op(op));
                prev_was_value = false;
            }
        }
    }

    if !prev_was_value {
        return Err(if tokens.is_empty() {
            ErreurSyntaxe::Vide
        } else {
            ErreurSyntaxe::OperandeManquant
        });
    }

    // vide la pile ops
    while let Some(p) = ops.pop() {
        match p {
            Pile::LPar => return Err(ErreurSyntaxe::ParentheseNonFermee),
            Pile::Op(op) => out.push(ElemRpn::Op(op)),
        }
    }

    Ok(out)
}

/// Évalue une RPN. Aucune vérification de finitude ici (10/0 donne inf) :
/// c’est l’appelant qui décide.
pub fn eval_rpn(rpn: &[ElemRpn]) -> Result<f64, ErreurSyntaxe> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for e in rpn {
        match e {
            ElemRpn::Num(v) => st.push(*v),

            ElemRpn::Op(op) if is_unaire(*op) => {
                let x = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                st.push(if *op == Op::Neg { -x } else { x });
            }

            ElemRpn::Op(op) => {
                let b = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                let a = st.pop().ok_or(ErreurSyntaxe::OperandeManquant)?;
                st.push(match op {
                    Op::Add => a + b,
                    Op::Sub => a - b,
                    Op::Mul => a * b,
                    _ => a / b,
                });
            }
        }
    }

    match (st.pop(), st.is_empty()) {
        (Some(v), true) => Ok(v),
        _ => Err(ErreurSyntaxe::OperandeManquant),
    }
}

/// Format utilitaire (journal) : RPN en texte.
pub fn format_rpn(rpn: &[ElemRpn]) -> String {
    rpn.iter()
        .map(|e| match e {
            ElemRpn::Num(v) => format!("{v}"),
            ElemRpn::Op(Op::Add) => "+".to_string(),
            ElemRpn::Op(Op::Sub) => "-".to_string(),
            ElemRpn::Op(Op::Mul) => "*".to_string(),
            ElemRpn::Op(Op::Div) => "/".to_string(),
            ElemRpn::Op(Op::Neg) => "neg".to_string(),
            ElemRpn::Op(Op::Pos) => "pos".to_string(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}
