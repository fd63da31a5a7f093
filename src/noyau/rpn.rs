// src/noyau/rpn.rs
//
// Shunting-yard -> RPN
// Objectif:
// - Convertir une suite de Tok en RPN (postfix)
// - La RPN est évaluée telle quelle sur une pile de valeurs (eval.rs)
//
// Règles:
// - Précédences : moins unaire (4) > ** (3, associatif à droite) > * / (2) > + - (1)
// - Math(f) / Factorielle : fonction unaire, DOIT être suivie de '('
// - Moins unaire : '-' quand on n’attend PAS un opérateur => Tok::Neg ; '+' unaire ignoré
// - Deux opérandes juxtaposés (ex: "2 3", "2 (3)") : refusé
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::erreur::CalcError;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        Tok::Pow => 3,
        Tok::Neg => 4,
        _ => 0,
    }
}

fn is_right_associative(t: &Tok) -> bool {
    matches!(t, Tok::Pow)
}

fn is_fonction(t: &Tok) -> bool {
    matches!(t, Tok::Math(_) | Tok::Factorielle)
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Math(Sin), LPar, Num(30), Plus, Num(60), RPar]
///   rpn:    [Num(30), Num(60), Plus, Math(Sin)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, CalcError> {
    if tokens.is_empty() {
        return Err(CalcError::syntaxe("expression vide"));
    }

    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire et les opérandes juxtaposés.
    let mut prev_was_value = false;

    // Vrai juste après un nom de fonction : seul '(' est admis.
    let mut attend_lpar = false;

    for tok in tokens.iter().cloned() {
        if attend_lpar && tok != Tok::LPar {
            return Err(CalcError::syntaxe("« ( » attendue après une fonction"));
        }
        attend_lpar = false;

        match tok {
            Tok::Num(_) => {
                if prev_was_value {
                    return Err(CalcError::syntaxe("opérateur manquant"));
                }
                out.push(tok);
                prev_was_value = true;
            }

            Tok::Math(_) | Tok::Factorielle => {
                if prev_was_value {
                    return Err(CalcError::syntaxe("opérateur manquant"));
                }
                ops.push(tok);
                attend_lpar = true;
            }

            Tok::LPar => {
                if prev_was_value {
                    return Err(CalcError::syntaxe("opérateur manquant"));
                }
                ops.push(tok);
            }

            Tok::RPar => {
                if !prev_was_value {
                    return Err(CalcError::syntaxe("opérande manquant avant « ) »"));
                }

                // dépile jusqu’à '('
                let mut ouverte = false;
                while let Some(top) = ops.pop() {
                    if top == Tok::LPar {
                        ouverte = true;
                        break;
                    }
                    out.push(top);
                }
                if !ouverte {
                    return Err(CalcError::syntaxe("« ) » sans « ( » correspondante"));
                }

                // si une fonction est au sommet, on la sort aussi
                if ops.last().is_some_and(is_fonction) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                prev_was_value = true;
            }

            Tok::Minus | Tok::Plus if !prev_was_value => {
                // unaire : '-' devient Neg, '+' ne change rien
                if tok == Tok::Minus {
                    ops.push(Tok::Neg);
                }
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash | Tok::Pow => {
                if !prev_was_value {
                    return Err(CalcError::syntaxe("opérande manquant"));
                }

                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if *top == Tok::LPar || is_fonction(top) {
                        break;
                    }

                    let p_top = precedence(top);
                    let p_tok = precedence(&tok);

                    let doit_pop = if is_right_associative(&tok) {
                        p_top > p_tok
                    } else {
                        p_top >= p_tok
                    };

                    if !doit_pop {
                        break;
                    }
                    if let Some(op) = ops.pop() {
                        out.push(op);
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }

            Tok::Neg => return Err(CalcError::syntaxe("jeton interne inattendu")),
        }
    }

    if attend_lpar || !prev_was_value {
        return Err(CalcError::syntaxe("expression incomplète"));
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if op == Tok::LPar {
            return Err(CalcError::syntaxe("parenthèses non fermées"));
        }
        out.push(op);
    }

    Ok(out)
}
