// src/noyau/jetons.rs
//
// Tokenisation de l’expression CANONIQUE (sortie de la normalisation).
// Vocabulaire fermé : aucun identifiant hors de `math.<fn>` et `factorial`.

use super::erreur::CalcError;
use super::math_degres::Fonction;

/// Qualificatif de l’espace de fonctions dans la forme canonique.
pub const QUALIFICATIF: &str = "math";

/// Nom canonique de la factorielle.
pub const FACTORIELLE: &str = "factorial";

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    // Appels : le parse (RPN) exige une '(' juste après.
    Math(Fonction),
    Factorielle,

    Plus,
    Minus,
    Star,
    Slash,
    Pow, // **

    // Moins unaire : produit par to_rpn (RPN), jamais par tokenize.
    Neg,

    LPar,
    RPar,
}

/// Tokenize une expression canonique.
/// Supporte:
/// - nombres décimaux (ex: 12, 3.5, .5, 5.)
/// - opérateurs + - * / et ** (puissance)
/// - parenthèses ( )
/// - appels math.sqrt / math.log10 / math.sin / math.cos / math.tan / factorial
pub fn tokenize(s: &str) -> Result<Vec<Tok>, CalcError> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            '*' => {
                // ** = puissance, * = produit
                if chars.get(i + 1) == Some(&'*') {
                    out.push(Tok::Pow);
                    i += 2;
                } else {
                    out.push(Tok::Star);
                    i += 1;
                }
                continue;
            }
            _ => {}
        }

        // Nombre décimal : chiffres et un point au plus (le parse tranche)
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| CalcError::syntaxe(format!("nombre invalide « {txt} »")))?;
            out.push(Tok::Num(v));
            continue;
        }

        // Identifiants : [a-zA-Z_][a-zA-Z0-9_]* avec au plus un qualificatif “x.”
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len()
                && (chars[i].is_ascii_alphanumeric() || chars[i] == '_' || chars[i] == '.')
            {
                i += 1;
            }
            let mot: String = chars[start..i].iter().collect();
            out.push(identifiant(&mot)?);
            continue;
        }

        return Err(CalcError::syntaxe(format!("caractère inattendu « {c} »")));
    }

    Ok(out)
}

fn identifiant(mot: &str) -> Result<Tok, CalcError> {
    if mot == FACTORIELLE {
        return Ok(Tok::Factorielle);
    }

    let fonction = mot
        .split_once('.')
        .filter(|(qualif, _)| *qualif == QUALIFICATIF)
        .and_then(|(_, nom)| Fonction::depuis_nom(nom));

    fonction
        .map(Tok::Math)
        .ok_or_else(|| CalcError::syntaxe(format!("identifiant inconnu « {mot} »")))
}

/// Format utilitaire (journal) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => format!("{v}"),
            Tok::Math(f) => format!("{QUALIFICATIF}.{}", f.nom()),
            Tok::Factorielle => FACTORIELLE.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Pow => "**".to_string(),
            Tok::Neg => "neg".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
