// src/noyau/normalisation.rs
//
// Notation calculatrice -> expression canonique
// ---------------------------------------------
// Étapes (l’ordre compte, chaque étape voit le résultat de la précédente) :
// 1) entrée vide => EmptyInput
// 2) √x, √(…) => math.sqrt(x), math.sqrt((…)) ; de la DERNIÈRE racine vers la première
// 3) multiplication implicite : chiffre / ')' / '!' devant une fonction ou '('
// 4) multiplication implicite : ')' / '!' devant un chiffre
// 5) ^ => **
// 6) n! => factorial(n) (n numéral, signé si le '-' n’est pas une soustraction)
// 7) log( sin( cos( tan( sqrt( => math.log10( math.sin( …
//
// Les chiffres à l’intérieur d’un identifiant (log10) ne comptent jamais comme numéral :
// chaque motif commence par une alternative “identifiant entier” recopiée telle quelle.
// Invariant : normalize(normalize(x)) == normalize(x).

use std::sync::OnceLock;

use regex::{Captures, Regex};
use tracing::debug;

use super::erreur::CalcError;

/// Symbole racine accepté en entrée.
pub const RACINE: char = '√';

/// Forme canonique d’un appel racine (sans la parenthèse).
const APPEL_RACINE: &str = "math.sqrt";

static RE_IMPLICITE_FONCTION: OnceLock<Regex> = OnceLock::new();
static RE_IMPLICITE_CHIFFRE: OnceLock<Regex> = OnceLock::new();
static RE_FACTORIELLE: OnceLock<Regex> = OnceLock::new();
static RE_FONCTIONS: OnceLock<Regex> = OnceLock::new();

fn motif(cellule: &'static OnceLock<Regex>, source: &str) -> &'static Regex {
    cellule.get_or_init(|| Regex::new(source).expect("motif de normalisation invalide"))
}

/// Réécrit une saisie calculatrice en expression canonique (fonction pure).
pub fn normalize(raw: &str) -> Result<String, CalcError> {
    if raw.trim().is_empty() {
        return Err(CalcError::EmptyInput);
    }

    let expr = reecrire_racines(raw)?;
    let expr = multiplication_implicite(&expr);
    let expr = expr.replace('^', "**");
    let expr = factorielles(&expr);
    let expr = fonctions_qualifiees(&expr);

    debug!(brut = raw, canonique = %expr, "normalisation");
    Ok(expr)
}

/* ------------------------ 2) Racines ------------------------ */

/// Remplace chaque √ par un appel math.sqrt(…), en partant de la dernière occurrence :
/// l’opérande d’une racine extérieure est alors un appel déjà réécrit (√√16, √(√(16))).
///
/// Chaque tour retire exactement un √ ; le nombre de tours est borné par le nombre initial.
/// La réécriture se fait en place et la recherche suivante ne regarde qu’à gauche
/// du √ traité.
fn reecrire_racines(raw: &str) -> Result<String, CalcError> {
    let mut expr = raw.to_string();
    let tours_max = expr.matches(RACINE).count();
    let mut borne = expr.len();

    for _ in 0..tours_max {
        let Some(pos) = expr[..borne].rfind(RACINE) else {
            break;
        };

        let apres = pos + RACINE.len_utf8();
        let reste = &expr[apres..];
        let debut = apres + (reste.len() - reste.trim_start().len());

        let Some(longueur) = longueur_operande(&expr[debut..]) else {
            debug!(expr = %expr, position = pos, "√ sans opérande exploitable");
            return Err(CalcError::MalformedExpression);
        };

        let fin = debut + longueur;
        let appel = format!("{APPEL_RACINE}({})", &expr[debut..fin]);
        expr.replace_range(pos..fin, &appel);
        borne = pos;
    }

    if expr.contains(RACINE) {
        return Err(CalcError::MalformedExpression);
    }
    Ok(expr)
}

/// Longueur (octets) de l’opérande en tête de `s` :
/// - numéral décimal  : 12, 12.5
/// - groupe parenthésé équilibré : (…)
/// - appel déjà réécrit : math.sqrt(…)
///
/// Le groupe peut contenir d’autres parenthèses : √((1+3)) et √(2*(3+5)) sont
/// acceptés, au-delà du simple “(…) sans parenthèse interne”.
fn longueur_operande(s: &str) -> Option<usize> {
    let b = s.as_bytes();

    let entiers = b.iter().take_while(|c| c.is_ascii_digit()).count();
    if entiers > 0 {
        if b.get(entiers) == Some(&b'.') {
            let decimales = b[entiers + 1..]
                .iter()
                .take_while(|c| c.is_ascii_digit())
                .count();
            if decimales > 0 {
                return Some(entiers + 1 + decimales);
            }
        }
        return Some(entiers);
    }

    let prefixe = if s.starts_with(APPEL_RACINE) {
        APPEL_RACINE.len()
    } else {
        0
    };
    groupe_equilibre(&s[prefixe..]).map(|n| prefixe + n)
}

/// Longueur du groupe "(…)" équilibré en tête de `s`, parenthèse fermante incluse.
fn groupe_equilibre(s: &str) -> Option<usize> {
    if !s.starts_with('(') {
        return None;
    }

    let mut profondeur = 0usize;
    for (i, c) in s.bytes().enumerate() {
        match c {
            b'(' => profondeur += 1,
            b')' => {
                profondeur -= 1;
                if profondeur == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}

/* ------------------------ 3) + 4) Multiplication implicite ------------------------ */

/// Un '!' ferme un opérande comme ')' : 5!2 => factorial(5)*2 et 3!(2) => factorial(3)*(2),
/// là où une lecture stricte (chiffre ou ')' seulement à gauche) laisserait une erreur
/// de syntaxe.
fn multiplication_implicite(expr: &str) -> String {
    let re_fonction = motif(
        &RE_IMPLICITE_FONCTION,
        r"(?P<ident>[A-Za-z_][A-Za-z0-9_]*)|(?P<gauche>[0-9)!])(?P<droite>(?:math\.)?(?:sqrt|log10|log|sin|cos|tan)\b|\()",
    );
    let expr = re_fonction.replace_all(expr, |caps: &Captures| {
        if let Some(ident) = caps.name("ident") {
            return ident.as_str().to_string();
        }
        format!("{}*{}", &caps["gauche"], &caps["droite"])
    });

    let re_chiffre = motif(&RE_IMPLICITE_CHIFFRE, r"(?P<gauche>[)!])(?P<chiffre>[0-9])");
    re_chiffre
        .replace_all(&expr, "${gauche}*${chiffre}")
        .into_owned()
}

/* ------------------------ 6) Factorielle postfixée ------------------------ */

fn factorielles(expr: &str) -> String {
    let re = motif(
        &RE_FACTORIELLE,
        r"(?P<ident>[A-Za-z_][A-Za-z0-9_]*)|(?P<nombre>-?[0-9]+(?:\.[0-9]+)?)!",
    );

    re.replace_all(expr, |caps: &Captures| {
        if let Some(ident) = caps.name("ident") {
            return ident.as_str().to_string();
        }

        let nombre = &caps["nombre"];
        let debut = caps.get(0).map_or(0, |m| m.start());

        // "3-2!" : le '-' est une soustraction, pas le signe du numéral
        match nombre.strip_prefix('-') {
            Some(absolu) if suit_un_operande(&expr[..debut]) => {
                format!("-factorial({absolu})")
            }
            _ => format!("factorial({nombre})"),
        }
    })
    .into_owned()
}

/// Vrai si le texte se termine (espaces ignorés) par la fin d’un opérande : chiffre . ) !
fn suit_un_operande(avant: &str) -> bool {
    avant
        .trim_end()
        .chars()
        .next_back()
        .is_some_and(|c| c.is_ascii_digit() || matches!(c, '.' | ')' | '!'))
}

/* ------------------------ 7) Fonctions en degrés ------------------------ */

fn fonctions_qualifiees(expr: &str) -> String {
    let re = motif(
        &RE_FONCTIONS,
        r"(?P<qualif>math\.)?(?P<nom>[A-Za-z_][A-Za-z0-9_]*)(?P<paren>\()?",
    );

    re.replace_all(expr, |caps: &Captures| {
        let tel_quel = caps[0].to_string();
        if caps.name("qualif").is_some() || caps.name("paren").is_none() {
            return tel_quel;
        }

        let canonique = match &caps["nom"] {
            "log" => "log10",
            "sin" => "sin",
            "cos" => "cos",
            "tan" => "tan",
            "sqrt" => "sqrt",
            _ => return tel_quel,
        };
        format!("math.{canonique}(")
    })
    .into_owned()
}
