//! French amount-in-words, printed on quotes under the totals block.
//!
//! `169.220` → `"CENT SOIXANTE-NEUF DINARS ET 220 MILLIMES"`. The integer
//! part is spelled out (with the irregular 70–79 and 90–99 forms); the
//! fractional part is a zero-padded 3-digit millime count.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;

const UNITES: [&str; 20] = [
    "", "UN", "DEUX", "TROIS", "QUATRE", "CINQ", "SIX", "SEPT", "HUIT", "NEUF", "DIX", "ONZE",
    "DOUZE", "TREIZE", "QUATORZE", "QUINZE", "SEIZE", "DIX-SEPT", "DIX-HUIT", "DIX-NEUF",
];

const DIZAINES: [&str; 9] = [
    "", "DIX", "VINGT", "TRENTE", "QUARANTE", "CINQUANTE", "SOIXANTE", "SOIXANTE-DIX",
    "QUATRE-VINGT",
];

/// Spell out a currency amount: dinars in words, millimes as digits.
pub fn montant_en_lettres(montant: Decimal) -> String {
    let positif = montant.abs();
    let dinars = positif.trunc().to_u64().unwrap_or_default();
    let millimes = ((positif - positif.trunc()) * dec!(1000))
        .round()
        .to_u32()
        .unwrap_or_default();

    let unite = if dinars > 1 { "DINARS" } else { "DINAR" };
    let entier = nombre_en_lettres(dinars);

    if millimes == 0 {
        format!("{entier} {unite}")
    } else {
        format!("{entier} {unite} ET {millimes:03} MILLIMES")
    }
}

/// Spell out a whole number, uppercase.
pub fn nombre_en_lettres(n: u64) -> String {
    if n == 0 {
        return "ZÉRO".to_string();
    }

    let mut morceaux = Vec::new();
    let milliards = n / 1_000_000_000;
    let millions = n / 1_000_000 % 1_000;
    let milliers = n / 1_000 % 1_000;
    let reste = n % 1_000;

    if milliards > 0 {
        morceaux.push(format!(
            "{} {}",
            nombre_en_lettres(milliards),
            if milliards > 1 { "MILLIARDS" } else { "MILLIARD" }
        ));
    }
    if millions > 0 {
        morceaux.push(format!(
            "{} {}",
            moins_de_mille(millions, false),
            if millions > 1 { "MILLIONS" } else { "MILLION" }
        ));
    }
    if milliers > 0 {
        // "mille" is invariant and drops the leading "un"
        if milliers == 1 {
            morceaux.push("MILLE".to_string());
        } else {
            morceaux.push(format!("{} MILLE", moins_de_mille(milliers, false)));
        }
    }
    if reste > 0 {
        morceaux.push(moins_de_mille(reste, true));
    }

    morceaux.join(" ")
}

/// 1..=999. `terminal` governs the plural "s" on VINGTS/CENTS, which only
/// appears when nothing follows.
fn moins_de_mille(n: u64, terminal: bool) -> String {
    let centaines = n / 100;
    let reste = n % 100;

    let mut texte = match centaines {
        0 => String::new(),
        1 => "CENT".to_string(),
        _ => {
            if reste == 0 && terminal {
                format!("{} CENTS", UNITES[centaines as usize])
            } else {
                format!("{} CENT", UNITES[centaines as usize])
            }
        }
    };

    if reste > 0 {
        if !texte.is_empty() {
            texte.push(' ');
        }
        texte.push_str(&moins_de_cent(reste, terminal));
    }
    texte
}

/// 1..=99.
fn moins_de_cent(n: u64, terminal: bool) -> String {
    if n < 20 {
        return UNITES[n as usize].to_string();
    }

    let dizaine = n / 10;
    let unite = n % 10;

    match dizaine {
        // 70–79 and 90–99 build on SOIXANTE / QUATRE-VINGT plus a teen
        7 | 9 => {
            let base = DIZAINES[(dizaine - 1) as usize];
            let teen = n - (dizaine - 1) * 10;
            if teen == 11 {
                format!("{base} ET ONZE")
            } else {
                format!("{base}-{}", UNITES[teen as usize])
            }
        }
        8 => {
            if unite == 0 {
                if terminal {
                    "QUATRE-VINGTS".to_string()
                } else {
                    "QUATRE-VINGT".to_string()
                }
            } else {
                format!("QUATRE-VINGT-{}", UNITES[unite as usize])
            }
        }
        _ => {
            let base = DIZAINES[dizaine as usize];
            match unite {
                0 => base.to_string(),
                1 => format!("{base} ET UN"),
                _ => format!("{base}-{}", UNITES[unite as usize]),
            }
        }
    }
}
