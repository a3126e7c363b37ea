//! Display formatting for printed documents.
//!
//! Amounts follow the fr-TN convention: space-grouped thousands, comma
//! decimal separator, three fraction digits (millimes), "DT" suffix. Dates
//! are day/month/year.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;

const MOIS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// `1234.5` → `"1 234,500 DT"`.
pub fn format_montant(montant: Decimal) -> String {
    let arrondi = montant.round_dp(3);
    let signe = if arrondi.is_sign_negative() && !arrondi.is_zero() {
        "-"
    } else {
        ""
    };
    let texte = format!("{:.3}", arrondi.abs());
    let (entier, fraction) = texte.split_once('.').unwrap_or((texte.as_str(), "000"));
    format!("{signe}{},{fraction} DT", grouper_milliers(entier))
}

/// Float entry point for callers holding non-Decimal amounts. NaN and
/// infinities fall back to the zero representation instead of failing.
pub fn format_montant_f64(montant: f64) -> String {
    Decimal::from_f64(montant)
        .map(format_montant)
        .unwrap_or_else(|| format_montant(Decimal::ZERO))
}

/// `2025-03-07` → `"07/03/2025"`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// `2025-03-07` → `"7 mars 2025"`.
pub fn format_date_longue(date: NaiveDate) -> String {
    format!(
        "{} {} {}",
        date.day(),
        MOIS[date.month0() as usize],
        date.year()
    )
}

fn grouper_milliers(chiffres: &str) -> String {
    let mut groupes = Vec::new();
    let octets = chiffres.as_bytes();
    let mut fin = octets.len();
    while fin > 3 {
        groupes.push(&chiffres[fin - 3..fin]);
        fin -= 3;
    }
    groupes.push(&chiffres[..fin]);
    groupes.reverse();
    groupes.join(" ")
}
