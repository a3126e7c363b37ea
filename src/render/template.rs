//! HTML rendering of the three document kinds.
//!
//! Templates are embedded in the binary and share one stylesheet. Amounts
//! and dates cross the template boundary as serde strings and are shaped by
//! the registered filters; the totals block prints the *stored* document
//! totals, so a rendered page always reflects what was last persisted.

use std::str::FromStr;

use minijinja::{Environment, UndefinedBehavior, context};
use rust_decimal::Decimal;

use super::format::{format_date, format_date_longue, format_montant};
use super::lettres::montant_en_lettres;
use crate::core::{BonLivraison, Client, Devis, Facture, Parametres};

/// Build the template environment: embedded templates plus the display
/// filters (`montant`, `date_fr`, `date_longue`).
pub fn environnement() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    // Missing optional blocks (logo, RIB, …) resolve to undefined instead
    // of erroring, so templates can chain through absent settings.
    env.set_undefined_behavior(UndefinedBehavior::Chainable);

    env.add_template("style.css", include_str!("templates/style.css"))?;
    env.add_template("devis.html", include_str!("templates/devis.html"))?;
    env.add_template("facture.html", include_str!("templates/facture.html"))?;
    env.add_template(
        "bon_livraison.html",
        include_str!("templates/bon_livraison.html"),
    )?;

    env.add_filter("montant", filtre_montant);
    env.add_filter("date_fr", filtre_date);
    env.add_filter("date_longue", filtre_date_longue);
    Ok(env)
}

fn filtre_montant(valeur: String) -> String {
    Decimal::from_str(&valeur)
        .map(format_montant)
        .unwrap_or_else(|_| format_montant(Decimal::ZERO))
}

fn filtre_date(valeur: String) -> String {
    chrono::NaiveDate::from_str(&valeur)
        .map(format_date)
        .unwrap_or(valeur)
}

fn filtre_date_longue(valeur: String) -> String {
    chrono::NaiveDate::from_str(&valeur)
        .map(format_date_longue)
        .unwrap_or(valeur)
}

pub fn rendre_devis(
    env: &Environment<'static>,
    devis: &Devis,
    client: &Client,
    parametres: &Parametres,
) -> Result<String, minijinja::Error> {
    let remise_montant = devis.sous_total * devis.remise_totale / Decimal::ONE_HUNDRED;
    let template = env.get_template("devis.html")?;
    template.render(context! {
        devis => devis,
        client => client,
        parametres => parametres,
        remise_montant => remise_montant,
        sous_total_apres_remise => devis.sous_total - remise_montant,
        afficher_remise => devis.remise_totale > Decimal::ZERO,
        total_en_lettres => montant_en_lettres(devis.total),
    })
}

pub fn rendre_facture(
    env: &Environment<'static>,
    facture: &Facture,
    client: &Client,
    parametres: &Parametres,
) -> Result<String, minijinja::Error> {
    let remise_montant = facture.sous_total * facture.remise_totale / Decimal::ONE_HUNDRED;
    let template = env.get_template("facture.html")?;
    template.render(context! {
        facture => facture,
        client => client,
        parametres => parametres,
        remise_montant => remise_montant,
        sous_total_apres_remise => facture.sous_total - remise_montant,
        afficher_remise => facture.remise_totale > Decimal::ZERO,
    })
}

pub fn rendre_bon_livraison(
    env: &Environment<'static>,
    bon: &BonLivraison,
    client: &Client,
    parametres: &Parametres,
) -> Result<String, minijinja::Error> {
    let template = env.get_template("bon_livraison.html")?;
    template.render(context! {
        bon => bon,
        client => client,
        parametres => parametres,
    })
}
