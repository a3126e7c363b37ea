//! Dashboard aggregates.
//!
//! Pure functions over already-loaded slices; the caller decides how much
//! history to feed in. Nothing here touches the store.

use std::collections::HashMap;

use chrono::Datelike;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::core::{Client, Devis, DevisStatut, Facture, FactureStatut, MethodePaiement, Paiement};

/// The headline numbers of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableauDeBord {
    /// Sum of paid invoice totals.
    pub chiffre_affaires: Decimal,
    /// Invoices sent or overdue, awaiting payment.
    pub factures_en_attente: usize,
    /// Quotes sent and not yet answered.
    pub devis_en_cours: usize,
    pub clients_actifs: usize,
}

pub fn tableau_de_bord(
    factures: &[Facture],
    devis: &[Devis],
    clients: &[Client],
) -> TableauDeBord {
    let chiffre_affaires = factures
        .iter()
        .filter(|f| f.statut == FactureStatut::Payee)
        .map(|f| f.total)
        .sum();
    let factures_en_attente = factures
        .iter()
        .filter(|f| matches!(f.statut, FactureStatut::Envoyee | FactureStatut::EnRetard))
        .count();
    let devis_en_cours = devis
        .iter()
        .filter(|d| d.statut == DevisStatut::Envoye)
        .count();

    TableauDeBord {
        chiffre_affaires,
        factures_en_attente,
        devis_en_cours,
        clients_actifs: clients.len(),
    }
}

/// Paid revenue booked in a given month.
pub fn revenu_du_mois(factures: &[Facture], annee: i32, mois: u32) -> Decimal {
    factures
        .iter()
        .filter(|f| {
            f.statut == FactureStatut::Payee
                && f.date_creation.year() == annee
                && f.date_creation.month() == mois
        })
        .map(|f| f.total)
        .sum()
}

/// Month-over-month revenue trend in percent. `None` when the reference
/// month had no revenue (a trend against zero is meaningless).
pub fn tendance_revenu(courant: Decimal, precedent: Decimal) -> Option<Decimal> {
    if precedent <= Decimal::ZERO {
        return None;
    }
    Some((courant - precedent) / precedent * dec!(100))
}

/// Payment count per method.
pub fn repartition_paiements(paiements: &[Paiement]) -> HashMap<MethodePaiement, usize> {
    let mut repartition = HashMap::new();
    for paiement in paiements {
        *repartition.entry(paiement.methode).or_insert(0) += 1;
    }
    repartition
}
