//! Incoming write requests, decoupled from the persisted shapes.
//!
//! A command carries what the caller may set; snapshots (client name,
//! product name/description), totals, and timestamps are filled in by the
//! services.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::types::{
    DevisStatut, FactureStatut, LivraisonStatut, MethodePaiement, PaiementStatut,
};

/// One requested document line. The product is resolved against the catalog
/// and its name/description snapshotted into the stored line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LigneCommande {
    pub produit_id: String,
    pub quantite: u32,
    pub prix_unitaire: Decimal,
    /// Per-line discount percent, 0–100. Defaults to 0.
    #[serde(default)]
    pub remise: Decimal,
}

/// Create/update request for a quote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DevisCommande {
    /// Proposed number; regenerated on collision.
    pub numero: String,
    pub client_id: String,
    pub date_creation: NaiveDate,
    pub date_expiration: NaiveDate,
    #[serde(default)]
    pub statut: DevisStatut,
    pub lignes: Vec<LigneCommande>,
    #[serde(default)]
    pub remise_totale: Decimal,
    #[serde(default = "tva_par_defaut")]
    pub appliquer_tva: bool,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub conditions_reglement: Option<String>,
}

/// Create/update request for an invoice.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactureCommande {
    pub numero: String,
    pub client_id: String,
    pub date_creation: NaiveDate,
    pub date_echeance: NaiveDate,
    #[serde(default)]
    pub statut: FactureStatut,
    pub lignes: Vec<LigneCommande>,
    #[serde(default)]
    pub remise_totale: Decimal,
    #[serde(default = "tva_par_defaut")]
    pub appliquer_tva: bool,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update request for a delivery note.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonLivraisonCommande {
    pub numero: String,
    pub client_id: String,
    pub date_creation: NaiveDate,
    pub date_livraison: NaiveDate,
    #[serde(default)]
    pub statut: LivraisonStatut,
    pub lignes: Vec<LigneCommande>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update request for a payment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaiementCommande {
    pub facture_id: String,
    pub montant: Decimal,
    pub date_paiement: NaiveDate,
    #[serde(default)]
    pub methode: MethodePaiement,
    #[serde(default)]
    pub statut: PaiementStatut,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Create/update request for a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientCommande {
    pub nom: String,
    pub email: String,
    pub telephone: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
    pub pays: String,
    pub code: String,
    #[serde(default)]
    pub mf: Option<String>,
}

/// Create/update request for a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProduitCommande {
    pub nom: String,
    #[serde(default)]
    pub description: String,
    pub prix: Decimal,
    pub categorie: String,
    #[serde(default = "actif_par_defaut")]
    pub actif: bool,
}

fn tva_par_defaut() -> bool {
    true
}

fn actif_par_defaut() -> bool {
    true
}
