use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A customer account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: String,
    pub nom: String,
    /// Unique across clients.
    pub email: String,
    pub telephone: String,
    pub adresse: String,
    pub ville: String,
    pub code_postal: String,
    pub pays: String,
    /// Short unique client code (e.g. "CL-0042").
    pub code: String,
    /// Matricule fiscale (tax id), shown on documents when present.
    pub mf: Option<String>,
    /// Sum of this client's invoice totals. Maintained on invoice
    /// create/update/delete, never on payment changes.
    pub total_facture: Decimal,
    pub date_creation: NaiveDateTime,
    pub date_modification: NaiveDateTime,
}

/// A catalog product. Name and description are snapshotted into document
/// lines at write time; later edits never touch issued documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produit {
    pub id: String,
    /// Unique across products.
    pub nom: String,
    pub description: String,
    pub prix: Decimal,
    pub categorie: String,
    pub actif: bool,
    pub date_creation: NaiveDateTime,
    pub date_modification: NaiveDateTime,
}

/// One row of a devis, facture, or bon de livraison.
///
/// `produit_nom` and `produit_description` are captured from the catalog at
/// creation time. `total` is evaluated at write time and stored, not
/// recomputed on read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LigneDocument {
    pub produit_id: String,
    pub produit_nom: String,
    pub produit_description: Option<String>,
    pub quantite: u32,
    pub prix_unitaire: Decimal,
    /// Per-line discount percent, 0–100.
    pub remise: Decimal,
    /// `quantite * prix_unitaire * (1 - remise/100)`.
    pub total: Decimal,
}

/// The three document kinds sharing the line-item shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    Devis,
    Facture,
    BonLivraison,
}

impl DocumentKind {
    /// Number prefix: `D-{year}-…`, `F-{year}-…`, `BL-{year}-…`.
    pub fn prefixe(&self) -> &'static str {
        match self {
            Self::Devis => "D",
            Self::Facture => "F",
            Self::BonLivraison => "BL",
        }
    }

    /// Lowercase label used in filenames (`devis-D-2025-0001.pdf`).
    pub fn libelle(&self) -> &'static str {
        match self {
            Self::Devis => "devis",
            Self::Facture => "facture",
            Self::BonLivraison => "bon-livraison",
        }
    }
}

/// Quote lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DevisStatut {
    Brouillon,
    Envoye,
    Accepte,
    Refuse,
    Expire,
}

impl Default for DevisStatut {
    fn default() -> Self {
        Self::Brouillon
    }
}

/// Invoice lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FactureStatut {
    Brouillon,
    Envoyee,
    Payee,
    EnRetard,
    Annulee,
}

impl Default for FactureStatut {
    fn default() -> Self {
        Self::Brouillon
    }
}

/// Delivery note lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LivraisonStatut {
    Prepare,
    Expediee,
    Livree,
}

impl Default for LivraisonStatut {
    fn default() -> Self {
        Self::Prepare
    }
}

/// A quote (devis).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Devis {
    pub id: String,
    /// Unique human-readable number, `D-{year}-{suffix}`.
    pub numero: String,
    pub client_id: String,
    /// Client name snapshot at creation time.
    pub client_nom: String,
    pub date_creation: NaiveDate,
    pub date_expiration: NaiveDate,
    pub statut: DevisStatut,
    pub lignes: Vec<LigneDocument>,
    pub sous_total: Decimal,
    /// Global discount percent, 0–100.
    pub remise_totale: Decimal,
    pub tva: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
    /// Payment-terms free text shown on the printed quote.
    pub conditions_reglement: Option<String>,
    pub date_modification: NaiveDateTime,
}

/// An invoice (facture).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Facture {
    pub id: String,
    /// Unique human-readable number, `F-{year}-{suffix}`.
    pub numero: String,
    pub client_id: String,
    pub client_nom: String,
    pub date_creation: NaiveDate,
    pub date_echeance: NaiveDate,
    pub statut: FactureStatut,
    pub lignes: Vec<LigneDocument>,
    pub sous_total: Decimal,
    pub remise_totale: Decimal,
    pub tva: Decimal,
    pub total: Decimal,
    pub notes: Option<String>,
    pub date_modification: NaiveDateTime,
}

/// A delivery note (bon de livraison). Carries no financial totals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BonLivraison {
    pub id: String,
    /// Unique human-readable number, `BL-{year}-{suffix}`.
    pub numero: String,
    pub client_id: String,
    pub client_nom: String,
    pub date_creation: NaiveDate,
    pub date_livraison: NaiveDate,
    pub statut: LivraisonStatut,
    pub lignes: Vec<LigneDocument>,
    pub notes: Option<String>,
    pub date_modification: NaiveDateTime,
}

/// Payment method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodePaiement {
    Especes,
    Carte,
    Virement,
    Cheque,
    Paypal,
    Stripe,
}

impl Default for MethodePaiement {
    fn default() -> Self {
        Self::Virement
    }
}

impl MethodePaiement {
    pub fn libelle(&self) -> &'static str {
        match self {
            Self::Especes => "Espèces",
            Self::Carte => "Carte bancaire",
            Self::Virement => "Virement",
            Self::Cheque => "Chèque",
            Self::Paypal => "PayPal",
            Self::Stripe => "Stripe",
        }
    }
}

/// Payment lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaiementStatut {
    EnAttente,
    Confirme,
    Refuse,
}

impl Default for PaiementStatut {
    fn default() -> Self {
        Self::EnAttente
    }
}

/// A transaction applied against one invoice. Created, edited, and deleted
/// independently of the invoice lifecycle; deleting the invoice cascades.
/// Nothing prevents the sum of payments from exceeding the invoice total.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paiement {
    pub id: String,
    pub facture_id: String,
    pub montant: Decimal,
    pub date_paiement: NaiveDate,
    pub methode: MethodePaiement,
    pub statut: PaiementStatut,
    pub reference: Option<String>,
    pub notes: Option<String>,
    pub date_modification: NaiveDateTime,
}

/// Company settings, stored as a single record and consumed by the renderer.
/// Every block is optional; missing fields are simply omitted from printed
/// documents.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Parametres {
    pub profil_utilisateur: Option<ProfilUtilisateur>,
    pub entreprise: Option<Entreprise>,
    pub config_email: Option<ConfigEmail>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilUtilisateur {
    pub nom: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Entreprise {
    pub nom: Option<String>,
    /// Company tax / registration id.
    pub siret: Option<String>,
    pub adresse: Option<String>,
    /// Logo as a data URL, embedded as-is in document headers.
    pub logo: Option<String>,
    /// Bank details (RIB) printed on invoices.
    pub rib: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigEmail {
    pub smtp: Option<String>,
    pub port: Option<u16>,
}
