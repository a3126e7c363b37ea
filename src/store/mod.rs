//! Storage boundary.
//!
//! The services are written against one trait per aggregate, in the
//! repository-per-entity style. [`MemoireStore`] implements the whole
//! surface in memory and backs the test-suite; a relational implementation
//! lives outside this crate.
//!
//! Contract notes for implementors:
//! - Inserts assign the entity id and must re-check uniqueness (email, code
//!   client, nom produit, numéro) at write time, returning
//!   [`FacturierError::Conflict`] on violation. A unique database constraint
//!   is the intended backing for numero checks; the pre-check alone leaves a
//!   race window under concurrent writers.
//! - Deletes cascade: a client takes its documents along, a facture takes
//!   its paiements, document lines live inside their document.

mod memory;

pub use memory::MemoireStore;

use crate::core::{
    BonLivraison, Client, Devis, Facture, FacturierError, Paiement, Parametres, Produit,
};
use rust_decimal::Decimal;

pub trait ClientStore {
    fn inserer_client(&mut self, client: Client) -> Result<Client, FacturierError>;
    fn maj_client(&mut self, client: Client) -> Result<Client, FacturierError>;
    /// Cascade: removes the client's devis, factures (with their paiements),
    /// and bons de livraison.
    fn supprimer_client(&mut self, id: &str) -> Result<(), FacturierError>;
    fn client(&self, id: &str) -> Result<Option<Client>, FacturierError>;
    fn clients(&self) -> Result<Vec<Client>, FacturierError>;
    /// Overwrite the stored invoice-total aggregate.
    fn maj_total_facture(&mut self, client_id: &str, total: Decimal)
    -> Result<(), FacturierError>;
}

pub trait ProduitStore {
    fn inserer_produit(&mut self, produit: Produit) -> Result<Produit, FacturierError>;
    fn maj_produit(&mut self, produit: Produit) -> Result<Produit, FacturierError>;
    fn supprimer_produit(&mut self, id: &str) -> Result<(), FacturierError>;
    fn produit(&self, id: &str) -> Result<Option<Produit>, FacturierError>;
    fn produits(&self) -> Result<Vec<Produit>, FacturierError>;
}

pub trait DevisStore {
    fn inserer_devis(&mut self, devis: Devis) -> Result<Devis, FacturierError>;
    fn maj_devis(&mut self, devis: Devis) -> Result<Devis, FacturierError>;
    fn supprimer_devis(&mut self, id: &str) -> Result<(), FacturierError>;
    fn devis(&self, id: &str) -> Result<Option<Devis>, FacturierError>;
    fn tous_devis(&self) -> Result<Vec<Devis>, FacturierError>;
    fn numero_devis_existe(&self, numero: &str) -> Result<bool, FacturierError>;
}

pub trait FactureStore {
    fn inserer_facture(&mut self, facture: Facture) -> Result<Facture, FacturierError>;
    fn maj_facture(&mut self, facture: Facture) -> Result<Facture, FacturierError>;
    /// Cascade: removes the facture's paiements.
    fn supprimer_facture(&mut self, id: &str) -> Result<(), FacturierError>;
    fn facture(&self, id: &str) -> Result<Option<Facture>, FacturierError>;
    fn factures(&self) -> Result<Vec<Facture>, FacturierError>;
    fn factures_du_client(&self, client_id: &str) -> Result<Vec<Facture>, FacturierError>;
    fn numero_facture_existe(&self, numero: &str) -> Result<bool, FacturierError>;
}

pub trait BonLivraisonStore {
    fn inserer_bon(&mut self, bon: BonLivraison) -> Result<BonLivraison, FacturierError>;
    fn maj_bon(&mut self, bon: BonLivraison) -> Result<BonLivraison, FacturierError>;
    fn supprimer_bon(&mut self, id: &str) -> Result<(), FacturierError>;
    fn bon(&self, id: &str) -> Result<Option<BonLivraison>, FacturierError>;
    fn bons(&self) -> Result<Vec<BonLivraison>, FacturierError>;
    fn numero_bon_existe(&self, numero: &str) -> Result<bool, FacturierError>;
}

pub trait PaiementStore {
    fn inserer_paiement(&mut self, paiement: Paiement) -> Result<Paiement, FacturierError>;
    fn maj_paiement(&mut self, paiement: Paiement) -> Result<Paiement, FacturierError>;
    fn supprimer_paiement(&mut self, id: &str) -> Result<(), FacturierError>;
    fn paiement(&self, id: &str) -> Result<Option<Paiement>, FacturierError>;
    fn paiements(&self) -> Result<Vec<Paiement>, FacturierError>;
    fn paiements_de_facture(&self, facture_id: &str) -> Result<Vec<Paiement>, FacturierError>;
}

/// Single-record company settings, injected where needed, never a global.
pub trait ParametresStore {
    fn charger_parametres(&self) -> Result<Parametres, FacturierError>;
    fn enregistrer_parametres(&mut self, parametres: Parametres) -> Result<(), FacturierError>;
}

/// The full storage surface the services operate on.
pub trait Store:
    ClientStore
    + ProduitStore
    + DevisStore
    + FactureStore
    + BonLivraisonStore
    + PaiementStore
    + ParametresStore
{
}

impl<T> Store for T where
    T: ClientStore
        + ProduitStore
        + DevisStore
        + FactureStore
        + BonLivraisonStore
        + PaiementStore
        + ParametresStore
{
}
