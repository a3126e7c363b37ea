//! In-memory store used by the tests and any embedding that does not need
//! durable persistence.

use std::collections::HashMap;

use rust_decimal::Decimal;

use super::{
    BonLivraisonStore, ClientStore, DevisStore, FactureStore, PaiementStore, ParametresStore,
    ProduitStore,
};
use crate::core::{
    BonLivraison, Client, Devis, Facture, FacturierError, Paiement, Parametres, Produit,
};

/// HashMap-backed store. Uniqueness and cascade rules match the contract in
/// [`crate::store`]; ids are prefixed sequential numbers (`cli-0001`,
/// `fac-0003`).
#[derive(Debug, Default)]
pub struct MemoireStore {
    clients: HashMap<String, Client>,
    produits: HashMap<String, Produit>,
    devis: HashMap<String, Devis>,
    factures: HashMap<String, Facture>,
    bons: HashMap<String, BonLivraison>,
    paiements: HashMap<String, Paiement>,
    parametres: Parametres,
    prochain_id: u64,
}

impl MemoireStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn nouvel_id(&mut self, prefixe: &str) -> String {
        self.prochain_id += 1;
        format!("{prefixe}-{:04}", self.prochain_id)
    }
}

impl ClientStore for MemoireStore {
    fn inserer_client(&mut self, mut client: Client) -> Result<Client, FacturierError> {
        if self.clients.values().any(|c| c.email == client.email) {
            return Err(FacturierError::Conflict(format!(
                "email déjà utilisé: {}",
                client.email
            )));
        }
        if self.clients.values().any(|c| c.code == client.code) {
            return Err(FacturierError::Conflict(format!(
                "code client déjà utilisé: {}",
                client.code
            )));
        }
        client.id = self.nouvel_id("cli");
        self.clients.insert(client.id.clone(), client.clone());
        Ok(client)
    }

    fn maj_client(&mut self, client: Client) -> Result<Client, FacturierError> {
        if !self.clients.contains_key(&client.id) {
            return Err(FacturierError::not_found("client", &client.id));
        }
        if self
            .clients
            .values()
            .any(|c| c.id != client.id && c.email == client.email)
        {
            return Err(FacturierError::Conflict(format!(
                "email déjà utilisé: {}",
                client.email
            )));
        }
        if self
            .clients
            .values()
            .any(|c| c.id != client.id && c.code == client.code)
        {
            return Err(FacturierError::Conflict(format!(
                "code client déjà utilisé: {}",
                client.code
            )));
        }
        self.clients.insert(client.id.clone(), client.clone());
        Ok(client)
    }

    fn supprimer_client(&mut self, id: &str) -> Result<(), FacturierError> {
        if self.clients.remove(id).is_none() {
            return Err(FacturierError::not_found("client", id));
        }
        self.devis.retain(|_, d| d.client_id != id);
        self.bons.retain(|_, b| b.client_id != id);

        let factures_supprimees: Vec<String> = self
            .factures
            .values()
            .filter(|f| f.client_id == id)
            .map(|f| f.id.clone())
            .collect();
        self.factures.retain(|_, f| f.client_id != id);
        self.paiements
            .retain(|_, p| !factures_supprimees.contains(&p.facture_id));
        Ok(())
    }

    fn client(&self, id: &str) -> Result<Option<Client>, FacturierError> {
        Ok(self.clients.get(id).cloned())
    }

    fn clients(&self) -> Result<Vec<Client>, FacturierError> {
        Ok(self.clients.values().cloned().collect())
    }

    fn maj_total_facture(
        &mut self,
        client_id: &str,
        total: Decimal,
    ) -> Result<(), FacturierError> {
        let client = self
            .clients
            .get_mut(client_id)
            .ok_or_else(|| FacturierError::not_found("client", client_id))?;
        client.total_facture = total;
        Ok(())
    }
}

impl ProduitStore for MemoireStore {
    fn inserer_produit(&mut self, mut produit: Produit) -> Result<Produit, FacturierError> {
        if self.produits.values().any(|p| p.nom == produit.nom) {
            return Err(FacturierError::Conflict(format!(
                "nom de produit déjà utilisé: {}",
                produit.nom
            )));
        }
        produit.id = self.nouvel_id("prod");
        self.produits.insert(produit.id.clone(), produit.clone());
        Ok(produit)
    }

    fn maj_produit(&mut self, produit: Produit) -> Result<Produit, FacturierError> {
        if !self.produits.contains_key(&produit.id) {
            return Err(FacturierError::not_found("produit", &produit.id));
        }
        if self
            .produits
            .values()
            .any(|p| p.id != produit.id && p.nom == produit.nom)
        {
            return Err(FacturierError::Conflict(format!(
                "nom de produit déjà utilisé: {}",
                produit.nom
            )));
        }
        self.produits.insert(produit.id.clone(), produit.clone());
        Ok(produit)
    }

    fn supprimer_produit(&mut self, id: &str) -> Result<(), FacturierError> {
        // Lines keep their snapshot; only the catalog entry goes away.
        self.produits
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| FacturierError::not_found("produit", id))
    }

    fn produit(&self, id: &str) -> Result<Option<Produit>, FacturierError> {
        Ok(self.produits.get(id).cloned())
    }

    fn produits(&self) -> Result<Vec<Produit>, FacturierError> {
        Ok(self.produits.values().cloned().collect())
    }
}

impl DevisStore for MemoireStore {
    fn inserer_devis(&mut self, mut devis: Devis) -> Result<Devis, FacturierError> {
        if self.numero_devis_existe(&devis.numero)? {
            return Err(FacturierError::Conflict(format!(
                "numéro de devis déjà utilisé: {}",
                devis.numero
            )));
        }
        devis.id = self.nouvel_id("dev");
        self.devis.insert(devis.id.clone(), devis.clone());
        Ok(devis)
    }

    fn maj_devis(&mut self, devis: Devis) -> Result<Devis, FacturierError> {
        if !self.devis.contains_key(&devis.id) {
            return Err(FacturierError::not_found("devis", &devis.id));
        }
        self.devis.insert(devis.id.clone(), devis.clone());
        Ok(devis)
    }

    fn supprimer_devis(&mut self, id: &str) -> Result<(), FacturierError> {
        self.devis
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| FacturierError::not_found("devis", id))
    }

    fn devis(&self, id: &str) -> Result<Option<Devis>, FacturierError> {
        Ok(self.devis.get(id).cloned())
    }

    fn tous_devis(&self) -> Result<Vec<Devis>, FacturierError> {
        Ok(self.devis.values().cloned().collect())
    }

    fn numero_devis_existe(&self, numero: &str) -> Result<bool, FacturierError> {
        Ok(self.devis.values().any(|d| d.numero == numero))
    }
}

impl FactureStore for MemoireStore {
    fn inserer_facture(&mut self, mut facture: Facture) -> Result<Facture, FacturierError> {
        if self.numero_facture_existe(&facture.numero)? {
            return Err(FacturierError::Conflict(format!(
                "numéro de facture déjà utilisé: {}",
                facture.numero
            )));
        }
        facture.id = self.nouvel_id("fac");
        self.factures.insert(facture.id.clone(), facture.clone());
        Ok(facture)
    }

    fn maj_facture(&mut self, facture: Facture) -> Result<Facture, FacturierError> {
        if !self.factures.contains_key(&facture.id) {
            return Err(FacturierError::not_found("facture", &facture.id));
        }
        self.factures.insert(facture.id.clone(), facture.clone());
        Ok(facture)
    }

    fn supprimer_facture(&mut self, id: &str) -> Result<(), FacturierError> {
        if self.factures.remove(id).is_none() {
            return Err(FacturierError::not_found("facture", id));
        }
        self.paiements.retain(|_, p| p.facture_id != id);
        Ok(())
    }

    fn facture(&self, id: &str) -> Result<Option<Facture>, FacturierError> {
        Ok(self.factures.get(id).cloned())
    }

    fn factures(&self) -> Result<Vec<Facture>, FacturierError> {
        Ok(self.factures.values().cloned().collect())
    }

    fn factures_du_client(&self, client_id: &str) -> Result<Vec<Facture>, FacturierError> {
        Ok(self
            .factures
            .values()
            .filter(|f| f.client_id == client_id)
            .cloned()
            .collect())
    }

    fn numero_facture_existe(&self, numero: &str) -> Result<bool, FacturierError> {
        Ok(self.factures.values().any(|f| f.numero == numero))
    }
}

impl BonLivraisonStore for MemoireStore {
    fn inserer_bon(&mut self, mut bon: BonLivraison) -> Result<BonLivraison, FacturierError> {
        if self.numero_bon_existe(&bon.numero)? {
            return Err(FacturierError::Conflict(format!(
                "numéro de bon de livraison déjà utilisé: {}",
                bon.numero
            )));
        }
        bon.id = self.nouvel_id("bl");
        self.bons.insert(bon.id.clone(), bon.clone());
        Ok(bon)
    }

    fn maj_bon(&mut self, bon: BonLivraison) -> Result<BonLivraison, FacturierError> {
        if !self.bons.contains_key(&bon.id) {
            return Err(FacturierError::not_found("bon de livraison", &bon.id));
        }
        self.bons.insert(bon.id.clone(), bon.clone());
        Ok(bon)
    }

    fn supprimer_bon(&mut self, id: &str) -> Result<(), FacturierError> {
        self.bons
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| FacturierError::not_found("bon de livraison", id))
    }

    fn bon(&self, id: &str) -> Result<Option<BonLivraison>, FacturierError> {
        Ok(self.bons.get(id).cloned())
    }

    fn bons(&self) -> Result<Vec<BonLivraison>, FacturierError> {
        Ok(self.bons.values().cloned().collect())
    }

    fn numero_bon_existe(&self, numero: &str) -> Result<bool, FacturierError> {
        Ok(self.bons.values().any(|b| b.numero == numero))
    }
}

impl PaiementStore for MemoireStore {
    fn inserer_paiement(&mut self, mut paiement: Paiement) -> Result<Paiement, FacturierError> {
        paiement.id = self.nouvel_id("pay");
        self.paiements.insert(paiement.id.clone(), paiement.clone());
        Ok(paiement)
    }

    fn maj_paiement(&mut self, paiement: Paiement) -> Result<Paiement, FacturierError> {
        if !self.paiements.contains_key(&paiement.id) {
            return Err(FacturierError::not_found("paiement", &paiement.id));
        }
        self.paiements.insert(paiement.id.clone(), paiement.clone());
        Ok(paiement)
    }

    fn supprimer_paiement(&mut self, id: &str) -> Result<(), FacturierError> {
        self.paiements
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| FacturierError::not_found("paiement", id))
    }

    fn paiement(&self, id: &str) -> Result<Option<Paiement>, FacturierError> {
        Ok(self.paiements.get(id).cloned())
    }

    fn paiements(&self) -> Result<Vec<Paiement>, FacturierError> {
        Ok(self.paiements.values().cloned().collect())
    }

    fn paiements_de_facture(&self, facture_id: &str) -> Result<Vec<Paiement>, FacturierError> {
        Ok(self
            .paiements
            .values()
            .filter(|p| p.facture_id == facture_id)
            .cloned()
            .collect())
    }
}

impl ParametresStore for MemoireStore {
    fn charger_parametres(&self) -> Result<Parametres, FacturierError> {
        Ok(self.parametres.clone())
    }

    fn enregistrer_parametres(&mut self, parametres: Parametres) -> Result<(), FacturierError> {
        self.parametres = parametres;
        Ok(())
    }
}
