//! Catalog product operations.

use tracing::info;

use super::{maintenant, verifier};
use crate::core::{FacturierError, Produit, ProduitCommande, valider_produit};
use crate::store::Store;

pub fn creer<S: Store>(store: &mut S, cmd: ProduitCommande) -> Result<Produit, FacturierError> {
    verifier(valider_produit(&cmd))?;

    let produit = store.inserer_produit(Produit {
        id: String::new(),
        nom: cmd.nom,
        description: cmd.description,
        prix: cmd.prix,
        categorie: cmd.categorie,
        actif: cmd.actif,
        date_creation: maintenant(),
        date_modification: maintenant(),
    })?;
    info!(nom = %produit.nom, "produit créé");
    Ok(produit)
}

/// Update a product. Lines on issued documents keep their snapshot.
pub fn mettre_a_jour<S: Store>(
    store: &mut S,
    id: &str,
    cmd: ProduitCommande,
) -> Result<Produit, FacturierError> {
    verifier(valider_produit(&cmd))?;

    let mut produit = store
        .produit(id)?
        .ok_or_else(|| FacturierError::not_found("produit", id))?;

    produit.nom = cmd.nom;
    produit.description = cmd.description;
    produit.prix = cmd.prix;
    produit.categorie = cmd.categorie;
    produit.actif = cmd.actif;
    produit.date_modification = maintenant();

    let produit = store.maj_produit(produit)?;
    info!(nom = %produit.nom, "produit mis à jour");
    Ok(produit)
}

pub fn supprimer<S: Store>(store: &mut S, id: &str) -> Result<(), FacturierError> {
    store.supprimer_produit(id)?;
    info!(id, "produit supprimé");
    Ok(())
}

pub fn chercher<S: Store>(store: &S, id: &str) -> Result<Produit, FacturierError> {
    store
        .produit(id)?
        .ok_or_else(|| FacturierError::not_found("produit", id))
}

/// All products, alphabetical.
pub fn lister<S: Store>(store: &S) -> Result<Vec<Produit>, FacturierError> {
    let mut tous = store.produits()?;
    tous.sort_by(|a, b| a.nom.cmp(&b.nom));
    Ok(tous)
}
