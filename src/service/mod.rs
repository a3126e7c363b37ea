//! Application services: validate, resolve references, compute, persist.
//!
//! One module per aggregate, independent of any HTTP framing. Operations
//! are all-or-nothing: an error leaves nothing persisted (single-writer
//! stores; see the race note in [`crate::store`]).

pub mod bon_livraison;
pub mod client;
pub mod devis;
pub mod facture;
pub mod paiement;
pub mod parametres;
pub mod produit;

use chrono::NaiveDateTime;

use crate::core::{
    FacturierError, LigneBuilder, LigneCommande, LigneDocument, ValidationError,
};
use crate::store::ProduitStore;

/// Resolve command lines against the catalog, snapshotting product name and
/// description into the stored lines and computing each line total.
fn resoudre_lignes<S: ProduitStore>(
    store: &S,
    lignes: &[LigneCommande],
) -> Result<Vec<LigneDocument>, FacturierError> {
    let mut resolues = Vec::with_capacity(lignes.len());
    for ligne in lignes {
        let produit = store
            .produit(&ligne.produit_id)?
            .ok_or_else(|| FacturierError::not_found("produit", &ligne.produit_id))?;

        let mut builder = LigneBuilder::new(
            produit.id.as_str(),
            produit.nom.as_str(),
            ligne.quantite,
            ligne.prix_unitaire,
        )
        .remise(ligne.remise);
        if !produit.description.is_empty() {
            builder = builder.description(produit.description.as_str());
        }
        resolues.push(builder.build());
    }
    Ok(resolues)
}

fn verifier(errors: Vec<ValidationError>) -> Result<(), FacturierError> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(FacturierError::Validation(errors))
    }
}

fn maintenant() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}
