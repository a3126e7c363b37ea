//! Payment operations.
//!
//! Payments live independently of the invoice lifecycle: nothing here stops
//! an overpayment or rejects a payment against an already-paid invoice, and
//! payment changes never touch the client's `total_facture` aggregate.

use tracing::info;

use super::{maintenant, verifier};
use crate::core::{FacturierError, Paiement, PaiementCommande, valider_paiement};
use crate::store::Store;

pub fn creer<S: Store>(store: &mut S, cmd: PaiementCommande) -> Result<Paiement, FacturierError> {
    verifier(valider_paiement(&cmd))?;

    store
        .facture(&cmd.facture_id)?
        .ok_or_else(|| FacturierError::not_found("facture", &cmd.facture_id))?;

    let paiement = store.inserer_paiement(Paiement {
        id: String::new(),
        facture_id: cmd.facture_id,
        montant: cmd.montant,
        date_paiement: cmd.date_paiement,
        methode: cmd.methode,
        statut: cmd.statut,
        reference: cmd.reference,
        notes: cmd.notes,
        date_modification: maintenant(),
    })?;
    info!(id = %paiement.id, montant = %paiement.montant, "paiement créé");
    Ok(paiement)
}

pub fn mettre_a_jour<S: Store>(
    store: &mut S,
    id: &str,
    cmd: PaiementCommande,
) -> Result<Paiement, FacturierError> {
    verifier(valider_paiement(&cmd))?;

    let mut paiement = store
        .paiement(id)?
        .ok_or_else(|| FacturierError::not_found("paiement", id))?;

    if cmd.facture_id != paiement.facture_id {
        store
            .facture(&cmd.facture_id)?
            .ok_or_else(|| FacturierError::not_found("facture", &cmd.facture_id))?;
        paiement.facture_id = cmd.facture_id;
    }

    paiement.montant = cmd.montant;
    paiement.date_paiement = cmd.date_paiement;
    paiement.methode = cmd.methode;
    paiement.statut = cmd.statut;
    paiement.reference = cmd.reference;
    paiement.notes = cmd.notes;
    paiement.date_modification = maintenant();

    let paiement = store.maj_paiement(paiement)?;
    info!(id = %paiement.id, "paiement mis à jour");
    Ok(paiement)
}

pub fn supprimer<S: Store>(store: &mut S, id: &str) -> Result<(), FacturierError> {
    store.supprimer_paiement(id)?;
    info!(id, "paiement supprimé");
    Ok(())
}

pub fn chercher<S: Store>(store: &S, id: &str) -> Result<Paiement, FacturierError> {
    store
        .paiement(id)?
        .ok_or_else(|| FacturierError::not_found("paiement", id))
}

/// All payments, newest first.
pub fn lister<S: Store>(store: &S) -> Result<Vec<Paiement>, FacturierError> {
    let mut tous = store.paiements()?;
    tous.sort_by(|a, b| b.date_paiement.cmp(&a.date_paiement));
    Ok(tous)
}
