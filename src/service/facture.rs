//! Invoice operations.
//!
//! Invoices additionally maintain the client's `total_facture` aggregate:
//! it is recomputed as the sum of the client's invoice totals on every
//! create, update, and delete, and deliberately not on payment changes.

use chrono::Datelike;
use rand::Rng;
use rust_decimal::Decimal;
use tracing::info;

use super::{maintenant, resoudre_lignes, verifier};
use crate::core::{
    self, DocumentKind, Facture, FactureCommande, FacturierError, totaux_depuis_lignes,
    valider_lignes, valider_remise_totale,
};
use crate::store::Store;

pub fn creer<S: Store>(store: &mut S, cmd: FactureCommande) -> Result<Facture, FacturierError> {
    creer_avec_rng(store, cmd, &mut rand::thread_rng())
}

pub fn creer_avec_rng<S: Store>(
    store: &mut S,
    cmd: FactureCommande,
    rng: &mut impl Rng,
) -> Result<Facture, FacturierError> {
    let mut errors = valider_lignes(&cmd.lignes);
    errors.extend(valider_remise_totale(cmd.remise_totale));
    verifier(errors)?;

    let client = store
        .client(&cmd.client_id)?
        .ok_or_else(|| FacturierError::not_found("client", &cmd.client_id))?;

    let lignes = resoudre_lignes(store, &cmd.lignes)?;
    let totaux = totaux_depuis_lignes(&lignes, cmd.remise_totale, cmd.appliquer_tva);
    let annee = cmd.date_creation.year();

    let mut derniere_erreur = None;
    for _ in 0..2 {
        let numero = core::numero_unique(
            &cmd.numero,
            DocumentKind::Facture,
            annee,
            |n| store.numero_facture_existe(n),
            rng,
        )?;

        let facture = Facture {
            id: String::new(),
            numero,
            client_id: client.id.clone(),
            client_nom: client.nom.clone(),
            date_creation: cmd.date_creation,
            date_echeance: cmd.date_echeance,
            statut: cmd.statut,
            lignes: lignes.clone(),
            sous_total: totaux.sous_total,
            remise_totale: cmd.remise_totale,
            tva: totaux.tva,
            total: totaux.total,
            notes: cmd.notes.clone(),
            date_modification: maintenant(),
        };

        match store.inserer_facture(facture) {
            Ok(inseree) => {
                recalculer_total_client(store, &inseree.client_id)?;
                info!(numero = %inseree.numero, client = %inseree.client_nom, "facture créée");
                return Ok(inseree);
            }
            Err(FacturierError::Conflict(msg)) => derniere_erreur = Some(msg),
            Err(autre) => return Err(autre),
        }
    }
    Err(FacturierError::Numbering(
        derniere_erreur.unwrap_or_else(|| "conflit de numéro persistant".into()),
    ))
}

pub fn mettre_a_jour<S: Store>(
    store: &mut S,
    id: &str,
    cmd: FactureCommande,
) -> Result<Facture, FacturierError> {
    let mut errors = valider_lignes(&cmd.lignes);
    errors.extend(valider_remise_totale(cmd.remise_totale));
    verifier(errors)?;

    let mut facture = store
        .facture(id)?
        .ok_or_else(|| FacturierError::not_found("facture", id))?;
    let ancien_client = facture.client_id.clone();

    if cmd.client_id != facture.client_id {
        let client = store
            .client(&cmd.client_id)?
            .ok_or_else(|| FacturierError::not_found("client", &cmd.client_id))?;
        facture.client_id = client.id;
        facture.client_nom = client.nom;
    }

    let lignes = resoudre_lignes(store, &cmd.lignes)?;
    let totaux = totaux_depuis_lignes(&lignes, cmd.remise_totale, cmd.appliquer_tva);

    facture.date_creation = cmd.date_creation;
    facture.date_echeance = cmd.date_echeance;
    facture.statut = cmd.statut;
    facture.lignes = lignes;
    facture.sous_total = totaux.sous_total;
    facture.remise_totale = cmd.remise_totale;
    facture.tva = totaux.tva;
    facture.total = totaux.total;
    facture.notes = cmd.notes;
    facture.date_modification = maintenant();

    let facture = store.maj_facture(facture)?;
    recalculer_total_client(store, &facture.client_id)?;
    if ancien_client != facture.client_id {
        recalculer_total_client(store, &ancien_client)?;
    }
    info!(numero = %facture.numero, "facture mise à jour");
    Ok(facture)
}

/// Delete an invoice; its payments go with it.
pub fn supprimer<S: Store>(store: &mut S, id: &str) -> Result<(), FacturierError> {
    let facture = store
        .facture(id)?
        .ok_or_else(|| FacturierError::not_found("facture", id))?;
    store.supprimer_facture(id)?;
    recalculer_total_client(store, &facture.client_id)?;
    info!(numero = %facture.numero, "facture supprimée");
    Ok(())
}

pub fn chercher<S: Store>(store: &S, id: &str) -> Result<Facture, FacturierError> {
    store
        .facture(id)?
        .ok_or_else(|| FacturierError::not_found("facture", id))
}

/// All invoices, newest first.
pub fn lister<S: Store>(store: &S) -> Result<Vec<Facture>, FacturierError> {
    let mut toutes = store.factures()?;
    toutes.sort_by(|a, b| b.date_creation.cmp(&a.date_creation));
    Ok(toutes)
}

fn recalculer_total_client<S: Store>(store: &mut S, client_id: &str) -> Result<(), FacturierError> {
    let total: Decimal = store
        .factures_du_client(client_id)?
        .iter()
        .map(|f| f.total)
        .sum();
    store.maj_total_facture(client_id, total)
}
