//! Quote operations.

use chrono::Datelike;
use rand::Rng;
use tracing::info;

use super::{maintenant, resoudre_lignes, verifier};
use crate::core::{
    self, Devis, DevisCommande, DocumentKind, FacturierError, totaux_depuis_lignes,
    valider_lignes, valider_remise_totale,
};
use crate::store::Store;

/// Create a quote: validate, resolve lines, compute totals, settle on a
/// unique number, persist.
pub fn creer<S: Store>(store: &mut S, cmd: DevisCommande) -> Result<Devis, FacturierError> {
    creer_avec_rng(store, cmd, &mut rand::thread_rng())
}

pub fn creer_avec_rng<S: Store>(
    store: &mut S,
    cmd: DevisCommande,
    rng: &mut impl Rng,
) -> Result<Devis, FacturierError> {
    let mut errors = valider_lignes(&cmd.lignes);
    errors.extend(valider_remise_totale(cmd.remise_totale));
    verifier(errors)?;

    let client = store
        .client(&cmd.client_id)?
        .ok_or_else(|| FacturierError::not_found("client", &cmd.client_id))?;

    let lignes = resoudre_lignes(store, &cmd.lignes)?;
    let totaux = totaux_depuis_lignes(&lignes, cmd.remise_totale, cmd.appliquer_tva);
    let annee = cmd.date_creation.year();

    // The insert re-checks uniqueness; a concurrent writer landing on the
    // same numero shows up as a Conflict and buys one more allocation round.
    let mut derniere_erreur = None;
    for _ in 0..2 {
        let numero = core::numero_unique(
            &cmd.numero,
            DocumentKind::Devis,
            annee,
            |n| store.numero_devis_existe(n),
            rng,
        )?;

        let devis = Devis {
            id: String::new(),
            numero,
            client_id: client.id.clone(),
            client_nom: client.nom.clone(),
            date_creation: cmd.date_creation,
            date_expiration: cmd.date_expiration,
            statut: cmd.statut,
            lignes: lignes.clone(),
            sous_total: totaux.sous_total,
            remise_totale: cmd.remise_totale,
            tva: totaux.tva,
            total: totaux.total,
            notes: cmd.notes.clone(),
            conditions_reglement: cmd.conditions_reglement.clone(),
            date_modification: maintenant(),
        };

        match store.inserer_devis(devis) {
            Ok(insere) => {
                info!(numero = %insere.numero, client = %insere.client_nom, "devis créé");
                return Ok(insere);
            }
            Err(FacturierError::Conflict(msg)) => derniere_erreur = Some(msg),
            Err(autre) => return Err(autre),
        }
    }
    Err(FacturierError::Numbering(
        derniere_erreur.unwrap_or_else(|| "conflit de numéro persistant".into()),
    ))
}

/// Update a quote. Totals are recomputed wholesale from the submitted lines;
/// the stored numero never changes.
pub fn mettre_a_jour<S: Store>(
    store: &mut S,
    id: &str,
    cmd: DevisCommande,
) -> Result<Devis, FacturierError> {
    let mut errors = valider_lignes(&cmd.lignes);
    errors.extend(valider_remise_totale(cmd.remise_totale));
    verifier(errors)?;

    let mut devis = store
        .devis(id)?
        .ok_or_else(|| FacturierError::not_found("devis", id))?;

    if cmd.client_id != devis.client_id {
        let client = store
            .client(&cmd.client_id)?
            .ok_or_else(|| FacturierError::not_found("client", &cmd.client_id))?;
        devis.client_id = client.id;
        devis.client_nom = client.nom;
    }

    let lignes = resoudre_lignes(store, &cmd.lignes)?;
    let totaux = totaux_depuis_lignes(&lignes, cmd.remise_totale, cmd.appliquer_tva);

    devis.date_creation = cmd.date_creation;
    devis.date_expiration = cmd.date_expiration;
    devis.statut = cmd.statut;
    devis.lignes = lignes;
    devis.sous_total = totaux.sous_total;
    devis.remise_totale = cmd.remise_totale;
    devis.tva = totaux.tva;
    devis.total = totaux.total;
    devis.notes = cmd.notes;
    devis.conditions_reglement = cmd.conditions_reglement;
    devis.date_modification = maintenant();

    let devis = store.maj_devis(devis)?;
    info!(numero = %devis.numero, "devis mis à jour");
    Ok(devis)
}

pub fn supprimer<S: Store>(store: &mut S, id: &str) -> Result<(), FacturierError> {
    store.supprimer_devis(id)?;
    info!(id, "devis supprimé");
    Ok(())
}

pub fn chercher<S: Store>(store: &S, id: &str) -> Result<Devis, FacturierError> {
    store
        .devis(id)?
        .ok_or_else(|| FacturierError::not_found("devis", id))
}

/// All quotes, newest first.
pub fn lister<S: Store>(store: &S) -> Result<Vec<Devis>, FacturierError> {
    let mut tous = store.tous_devis()?;
    tous.sort_by(|a, b| b.date_creation.cmp(&a.date_creation));
    Ok(tous)
}
