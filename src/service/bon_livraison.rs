//! Delivery note operations. No totals anywhere on this path.

use chrono::Datelike;
use rand::Rng;
use tracing::info;

use super::{maintenant, resoudre_lignes, verifier};
use crate::core::{
    self, BonLivraison, BonLivraisonCommande, DocumentKind, FacturierError, valider_lignes,
};
use crate::store::Store;

pub fn creer<S: Store>(
    store: &mut S,
    cmd: BonLivraisonCommande,
) -> Result<BonLivraison, FacturierError> {
    creer_avec_rng(store, cmd, &mut rand::thread_rng())
}

pub fn creer_avec_rng<S: Store>(
    store: &mut S,
    cmd: BonLivraisonCommande,
    rng: &mut impl Rng,
) -> Result<BonLivraison, FacturierError> {
    verifier(valider_lignes(&cmd.lignes))?;

    let client = store
        .client(&cmd.client_id)?
        .ok_or_else(|| FacturierError::not_found("client", &cmd.client_id))?;

    let lignes = resoudre_lignes(store, &cmd.lignes)?;
    let annee = cmd.date_creation.year();

    let mut derniere_erreur = None;
    for _ in 0..2 {
        let numero = core::numero_unique(
            &cmd.numero,
            DocumentKind::BonLivraison,
            annee,
            |n| store.numero_bon_existe(n),
            rng,
        )?;

        let bon = BonLivraison {
            id: String::new(),
            numero,
            client_id: client.id.clone(),
            client_nom: client.nom.clone(),
            date_creation: cmd.date_creation,
            date_livraison: cmd.date_livraison,
            statut: cmd.statut,
            lignes: lignes.clone(),
            notes: cmd.notes.clone(),
            date_modification: maintenant(),
        };

        match store.inserer_bon(bon) {
            Ok(insere) => {
                info!(numero = %insere.numero, client = %insere.client_nom, "bon de livraison créé");
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

pub fn mettre_a_jour<S: Store>(
    store: &mut S,
    id: &str,
    cmd: BonLivraisonCommande,
) -> Result<BonLivraison, FacturierError> {
    verifier(valider_lignes(&cmd.lignes))?;

    let mut bon = store
        .bon(id)?
        .ok_or_else(|| FacturierError::not_found("bon de livraison", id))?;

    if cmd.client_id != bon.client_id {
        let client = store
            .client(&cmd.client_id)?
            .ok_or_else(|| FacturierError::not_found("client", &cmd.client_id))?;
        bon.client_id = client.id;
        bon.client_nom = client.nom;
    }

    bon.lignes = resoudre_lignes(store, &cmd.lignes)?;
    bon.date_creation = cmd.date_creation;
    bon.date_livraison = cmd.date_livraison;
    bon.statut = cmd.statut;
    bon.notes = cmd.notes;
    bon.date_modification = maintenant();

    let bon = store.maj_bon(bon)?;
    info!(numero = %bon.numero, "bon de livraison mis à jour");
    Ok(bon)
}

pub fn supprimer<S: Store>(store: &mut S, id: &str) -> Result<(), FacturierError> {
    store.supprimer_bon(id)?;
    info!(id, "bon de livraison supprimé");
    Ok(())
}

pub fn chercher<S: Store>(store: &S, id: &str) -> Result<BonLivraison, FacturierError> {
    store
        .bon(id)?
        .ok_or_else(|| FacturierError::not_found("bon de livraison", id))
}

/// All delivery notes, newest first.
pub fn lister<S: Store>(store: &S) -> Result<Vec<BonLivraison>, FacturierError> {
    let mut tous = store.bons()?;
    tous.sort_by(|a, b| b.date_creation.cmp(&a.date_creation));
    Ok(tous)
}
