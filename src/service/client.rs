//! Client account operations.

use rust_decimal::Decimal;
use tracing::info;

use super::{maintenant, verifier};
use crate::core::{Client, ClientCommande, FacturierError, valider_client};
use crate::store::Store;

pub fn creer<S: Store>(store: &mut S, cmd: ClientCommande) -> Result<Client, FacturierError> {
    verifier(valider_client(&cmd))?;

    let client = store.inserer_client(Client {
        id: String::new(),
        nom: cmd.nom,
        email: cmd.email,
        telephone: cmd.telephone,
        adresse: cmd.adresse,
        ville: cmd.ville,
        code_postal: cmd.code_postal,
        pays: cmd.pays,
        code: cmd.code,
        mf: cmd.mf,
        total_facture: Decimal::ZERO,
        date_creation: maintenant(),
        date_modification: maintenant(),
    })?;
    info!(code = %client.code, nom = %client.nom, "client créé");
    Ok(client)
}

/// Update a client. Issued documents keep their name snapshot; only the
/// account itself changes.
pub fn mettre_a_jour<S: Store>(
    store: &mut S,
    id: &str,
    cmd: ClientCommande,
) -> Result<Client, FacturierError> {
    verifier(valider_client(&cmd))?;

    let mut client = store
        .client(id)?
        .ok_or_else(|| FacturierError::not_found("client", id))?;

    client.nom = cmd.nom;
    client.email = cmd.email;
    client.telephone = cmd.telephone;
    client.adresse = cmd.adresse;
    client.ville = cmd.ville;
    client.code_postal = cmd.code_postal;
    client.pays = cmd.pays;
    client.code = cmd.code;
    client.mf = cmd.mf;
    client.date_modification = maintenant();

    let client = store.maj_client(client)?;
    info!(code = %client.code, "client mis à jour");
    Ok(client)
}

/// Delete a client and everything issued to it (documents, their lines,
/// and invoice payments).
pub fn supprimer<S: Store>(store: &mut S, id: &str) -> Result<(), FacturierError> {
    store.supprimer_client(id)?;
    info!(id, "client supprimé");
    Ok(())
}

pub fn chercher<S: Store>(store: &S, id: &str) -> Result<Client, FacturierError> {
    store
        .client(id)?
        .ok_or_else(|| FacturierError::not_found("client", id))
}

/// All clients, alphabetical.
pub fn lister<S: Store>(store: &S) -> Result<Vec<Client>, FacturierError> {
    let mut tous = store.clients()?;
    tous.sort_by(|a, b| a.nom.cmp(&b.nom));
    Ok(tous)
}
