//! Required-field and range validation for incoming commands.
//!
//! Every function returns all errors found, not just the first, so callers
//! can surface a complete field list in one response.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::commands::{ClientCommande, LigneCommande, PaiementCommande, ProduitCommande};
use super::error::ValidationError;

fn requis(valeur: &str, champ: &str, errors: &mut Vec<ValidationError>) {
    if valeur.trim().is_empty() {
        errors.push(ValidationError::new(champ, "champ requis"));
    }
}

fn pourcentage(valeur: Decimal, champ: &str, errors: &mut Vec<ValidationError>) {
    if valeur < Decimal::ZERO || valeur > dec!(100) {
        errors.push(ValidationError::new(
            champ,
            format!("doit être entre 0 et 100 (reçu {valeur})"),
        ));
    }
}

/// Validate a client create/update command.
pub fn valider_client(cmd: &ClientCommande) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    requis(&cmd.nom, "nom", &mut errors);
    requis(&cmd.email, "email", &mut errors);
    if !cmd.email.trim().is_empty() && !cmd.email.contains('@') {
        errors.push(ValidationError::new("email", "adresse email invalide"));
    }
    requis(&cmd.telephone, "telephone", &mut errors);
    requis(&cmd.adresse, "adresse", &mut errors);
    requis(&cmd.ville, "ville", &mut errors);
    requis(&cmd.code_postal, "code_postal", &mut errors);
    requis(&cmd.pays, "pays", &mut errors);
    requis(&cmd.code, "code", &mut errors);

    errors
}

/// Validate a product create/update command.
pub fn valider_produit(cmd: &ProduitCommande) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    requis(&cmd.nom, "nom", &mut errors);
    requis(&cmd.categorie, "categorie", &mut errors);
    if cmd.prix < Decimal::ZERO {
        errors.push(ValidationError::new("prix", "doit être positif ou nul"));
    }

    errors
}

/// Validate the line list of a document command. Field paths are indexed
/// (e.g. "lignes[2].quantite").
pub fn valider_lignes(lignes: &[LigneCommande]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    // An empty line list is legal and yields zero totals.
    for (i, ligne) in lignes.iter().enumerate() {
        if ligne.produit_id.trim().is_empty() {
            errors.push(ValidationError::new(
                format!("lignes[{i}].produit_id"),
                "champ requis",
            ));
        }
        if ligne.quantite == 0 {
            errors.push(ValidationError::new(
                format!("lignes[{i}].quantite"),
                "doit être strictement positive",
            ));
        }
        if ligne.prix_unitaire < Decimal::ZERO {
            errors.push(ValidationError::new(
                format!("lignes[{i}].prix_unitaire"),
                "doit être positif ou nul",
            ));
        }
        pourcentage(
            ligne.remise,
            &format!("lignes[{i}].remise"),
            &mut errors,
        );
    }

    errors
}

/// Validate a global discount percent.
pub fn valider_remise_totale(remise_totale: Decimal) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    pourcentage(remise_totale, "remise_totale", &mut errors);
    errors
}

/// Validate a payment create/update command.
pub fn valider_paiement(cmd: &PaiementCommande) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    requis(&cmd.facture_id, "facture_id", &mut errors);
    if cmd.montant < Decimal::ZERO {
        errors.push(ValidationError::new("montant", "doit être positif ou nul"));
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_incomplet_liste_tous_les_champs() {
        let cmd = ClientCommande {
            nom: "".into(),
            email: "pas-un-email".into(),
            telephone: "".into(),
            adresse: "1 rue des Oliviers".into(),
            ville: "Tunis".into(),
            code_postal: "1002".into(),
            pays: "Tunisie".into(),
            code: "CL-0001".into(),
            mf: None,
        };
        let errors = valider_client(&cmd);
        let champs: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert!(champs.contains(&"nom"));
        assert!(champs.contains(&"email"));
        assert!(champs.contains(&"telephone"));
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn lignes_vides_et_quantite_nulle() {
        assert!(valider_lignes(&[]).is_empty());

        let lignes = [LigneCommande {
            produit_id: "p1".into(),
            quantite: 0,
            prix_unitaire: dec!(10),
            remise: dec!(150),
        }];
        let errors = valider_lignes(&lignes);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[0].field, "lignes[0].quantite");
        assert_eq!(errors[1].field, "lignes[0].remise");
    }

    #[test]
    fn remise_totale_hors_bornes() {
        assert!(valider_remise_totale(dec!(100)).is_empty());
        assert_eq!(valider_remise_totale(dec!(100.5)).len(), 1);
        assert_eq!(valider_remise_totale(dec!(-1)).len(), 1);
    }
}
