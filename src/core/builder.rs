use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;

use super::error::{FacturierError, ValidationError};
use super::totals::{self, LigneTarifee};
use super::types::*;

/// Builder for a document line, computing the stored line total.
///
/// ```
/// use facturier::core::*;
/// use rust_decimal_macros::dec;
///
/// let ligne = LigneBuilder::new("p-1", "Clavier mécanique", 2, dec!(100))
///     .remise(dec!(10))
///     .description("Switch rouge, AZERTY")
///     .build();
/// assert_eq!(ligne.total, dec!(180));
/// ```
pub struct LigneBuilder {
    produit_id: String,
    produit_nom: String,
    produit_description: Option<String>,
    quantite: u32,
    prix_unitaire: Decimal,
    remise: Decimal,
}

impl LigneBuilder {
    pub fn new(
        produit_id: impl Into<String>,
        produit_nom: impl Into<String>,
        quantite: u32,
        prix_unitaire: Decimal,
    ) -> Self {
        Self {
            produit_id: produit_id.into(),
            produit_nom: produit_nom.into(),
            produit_description: None,
            quantite,
            prix_unitaire,
            remise: Decimal::ZERO,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.produit_description = Some(description.into());
        self
    }

    pub fn remise(mut self, remise: Decimal) -> Self {
        self.remise = remise;
        self
    }

    pub fn build(self) -> LigneDocument {
        let total = totals::total_ligne(&LigneTarifee {
            quantite: self.quantite,
            prix_unitaire: self.prix_unitaire,
            remise: self.remise,
        });
        LigneDocument {
            produit_id: self.produit_id,
            produit_nom: self.produit_nom,
            produit_description: self.produit_description,
            quantite: self.quantite,
            prix_unitaire: self.prix_unitaire,
            remise: self.remise,
            total,
        }
    }
}

/// Builder for a quote. Totals are computed at `build()` time; the id is
/// left empty and assigned by the store on insert.
///
/// ```
/// use facturier::core::*;
/// use chrono::NaiveDate;
/// use rust_decimal_macros::dec;
///
/// let devis = DevisBuilder::new("D-2025-0001", NaiveDate::from_ymd_opt(2025, 3, 1).unwrap())
///     .client("c-1", "Société Horizon")
///     .date_expiration(NaiveDate::from_ymd_opt(2025, 4, 1).unwrap())
///     .add_ligne(LigneBuilder::new("p-1", "Conseil", 10, dec!(80)).build())
///     .build()
///     .unwrap();
/// assert_eq!(devis.total, dec!(952.00));
/// ```
pub struct DevisBuilder {
    numero: String,
    client: Option<(String, String)>,
    date_creation: NaiveDate,
    date_expiration: Option<NaiveDate>,
    statut: DevisStatut,
    lignes: Vec<LigneDocument>,
    remise_totale: Decimal,
    appliquer_tva: bool,
    notes: Option<String>,
    conditions_reglement: Option<String>,
}

impl DevisBuilder {
    pub fn new(numero: impl Into<String>, date_creation: NaiveDate) -> Self {
        Self {
            numero: numero.into(),
            client: None,
            date_creation,
            date_expiration: None,
            statut: DevisStatut::default(),
            lignes: Vec::new(),
            remise_totale: Decimal::ZERO,
            appliquer_tva: true,
            notes: None,
            conditions_reglement: None,
        }
    }

    pub fn client(mut self, id: impl Into<String>, nom: impl Into<String>) -> Self {
        self.client = Some((id.into(), nom.into()));
        self
    }

    pub fn date_expiration(mut self, date: NaiveDate) -> Self {
        self.date_expiration = Some(date);
        self
    }

    pub fn statut(mut self, statut: DevisStatut) -> Self {
        self.statut = statut;
        self
    }

    pub fn add_ligne(mut self, ligne: LigneDocument) -> Self {
        self.lignes.push(ligne);
        self
    }

    pub fn remise_totale(mut self, remise: Decimal) -> Self {
        self.remise_totale = remise;
        self
    }

    pub fn sans_tva(mut self) -> Self {
        self.appliquer_tva = false;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn conditions_reglement(mut self, conditions: impl Into<String>) -> Self {
        self.conditions_reglement = Some(conditions.into());
        self
    }

    pub fn build(self) -> Result<Devis, FacturierError> {
        let (client_id, client_nom) = self
            .client
            .ok_or_else(|| FacturierError::champ("client_id", "client requis"))?;
        verifier_numero(&self.numero)?;

        let totaux =
            totals::totaux_depuis_lignes(&self.lignes, self.remise_totale, self.appliquer_tva);

        Ok(Devis {
            id: String::new(),
            numero: self.numero,
            client_id,
            client_nom,
            date_creation: self.date_creation,
            date_expiration: self.date_expiration.unwrap_or(self.date_creation),
            statut: self.statut,
            lignes: self.lignes,
            sous_total: totaux.sous_total,
            remise_totale: self.remise_totale,
            tva: totaux.tva,
            total: totaux.total,
            notes: self.notes,
            conditions_reglement: self.conditions_reglement,
            date_modification: debut_de_journee(self.date_creation),
        })
    }
}

/// Builder for an invoice. Same conventions as [`DevisBuilder`].
pub struct FactureBuilder {
    numero: String,
    client: Option<(String, String)>,
    date_creation: NaiveDate,
    date_echeance: Option<NaiveDate>,
    statut: FactureStatut,
    lignes: Vec<LigneDocument>,
    remise_totale: Decimal,
    appliquer_tva: bool,
    notes: Option<String>,
}

impl FactureBuilder {
    pub fn new(numero: impl Into<String>, date_creation: NaiveDate) -> Self {
        Self {
            numero: numero.into(),
            client: None,
            date_creation,
            date_echeance: None,
            statut: FactureStatut::default(),
            lignes: Vec::new(),
            remise_totale: Decimal::ZERO,
            appliquer_tva: true,
            notes: None,
        }
    }

    pub fn client(mut self, id: impl Into<String>, nom: impl Into<String>) -> Self {
        self.client = Some((id.into(), nom.into()));
        self
    }

    pub fn date_echeance(mut self, date: NaiveDate) -> Self {
        self.date_echeance = Some(date);
        self
    }

    pub fn statut(mut self, statut: FactureStatut) -> Self {
        self.statut = statut;
        self
    }

    pub fn add_ligne(mut self, ligne: LigneDocument) -> Self {
        self.lignes.push(ligne);
        self
    }

    pub fn remise_totale(mut self, remise: Decimal) -> Self {
        self.remise_totale = remise;
        self
    }

    pub fn sans_tva(mut self) -> Self {
        self.appliquer_tva = false;
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<Facture, FacturierError> {
        let (client_id, client_nom) = self
            .client
            .ok_or_else(|| FacturierError::champ("client_id", "client requis"))?;
        verifier_numero(&self.numero)?;

        let totaux =
            totals::totaux_depuis_lignes(&self.lignes, self.remise_totale, self.appliquer_tva);

        Ok(Facture {
            id: String::new(),
            numero: self.numero,
            client_id,
            client_nom,
            date_creation: self.date_creation,
            date_echeance: self.date_echeance.unwrap_or(self.date_creation),
            statut: self.statut,
            lignes: self.lignes,
            sous_total: totaux.sous_total,
            remise_totale: self.remise_totale,
            tva: totaux.tva,
            total: totaux.total,
            notes: self.notes,
            date_modification: debut_de_journee(self.date_creation),
        })
    }
}

/// Builder for a delivery note. No monetary totals.
pub struct BonLivraisonBuilder {
    numero: String,
    client: Option<(String, String)>,
    date_creation: NaiveDate,
    date_livraison: Option<NaiveDate>,
    statut: LivraisonStatut,
    lignes: Vec<LigneDocument>,
    notes: Option<String>,
}

impl BonLivraisonBuilder {
    pub fn new(numero: impl Into<String>, date_creation: NaiveDate) -> Self {
        Self {
            numero: numero.into(),
            client: None,
            date_creation,
            date_livraison: None,
            statut: LivraisonStatut::default(),
            lignes: Vec::new(),
            notes: None,
        }
    }

    pub fn client(mut self, id: impl Into<String>, nom: impl Into<String>) -> Self {
        self.client = Some((id.into(), nom.into()));
        self
    }

    pub fn date_livraison(mut self, date: NaiveDate) -> Self {
        self.date_livraison = Some(date);
        self
    }

    pub fn statut(mut self, statut: LivraisonStatut) -> Self {
        self.statut = statut;
        self
    }

    pub fn add_ligne(mut self, ligne: LigneDocument) -> Self {
        self.lignes.push(ligne);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn build(self) -> Result<BonLivraison, FacturierError> {
        let (client_id, client_nom) = self
            .client
            .ok_or_else(|| FacturierError::champ("client_id", "client requis"))?;
        verifier_numero(&self.numero)?;

        Ok(BonLivraison {
            id: String::new(),
            numero: self.numero,
            client_id,
            client_nom,
            date_creation: self.date_creation,
            date_livraison: self.date_livraison.unwrap_or(self.date_creation),
            statut: self.statut,
            lignes: self.lignes,
            notes: self.notes,
            date_modification: debut_de_journee(self.date_creation),
        })
    }
}

fn verifier_numero(numero: &str) -> Result<(), FacturierError> {
    if numero.trim().is_empty() {
        return Err(FacturierError::Validation(vec![ValidationError::new(
            "numero",
            "champ requis",
        )]));
    }
    Ok(())
}

fn debut_de_journee(date: NaiveDate) -> NaiveDateTime {
    date.and_time(chrono::NaiveTime::MIN)
}
