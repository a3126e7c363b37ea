use chrono::NaiveDate;
use facturier::core::*;
use facturier::service::{bon_livraison, client, devis, facture, paiement, parametres, produit};
use facturier::store::{
    BonLivraisonStore, DevisStore, FactureStore, MemoireStore, PaiementStore,
};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn client_commande(email: &str, code: &str) -> ClientCommande {
    ClientCommande {
        nom: "Société Horizon".into(),
        email: email.into(),
        telephone: "+216 71 123 456".into(),
        adresse: "12 avenue de Carthage".into(),
        ville: "Tunis".into(),
        code_postal: "1001".into(),
        pays: "Tunisie".into(),
        code: code.into(),
        mf: Some("1234567/A/M/000".into()),
    }
}

fn produit_commande(nom: &str, prix: Decimal) -> ProduitCommande {
    ProduitCommande {
        nom: nom.into(),
        description: "Prestation mensuelle".into(),
        prix,
        categorie: "Services".into(),
        actif: true,
    }
}

/// Store pre-loaded with one client and one product.
fn amorce() -> (MemoireStore, Client, Produit) {
    let mut store = MemoireStore::new();
    let cli = client::creer(&mut store, client_commande("contact@horizon.tn", "CL-0001")).unwrap();
    let prod = produit::creer(&mut store, produit_commande("Maintenance", dec!(100))).unwrap();
    (store, cli, prod)
}

fn facture_commande(cli: &Client, prod: &Produit, numero: &str) -> FactureCommande {
    FactureCommande {
        numero: numero.into(),
        client_id: cli.id.clone(),
        date_creation: date(2025, 3, 1),
        date_echeance: date(2025, 4, 1),
        statut: FactureStatut::Brouillon,
        lignes: vec![LigneCommande {
            produit_id: prod.id.clone(),
            quantite: 2,
            prix_unitaire: dec!(100),
            remise: dec!(10),
        }],
        remise_totale: dec!(10),
        appliquer_tva: true,
        notes: None,
    }
}

// --- Creation ---

#[test]
fn creation_facture_calcule_et_snapshotte() {
    let (mut store, cli, prod) = amorce();
    let facture = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();

    assert_eq!(facture.numero, "F-2025-0001");
    assert_eq!(facture.client_nom, "Société Horizon");
    assert_eq!(facture.sous_total, dec!(180));
    assert_eq!(facture.tva, dec!(30.78));
    assert_eq!(facture.total, dec!(192.78));
    assert_eq!(facture.lignes[0].produit_nom, "Maintenance");
    assert_eq!(
        facture.lignes[0].produit_description.as_deref(),
        Some("Prestation mensuelle")
    );
    assert!(!facture.id.is_empty());
}

#[test]
fn creation_avec_produit_inconnu_echoue() {
    let (mut store, cli, _) = amorce();
    let mut cmd = facture_commande(&cli, &Produit {
        id: "prod-9999".into(),
        nom: "fantôme".into(),
        description: String::new(),
        prix: dec!(1),
        categorie: "x".into(),
        actif: true,
        date_creation: date(2025, 1, 1).and_time(chrono::NaiveTime::MIN),
        date_modification: date(2025, 1, 1).and_time(chrono::NaiveTime::MIN),
    }, "F-2025-0002");
    cmd.lignes[0].produit_id = "prod-9999".into();
    let err = facture::creer(&mut store, cmd).unwrap_err();
    assert!(matches!(err, FacturierError::NotFound { entite: "produit", .. }));
}

#[test]
fn creation_sans_ligne_donne_des_totaux_nuls() {
    let (mut store, cli, prod) = amorce();
    let mut cmd = facture_commande(&cli, &prod, "F-2025-0003");
    cmd.lignes.clear();
    cmd.remise_totale = Decimal::ZERO;
    let facture = facture::creer(&mut store, cmd).unwrap();
    assert_eq!(facture.sous_total, Decimal::ZERO);
    assert_eq!(facture.tva, Decimal::ZERO);
    assert_eq!(facture.total, Decimal::ZERO);
}

// --- Numbering collisions ---

#[test]
fn collision_de_numero_regenere_et_reussit() {
    let (mut store, cli, prod) = amorce();
    let mut rng = SmallRng::seed_from_u64(11);

    let premiere = facture::creer_avec_rng(
        &mut store,
        facture_commande(&cli, &prod, "F-2025-0001"),
        &mut rng,
    )
    .unwrap();

    // Same proposed number: creation still succeeds with a different numero.
    let seconde = facture::creer_avec_rng(
        &mut store,
        facture_commande(&cli, &prod, "F-2025-0001"),
        &mut rng,
    )
    .unwrap();

    assert_eq!(premiere.numero, "F-2025-0001");
    assert_ne!(seconde.numero, premiere.numero);
    assert!(seconde.numero.starts_with("F-2025-"));
    assert!(store.numero_facture_existe(&seconde.numero).unwrap());
}

#[test]
fn collision_devis_idem() {
    let (mut store, cli, prod) = amorce();
    let mut rng = SmallRng::seed_from_u64(5);
    let cmd = |numero: &str| DevisCommande {
        numero: numero.into(),
        client_id: cli.id.clone(),
        date_creation: date(2025, 2, 10),
        date_expiration: date(2025, 3, 10),
        statut: DevisStatut::Brouillon,
        lignes: vec![LigneCommande {
            produit_id: prod.id.clone(),
            quantite: 1,
            prix_unitaire: dec!(50),
            remise: Decimal::ZERO,
        }],
        remise_totale: Decimal::ZERO,
        appliquer_tva: true,
        notes: None,
        conditions_reglement: None,
    };

    let premier = devis::creer_avec_rng(&mut store, cmd("D-2025-0100"), &mut rng).unwrap();
    let second = devis::creer_avec_rng(&mut store, cmd("D-2025-0100"), &mut rng).unwrap();
    assert_ne!(premier.numero, second.numero);
}

// --- Edit recompute ---

#[test]
fn edition_recalcule_les_totaux_en_bloc() {
    let (mut store, cli, prod) = amorce();
    let facture = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();

    let mut cmd = facture_commande(&cli, &prod, "ignoré");
    cmd.lignes = vec![LigneCommande {
        produit_id: prod.id.clone(),
        quantite: 5,
        prix_unitaire: dec!(20),
        remise: Decimal::ZERO,
    }];
    cmd.remise_totale = Decimal::ZERO;

    let editee = facture::mettre_a_jour(&mut store, &facture.id, cmd.clone()).unwrap();
    assert_eq!(editee.numero, "F-2025-0001", "numero never changes on edit");
    assert_eq!(editee.sous_total, dec!(100));
    assert_eq!(editee.total, dec!(119.00));

    // Submitting the same inputs twice gives identical totals.
    let encore = facture::mettre_a_jour(&mut store, &facture.id, cmd).unwrap();
    assert_eq!(encore.sous_total, editee.sous_total);
    assert_eq!(encore.tva, editee.tva);
    assert_eq!(encore.total, editee.total);
}

// --- Snapshots ---

#[test]
fn documents_emis_gardent_leurs_snapshots() {
    let (mut store, cli, prod) = amorce();
    let facture = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();

    let mut cmd_produit = produit_commande("Maintenance Premium", dec!(250));
    cmd_produit.description = "Nouvelle offre".into();
    produit::mettre_a_jour(&mut store, &prod.id, cmd_produit).unwrap();

    let mut cmd_client = client_commande("contact@horizon.tn", "CL-0001");
    cmd_client.nom = "Horizon International".into();
    client::mettre_a_jour(&mut store, &cli.id, cmd_client).unwrap();

    let relue = facture::chercher(&store, &facture.id).unwrap();
    assert_eq!(relue.client_nom, "Société Horizon");
    assert_eq!(relue.lignes[0].produit_nom, "Maintenance");
    assert_eq!(
        relue.lignes[0].produit_description.as_deref(),
        Some("Prestation mensuelle")
    );
}

// --- Client aggregate ---

#[test]
fn total_facture_suit_les_factures_pas_les_paiements() {
    let (mut store, cli, prod) = amorce();
    let f1 = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();
    facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0002")).unwrap();

    let relu = client::chercher(&store, &cli.id).unwrap();
    assert_eq!(relu.total_facture, dec!(385.56)); // 2 × 192.78

    // Payments never move the aggregate.
    paiement::creer(&mut store, PaiementCommande {
        facture_id: f1.id.clone(),
        montant: dec!(192.78),
        date_paiement: date(2025, 3, 15),
        methode: MethodePaiement::Virement,
        statut: PaiementStatut::Confirme,
        reference: None,
        notes: None,
    })
    .unwrap();
    assert_eq!(
        client::chercher(&store, &cli.id).unwrap().total_facture,
        dec!(385.56)
    );

    // Deleting an invoice recomputes it.
    facture::supprimer(&mut store, &f1.id).unwrap();
    assert_eq!(
        client::chercher(&store, &cli.id).unwrap().total_facture,
        dec!(192.78)
    );
}

// --- Cascades ---

#[test]
fn suppression_facture_emporte_ses_paiements() {
    let (mut store, cli, prod) = amorce();
    let facture = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();
    paiement::creer(&mut store, PaiementCommande {
        facture_id: facture.id.clone(),
        montant: dec!(50),
        date_paiement: date(2025, 3, 10),
        methode: MethodePaiement::Cheque,
        statut: PaiementStatut::EnAttente,
        reference: Some("CHQ-104".into()),
        notes: None,
    })
    .unwrap();

    facture::supprimer(&mut store, &facture.id).unwrap();
    assert!(store.paiements().unwrap().is_empty());
}

#[test]
fn suppression_client_en_cascade_complete() {
    let (mut store, cli, prod) = amorce();
    let facture = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();
    devis::creer(&mut store, DevisCommande {
        numero: "D-2025-0001".into(),
        client_id: cli.id.clone(),
        date_creation: date(2025, 3, 1),
        date_expiration: date(2025, 4, 1),
        statut: DevisStatut::Envoye,
        lignes: vec![LigneCommande {
            produit_id: prod.id.clone(),
            quantite: 1,
            prix_unitaire: dec!(10),
            remise: Decimal::ZERO,
        }],
        remise_totale: Decimal::ZERO,
        appliquer_tva: true,
        notes: None,
        conditions_reglement: None,
    })
    .unwrap();
    bon_livraison::creer(&mut store, BonLivraisonCommande {
        numero: "BL-2025-0001".into(),
        client_id: cli.id.clone(),
        date_creation: date(2025, 3, 2),
        date_livraison: date(2025, 3, 5),
        statut: LivraisonStatut::Prepare,
        lignes: vec![LigneCommande {
            produit_id: prod.id.clone(),
            quantite: 3,
            prix_unitaire: dec!(10),
            remise: Decimal::ZERO,
        }],
        notes: None,
    })
    .unwrap();
    paiement::creer(&mut store, PaiementCommande {
        facture_id: facture.id.clone(),
        montant: dec!(100),
        date_paiement: date(2025, 3, 20),
        methode: MethodePaiement::Especes,
        statut: PaiementStatut::Confirme,
        reference: None,
        notes: None,
    })
    .unwrap();

    client::supprimer(&mut store, &cli.id).unwrap();

    assert!(store.factures().unwrap().is_empty());
    assert!(store.tous_devis().unwrap().is_empty());
    assert!(store.bons().unwrap().is_empty());
    assert!(store.paiements().unwrap().is_empty(), "no orphan payments");
}

// --- Uniqueness ---

#[test]
fn email_et_code_client_uniques() {
    let (mut store, _cli, _) = amorce();
    let err = client::creer(&mut store, client_commande("contact@horizon.tn", "CL-0002"))
        .unwrap_err();
    assert!(matches!(err, FacturierError::Conflict(_)));

    let err = client::creer(&mut store, client_commande("autre@horizon.tn", "CL-0001"))
        .unwrap_err();
    assert!(matches!(err, FacturierError::Conflict(_)));
}

#[test]
fn nom_de_produit_unique() {
    let (mut store, _, _prod) = amorce();
    let err = produit::creer(&mut store, produit_commande("Maintenance", dec!(1))).unwrap_err();
    assert!(matches!(err, FacturierError::Conflict(_)));
}

// --- Paiements ---

#[test]
fn paiement_sur_facture_inconnue_refuse() {
    let (mut store, _, _) = amorce();
    let err = paiement::creer(&mut store, PaiementCommande {
        facture_id: "fac-9999".into(),
        montant: dec!(10),
        date_paiement: date(2025, 1, 1),
        methode: MethodePaiement::Carte,
        statut: PaiementStatut::EnAttente,
        reference: None,
        notes: None,
    })
    .unwrap_err();
    assert!(matches!(err, FacturierError::NotFound { entite: "facture", .. }));
}

#[test]
fn surpaiement_tolere() {
    let (mut store, cli, prod) = amorce();
    let facture = facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();
    // Twice the invoice total: nothing rejects an overpayment.
    let paiement = paiement::creer(&mut store, PaiementCommande {
        facture_id: facture.id.clone(),
        montant: facture.total * dec!(2),
        date_paiement: date(2025, 3, 1),
        methode: MethodePaiement::Virement,
        statut: PaiementStatut::Confirme,
        reference: None,
        notes: None,
    })
    .unwrap();
    assert_eq!(paiement.montant, dec!(385.56));
}

// --- Parametres ---

#[test]
fn parametres_aller_retour() {
    let mut store = MemoireStore::new();
    assert!(parametres::charger(&store).unwrap().entreprise.is_none());

    parametres::enregistrer(&mut store, Parametres {
        entreprise: Some(Entreprise {
            nom: Some("NGBilling SARL".into()),
            siret: Some("1234567/A/M/000".into()),
            adresse: Some("Tunis".into()),
            logo: None,
            rib: Some("TN59 1000 6035 1835 9847 8831".into()),
        }),
        ..Parametres::default()
    })
    .unwrap();

    let relus = parametres::charger(&store).unwrap();
    assert_eq!(
        relus.entreprise.and_then(|e| e.nom).as_deref(),
        Some("NGBilling SARL")
    );
}

// --- Listing order ---

#[test]
fn listes_du_plus_recent_au_plus_ancien() {
    let (mut store, cli, prod) = amorce();
    let mut ancienne = facture_commande(&cli, &prod, "F-2024-0001");
    ancienne.date_creation = date(2024, 6, 1);
    facture::creer(&mut store, ancienne).unwrap();
    facture::creer(&mut store, facture_commande(&cli, &prod, "F-2025-0001")).unwrap();

    let toutes = facture::lister(&store).unwrap();
    assert_eq!(toutes[0].numero, "F-2025-0001");
    assert_eq!(toutes[1].numero, "F-2024-0001");
}
