//! Property-based tests for the totals engine and numbering.

use facturier::core::*;
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Arbitrary line with realistic ranges: quantity 1–500, price 0–10 000
/// with millime precision, discount 0–100 %.
fn ligne() -> impl Strategy<Value = LigneTarifee> {
    (1u32..=500, 0i64..=10_000_000, 0i64..=10_000).prop_map(|(quantite, prix, remise)| {
        LigneTarifee::new(quantite, Decimal::new(prix, 3)).avec_remise(Decimal::new(remise, 2))
    })
}

proptest! {
    #[test]
    fn totaux_deterministes(lignes in prop::collection::vec(ligne(), 0..12), remise in 0i64..=10_000) {
        let remise_totale = Decimal::new(remise, 2);
        let premier = calculer_totaux(&lignes, remise_totale, true);
        let second = calculer_totaux(&lignes, remise_totale, true);
        prop_assert_eq!(premier, second);
    }

    #[test]
    fn invariants_arithmetiques(lignes in prop::collection::vec(ligne(), 0..12), remise in 0i64..=10_000) {
        let remise_totale = Decimal::new(remise, 2);
        let t = calculer_totaux(&lignes, remise_totale, true);

        let somme: Decimal = lignes.iter().map(total_ligne).sum();
        prop_assert_eq!(t.sous_total, somme);
        prop_assert_eq!(t.remise_montant, t.sous_total * remise_totale / dec!(100));
        prop_assert_eq!(t.sous_total_apres_remise, t.sous_total - t.remise_montant);
        prop_assert_eq!(t.tva, t.sous_total_apres_remise * TAUX_TVA);
        prop_assert_eq!(t.total, t.sous_total_apres_remise + t.tva);
        prop_assert!(t.total >= Decimal::ZERO);
    }

    #[test]
    fn tva_coupee_laisse_le_net(lignes in prop::collection::vec(ligne(), 0..12)) {
        let t = calculer_totaux(&lignes, Decimal::ZERO, false);
        prop_assert_eq!(t.tva, Decimal::ZERO);
        prop_assert_eq!(t.total, t.sous_total_apres_remise);
    }

    #[test]
    fn numeros_generes_analysables(annee in 2000i32..2100, graine in 0u64..1000) {
        use rand::SeedableRng;
        use rand::rngs::SmallRng;

        let mut rng = SmallRng::seed_from_u64(graine);
        for kind in [DocumentKind::Devis, DocumentKind::Facture, DocumentKind::BonLivraison] {
            let numero = proposer_numero(kind, annee, &mut rng);
            let analyse = Numero::analyser(&numero).unwrap();
            prop_assert_eq!(analyse.kind, kind);
            prop_assert_eq!(analyse.annee, annee);
            prop_assert_eq!(analyse.suffixe.len(), 4);
        }
    }
}
