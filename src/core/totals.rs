//! Deterministic, side-effect-free computation of document totals.
//!
//! The same function backs document creation and edit; totals are always
//! recomputed wholesale from the lines, never patched incrementally. No
//! rounding happens here; display formatting owns that.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::types::LigneDocument;

/// Canonical VAT rate (19%).
pub const TAUX_TVA: Decimal = dec!(0.19);

/// Pricing input for one line, before product snapshotting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LigneTarifee {
    pub quantite: u32,
    pub prix_unitaire: Decimal,
    /// Per-line discount percent, 0–100.
    pub remise: Decimal,
}

impl LigneTarifee {
    pub fn new(quantite: u32, prix_unitaire: Decimal) -> Self {
        Self {
            quantite,
            prix_unitaire,
            remise: Decimal::ZERO,
        }
    }

    pub fn avec_remise(mut self, remise: Decimal) -> Self {
        self.remise = remise;
        self
    }
}

impl From<&LigneDocument> for LigneTarifee {
    fn from(ligne: &LigneDocument) -> Self {
        Self {
            quantite: ligne.quantite,
            prix_unitaire: ligne.prix_unitaire,
            remise: ligne.remise,
        }
    }
}

/// Document totals. All values carry full precision; callers format for
/// display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Totaux {
    /// Sum of line totals, before the global discount.
    pub sous_total: Decimal,
    /// `sous_total * remise_totale / 100`.
    pub remise_montant: Decimal,
    /// `sous_total - remise_montant`.
    pub sous_total_apres_remise: Decimal,
    /// `sous_total_apres_remise * TAUX_TVA`, or zero when VAT is off.
    pub tva: Decimal,
    /// `sous_total_apres_remise + tva`.
    pub total: Decimal,
}

/// `quantite * prix_unitaire * (1 - remise/100)`, full precision.
pub fn total_ligne(ligne: &LigneTarifee) -> Decimal {
    let brut = Decimal::from(ligne.quantite) * ligne.prix_unitaire;
    brut * (Decimal::ONE - ligne.remise / dec!(100))
}

/// Compute a document's totals from its lines and discount/VAT settings.
///
/// Pure and total: an empty line list yields all-zero totals, and no
/// clamping is applied if inputs would drive a value negative (caller
/// error, not guarded).
pub fn calculer_totaux(
    lignes: &[LigneTarifee],
    remise_totale: Decimal,
    appliquer_tva: bool,
) -> Totaux {
    let sous_total: Decimal = lignes.iter().map(total_ligne).sum();
    let remise_montant = sous_total * remise_totale / dec!(100);
    let sous_total_apres_remise = sous_total - remise_montant;
    let tva = if appliquer_tva {
        sous_total_apres_remise * TAUX_TVA
    } else {
        Decimal::ZERO
    };
    let total = sous_total_apres_remise + tva;

    Totaux {
        sous_total,
        remise_montant,
        sous_total_apres_remise,
        tva,
        total,
    }
}

/// Convenience over stored lines (uses the stored per-line pricing, not the
/// stored per-line totals).
pub fn totaux_depuis_lignes(
    lignes: &[LigneDocument],
    remise_totale: Decimal,
    appliquer_tva: bool,
) -> Totaux {
    let tarifs: Vec<LigneTarifee> = lignes.iter().map(LigneTarifee::from).collect();
    calculer_totaux(&tarifs, remise_totale, appliquer_tva)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ligne_sans_remise() {
        let ligne = LigneTarifee::new(3, dec!(10.50));
        assert_eq!(total_ligne(&ligne), dec!(31.50));
    }

    #[test]
    fn ligne_avec_remise() {
        // 2 * 100 * 0.9 = 180
        let ligne = LigneTarifee::new(2, dec!(100)).avec_remise(dec!(10));
        assert_eq!(total_ligne(&ligne), dec!(180));
    }

    #[test]
    fn remise_composee() {
        // 2 × 100 − 10 % → 180 ; remise globale 10 % → 162 ; TVA 30.78
        let lignes = [LigneTarifee::new(2, dec!(100)).avec_remise(dec!(10))];
        let t = calculer_totaux(&lignes, dec!(10), true);
        assert_eq!(t.sous_total, dec!(180));
        assert_eq!(t.remise_montant, dec!(18.0));
        assert_eq!(t.sous_total_apres_remise, dec!(162.0));
        assert_eq!(t.tva, dec!(30.78));
        assert_eq!(t.total, dec!(192.78));
    }

    #[test]
    fn liste_vide() {
        let t = calculer_totaux(&[], Decimal::ZERO, true);
        assert_eq!(t, Totaux::default());
    }

    #[test]
    fn bascule_tva() {
        let lignes = [
            LigneTarifee::new(1, dec!(40)),
            LigneTarifee::new(2, dec!(30)),
        ];
        let avec = calculer_totaux(&lignes, Decimal::ZERO, true);
        let sans = calculer_totaux(&lignes, Decimal::ZERO, false);
        assert_eq!(avec.sous_total, dec!(100));
        assert_eq!(avec.tva, dec!(19.00));
        assert_eq!(avec.total, dec!(119.00));
        assert_eq!(sans.tva, Decimal::ZERO);
        assert_eq!(sans.total, sans.sous_total_apres_remise);
    }

    #[test]
    fn sans_remise_total_vaut_sous_total_fois_taux() {
        let lignes = [
            LigneTarifee::new(4, dec!(12.25)),
            LigneTarifee::new(1, dec!(51)),
        ];
        let t = calculer_totaux(&lignes, Decimal::ZERO, true);
        assert_eq!(t.total, t.sous_total * (Decimal::ONE + TAUX_TVA));
    }
}
