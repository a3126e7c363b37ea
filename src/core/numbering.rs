//! Human-readable document numbers and collision handling.
//!
//! Numbers follow `{prefix}-{year}-{suffix}`: `D-2025-0001` for devis,
//! `F-2025-0001` for factures, `BL-2025-0001` for bons de livraison. The
//! caller usually proposes a number; on collision a fresh 4-digit random
//! suffix is drawn and re-checked, up to [`MAX_TENTATIVES`] times.

use rand::Rng;

use super::error::FacturierError;
use super::types::DocumentKind;

/// Retry budget for collision regeneration. A store that cannot produce a
/// free number within this many draws surfaces as a numbering error.
pub const MAX_TENTATIVES: u32 = 32;

/// A parsed document number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Numero {
    pub kind: DocumentKind,
    pub annee: i32,
    pub suffixe: String,
}

impl Numero {
    /// Parse `{prefix}-{year}-{suffix}`. Returns `None` when the prefix is
    /// unknown, the year is not numeric, or the suffix is empty.
    pub fn analyser(texte: &str) -> Option<Self> {
        let (prefixe, reste) = texte.split_once('-')?;
        let kind = match prefixe {
            "D" => DocumentKind::Devis,
            "F" => DocumentKind::Facture,
            "BL" => DocumentKind::BonLivraison,
            _ => return None,
        };
        let (annee, suffixe) = reste.split_once('-')?;
        let annee: i32 = annee.parse().ok()?;
        if suffixe.is_empty() {
            return None;
        }
        Some(Self {
            kind,
            annee,
            suffixe: suffixe.to_string(),
        })
    }
}

impl std::fmt::Display for Numero {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}-{}", self.kind.prefixe(), self.annee, self.suffixe)
    }
}

/// Draw a fresh `{prefix}-{year}-{4 random digits}` number.
pub fn proposer_numero(kind: DocumentKind, annee: i32, rng: &mut impl Rng) -> String {
    format!(
        "{}-{}-{}",
        kind.prefixe(),
        annee,
        rng.gen_range(1000..10000)
    )
}

/// Settle on a unique number for a new document.
///
/// `propose` is the caller's suggestion (kept verbatim when free). `existe`
/// asks the store whether a number is already taken; a store failure aborts
/// the whole allocation. On collision, regenerates with a random 4-digit
/// suffix and re-checks, at most [`MAX_TENTATIVES`] times.
pub fn numero_unique<F>(
    propose: &str,
    kind: DocumentKind,
    annee: i32,
    mut existe: F,
    rng: &mut impl Rng,
) -> Result<String, FacturierError>
where
    F: FnMut(&str) -> Result<bool, FacturierError>,
{
    let mut candidat = propose.to_string();
    for _ in 0..MAX_TENTATIVES {
        if !existe(&candidat)? {
            return Ok(candidat);
        }
        candidat = proposer_numero(kind, annee, rng);
    }
    Err(FacturierError::Numbering(format!(
        "aucun numéro libre après {MAX_TENTATIVES} tentatives (dernier essai: {candidat})"
    )))
}
