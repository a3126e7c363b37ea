//! Document rendering: display formatting, amount-in-words, HTML templates,
//! and print-to-PDF through a headless browser.
//!
//! The renderer consumes persisted records (document, client, company
//! settings) and never recomputes totals; what was last persisted is what
//! prints.

mod format;
mod lettres;
mod pdf;
mod template;

pub use format::{format_date, format_date_longue, format_montant, format_montant_f64};
pub use lettres::{montant_en_lettres, nombre_en_lettres};
pub use pdf::{
    DocumentPdf, WEBDRIVER_PAR_DEFAUT, bon_livraison_en_pdf, devis_en_pdf, facture_en_pdf,
};
pub use template::{environnement, rendre_bon_livraison, rendre_devis, rendre_facture};
