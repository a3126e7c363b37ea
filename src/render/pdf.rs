//! Print-to-PDF through a headless browser.
//!
//! One WebDriver session per call: connect, navigate to the rendered HTML
//! as a data URL, print, close. No pooling and no internal retry: a
//! failing engine surfaces as a single generic rendering error, and the
//! session is torn down on every path.

use base64::{Engine as _, engine::general_purpose};
use fantoccini::wd::{PrintConfigurationBuilder, PrintMargins, PrintSize};
use fantoccini::{Client, ClientBuilder};
use serde_json::Map;
use tracing::{debug, error, warn};

use super::template;
use crate::core::{
    BonLivraison, Client as ClientFacture, Devis, DocumentKind, Facture, FacturierError,
    Parametres,
};

/// Default WebDriver endpoint (chromedriver).
pub const WEBDRIVER_PAR_DEFAUT: &str = "http://localhost:4444";

/// A generated document, ready to hand to the transport layer.
#[derive(Debug, Clone)]
pub struct DocumentPdf {
    pub octets: Vec<u8>,
    /// Suggested filename, `{type}-{numero}.pdf`.
    pub nom_fichier: String,
    pub mime: &'static str,
}

impl DocumentPdf {
    fn new(kind: DocumentKind, numero: &str, octets: Vec<u8>) -> Self {
        Self {
            octets,
            nom_fichier: format!("{}-{}.pdf", kind.libelle(), numero),
            mime: "application/pdf",
        }
    }
}

/// Render a quote to PDF.
pub async fn devis_en_pdf(
    devis: &Devis,
    client: &ClientFacture,
    parametres: &Parametres,
    webdriver_url: &str,
) -> Result<DocumentPdf, FacturierError> {
    let env = template::environnement().map_err(erreur_gabarit)?;
    let html = template::rendre_devis(&env, devis, client, parametres).map_err(erreur_gabarit)?;
    let octets = imprimer(&html, webdriver_url).await?;
    debug!(numero = %devis.numero, taille = octets.len(), "devis rendu en PDF");
    Ok(DocumentPdf::new(DocumentKind::Devis, &devis.numero, octets))
}

/// Render an invoice to PDF.
pub async fn facture_en_pdf(
    facture: &Facture,
    client: &ClientFacture,
    parametres: &Parametres,
    webdriver_url: &str,
) -> Result<DocumentPdf, FacturierError> {
    let env = template::environnement().map_err(erreur_gabarit)?;
    let html =
        template::rendre_facture(&env, facture, client, parametres).map_err(erreur_gabarit)?;
    let octets = imprimer(&html, webdriver_url).await?;
    debug!(numero = %facture.numero, taille = octets.len(), "facture rendue en PDF");
    Ok(DocumentPdf::new(
        DocumentKind::Facture,
        &facture.numero,
        octets,
    ))
}

/// Render a delivery note to PDF.
pub async fn bon_livraison_en_pdf(
    bon: &BonLivraison,
    client: &ClientFacture,
    parametres: &Parametres,
    webdriver_url: &str,
) -> Result<DocumentPdf, FacturierError> {
    let env = template::environnement().map_err(erreur_gabarit)?;
    let html =
        template::rendre_bon_livraison(&env, bon, client, parametres).map_err(erreur_gabarit)?;
    let octets = imprimer(&html, webdriver_url).await?;
    debug!(numero = %bon.numero, taille = octets.len(), "bon de livraison rendu en PDF");
    Ok(DocumentPdf::new(
        DocumentKind::BonLivraison,
        &bon.numero,
        octets,
    ))
}

async fn connecter(webdriver_url: &str) -> Result<Client, fantoccini::error::NewSessionError> {
    let mut caps = Map::new();
    caps.insert(
        "goog:chromeOptions".to_string(),
        serde_json::json!({ "args": ["--headless", "--no-sandbox"] }),
    );
    ClientBuilder::native()
        .capabilities(caps)
        .connect(webdriver_url)
        .await
}

/// Print an HTML page to A4 with 20 mm margins. All-or-nothing; the
/// session is closed whether printing succeeded or not.
async fn imprimer(html: &str, webdriver_url: &str) -> Result<Vec<u8>, FacturierError> {
    let client = connecter(webdriver_url).await.map_err(|e| {
        error!(erreur = %e, "démarrage du moteur de rendu impossible");
        FacturierError::Rendering("moteur de rendu indisponible".into())
    })?;

    let resultat = imprimer_page(&client, html).await;

    if let Err(e) = client.close().await {
        warn!(erreur = %e, "fermeture de la session de rendu échouée");
    }

    resultat
}

async fn imprimer_page(client: &Client, html: &str) -> Result<Vec<u8>, FacturierError> {
    let encode = general_purpose::STANDARD.encode(html.as_bytes());
    client
        .goto(&format!("data:text/html;base64,{encode}"))
        .await
        .map_err(erreur_impression)?;

    let configuration = PrintConfigurationBuilder::default()
        // A4 in centimeters, 20 mm margins all around
        .size(PrintSize {
            width: 21.0,
            height: 29.7,
        })
        .margins(PrintMargins {
            top: 2.0,
            left: 2.0,
            right: 2.0,
            bottom: 2.0,
        })
        .build()
        .map_err(|e| {
            error!(erreur = %e, "configuration d'impression invalide");
            FacturierError::Rendering("configuration d'impression invalide".into())
        })?;

    client.print(configuration).await.map_err(erreur_impression)
}

fn erreur_gabarit(e: minijinja::Error) -> FacturierError {
    error!(erreur = %e, "rendu du gabarit HTML échoué");
    FacturierError::Rendering("rendu du gabarit échoué".into())
}

fn erreur_impression(e: fantoccini::error::CmdError) -> FacturierError {
    error!(erreur = %e, "impression PDF échouée");
    FacturierError::Rendering("impression du document échouée".into())
}
