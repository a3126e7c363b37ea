//! Company settings. One record, read by the renderer, written from the
//! admin screen.

use tracing::info;

use crate::core::{FacturierError, Parametres};
use crate::store::ParametresStore;

pub fn charger<S: ParametresStore>(store: &S) -> Result<Parametres, FacturierError> {
    store.charger_parametres()
}

pub fn enregistrer<S: ParametresStore>(
    store: &mut S,
    parametres: Parametres,
) -> Result<Parametres, FacturierError> {
    store.enregistrer_parametres(parametres.clone())?;
    info!("paramètres enregistrés");
    Ok(parametres)
}
