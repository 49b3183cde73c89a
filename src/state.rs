use std::sync::Arc;

use crate::database::AssetSource;

#[derive(Clone)]
pub struct AppState {
    pub assets: Arc<dyn AssetSource>,
    pub currency: String,
}

impl AppState {
    pub fn new(assets: Arc<dyn AssetSource>, currency: impl Into<String>) -> Self {
        Self {
            assets,
            currency: currency.into(),
        }
    }
}
