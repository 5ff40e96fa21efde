//! Controller module - Application logic and event handling
//!
//! - `input`: Key event handling
//! - `lookup`: Starting lookups and applying their outcome
//! - `navigation`: Focus and result selection

mod input;
mod lookup;
mod navigation;

use std::sync::Arc;

use crate::model::{AppModel, PostalProvider};

#[derive(Clone)]
pub struct AppController {
    pub(crate) model: AppModel,
    pub(crate) provider: Arc<dyn PostalProvider>,
}

impl AppController {
    pub fn new(model: AppModel, provider: Arc<dyn PostalProvider>) -> Self {
        Self { model, provider }
    }
}
