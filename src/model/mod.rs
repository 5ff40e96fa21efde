//! Model module - Application state and data types
//!
//! - `types`: Core type definitions (validated query, lookup phase, focus)
//! - `content`: Post office records and name filtering
//! - `error`: Lookup error taxonomy
//! - `lookup_state`: The lookup state and its transitions
//! - `postal_client`: Postal API client
//! - `app_model`: Shared model handle used by the controller and the event loop

mod types;
mod content;
mod error;
mod lookup_state;
mod postal_client;
mod app_model;

pub use types::{Focus, LookupPhase, LookupQuery};

pub use content::PostOfficeRecord;

pub use error::LookupError;

pub use lookup_state::{LookupState, ResultsView, NO_DATA_MESSAGE, NO_MATCH_MESSAGE};

pub use postal_client::{PostalClient, PostalProvider, DEFAULT_ENDPOINT};

pub use app_model::AppModel;
