pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod ui;

pub use api::{ActivityApi, HttpActivityApi};
pub use app::synchronizer;
pub use config::Config;
pub use errors::ClientError;
pub use handlers::{Outcome, ViewSynchronizer};
pub use state::ViewState;
