#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod error;
pub mod log;
pub mod routes;
pub mod settings;

pub use error::AppError;
pub use routes::{AppState, ProgramRoutes};
pub use settings::{Settings, SettingsError};
