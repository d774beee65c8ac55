pub mod app;
pub mod error;
pub mod event;
pub mod modules;
pub mod ui;
pub mod util;

pub use error::{Result, WikiRagError};
