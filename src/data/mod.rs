//! Host data: configuration object, product records, fallbacks.
//!
//! Everything the host page injects is read once at mount and normalized
//! here. The interaction components only ever see `PlayerConfig` and
//! `ProductSet`, both treated as read-only afterwards.
//!
//! ## Error Handling
//!
//! `ConfigError` is returned only when the configuration is not a JSON object
//! at all. Bad optional fields degrade to defaults and unreadable products are
//! skipped with a warning.

mod config;
mod error;
mod fallback;
mod product;
mod source;

pub use config::*;
pub use error::{ConfigError, ConfigResult};
pub use fallback::*;
pub use product::*;
pub use source::*;
