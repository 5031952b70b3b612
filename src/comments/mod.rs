pub mod error;
pub mod event;
pub mod notifier;
pub mod report;
pub mod store;

pub use event::PackageEvent;
pub use store::CommentStore;

use crate::config::Config;
use crate::manifest;
use anyhow::Result;

/// Load the comment store for a session from the configured manifest.
pub fn load_store(config: &Config) -> Result<CommentStore> {
    let extra = manifest::read_extra(&config.manifest)?;
    Ok(CommentStore::from_extra(extra.as_ref()))
}
