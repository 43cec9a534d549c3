//! Content client and page data loaders for the Asia Auto Gymkhana
//! Championship website.

pub use client::ContentClient;
pub use config::ContentConfig;
pub use content::resolve_image_url;
pub use error::{ContentError, Result};
pub use loader::{load, spawn_load, PageState};
pub use model::*;

pub mod carousel;
mod client;
pub mod config;
mod content;
mod error;
pub mod fallback;
pub mod filters;
pub mod loader;
mod model;
pub mod pages;
#[cfg(test)]
pub(crate) mod test_support;
