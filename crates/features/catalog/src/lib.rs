//! # Catalog feature slice
//!
//! Holds the immutable frame/part catalog supplied at startup and answers
//! compatibility queries against it. The catalog is loaded once (embedded
//! default or a configured JSON file), validated, indexed, and then shared
//! read-only across all sessions.

mod error;
mod loader;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::{CatalogError, CatalogErrorExt};

use fxhash::FxHashMap;
use std::path::Path;
use std::sync::Arc;
use vhub_domain::catalog::{FrameDefinition, PartCategory, PartDefinition};
use vhub_domain::config::ApiConfig;
use vhub_kernel::domain::registry::InitializedSlice;

/// Embedded default catalog, used when no catalog path is configured.
pub const DEFAULT_CATALOG_JSON: &str = include_str!("../data/catalog.json");

/// Catalog feature state.
#[vhub_derive::vhub_slice]
pub struct Catalog {
    frames: Vec<Arc<FrameDefinition>>,
    frame_index: FxHashMap<String, usize>,
    parts: FxHashMap<PartCategory, Vec<Arc<PartDefinition>>>,
}

impl Catalog {
    /// Builds a catalog from a JSON document.
    ///
    /// # Errors
    /// Returns [`CatalogError::Parse`] for malformed JSON and
    /// [`CatalogError::Validation`] for structurally invalid content.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let doc = loader::parse(json)?;

        let frames: Vec<Arc<FrameDefinition>> =
            doc.frames.into_iter().map(Arc::new).collect();
        let frame_index = frames
            .iter()
            .enumerate()
            .map(|(idx, frame)| (frame.id.clone(), idx))
            .collect::<FxHashMap<_, _>>();
        let parts = doc
            .parts
            .into_iter()
            .map(|(category, list)| (category, list.into_iter().map(Arc::new).collect()))
            .collect::<FxHashMap<_, _>>();

        Ok(Self::new(CatalogInner { frames, frame_index, parts }))
    }

    /// Builds a catalog from a JSON file on disk.
    ///
    /// # Errors
    /// Returns [`CatalogError::Io`] when the file cannot be read, otherwise
    /// the same errors as [`Catalog::from_json`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Reading catalog file {}", path.display()))?;
        Self::from_json(&json)
    }
}

impl CatalogInner {
    /// All frames in declaration order.
    #[must_use]
    pub fn frames(&self) -> &[Arc<FrameDefinition>] {
        &self.frames
    }

    /// Looks up a frame by id.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownFrame`] if the id is not in the catalog.
    pub fn frame(&self, id: &str) -> Result<&Arc<FrameDefinition>, CatalogError> {
        self.frame_index
            .get(id)
            .map(|&idx| &self.frames[idx])
            .ok_or_else(|| CatalogError::UnknownFrame { message: id.to_owned().into(), context: None })
    }

    /// The parts of a category in declaration order; empty when the category
    /// has no catalog entries.
    #[must_use]
    pub fn parts(&self, category: PartCategory) -> &[Arc<PartDefinition>] {
        self.parts.get(&category).map_or(&[] as &[_], Vec::as_slice)
    }

    /// Looks up a part by category and id.
    ///
    /// # Errors
    /// Returns [`CatalogError::UnknownPart`] if the id is not listed under the category.
    pub fn part(
        &self,
        category: PartCategory,
        id: &str,
    ) -> Result<&Arc<PartDefinition>, CatalogError> {
        self.parts(category).iter().find(|part| part.id == id).ok_or_else(|| {
            CatalogError::UnknownPart {
                message: format!("'{id}' in category '{category}'").into(),
                context: None,
            }
        })
    }

    /// The subset of a category's parts compatible with `frame`.
    ///
    /// A part qualifies when its tag set intersects the frame's compatibility
    /// attribute values. The filter is stable: declaration order is preserved.
    #[must_use]
    pub fn compatible_parts(
        &self,
        frame: &FrameDefinition,
        category: PartCategory,
    ) -> Vec<Arc<PartDefinition>> {
        self.parts(category).iter().filter(|part| part.fits(frame)).cloned().collect()
    }
}

/// Initialize the catalog feature.
///
/// Loads the catalog from `config.catalog.path` when set, otherwise falls back
/// to the embedded default catalog.
///
/// # Errors
/// Returns an error if the configured file cannot be read or the document is invalid.
pub fn init(config: &ApiConfig) -> Result<InitializedSlice, CatalogError> {
    let catalog = match &config.catalog.path {
        Some(path) => Catalog::from_path(path)?,
        None => Catalog::from_json(DEFAULT_CATALOG_JSON)?,
    };

    tracing::info!(
        frames = catalog.frames().len(),
        categories = catalog.parts.len(),
        "Catalog slice initialized"
    );

    Ok(InitializedSlice::new(catalog))
}
