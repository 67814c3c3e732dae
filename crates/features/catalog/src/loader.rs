//! Catalog document parsing and load-time validation.
//!
//! The catalog is a fixed input; anything structurally suspect is rejected
//! here so the rest of the system can treat the data as well-formed.

use crate::error::{CatalogError, CatalogErrorExt};
use fxhash::FxHashSet;
use serde::Deserialize;
use std::collections::BTreeMap;
use vhub_domain::catalog::{FrameDefinition, PartCategory, PartDefinition};

/// On-disk shape of the catalog: a frame list plus per-category part lists.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub(crate) struct CatalogDocument {
    pub(crate) frames: Vec<FrameDefinition>,
    #[serde(default)]
    pub(crate) parts: BTreeMap<PartCategory, Vec<PartDefinition>>,
}

pub(crate) fn parse(json: &str) -> Result<CatalogDocument, CatalogError> {
    let doc: CatalogDocument =
        serde_json::from_str(json).context("Deserializing catalog document")?;
    validate(&doc)?;
    Ok(doc)
}

fn validate(doc: &CatalogDocument) -> Result<(), CatalogError> {
    let mut frame_ids = FxHashSet::default();
    for frame in &doc.frames {
        if !frame_ids.insert(frame.id.as_str()) {
            return Err(validation(format!("Duplicate frame id '{}'", frame.id)));
        }
        if frame.colors.is_empty() {
            return Err(validation(format!("Frame '{}' declares no colors", frame.id)));
        }
    }

    for (category, parts) in &doc.parts {
        let mut part_ids = FxHashSet::default();
        for part in parts {
            if part.category != *category {
                return Err(validation(format!(
                    "Part '{}' is listed under '{category}' but declares category '{}'",
                    part.id, part.category
                )));
            }
            if !part_ids.insert(part.id.as_str()) {
                return Err(validation(format!(
                    "Duplicate part id '{}' in category '{category}'",
                    part.id
                )));
            }
            if part.compatibility.is_empty() {
                return Err(validation(format!("Part '{}' has no compatibility tags", part.id)));
            }
        }
    }

    Ok(())
}

fn validation(message: String) -> CatalogError {
    CatalogError::Validation { message: message.into(), context: None }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_catalog_parses_and_validates() {
        let doc = parse(crate::DEFAULT_CATALOG_JSON).expect("embedded catalog must be valid");
        assert_eq!(doc.frames.len(), 8);
        assert_eq!(doc.parts[&PartCategory::Fork].len(), 2);
    }

    #[test]
    fn rejects_duplicate_frame_ids() {
        let err = parse(
            r#"{
                "frames": [
                    { "id": "a", "name": "A", "category": "Trail", "basePrice": 1,
                      "colors": ["red"],
                      "compatibility": { "forkType": "x", "wheelSize": "y", "brakeType": "z" } },
                    { "id": "a", "name": "A2", "category": "Trail", "basePrice": 1,
                      "colors": ["red"],
                      "compatibility": { "forkType": "x", "wheelSize": "y", "brakeType": "z" } }
                ],
                "parts": {}
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));
    }

    #[test]
    fn rejects_frame_without_colors() {
        let err = parse(
            r#"{
                "frames": [
                    { "id": "a", "name": "A", "category": "Trail", "basePrice": 1,
                      "colors": [],
                      "compatibility": { "forkType": "x", "wheelSize": "y", "brakeType": "z" } }
                ],
                "parts": {}
            }"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("declares no colors"));
    }

    #[test]
    fn rejects_part_in_wrong_bucket() {
        let err = parse(
            r#"{
                "frames": [],
                "parts": {
                    "fork": [
                        { "id": "p", "name": "P", "category": "wheels", "price": 1,
                          "compatibility": ["x"], "marketplaceLinks": [] }
                    ]
                }
            }"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::Validation { .. }));
    }

    #[test]
    fn rejects_unknown_category_key() {
        let err = parse(r#"{ "frames": [], "parts": { "mudguards": [] } }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Parse { .. }));
    }
}
