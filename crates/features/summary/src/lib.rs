//! # Summary feature slice
//!
//! Read-only derivations over a finished build: the priced component
//! breakdown, the aggregated purchase links, and the CSV export.

mod error;
mod export;
mod marketplaces;
#[cfg(feature = "server")]
pub mod routes;

pub use crate::error::{SummaryError, SummaryErrorExt};
pub use crate::export::{export_file_name, render_csv};
pub use crate::marketplaces::{DEFAULT_MARKETPLACES, aggregate_marketplaces};

use serde::Serialize;
use vhub_builder::Build;
use vhub_domain::catalog::MarketplaceLink;

/// One priced line of the breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    /// "Frame" or the capitalized category label.
    pub component: String,
    pub name: String,
    pub price: u32,
    pub marketplace_links: Vec<MarketplaceLink>,
}

/// The priced breakdown of a build: frame first, then each selected part in
/// category display order, plus the derived total and purchase links.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub frame_color: String,
    pub rows: Vec<SummaryRow>,
    pub total: u32,
    pub marketplaces: Vec<MarketplaceLink>,
}

/// Derives the price breakdown for a build.
///
/// # Errors
/// Returns [`SummaryError::EmptyBuild`] when no frame is selected.
pub fn summarize(build: &Build) -> Result<Summary, SummaryError> {
    let Some(frame) = build.frame() else {
        return Err(SummaryError::EmptyBuild {
            message: "no frame selected".into(),
            context: None,
        });
    };

    let mut rows = Vec::with_capacity(1 + build.parts().len());
    rows.push(SummaryRow {
        component: "Frame".to_owned(),
        name: frame.name.clone(),
        price: frame.base_price,
        marketplace_links: Vec::new(),
    });
    for (category, part) in build.selected_parts() {
        rows.push(SummaryRow {
            component: category.label().to_owned(),
            name: part.name.clone(),
            price: part.price,
            marketplace_links: part.marketplace_links.clone(),
        });
    }

    Ok(Summary {
        frame_color: build.frame_color().to_owned(),
        rows,
        total: build.total_price(),
        marketplaces: aggregate_marketplaces(build),
    })
}
