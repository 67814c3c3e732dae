//! Purchase-link aggregation across the selected parts.

use vhub_builder::Build;
use vhub_domain::catalog::MarketplaceLink;

/// Fallback marketplaces offered when no selected part declares any link.
pub const DEFAULT_MARKETPLACES: &[(&str, &str)] = &[
    ("Chain Reaction Cycles", "https://chainreactioncycles.com"),
    ("Wiggle", "https://wiggle.com"),
];

/// The unique marketplace entries (by name) across all selected parts' links.
///
/// The first occurrence of a name fixes its position; a later link with the
/// same name updates the URL in place. When the selection declares no links
/// at all, the result falls back to [`DEFAULT_MARKETPLACES`].
#[must_use]
pub fn aggregate_marketplaces(build: &Build) -> Vec<MarketplaceLink> {
    let mut links: Vec<MarketplaceLink> = Vec::new();

    for (_, part) in build.selected_parts() {
        for link in &part.marketplace_links {
            match links.iter_mut().find(|existing| existing.name == link.name) {
                Some(existing) => existing.url.clone_from(&link.url),
                None => links.push(link.clone()),
            }
        }
    }

    if links.is_empty() {
        links.extend(DEFAULT_MARKETPLACES.iter().map(|&(name, url)| MarketplaceLink {
            name: name.to_owned(),
            url: url.to_owned(),
        }));
    }

    links
}
