use std::sync::Arc;
use vhub_builder::Build;
use vhub_catalog::{Catalog, DEFAULT_CATALOG_JSON};
use vhub_domain::catalog::{MarketplaceLink, PartCategory, PartDefinition};
use vhub_summary::{DEFAULT_MARKETPLACES, aggregate_marketplaces, summarize};

fn catalog() -> Catalog {
    Catalog::from_json(DEFAULT_CATALOG_JSON).expect("embedded catalog must load")
}

#[test]
fn duplicate_marketplace_names_collapse_to_one_entry() {
    let catalog = catalog();
    let mut build = Build::default();
    build.set_frame(catalog.frame("enduro-carbon").expect("frame").clone());

    // Pike and the GX drivetrain both link Chain Reaction Cycles and Wiggle
    // at identical URLs; the aggregate holds each name exactly once.
    for (category, id) in
        [(PartCategory::Fork, "rockshox-pike"), (PartCategory::Drivetrain, "sram-gx-eagle")]
    {
        build
            .set_part(category, Some(catalog.part(category, id).expect("part").clone()))
            .expect("slot matches");
    }

    let marketplaces = aggregate_marketplaces(&build);
    assert_eq!(marketplaces.len(), 2);
    assert_eq!(marketplaces[0].name, "Chain Reaction Cycles");
    assert_eq!(marketplaces[0].url, "https://chainreactioncycles.com");
    assert_eq!(marketplaces[1].name, "Wiggle");
}

#[test]
fn no_links_falls_back_to_named_defaults() {
    let catalog = catalog();
    let mut build = Build::default();
    build.set_frame(catalog.frame("trail-carbon").expect("frame").clone());

    // Frame-only build: no part declares any link.
    let marketplaces = aggregate_marketplaces(&build);
    let expected: Vec<(&str, &str)> =
        marketplaces.iter().map(|m| (m.name.as_str(), m.url.as_str())).collect();
    assert_eq!(expected, DEFAULT_MARKETPLACES);
}

#[test]
fn later_link_with_same_name_updates_url_in_place() {
    let mut build = Build::default();
    build.set_frame(catalog().frame("trail-carbon").expect("frame").clone());

    let first = Arc::new(PartDefinition {
        id: "first".to_owned(),
        name: "First".to_owned(),
        category: PartCategory::Grips,
        price: 10,
        compatibility: vec!["disc".to_owned()],
        marketplace_links: vec![
            MarketplaceLink { name: "Bike24".to_owned(), url: "https://bike24.example/a".to_owned() },
            MarketplaceLink { name: "Wiggle".to_owned(), url: "https://wiggle.com".to_owned() },
        ],
    });
    let second = Arc::new(PartDefinition {
        id: "second".to_owned(),
        name: "Second".to_owned(),
        category: PartCategory::Pedals,
        price: 20,
        compatibility: vec!["disc".to_owned()],
        marketplace_links: vec![MarketplaceLink {
            name: "Bike24".to_owned(),
            url: "https://bike24.example/b".to_owned(),
        }],
    });

    build.set_part(PartCategory::Grips, Some(first)).expect("slot matches");
    build.set_part(PartCategory::Pedals, Some(second)).expect("slot matches");

    let marketplaces = aggregate_marketplaces(&build);
    assert_eq!(marketplaces.len(), 2);
    // Position from the first occurrence, URL from the last.
    assert_eq!(marketplaces[0].name, "Bike24");
    assert_eq!(marketplaces[0].url, "https://bike24.example/b");
}

#[test]
fn summary_rows_mirror_the_build() {
    let catalog = catalog();
    let mut build = Build::default();
    build.set_frame(catalog.frame("enduro-carbon").expect("frame").clone());
    build
        .set_part(
            PartCategory::Fork,
            Some(catalog.part(PartCategory::Fork, "fox-36").expect("part").clone()),
        )
        .expect("slot matches");

    let summary = summarize(&build).expect("summary succeeds");
    assert_eq!(summary.frame_color, "matte-black");
    assert_eq!(summary.total, 2299 + 1299);
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].component, "Frame");
    assert!(summary.rows[0].marketplace_links.is_empty());
    assert_eq!(summary.rows[1].component, "Fork");
    assert_eq!(summary.rows[1].name, "Fox 36 Factory");

    let summary_err = summarize(&Build::default()).unwrap_err();
    assert!(matches!(summary_err, vhub_summary::SummaryError::EmptyBuild { .. }));
}
