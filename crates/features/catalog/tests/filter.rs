use vhub_catalog::{Catalog, DEFAULT_CATALOG_JSON};
use vhub_domain::catalog::PartCategory;

fn catalog() -> Catalog {
    Catalog::from_json(DEFAULT_CATALOG_JSON).expect("embedded catalog must load")
}

#[test]
fn enduro_frame_gets_both_160mm_forks() {
    let catalog = catalog();
    let frame = catalog.frame("enduro-carbon").expect("frame exists");

    // {forkType: 160mm-travel, wheelSize: 29-inch, brakeType: disc} against
    // forks tagged [160mm,140mm] and [160mm]: both intersect.
    let forks = catalog.compatible_parts(frame, PartCategory::Fork);
    let ids: Vec<&str> = forks.iter().map(|part| part.id.as_str()).collect();
    assert_eq!(ids, ["rockshox-pike", "fox-36"]);
}

#[test]
fn xc_frame_excludes_long_travel_forks() {
    let catalog = catalog();
    let frame = catalog.frame("xc-aluminum").expect("frame exists");

    // 100mm frame: neither fork carries a 100mm tag.
    let forks = catalog.compatible_parts(frame, PartCategory::Fork);
    assert!(forks.is_empty());

    // The drivetrain is tagged for 100mm and still offered.
    let drivetrains = catalog.compatible_parts(frame, PartCategory::Drivetrain);
    assert_eq!(drivetrains.len(), 1);
    assert_eq!(drivetrains[0].id, "sram-gx-eagle");
}

#[test]
fn empty_category_yields_empty_sequence() {
    let catalog = catalog();
    let frame = catalog.frame("trail-carbon").expect("frame exists");

    // No saddles in the catalog at all: empty result, not an error.
    assert!(catalog.parts(PartCategory::Saddle).is_empty());
    assert!(catalog.compatible_parts(frame, PartCategory::Saddle).is_empty());
}

#[test]
fn filter_preserves_declaration_order() {
    let json = r#"{
        "frames": [
            { "id": "f", "name": "F", "category": "Trail", "basePrice": 100,
              "colors": ["red"],
              "compatibility": { "forkType": "a", "wheelSize": "b", "brakeType": "c" } }
        ],
        "parts": {
            "grips": [
                { "id": "g1", "name": "G1", "category": "grips", "price": 1, "compatibility": ["c"] },
                { "id": "g2", "name": "G2", "category": "grips", "price": 2, "compatibility": ["zzz"] },
                { "id": "g3", "name": "G3", "category": "grips", "price": 3, "compatibility": ["a", "zzz"] },
                { "id": "g4", "name": "G4", "category": "grips", "price": 4, "compatibility": ["b"] }
            ]
        }
    }"#;
    let catalog = Catalog::from_json(json).expect("catalog loads");
    let frame = catalog.frame("f").expect("frame exists");

    let grips = catalog.compatible_parts(frame, PartCategory::Grips);
    let ids: Vec<&str> = grips
        .iter()
        .map(|part| part.id.as_str())
        .collect();
    assert_eq!(ids, ["g1", "g3", "g4"]);
}

#[test]
fn brake_parts_match_on_brake_type() {
    let catalog = catalog();
    // Every default frame uses disc brakes, so the XT brake set fits all of them.
    for frame in catalog.frames() {
        let brakes = catalog.compatible_parts(frame, PartCategory::Brakes);
        assert_eq!(brakes.len(), 1, "frame {} should accept the disc brake", frame.id);
    }
}
