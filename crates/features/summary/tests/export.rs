use vhub_builder::Build;
use vhub_catalog::{Catalog, DEFAULT_CATALOG_JSON};
use vhub_domain::catalog::PartCategory;
use vhub_summary::{SummaryError, export_file_name, render_csv};

fn catalog() -> Catalog {
    Catalog::from_json(DEFAULT_CATALOG_JSON).expect("embedded catalog must load")
}

fn enduro_with_pike() -> Build {
    let catalog = catalog();
    let mut build = Build::default();
    build.set_frame(catalog.frame("enduro-carbon").expect("frame").clone());
    build
        .set_part(
            PartCategory::Fork,
            Some(catalog.part(PartCategory::Fork, "rockshox-pike").expect("part").clone()),
        )
        .expect("fork fits the fork slot");
    build
}

#[test]
fn csv_is_bit_exact_for_frame_plus_fork() {
    let build = enduro_with_pike();

    let expected = "Component,Name,Price,Marketplace Links\n\
                    Frame,Enduro Carbon Pro,£2299,\n\
                    Fork,RockShox Pike Ultimate,£899,\"Chain Reaction Cycles: https://chainreactioncycles.com | Wiggle: https://wiggle.com\"\n\
                    Total,,£3198,\n";
    assert_eq!(render_csv(&build).expect("render succeeds"), expected);
}

#[test]
fn csv_total_row_sums_frame_and_part() {
    // Frame 2299 + part 899 must show 3198 in the trailing total row.
    let build = enduro_with_pike();
    let csv = render_csv(&build).expect("render succeeds");
    let total_row = csv.lines().last().expect("has rows");
    assert_eq!(total_row, "Total,,£3198,");
}

#[test]
fn csv_orders_parts_by_category_declaration() {
    let catalog = catalog();
    let mut build = Build::default();
    build.set_frame(catalog.frame("enduro-carbon").expect("frame").clone());

    // Select in scrambled order; rows must come out fork, wheels, drivetrain, brakes.
    for (category, id) in [
        (PartCategory::Brakes, "shimano-xt-brakes"),
        (PartCategory::Fork, "fox-36"),
        (PartCategory::Drivetrain, "sram-gx-eagle"),
        (PartCategory::Wheels, "dt-swiss-wheels"),
    ] {
        build
            .set_part(category, Some(catalog.part(category, id).expect("part").clone()))
            .expect("slot matches");
    }

    let csv = render_csv(&build).expect("render succeeds");
    let components: Vec<&str> =
        csv.lines().skip(1).map(|line| line.split(',').next().expect("column")).collect();
    assert_eq!(components, ["Frame", "Fork", "Wheels", "Drivetrain", "Brakes", "Total"]);
}

#[test]
fn csv_requires_a_frame() {
    let err = render_csv(&Build::default()).unwrap_err();
    assert!(matches!(err, SummaryError::EmptyBuild { .. }));

    let err = export_file_name(&Build::default()).unwrap_err();
    assert!(matches!(err, SummaryError::EmptyBuild { .. }));
}

#[test]
fn file_name_replaces_whitespace_runs() {
    let build = enduro_with_pike();
    assert_eq!(export_file_name(&build).expect("file name"), "Enduro_Carbon_Pro_build.csv");
}

#[test]
fn frame_only_build_exports_frame_and_total() {
    let catalog = catalog();
    let mut build = Build::default();
    build.set_frame(catalog.frame("xc-aluminum").expect("frame").clone());

    let expected = "Component,Name,Price,Marketplace Links\n\
                    Frame,XC Aluminum Elite,£899,\n\
                    Total,,£899,\n";
    assert_eq!(render_csv(&build).expect("render succeeds"), expected);
}
