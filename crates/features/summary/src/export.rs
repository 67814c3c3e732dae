//! Flat tabular export of a finished build.
//!
//! The format is the one external artifact that must stay bit-exact:
//! comma-delimited columns {Component, Name, Price, Marketplace Links}, one
//! row per selected component (frame first, then parts in category display
//! order), and a trailing total row. The links field is always quoted since
//! joined links contain the delimiter.

use crate::error::SummaryError;
use std::fmt::Write as _;
use vhub_builder::Build;
use vhub_domain::constants::CURRENCY_SYMBOL;

const CSV_HEADER: &str = "Component,Name,Price,Marketplace Links";

/// Renders the build as CSV.
///
/// # Errors
/// Returns [`SummaryError::EmptyBuild`] when no frame is selected.
pub fn render_csv(build: &Build) -> Result<String, SummaryError> {
    let Some(frame) = build.frame() else {
        return Err(SummaryError::EmptyBuild {
            message: "no frame selected".into(),
            context: None,
        });
    };

    let mut csv = String::new();
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    let _ = writeln!(csv, "Frame,{},{CURRENCY_SYMBOL}{},", frame.name, frame.base_price);

    for (category, part) in build.selected_parts() {
        let links = part
            .marketplace_links
            .iter()
            .map(|link| format!("{}: {}", link.name, link.url))
            .collect::<Vec<_>>()
            .join(" | ");
        let _ = writeln!(
            csv,
            "{},{},{CURRENCY_SYMBOL}{},\"{links}\"",
            category.label(),
            part.name,
            part.price
        );
    }

    let _ = writeln!(csv, "Total,,{CURRENCY_SYMBOL}{},", build.total_price());

    Ok(csv)
}

/// Suggested download filename: the frame name with whitespace runs replaced
/// by underscores, suffixed `_build.csv`.
///
/// # Errors
/// Returns [`SummaryError::EmptyBuild`] when no frame is selected.
pub fn export_file_name(build: &Build) -> Result<String, SummaryError> {
    let Some(frame) = build.frame() else {
        return Err(SummaryError::EmptyBuild {
            message: "no frame selected".into(),
            context: None,
        });
    };

    let mut name = String::with_capacity(frame.name.len() + 10);
    let mut in_whitespace = false;
    for ch in frame.name.chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                name.push('_');
            }
            in_whitespace = true;
        } else {
            name.push(ch);
            in_whitespace = false;
        }
    }
    name.push_str("_build.csv");
    Ok(name)
}
