//! Catalog entities: frames, parts, and the compatibility vocabulary.
//!
//! These types mirror the static catalog document loaded at startup. They are
//! plain data; indexing and filtering live in the catalog feature slice.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// The closed set of part categories a build can hold, in display order.
///
/// Declaration order is load-bearing: `Ord` and the `EnumIter` sequence drive
/// the ordering of summary rows and the CSV export.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PartCategory {
    Fork,
    Wheels,
    Drivetrain,
    Brakes,
    Handlebars,
    Stem,
    Seatpost,
    Saddle,
    Grips,
    Pedals,
    Tires,
}

impl PartCategory {
    /// Capitalized label used for summary rows and the CSV export.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fork => "Fork",
            Self::Wheels => "Wheels",
            Self::Drivetrain => "Drivetrain",
            Self::Brakes => "Brakes",
            Self::Handlebars => "Handlebars",
            Self::Stem => "Stem",
            Self::Seatpost => "Seatpost",
            Self::Saddle => "Saddle",
            Self::Grips => "Grips",
            Self::Pedals => "Pedals",
            Self::Tires => "Tires",
        }
    }
}

/// The fixed compatibility attributes a frame declares, one tag each.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrameCompatibility {
    pub fork_type: String,
    pub wheel_size: String,
    pub brake_type: String,
}

impl FrameCompatibility {
    /// The attribute values as a fixed-size view, in declaration order.
    #[must_use]
    pub fn values(&self) -> [&str; 3] {
        [&self.fork_type, &self.wheel_size, &self.brake_type]
    }
}

/// A bicycle frame: the structural base every other selection hangs off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FrameDefinition {
    pub id: String,
    pub name: String,
    /// Display label such as "Enduro" or "Cross Country".
    pub category: String,
    pub base_price: u32,
    #[serde(default)]
    pub description: String,
    /// Declared color names; the first one becomes the default on selection.
    pub colors: Vec<String>,
    pub compatibility: FrameCompatibility,
}

impl FrameDefinition {
    /// The default color applied when this frame is selected.
    #[must_use]
    pub fn default_color(&self) -> &str {
        self.colors.first().map_or("", String::as_str)
    }

    /// Whether `color` is one of the declared colors.
    #[must_use]
    pub fn declares_color(&self, color: &str) -> bool {
        self.colors.iter().any(|c| c == color)
    }
}

/// A marketplace a part can be bought from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarketplaceLink {
    pub name: String,
    pub url: String,
}

/// An attachable component, tagged with the frame attribute values it pairs with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PartDefinition {
    pub id: String,
    pub name: String,
    pub category: PartCategory,
    pub price: u32,
    /// Compatibility tags; one match against a frame attribute is enough.
    pub compatibility: Vec<String>,
    #[serde(default)]
    pub marketplace_links: Vec<MarketplaceLink>,
}

impl PartDefinition {
    /// A part fits a frame when the tag sets intersect.
    #[must_use]
    pub fn fits(&self, frame: &FrameDefinition) -> bool {
        let values = frame.compatibility.values();
        self.compatibility.iter().any(|tag| values.contains(&tag.as_str()))
    }
}
