//! The configuration store: one [`Build`] per session.
//!
//! A build holds at most one frame, one color, and at most one part per
//! category. All mutation goes through the explicit operations below; the
//! derived total price is a pure function of the current state.

use crate::error::BuildError;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use vhub_domain::catalog::{FrameDefinition, PartCategory, PartDefinition};

/// The full in-progress selection (frame, color, parts) for one build session.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    frame: Option<Arc<FrameDefinition>>,
    /// One of the frame's declared colors, or empty while no frame is selected.
    frame_color: String,
    /// Selections keyed by category; `BTreeMap` keeps display order.
    parts: BTreeMap<PartCategory, Arc<PartDefinition>>,
}

impl Build {
    /// Replaces the selected frame.
    ///
    /// The color snaps to the frame's first declared color and every part
    /// selection is cleared: parts chosen for one frame are not guaranteed
    /// compatible with another.
    pub fn set_frame(&mut self, frame: Arc<FrameDefinition>) {
        self.frame_color = frame.default_color().to_owned();
        self.frame = Some(frame);
        self.parts.clear();
    }

    /// Replaces the frame color.
    ///
    /// # Errors
    /// Returns [`BuildError::NoFrame`] when no frame is selected and
    /// [`BuildError::UnknownColor`] when the frame does not declare `color`.
    pub fn set_color(&mut self, color: impl Into<String>) -> Result<(), BuildError> {
        let color = color.into();
        let Some(frame) = &self.frame else {
            return Err(BuildError::NoFrame {
                message: format!("Cannot pick color '{color}'").into(),
                context: None,
            });
        };
        if !frame.declares_color(&color) {
            return Err(BuildError::UnknownColor {
                message: format!("'{color}' is not declared by frame '{}'", frame.id).into(),
                context: None,
            });
        }
        self.frame_color = color;
        Ok(())
    }

    /// Sets or clears (`None`) the selection for a category.
    ///
    /// Frame compatibility is not re-checked here; callers are expected to
    /// offer only parts that passed the compatibility filter.
    ///
    /// # Errors
    /// Returns [`BuildError::CategoryMismatch`] when the part's own category
    /// disagrees with the targeted slot.
    pub fn set_part(
        &mut self,
        category: PartCategory,
        part: Option<Arc<PartDefinition>>,
    ) -> Result<(), BuildError> {
        match part {
            Some(part) => {
                if part.category != category {
                    return Err(BuildError::CategoryMismatch {
                        message: format!(
                            "Part '{}' belongs to '{}', not '{category}'",
                            part.id, part.category
                        )
                        .into(),
                        context: None,
                    });
                }
                self.parts.insert(category, part);
            }
            None => {
                self.parts.remove(&category);
            }
        }
        Ok(())
    }

    /// Restores the empty initial value.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Frame base price (0 when no frame) plus the sum of selected part prices.
    #[must_use]
    pub fn total_price(&self) -> u32 {
        let frame_price = self.frame.as_ref().map_or(0, |frame| frame.base_price);
        frame_price + self.parts.values().map(|part| part.price).sum::<u32>()
    }

    #[must_use]
    pub const fn frame(&self) -> Option<&Arc<FrameDefinition>> {
        self.frame.as_ref()
    }

    #[must_use]
    pub fn frame_color(&self) -> &str {
        &self.frame_color
    }

    #[must_use]
    pub const fn parts(&self) -> &BTreeMap<PartCategory, Arc<PartDefinition>> {
        &self.parts
    }

    /// Selections in category display order.
    pub fn selected_parts(&self) -> impl Iterator<Item = (PartCategory, &Arc<PartDefinition>)> {
        self.parts.iter().map(|(category, part)| (*category, part))
    }

    /// Whether this build is observationally equal to a fresh one.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frame.is_none() && self.frame_color.is_empty() && self.parts.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vhub_domain::catalog::FrameCompatibility;

    fn frame(id: &str, base_price: u32, colors: &[&str]) -> Arc<FrameDefinition> {
        Arc::new(FrameDefinition {
            id: id.to_owned(),
            name: id.to_owned(),
            category: "Trail".to_owned(),
            base_price,
            description: String::new(),
            colors: colors.iter().map(|&c| c.to_owned()).collect(),
            compatibility: FrameCompatibility {
                fork_type: "140mm-travel".to_owned(),
                wheel_size: "29-inch".to_owned(),
                brake_type: "disc".to_owned(),
            },
        })
    }

    fn part(id: &str, category: PartCategory, price: u32) -> Arc<PartDefinition> {
        Arc::new(PartDefinition {
            id: id.to_owned(),
            name: id.to_owned(),
            category,
            price,
            compatibility: vec!["140mm-travel".to_owned()],
            marketplace_links: Vec::new(),
        })
    }

    #[test]
    fn fresh_build_is_empty_and_free() {
        let build = Build::default();
        assert!(build.is_empty());
        assert_eq!(build.total_price(), 0);
        assert_eq!(build.frame_color(), "");
    }

    #[test]
    fn set_frame_applies_first_color() {
        let mut build = Build::default();
        build.set_frame(frame("trail", 1899, &["stealth-black", "sky-blue"]));
        assert_eq!(build.frame_color(), "stealth-black");
        assert_eq!(build.total_price(), 1899);
    }

    #[test]
    fn set_frame_clears_parts() {
        let mut build = Build::default();
        build.set_frame(frame("trail", 1899, &["stealth-black"]));
        build.set_part(PartCategory::Fork, Some(part("pike", PartCategory::Fork, 899))).unwrap();
        build
            .set_part(PartCategory::Brakes, Some(part("xt", PartCategory::Brakes, 299)))
            .unwrap();
        assert_eq!(build.total_price(), 1899 + 899 + 299);

        build.set_frame(frame("enduro", 2299, &["matte-black"]));
        assert!(build.parts().is_empty());
        assert_eq!(build.total_price(), 2299);
    }

    #[test]
    fn set_color_validates_against_frame() {
        let mut build = Build::default();
        assert!(matches!(build.set_color("red"), Err(BuildError::NoFrame { .. })));

        build.set_frame(frame("xc", 899, &["silver", "red"]));
        build.set_color("red").unwrap();
        assert_eq!(build.frame_color(), "red");

        let err = build.set_color("chartreuse").unwrap_err();
        assert!(matches!(err, BuildError::UnknownColor { .. }));
        assert_eq!(build.frame_color(), "red", "rejected color must not stick");
    }

    #[test]
    fn set_part_replaces_and_clears() {
        let mut build = Build::default();
        build.set_frame(frame("trail", 1899, &["stealth-black"]));

        build.set_part(PartCategory::Fork, Some(part("pike", PartCategory::Fork, 899))).unwrap();
        build.set_part(PartCategory::Fork, Some(part("fox", PartCategory::Fork, 1299))).unwrap();
        assert_eq!(build.parts().len(), 1, "one selection per category");
        assert_eq!(build.total_price(), 1899 + 1299);

        build.set_part(PartCategory::Fork, None).unwrap();
        assert_eq!(build.total_price(), 1899);
        // Clearing an empty slot is a no-op, not an error.
        build.set_part(PartCategory::Fork, None).unwrap();
    }

    #[test]
    fn set_part_rejects_wrong_slot() {
        let mut build = Build::default();
        let err = build
            .set_part(PartCategory::Fork, Some(part("xt", PartCategory::Brakes, 299)))
            .unwrap_err();
        assert!(matches!(err, BuildError::CategoryMismatch { .. }));
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut build = Build::default();
        build.set_frame(frame("trail", 1899, &["stealth-black"]));
        build.set_part(PartCategory::Fork, Some(part("pike", PartCategory::Fork, 899))).unwrap();

        build.reset();
        assert!(build.is_empty());
        assert_eq!(build.total_price(), 0);
    }

    #[test]
    fn selected_parts_iterate_in_display_order() {
        let mut build = Build::default();
        build.set_frame(frame("trail", 1899, &["stealth-black"]));
        build.set_part(PartCategory::Tires, Some(part("t", PartCategory::Tires, 1))).unwrap();
        build.set_part(PartCategory::Fork, Some(part("f", PartCategory::Fork, 2))).unwrap();
        build.set_part(PartCategory::Saddle, Some(part("s", PartCategory::Saddle, 3))).unwrap();

        let order: Vec<PartCategory> =
            build.selected_parts().map(|(category, _)| category).collect();
        assert_eq!(order, [PartCategory::Fork, PartCategory::Saddle, PartCategory::Tires]);
    }
}
