// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Built-in render options.
//!
//! The catalogue is plain configuration: `builtin_descriptors` returns the list a host passes to
//! `OptionRegistry::new`. Nothing in the registry depends on these specific options.

use std::fmt;
use std::str::FromStr;

use super::ids::OptionId;
use super::option::{OptionDescriptor, RangeSpec};

pub const DEBUG_OPTIONS: &str = "debug-options";
pub const RESIZE_TO_FIT: &str = "fit";
pub const PIN_SIDEBAR: &str = "pin-sidebar";
pub const ANIMATE_GO_TO_BOOKMARK: &str = "animate-go-to-bookmark";
pub const APPEARANCE: &str = "appearance";
pub const SHOW_CONSTRAINTS: &str = "show-constraints";
pub const SHADOWS: &str = "paper-shadows";
pub const SMART_ZOOM: &str = "smart-zoom";
pub const USE_SMART_ZOOM: &str = "use-smart-zoom";
pub const FULL_DETAIL_RELATIVE_THRESHOLD: &str = "full-detail-relative-threshold";
pub const FULL_DETAIL_SCALE_THRESHOLD: &str = "full-detail-scale-threshold";
pub const SIMPLIFY_SMALL_TEXT: &str = "simplify-small-text";
pub const TEXT_SIMPLIFICATION_THRESHOLD: &str = "text-simplification-threshold";
pub const TITLE_SCALING_FACTOR: &str = "title-scaling-factor";
pub const USE_LINE_SCALING: &str = "use-minimum-line-scale";
pub const MINIMUM_LINE_SCALE: &str = "minimum-line-scale";

fn builtin_id(value: &'static str) -> OptionId {
    OptionId::new(value).expect("hard-coded option id is valid")
}

/// How node shadows are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShadowMode {
    /// A real SVG shadow.
    PaperMode,
    /// The node shape drawn several times with lower opacity behind the node.
    KielerStyle,
}

impl ShadowMode {
    pub const ALL: [ShadowMode; 2] = [ShadowMode::PaperMode, ShadowMode::KielerStyle];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaperMode => "Paper Mode",
            Self::KielerStyle => "KIELER Style",
        }
    }
}

impl fmt::Display for ShadowMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseShadowModeError {
    value: String,
}

impl fmt::Display for ParseShadowModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown shadow mode: {:?}", self.value)
    }
}

impl std::error::Error for ParseShadowModeError {}

impl FromStr for ShadowMode {
    type Err = ParseShadowModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseShadowModeError {
                value: s.to_owned(),
            })
    }
}

pub fn debug_options() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(DEBUG_OPTIONS), "Debug Options", false)
        .with_description("Whether debug options should be shown.")
}

/// Shares its id with the `fit` action so hosts can key both on the same string.
pub fn resize_to_fit() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(RESIZE_TO_FIT), "Resize To Fit on Refresh", true)
        .with_default(true)
        .with_description("Always resize to fit after diagram refresh.")
        .debug_only()
}

pub fn pin_sidebar() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(PIN_SIDEBAR), "Pin Sidebar", true)
        .with_default(true)
        .debug_only()
}

pub fn animate_go_to_bookmark() -> OptionDescriptor {
    OptionDescriptor::check(
        builtin_id(ANIMATE_GO_TO_BOOKMARK),
        "Animate Go To Bookmark",
        true,
    )
    .with_default(true)
}

pub fn appearance() -> OptionDescriptor {
    OptionDescriptor::category(builtin_id(APPEARANCE), "Appearance")
        .with_description("Appearance Category")
}

pub fn show_constraints() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(SHOW_CONSTRAINTS), "Show Constraint", false)
        .in_category(builtin_id(APPEARANCE))
        .with_description("Show marker for nodes that have interactive layout constraints set.")
}

pub fn shadows() -> OptionDescriptor {
    OptionDescriptor::choice(
        builtin_id(SHADOWS),
        "Shadow Mode",
        ShadowMode::ALL.map(ShadowMode::as_str),
        ShadowMode::KielerStyle.as_str(),
    )
    .with_default(ShadowMode::KielerStyle.as_str())
    .in_category(builtin_id(APPEARANCE))
    .with_description(
        "The style shadows should be drawn in, either the paper mode shadows (nice, but slow in \
         performance) or in default KIELER Style (fast, not as nice looking). KIELER Style draws \
         multiple shapes in form of the node behind the node. Paper Mode uses SVG shadows.",
    )
}

pub fn smart_zoom() -> OptionDescriptor {
    OptionDescriptor::category(builtin_id(SMART_ZOOM), "Smart Zoom")
        .in_category(builtin_id(APPEARANCE))
        .with_description("Smart Zoom Category")
        .debug_only()
}

pub fn use_smart_zoom() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(USE_SMART_ZOOM), "Smart Zoom", true)
        .with_default(true)
        .in_category(builtin_id(APPEARANCE))
        .with_description("Enables Smart Zoom")
}

pub fn full_detail_relative_threshold() -> OptionDescriptor {
    OptionDescriptor::range(
        builtin_id(FULL_DETAIL_RELATIVE_THRESHOLD),
        "Full Detail Relative Threshold",
        RangeSpec::new(0.01, 1.0, 0.01),
        0.15,
    )
    .with_default(0.15)
    .in_category(builtin_id(SMART_ZOOM))
    .with_description(
        "Shows all children of an element that uses at least the amount of the canvas. A value \
         of 0.2 means an element is shown if its parent has at least 0.2 the size (maximum of \
         width and height) of the canvas.",
    )
    .debug_only()
}

pub fn full_detail_scale_threshold() -> OptionDescriptor {
    OptionDescriptor::range(
        builtin_id(FULL_DETAIL_SCALE_THRESHOLD),
        "Full Detail Scale Threshold",
        RangeSpec::new(0.01, 1.0, 0.01),
        0.25,
    )
    .with_default(0.25)
    .in_category(builtin_id(SMART_ZOOM))
    .with_description(
        "Show an element if it can be rendered in at least the given amount of it original size. \
         A value of 0.25 means an element is shown if it can be drawn in a fourth of its original \
         height or width.",
    )
    .debug_only()
}

pub fn simplify_small_text() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(SIMPLIFY_SMALL_TEXT), "Simplify Small Text", true)
        .in_category(builtin_id(SMART_ZOOM))
        .with_description("Whether illegible text is simplified to colored rectangles.")
        .debug_only()
}

/// 3.3px is where font rendering itself would switch to a smaller representation.
pub fn text_simplification_threshold() -> OptionDescriptor {
    OptionDescriptor::range(
        builtin_id(TEXT_SIMPLIFICATION_THRESHOLD),
        "Text Simplification Threshold",
        RangeSpec::new(1.0, 10.0, 0.1),
        3.3,
    )
    .with_default(3.3)
    .in_category(builtin_id(SMART_ZOOM))
    .with_description(
        "The threshold font size to simplify text.\nIf set to 3 a text which is 3 or less pixel \
         high is simplified.",
    )
    .debug_only()
}

pub fn title_scaling_factor() -> OptionDescriptor {
    OptionDescriptor::range(
        builtin_id(TITLE_SCALING_FACTOR),
        "Title Scaling Factor",
        RangeSpec::new(0.5, 3.0, 0.01),
        1.0,
    )
    .with_default(1.0)
    .in_category(builtin_id(SMART_ZOOM))
    .with_description(
        "Factor to scale region titles compared to their original size. If set to 1 a region \
         title keeps its original size (if the space permits) regardless of the zoom level.",
    )
    .debug_only()
}

pub fn use_line_scaling() -> OptionDescriptor {
    OptionDescriptor::check(builtin_id(USE_LINE_SCALING), "Use Line Scaling", true)
        .in_category(builtin_id(SMART_ZOOM))
        .with_description(
            "Whether all borders and lines should be scaled to stay above a minimum threshold \
             value set by the corresponding 'Minimum Line Scale' option.",
        )
        .debug_only()
}

/// The static default (1.0) intentionally differs from the initial value (0.5).
pub fn minimum_line_scale() -> OptionDescriptor {
    OptionDescriptor::range(
        builtin_id(MINIMUM_LINE_SCALE),
        "Minimum Line Scale",
        RangeSpec::new(0.1, 3.0, 0.01),
        0.5,
    )
    .with_default(1.0)
    .in_category(builtin_id(SMART_ZOOM))
    .with_description(
        "The minimum line scale.\nIf set to 0.5 each line uses at least 0.5 times of its width \
         set by the synthesis.",
    )
    .debug_only()
}

/// All built-in options in registration order (categories precede their members).
pub fn builtin_descriptors() -> Vec<OptionDescriptor> {
    vec![
        debug_options(),
        resize_to_fit(),
        pin_sidebar(),
        animate_go_to_bookmark(),
        appearance(),
        show_constraints(),
        shadows(),
        smart_zoom(),
        use_smart_zoom(),
        full_detail_relative_threshold(),
        full_detail_scale_threshold(),
        simplify_small_text(),
        text_simplification_threshold(),
        title_scaling_factor(),
        use_line_scaling(),
        minimum_line_scale(),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{builtin_descriptors, ShadowMode, APPEARANCE, SMART_ZOOM};
    use crate::model::{OptionType, OptionValue};

    #[test]
    fn builtin_ids_are_unique() {
        let descriptors = builtin_descriptors();
        let ids = descriptors
            .iter()
            .map(|descriptor| descriptor.id().as_str())
            .collect::<HashSet<_>>();
        assert_eq!(ids.len(), descriptors.len());
        assert_eq!(descriptors.len(), 16);
    }

    #[test]
    fn builtin_initial_values_pass_their_own_validation() {
        for descriptor in builtin_descriptors() {
            let initial = descriptor.initial_value().clone();
            assert_eq!(
                descriptor.validate(initial.clone()),
                Ok(initial),
                "initial value of {} must validate",
                descriptor.id()
            );
        }
    }

    #[test]
    fn builtin_categories_precede_their_members() {
        let descriptors = builtin_descriptors();
        for (index, descriptor) in descriptors.iter().enumerate() {
            let Some(category) = descriptor.render_category() else {
                continue;
            };
            let category_index = descriptors
                .iter()
                .position(|candidate| candidate.id() == category)
                .expect("category is part of the catalogue");
            assert!(category_index < index, "{} listed before its category", descriptor.id());
            assert_eq!(descriptors[category_index].option_type(), OptionType::Category);
            assert!([APPEARANCE, SMART_ZOOM].contains(&category.as_str()));
        }
    }

    #[test]
    fn shadow_mode_round_trips_through_choice_text() {
        for mode in ShadowMode::ALL {
            assert_eq!(mode.as_str().parse::<ShadowMode>(), Ok(mode));
        }
        assert!("Neon".parse::<ShadowMode>().is_err());
        assert_eq!(
            super::shadows().initial_value(),
            &OptionValue::from(ShadowMode::KielerStyle.as_str())
        );
    }
}
