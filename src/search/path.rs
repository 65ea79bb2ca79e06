// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Readable paths for `$`-segmented element ids.
//!
//! An element id such as `$root$Nparser$$E0` lists the ids of the element and its ancestors,
//! each segment starting with a type letter. An empty segment marks the following one as
//! unnamed (generated id).

const SEPARATOR: &str = " > ";
const ROOT_SEGMENT: &str = "root";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Node,
    Edge,
    Port,
    Label,
}

impl ElementKind {
    pub fn from_prefix(prefix: char) -> Option<Self> {
        match prefix {
            'N' => Some(Self::Node),
            'E' => Some(Self::Edge),
            'P' => Some(Self::Port),
            'L' => Some(Self::Label),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Node => "\u{1f518}",
            Self::Edge => "\u{2796}",
            Self::Port => "\u{1f532}",
            Self::Label => "\u{1f3f7}\u{fe0f}",
        }
    }
}

/// Renders `id` as `icon name > icon name > ...`.
///
/// `root` and empty segments are skipped. Unnamed segments render as their icon only, and a
/// segment without a known type letter is kept verbatim.
pub fn describe_element(id: &str) -> String {
    let segments: Vec<&str> = id.split('$').collect();
    let mut parts = Vec::with_capacity(segments.len());

    for (index, segment) in segments.iter().enumerate() {
        if segment.is_empty() || *segment == ROOT_SEGMENT {
            continue;
        }
        let unnamed = index > 0 && segments[index - 1].is_empty();

        let mut chars = segment.chars();
        let kind = chars.next().and_then(ElementKind::from_prefix);
        let Some(kind) = kind else {
            parts.push((*segment).to_owned());
            continue;
        };
        if unnamed {
            parts.push(kind.icon().to_owned());
        } else {
            parts.push(format!("{} {}", kind.icon(), chars.as_str()));
        }
    }

    parts.join(SEPARATOR)
}
