// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Diagram element search.
//!
//! The panel owns the search bar view state and emits actions; the matcher is what a host runs
//! when it receives the panel's `search` action.

pub mod matcher;
pub mod panel;
pub mod path;

#[cfg(test)]
mod tests;

pub use matcher::{search_elements, SearchCandidate, SearchRequest, SearchResults};
pub use panel::{Navigation, SearchPanel, SearchResult, SearchStatus};
pub use path::{describe_element, ElementKind};
