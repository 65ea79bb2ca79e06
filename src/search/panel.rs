// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use super::matcher::SearchResults;
use super::path::describe_element;
use crate::action::{Action, SearchBarVisibility};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    Next,
    Previous,
    First,
    Last,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub element_id: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchStatus {
    /// No search performed since the panel was last reset or closed.
    Idle,
    Error(String),
    NoResults,
    Results {
        selected: Option<usize>,
        total: usize,
    },
}

impl fmt::Display for SearchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => Ok(()),
            Self::Error(message) => f.write_str(message),
            Self::NoResults => f.write_str("No results found"),
            Self::Results { selected, total } => {
                let position = selected.map_or(0, |index| index + 1);
                write!(f, "Result {position} of {total}")
            }
        }
    }
}

/// View state of the search bar.
///
/// Mutators return the actions the host has to dispatch. `rev` changes whenever something the
/// panel displays changed, so renderers can skip redraws.
#[derive(Debug, Clone, Default)]
pub struct SearchPanel {
    visible: bool,
    query: String,
    tag_query: String,
    tag_input_visible: bool,
    regex_mode: bool,
    error: Option<String>,
    results: Vec<SearchResult>,
    selected: Option<usize>,
    searched: bool,
    used_arrow_keys: bool,
    rev: u64,
}

impl SearchPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn tag_query(&self) -> &str {
        &self.tag_query
    }

    pub fn is_tag_input_visible(&self) -> bool {
        self.tag_input_visible
    }

    pub fn is_regex(&self) -> bool {
        self.regex_mode
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    pub fn has_searched(&self) -> bool {
        self.searched
    }

    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected_result(&self) -> Option<&SearchResult> {
        self.selected.and_then(|index| self.results.get(index))
    }

    /// Readable path of the selected result.
    pub fn selected_path(&self) -> Option<String> {
        self.selected_result()
            .map(|result| describe_element(&result.element_id))
    }

    pub fn show(&mut self) {
        if !self.visible {
            self.visible = true;
            self.touch();
        }
    }

    /// Hides the panel together with the tag input and the error.
    pub fn hide(&mut self) -> Vec<Action> {
        self.visible = false;
        self.tag_input_visible = false;
        self.tag_query.clear();
        self.error = None;
        self.touch();
        vec![Action::ClearHighlights]
    }

    /// Hides the panel and asks the host to hide the search bar.
    pub fn close(&mut self) -> Vec<Action> {
        let mut actions = self.hide();
        self.searched = false;
        actions.push(Action::ToggleSearchBar {
            visibility: SearchBarVisibility::Hide,
        });
        actions
    }

    pub fn set_visibility(&mut self, visibility: SearchBarVisibility) -> Vec<Action> {
        match visibility {
            SearchBarVisibility::Show => {
                self.show();
                Vec::new()
            }
            SearchBarVisibility::Hide => self.hide(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) -> Vec<Action> {
        self.query = query.into();
        self.input_changed()
    }

    /// Ignored by searches while the tag input is hidden.
    pub fn set_tag_query(&mut self, tag_query: impl Into<String>) -> Vec<Action> {
        self.tag_query = tag_query.into();
        self.input_changed()
    }

    /// Hiding the tag input drops its content and refreshes the search.
    pub fn toggle_tag_input(&mut self) -> Vec<Action> {
        self.tag_input_visible = !self.tag_input_visible;
        if self.tag_input_visible {
            self.touch();
            return Vec::new();
        }

        self.tag_query.clear();
        if self.query.is_empty() {
            self.reset()
        } else {
            self.search()
        }
    }

    /// Applies to the next search.
    pub fn toggle_regex(&mut self) {
        self.regex_mode = !self.regex_mode;
        self.touch();
    }

    /// Stores a result set delivered by the host and clears the selection.
    ///
    /// `texts[i]` belongs to `element_ids[i]`. Elements without a text show their id; texts
    /// without an element are dropped.
    pub fn set_results(&mut self, element_ids: Vec<String>, texts: Vec<String>) {
        if texts.len() > element_ids.len() {
            log::warn!(
                "dropping {} search result text(s) without an element",
                texts.len() - element_ids.len()
            );
        }
        let mut texts = texts.into_iter();
        self.results = element_ids
            .into_iter()
            .map(|element_id| {
                let text = texts.next().unwrap_or_else(|| element_id.clone());
                SearchResult { element_id, text }
            })
            .collect();
        self.selected = None;
        self.used_arrow_keys = false;
        self.touch();
    }

    /// Routes a matcher outcome: results are stored, regex errors are shown.
    pub fn apply_outcome(&mut self, outcome: Result<SearchResults, regex::Error>) {
        match outcome {
            Ok(results) => self.set_results(results.element_ids, results.texts),
            Err(err) => {
                self.set_results(Vec::new(), Vec::new());
                self.set_error(err.to_string());
            }
        }
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.touch();
    }

    pub fn clear_error(&mut self) {
        if self.error.take().is_some() {
            self.touch();
        }
    }

    /// Moves the selection with wrap-around; `false` when there is nothing to select.
    pub fn navigate(&mut self, navigation: Navigation) -> bool {
        let len = self.results.len();
        if len == 0 {
            return false;
        }

        self.selected = Some(match (navigation, self.selected) {
            (Navigation::Next, Some(index)) => (index + 1) % len,
            (Navigation::Next, None) | (Navigation::First, _) => 0,
            (Navigation::Previous, Some(0) | None) | (Navigation::Last, _) => len - 1,
            (Navigation::Previous, Some(index)) => index - 1,
        });
        self.used_arrow_keys = true;
        self.touch();
        true
    }

    /// Enter: pans to the result picked with the arrow keys, or steps to the next result and
    /// pans there.
    pub fn activate(&mut self) -> Vec<Action> {
        let len = self.results.len();
        if len == 0 {
            return Vec::new();
        }

        if self.used_arrow_keys {
            self.used_arrow_keys = false;
        } else {
            self.selected = Some(self.selected.map_or(0, |index| (index + 1) % len));
            self.touch();
        }
        self.pan_to_selected()
    }

    /// Click on result `index`.
    pub fn select(&mut self, index: usize) -> Vec<Action> {
        if index >= self.results.len() {
            return Vec::new();
        }
        self.selected = Some(index);
        self.used_arrow_keys = false;
        self.touch();
        self.pan_to_selected()
    }

    pub fn status(&self) -> SearchStatus {
        if !self.searched {
            return SearchStatus::Idle;
        }
        if let Some(error) = &self.error {
            return SearchStatus::Error(error.clone());
        }
        if self.results.is_empty() {
            return SearchStatus::NoResults;
        }
        SearchStatus::Results {
            selected: self.selected,
            total: self.results.len(),
        }
    }

    fn effective_tag_query(&self) -> &str {
        if self.tag_input_visible {
            &self.tag_query
        } else {
            ""
        }
    }

    fn input_changed(&mut self) -> Vec<Action> {
        if self.query.is_empty() && self.effective_tag_query().is_empty() {
            self.reset()
        } else {
            self.search()
        }
    }

    fn search(&mut self) -> Vec<Action> {
        self.error = None;
        self.searched = true;
        self.touch();
        vec![
            Action::ClearHighlights,
            Action::Search {
                query: self.query.clone(),
                tag_query: self.effective_tag_query().to_owned(),
                regex: self.regex_mode,
            },
        ]
    }

    fn reset(&mut self) -> Vec<Action> {
        self.query.clear();
        self.tag_query.clear();
        self.results.clear();
        self.selected = None;
        self.searched = false;
        self.used_arrow_keys = false;
        self.touch();
        vec![Action::ClearHighlights]
    }

    fn pan_to_selected(&self) -> Vec<Action> {
        self.selected_result()
            .map(|result| vec![Action::fit_element(result.element_id.clone())])
            .unwrap_or_default()
    }

    fn touch(&mut self) {
        self.rev = self.rev.wrapping_add(1);
    }
}
