// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use regex::{Regex, RegexBuilder};

use crate::action::Action;

/// A diagram element the host offers to the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchCandidate {
    pub element_id: String,
    /// Text shown for the element and matched against the main query.
    pub text: String,
    pub tags: Vec<String>,
}

impl SearchCandidate {
    pub fn new(element_id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            element_id: element_id.into(),
            text: text.into(),
            tags: Vec::new(),
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    /// Whitespace separated tag terms, each optionally prefixed with `#` or `$`.
    pub tag_query: String,
    pub regex: bool,
}

impl SearchRequest {
    pub fn from_action(action: &Action) -> Option<Self> {
        match action {
            Action::Search {
                query,
                tag_query,
                regex,
            } => Some(Self {
                query: query.clone(),
                tag_query: tag_query.clone(),
                regex: *regex,
            }),
            _ => None,
        }
    }

    fn tag_terms(&self) -> Vec<String> {
        self.tag_query
            .split_whitespace()
            .map(|term| term.trim_start_matches(['#', '$']))
            .filter(|term| !term.is_empty())
            .map(str::to_lowercase)
            .collect()
    }
}

/// Matches as pairwise lists: `texts[i]` is the display text of `element_ids[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub element_ids: Vec<String>,
    pub texts: Vec<String>,
}

impl SearchResults {
    pub fn len(&self) -> usize {
        self.element_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.element_ids.is_empty()
    }
}

enum TextMatcher {
    Any,
    Substring(String),
    Regex(Regex),
}

impl TextMatcher {
    fn new(request: &SearchRequest) -> Result<Self, regex::Error> {
        if request.query.is_empty() {
            return Ok(Self::Any);
        }
        if request.regex {
            let regex = RegexBuilder::new(&request.query)
                .case_insensitive(true)
                .build()?;
            return Ok(Self::Regex(regex));
        }
        Ok(Self::Substring(request.query.to_lowercase()))
    }

    fn is_match(&self, text: &str) -> bool {
        match self {
            Self::Any => true,
            Self::Substring(needle) => text.to_lowercase().contains(needle.as_str()),
            Self::Regex(regex) => regex.is_match(text),
        }
    }
}

/// Filters `candidates` by `request`, keeping candidate order.
///
/// An empty query matches every text, so a tag-only request filters by tags alone. A request
/// with neither a query nor tag terms matches nothing.
pub fn search_elements<'a, I>(
    candidates: I,
    request: &SearchRequest,
) -> Result<SearchResults, regex::Error>
where
    I: IntoIterator<Item = &'a SearchCandidate>,
{
    let terms = request.tag_terms();
    if request.query.is_empty() && terms.is_empty() {
        return Ok(SearchResults::default());
    }
    let matcher = TextMatcher::new(request)?;

    let mut results = SearchResults::default();
    for candidate in candidates {
        if !matcher.is_match(&candidate.text) || !has_all_tags(candidate, &terms) {
            continue;
        }
        results.element_ids.push(candidate.element_id.clone());
        results.texts.push(candidate.text.clone());
    }
    Ok(results)
}

fn has_all_tags(candidate: &SearchCandidate, terms: &[String]) -> bool {
    terms.iter().all(|term| {
        candidate
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(term.as_str()))
    })
}
