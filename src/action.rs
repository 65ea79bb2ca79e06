// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Action messages exchanged between the option registry, the search panel and the host.
//!
//! Actions are JSON objects discriminated by a `kind` field. Kinds this crate does not know
//! deserialize as [`ForeignAction`] so they can still be routed (and echoed back as the cause of
//! a model refresh).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::OptionValue;

/// Padding around an element the search panel pans to.
pub const FIT_PADDING: f64 = 20.0;
/// Maximum zoom applied when panning to a search result.
pub const FIT_MAX_ZOOM: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchBarVisibility {
    Show,
    Hide,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Action {
    SetRenderOption {
        id: String,
        value: Value,
    },
    ResetRenderOptions,
    #[serde(rename_all = "camelCase")]
    Search {
        query: String,
        #[serde(default)]
        tag_query: String,
        #[serde(default)]
        regex: bool,
    },
    ClearHighlights,
    ToggleSearchBar {
        visibility: SearchBarVisibility,
    },
    #[serde(rename_all = "camelCase")]
    Fit {
        element_ids: Vec<String>,
        animate: bool,
        padding: f64,
        max_zoom: f64,
    },
    UpdateModel {
        animate: bool,
        cause: Box<AnyAction>,
    },
}

impl Action {
    pub fn set_render_option(id: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self::SetRenderOption {
            id: id.into(),
            value: value.into().to_json(),
        }
    }

    /// Animated fit onto a single element, as issued when a search result is activated.
    pub fn fit_element(element_id: impl Into<String>) -> Self {
        Self::Fit {
            element_ids: vec![element_id.into()],
            animate: true,
            padding: FIT_PADDING,
            max_zoom: FIT_MAX_ZOOM,
        }
    }

    /// Non-animated model refresh caused by `cause`.
    pub fn refresh_model(cause: AnyAction) -> Self {
        Self::UpdateModel {
            animate: false,
            cause: Box::new(cause),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::SetRenderOption { .. } => "setRenderOption",
            Self::ResetRenderOptions => "resetRenderOptions",
            Self::Search { .. } => "search",
            Self::ClearHighlights => "clearHighlights",
            Self::ToggleSearchBar { .. } => "toggleSearchBar",
            Self::Fit { .. } => "fit",
            Self::UpdateModel { .. } => "updateModel",
        }
    }
}

/// An action of a kind this crate does not model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForeignAction {
    pub kind: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ForeignAction {
    pub fn new(kind: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            fields: Map::new(),
        }
    }
}

/// Any inbound action message.
///
/// Known kinds with malformed payloads fall through to `Foreign`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum AnyAction {
    Known(Action),
    Foreign(ForeignAction),
}

impl AnyAction {
    pub fn kind(&self) -> &str {
        match self {
            Self::Known(action) => action.kind(),
            Self::Foreign(action) => &action.kind,
        }
    }

    pub fn as_known(&self) -> Option<&Action> {
        match self {
            Self::Known(action) => Some(action),
            Self::Foreign(_) => None,
        }
    }
}

impl From<Action> for AnyAction {
    fn from(action: Action) -> Self {
        Self::Known(action)
    }
}

impl From<ForeignAction> for AnyAction {
    fn from(action: ForeignAction) -> Self {
        Self::Foreign(action)
    }
}
