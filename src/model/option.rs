// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::ids::OptionId;

/// Grid-snapped range values are rounded to nine fractional digits.
const SNAP_PRECISION: f64 = 1e9;

/// Live value of a render option.
///
/// Serialized untagged, so a persisted blob is a flat JSON object of booleans, numbers and
/// strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl OptionValue {
    /// Converts a raw JSON value. `null`, arrays and objects are not option values.
    pub fn from_json(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(value) => Some(Self::Bool(*value)),
            Value::Number(number) => number.as_f64().map(Self::Number),
            Value::String(text) => Some(Self::Text(text.clone())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Bool(value) => Value::Bool(*value),
            Self::Number(number) => serde_json::Number::from_f64(*number)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Text(text) => Value::String(text.clone()),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "boolean",
            Self::Number(_) => "number",
            Self::Text(_) => "string",
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Number(number) => write!(f, "{number}"),
            Self::Text(text) => write!(f, "{text:?}"),
        }
    }
}

impl From<bool> for OptionValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for OptionValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// Discriminant of an [`OptionKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum OptionType {
    Check,
    Range,
    Choice,
    Category,
}

impl OptionType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Check => "check",
            Self::Range => "range",
            Self::Choice => "choice",
            Self::Category => "category",
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptionTypeError {
    value: String,
}

impl fmt::Display for ParseOptionTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown option type: {:?}", self.value)
    }
}

impl std::error::Error for ParseOptionTypeError {}

impl FromStr for OptionType {
    type Err = ParseOptionTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "check" => Ok(Self::Check),
            "range" => Ok(Self::Range),
            "choice" => Ok(Self::Choice),
            "category" => Ok(Self::Category),
            _ => Err(ParseOptionTypeError {
                value: s.to_owned(),
            }),
        }
    }
}

/// Bounds and step of a RANGE option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RangeSpec {
    pub fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    /// Snaps `value` onto the grid `anchor + k * step`, staying inside `[min, max]`.
    ///
    /// Values already on the grid (within float noise) are returned unchanged.
    fn snap(&self, anchor: f64, value: f64) -> f64 {
        if self.step <= 0.0 || !self.step.is_finite() {
            return value;
        }

        let steps = ((value - anchor) / self.step).round();
        let mut snapped = anchor + steps * self.step;
        if (snapped - value).abs() <= self.step * 1e-6 {
            return value;
        }

        if snapped > self.max {
            snapped -= self.step;
        } else if snapped < self.min {
            snapped += self.step;
        }
        let snapped = (snapped * SNAP_PRECISION).round() / SNAP_PRECISION;
        snapped.clamp(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionKind {
    /// Boolean toggle.
    Check,
    /// Bounded number with step.
    Range(RangeSpec),
    /// One of a fixed, ordered set of values.
    Choice(Vec<String>),
    /// Grouping marker; carries a boolean but has no effect of its own.
    Category,
}

impl OptionKind {
    pub fn option_type(&self) -> OptionType {
        match self {
            Self::Check => OptionType::Check,
            Self::Range(_) => OptionType::Range,
            Self::Choice(_) => OptionType::Choice,
            Self::Category => OptionType::Category,
        }
    }

    pub fn range(&self) -> Option<&RangeSpec> {
        match self {
            Self::Range(range) => Some(range),
            _ => None,
        }
    }

    pub fn choices(&self) -> Option<&[String]> {
        match self {
            Self::Choice(values) => Some(values),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum OptionValueError {
    TypeMismatch {
        expected: OptionType,
        found: &'static str,
    },
    NotFinite {
        value: f64,
    },
    OutOfRange {
        value: f64,
        min: f64,
        max: f64,
    },
    UnknownChoice {
        value: String,
        choices: Vec<String>,
    },
    Unsupported {
        value: Value,
    },
}

impl fmt::Display for OptionValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected a value for a {expected} option, found {found}")
            }
            Self::NotFinite { value } => write!(f, "range value must be finite, found {value}"),
            Self::OutOfRange { value, min, max } => {
                write!(f, "value {value} is outside of the range [{min}, {max}]")
            }
            Self::UnknownChoice { value, choices } => {
                write!(f, "{value:?} is not one of {choices:?}")
            }
            Self::Unsupported { value } => write!(f, "{value} is not an option value"),
        }
    }
}

impl std::error::Error for OptionValueError {}

/// Static description of a render option.
///
/// Descriptors are the registry's configuration: they name, type and bound an option and act
/// as its factory through [`OptionDescriptor::instantiate`].
#[derive(Debug, Clone, PartialEq)]
pub struct OptionDescriptor {
    id: OptionId,
    name: String,
    kind: OptionKind,
    initial_value: OptionValue,
    default: Option<OptionValue>,
    render_category: Option<OptionId>,
    description: Option<String>,
    debug: bool,
}

impl OptionDescriptor {
    fn new(id: OptionId, name: impl Into<String>, kind: OptionKind, initial: OptionValue) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            initial_value: initial,
            default: None,
            render_category: None,
            description: None,
            debug: false,
        }
    }

    pub fn check(id: OptionId, name: impl Into<String>, initial: bool) -> Self {
        Self::new(id, name, OptionKind::Check, OptionValue::Bool(initial))
    }

    pub fn range(id: OptionId, name: impl Into<String>, range: RangeSpec, initial: f64) -> Self {
        Self::new(id, name, OptionKind::Range(range), OptionValue::Number(initial))
    }

    pub fn choice<I, S>(id: OptionId, name: impl Into<String>, choices: I, initial: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let choices = choices.into_iter().map(Into::into).collect();
        Self::new(
            id,
            name,
            OptionKind::Choice(choices),
            OptionValue::Text(initial.to_owned()),
        )
    }

    /// Categories carry `true` so hosts can use them as expand/collapse state.
    pub fn category(id: OptionId, name: impl Into<String>) -> Self {
        Self::new(id, name, OptionKind::Category, OptionValue::Bool(true))
    }

    /// Static default returned by `get_value_or_default` when the option is not registered.
    pub fn with_default(mut self, default: impl Into<OptionValue>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn in_category(mut self, category: OptionId) -> Self {
        self.render_category = Some(category);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn debug_only(mut self) -> Self {
        self.debug = true;
        self
    }

    pub fn id(&self) -> &OptionId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &OptionKind {
        &self.kind
    }

    pub fn option_type(&self) -> OptionType {
        self.kind.option_type()
    }

    pub fn initial_value(&self) -> &OptionValue {
        &self.initial_value
    }

    pub fn default_value(&self) -> Option<&OptionValue> {
        self.default.as_ref()
    }

    pub fn render_category(&self) -> Option<&OptionId> {
        self.render_category.as_ref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_debug(&self) -> bool {
        self.debug
    }

    /// Builds a fresh live option whose current value is the initial value.
    pub fn instantiate(self: Arc<Self>) -> RenderOption {
        RenderOption {
            current_value: self.initial_value.clone(),
            descriptor: self,
        }
    }

    /// Checks `value` against this option's type, bounds and choices.
    ///
    /// Range values are snapped to the step grid anchored at the initial value.
    pub fn validate(&self, value: OptionValue) -> Result<OptionValue, OptionValueError> {
        let expected = self.option_type();
        match (&self.kind, value) {
            (OptionKind::Check | OptionKind::Category, OptionValue::Bool(value)) => {
                Ok(OptionValue::Bool(value))
            }
            (OptionKind::Range(range), OptionValue::Number(number)) => {
                if !number.is_finite() {
                    return Err(OptionValueError::NotFinite { value: number });
                }
                if !range.contains(number) {
                    return Err(OptionValueError::OutOfRange {
                        value: number,
                        min: range.min,
                        max: range.max,
                    });
                }
                let anchor = self.initial_value.as_f64().unwrap_or(range.min);
                Ok(OptionValue::Number(range.snap(anchor, number)))
            }
            (OptionKind::Choice(choices), OptionValue::Text(text)) => {
                if choices.iter().any(|choice| *choice == text) {
                    Ok(OptionValue::Text(text))
                } else {
                    Err(OptionValueError::UnknownChoice {
                        value: text,
                        choices: choices.clone(),
                    })
                }
            }
            (_, value) => Err(OptionValueError::TypeMismatch {
                expected,
                found: value.type_name(),
            }),
        }
    }

    /// Like [`OptionDescriptor::validate`], starting from raw JSON.
    pub fn validate_json(&self, value: &Value) -> Result<OptionValue, OptionValueError> {
        let Some(option_value) = OptionValue::from_json(value) else {
            return Err(OptionValueError::Unsupported {
                value: value.clone(),
            });
        };
        self.validate(option_value)
    }
}

/// A registered option: its descriptor plus the live value.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOption {
    descriptor: Arc<OptionDescriptor>,
    current_value: OptionValue,
}

impl RenderOption {
    pub fn descriptor(&self) -> &OptionDescriptor {
        &self.descriptor
    }

    pub fn id(&self) -> &OptionId {
        self.descriptor.id()
    }

    pub fn name(&self) -> &str {
        self.descriptor.name()
    }

    pub fn option_type(&self) -> OptionType {
        self.descriptor.option_type()
    }

    pub fn initial_value(&self) -> &OptionValue {
        self.descriptor.initial_value()
    }

    pub fn current_value(&self) -> &OptionValue {
        &self.current_value
    }

    pub fn is_modified(&self) -> bool {
        self.current_value != *self.descriptor.initial_value()
    }

    pub(crate) fn set_current_value(&mut self, value: OptionValue) {
        self.current_value = value;
    }

    pub(crate) fn reset(&mut self) {
        self.current_value = self.descriptor.initial_value().clone();
    }

    pub fn summary(&self) -> OptionSummary {
        let descriptor = self.descriptor();
        let range = descriptor.kind().range();
        OptionSummary {
            id: descriptor.id().to_string(),
            name: descriptor.name().to_owned(),
            option_type: descriptor.option_type(),
            initial_value: descriptor.initial_value().clone(),
            current_value: self.current_value.clone(),
            min: range.map(|range| range.min),
            max: range.map(|range| range.max),
            step: range.map(|range| range.step),
            choices: descriptor.kind().choices().map(<[String]>::to_vec),
            render_category: descriptor.render_category().map(ToString::to_string),
            description: descriptor.description().map(ToOwned::to_owned),
            debug: descriptor.is_debug(),
        }
    }
}

/// Serializable snapshot of a registered option, used by the CLI and host integrations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct OptionSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub option_type: OptionType,
    pub initial_value: OptionValue,
    pub current_value: OptionValue,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub render_category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub debug: bool,
}
