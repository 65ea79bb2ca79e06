// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The render options registry.
//!
//! Owns one live [`RenderOption`] per id, applies option actions, overlays persisted values and
//! tells subscribers when values changed. Subscribers get "what changed", not the new values;
//! they re-read what they care about.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Value};

use crate::action::{Action, AnyAction};
use crate::model::catalogue::{self, DEBUG_OPTIONS};
use crate::model::{
    ListenerId, OptionDescriptor, OptionId, OptionType, OptionValue, OptionValueError,
    RenderOption,
};


pub type Listener = Box<dyn FnMut(&OptionsChanged) + Send + Sync>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeCause {
    Set,
    Reset,
    Restore,
}

/// A value that failed validation and was not applied.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedValue {
    pub id: OptionId,
    pub value: Value,
    pub error: OptionValueError,
}

impl fmt::Display for RejectedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rejected value {} for option {}: {}", self.value, self.id, self.error)
    }
}

/// Payload of a change notification.
#[derive(Debug, Clone, PartialEq)]
pub struct OptionsChanged {
    pub cause: ChangeCause,
    /// Ids whose current value was written, in application order.
    pub changed: Vec<OptionId>,
    pub rejected: Vec<RejectedValue>,
}

#[derive(Default)]
pub struct OptionRegistry {
    options: IndexMap<OptionId, RenderOption>,
    listeners: Vec<(ListenerId, Listener)>,
    next_listener_id: u64,
    rev: u64,
}

impl fmt::Debug for OptionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionRegistry")
            .field("options", &self.options)
            .field("listeners", &self.listeners.len())
            .field("rev", &self.rev)
            .finish()
    }
}

impl OptionRegistry {
    /// Registers `descriptors` in order.
    pub fn new<I, D>(descriptors: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<OptionDescriptor>>,
    {
        let mut registry = Self::default();
        registry.register_all(descriptors);
        registry
    }

    pub fn with_builtin_options() -> Self {
        Self::new(catalogue::builtin_descriptors())
    }

    /// Incremented once per notification.
    pub fn rev(&self) -> u64 {
        self.rev
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Stores a fresh instance of `descriptor`, replacing any option with the same id.
    ///
    /// A replaced option keeps its position but loses its current value.
    pub fn register(&mut self, descriptor: impl Into<Arc<OptionDescriptor>>) {
        let descriptor = descriptor.into();
        if let Some(category) = descriptor.render_category() {
            if !self.is_category(category.as_str()) {
                log::warn!(
                    "render option {} refers to unknown category {}",
                    descriptor.id(),
                    category
                );
            }
        }
        let id = descriptor.id().clone();
        self.options.insert(id, descriptor.instantiate());
    }

    pub fn register_all<I, D>(&mut self, descriptors: I)
    where
        I: IntoIterator<Item = D>,
        D: Into<Arc<OptionDescriptor>>,
    {
        for descriptor in descriptors {
            self.register(descriptor);
        }
    }

    /// Returns whether an option with the descriptor's id was present.
    pub fn unregister(&mut self, descriptor: &OptionDescriptor) -> bool {
        self.options.shift_remove(descriptor.id().as_str()).is_some()
    }

    /// Unregisters every descriptor; `true` only if all of them were present.
    ///
    /// Not transactional: present options are removed even when the result is `false`.
    pub fn unregister_all<'a, I>(&mut self, descriptors: I) -> bool
    where
        I: IntoIterator<Item = &'a OptionDescriptor>,
    {
        descriptors
            .into_iter()
            .fold(true, |all_removed, descriptor| self.unregister(descriptor) && all_removed)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.options.contains_key(id)
    }

    pub fn option(&self, id: &str) -> Option<&RenderOption> {
        self.options.get(id)
    }

    pub fn get_value(&self, descriptor: &OptionDescriptor) -> Option<&OptionValue> {
        self.value_of(descriptor.id().as_str())
    }

    pub fn value_of(&self, id: &str) -> Option<&OptionValue> {
        self.options.get(id).map(RenderOption::current_value)
    }

    /// The current value, or the descriptor's static default when the option is not registered.
    pub fn get_value_or_default<'a>(
        &'a self,
        descriptor: &'a OptionDescriptor,
    ) -> Option<&'a OptionValue> {
        self.get_value(descriptor).or(descriptor.default_value())
    }

    pub fn iter(&self) -> impl Iterator<Item = &RenderOption> + '_ {
        self.options.values()
    }

    /// Snapshot of all registered options in map order.
    pub fn all_options(&self) -> Vec<RenderOption> {
        self.options.values().cloned().collect()
    }

    /// The registered CATEGORY option `id` is grouped under, if any.
    pub fn category_of(&self, id: &str) -> Option<&RenderOption> {
        let category = self.options.get(id)?.descriptor().render_category()?;
        self.options
            .get(category.as_str())
            .filter(|option| option.option_type() == OptionType::Category)
    }

    pub fn options_in_category<'a>(
        &'a self,
        category: &'a str,
    ) -> impl Iterator<Item = &'a RenderOption> + 'a {
        self.options.values().filter(move |option| {
            option
                .descriptor()
                .render_category()
                .is_some_and(|candidate| candidate.as_str() == category)
        })
    }

    /// Whether the built-in `debug-options` toggle is registered and enabled.
    pub fn shows_debug_options(&self) -> bool {
        self.value_of(DEBUG_OPTIONS)
            .and_then(OptionValue::as_bool)
            .unwrap_or(false)
    }

    /// Registered options minus debug-only ones unless debug options are shown.
    pub fn visible_options(&self) -> Vec<&RenderOption> {
        let show_debug = self.shows_debug_options();
        self.options
            .values()
            .filter(|option| show_debug || !option.descriptor().is_debug())
            .collect()
    }

    /// Values of all options that differ from their initial value.
    pub fn persisted_overrides(&self) -> Map<String, Value> {
        self.options
            .values()
            .filter(|option| option.is_modified())
            .map(|option| (option.id().to_string(), option.current_value().to_json()))
            .collect()
    }

    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&OptionsChanged) + Send + Sync + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_listener_id);
        self.next_listener_id = self.next_listener_id.wrapping_add(1);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(candidate, _)| *candidate != id);
        self.listeners.len() != before
    }

    /// Applies an action.
    ///
    /// Option actions are handled here and return `None`. Every other action is left alone and
    /// answered with a model refresh request the caller has to dispatch.
    pub fn handle(&mut self, action: &AnyAction) -> Option<Action> {
        match action.as_known() {
            Some(Action::SetRenderOption { id, value }) => {
                self.set_json(id, value);
                None
            }
            Some(Action::ResetRenderOptions) => {
                self.reset_all();
                None
            }
            _ => Some(Action::refresh_model(action.clone())),
        }
    }

    /// Validates and applies `value`, notifying once on success.
    ///
    /// Returns `Ok(false)` when no option `id` is registered.
    pub fn set_value(&mut self, id: &str, value: OptionValue) -> Result<bool, OptionValueError> {
        let Some(option) = self.options.get_mut(id) else {
            return Ok(false);
        };
        let value = option.descriptor().validate(value)?;
        option.set_current_value(value);
        let id = option.id().clone();
        self.notify(OptionsChanged {
            cause: ChangeCause::Set,
            changed: vec![id],
            rejected: Vec::new(),
        });
        Ok(true)
    }

    fn set_json(&mut self, id: &str, raw: &Value) {
        if !self.contains(id) {
            log::debug!("ignoring value for unregistered render option {id}");
            return;
        }
        let result = match OptionValue::from_json(raw) {
            Some(value) => self.set_value(id, value),
            None => Err(OptionValueError::Unsupported { value: raw.clone() }),
        };
        if let Err(error) = result {
            log::warn!("ignoring value {raw} for render option {id}: {error}");
        }
    }

    /// Restores every option to its initial value and notifies once.
    pub fn reset_all(&mut self) {
        let mut changed = Vec::with_capacity(self.options.len());
        for option in self.options.values_mut() {
            option.reset();
            changed.push(option.id().clone());
        }
        self.notify(OptionsChanged {
            cause: ChangeCause::Reset,
            changed,
            rejected: Vec::new(),
        });
    }

    /// Overlays persisted `id -> value` pairs and notifies once.
    ///
    /// Unknown ids are skipped. Values that fail validation are not written, so the option keeps
    /// its current value (the initial value unless it was set before the restore landed), and
    /// are reported in `rejected`.
    pub fn apply_persisted(&mut self, data: &Map<String, Value>) -> OptionsChanged {
        let mut changed = Vec::new();
        let mut rejected = Vec::new();

        for (id, raw) in data {
            let Some(option) = self.options.get_mut(id.as_str()) else {
                log::debug!("skipping persisted value for unregistered render option {id}");
                continue;
            };
            match option.descriptor().validate_json(raw) {
                Ok(value) => {
                    option.set_current_value(value);
                    changed.push(option.id().clone());
                }
                Err(error) => {
                    log::warn!("discarding persisted value {raw} for render option {id}: {error}");
                    rejected.push(RejectedValue {
                        id: option.id().clone(),
                        value: raw.clone(),
                        error,
                    });
                }
            }
        }

        let event = OptionsChanged {
            cause: ChangeCause::Restore,
            changed,
            rejected,
        };
        self.notify(event.clone());
        event
    }

    fn is_category(&self, id: &str) -> bool {
        self.options
            .get(id)
            .is_some_and(|option| option.option_type() == OptionType::Category)
    }

    fn notify(&mut self, event: OptionsChanged) {
        self.rev = self.rev.wrapping_add(1);
        for (_, listener) in self.listeners.iter_mut() {
            listener(&event);
        }
    }
}
