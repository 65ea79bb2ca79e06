// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nereid view: render options registry and diagram search panel.
//!
//! [`registry::OptionRegistry`] holds the user-tunable render options of a diagram client,
//! [`store`] persists their overrides, and [`search::SearchPanel`] drives the element search
//! bar. All three talk to the host through [`action`] messages.

pub mod action;
pub mod model;
pub mod registry;
pub mod search;
pub mod store;
