// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render option data model.
//!
//! Descriptors describe options, `RenderOption`s hold their live values, and the catalogue
//! lists the options a diagram client ships with.

pub mod catalogue;
pub mod ids;
pub mod option;

pub use catalogue::{builtin_descriptors, ShadowMode};
pub use ids::{Id, IdError, ListenerId, OptionId};
pub use option::{
    OptionDescriptor, OptionKind, OptionSummary, OptionType, OptionValue, OptionValueError,
    ParseOptionTypeError, RangeSpec, RenderOption,
};
