// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Key-value persistence for render options.
//!
//! Storage backends implement [`PersistenceStorage`]; the render helpers read and write one JSON
//! object of option overrides under [`RENDER_OPTIONS_KEY`].

use std::fmt;
use std::io;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

mod file;
mod memory;
mod render;


pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use render::{
    restore_render_options, save_render_options, spawn_autosave, spawn_restore, Autosave,
    RENDER_OPTIONS_KEY,
};

#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: io::Error,
    },
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidKey {
        key: String,
    },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "io error at {path:?}: {source}"),
            Self::Json { path, source } => write!(f, "json error at {path:?}: {source}"),
            Self::InvalidKey { key } => write!(f, "invalid storage key {key:?}"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::InvalidKey { .. } => None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum WriteDurability {
    /// Writes a temp file and renames it into place without fsync.
    #[default]
    BestEffort,

    /// Also flushes file contents and the rename to stable storage where the platform allows.
    Durable,
}

/// Asynchronous key-value storage holding JSON values.
#[async_trait]
pub trait PersistenceStorage: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`.
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StoreError>;

    async fn set_item(&self, key: &str, value: Value) -> Result<(), StoreError>;
}
