// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;
use tokio::sync::Mutex;

use super::{PersistenceStorage, StoreError};

/// Process-local storage; nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: Mutex<HashMap<String, Value>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_item(mut self, key: impl Into<String>, value: Value) -> Self {
        self.items.get_mut().insert(key.into(), value);
        self
    }

    pub async fn item(&self, key: &str) -> Option<Value> {
        self.items.lock().await.get(key).cloned()
    }
}

#[async_trait]
impl PersistenceStorage for MemoryStorage {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StoreError> {
        Ok(self.items.lock().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<(), StoreError> {
        self.items.lock().await.insert(key.to_owned(), value);
        Ok(())
    }
}
