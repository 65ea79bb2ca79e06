// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use serde_json::Value;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{PersistenceStorage, StoreError, WriteDurability};

const ITEM_EXTENSION: &str = "json";

/// Stores each key as `<key>.json` under a root folder.
///
/// Keys that are not safe as file names on every platform are hex encoded behind a `~` prefix.
/// The root folder is created on first write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStorage {
    root: PathBuf,
    durability: WriteDurability,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            durability: WriteDurability::default(),
        }
    }

    pub fn with_durability(mut self, durability: WriteDurability) -> Self {
        self.durability = durability;
        self
    }

    pub fn durability(&self) -> WriteDurability {
        self.durability
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn item_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        if key.is_empty() {
            return Err(StoreError::InvalidKey {
                key: key.to_owned(),
            });
        }
        let file_stem = encode_key_segment(key);
        Ok(self.root.join(format!("{file_stem}.{ITEM_EXTENSION}")))
    }
}

#[async_trait]
impl PersistenceStorage for FileStorage {
    async fn get_item(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let path = self.item_path(key)?;
        let bytes = match fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        serde_json::from_slice(&bytes)
            .map(Some)
            .map_err(|source| StoreError::Json { path, source })
    }

    async fn set_item(&self, key: &str, value: Value) -> Result<(), StoreError> {
        let path = self.item_path(key)?;
        let mut contents =
            serde_json::to_vec_pretty(&value).map_err(|source| StoreError::Json {
                path: path.clone(),
                source,
            })?;
        contents.push(b'\n');

        fs::create_dir_all(&self.root)
            .await
            .map_err(|source| StoreError::Io {
                path: self.root.clone(),
                source,
            })?;
        write_atomic(&self.root, &path, &contents, self.durability).await
    }
}

async fn write_atomic(
    dir: &Path,
    path: &Path,
    contents: &[u8],
    durability: WriteDurability,
) -> Result<(), StoreError> {
    let Some(file_name) = path.file_name() else {
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source: io::Error::other("path has no file name"),
        });
    };

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp_path = dir.join(format!(
        ".nereid.tmp.{}.{}",
        file_name.to_string_lossy(),
        nanos
    ));

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&tmp_path)
        .await
        .map_err(|source| StoreError::Io {
            path: tmp_path.clone(),
            source,
        })?;

    let written = async {
        file.write_all(contents).await?;
        file.flush().await?;
        if durability == WriteDurability::Durable {
            file.sync_all().await?;
        }
        Ok::<_, io::Error>(())
    }
    .await;
    drop(file);

    if let Err(source) = written {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StoreError::Io {
            path: tmp_path,
            source,
        });
    }

    if let Err(source) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(StoreError::Io {
            path: path.to_path_buf(),
            source,
        });
    }

    if durability == WriteDurability::Durable {
        sync_dir(dir).await?;
    }
    Ok(())
}

#[cfg(unix)]
async fn sync_dir(dir: &Path) -> Result<(), StoreError> {
    let handle = fs::File::open(dir).await.map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })?;
    handle.sync_all().await.map_err(|source| StoreError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

#[cfg(not(unix))]
async fn sync_dir(_dir: &Path) -> Result<(), StoreError> {
    Ok(())
}

pub(super) fn encode_key_segment(key: &str) -> String {
    if !needs_encoding(key) {
        return key.to_owned();
    }

    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(1 + key.len().saturating_mul(2));
    out.push('~');
    for &b in key.as_bytes() {
        out.push(HEX[(b >> 4) as usize] as char);
        out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
}

fn needs_encoding(key: &str) -> bool {
    if key.starts_with(['~', '.']) || key.ends_with(' ') {
        return true;
    }

    let base = key.split('.').next().unwrap_or(key);
    if is_reserved_device_name(base) {
        return true;
    }

    key.chars().any(|ch| {
        matches!(ch, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
            || ch <= '\u{1f}'
            || ch == '\u{7f}'
    })
}

fn is_reserved_device_name(base: &str) -> bool {
    let base = base.trim_end_matches(' ').to_ascii_uppercase();
    match base.as_str() {
        "CON" | "PRN" | "AUX" | "NUL" => true,
        _ => base
            .strip_prefix("COM")
            .or_else(|| base.strip_prefix("LPT"))
            .is_some_and(|num| num.len() == 1 && matches!(num.as_bytes()[0], b'1'..=b'9')),
    }
}
