// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use nereid_view::model::{OptionDescriptor, RangeSpec};
use nereid_view::search::SearchCandidate;
use serde_json::{json, Map, Value};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("nereid_view_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create temp dir");

        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// `count` synthetic range options grouped under ten categories.
pub fn synthetic_descriptors(count: usize) -> Vec<OptionDescriptor> {
    let mut descriptors = Vec::with_capacity(count + 10);
    for group in 0..10 {
        descriptors.push(OptionDescriptor::category(
            format!("group-{group}").parse().expect("category id"),
            format!("Group {group}"),
        ));
    }
    for index in 0..count {
        let id = format!("option-{index}").parse().expect("option id");
        let category = format!("group-{}", index % 10).parse().expect("category id");
        descriptors.push(
            OptionDescriptor::range(
                id,
                format!("Option {index}"),
                RangeSpec::new(0.0, 10.0, 0.25),
                1.0,
            )
            .in_category(category),
        );
    }
    descriptors
}

/// Persisted blob for [`synthetic_descriptors`]: every third option overridden, every seventh
/// value out of range, plus some ids nobody registered.
pub fn synthetic_blob(count: usize) -> Map<String, Value> {
    let mut blob = Map::new();
    for index in (0..count).step_by(3) {
        let value = if index % 7 == 0 {
            json!(99.0)
        } else {
            json!((index % 40) as f64 * 0.25)
        };
        blob.insert(format!("option-{index}"), value);
    }
    for index in 0..count / 10 {
        blob.insert(format!("removed-{index}"), json!(true));
    }
    blob
}

const WORDS: &[&str] = &[
    "parser", "lexer", "scheduler", "cache", "router", "codec", "store", "index", "planner",
    "worker", "buffer", "socket",
];

/// `count` element candidates, about a third of them tagged.
pub fn candidates(count: usize) -> Vec<SearchCandidate> {
    (0..count)
        .map(|index| {
            let word = WORDS[index % WORDS.len()];
            let parent = WORDS[(index / WORDS.len()) % WORDS.len()];
            let element_id = format!("$root$N{parent}{}$N{word}{index}", index / 64);
            let candidate = SearchCandidate::new(element_id, format!("{word} {index}"));
            if index % 3 == 0 {
                candidate.with_tags([format!("#{parent}"), "$core".to_owned()])
            } else {
                candidate
            }
        })
        .collect()
}
