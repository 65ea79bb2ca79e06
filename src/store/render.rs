// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::{Arc, Weak};

use serde_json::Value;
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;

use super::{PersistenceStorage, StoreError};
use crate::model::ListenerId;
use crate::registry::{OptionRegistry, OptionsChanged};

/// Storage key of the render option override blob.
pub const RENDER_OPTIONS_KEY: &str = "render";

/// Reads the persisted blob once and overlays it onto `registry`.
///
/// Returns the notification payload when a blob was applied. A missing blob, a storage failure
/// or a blob that is not a JSON object leave the registry untouched and notify nobody.
pub async fn restore_render_options<S>(
    registry: &Mutex<OptionRegistry>,
    storage: &S,
) -> Option<OptionsChanged>
where
    S: PersistenceStorage + ?Sized,
{
    let data = match storage.get_item(RENDER_OPTIONS_KEY).await {
        Ok(Some(data)) => data,
        Ok(None) => {
            log::debug!("no persisted render options");
            return None;
        }
        Err(err) => {
            log::warn!("cannot restore render options: {err}");
            return None;
        }
    };

    let Value::Object(data) = data else {
        log::warn!("ignoring persisted render options: expected a JSON object, got {data}");
        return None;
    };

    let event = registry.lock().await.apply_persisted(&data);
    log::info!(
        "restored {} render option(s), rejected {}",
        event.changed.len(),
        event.rejected.len()
    );
    Some(event)
}

/// Starts the restore on the runtime and returns immediately.
///
/// Readers that lock the registry before the task finishes see initial values.
pub fn spawn_restore(
    registry: Arc<Mutex<OptionRegistry>>,
    storage: Arc<dyn PersistenceStorage>,
) -> JoinHandle<Option<OptionsChanged>> {
    tokio::spawn(async move { restore_render_options(&registry, storage.as_ref()).await })
}

/// Writes the current overrides as the persisted blob.
pub async fn save_render_options<S>(
    registry: &OptionRegistry,
    storage: &S,
) -> Result<(), StoreError>
where
    S: PersistenceStorage + ?Sized,
{
    let blob = Value::Object(registry.persisted_overrides());
    storage.set_item(RENDER_OPTIONS_KEY, blob).await
}

/// A running autosave task; see [`spawn_autosave`].
#[derive(Debug)]
pub struct Autosave {
    listener: ListenerId,
    task: JoinHandle<()>,
}

impl Autosave {
    pub fn listener_id(&self) -> ListenerId {
        self.listener
    }

    /// Unsubscribes, then waits until pending saves are written.
    pub async fn stop(self, registry: &Mutex<OptionRegistry>) {
        registry.lock().await.unsubscribe(self.listener);
        if let Err(err) = self.task.await {
            log::warn!("render options autosave task failed: {err}");
        }
    }
}

/// Saves the override blob after registry notifications.
///
/// The listener only queues a signal; the save runs on a separate task, so notifications never
/// wait on storage. Signals that pile up while a save is in flight collapse into one save.
///
/// Dropping the returned handle detaches the task; it ends once the registry itself is dropped.
pub async fn spawn_autosave(
    registry: Arc<Mutex<OptionRegistry>>,
    storage: Arc<dyn PersistenceStorage>,
) -> Autosave {
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    let listener = registry.lock().await.subscribe(move |_: &OptionsChanged| {
        let _ = tx.send(());
    });

    // The registry owns the sender through the listener; the task must not keep it alive.
    let registry: Weak<Mutex<OptionRegistry>> = Arc::downgrade(&registry);
    let task = tokio::spawn(async move {
        while rx.recv().await.is_some() {
            while rx.try_recv().is_ok() {}
            let Some(live) = registry.upgrade() else {
                break;
            };
            let blob = Value::Object(live.lock().await.persisted_overrides());
            drop(live);
            match storage.set_item(RENDER_OPTIONS_KEY, blob).await {
                Ok(()) => log::debug!("saved render options"),
                Err(err) => log::warn!("cannot save render options: {err}"),
            }
        }
    });

    Autosave { listener, task }
}
