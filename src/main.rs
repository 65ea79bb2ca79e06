// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Nereid and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Nereid view CLI entrypoint.
//!
//! Inspects and edits the persisted render options in a store folder.

use std::error::Error;

use nereid_view::action::{Action, AnyAction};
use nereid_view::model::OptionSummary;
use nereid_view::registry::OptionRegistry;
use nereid_view::store::{
    restore_render_options, save_render_options, FileStorage, WriteDurability,
};
use tokio::sync::Mutex;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [--store <dir>] [--durable-writes] list\n  {program} [--store <dir>] [--durable-writes] get <id>\n  {program} [--store <dir>] [--durable-writes] set <id> <json-value>\n  {program} [--store <dir>] [--durable-writes] reset\n  {program} schema\n\nlist prints every render option with its current value; debug options are included.\nset validates the value like the client does and fails on rejected values.\nreset drops all persisted overrides.\nschema prints the JSON schemas of option summaries and actions.\n\nIf --store is omitted, the current working directory is used.\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported).\nRUST_LOG controls diagnostics (e.g. RUST_LOG=debug)."
    );
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    List,
    Get { id: String },
    Set { id: String, value: String },
    Reset,
    Schema,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    store_dir: Option<String>,
    durable_writes: bool,
    command: Command,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut store_dir = None;
    let mut durable_writes = false;
    let mut positional = Vec::new();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--store" => {
                if store_dir.is_some() {
                    return Err(());
                }
                store_dir = Some(args.next().ok_or(())?);
            }
            "--durable-writes" => {
                if durable_writes {
                    return Err(());
                }
                durable_writes = true;
            }
            _ if arg.starts_with("--") => return Err(()),
            _ => positional.push(arg),
        }
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("list") => Command::List,
        Some("get") => Command::Get {
            id: positional.next().ok_or(())?,
        },
        Some("set") => Command::Set {
            id: positional.next().ok_or(())?,
            value: positional.next().ok_or(())?,
        },
        Some("reset") => Command::Reset,
        Some("schema") => Command::Schema,
        _ => return Err(()),
    };
    if positional.next().is_some() {
        return Err(());
    }

    Ok(CliOptions {
        store_dir,
        durable_writes,
        command,
    })
}

async fn run(options: CliOptions) -> Result<(), Box<dyn Error>> {
    if options.command == Command::Schema {
        let schemas = serde_json::json!({
            "optionSummary": schemars::schema_for!(Vec<OptionSummary>),
            "action": schemars::schema_for!(AnyAction),
        });
        println!("{}", serde_json::to_string_pretty(&schemas)?);
        return Ok(());
    }

    let dir = options.store_dir.unwrap_or_else(|| ".".to_owned());
    let storage = if options.durable_writes {
        FileStorage::new(dir).with_durability(WriteDurability::Durable)
    } else {
        FileStorage::new(dir)
    };

    let registry = Mutex::new(OptionRegistry::with_builtin_options());
    if let Some(event) = restore_render_options(&registry, &storage).await {
        for rejected in &event.rejected {
            eprintln!("nereid-view: {rejected}");
        }
    }
    let mut registry = registry.into_inner();

    match options.command {
        Command::List => {
            let summaries: Vec<OptionSummary> =
                registry.iter().map(|option| option.summary()).collect();
            println!("{}", serde_json::to_string_pretty(&summaries)?);
        }
        Command::Get { id } => {
            let option = registry
                .option(&id)
                .ok_or_else(|| format!("unknown render option {id:?}"))?;
            println!("{}", serde_json::to_string_pretty(&option.summary())?);
        }
        Command::Set { id, value } => {
            let raw: serde_json::Value = serde_json::from_str(&value)?;
            let option = registry
                .option(&id)
                .ok_or_else(|| format!("unknown render option {id:?}"))?;
            let value = option.descriptor().validate_json(&raw)?;
            registry.handle(&Action::set_render_option(id.as_str(), value).into());
            save_render_options(&registry, &storage).await?;
            if let Some(option) = registry.option(&id) {
                println!("{}", serde_json::to_string_pretty(&option.summary())?);
            }
        }
        Command::Reset => {
            registry.handle(&Action::ResetRenderOptions.into());
            save_render_options(&registry, &storage).await?;
        }
        Command::Schema => {}
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "nereid-view".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        runtime.block_on(run(options))
    })();

    if let Err(err) = result {
        eprintln!("nereid-view: {err}");
        std::process::exit(1);
    }
}
