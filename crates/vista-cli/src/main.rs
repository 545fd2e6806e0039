// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! `vista`: run filter-and-merge rounds against a graph backend from the
//! command line. Output is JSON on stdout; logs go to stderr via `RUST_LOG`.

mod cli;
mod filter;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use serde::Serialize;
use std::io::Write;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use vista_app_core::config::{ConfigError, ConfigService};
use vista_app_core::notice::{NoticeKind, NoticeService};
use vista_app_core::prefs::ExplorerPrefs;
use vista_config_fs::FsConfigStore;
use vista_filter::{FilterError, QueryError, SchemaCatalog};
use vista_query_client::HttpQueryClient;

/// Exit status when the backend rejected the session (401).
const EXIT_SESSION_INVALID: u8 = 3;

#[derive(Serialize)]
struct EdgeTypeListing<'a> {
    edge_type: &'a str,
    properties: Vec<PropertyListing<'a>>,
}

#[derive(Serialize)]
struct PropertyListing<'a> {
    name: &'a str,
    kind: Option<&'a str>,
}

fn schema_listing(catalog: &SchemaCatalog) -> Vec<EdgeTypeListing<'_>> {
    catalog
        .edge_type_names()
        .map(|edge_type| EdgeTypeListing {
            edge_type,
            properties: catalog
                .edge_properties(edge_type)
                .iter()
                .map(|name| PropertyListing {
                    name,
                    kind: catalog.declared_kind(name),
                })
                .collect(),
        })
        .collect()
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, value)?;
    writeln!(out)?;
    Ok(())
}

fn unauthorized(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<FilterError>()
            .is_some_and(FilterError::is_unauthorized)
            || cause
                .downcast_ref::<QueryError>()
                .is_some_and(QueryError::is_unauthorized)
    })
}

fn load_prefs(cli: &Cli) -> Result<ExplorerPrefs> {
    let store = match &cli.config_dir {
        Some(dir) => FsConfigStore::at(dir),
        None => FsConfigStore::new(),
    }
    .context("opening config store")?;
    let config = ConfigService::new(store);
    let mut prefs = match config.load_prefs() {
        Ok(prefs) => prefs,
        Err(err @ ConfigError::Corrupt { .. }) => {
            warn!(%err, "ignoring saved preferences");
            ExplorerPrefs::default()
        }
        Err(err) => return Err(err).context("loading explorer preferences"),
    };
    cli.backend.apply(&mut prefs);
    if let Command::Filter(args) = &cli.command {
        if let (true, Some(direction)) = (args.save_direction, args.direction) {
            prefs.filter.default_direction = direction;
        }
    }
    if !cli.no_save {
        if let Err(err) = config.save_prefs(&prefs) {
            warn!(%err, "could not save explorer preferences");
        }
    }
    Ok(prefs)
}

async fn run(cli: Cli) -> Result<()> {
    let prefs = load_prefs(&cli)?;
    let client = HttpQueryClient::from_prefs(&prefs.backend)?;
    info!(base_url = %prefs.backend.base_url, connection = prefs.backend.connection_id, "using backend");
    let schema = client.fetch_schema().await.context("fetching schema")?;

    match cli.command {
        Command::Schema => print_json(&schema_listing(&schema.catalog)),
        Command::Filter(args) => {
            let report = filter::run_filter(
                &client,
                schema.catalog,
                schema.styles,
                &args,
                prefs.filter.default_direction,
            )
            .await?;
            print_json(&report)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let Err(err) = run(cli).await else {
        return ExitCode::SUCCESS;
    };

    let mut notices = NoticeService::default();
    let session_invalid = unauthorized(&err);
    let kind = if session_invalid {
        NoticeKind::SessionInvalid
    } else {
        NoticeKind::Error
    };
    notices.push(kind, format!("{err:#}"), NoticeService::DEFAULT_TTL, Instant::now());
    for notice in notices.drain() {
        match notice.kind {
            NoticeKind::SessionInvalid => {
                error!("session invalid, sign in again: {}", notice.message);
            }
            _ => error!("{}", notice.message),
        }
    }
    if session_invalid {
        ExitCode::from(EXIT_SESSION_INVALID)
    } else {
        ExitCode::FAILURE
    }
}
