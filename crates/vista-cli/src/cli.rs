// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Command line surface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::str::FromStr;
use vista_app_core::prefs::ExplorerPrefs;
use vista_filter::{Direction, FilterRule};

#[derive(Parser, Debug)]
#[command(author, version, about = "Graph explorer filter console")]
pub struct Cli {
    #[command(flatten)]
    pub backend: BackendArgs,
    /// Directory holding `explorer.json` (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
    /// Do not write the effective preferences back
    #[arg(long, global = true)]
    pub no_save: bool,
    #[command(subcommand)]
    pub command: Command,
}

/// Backend overrides; unset flags keep the saved preference.
#[derive(Args, Debug, Default)]
pub struct BackendArgs {
    /// Server root, e.g. http://localhost:8088
    #[arg(long, global = true)]
    pub base_url: Option<String>,
    /// Graph connection id
    #[arg(long, global = true)]
    pub connection: Option<u32>,
    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,
}

impl BackendArgs {
    /// Layer the flags over saved preferences.
    pub fn apply(&self, prefs: &mut ExplorerPrefs) {
        if let Some(url) = &self.base_url {
            prefs.backend.base_url.clone_from(url);
        }
        if let Some(id) = self.connection {
            prefs.backend.connection_id = id;
        }
        if let Some(secs) = self.timeout_secs {
            prefs.backend.timeout_secs = secs;
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Expand from an origin vertex through a filter and print the surface as JSON
    Filter(FilterArgs),
    /// Print edge types with their filterable properties and kinds
    Schema,
}

#[derive(Args, Debug, Clone)]
pub struct FilterArgs {
    /// Id of the vertex to expand from
    #[arg(long)]
    pub origin_id: String,
    /// Type of the origin vertex
    #[arg(long)]
    pub origin_label: String,
    /// Edge type to follow
    #[arg(long)]
    pub edge_type: String,
    /// IN, OUT or BOTH (defaults to the saved preference)
    #[arg(long)]
    pub direction: Option<Direction>,
    /// Predicate `property:rule[:value]`, e.g. `age:>=:30` or `active:True` (repeatable)
    #[arg(long = "where", value_name = "PREDICATE")]
    pub predicates: Vec<WhereClause>,
    /// Direction saved as the new default
    #[arg(long)]
    pub save_direction: bool,
}

/// One `--where` predicate as typed; the value is typed later against the schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhereClause {
    pub property: String,
    pub rule: FilterRule,
    pub value: Option<String>,
}

impl FromStr for WhereClause {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, ':');
        let property = parts.next().unwrap_or_default().trim();
        if property.is_empty() {
            return Err(format!("`{s}`: missing property"));
        }
        let symbol = parts
            .next()
            .ok_or_else(|| format!("`{s}`: missing rule (expected property:rule[:value])"))?;
        let rule = FilterRule::parse(symbol.trim())
            .ok_or_else(|| format!("`{s}`: unknown rule `{symbol}`"))?;
        let value = parts.next().map(str::to_owned);
        if rule.is_boolean() && value.is_some() {
            return Err(format!("`{s}`: rule {rule} takes no value"));
        }
        if !rule.is_boolean() && value.as_deref().is_none_or(str::is_empty) {
            return Err(format!("`{s}`: rule {rule} needs a value"));
        }
        Ok(Self {
            property: property.to_owned(),
            rule,
            value,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn where_clauses_parse() {
        let w: WhereClause = "age:>=:30".parse().unwrap();
        assert_eq!(w.rule, FilterRule::Gte);
        assert_eq!(w.value.as_deref(), Some("30"));

        let w: WhereClause = "since:<:2020-01-01 10:00:00".parse().unwrap();
        assert_eq!(w.value.as_deref(), Some("2020-01-01 10:00:00"));

        let w: WhereClause = "active:True".parse().unwrap();
        assert_eq!(w.value, None);
    }

    #[test]
    fn malformed_clauses_are_rejected() {
        assert!("age".parse::<WhereClause>().is_err());
        assert!("age:~:3".parse::<WhereClause>().is_err());
        assert!("age:>=".parse::<WhereClause>().is_err());
        assert!("active:True:yes".parse::<WhereClause>().is_err());
        assert!(":=:x".parse::<WhereClause>().is_err());
    }

    #[test]
    fn flags_override_prefs() {
        let mut prefs = ExplorerPrefs::default();
        let args = BackendArgs {
            base_url: Some("http://graphs.local:9000".into()),
            connection: None,
            timeout_secs: Some(5),
        };
        args.apply(&mut prefs);
        assert_eq!(prefs.backend.base_url, "http://graphs.local:9000");
        assert_eq!(prefs.backend.connection_id, 1);
        assert_eq!(prefs.backend.timeout_secs, 5);
    }

    #[test]
    fn command_line_parses() {
        let cli = Cli::try_parse_from([
            "vista",
            "filter",
            "--origin-id",
            "1:marko",
            "--origin-label",
            "person",
            "--edge-type",
            "knows",
            "--direction",
            "out",
            "--where",
            "age:>=:30",
        ])
        .unwrap();
        let Command::Filter(args) = cli.command else {
            unreachable!()
        };
        assert_eq!(args.direction, Some(Direction::Out));
        assert_eq!(args.predicates.len(), 1);
    }
}
