// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # powerdesk-admin
//!
//! Operator commands against a Powerdesk database:
//!
//! - `fiscal-year` resolves the fiscal year of a date
//! - `preview` prints the identifier a family would issue next
//! - `audit` reports malformed, duplicated and shared identifiers

#![deny(
    clippy::pedantic,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

mod report;

#[cfg(test)]
mod tests;

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    Result,
    eyre::{Context, eyre},
};
use powerdesk_api::{
    FiscalYearRequest, PreviewIdentifierRequest, preview_identifier, resolve_fiscal_year,
};
use powerdesk_domain::{BusinessClock, DEFAULT_TIMEZONE};
use powerdesk_persistence::Persistence;
use tracing::{info, level_filters::LevelFilter};
use tracing_log::AsTrace;

use report::{OutputFormat, write_findings};

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(io::stderr)
        .without_time()
        .init();

    let mut stdout = io::stdout().lock();
    match args.run(&mut stdout) {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "powerdesk-admin", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Path to the `SQLite` database file
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    /// IANA timezone used for fiscal years and time-of-day identifiers
    #[arg(short, long, global = true, default_value = DEFAULT_TIMEZONE)]
    timezone: String,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run<W: Write>(self, out: &mut W) -> Result<()> {
        let clock: BusinessClock = BusinessClock::in_timezone(&self.timezone)?;
        let session = Session {
            database: self.database,
            clock,
        };
        self.command.run(&session, out)
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

/// Settings shared by every command.
struct Session {
    database: Option<PathBuf>,
    clock: BusinessClock,
}

impl Session {
    fn open_database(&self) -> Result<Persistence> {
        let path = self
            .database
            .as_ref()
            .ok_or_else(|| eyre!("--database is required for this command"))?;
        info!(path = %path.display(), "Opening database");
        Persistence::new_with_file(path)
            .wrap_err_with(|| format!("failed to open {}", path.display()))
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Print the fiscal year of a date (default: today)
    #[command(visible_alias = "fy")]
    FiscalYear {
        /// Date as YYYY-MM-DD
        #[arg(long)]
        date: Option<String>,
    },

    /// Print the next identifier of a family without storing anything
    #[command(visible_alias = "p")]
    Preview {
        /// pid, quotation, purchase_order (po) or purchase_request (pr)
        family: String,

        /// Parent PID for chained families
        #[arg(long)]
        linked_pid: Option<String>,

        /// Fiscal year override, e.g. 25-26
        #[arg(long)]
        fy: Option<String>,
    },

    /// Report malformed, duplicated and shared identifiers
    #[command(visible_alias = "a")]
    Audit {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

impl Command {
    fn run<W: Write>(self, session: &Session, out: &mut W) -> Result<()> {
        match self {
            Self::FiscalYear { date } => fiscal_year(session, date, out),
            Self::Preview {
                family,
                linked_pid,
                fy,
            } => preview(session, family, linked_pid, fy, out),
            Self::Audit { output } => audit(session, output, out),
        }
    }
}

/// Print the fiscal year label of a date
fn fiscal_year<W: Write>(session: &Session, date: Option<String>, out: &mut W) -> Result<()> {
    let response = resolve_fiscal_year(&session.clock, &FiscalYearRequest { date })?;
    writeln!(out, "{}", response.financial_year)?;
    Ok(())
}

/// Print the next identifier of a family
fn preview<W: Write>(
    session: &Session,
    family: String,
    linked_pid: Option<String>,
    fy: Option<String>,
    out: &mut W,
) -> Result<()> {
    let mut persistence: Persistence = session.open_database()?;
    let request = PreviewIdentifierRequest {
        family,
        linked_pid,
        fy,
    };
    let response = preview_identifier(&mut persistence, &session.clock, &request)?;

    writeln!(out, "{}", response.identifier)?;
    if response.skipped > 0 {
        tracing::warn!(
            skipped = response.skipped,
            "Identifiers with unparseable sequences were ignored; run `audit` for details"
        );
    }
    Ok(())
}

/// Audit every stored identifier
fn audit<W: Write>(session: &Session, output: OutputFormat, out: &mut W) -> Result<()> {
    let mut persistence: Persistence = session.open_database()?;
    let findings = persistence.audit_identifiers()?;
    info!(findings = findings.len(), "Audit complete");
    write_findings(&findings, output, out)
}
