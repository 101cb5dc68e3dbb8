// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Rendering of identifier audit findings.

use std::io::Write;

use clap::ValueEnum;
use color_eyre::Result;
use powerdesk::IdentifierFinding;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One tab-separated line per finding, followed by a summary
    #[default]
    Text,
    /// CSV with a header row
    Csv,
}

/// Writes findings in the requested format.
pub fn write_findings<W: Write>(
    findings: &[IdentifierFinding],
    format: OutputFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(findings, out),
        OutputFormat::Csv => write_csv(findings, out),
    }
}

fn write_text<W: Write>(findings: &[IdentifierFinding], out: &mut W) -> Result<()> {
    if findings.is_empty() {
        writeln!(out, "No identifier problems found")?;
        return Ok(());
    }

    for finding in findings {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            finding.collection, finding.identifier, finding.kind, finding.detail
        )?;
    }
    writeln!(out, "{} finding(s)", findings.len())?;
    Ok(())
}

fn write_csv<W: Write>(findings: &[IdentifierFinding], out: &mut W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["collection", "identifier", "kind", "detail"])?;
    for finding in findings {
        writer.write_record([
            finding.collection.as_str(),
            finding.identifier.as_str(),
            finding.kind.as_str(),
            finding.detail.as_str(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}
