use crate::cli::OutputFormat;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use stereokit::core::stereo::parity::{ParityRecord, SignClass};
use stereokit::workflows::assign::AssignedParity;
use stereokit::workflows::verify::{Verdict, Verification};

#[derive(Serialize)]
struct AssignmentRow<'a> {
    label: &'a str,
    refs: String,
    value: f64,
    sign: SignClass,
    near_planar: bool,
}

#[derive(Serialize)]
struct VerificationRow<'a> {
    label: &'a str,
    refs: String,
    declared: f64,
    derived: f64,
    verdict: Verdict,
}

fn joined_refs(record: &ParityRecord) -> String {
    record.refs().join(" ")
}

fn write_csv<W: Write, R: Serialize>(writer: W, rows: impl IntoIterator<Item = R>) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_assignments<W: Write>(
    mut writer: W,
    assigned: &[AssignedParity],
    format: OutputFormat,
) -> Result<()> {
    let rows = assigned.iter().map(|a| AssignmentRow {
        label: &a.label,
        refs: joined_refs(&a.record),
        value: a.record.value(),
        sign: a.sign_class(),
        near_planar: a.record.is_near_planar(),
    });

    match format {
        OutputFormat::Csv => write_csv(writer, rows),
        OutputFormat::Table => {
            writeln!(
                writer,
                "{:<16} {:<28} {:>12} {:<9} {}",
                "CENTER", "SUBSTITUENTS", "PARITY", "SIGN", "NEAR-PLANAR"
            )?;
            for row in rows {
                writeln!(
                    writer,
                    "{:<16} {:<28} {:>12.4} {:<9} {}",
                    row.label,
                    row.refs,
                    row.value,
                    row.sign.to_string(),
                    if row.near_planar { "yes" } else { "no" }
                )?;
            }
            Ok(())
        }
    }
}

pub fn write_verifications<W: Write>(
    mut writer: W,
    verifications: &[Verification],
    format: OutputFormat,
) -> Result<()> {
    let rows = verifications.iter().map(|v| VerificationRow {
        label: &v.label,
        refs: joined_refs(&v.derived),
        declared: v.declared.value(),
        derived: v.derived.value(),
        verdict: v.verdict,
    });

    match format {
        OutputFormat::Csv => write_csv(writer, rows),
        OutputFormat::Table => {
            writeln!(
                writer,
                "{:<16} {:<28} {:>12} {:>12} {}",
                "CENTER", "SUBSTITUENTS", "DECLARED", "DERIVED", "VERDICT"
            )?;
            for row in rows {
                writeln!(
                    writer,
                    "{:<16} {:<28} {:>12.4} {:>12.4} {}",
                    row.label, row.refs, row.declared, row.derived, row.verdict
                )?;
            }
            Ok(())
        }
    }
}
