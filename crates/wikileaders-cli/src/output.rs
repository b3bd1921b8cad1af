//! Writing results to disk.

use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use wikileaders_domain::PipelineResult;

/// Write `result` as pretty-printed JSON, keeping country order.
pub fn write_json<W: Write>(result: &PipelineResult, writer: W) -> Result<()> {
    let mut writer = writer;
    serde_json::to_writer_pretty(&mut writer, result)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

/// Write `result` as CSV with one `country,leader` row per leader.
///
/// The leader column holds the full record as compact JSON.
pub fn write_csv<W: Write>(result: &PipelineResult, writer: W) -> Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["country", "leader"])?;

    for (country, leaders) in result {
        for leader in leaders {
            let record = serde_json::to_string(leader)?;
            csv.write_record([country.as_str(), record.as_str()])?;
        }
    }

    csv.flush()?;
    Ok(())
}

/// Write the JSON file at `path`.
pub fn save_json(result: &PipelineResult, path: &Path) -> Result<()> {
    write_json(result, BufWriter::new(File::create(path)?))
}

/// Write the CSV file at `path`.
pub fn save_csv(result: &PipelineResult, path: &Path) -> Result<()> {
    write_csv(result, BufWriter::new(File::create(path)?))
}
