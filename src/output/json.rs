use std::io::Write;
use crate::error::Result;
use crate::report::OutputRecord;

/// Writes the record as a pretty printed JSON object followed by a newline.
pub fn write_record(writer: &mut dyn Write, record: &OutputRecord) -> Result<()> {
    match record {
        OutputRecord::Distance(report) => serde_json::to_writer_pretty(&mut *writer, report)?,
        OutputRecord::Occurrences(report) => serde_json::to_writer_pretty(&mut *writer, report)?,
    }
    writeln!(writer)?;
    Ok(())
}
