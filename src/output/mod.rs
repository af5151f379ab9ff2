pub mod csv;
pub mod text;
pub mod json;

use crate::args::{Config, OutputFormat};
use crate::error::Result;
use crate::report::OutputRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub enum Cell {
    String(String),
    Number(usize),
    Empty,
}

#[derive(Debug, Clone)]
pub enum Output {
    Stdout,
    File(String),
}

pub fn output_record(config: &Config, record: &OutputRecord) -> Result<()> {
    let mut writer: Box<dyn Write> = match &config.output {
        Output::Stdout => Box::new(std::io::stdout().lock()),
        Output::File(path) => {
            // Create the output directory if it does not exist
            if let Some(parent) = Path::new(path).parent() {
                std::fs::create_dir_all(parent)?;
            }
            Box::new(BufWriter::new(File::create(path)?))
        }
    };
    write_record(config.output_format, writer.as_mut(), record)?;
    writer.flush()?;
    Ok(())
}

pub fn write_record(format: OutputFormat, writer: &mut dyn Write, record: &OutputRecord) -> Result<()> {
    match format {
        OutputFormat::Text => text::write_record(writer, record),
        OutputFormat::Json => json::write_record(writer, record),
        OutputFormat::CSV => csv::write_record(writer, record),
    }
}
