use std::io::Write;
use crate::error::Result;
use crate::output::Cell;
use crate::report::{DistanceReport, OccurrenceReport, OutputRecord};

// Tab separated, one header line. Missing values are empty cells.
pub fn write_record(writer: &mut dyn Write, record: &OutputRecord) -> Result<()> {
    let (headers, rows) = match record {
        OutputRecord::Distance(report) => (distance_headers(), distance_rows(report)),
        OutputRecord::Occurrences(report) => (occurrence_headers(), occurrence_rows(report)),
    };
    output_csv_header(writer, &headers)?;
    for row in rows {
        output_csv_row(writer, &row)?;
    }
    Ok(())
}

fn distance_headers() -> Vec<&'static str> {
    vec!["word1", "word2", "tokens", "distance", "first", "second"]
}

fn distance_rows(report: &DistanceReport) -> Vec<Vec<Cell>> {
    let number = |value: Option<usize>| value.map_or(Cell::Empty, Cell::Number);
    vec![vec![
        Cell::String(report.word1.clone()),
        Cell::String(report.word2.clone()),
        Cell::Number(report.tokens),
        number(report.distance),
        number(report.positions.map(|positions| positions[0])),
        number(report.positions.map(|positions| positions[1])),
    ]]
}

fn occurrence_headers() -> Vec<&'static str> {
    vec!["word", "position"]
}

fn occurrence_rows(report: &OccurrenceReport) -> Vec<Vec<Cell>> {
    report.occurrences.iter().flat_map(|occurrence| {
        occurrence.positions.iter().map(move |&position| {
            vec![Cell::String(occurrence.word.clone()), Cell::Number(position)]
        })
    }).collect()
}

fn output_csv_header(output: &mut dyn Write, headers: &[&str]) -> Result<()> {
    writeln!(output, "{}", headers.join("\t"))?;
    Ok(())
}

fn output_csv_row(output: &mut dyn Write, row: &[Cell]) -> Result<()> {
    let row_str = row.iter().map(|cell| match cell {
        Cell::String(s) => s.to_string(),
        Cell::Number(n) => n.to_string(),
        Cell::Empty => String::new(),
    }).collect::<Vec<String>>().join("\t");
    writeln!(output, "{}", row_str)?;
    Ok(())
}
