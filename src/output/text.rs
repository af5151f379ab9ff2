use std::io::Write;
use crate::error::Result;
use crate::report::{DistanceReport, OccurrenceReport, OutputRecord};

pub fn write_record(writer: &mut dyn Write, record: &OutputRecord) -> Result<()> {
    match record {
        OutputRecord::Distance(report) => write_distance(writer, report),
        OutputRecord::Occurrences(report) => write_occurrences(writer, report),
    }
}

// Absent is printed as "None" so it can never be mistaken for a distance
fn write_distance(output: &mut dyn Write, report: &DistanceReport) -> Result<()> {
    match report.distance {
        Some(distance) => writeln!(output, "{}", distance)?,
        None => writeln!(output, "None")?,
    }
    Ok(())
}

fn write_occurrences(output: &mut dyn Write, report: &OccurrenceReport) -> Result<()> {
    for occurrence in &report.occurrences {
        let positions = occurrence.positions.iter()
            .map(|position| position.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        if positions.is_empty() {
            writeln!(output, "{}:", occurrence.word)?;
        } else {
            writeln!(output, "{}: {}", occurrence.word, positions)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distance::{self, Strategy};

    fn render(record: &OutputRecord) -> String {
        let mut buffer = Vec::new();
        write_record(&mut buffer, record).unwrap();
        String::from_utf8(buffer).unwrap()
    }

    #[test]
    fn distance_or_none() {
        let text = "foo . between bar";
        let nearest = distance::find_nearest_pair("foo", "bar", text, Strategy::SinglePass);
        let found = OutputRecord::Distance(DistanceReport::new("foo", "bar", 4, nearest));
        assert_eq!(render(&found), "2\n");
        let missing = OutputRecord::Distance(DistanceReport::new("foo", "bar", 0, None));
        assert_eq!(render(&missing), "None\n");
    }

    #[test]
    fn zero_is_printed_as_zero() {
        let nearest = distance::find_nearest_pair("foo", "foo", "foo foo", Strategy::SinglePass);
        let record = OutputRecord::Distance(DistanceReport::new("foo", "foo", 2, nearest));
        assert_eq!(render(&record), "0\n");
    }

    #[test]
    fn occurrence_lines() {
        let found = distance::occurrences("foo", "baz", "foo bar foo");
        let record = OutputRecord::Occurrences(found.into());
        assert_eq!(render(&record), "foo: 0 2\nbaz:\n");
    }
}
