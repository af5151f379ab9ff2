use crate::args::Config;
use crate::distance;
use crate::error::Result;
use crate::input;
use crate::output;
use crate::report::{DistanceReport, OccurrenceReport, OutputRecord};
use crate::tokenizer;
use std::fmt::{self, Display, Formatter};

#[derive(Debug)]
pub enum Cmd {
    Distance,
    Occurrences,
}

impl Cmd {
    pub fn parse(s: &str) -> Option<Cmd> {
        match s {
            "distance" => Some(Cmd::Distance),
            "occurrences" => Some(Cmd::Occurrences),
            _ => None,
        }
    }

    pub fn run(&self, config: &Config) -> Result<()> {
        let text = input::read_text(&config.input)?;
        if config.verbose {
            eprintln!("Read {} bytes from {}", text.len(), config.input);
        }
        let record = match self {
            Cmd::Distance => OutputRecord::Distance(distance_report(config, &text)),
            Cmd::Occurrences => OutputRecord::Occurrences(occurrence_report(config, &text)),
        };
        output::output_record(config, &record)
    }
}

impl Display for Cmd {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Cmd::Distance => write!(f, "distance"),
            Cmd::Occurrences => write!(f, "occurrences"),
        }
    }
}

pub fn distance_report(config: &Config, text: &str) -> DistanceReport {
    let tokens = tokenizer::tokenize(text);
    let word1 = tokenizer::normalize(&config.word1);
    let word2 = tokenizer::normalize(&config.word2);
    if config.verbose {
        eprintln!("Tokenized {} words, searching for '{}' and '{}' ({})", tokens.len(), word1, word2, config.options.strategy);
    }
    let nearest = distance::nearest_pair(&word1, &word2, &tokens, config.options.strategy);
    if config.verbose {
        match nearest {
            Some(pair) => eprintln!("Nearest pair at positions {} and {}", pair.first, pair.second),
            None => eprintln!("No pair found"),
        }
    }
    DistanceReport::new(&config.word1, &config.word2, tokens.len(), nearest)
}

pub fn occurrence_report(config: &Config, text: &str) -> OccurrenceReport {
    let found = distance::occurrences(&config.word1, &config.word2, text);
    if config.verbose {
        eprintln!("Tokenized {} words", found.tokens);
        for word in &found.words {
            eprintln!("Found {} occurrences of '{}'", found.positions_of(word).len(), word);
        }
    }
    found.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::{ConfigOptions, OutputFormat};
    use crate::distance::Strategy;
    use crate::input::Input;
    use crate::output::Output;

    fn config(cmd: Cmd, word1: &str, word2: &str, strategy: Strategy) -> Config {
        Config {
            cmd,
            word1: word1.to_string(),
            word2: word2.to_string(),
            input: Input::Stdin,
            output: Output::Stdout,
            output_format: OutputFormat::Text,
            verbose: true,
            options: ConfigOptions { strategy },
        }
    }

    #[test]
    fn distance_report_for_each_strategy() {
        let text = "We do value and reward motivation in our development team. Development is a key skill for a DevOp.";
        for strategy in [Strategy::SinglePass, Strategy::CrossProduct] {
            let report = distance_report(&config(Cmd::Distance, "motivation", "development", strategy), text);
            assert_eq!(report.word1, "motivation");
            assert_eq!(report.tokens, 18);
            assert_eq!(report.distance, Some(2));
            assert_eq!(report.positions, Some([5, 8]));
        }
    }

    #[test]
    fn distance_report_without_pair() {
        let report = distance_report(&config(Cmd::Distance, "foo", "foo", Strategy::SinglePass), "foo");
        assert_eq!(report.tokens, 1);
        assert_eq!(report.distance, None);
        assert_eq!(report.positions, None);
    }

    #[test]
    fn occurrence_report_lists_positions() {
        let report = occurrence_report(&config(Cmd::Occurrences, "Foo", "bar", Strategy::SinglePass), "foo word bar foo");
        assert_eq!(report.tokens, 4);
        assert_eq!(report.occurrences.len(), 2);
        assert_eq!(report.occurrences[0].positions, vec![0, 3]);
        assert_eq!(report.occurrences[1].positions, vec![2]);
    }

    #[test]
    fn reads_input_file_and_writes_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input_path = dir.path().join("text.txt");
        let output_path = dir.path().join("out").join("result.csv");
        std::fs::write(&input_path, "foo\nbetween\tbetween  bar").unwrap();
        let mut config = config(Cmd::Distance, "foo", "bar", Strategy::SinglePass);
        config.input = Input::File(input_path.to_string_lossy().to_string());
        config.output = Output::File(output_path.to_string_lossy().to_string());
        config.output_format = OutputFormat::CSV;
        config.cmd.run(&config).unwrap();
        let written = std::fs::read_to_string(output_path).unwrap();
        assert_eq!(written.lines().nth(1), Some("foo\tbar\t4\t2\t0\t3"));
    }

    #[test]
    fn command_names() {
        assert!(matches!(Cmd::parse("distance"), Some(Cmd::Distance)));
        assert!(matches!(Cmd::parse("occurrences"), Some(Cmd::Occurrences)));
        assert!(Cmd::parse("match-json-zip").is_none());
        assert_eq!(Cmd::Occurrences.to_string(), "occurrences");
    }
}
