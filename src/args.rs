use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use crate::cmd::Cmd;
use crate::distance::Strategy;
use crate::error::{Error, Result};
use crate::input::Input;
use crate::output::Output;
use std::fmt::{self, Display, Formatter};

#[derive(Parser, Debug)]
#[clap(name = "word-distance", version, about = "Counts the words between the nearest occurrences of two words in a text read from stdin",
    after_help = "Flags go after the two words. Use -- before words that look like flags, e.g. 'word-distance -- -v foo'.")]
pub struct Args {
    /// First word to look for
    #[clap(allow_hyphen_values = true)]
    word1: String,
    /// Second word to look for, may be the same as the first
    #[clap(allow_hyphen_values = true)]
    word2: String,
    /// Command to run. Available commands:
    /// 'distance', 'occurrences' (Default: 'distance')
    #[clap(short = 'c', long = "command")]
    command: Option<String>,
    /// Input. File to read the text from. Defaults to stdin.
    #[clap(short = 'i', long = "input")]
    input: Option<String>,
    /// Output. File to write output to. Defaults to stdout.
    #[clap(short = 'o', long = "output")]
    output: Option<String>,
    /// Output format. Available formats: 'text', 'json', 'csv'
    /// [Defaults to 'text']
    #[clap(short = 'F', long = "output-format")]
    output_format: Option<String>,
    /// Print verbose output to stderr
    #[clap(short = 'v', long = "verbose")]
    verbose: bool,
    /// Options. Extra options for the command.
    /// For example '--option strategy=cross-product' (-O strategy=cross-product)
    #[clap(short = 'O', long = "option")]
    options: Vec<String>,
}

#[derive(Debug)]
pub struct Config {
    pub cmd: Cmd,
    pub word1: String,
    pub word2: String,
    pub input: Input,
    pub output: Output,
    pub output_format: OutputFormat,
    pub verbose: bool,
    pub options: ConfigOptions,
}

#[derive(Debug, Default)]
pub struct ConfigOptions {
    pub strategy: Strategy,
}

impl ConfigOptions {
    fn option_name(s: &str) -> &str {
        s.split_once('=').map_or(s, |(name, _)| name)
    }

    fn string_option(s: &str) -> Option<&str> {
        s.split_once('=').map(|(_, value)| value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
    CSV,
}

impl OutputFormat {
    fn parse(s: &str) -> Option<OutputFormat> {
        match s {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            "csv" => Some(OutputFormat::CSV),
            _ => None,
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::CSV => write!(f, "csv"),
        }
    }
}

impl Config {
    // Any malformed invocation ends the process with status 1,
    // only --help and --version exit successfully.
    pub fn new() -> Config {
        let args = match Args::try_parse() {
            Ok(args) => args,
            Err(err) => match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
                _ => {
                    let _ = err.print();
                    std::process::exit(1);
                }
            },
        };
        match Config::from_args(args) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{}", err);
                eprintln!("{}", Args::command().render_usage());
                std::process::exit(1);
            }
        }
    }

    pub fn from_args(args: Args) -> Result<Config> {
        let options = parse_options(&args.options)?;
        let command = args.command.as_deref().unwrap_or("distance");
        let cmd = Cmd::parse(command)
            .ok_or_else(|| Error::Usage(format!("Unknown command: {}", command)))?;
        let output_format = args.output_format.as_deref().unwrap_or("text");
        let output_format = OutputFormat::parse(output_format)
            .ok_or_else(|| Error::Usage(format!("Unknown output format: {}", output_format)))?;
        let input = match args.input {
            Some(filename) => Input::File(filename),
            None => Input::Stdin,
        };
        let output = match args.output {
            Some(filename) => Output::File(filename),
            None => Output::Stdout,
        };
        Ok(Config {
            cmd,
            word1: args.word1,
            word2: args.word2,
            input,
            output,
            output_format,
            verbose: args.verbose,
            options,
        })
    }
}

fn parse_options(raw: &[String]) -> Result<ConfigOptions> {
    let mut options = ConfigOptions::default();
    for option in raw {
        match ConfigOptions::option_name(option) {
            "strategy" => {
                let value = ConfigOptions::string_option(option).unwrap_or("");
                options.strategy = Strategy::parse(value)
                    .ok_or_else(|| Error::Usage(format!("Unknown strategy: {}", value)))?;
            },
            _ => return Err(Error::Usage(format!("Unknown option: {}", option))),
        }
    }
    Ok(options)
}
