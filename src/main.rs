mod args;
mod cmd;
mod error;
mod input;
mod output;
mod report;

use word_distance::{distance, tokenizer};

fn main() {
    let config = args::Config::new();
    if let Err(err) = config.cmd.run(&config) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}
