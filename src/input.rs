use crate::error::Result;
use std::fmt::{self, Display, Formatter};
use std::fs::File;
use std::io::Read;

#[derive(Debug, Clone)]
pub enum Input {
    Stdin,
    File(String),
}

impl Display for Input {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Input::Stdin => write!(f, "stdin"),
            Input::File(path) => write!(f, "{}", path),
        }
    }
}

// The whole text is read into memory before any matching starts
pub fn read_text(input: &Input) -> Result<String> {
    match input {
        Input::Stdin => read_text_from(std::io::stdin().lock()),
        Input::File(path) => read_text_from(File::open(path)?),
    }
}

// Invalid UTF-8 is replaced rather than rejected
pub fn read_text_from<R: Read>(mut reader: R) -> Result<String> {
    let mut buffer = Vec::new();
    reader.read_to_end(&mut buffer)?;
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}
