use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("input is empty")]
    Empty,

    #[error("cannot parse line {0:?}")]
    BadLine(String),

    #[error("unexpected character {0:?}")]
    BadChar(char),

    #[error("missing {0} in input")]
    Missing(&'static str),

    #[error("no solution for this input")]
    NoSolution,

    #[error("no solver for day {0}")]
    UnknownDay(u8),

    #[error("part must be 1 or 2, got {0}")]
    BadPart(u8),
}

impl InputError {
    pub fn line(line: &str) -> Self {
        InputError::BadLine(line.to_owned())
    }
}
