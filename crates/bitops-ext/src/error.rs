#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid radix {0}: must be an integer between 2 and 36")]
    InvalidRadix(f64),

    #[error("Unknown opcode: {0}")]
    UnknownOpcode(String),
}

pub type Result<T> = std::result::Result<T, Error>;
