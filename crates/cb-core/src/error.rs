use thiserror::Error;

pub type CbResult<T> = Result<T, CbError>;

#[derive(Error, Debug)]
pub enum CbError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Unknown device id: {id}")]
    UnknownDevice { id: u64 },
}
