use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("literal {0:?} must be exactly one character")]
    InvalidLiteral(String),
    #[error("unsupported construct: {0}")]
    UnsupportedConstruct(&'static str),
    #[error("target address {0} is outside the program")]
    AddressOutOfBounds(isize),
    #[error("pending thread limit of {0} exceeded")]
    ThreadLimitExceeded(usize),
    #[error("cannot lower `{0}` to native code")]
    UnsupportedInstruction(String),
}
