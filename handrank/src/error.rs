use thiserror::Error;

/// Errors raised by the public handrank API.
#[derive(Debug, Error)]
pub enum HandRankError {
    #[error("malformed card string")]
    BadCardString(#[from] handrank_base::ParseError),

    #[error("lookup called with {0} cards, only 5, 6 or 7 are valid")]
    InvalidHandSize(usize),

    #[error("hand rank table i/o failed: {0}")]
    TableIo(#[from] std::io::Error),

    #[error("internal invariant violated: {0}")]
    InternalImpossible(&'static str),
}
