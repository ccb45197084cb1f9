use thiserror::Error;

/// Errors building a tree out of an RPN string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Error: Invalid sequence of characters '{0}' in expression.")]
    InvalidToken(String),
    #[error("Error: Invalid RPN expression.\nNot enough operands for operator.")]
    InsufficientOperands,
    #[error("Error: Invalid RPN expression.\nToo many operands.")]
    TooManyOperands,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalErr {
    #[error("Error: Invalid RPN expression.\nDivision by zero.")]
    DivisionByZero,
}

/// Either stage failing, as seen by callers that parse and evaluate in one go.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Eval(#[from] EvalErr),
}
