use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiagnosticKind {
    #[error("Unknown token `{0}`")]
    UnknownToken(String),

    #[error("Unterminated string literal")]
    UnterminatedString,

    #[error("Expected {expected}, found {found}")]
    UnexpectedToken { expected: String, found: String },

    #[error("Cannot redeclare {0}; first declared at {1}")]
    Redeclaration(String, usize),

    #[error("Could not resolve {0}")]
    CouldNotResolve(String),

    #[error("Could not resolve type {0}")]
    CouldNotResolveType(String),

    #[error("Cannot assign initialiser of type '{0}' to variable with declared type '{1}'.")]
    InitializerNotAssignable(String, String),

    #[error("Cannot assign value of type '{0}' to variable of type '{1}'.")]
    ValueNotAssignable(String, String),

    #[error("Cannot call expression of type '{0}'.")]
    NotCallable(String),

    #[error("Expected {0} arguments, but got {1}.")]
    WrongArgumentCount(usize, usize),

    #[error("Expected {0} type arguments, but got {1}.")]
    WrongTypeArgumentCount(usize, usize),

    #[error("Expected argument of type '{0}', but got '{1}'.")]
    ArgumentNotAssignable(String, String),

    #[error("Returned type '{0}' does not match declared return type '{1}'.")]
    ReturnTypeMismatch(String, String),
}
