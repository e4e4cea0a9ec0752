use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelfileError {
    #[error(
        "invalid command {0:?}: command must be one of \"from\", \"license\", \"template\", \"system\", \"adapter\", \"parameter\", or \"message\""
    )]
    InvalidCommand(String),

    #[error(
        "invalid message role {0:?}: message role must be one of \"system\", \"user\", or \"assistant\""
    )]
    InvalidMessageRole(String),

    #[error("unexpected EOF: {0}")]
    UnexpectedEof(String),

    #[error("invalid quoted value {0:?}: a double quote inside a quoted value needs triple quotes")]
    InvalidValue(String),

    #[error("no FROM line")]
    MissingFrom,

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ModelfileError>;
