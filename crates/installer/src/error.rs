use skillsurf_common::FromMessage;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source directory does not look like a skills checkout.
    #[error("{0}")]
    Precondition(String),
    /// The target directory could not be resolved from the environment.
    #[error("{0}")]
    Configuration(String),
    /// A fatal filesystem operation failed.
    #[error("{message}: {source}")]
    Filesystem {
        message: String,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Message(String),
}

impl Error {
    #[must_use]
    pub fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }

    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    #[must_use]
    pub fn filesystem(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Filesystem {
            message: message.into(),
            source,
        }
    }
}

impl FromMessage for Error {
    fn from_message(message: String) -> Self {
        Self::Message(message)
    }
}

pub type Result<T> = std::result::Result<T, Error>;

skillsurf_common::impl_context!();
