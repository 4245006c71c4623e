use std::fmt;

/// Result type for reps operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while configuring or rendering reps
#[derive(Debug)]
pub enum Error {
    /// No rep in the registry supports the grip
    Unsupported { kind: String },

    /// A preview is present but lacks a field the rep needs
    MissingField {
        rep: &'static str,
        field: &'static str,
    },

    /// The grip does not have the shape the rep expects
    Malformed { rep: &'static str, reason: String },

    /// IO operation failed
    Io(std::io::Error),

    /// Limits file could not be parsed
    Config(toml::de::Error),

    /// Limits could not be serialized
    ConfigSerialize(toml::ser::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unsupported { kind } => write!(f, "No rep supports grip of kind {}", kind),
            Error::MissingField { rep, field } => {
                write!(f, "{} rep: preview is missing `{}`", rep, field)
            }
            Error::Malformed { rep, reason } => write!(f, "{} rep: {}", rep, reason),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(err) => write!(f, "Config error: {}", err),
            Error::ConfigSerialize(err) => write!(f, "Config serialization error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Config(err) => Some(err),
            Error::ConfigSerialize(err) => Some(err),
            Error::Unsupported { .. } | Error::MissingField { .. } | Error::Malformed { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err)
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::ConfigSerialize(err)
    }
}
