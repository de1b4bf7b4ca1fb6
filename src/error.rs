//! Error types
use std::{convert::From, error, fmt, io, path::PathBuf, result};

#[derive(Debug)]
pub enum Error {
    /// No application data directory in the environment
    NoAppData,
    /// The settings file does not exist at the given path
    NoSettings(PathBuf),
    IO(io::Error),
    Xml(roxmltree::Error),
    /// The accessory query itself is invalid
    Query(String),
}

impl Error {
    /// Whether this error points at a bug rather than at the host's state
    pub fn is_defect(&self) -> bool {
        matches!(self, Error::Query(_))
    }

    /// Whether this error only means the settings are not there to be read
    pub fn is_absent(&self) -> bool {
        matches!(self, Error::NoAppData | Error::NoSettings(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NoAppData => f.write_str("Application data directory is not set"),
            Error::NoSettings(path) => {
                write!(f, "Settings file not found at {}", path.display())
            }
            Error::IO(err) => write!(f, "Could not read the settings file: {}", err),
            Error::Xml(err) => write!(f, "Could not parse the settings file: {}", err),
            Error::Query(err) => write!(f, "Invalid accessory query: {}", err),
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::IO(err) => Some(err),
            Error::Xml(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(error: io::Error) -> Self {
        Error::IO(error)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(error: roxmltree::Error) -> Self {
        Error::Xml(error)
    }
}

pub type Result<T> = result::Result<T, Error>;
