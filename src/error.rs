#![warn(missing_docs)]
//! picshape specific error structures
use std::{error::Error, fmt::Display};

/// picshape specific Result type
pub type PicResult<T> = std::result::Result<T, PicError>;

/// Errors that can be returned by the various picshape functions.
#[derive(Debug, PartialEq, Eq)]
pub enum PicError {
    /// invalid histogram setup (bins, ranges, mismatching data lengths)
    Histogram(String),
    /// errors while constructing or accessing a [`Field`](crate::field::Field)
    Field(String),
    /// errors while reading (or generating) particle data
    Reader(String),
    /// errors while creating fields from particle data
    Analyzer(String),
    /// errors during plot creation
    Plot(String),
    /// errors during command line handling
    Console(String),
    /// file system errors
    Io(String),
    /// errors not falling in one of the categories above
    Other(String),
}

impl Display for PicError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Histogram(m) => write!(f, "Histogram:{m}"),
            Self::Field(m) => write!(f, "Field:{m}"),
            Self::Reader(m) => write!(f, "Reader:{m}"),
            Self::Analyzer(m) => write!(f, "Analyzer:{m}"),
            Self::Plot(m) => write!(f, "Plot:{m}"),
            Self::Console(m) => write!(f, "Console:{m}"),
            Self::Io(m) => write!(f, "Io:{m}"),
            Self::Other(m) => write!(f, "picshape Error:Other:{m}"),
        }
    }
}
impl Error for PicError {}

impl std::convert::From<String> for PicError {
    fn from(msg: String) -> Self {
        Self::Other(msg)
    }
}
impl std::convert::From<std::io::Error> for PicError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
#[cfg(test)]
mod test {
    use super::*;
    #[test]
    fn from() {
        let error = PicError::from("test".to_string());
        assert_eq!(error, PicError::Other("test".to_string()));
    }
    #[test]
    fn from_io() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(PicError::from(io_error), PicError::Io("gone".to_string()));
    }
    #[test]
    fn display() {
        assert_eq!(
            format!("{}", PicError::Histogram("test".to_string())),
            "Histogram:test"
        );
        assert_eq!(format!("{}", PicError::Field("test".to_string())), "Field:test");
        assert_eq!(
            format!("{}", PicError::Reader("test".to_string())),
            "Reader:test"
        );
        assert_eq!(
            format!("{}", PicError::Analyzer("test".to_string())),
            "Analyzer:test"
        );
        assert_eq!(format!("{}", PicError::Plot("test".to_string())), "Plot:test");
        assert_eq!(
            format!("{}", PicError::Console("test".to_string())),
            "Console:test"
        );
        assert_eq!(format!("{}", PicError::Io("test".to_string())), "Io:test");
        assert_eq!(
            format!("{}", PicError::Other("test".to_string())),
            "picshape Error:Other:test"
        );
    }
    #[test]
    fn debug() {
        assert_eq!(
            format!("{:?}", PicError::Histogram("test".to_string())),
            "Histogram(\"test\")"
        );
    }
}
