use std::convert::From;
use std::error;
use std::fmt;
use std::io;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub message: Option<String>,
}

#[derive(Debug)]
pub enum ErrorKind {
    ConfigParse,
    HolidayParse,
    Http,
    IOError(io::Error),
}

impl Error {
    pub fn new(kind: ErrorKind, msg: &str) -> Self {
        Error {
            kind,
            message: Some(msg.to_owned()),
        }
    }

    pub fn with_msg(mut self, message: &str) -> Self {
        self.message = Some(message.to_owned());
        self
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            kind,
            message: None,
        }
    }
}

impl From<io::Error> for Error {
    fn from(io_error: io::Error) -> Error {
        Error::from(ErrorKind::IOError(io_error))
    }
}

impl From<toml::de::Error> for Error {
    fn from(parse_error: toml::de::Error) -> Error {
        Error::new(
            ErrorKind::ConfigParse,
            format!("could not parse config: {}", parse_error).as_str(),
        )
    }
}

impl From<serde_json::Error> for Error {
    fn from(parse_error: serde_json::Error) -> Error {
        Error::new(
            ErrorKind::HolidayParse,
            format!("could not parse holiday list: {}", parse_error).as_str(),
        )
    }
}

impl From<ureq::Error> for Error {
    fn from(http_error: ureq::Error) -> Error {
        Error::new(ErrorKind::Http, &http_error.to_string())
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(msg) => write!(f, "{}: {}", self.kind.as_str(), msg),
            None => write!(f, "{}", self.kind.as_str()),
        }
    }
}

impl error::Error for Error {}

impl ErrorKind {
    pub fn as_str(&self) -> String {
        match self {
            ErrorKind::ConfigParse => "invalid config format".to_owned(),
            ErrorKind::HolidayParse => "invalid holiday list format".to_owned(),
            ErrorKind::Http => "holiday request failed".to_owned(),
            ErrorKind::IOError(err) => err.to_string(),
        }
    }
}
