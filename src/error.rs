use thiserror::Error;

#[derive(Error, Debug)]
pub enum PrepError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk error: {0}")]
    Walk(#[from] ignore::Error),

    #[error("unknown month abbreviation `{abbrev}` in {path}")]
    UnknownMonth { abbrev: String, path: String },

    #[error("malformed transcript filename {name}: {detail}")]
    MalformedFilename { name: String, detail: String },

    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PrepError>;
