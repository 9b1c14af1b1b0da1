use thiserror::Error;

/// Errors raised by the platform-free parts of the crate.
#[derive(Debug, Error)]
pub enum Error {
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid color {0:?}, expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("unknown {control} choice {value:?}")]
    UnknownChoice {
        control: &'static str,
        value: String,
    },

    #[error("topology has no object named {0:?}")]
    MissingObject(String),

    #[error("position needs at least 2 coordinates, got {0}")]
    InvalidPosition(usize),

    #[error("arc index {index} out of range ({len} arcs)")]
    ArcIndex { index: i64, len: usize },

    #[error("header row has none of the address columns {0}")]
    MissingAddressColumns(String),

    #[error("time windows {first} and {second} share the url {url}")]
    DuplicateSource {
        first: &'static str,
        second: &'static str,
        url: String,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
