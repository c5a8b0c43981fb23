use camino::Utf8PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("cannot open \"{path}\"")]
    FileNotFound {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[error("cannot write \"{path}\"")]
    Io {
        path: Utf8PathBuf,
        source: std::io::Error,
    },
    #[error("no \"JSON OUTPUT\" section found in \"{path}\"")]
    MalformedInput { path: Utf8PathBuf },
    #[error("malformed JSON in \"{path}\"")]
    MalformedJson {
        path: Utf8PathBuf,
        source: serde_json::Error,
    },
    #[error("benchmark \"{benchmark}\": missing field \"{field}\"")]
    MissingField {
        benchmark: String,
        field: &'static str,
    },
    #[error("benchmark \"{benchmark}\": field \"{field}\" has unexpected type")]
    InvalidField {
        benchmark: String,
        field: &'static str,
    },
    #[error("benchmark \"{benchmark}\": empty results")]
    EmptyResults { benchmark: String },
}

impl Error {
    pub(crate) fn file_not_found(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Error::FileNotFound {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn io(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
