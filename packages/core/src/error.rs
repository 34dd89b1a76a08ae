use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FolioError {
    #[error("unknown {field} option: {value:?}")]
    UnknownOption { field: &'static str, value: String },
}

impl FolioError {
    pub(crate) fn unknown_option(field: &'static str, value: &str) -> Self {
        Self::UnknownOption {
            field,
            value: value.to_string(),
        }
    }
}

pub type FolioResult<T> = Result<T, FolioError>;
