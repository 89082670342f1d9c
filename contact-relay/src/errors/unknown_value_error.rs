use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown {kind}: {value}")]
pub struct UnknownValueError {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownValueError {
    pub fn new(kind: &'static str, value: &str) -> Self {
        UnknownValueError {
            kind,
            value: value.to_string(),
        }
    }
}
