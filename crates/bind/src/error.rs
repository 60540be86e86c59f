use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BindError {
    #[error("Binding parse error in '{expression}': {message}")]
    Parse { expression: String, message: String },
}
