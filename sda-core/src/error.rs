/// Errors produced by the `sda-core` crate.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A required argument was missing or blank.
    #[error("field '{field}' must not be empty")]
    EmptyArgument { field: String },

    /// An argument would be parsed as an option by the admin tool.
    #[error("field '{field}' must not start with '-': {value}")]
    OptionLikeArgument { field: String, value: String },
}
