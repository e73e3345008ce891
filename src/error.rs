//! Error type shared by construction, motion and dispatch.

/// Everything that can go wrong when building or driving a [`Turtle`](crate::Turtle).
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TurtleError {
    /// A pose field was NaN or infinite. No turtle is produced.
    #[error("invalid argument for `{field}`: {value} is not a finite number")]
    InvalidArgument { field: &'static str, value: f64 },

    /// The dispatcher was handed a tag outside the fixed command set.
    #[error("unknown command `{0}`")]
    UnknownCommand(String),

    /// `update` was asked to replace something that is not a pose field.
    #[error("invalid accessor `{0}`: expected one of `x`, `y`, `direction`")]
    InvalidAccessor(String),
}
