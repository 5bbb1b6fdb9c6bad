use thiserror::Error;

/// Errors that can occur when a model pushes content into a view it was not built for.
///
/// These are precondition violations by the caller: content must only flow between models and
/// views with equal [differentiators][crate::ViewDifferentiator]. The view is left untouched.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The view was built by a model of a different type.
    #[error("view built for '{actual}' cannot display content of '{expected}'")]
    ViewKindMismatch {
        /// The model type that attempted to set content.
        expected: &'static str,

        /// The model type that built the view.
        actual: &'static str,
    },

    /// The view was built by a model of the same type but with different invariant view
    /// properties.
    #[error("view built for '{kind}' has different invariant view properties than the model")]
    InvariantMismatch {
        /// The model type shared by both sides.
        kind: &'static str,
    },
}

/// A specialized `Result` type for item model operations, returning the crate's
/// [`Error`] type as the error value.
pub(crate) type Result<T> = std::result::Result<T, Error>;
