use core::fmt;

/// Misuse of a [`Result`](crate::Result): extracting from the variant that isn't there.
///
/// The checked extraction family panics with this diagnostic; the `try_*`
/// variants hand it back instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// `unwrap` (or `expect`) on a failure.
    UnwrapOnFailure,
    /// `unwrap_err` (or `expect_err`) on a success.
    UnwrapErrOnSuccess,
}

impl Error {
    pub fn message(&self) -> &'static str {
        match self {
            Error::UnwrapOnFailure => "called `unwrap` on a failure",
            Error::UnwrapErrOnSuccess => "called `unwrap_err` on a success",
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// [`Error`] or success.
pub type Checked<T> = core::result::Result<T, Error>;
