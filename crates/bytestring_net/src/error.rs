// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use thiserror::Error;

/// Any error that may arise from establishing or using a TCP channel.
///
/// # Thread safety
///
/// This type is thread-safe.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Name resolution produced no address we could connect to.
    #[error("could not resolve {host:?} to a usable address")]
    Resolve {
        /// The host name that failed to resolve.
        host: String,
    },

    /// We are forwarding an error received from the standard library's I/O APIs.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` for use with TCP operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents a channel error as a standard I/O error. This is often used when
/// interoperating with other libraries that expect standard I/O errors.
impl From<Error> for std::io::Error {
    fn from(value: Error) -> Self {
        match value {
            Error::Io(error) => error,
            _ => Self::other(value),
        }
    }
}
