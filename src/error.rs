//! Errors.

/// Errors that may occur while resolving a surface or presenting a toast.
///
/// None of these ever reach a caller of [`Host::show`](crate::Host::show) or
/// [`Toaster::show`](crate::Toaster::show); they are logged and the toast is dropped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// There is no surface to anchor the toast to (e.g. the application has no root yet).
    #[error("no active surface to present on")]
    NoActiveSurface,

    /// The presentation chain is deeper than the configured limit; probably a cycle.
    #[error("presentation chain exceeds {0} surfaces")]
    PresentationDepthExceeded(usize),

    /// The rendering backend failed.
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("invalid toast style: {0}")]
    InvalidConfig(#[from] toml::de::Error),

    #[error("invalid hex color: {0:?}")]
    InvalidColor(String),
}

impl Error {
    pub(crate) fn backend<E: std::error::Error + Send + Sync + 'static>(err: E) -> Error {
        Error::Backend(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
