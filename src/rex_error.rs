use crate::{
    AddressInUse, AmbiguousArgumentError, ArgumentError, ArgumentParseError, Category,
    ConnectionRefused, ConnectionTimeout, HostContext, Kind, KindId, NotImplementedError,
    RuntimeError, StreamClosedError, Tag, TimeoutError, UnsupportedProtocol, FRAMEWORK_TAG,
    SOCKET_TAG,
};
use std::{any::Any, error::Error as StdError, io};
use thiserror::Error;

//===========================
// region:      --- RexError

/// Any error kind of this crate. A value is exactly one kind; capability tags cut across kinds and
/// are queried with [`Self::has_tag`], [`Self::is_framework_error`], and [`Self::is_socket_error`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RexError {
    #[error(transparent)]
    Timeout(#[from] TimeoutError),

    #[error(transparent)]
    NotImplemented(#[from] NotImplementedError),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error(transparent)]
    Argument(#[from] ArgumentError),

    #[error(transparent)]
    ArgumentParse(#[from] ArgumentParseError),

    #[error(transparent)]
    AmbiguousArgument(#[from] AmbiguousArgumentError),

    #[error(transparent)]
    StreamClosed(#[from] StreamClosedError),

    #[error(transparent)]
    ConnectionRefused(#[from] ConnectionRefused),

    #[error(transparent)]
    ConnectionTimeout(#[from] ConnectionTimeout),

    #[error(transparent)]
    AddressInUse(#[from] AddressInUse),

    #[error(transparent)]
    UnsupportedProtocol(#[from] UnsupportedProtocol),
}

pub type Result<T> = std::result::Result<T, RexError>;

macro_rules! dispatch {
    ($self:expr, $err:ident => $body:expr) => {
        match $self {
            RexError::Timeout($err) => $body,
            RexError::NotImplemented($err) => $body,
            RexError::Runtime($err) => $body,
            RexError::Argument($err) => $body,
            RexError::ArgumentParse($err) => $body,
            RexError::AmbiguousArgument($err) => $body,
            RexError::StreamClosed($err) => $body,
            RexError::ConnectionRefused($err) => $body,
            RexError::ConnectionTimeout($err) => $body,
            RexError::AddressInUse($err) => $body,
            RexError::UnsupportedProtocol($err) => $body,
        }
    };
}

impl RexError {
    pub fn kind_id(&self) -> KindId {
        dispatch!(self, err => err.kind_id())
    }

    pub fn category(&self) -> Category {
        dispatch!(self, err => err.category())
    }

    pub fn tags(&self) -> &'static [&'static Tag] {
        dispatch!(self, err => err.tags())
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        dispatch!(self, err => err.has_tag(tag))
    }

    pub fn is_framework_error(&self) -> bool {
        self.has_tag(&FRAMEWORK_TAG)
    }

    pub fn is_socket_error(&self) -> bool {
        self.has_tag(&SOCKET_TAG)
    }

    pub fn host_context(&self) -> Option<&HostContext> {
        dispatch!(self, err => err.host_context())
    }

    /// Returns the wrapped kind if it is a `K`.
    pub fn kind_ref<K: Kind>(&self) -> Option<&K> {
        dispatch!(self, err => (err as &dyn Any).downcast_ref::<K>())
    }

    /// Recognizes a `RexError`, or any of the concrete kinds, behind a `dyn Error`.
    pub fn from_dyn(err: &(dyn StdError + 'static)) -> Option<RexError> {
        if let Some(rex) = err.downcast_ref::<RexError>() {
            return Some(rex.clone());
        }

        macro_rules! try_kind {
            ($($kind:ty),+ $(,)?) => {
                $(
                    if let Some(kind) = err.downcast_ref::<$kind>() {
                        return Some(kind.clone().into());
                    }
                )+
            };
        }

        try_kind!(
            TimeoutError,
            NotImplementedError,
            RuntimeError,
            ArgumentError,
            ArgumentParseError,
            AmbiguousArgumentError,
            StreamClosedError,
            ConnectionRefused,
            ConnectionTimeout,
            AddressInUse,
            UnsupportedProtocol,
        );

        None
    }

    /// The closest [`io::ErrorKind`] for this error.
    pub fn io_error_kind(&self) -> io::ErrorKind {
        match self {
            Self::Timeout(_) | Self::ConnectionTimeout(_) => io::ErrorKind::TimedOut,
            Self::ConnectionRefused(_) => io::ErrorKind::ConnectionRefused,
            Self::AddressInUse(_) => io::ErrorKind::AddrInUse,
            Self::StreamClosed(_) => io::ErrorKind::BrokenPipe,
            Self::NotImplemented(_) | Self::UnsupportedProtocol(_) => io::ErrorKind::Unsupported,
            Self::Argument(_) | Self::ArgumentParse(_) | Self::AmbiguousArgument(_) => {
                io::ErrorKind::InvalidInput
            }
            Self::Runtime(_) => io::ErrorKind::Other,
        }
    }
}

impl From<RexError> for io::Error {
    fn from(err: RexError) -> Self {
        io::Error::new(err.io_error_kind(), err)
    }
}

// endregion:   --- RexError

//===========================
// region:      --- raise

/// Converts `err` into a [`RexError`], logs it at debug level, and returns it as an `Err`.
///
/// ```
/// use rex_error::{raise, Result, StreamClosedError};
///
/// fn read_frame(open: bool) -> Result<Vec<u8>> {
///     if !open {
///         return raise(StreamClosedError::new("fd7"));
///     }
///     Ok(Vec::new())
/// }
///
/// assert_eq!(read_frame(false).unwrap_err().to_string(), "Stream fd7 is closed.");
/// ```
pub fn raise<T>(err: impl Into<RexError>) -> Result<T> {
    let err = err.into();
    log::debug!(
        target: "rex_error",
        "raising {} [{}]: {}",
        err.kind_id(),
        err.category(),
        err
    );
    Err(err)
}

// endregion:   --- raise
