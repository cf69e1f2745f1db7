//! Error taxonomy for the Rex toolkit runtime.
//!
//! Every kind is its own error type and can also be carried as a [`RexError`]. Kinds are grouped
//! by capability tags that cut across their base [`Category`]:
//!
//! - [`FRAMEWORK_TAG`] / [`FrameworkError`]: every kind in this crate.
//! - [`SOCKET_TAG`] / [`SocketError`]: the network-communication kinds.
//!
//! ```
//! use rex_error::{ConnectionRefused, RexError};
//!
//! let err = RexError::from(ConnectionRefused::with_context(("10.0.0.1", 4444)));
//! assert!(err.is_socket_error());
//! assert_eq!(
//!     err.to_string(),
//!     "The connection was refused by the remote host (10.0.0.1:4444)."
//! );
//! ```

//===========================
// region:      --- modules

mod general;
mod host;
mod kind;
mod prereq;
mod rex_error;
mod socket;
mod tags;
mod utils;

// endregion:   --- modules

//===========================
// region:      --- flattened

pub use general::*;
pub use host::*;
pub use kind::Kind;
pub use prereq::*;
pub use rex_error::*;
pub use socket::*;
pub use tags::*;
pub use utils::*;

// endregion:   --- flattened
