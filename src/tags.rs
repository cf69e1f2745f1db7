//! [`Tag`] instances and the marker traits that attach them to error kinds at the type level.

use crate::{Kind, Tag};

/// Held by every error kind defined in this crate.
pub const FRAMEWORK_TAG: Tag = Tag("FRAMEWORK");

/// Held by the network-communication kinds.
pub const SOCKET_TAG: Tag = Tag("SOCKET");

/// Marker for every error kind of this crate. Bound on it to accept "anything from the framework".
pub trait FrameworkError: Kind {}

/// Marker for socket and connection related error kinds.
pub trait SocketError: FrameworkError {}

