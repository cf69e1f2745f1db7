//! Network-communication error kinds. All of them carry [`SOCKET_TAG`](crate::SOCKET_TAG).

use crate::kind::impl_kind;
use crate::{Category, HostContext};
use thiserror::Error;

//===========================
// region:      --- Host-reporting kinds

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The connection was refused by the remote host{}.", .context.addr_suffix())]
pub struct ConnectionRefused {
    context: HostContext,
}

impl ConnectionRefused {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: impl Into<HostContext>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl_kind!(ConnectionRefused, "CONNECTION_REFUSED", Category::Io, socket, host);

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The connection timed out{}.", .context.addr_suffix())]
pub struct ConnectionTimeout {
    context: HostContext,
}

impl ConnectionTimeout {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: impl Into<HostContext>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl_kind!(ConnectionTimeout, "CONNECTION_TIMEOUT", Category::Interrupted, socket, host);

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The address is already in use{}.", .context.addr_suffix())]
pub struct AddressInUse {
    context: HostContext,
}

impl AddressInUse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_context(context: impl Into<HostContext>) -> Self {
        Self {
            context: context.into(),
        }
    }
}

impl_kind!(AddressInUse, "ADDRESS_IN_USE", Category::Runtime, socket, host);

// endregion:   --- Host-reporting kinds

//===========================
// region:      --- UnsupportedProtocol

#[derive(Error, Debug, Clone, Default, PartialEq, Eq)]
#[error("The protocol {} is not supported.", .protocol.as_deref().unwrap_or_default())]
pub struct UnsupportedProtocol {
    protocol: Option<String>,
}

impl UnsupportedProtocol {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_protocol(protocol: impl Into<String>) -> Self {
        Self {
            protocol: Some(protocol.into()),
        }
    }

    pub fn protocol(&self) -> Option<&str> {
        self.protocol.as_deref()
    }
}

impl_kind!(UnsupportedProtocol, "UNSUPPORTED_PROTOCOL", Category::InvalidArgument, socket);

// endregion:   --- UnsupportedProtocol
