use std::net::SocketAddr;

//===========================
// region:      --- HostContext

/// Where a network failure occurred. Host and port are normally supplied together, but either may
/// be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HostContext {
    host: Option<String>,
    port: Option<u16>,
}

impl HostContext {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: Some(host.into()),
            port: Some(port),
        }
    }

    /// Context with neither host nor port.
    pub const fn unknown() -> Self {
        Self {
            host: None,
            port: None,
        }
    }

    pub fn from_parts(host: Option<String>, port: Option<u16>) -> Self {
        Self { host, port }
    }

    pub fn host(&self) -> Option<&str> {
        self.host.as_deref()
    }

    pub fn port(&self) -> Option<u16> {
        self.port
    }

    /// True when both host and port are present.
    pub fn is_known(&self) -> bool {
        self.host.is_some() && self.port.is_some()
    }

    /// Returns `" (host:port)"`, or the empty string if either part is absent. Values are
    /// substituted as-is.
    pub fn addr_suffix(&self) -> String {
        match (&self.host, self.port) {
            (Some(host), Some(port)) => format!(" ({host}:{port})"),
            _ => String::new(),
        }
    }
}

impl From<SocketAddr> for HostContext {
    fn from(addr: SocketAddr) -> Self {
        Self::new(addr.ip().to_string(), addr.port())
    }
}

impl<H: Into<String>> From<(H, u16)> for HostContext {
    fn from((host, port): (H, u16)) -> Self {
        Self::new(host, port)
    }
}

// endregion:   --- HostContext

//===========================
// region:      --- HostCommunicationError

/// Errors raised while communicating with a remote host.
pub trait HostCommunicationError {
    fn context(&self) -> &HostContext;

    fn host(&self) -> Option<&str> {
        self.context().host()
    }

    fn port(&self) -> Option<u16> {
        self.context().port()
    }

    fn addr_suffix(&self) -> String {
        self.context().addr_suffix()
    }
}

// endregion:   --- HostCommunicationError
