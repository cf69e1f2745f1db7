use crate::{Category, HostContext, KindId, Tag};
use std::error::Error as StdError;

/// Static description of an error kind: its name, base category, and capability tags.
///
/// Implemented with the `impl_kind!` macro, which also attaches the matching marker traits
/// ([`FrameworkError`](crate::FrameworkError), [`SocketError`](crate::SocketError)), so a kind's tag
/// membership is declared in exactly one place.
pub trait Kind: StdError + Send + Sync + 'static {
    const KIND_ID: KindId;
    const CATEGORY: Category;
    const TAGS: &'static [&'static Tag];

    fn kind_id(&self) -> KindId {
        Self::KIND_ID
    }

    fn category(&self) -> Category {
        Self::CATEGORY
    }

    fn tags(&self) -> &'static [&'static Tag] {
        Self::TAGS
    }

    fn has_tag(&self, tag: &Tag) -> bool {
        Self::TAGS.iter().any(|t| *t == tag)
    }

    /// Remote host the failure relates to. `None` for kinds that carry no host context.
    fn host_context(&self) -> Option<&HostContext> {
        None
    }
}

/// Implements [`Kind`] and the capability marker traits for an error struct.
///
/// The `socket, host` form expects a `context: HostContext` field and also implements
/// [`HostCommunicationError`](crate::HostCommunicationError).
macro_rules! impl_kind {
    ($kind:ty, $name:literal, $category:expr) => {
        impl $crate::Kind for $kind {
            const KIND_ID: $crate::KindId = $crate::KindId($name);
            const CATEGORY: $crate::Category = $category;
            const TAGS: &'static [&'static $crate::Tag] = &[&$crate::FRAMEWORK_TAG];
        }

        impl $crate::FrameworkError for $kind {}
    };

    ($kind:ty, $name:literal, $category:expr, socket) => {
        impl $crate::Kind for $kind {
            const KIND_ID: $crate::KindId = $crate::KindId($name);
            const CATEGORY: $crate::Category = $category;
            const TAGS: &'static [&'static $crate::Tag] =
                &[&$crate::FRAMEWORK_TAG, &$crate::SOCKET_TAG];
        }

        impl $crate::FrameworkError for $kind {}
        impl $crate::SocketError for $kind {}
    };

    ($kind:ty, $name:literal, $category:expr, socket, host) => {
        impl $crate::Kind for $kind {
            const KIND_ID: $crate::KindId = $crate::KindId($name);
            const CATEGORY: $crate::Category = $category;
            const TAGS: &'static [&'static $crate::Tag] =
                &[&$crate::FRAMEWORK_TAG, &$crate::SOCKET_TAG];

            fn host_context(&self) -> Option<&$crate::HostContext> {
                Some(&self.context)
            }
        }

        impl $crate::FrameworkError for $kind {}
        impl $crate::SocketError for $kind {}

        impl $crate::HostCommunicationError for $kind {
            fn context(&self) -> &$crate::HostContext {
                &self.context
            }
        }
    };
}

pub(crate) use impl_kind;

#[cfg(test)]
mod test {
    use super::Kind;
    use crate::{Category, FrameworkError, SocketError, Tag, FRAMEWORK_TAG, SOCKET_TAG};
    use thiserror::Error;

    #[derive(Error, Debug)]
    #[error("foo")]
    struct FooError;

    impl_kind!(FooError, "FOO_ERROR", Category::Runtime);

    #[derive(Error, Debug)]
    #[error("bar")]
    struct BarError;

    impl_kind!(BarError, "BAR_ERROR", Category::Io, socket);

    fn accepts_framework<E: FrameworkError>(_: &E) {}

    fn accepts_socket<E: SocketError>(_: &E) {}

    #[test]
    fn test_framework_kind() {
        let err = FooError;
        accepts_framework(&err);
        assert_eq!(err.kind_id().name(), "FOO_ERROR");
        assert_eq!(err.category(), Category::Runtime);
        assert!(err.has_tag(&FRAMEWORK_TAG));
        assert!(!err.has_tag(&SOCKET_TAG));
        assert!(err.host_context().is_none());
    }

    #[test]
    fn test_socket_kind() {
        let err = BarError;
        accepts_framework(&err);
        accepts_socket(&err);
        assert_eq!(err.tags(), &[&FRAMEWORK_TAG, &SOCKET_TAG]);
        assert!(err.has_tag(&SOCKET_TAG));
        assert!(!err.has_tag(&Tag("OTHER")));
    }
}
