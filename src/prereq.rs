use std::fmt::Display;

//===========================
// region:      --- KindId

/// Stable name of an error kind. Also used as the rendered message of a kind that has no message of
/// its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KindId(pub &'static str);

impl KindId {
    pub const fn name(&self) -> &'static str {
        self.0
    }
}

impl Display for KindId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.0)
    }
}

// endregion:   --- KindId

//===========================
// region:      --- Tag

/// Capability tag shared by a group of error kinds, independent of their [`Category`].
#[derive(Debug, PartialEq, Eq, Hash)]
pub struct Tag(pub &'static str);

impl Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.0)
    }
}

// endregion:   --- Tag

//===========================
// region:      --- Category

/// Base failure category of an error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// General runtime fault.
    Runtime,
    /// A method that has no implementation was invoked.
    Unimplemented,
    InvalidArgument,
    /// An operation was interrupted before completing, e.g. by a timeout.
    Interrupted,
    Io,
}

impl Category {
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Runtime => "RUNTIME",
            Self::Unimplemented => "UNIMPLEMENTED",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::Interrupted => "INTERRUPTED",
            Self::Io => "IO",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

// endregion:   --- Category

#[cfg(test)]
mod test {
    use super::{Category, KindId, Tag};

    #[test]
    fn test_display() {
        assert_eq!(KindId("FOO_ERROR").to_string(), "FOO_ERROR");
        assert_eq!(Tag("FOO").to_string(), "FOO");
        assert_eq!(Category::InvalidArgument.to_string(), "INVALID_ARGUMENT");
    }

    #[test]
    fn test_tag_eq_by_name() {
        static FOO_TAG: Tag = Tag("FOO");
        assert_eq!(&FOO_TAG, &Tag("FOO"));
        assert_ne!(&FOO_TAG, &Tag("BAR"));
    }
}
