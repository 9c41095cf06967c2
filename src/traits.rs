//! Core traits that decouple hyprlayout from the compositor and from the
//! filesystem.
//!
//! The [`LayoutSync`](crate::sync::LayoutSync) pipeline only depends on these
//! abstractions; [`Hyprctl`](crate::hyprland::ctl::Hyprctl) and
//! [`LayoutFile`](crate::layout_file::LayoutFile) are the real backends.

/// Abstraction over the compositor's control interface.
pub trait Compositor {
    /// The error type produced by this compositor.
    type Error: std::error::Error + Send + 'static;

    /// Return the raw machine-readable monitor list.
    ///
    /// The text is only ever searched for substrings, so implementations
    /// hand it back unparsed.
    fn monitors(&self) -> Result<String, Self::Error>;

    /// Ask the compositor to re-read its configuration.
    fn reload(&self) -> Result<(), Self::Error>;
}

/// Narrow read/write access to the persisted layout file.
///
/// Nothing is cached between calls; every `read` goes to the backing store.
pub trait LayoutStore {
    /// The error type produced by this store.
    type Error: std::error::Error + Send + 'static;

    /// Current content, or `None` if nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, Self::Error>;

    /// Replace the whole content with `contents`.
    fn write(&self, contents: &str) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    /// A test double that keeps the stored text in memory.
    #[derive(Debug, Default)]
    struct MemoryStore {
        contents: RefCell<Option<String>>,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("mock error")]
    struct MockError;

    impl LayoutStore for MemoryStore {
        type Error = MockError;

        fn read(&self) -> Result<Option<String>, MockError> {
            Ok(self.contents.borrow().clone())
        }

        fn write(&self, contents: &str) -> Result<(), MockError> {
            *self.contents.borrow_mut() = Some(contents.to_string());
            Ok(())
        }
    }

    #[test]
    fn memory_store_starts_empty_and_overwrites() {
        let store = MemoryStore::default();
        assert_eq!(store.read().unwrap(), None);
        store.write("a\n").unwrap();
        store.write("b\n").unwrap();
        assert_eq!(store.read().unwrap().as_deref(), Some("b\n"));
    }
}
