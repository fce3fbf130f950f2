// Editor library - exposes all core modules for testing

pub mod config;
pub mod cursor;
pub mod document;
pub mod editor;
pub mod error;
pub mod file_io;
pub mod highlight;
pub mod input;
pub mod row;
pub mod tag;
pub mod viewport;

#[cfg(feature = "runtime")]
pub mod services;
#[cfg(feature = "runtime")]
pub mod view;

// Re-export commonly used types
pub use document::Document;
pub use editor::Editor;
pub use error::{EditorError, Result};
pub use tag::Tag;
