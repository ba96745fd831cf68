//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the generator core and an
//! external system (time, filesystem, identifier generation, clipboard).
//! Implementations live in `src/adapters/`.

pub mod clipboard;
pub mod clock;
pub mod filesystem;
pub mod identifier;

pub use clipboard::Clipboard;
pub use clock::Clock;
pub use filesystem::FileSystem;
pub use identifier::IdentifierSource;
