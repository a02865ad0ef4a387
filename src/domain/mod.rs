//! Core types: NoteName, Tag, Header

mod header;
mod note_name;
mod tag;

pub use header::Header;
pub use note_name::{NOTE_EXTENSION, NoteName};
pub use tag::Tag;
