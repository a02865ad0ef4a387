//! Filesystem store and external processes (editor, search)

mod editor;
mod search;
mod store;

pub use editor::{CommandEditor, EditorLauncher};
pub use search::SearchTool;
pub use store::NoteStore;
