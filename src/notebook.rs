//! Note operations wired together: add, open, daily, list, delete.

use chrono::NaiveDate;
use std::path::PathBuf;

use crate::domain::{Header, NoteName, Tag};
use crate::error::{NoteError, Result};
use crate::infra::{EditorLauncher, NoteStore};
use crate::matching::{FuzzyMatcher, Prompter, Selection, disambiguate};

/// Tag attached to notes created by [`Notebook::open_daily_note`].
pub const DAILY_TAG: &str = "daily";

/// What an add request ended up doing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new note was written and edited, and kept.
    Created(PathBuf),
    /// A new note was created but left unedited, so it was removed again.
    Discarded,
    /// The user picked an existing note, which was opened instead.
    OpenedExisting(NoteName),
}

/// A notes directory plus the collaborators needed to work on it.
pub struct Notebook<E, P> {
    store: NoteStore,
    editor: E,
    prompter: P,
    matcher: FuzzyMatcher,
}

impl<E: EditorLauncher, P: Prompter> Notebook<E, P> {
    pub fn new(store: NoteStore, editor: E, prompter: P, matcher: FuzzyMatcher) -> Self {
        Self {
            store,
            editor,
            prompter,
            matcher,
        }
    }

    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Creates a note, or opens an existing one the user says they meant.
    ///
    /// With `fuzzy` set, existing names similar to `name` are offered first;
    /// picking one opens it instead of creating a new note. A new note is
    /// seeded with its header, handed to the editor, and deleted again if
    /// the user saved no changes.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::AlreadyExists` if `name` exists (nothing is
    /// written), `NoteError::InvalidSelection` on a bad prompt answer, or
    /// the editor's error after the unchanged-note cleanup has run.
    pub fn add_note(
        &self,
        name: &NoteName,
        tags: &[Tag],
        fuzzy: bool,
        today: NaiveDate,
    ) -> Result<AddOutcome> {
        if self.store.exists(name) {
            return Err(NoteError::AlreadyExists {
                name: name.to_string(),
            });
        }

        if fuzzy {
            if let Some(existing) = self.resolve_similar(name)? {
                self.open_note(&existing)?;
                return Ok(AddOutcome::OpenedExisting(existing));
            }
        }

        self.construct_note(name, tags, today)
    }

    /// Opens an existing note in the editor.
    ///
    /// # Errors
    ///
    /// Returns `NoteError::NotFound` if the note does not exist.
    pub fn open_note(&self, name: &NoteName) -> Result<()> {
        if !self.store.exists(name) {
            return Err(NoteError::NotFound {
                name: name.to_string(),
            });
        }
        log::info!("opening '{name}'");
        self.editor.open(&self.store.path_for(name))
    }

    /// Opens today's note, creating it with the `daily` tag if needed.
    pub fn open_daily_note(&self, today: NaiveDate) -> Result<AddOutcome> {
        let name = NoteName::for_date(today);
        if self.store.exists(&name) {
            self.open_note(&name)?;
            return Ok(AddOutcome::OpenedExisting(name));
        }
        let tags = [Tag::new(DAILY_TAG)?];
        self.add_note(&name, &tags, false, today)
    }

    pub fn list_notes(&self) -> Result<Vec<NoteName>> {
        self.store.list_identifiers()
    }

    pub fn delete_note(&self, name: &NoteName) -> Result<()> {
        self.store.delete(name)?;
        log::info!("deleted '{name}'");
        Ok(())
    }

    fn resolve_similar(&self, name: &NoteName) -> Result<Option<NoteName>> {
        let existing = self.store.list_identifiers()?;
        let matches = self.matcher.find_matches(name.as_str(), &existing);
        if matches.is_empty() {
            return Ok(None);
        }

        let candidates: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();
        match disambiguate(&self.prompter, name.as_str(), &candidates)? {
            Selection::CreateNew => Ok(None),
            Selection::Existing(chosen) => NoteName::new(&chosen).map(Some),
        }
    }

    fn construct_note(&self, name: &NoteName, tags: &[Tag], today: NaiveDate) -> Result<AddOutcome> {
        let header = Header::new(name.as_str(), tags.to_vec(), today);
        let path = self.store.create(name, &header.render_to_string())?;
        log::debug!("created {}", path.display());

        let edited = self.editor.open(&path);

        let outcome = match self.store.read(name) {
            Ok(contents) if header.is_untouched(&contents) => {
                self.store.delete(name)?;
                log::info!("no changes made to '{name}'; discarded");
                AddOutcome::Discarded
            }
            Ok(_) => {
                log::info!("created '{name}'");
                AddOutcome::Created(path)
            }
            Err(NoteError::NotFound { .. }) => {
                log::info!("'{name}' was removed during editing");
                AddOutcome::Discarded
            }
            Err(e) => return Err(e),
        };

        edited?;
        Ok(outcome)
    }
}
