//! How `list` prints the notes it finds.

use clap::ValueEnum;
use serde::Serialize;

use crate::domain::NoteName;
use crate::infra::NoteStore;

/// Shape of the `list` output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Bare note names, one per line
    #[default]
    Human,
    /// `{"data": [{"name", "path"}]}` for scripts
    Json,
    /// Absolute `<root>/<name>.md` paths, one per line
    Paths,
}

/// One note as it appears in JSON output.
#[derive(Debug, Serialize)]
pub struct NoteListing {
    pub name: String,
    pub path: String,
}

impl NoteListing {
    fn from_store(name: &NoteName, store: &NoteStore) -> Self {
        Self {
            name: name.to_string(),
            path: store.path_for(name).to_string_lossy().into_owned(),
        }
    }
}

/// Top-level JSON document printed by `list -f json`.
#[derive(Debug, Serialize)]
pub struct Listing {
    pub data: Vec<NoteListing>,
}

impl Listing {
    pub fn new(names: &[NoteName], store: &NoteStore) -> Self {
        Self {
            data: names
                .iter()
                .map(|name| NoteListing::from_store(name, store))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn listing_keeps_store_order_and_joins_paths() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();
        let names = [NoteName::new("a").unwrap(), NoteName::new("b c").unwrap()];

        let listing = Listing::new(&names, &store);

        let got: Vec<(&str, String)> = listing
            .data
            .iter()
            .map(|l| (l.name.as_str(), l.path.clone()))
            .collect();
        assert_eq!(
            got,
            vec![
                ("a", dir.path().join("a.md").to_string_lossy().into_owned()),
                ("b c", dir.path().join("b c.md").to_string_lossy().into_owned()),
            ]
        );
    }

    #[test]
    fn empty_listing_serializes_to_empty_data() {
        let dir = TempDir::new().unwrap();
        let store = NoteStore::open(dir.path()).unwrap();

        let json = serde_json::to_string(&Listing::new(&[], &store)).unwrap();

        assert_eq!(json, r#"{"data":[]}"#);
    }
}
