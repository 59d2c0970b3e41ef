use std::io::ErrorKind;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use tokio::fs;

use crate::error::{AppError, AppResult};
use crate::store::models::Note;

/// File-backed note collection. Every operation loads the whole JSON array,
/// applies one change, and rewrites the whole file. There is no locking
/// between the read and the write, so two overlapping mutations can race and
/// the later write silently discards the earlier one (see the
/// lost-update test below).
pub struct NoteStore {
    path: PathBuf,
}

impl NoteStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// List the caller's notes in stored order. A missing backing file reads
    /// as an empty collection.
    pub async fn list(&self, owner: &str) -> AppResult<Vec<Note>> {
        require_owner(owner)?;
        let notes = self.load().await?;
        Ok(notes.into_iter().filter(|n| n.user_id == owner).collect())
    }

    /// Append a new note for the caller and return it.
    pub async fn create(&self, owner: &str, content: String) -> AppResult<Note> {
        require_owner(owner)?;
        let mut notes = self.load().await?;

        let note = Note {
            id: time_derived_id(),
            content,
            user_id: owner.to_string(),
        };
        notes.push(note.clone());

        self.persist(&notes).await?;
        Ok(note)
    }

    /// Replace the content of the caller's note with the given id. A note
    /// that does not exist and a note owned by someone else both come back
    /// as NotFound.
    pub async fn update(&self, owner: &str, note_id: &str, content: String) -> AppResult<()> {
        require_owner(owner)?;
        let mut notes = self.load().await?;

        let note = notes
            .iter_mut()
            .find(|n| n.id == note_id && n.user_id == owner)
            .ok_or(AppError::NoteNotFound)?;
        note.content = content;

        self.persist(&notes).await
    }

    /// Remove the caller's note with the given id. Unlike the read paths, a
    /// missing backing file is NotFound here, not an empty store.
    pub async fn delete(&self, owner: &str, note_id: &str) -> AppResult<()> {
        require_owner(owner)?;

        let data = match fs::read(&self.path).await {
            Ok(data) => data,
            Err(err) if err.kind() == ErrorKind::NotFound => return Err(AppError::NoteNotFound),
            Err(err) => return Err(err.into()),
        };
        let mut notes: Vec<Note> = serde_json::from_slice(&data)?;

        let before = notes.len();
        notes.retain(|n| n.id != note_id || n.user_id != owner);
        if notes.len() == before {
            return Err(AppError::NoteNotFound);
        }

        self.persist(&notes).await
    }

    /// Read the full collection. Missing file means empty; any other read or
    /// parse failure is a storage error.
    pub(crate) async fn load(&self) -> AppResult<Vec<Note>> {
        match fs::read(&self.path).await {
            Ok(data) => Ok(serde_json::from_slice(&data)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(err) => Err(err.into()),
        }
    }

    /// Rewrite the full collection, pretty-printed like the rest of the
    /// file's history.
    pub(crate) async fn persist(&self, notes: &[Note]) -> AppResult<()> {
        let data = serde_json::to_vec_pretty(notes)?;
        fs::write(&self.path, data).await?;
        Ok(())
    }
}

fn require_owner(owner: &str) -> AppResult<()> {
    if owner.is_empty() {
        return Err(AppError::Unauthorized);
    }
    Ok(())
}

/// Note ids are the current time in nanoseconds since the epoch. Within one
/// process that is unique in practice and sorts in creation order.
fn time_derived_id() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or_default()
        .to_string()
}
