//! In-memory vault mirrored to persistent storage
//!
//! `CredentialRepository` owns the ordered entry collection and is the only
//! component with mutable state. Every mutation is written through to the
//! store before it returns; a failed write rolls the in-memory change back,
//! so memory and store never disagree.

use uuid::Uuid;

use crate::error::{VaultError, VaultResult};
use crate::models::{CredentialEntry, EntryDraft};
use crate::storage::{PersistentStore, VAULT_KEY};

pub struct CredentialRepository<S> {
    store: S,
    entries: Vec<CredentialEntry>,
    ready: bool,
}

impl<S: PersistentStore> CredentialRepository<S> {
    /// Create a repository over `store`. Call `load` before use.
    pub fn new(store: S) -> Self {
        Self {
            store,
            entries: Vec::new(),
            ready: false,
        }
    }

    /// Load the vault from the store.
    ///
    /// An absent value initializes an empty vault. An unparseable value also
    /// leaves an empty vault but reports `CorruptStore`; the repository is
    /// usable either way, and the ready flag is set.
    pub async fn load(&mut self) -> VaultResult<()> {
        self.entries.clear();
        let result = match self.store.get(VAULT_KEY).await? {
            None => Ok(()),
            Some(raw) => match serde_json::from_str::<Vec<CredentialEntry>>(&raw) {
                Ok(entries) => {
                    self.entries = entries;
                    Ok(())
                }
                Err(e) => Err(VaultError::CorruptStore(e.to_string())),
            },
        };
        self.ready = true;
        result
    }

    /// Whether `load` has completed
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// All entries, oldest first
    pub fn entries(&self) -> &[CredentialEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Find an entry by id
    pub fn find(&self, id: &Uuid) -> Option<&CredentialEntry> {
        self.entries.iter().find(|e| &e.id == id)
    }

    /// Validate `draft`, append it as a new entry, and persist.
    ///
    /// Returns the stored entry with its fresh id and creation time.
    pub async fn add(&mut self, draft: EntryDraft) -> VaultResult<CredentialEntry> {
        draft.validate()?;
        let entry = draft.into_entry();

        self.entries.push(entry.clone());
        if let Err(e) = self.persist().await {
            self.entries.pop();
            return Err(e);
        }
        Ok(entry)
    }

    /// Remove the entry with `id` and persist. Removing an id that is not
    /// present is a no-op, not an error; returns whether anything was removed.
    pub async fn remove(&mut self, id: &Uuid) -> VaultResult<bool> {
        let Some(idx) = self.entries.iter().position(|e| &e.id == id) else {
            return Ok(false);
        };

        let removed = self.entries.remove(idx);
        if let Err(e) = self.persist().await {
            self.entries.insert(idx, removed);
            return Err(e);
        }
        Ok(true)
    }

    /// Remove the entry with `id` and hand it back for editing, persisting
    /// the removal immediately.
    ///
    /// The entry returns to the vault only through a subsequent `add`; an
    /// abandoned edit loses it.
    pub async fn extract_for_edit(&mut self, id: &Uuid) -> VaultResult<CredentialEntry> {
        let idx = self
            .entries
            .iter()
            .position(|e| &e.id == id)
            .ok_or(VaultError::NotFound(*id))?;

        let entry = self.entries.remove(idx);
        if let Err(e) = self.persist().await {
            self.entries.insert(idx, entry);
            return Err(e);
        }
        Ok(entry)
    }

    /// Replace the whole vault with `entries` and persist.
    ///
    /// Import path: the records are trusted verbatim, with no per-field
    /// validation and no id or timestamp rewriting.
    pub async fn replace_all(&mut self, entries: Vec<CredentialEntry>) -> VaultResult<()> {
        let previous = std::mem::replace(&mut self.entries, entries);
        if let Err(e) = self.persist().await {
            self.entries = previous;
            return Err(e);
        }
        Ok(())
    }

    /// The backing store
    pub fn store(&self) -> &S {
        &self.store
    }

    async fn persist(&self) -> VaultResult<()> {
        let raw = serde_json::to_string(&self.entries)?;
        self.store.set(VAULT_KEY, &raw).await
    }
}
