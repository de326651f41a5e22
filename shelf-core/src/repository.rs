//! # Prompt Repository
//!
//! CRUD, search and statistics over a [`PromptStore`].
//!
//! The repository keeps no prompt data between calls: every operation loads
//! the whole collection, works on it in memory and, when something changed,
//! writes the whole collection back. An empty collection is seeded with the
//! example prompts the first time it is read.
//!
//! Each operation holds the repository's lock for its whole
//! load-modify-save cycle, so callers sharing one repository never overwrite
//! each other's changes. Separate processes writing the same file still race.

use crate::error::{RepositoryError, Result};
use crate::file_storage::FileStorage;
use crate::prompt::{Prompt, PromptInput};
use crate::search::SearchFilters;
use crate::seed::example_prompts;
use crate::stats::PromptStats;
use crate::storage::PromptStore;
use chrono::{DateTime, Utc};
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

pub type IdGenerator = Box<dyn Fn() -> String + Send + Sync>;
pub type Clock = Box<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub struct PromptRepository<S: PromptStore = FileStorage> {
    store: S,
    next_id: IdGenerator,
    clock: Clock,
    lock: Mutex<()>,
}

impl<S: PromptStore> PromptRepository<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            next_id: Box::new(|| Uuid::new_v4().to_string()),
            clock: Box::new(Utc::now),
            lock: Mutex::new(()),
        }
    }

    /// Replaces the UUID v4 generator used for new prompt ids.
    pub fn with_id_generator(
        mut self,
        next_id: impl Fn() -> String + Send + Sync + 'static,
    ) -> Self {
        self.next_id = Box::new(next_id);
        self
    }

    pub fn with_clock(
        mut self,
        clock: impl Fn() -> DateTime<Utc> + Send + Sync + 'static,
    ) -> Self {
        self.clock = Box::new(clock);
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Returns every prompt, seeding the store with the examples when it is empty.
    pub fn get_all(&self) -> Result<Vec<Prompt>> {
        let _guard = self.lock();
        self.load_or_seed()
    }

    pub fn get_by_id(&self, id: &str) -> Result<Option<Prompt>> {
        let _guard = self.lock();
        let prompt = self.load_or_seed()?.into_iter().find(|p| p.id == id);
        if prompt.is_none() {
            tracing::debug!(id, "prompt not found");
        }
        Ok(prompt)
    }

    /// Creates a prompt from `input`.
    ///
    /// # Returns
    ///
    /// * `Ok(Prompt)` - The stored prompt, with id, timestamps and defaults filled in.
    /// * `RepositoryError::Validation` - If the title or the content is missing or blank.
    pub fn create(&self, input: PromptInput) -> Result<Prompt> {
        validate_new(&input)?;

        let _guard = self.lock();
        let mut prompts = self.load_or_seed()?;
        let prompt = Prompt::from_input((self.next_id)(), input, (self.clock)());
        prompts.push(prompt.clone());
        self.store.save(&prompts)?;

        tracing::info!(id = %prompt.id, title = %prompt.title, "created prompt");
        Ok(prompt)
    }

    /// Applies `patch` to the prompt with the given id.
    ///
    /// Fields missing from the patch keep their values; `id` and `created_at`
    /// never change and `updated_at` is refreshed. Returns `None` when no
    /// prompt has that id.
    pub fn update(&self, id: &str, patch: PromptInput) -> Result<Option<Prompt>> {
        let _guard = self.lock();
        let prompts = self.load_or_seed()?;
        let now = (self.clock)();

        let updated = self.replace(prompts, id, |prompt| prompt.patched(patch, now))?;
        match &updated {
            Some(prompt) => tracing::info!(id, title = %prompt.title, "updated prompt"),
            None => tracing::warn!(id, "prompt not found for update"),
        }
        Ok(updated)
    }

    /// Removes the prompt with the given id. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let _guard = self.lock();
        let mut prompts = self.load_or_seed()?;
        let before = prompts.len();
        prompts.retain(|p| p.id != id);

        if prompts.len() == before {
            tracing::warn!(id, "prompt not found for deletion");
            return Ok(false);
        }

        self.store.save(&prompts)?;
        tracing::info!(id, "deleted prompt");
        Ok(true)
    }

    /// Adds one to the prompt's usage count and refreshes `updated_at`.
    ///
    /// The count saturates at `u64::MAX`.
    pub fn increment_usage(&self, id: &str) -> Result<Option<Prompt>> {
        let _guard = self.lock();
        let prompts = self.load_or_seed()?;
        let now = (self.clock)();

        let used = self.replace(prompts, id, |prompt| prompt.record_use(now))?;
        match &used {
            Some(prompt) => {
                tracing::info!(id, usage_count = prompt.usage_count, "recorded prompt use")
            }
            None => tracing::warn!(id, "prompt not found for usage increment"),
        }
        Ok(used)
    }

    pub fn search(&self, filters: &SearchFilters) -> Result<Vec<Prompt>> {
        let _guard = self.lock();
        let found = filters.apply(self.load_or_seed()?);
        tracing::debug!(?filters, count = found.len(), "searched prompts");
        Ok(found)
    }

    pub fn stats(&self) -> Result<PromptStats> {
        let _guard = self.lock();
        Ok(PromptStats::compute(&self.load_or_seed()?))
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|e| e.into_inner())
    }

    // Caller holds the lock.
    fn load_or_seed(&self) -> Result<Vec<Prompt>> {
        let prompts = self.store.load()?;
        if !prompts.is_empty() {
            return Ok(prompts);
        }

        let examples = example_prompts(&*self.next_id, (self.clock)());
        self.store.save(&examples)?;
        tracing::info!(count = examples.len(), "seeded empty store with example prompts");
        Ok(examples)
    }

    // Caller holds the lock. Saves only when a prompt with `id` exists.
    fn replace(
        &self,
        mut prompts: Vec<Prompt>,
        id: &str,
        change: impl FnOnce(&Prompt) -> Prompt,
    ) -> Result<Option<Prompt>> {
        let Some(slot) = prompts.iter_mut().find(|p| p.id == id) else {
            return Ok(None);
        };

        let next = change(slot);
        *slot = next.clone();
        self.store.save(&prompts)?;
        Ok(Some(next))
    }
}

fn validate_new(input: &PromptInput) -> Result<()> {
    let blank = |field: &Option<String>| field.as_deref().is_none_or(|v| v.trim().is_empty());

    if blank(&input.title) || blank(&input.content) {
        return Err(RepositoryError::Validation(
            "title and content are required".to_string(),
        ));
    }
    Ok(())
}
