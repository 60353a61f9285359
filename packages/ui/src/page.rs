//! List-plus-modal page logic shared by the Notes and Reminders pages.
//!
//! [`Editor`] holds the modal's form and whether it is creating a new record or
//! editing an existing one. Submitting routes to [`CrudStore::create`] or
//! [`CrudStore::update`]; the modal closes only when the store accepts the
//! submission, so a validation error leaves the user's input in place.

use store::{Clock, CrudStore, KeyValueStore, Record, RecordId, RecordKind, Reminder, StoreError};

#[derive(Clone, Debug, PartialEq)]
pub struct Editor<F> {
    open: bool,
    editing: Option<RecordId>,
    pub form: F,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Submitted {
    Created(RecordId),
    Updated(RecordId),
    /// The record was deleted elsewhere while the editor was open.
    Vanished(RecordId),
}

impl<F: RecordKind + Default> Default for Editor<F> {
    fn default() -> Self {
        Self {
            open: false,
            editing: None,
            form: F::default(),
        }
    }
}

impl<F: RecordKind + Default> Editor<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn editing(&self) -> Option<RecordId> {
        self.editing
    }

    pub fn heading(&self) -> String {
        match self.editing {
            Some(_) => format!("Edit {}", F::LABEL),
            None => format!("New {}", F::LABEL),
        }
    }

    pub fn open_new(&mut self) {
        self.open = true;
        self.editing = None;
        self.form = F::default();
    }

    pub fn open_edit(&mut self, record: &Record<F>) {
        self.open = true;
        self.editing = Some(record.id);
        self.form = record.fields.clone();
    }

    pub fn close(&mut self) {
        *self = Self::default();
    }

    pub fn submit<S, C>(&mut self, store: &mut CrudStore<F, S, C>) -> Result<Submitted, StoreError>
    where
        S: KeyValueStore,
        C: Clock,
    {
        let outcome = match self.editing {
            Some(id) => match store.update(id, self.form.clone())? {
                Some(record) => Submitted::Updated(record.id),
                None => Submitted::Vanished(id),
            },
            None => Submitted::Created(store.create(self.form.clone())?.id),
        };
        self.close();
        Ok(outcome)
    }
}

/// Order reminders by due time, soonest first. Reminders whose time cannot be
/// parsed go last, newest first among themselves.
pub fn sort_by_due(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| match (a.due_at(), b.due_at()) {
        (Some(x), Some(y)) => x.cmp(&y).then(a.id.cmp(&b.id)),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => b.id.cmp(&a.id),
    });
}
