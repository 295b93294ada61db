//! Unit of work staged for a single repository commit.

use uuid::Uuid;

use super::cliente::{Cliente, NewCliente};

/// One staged mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StagedChange {
    Add(NewCliente),
    Update(Cliente),
    Delete(Uuid),
}

/// Changes staged by a request, committed together by
/// [`ClienteRepository::save`](crate::ports::ClienteRepository::save).
///
/// Staging has no side effects; nothing touches storage until the set is
/// saved. Changes are applied in the order they were staged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeSet {
    changes: Vec<StagedChange>,
}

impl ChangeSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage a new customer. The identifier is assigned by storage on save.
    pub fn add_cliente(&mut self, cliente: NewCliente) {
        self.changes.push(StagedChange::Add(cliente));
    }

    /// Stage an update of an already loaded customer.
    pub fn update_cliente(&mut self, cliente: Cliente) {
        self.changes.push(StagedChange::Update(cliente));
    }

    /// Stage removal of a customer.
    pub fn delete_cliente(&mut self, cliente: &Cliente) {
        self.changes.push(StagedChange::Delete(cliente.id));
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn changes(&self) -> &[StagedChange] {
        &self.changes
    }

    pub fn into_changes(self) -> Vec<StagedChange> {
        self.changes
    }
}

/// Result of a successful commit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SaveReport {
    /// Inserted customers, with their storage-assigned ids, in staging order.
    pub inserted: Vec<Cliente>,
    pub updated: usize,
    pub deleted: usize,
}
