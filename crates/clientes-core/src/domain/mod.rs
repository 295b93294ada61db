//! Domain types for the clientes service.
//!
//! These are pure data types with no infrastructure dependencies.

mod change_set;
mod cliente;
mod filter;

pub use change_set::{ChangeSet, SaveReport, StagedChange};
pub use cliente::{Cliente, ClienteField, NewCliente};
pub use filter::{ClienteFilter, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
