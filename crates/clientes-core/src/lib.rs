//! Core domain for the clientes service.
//!
//! Holds the `Cliente` entity, the wire DTOs and their mapper, declarative
//! validation, patch documents, the repository port and the service that
//! orchestrates them. Adapters (`clientes-db`, `clientes-axum`) depend on
//! this crate; it depends on none of them.

#![deny(unused_crate_dependencies)]

pub mod contracts;
pub mod domain;
pub mod dto;
pub mod mapper;
pub mod patch;
pub mod paths;
pub mod ports;
pub mod services;
pub mod validation;

// Re-export commonly used types for convenience
pub use domain::{
    ChangeSet, Cliente, ClienteField, ClienteFilter, NewCliente, PageRequest, SaveReport,
    StagedChange,
};
pub use dto::{ClienteDto, CreateClienteDto, UpdateClienteDto};
pub use mapper::ClienteMapper;
pub use patch::{PatchDocument, PatchOp, PatchOperation, RawPatchOperation};
pub use paths::{PathError, data_root, database_path};
pub use ports::{ClienteRepository, RepositoryError};
pub use services::{ClienteService, ClienteServiceError};
pub use validation::{CLIENTE_RULES, FieldFormat, FieldRule, Validate, ValidationErrors};
