//! HTTP route constants.

pub mod clientes;
