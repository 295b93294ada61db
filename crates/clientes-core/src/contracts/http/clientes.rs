//! Clientes API route constants.

use uuid::Uuid;

/// Collection endpoint (create, list).
pub const CLIENTES_PATH: &str = "/clientes";

/// Item endpoint (get, delete, patch) in axum brace syntax.
pub const CLIENTE_ITEM_PATH: &str = "/clientes/{id}";

/// Health check endpoint.
pub const HEALTH_PATH: &str = "/health";

/// Location of a single cliente, as sent in the `Location` header.
pub fn cliente_location(id: Uuid) -> String {
    format!("{CLIENTES_PATH}/{id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_points_into_collection() {
        let id = Uuid::nil();
        assert_eq!(
            cliente_location(id),
            "/clientes/00000000-0000-0000-0000-000000000000"
        );
    }
}
