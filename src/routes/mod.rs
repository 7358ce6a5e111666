// ============================================================================
// ROUTES - Tabla de la aplicación
// ============================================================================

pub mod auth;

use crate::router::{RouteConfigError, RouteTable};

/// Tabla completa de la app. Un error aquí aborta el arranque.
pub fn build_table() -> Result<RouteTable, RouteConfigError> {
    let mut routes = Vec::new();
    routes.extend(auth::routes());

    RouteTable::new(routes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_table_is_valid() {
        let table = build_table().unwrap();
        assert!(table.names().any(|name| name == auth::LOGIN));
        assert_eq!(table.names().count(), 5);
    }
}
