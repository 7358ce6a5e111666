// ============================================================================
// APP STATE - Contenedor raíz con los módulos de estado con namespace
// ============================================================================

use crate::state::MealStore;

/// Estado global de la aplicación, se comparte por contexto (nunca como global estático)
#[derive(Clone, Default, PartialEq)]
pub struct AppState {
    pub meal: MealStore,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespaces registrados
    pub fn namespaces(&self) -> &'static [&'static str] {
        &[MealStore::NAMESPACE]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MealMutation;

    #[test]
    fn modules_are_shared_between_clones() {
        let state = AppState::new();
        let handle = state.clone();

        state.meal.commit(MealMutation::Request { request_id: 1 });

        assert!(handle.meal.is_pending());
        assert!(state == handle);
        assert_eq!(state.namespaces(), &["meal"]);
    }
}
