// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod reactivity;
pub mod meal_state;
pub mod app_state;

pub use reactivity::*;
pub use meal_state::*;
pub use app_state::*;
