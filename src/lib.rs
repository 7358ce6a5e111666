// ============================================================================
// MEAL PWA - Rutas de autenticación + módulo de estado "meal" (Yew)
// ============================================================================
// - router: tabla de rutas inmutable y resolución pura (sin DOM)
// - routes: rutas concretas de la app (/auth/...)
// - state: contenedores Rc<RefCell> con transiciones explícitas
// - services: SOLO comunicación API
// - views: componentes que montan cada slot
// ============================================================================

pub mod config;
pub mod models;
pub mod navigation;
pub mod router;
pub mod routes;
pub mod services;
pub mod state;
pub mod views;
