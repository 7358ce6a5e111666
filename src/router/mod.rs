// ============================================================================
// ROUTER - Tabla de rutas declarativa + resolución pura (sin DOM)
// ============================================================================

pub mod error;
pub mod page;
pub mod path;
pub mod prefix;
pub mod route;
pub mod table;

pub use error::{ResolveError, RouteConfigError};
pub use page::Page;
pub use prefix::with_prefix;
pub use route::{Redirect, RouteNode, Views, DEFAULT_SLOT};
pub use table::{MatchedRoute, ResolvedRoute, RouteTable};
