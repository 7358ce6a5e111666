use thiserror::Error;

/// Tabla mal configurada. Fatal al arrancar.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteConfigError {
    #[error("Duplicate route name: {0}")]
    DuplicateName(String),

    #[error("Route {0} declares both a redirect and a view")]
    RedirectWithView(String),

    #[error("Route {0} has no view, redirect or children")]
    EmptyNode(String),

    #[error("Unknown redirect target: {0}")]
    UnknownRedirectTarget(String),

    #[error("Route {route} redirects to {target}, which needs param {param} it cannot supply")]
    MissingRedirectParam {
        route: String,
        target: String,
        param: String,
    },

    #[error("Redirect cycle: {}", .0.join(" -> "))]
    RedirectCycle(Vec<String>),
}

/// Fallo al resolver una navegación. Recuperable: la vista pinta "no encontrado".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    #[error("No route matches {path}")]
    NotFound { path: String },

    #[error("Unknown route name: {0}")]
    UnknownName(String),

    #[error("Route {name} needs param {param}")]
    MissingParam { name: String, param: String },

    #[error("Too many redirects resolving {0}")]
    TooManyRedirects(String),
}
