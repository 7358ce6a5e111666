// ============================================================================
// PAGE - Vistas que una ruta puede montar
// ============================================================================

/// Identificador cerrado de cada vista enlazable desde la tabla de rutas.
/// La capa de vistas hace el match exhaustivo para montar el componente.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Page {
    Login,
    /// Contenedor del asistente de registro (pinta los slots `side` y `form`)
    Register,
    RegisterStepOne,
    RegisterStepTwo,
    RegisterStepThree,
    RegisterSideOne,
    RegisterSideTwo,
    RegisterSideThree,
    NotFound,
}
