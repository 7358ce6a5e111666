// ============================================================================
// NAVIGATION - History API + evento "locationchange"
// ============================================================================

use std::cell::Cell;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

/// Evento que se emite en `window` cada vez que cambia la ubicación
pub const LOCATION_CHANGE_EVENT: &str = "locationchange";

thread_local! {
    static POPSTATE_INSTALLED: Cell<bool> = const { Cell::new(false) };
}

fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Path actual del navegador ("/" si no hay window)
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Navegar a `path` sin recargar la página
pub fn push(path: &str) -> Result<(), JsValue> {
    let win = window()?;
    win.history()?
        .push_state_with_url(&JsValue::NULL, "", Some(path))?;
    log::info!("🧭 [NAV] push {}", path);
    notify_location_change(&win)
}

/// Igual que `push` pero sin añadir entrada al historial (p. ej. tras un redirect)
pub fn replace(path: &str) -> Result<(), JsValue> {
    let win = window()?;
    win.history()?
        .replace_state_with_url(&JsValue::NULL, "", Some(path))?;
    notify_location_change(&win)
}

fn notify_location_change(win: &Window) -> Result<(), JsValue> {
    let event = Event::new(LOCATION_CHANGE_EVENT)?;
    win.dispatch_event(&event)?;
    Ok(())
}

/// Reenvía `popstate` (atrás/adelante) como `locationchange`.
/// Se registra una sola vez; llamadas posteriores no hacen nada.
pub fn install_popstate_listener() -> Result<(), JsValue> {
    if POPSTATE_INSTALLED.with(|installed| installed.replace(true)) {
        return Ok(());
    }

    let win = window()?;
    let closure = Closure::wrap(Box::new(move |_e: Event| {
        if let Some(win) = web_sys::window() {
            if let Err(e) = notify_location_change(&win) {
                log::error!("❌ [NAV] Error reenviando popstate: {:?}", e);
            }
        }
    }) as Box<dyn FnMut(Event)>);

    win.add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref())?;
    // Listener global de por vida: se registra una única vez
    closure.forget();

    Ok(())
}
