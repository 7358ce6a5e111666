// ============================================================================
// APP - Componente raíz: ubicación -> ruta resuelta -> vistas por slot
// ============================================================================

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::Event;
use yew::prelude::*;

use super::{MealPanel, RouterView};
use crate::navigation::{self, LOCATION_CHANGE_EVENT};
use crate::router::{ResolveError, ResolvedRoute, RouteTable};
use crate::state::AppState;

const DEFAULT_TITLE: &str = "Meal";

/// Ruta resuelta actual, compartida por contexto con los `RouterView`
#[derive(Clone, PartialEq)]
pub struct CurrentRoute(pub Rc<Result<ResolvedRoute, ResolveError>>);

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub table: RouteTable,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let app_state = use_memo((), |_| AppState::new());
    let path = use_state(navigation::current_path);

    // Escuchar cambios de ubicación (push/replace/popstate)
    {
        let path = path.clone();
        use_effect_with((), move |_| {
            let listener = Closure::wrap(Box::new(move |_e: Event| {
                path.set(navigation::current_path());
            }) as Box<dyn FnMut(Event)>);

            let win = web_sys::window();
            if let Some(win) = &win {
                if let Err(e) = win.add_event_listener_with_callback(
                    LOCATION_CHANGE_EVENT,
                    listener.as_ref().unchecked_ref(),
                ) {
                    log::error!("❌ [APP] No se pudo escuchar {}: {:?}", LOCATION_CHANGE_EVENT, e);
                }
            }

            move || {
                if let Some(win) = win {
                    let _ = win.remove_event_listener_with_callback(
                        LOCATION_CHANGE_EVENT,
                        listener.as_ref().unchecked_ref(),
                    );
                }
            }
        });
    }

    let route = use_memo(((*path).clone(), props.table.clone()), |(path, table)| {
        let resolved = table.resolve(path);
        match &resolved {
            Ok(route) => log::info!("🧭 [ROUTER] {} -> {:?}", path, route.name),
            Err(e) => log::warn!("⚠️ [ROUTER] {}", e),
        }
        resolved
    });

    // Sincronizar la barra de direcciones tras un redirect
    {
        let redirect_to = (*route)
            .as_ref()
            .ok()
            .filter(|r| r.redirected_from.is_some())
            .map(|r| r.path.clone());
        use_effect_with(redirect_to, |redirect_to| {
            if let Some(target) = redirect_to {
                if let Err(e) = navigation::replace(target) {
                    log::error!("❌ [NAV] Error aplicando redirect a {}: {:?}", target, e);
                }
            }
            || ()
        });
    }

    // Título del documento desde meta.title
    {
        let title = (*route)
            .as_ref()
            .ok()
            .and_then(|r| r.title().map(str::to_string));
        use_effect_with(title, |title| {
            if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                document.set_title(title.as_deref().unwrap_or(DEFAULT_TITLE));
            }
            || ()
        });
    }

    html! {
        <ContextProvider<RouteTable> context={props.table.clone()}>
            <ContextProvider<AppState> context={(*app_state).clone()}>
                <ContextProvider<CurrentRoute> context={CurrentRoute(route.clone())}>
                    <main class="app">
                        <RouterView />
                        <MealPanel />
                    </main>
                </ContextProvider<CurrentRoute>>
            </ContextProvider<AppState>>
        </ContextProvider<RouteTable>>
    }
}
