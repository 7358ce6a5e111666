use meal_pwa::config::CONFIG;
use meal_pwa::navigation;
use meal_pwa::routes;
use meal_pwa::views::{App, AppProps};

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    log::info!("🚀 Meal PWA starting ({})...", CONFIG.environment);

    // Tabla de rutas inválida = no arrancar
    let table = match routes::build_table() {
        Ok(table) => table,
        Err(e) => {
            log::error!("❌ [ROUTER] Configuración de rutas inválida: {}", e);
            return;
        }
    };

    if let Err(e) = navigation::install_popstate_listener() {
        log::error!("❌ [NAV] No se pudo instalar popstate: {:?}", e);
    }

    yew::Renderer::<App>::with_props(AppProps { table }).render();
}
