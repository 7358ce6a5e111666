pub mod app;
pub mod auth;
pub mod meal_panel;
pub mod not_found;
pub mod router_view;

pub use app::{App, AppProps, CurrentRoute};
pub use meal_panel::MealPanel;
pub use not_found::NotFoundView;
pub use router_view::{RouterLink, RouterView};

use yew::prelude::*;

use crate::router::Page;

/// Componente asociado a cada `Page` de la tabla de rutas
pub fn render_page(page: Page) -> Html {
    match page {
        Page::Login => html! { <auth::LoginView /> },
        Page::Register => html! { <auth::RegisterView /> },
        Page::RegisterStepOne => html! { <auth::RegisterStepOne /> },
        Page::RegisterStepTwo => html! { <auth::RegisterStepTwo /> },
        Page::RegisterStepThree => html! { <auth::RegisterStepThree /> },
        Page::RegisterSideOne => html! { <auth::RegisterSideOne /> },
        Page::RegisterSideTwo => html! { <auth::RegisterSideTwo /> },
        Page::RegisterSideThree => html! { <auth::RegisterSideThree /> },
        Page::NotFound => html! { <NotFoundView /> },
    }
}
