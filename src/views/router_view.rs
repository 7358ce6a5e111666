use std::collections::BTreeMap;

use yew::prelude::*;

use super::{render_page, CurrentRoute};
use crate::navigation;
use crate::router::{Page, RouteTable, DEFAULT_SLOT};

#[derive(Properties, PartialEq)]
pub struct RouterViewProps {
    /// Nivel de anidamiento (0 = raíz)
    #[prop_or_default]
    pub depth: usize,
    #[prop_or(AttrValue::Static(DEFAULT_SLOT))]
    pub name: AttrValue,
}

/// Monta la vista del slot `name` en el nivel `depth` de la ruta actual.
/// Slots no declarados quedan vacíos.
#[function_component(RouterView)]
pub fn router_view(props: &RouterViewProps) -> Html {
    let Some(current) = use_context::<CurrentRoute>() else {
        return html! {};
    };

    match current.0.as_ref() {
        Ok(route) => route
            .view(props.depth, props.name.as_str())
            .map(render_page)
            .unwrap_or_default(),
        Err(_) if props.depth == 0 && props.name.as_str() == DEFAULT_SLOT => {
            render_page(Page::NotFound)
        }
        Err(_) => html! {},
    }
}

#[derive(Properties, PartialEq)]
pub struct RouterLinkProps {
    /// Nombre de la ruta destino
    pub to: AttrValue,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(RouterLink)]
pub fn router_link(props: &RouterLinkProps) -> Html {
    let table = use_context::<RouteTable>();

    let href = table
        .and_then(|table| match table.href(&props.to, &BTreeMap::new()) {
            Ok(href) => Some(href),
            Err(e) => {
                log::warn!("⚠️ [ROUTER] Link inválido: {}", e);
                None
            }
        })
        .unwrap_or_else(|| "#".to_string());

    let onclick = {
        let href = href.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            if let Err(err) = navigation::push(&href) {
                log::error!("❌ [NAV] Error navegando a {}: {:?}", href, err);
            }
        })
    };

    html! {
        <a class={props.classes.clone()} {href} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
