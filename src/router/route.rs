// ============================================================================
// ROUTE NODE - Configuración declarativa de rutas (builder)
// ============================================================================

use std::collections::BTreeMap;

use super::page::Page;

/// Slot usado cuando la ruta declara un único componente
pub const DEFAULT_SLOT: &str = "default";

/// Vista(s) de un nodo: un componente principal o varios por slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Views {
    Single(Page),
    Named(BTreeMap<String, Page>),
}

impl Views {
    /// Todas las vistas declaradas, indexadas por slot
    pub fn slots(&self) -> BTreeMap<String, Page> {
        match self {
            Views::Single(page) => BTreeMap::from([(DEFAULT_SLOT.to_string(), *page)]),
            Views::Named(slots) => slots.clone(),
        }
    }
}

/// Destino de una redirección
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Redirect {
    Name(String),
    Path(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteNode {
    pub path: String,
    pub name: Option<String>,
    pub views: Option<Views>,
    pub children: Vec<RouteNode>,
    pub meta: BTreeMap<String, String>,
    pub redirect: Option<Redirect>,
}

impl RouteNode {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            views: None,
            children: Vec::new(),
            meta: BTreeMap::new(),
            redirect: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn component(mut self, page: Page) -> Self {
        self.views = Some(Views::Single(page));
        self
    }

    pub fn components<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = (S, Page)>,
        S: Into<String>,
    {
        let slots = slots
            .into_iter()
            .map(|(slot, page)| (slot.into(), page))
            .collect();
        self.views = Some(Views::Named(slots));
        self
    }

    pub fn meta(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.meta.insert(key.into(), value.into());
        self
    }

    pub fn redirect_to_name(mut self, name: impl Into<String>) -> Self {
        self.redirect = Some(Redirect::Name(name.into()));
        self
    }

    pub fn redirect_to_path(mut self, path: impl Into<String>) -> Self {
        self.redirect = Some(Redirect::Path(path.into()));
        self
    }

    pub fn children<I>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = RouteNode>,
    {
        self.children = children.into_iter().collect();
        self
    }

    /// Etiqueta para mensajes de error: el nombre si existe, si no el path
    pub(crate) fn label(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.path.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_component_lands_in_default_slot() {
        let node = RouteNode::new("/login").component(Page::Login);
        let slots = node.views.unwrap().slots();
        assert_eq!(slots.len(), 1);
        assert_eq!(slots.get(DEFAULT_SLOT), Some(&Page::Login));
    }

    #[test]
    fn named_components_keep_every_slot() {
        let node = RouteNode::new("step/1")
            .components([("side", Page::RegisterSideOne), ("form", Page::RegisterStepOne)]);
        let slots = node.views.unwrap().slots();
        assert_eq!(slots.get("side"), Some(&Page::RegisterSideOne));
        assert_eq!(slots.get("form"), Some(&Page::RegisterStepOne));
        assert!(slots.get(DEFAULT_SLOT).is_none());
    }

    #[test]
    fn label_prefers_name() {
        assert_eq!(RouteNode::new("/a").name("alpha").label(), "alpha");
        assert_eq!(RouteNode::new("/a").label(), "/a");
    }
}
