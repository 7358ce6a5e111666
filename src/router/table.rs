// ============================================================================
// ROUTE TABLE - Árbol inmutable de rutas + resolución path -> cadena de nodos
// ============================================================================
// Se construye una sola vez al arrancar. Toda la validación (nombres, redirects,
// ciclos) ocurre aquí para que resolver nunca falle por configuración.
// ============================================================================

use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::error::{ResolveError, RouteConfigError};
use super::page::Page;
use super::path::{self, Pattern};
use super::route::{Redirect, RouteNode};

/// Nodo aplanado con su path completo
#[derive(Debug)]
struct FlatNode {
    full_path: String,
    name: Option<String>,
    label: String,
    views: BTreeMap<String, Page>,
    meta: BTreeMap<String, String>,
    redirect: Option<Redirect>,
}

/// Entrada enrutable: un nodo hoja (o padre con vista propia) y su cadena de ancestros
#[derive(Debug)]
struct Record {
    pattern: Pattern,
    chain: Vec<usize>,
}

#[derive(Debug)]
struct Inner {
    nodes: Vec<FlatNode>,
    records: Vec<Record>,
    record_of_node: HashMap<usize, usize>,
    by_name: BTreeMap<String, usize>,
}

/// Un nivel de anidamiento de la ruta resuelta
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchedRoute {
    pub path: String,
    pub name: Option<String>,
    pub views: BTreeMap<String, Page>,
    pub meta: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedRoute {
    /// Path pedido (antes de redirecciones)
    pub requested: String,
    /// Path final normalizado
    pub path: String,
    pub name: Option<String>,
    pub params: BTreeMap<String, String>,
    pub redirected_from: Option<String>,
    /// Raíz primero, hoja al final
    pub matched: Vec<MatchedRoute>,
}

impl ResolvedRoute {
    /// Título más profundo declarado en la cadena
    pub fn title(&self) -> Option<&str> {
        self.matched
            .iter()
            .rev()
            .find_map(|m| m.meta.get("title").map(String::as_str))
    }

    pub fn view(&self, depth: usize, slot: &str) -> Option<Page> {
        self.matched.get(depth)?.views.get(slot).copied()
    }
}

#[derive(Debug)]
struct Match {
    record: usize,
    path: String,
    params: BTreeMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    inner: Rc<Inner>,
}

impl PartialEq for RouteTable {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl RouteTable {
    pub fn new(routes: Vec<RouteNode>) -> Result<Self, RouteConfigError> {
        let mut inner = Inner {
            nodes: Vec::new(),
            records: Vec::new(),
            record_of_node: HashMap::new(),
            by_name: BTreeMap::new(),
        };

        for route in &routes {
            flatten(&mut inner, route, "/", &[])?;
        }

        let table = Self {
            inner: Rc::new(inner),
        };
        table.check_redirects()?;

        log::debug!(
            "🧭 [ROUTER] Tabla construida: {} nodos, {} rutas enrutables",
            table.inner.nodes.len(),
            table.inner.records.len()
        );
        Ok(table)
    }

    /// Nombres declarados, en orden alfabético
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.inner.by_name.keys().map(String::as_str)
    }

    pub fn resolve(&self, requested: &str) -> Result<ResolvedRoute, ResolveError> {
        let found = self.match_path(requested)?;
        self.follow_redirects(requested, found)
    }

    pub fn resolve_name(
        &self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<ResolvedRoute, ResolveError> {
        let found = self.match_name(name, params)?;
        let requested = found.path.clone();
        self.follow_redirects(&requested, found)
    }

    /// Path concreto de una ruta con nombre
    pub fn href(
        &self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<String, ResolveError> {
        let node = *self
            .inner
            .by_name
            .get(name)
            .ok_or_else(|| ResolveError::UnknownName(name.to_string()))?;
        Pattern::compile(&self.inner.nodes[node].full_path)
            .fill(params)
            .map_err(|param| ResolveError::MissingParam {
                name: name.to_string(),
                param,
            })
    }

    fn match_path(&self, requested: &str) -> Result<Match, ResolveError> {
        let normalized = path::normalize(requested);
        self.inner
            .records
            .iter()
            .enumerate()
            .find_map(|(index, record)| {
                record.pattern.matches(&normalized).map(|params| Match {
                    record: index,
                    path: normalized.clone(),
                    params,
                })
            })
            .ok_or(ResolveError::NotFound { path: normalized })
    }

    fn match_name(
        &self,
        name: &str,
        params: &BTreeMap<String, String>,
    ) -> Result<Match, ResolveError> {
        let node = *self
            .inner
            .by_name
            .get(name)
            .ok_or_else(|| ResolveError::UnknownName(name.to_string()))?;
        let concrete = self.href(name, params)?;

        match self.inner.record_of_node.get(&node) {
            Some(&record) => Ok(Match {
                record,
                params: self.inner.records[record]
                    .pattern
                    .matches(&concrete)
                    .unwrap_or_default(),
                path: concrete,
            }),
            // Nodo agrupador sin vista propia: se resuelve por su path
            None => self.match_path(&concrete),
        }
    }

    fn follow_redirects(
        &self,
        requested: &str,
        mut found: Match,
    ) -> Result<ResolvedRoute, ResolveError> {
        let mut redirected_from = None;

        // El grafo es acíclico (validado en new), el límite solo acota el bucle
        for _ in 0..=self.inner.nodes.len() {
            let leaf = self.leaf_of(found.record);
            let next = match &leaf.redirect {
                None => return Ok(self.build(requested, found, redirected_from)),
                Some(Redirect::Name(target)) => self.match_name(target, &found.params)?,
                Some(Redirect::Path(target)) => self.match_path(target)?,
            };

            log::debug!("🧭 [ROUTER] Redirect {} -> {}", found.path, next.path);
            redirected_from.get_or_insert_with(|| found.path.clone());
            found = next;
        }

        Err(ResolveError::TooManyRedirects(requested.to_string()))
    }

    fn leaf_index(&self, record: usize) -> usize {
        let chain = &self.inner.records[record].chain;
        chain[chain.len() - 1]
    }

    fn leaf_of(&self, record: usize) -> &FlatNode {
        &self.inner.nodes[self.leaf_index(record)]
    }

    /// Hoja que monta un nodo con nombre (él mismo, o lo que case con su path si es agrupador)
    fn leaf_for_node(&self, node: usize) -> Option<usize> {
        match self.inner.record_of_node.get(&node) {
            Some(_) => Some(node),
            None => self
                .match_path(&self.inner.nodes[node].full_path)
                .ok()
                .map(|m| self.leaf_index(m.record)),
        }
    }

    fn build(&self, requested: &str, found: Match, redirected_from: Option<String>) -> ResolvedRoute {
        let matched: Vec<MatchedRoute> = self.inner.records[found.record]
            .chain
            .iter()
            .map(|&index| {
                let node = &self.inner.nodes[index];
                MatchedRoute {
                    path: node.full_path.clone(),
                    name: node.name.clone(),
                    views: node.views.clone(),
                    meta: node.meta.clone(),
                }
            })
            .collect();

        ResolvedRoute {
            requested: requested.to_string(),
            path: found.path,
            name: matched.last().and_then(|m| m.name.clone()),
            params: found.params,
            redirected_from,
            matched,
        }
    }

    /// Un redirect por nombre rellena el destino con los params del origen:
    /// todos los `:param` del destino deben existir en el origen.
    fn check_redirect_params(&self, source: usize, target: usize) -> Result<(), RouteConfigError> {
        let nodes = &self.inner.nodes;
        let available = Pattern::compile(&nodes[source].full_path);
        let needed = Pattern::compile(&nodes[target].full_path);

        let result = match needed.params().find(|param| !available.params().any(|p| p == *param)) {
            Some(param) => Err(RouteConfigError::MissingRedirectParam {
                route: nodes[source].label.clone(),
                target: nodes[target].label.clone(),
                param: param.to_string(),
            }),
            None => Ok(()),
        };
        result
    }

    /// Comprueba destinos y ciclos del grafo de redirecciones
    fn check_redirects(&self) -> Result<(), RouteConfigError> {
        let nodes = &self.inner.nodes;

        // Cada nodo con redirect apunta exactamente a un nodo hoja
        let mut edges: HashMap<usize, usize> = HashMap::new();
        for (index, node) in nodes.iter().enumerate() {
            let Some(redirect) = &node.redirect else {
                continue;
            };
            let (target, leaf) = match redirect {
                Redirect::Name(name) => {
                    let named = self.inner.by_name.get(name).copied();
                    if let Some(named) = named {
                        self.check_redirect_params(index, named)?;
                    }
                    (name, named.and_then(|node| self.leaf_for_node(node)))
                }
                Redirect::Path(path) => (
                    path,
                    self.match_path(path)
                        .ok()
                        .map(|found| self.leaf_index(found.record)),
                ),
            };
            let leaf =
                leaf.ok_or_else(|| RouteConfigError::UnknownRedirectTarget(target.clone()))?;

            edges.insert(index, leaf);
        }

        #[derive(Clone, Copy, PartialEq)]
        enum Color {
            White,
            Gray,
            Black,
        }

        let mut color = vec![Color::White; nodes.len()];
        for &start in edges.keys() {
            if color[start] != Color::White {
                continue;
            }

            let mut trail: Vec<usize> = Vec::new();
            let mut current = Some(start);
            while let Some(node) = current {
                match color[node] {
                    Color::Black => break,
                    Color::Gray => {
                        let from = trail.iter().position(|&n| n == node).unwrap_or(0);
                        let mut cycle: Vec<String> =
                            trail[from..].iter().map(|&n| nodes[n].label.clone()).collect();
                        cycle.push(nodes[node].label.clone());
                        return Err(RouteConfigError::RedirectCycle(cycle));
                    }
                    Color::White => {
                        color[node] = Color::Gray;
                        trail.push(node);
                        current = edges.get(&node).copied();
                    }
                }
            }

            for node in trail {
                color[node] = Color::Black;
            }
        }

        Ok(())
    }
}

/// Aplana el árbol (hijos antes que el padre) validando cada nodo
fn flatten(
    inner: &mut Inner,
    node: &RouteNode,
    parent_path: &str,
    ancestors: &[usize],
) -> Result<(), RouteConfigError> {
    let full_path = path::join(parent_path, &node.path);
    let label = node.label();

    if node.redirect.is_some() && node.views.is_some() {
        return Err(RouteConfigError::RedirectWithView(label));
    }
    if node.redirect.is_none() && node.views.is_none() && node.children.is_empty() {
        return Err(RouteConfigError::EmptyNode(label));
    }

    let index = inner.nodes.len();
    if let Some(name) = &node.name {
        if inner.by_name.insert(name.clone(), index).is_some() {
            return Err(RouteConfigError::DuplicateName(name.clone()));
        }
    }

    inner.nodes.push(FlatNode {
        full_path: full_path.clone(),
        name: node.name.clone(),
        label,
        views: node.views.as_ref().map(|v| v.slots()).unwrap_or_default(),
        meta: node.meta.clone(),
        redirect: node.redirect.clone(),
    });

    let mut chain = ancestors.to_vec();
    chain.push(index);

    for child in &node.children {
        flatten(inner, child, &full_path, &chain)?;
    }

    // Un padre solo es enrutable por sí mismo si tiene vista o redirect propio
    if node.views.is_some() || node.redirect.is_some() {
        inner.record_of_node.insert(index, inner.records.len());
        inner.records.push(Record {
            pattern: Pattern::compile(&full_path),
            chain,
        });
    }

    Ok(())
}
