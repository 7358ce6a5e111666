use super::path;
use super::route::RouteNode;

/// Antepone `prefix` a un subárbol de rutas sin tocar el original.
///
/// Los nodos de primer nivel y los descendientes con path absoluto reciben el
/// prefijo; los hijos relativos lo heredan a través de su padre.
pub fn with_prefix(prefix: &str, routes: &[RouteNode]) -> Vec<RouteNode> {
    routes
        .iter()
        .map(|route| prefix_node(prefix, route, true))
        .collect()
}

fn prefix_node(prefix: &str, node: &RouteNode, top_level: bool) -> RouteNode {
    let path = if top_level || node.path.starts_with('/') {
        path::normalize(&format!("{}/{}", prefix, node.path))
    } else {
        node.path.clone()
    };

    RouteNode {
        path,
        name: node.name.clone(),
        views: node.views.clone(),
        children: node
            .children
            .iter()
            .map(|child| prefix_node(prefix, child, false))
            .collect(),
        meta: node.meta.clone(),
        redirect: node.redirect.clone(),
    }
}
