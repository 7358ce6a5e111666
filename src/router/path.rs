// Helpers de paths: normalización, unión padre/hijo y patrones con `:param`

use std::collections::BTreeMap;

/// Quita query y fragmento, colapsa barras repetidas y la barra final.
pub fn normalize(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    if segments.is_empty() {
        "/".to_string()
    } else {
        format!("/{}", segments.join("/"))
    }
}

/// Path completo de un hijo: absoluto si empieza con `/`, relativo al padre si no.
pub fn join(parent: &str, child: &str) -> String {
    if child.starts_with('/') {
        normalize(child)
    } else if child.is_empty() {
        normalize(parent)
    } else {
        normalize(&format!("{}/{}", parent, child))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
}

/// Patrón compilado a partir de un path completo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    segments: Vec<Segment>,
}

impl Pattern {
    pub fn compile(full_path: &str) -> Self {
        let segments = normalize(full_path)
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(param) => Segment::Param(param.to_string()),
                None => Segment::Static(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Nombres de los `:param`, en orden de aparición
    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    /// `path` debe venir normalizado. Devuelve los parámetros capturados.
    pub fn matches(&self, path: &str) -> Option<BTreeMap<String, String>> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = BTreeMap::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Static(expected) if expected == part => {}
                Segment::Static(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    /// Construye el path concreto. Devuelve el nombre del primer parámetro ausente si falta alguno.
    pub fn fill(&self, params: &BTreeMap<String, String>) -> Result<String, String> {
        let mut parts = Vec::with_capacity(self.segments.len());
        for segment in &self.segments {
            match segment {
                Segment::Static(s) => parts.push(s.as_str()),
                Segment::Param(name) => match params.get(name) {
                    Some(value) => parts.push(value.as_str()),
                    None => return Err(name.clone()),
                },
            }
        }
        Ok(normalize(&parts.join("/")))
    }
}
