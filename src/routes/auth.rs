use crate::router::{with_prefix, Page, RouteNode};

pub const LOGIN: &str = "login";
pub const REGISTER: &str = "register";
pub const REGISTER_STEP_1: &str = "register/step/1";
pub const REGISTER_STEP_2: &str = "register/step/2";
pub const REGISTER_STEP_3: &str = "register/step/3";

/// Rutas de autenticación bajo `/auth`: login y registro en tres pasos
pub fn routes() -> Vec<RouteNode> {
    with_prefix(
        "/auth",
        &[
            RouteNode::new("/login")
                .name(LOGIN)
                .component(Page::Login)
                .meta("title", "로그인"),
            RouteNode::new("/register")
                .component(Page::Register)
                .children([
                    RouteNode::new("")
                        .name(REGISTER)
                        .redirect_to_name(REGISTER_STEP_1),
                    RouteNode::new("step/1")
                        .name(REGISTER_STEP_1)
                        .components([("side", Page::RegisterSideOne), ("form", Page::RegisterStepOne)])
                        .meta("title", "회원가입"),
                    RouteNode::new("step/2")
                        .name(REGISTER_STEP_2)
                        .components([("side", Page::RegisterSideTwo), ("form", Page::RegisterStepTwo)])
                        .meta("title", "회원가입"),
                    RouteNode::new("step/3")
                        .name(REGISTER_STEP_3)
                        .components([
                            ("side", Page::RegisterSideThree),
                            ("form", Page::RegisterStepThree),
                        ]),
                ]),
        ],
    )
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::router::{ResolveError, RouteTable, DEFAULT_SLOT};

    fn table() -> RouteTable {
        RouteTable::new(routes()).unwrap()
    }

    #[test]
    fn login_is_a_single_view_with_title() {
        let route = table().resolve("/auth/login").unwrap();
        assert_eq!(route.matched.len(), 1);
        assert_eq!(route.view(0, DEFAULT_SLOT), Some(Page::Login));
        assert_eq!(route.title(), Some("로그인"));
        assert_eq!(route.name.as_deref(), Some(LOGIN));
    }

    #[test]
    fn register_steps_fill_side_and_form() {
        let table = table();
        let expected = [
            ("/auth/register/step/1", Page::RegisterSideOne, Page::RegisterStepOne),
            ("/auth/register/step/2", Page::RegisterSideTwo, Page::RegisterStepTwo),
            ("/auth/register/step/3", Page::RegisterSideThree, Page::RegisterStepThree),
        ];

        for (path, side, form) in expected {
            let route = table.resolve(path).unwrap();
            assert_eq!(route.matched.len(), 2, "{path}");
            assert_eq!(route.view(0, DEFAULT_SLOT), Some(Page::Register));
            assert_eq!(route.view(1, "side"), Some(side));
            assert_eq!(route.view(1, "form"), Some(form));
            assert_eq!(route.matched[1].views.len(), 2);
        }
    }

    #[test]
    fn step_three_has_no_title() {
        let route = table().resolve("/auth/register/step/3").unwrap();
        assert_eq!(route.title(), None);
        assert_eq!(table().resolve("/auth/register/step/2").unwrap().title(), Some("회원가입"));
    }

    #[test]
    fn bare_register_redirects_to_first_step() {
        for path in ["/auth/register", "/auth/register/", "/auth/register?ref=home"] {
            let route = table().resolve(path).unwrap();
            assert_eq!(route.path, "/auth/register/step/1");
            assert_eq!(route.name.as_deref(), Some(REGISTER_STEP_1));
            assert_eq!(route.redirected_from.as_deref(), Some("/auth/register"));
        }

        let by_name = table().resolve_name(REGISTER, &BTreeMap::new()).unwrap();
        assert_eq!(by_name.path, "/auth/register/step/1");
    }

    #[test]
    fn every_named_route_resolves_one_node_per_level() {
        let table = table();
        for name in table.names() {
            let route = table.resolve_name(name, &BTreeMap::new()).unwrap();
            let expected_depth = if route.path.starts_with("/auth/register/") { 2 } else { 1 };

            assert_eq!(route.matched.len(), expected_depth, "{name}");
            for level in &route.matched {
                assert!(!level.views.is_empty(), "{name} has an empty level");
            }
        }
    }

    #[test]
    fn hrefs_for_navigation() {
        let table = table();
        let none = BTreeMap::new();
        assert_eq!(table.href(LOGIN, &none).unwrap(), "/auth/login");
        assert_eq!(table.href(REGISTER, &none).unwrap(), "/auth/register");
        assert_eq!(table.href(REGISTER_STEP_2, &none).unwrap(), "/auth/register/step/2");
    }

    #[test]
    fn paths_outside_auth_are_not_found() {
        let table = table();
        for path in ["/", "/login", "/auth", "/auth/register/step/4"] {
            assert!(matches!(table.resolve(path), Err(ResolveError::NotFound { .. })), "{path}");
        }
    }
}
