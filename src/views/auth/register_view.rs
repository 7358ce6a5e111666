use yew::prelude::*;

use crate::routes::auth::LOGIN;
use crate::views::{RouterLink, RouterView};

/// Contenedor del asistente: panel lateral + formulario del paso actual
#[function_component(RegisterView)]
pub fn register_view() -> Html {
    html! {
        <div class="login-screen">
            <div class="login-container register-container">
                <div class="login-header">
                    <RouterLink to={LOGIN} classes={classes!("btn-back")}>{"← 로그인"}</RouterLink>
                    <h1>{"회원가입"}</h1>
                </div>

                <div class="register-layout">
                    <aside class="register-side">
                        <RouterView depth={1} name="side" />
                    </aside>
                    <section class="register-form">
                        <RouterView depth={1} name="form" />
                    </section>
                </div>
            </div>
        </div>
    }
}
