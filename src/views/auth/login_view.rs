use yew::prelude::*;

use crate::routes::auth::REGISTER;
use crate::views::RouterLink;

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let on_submit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        // La autenticación vive fuera de este cliente
        log::info!("🔐 [LOGIN] Formulario enviado");
    });

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <h1>{"로그인"}</h1>
                </div>

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="username">{"아이디"}</label>
                        <input type="text" id="username" name="username" />
                    </div>
                    <div class="form-group">
                        <label for="password">{"비밀번호"}</label>
                        <input type="password" id="password" name="password" />
                    </div>

                    <button type="submit" class="btn-login">
                        <span class="btn-text">{"로그인"}</span>
                    </button>
                </form>

                <div class="login-footer">
                    <RouterLink to={REGISTER} classes={classes!("link")}>{"회원가입"}</RouterLink>
                </div>
            </div>
        </div>
    }
}
