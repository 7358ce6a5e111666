use yew::prelude::*;

use super::RouterLink;
use crate::routes::auth::LOGIN;

#[function_component(NotFoundView)]
pub fn not_found_view() -> Html {
    html! {
        <div class="not-found">
            <h1>{"404"}</h1>
            <p>{"페이지를 찾을 수 없습니다"}</p>
            <RouterLink to={LOGIN}>{"로그인으로 돌아가기"}</RouterLink>
        </div>
    }
}
