use yew::prelude::*;

fn side(step: u8, text: &'static str) -> Html {
    html! {
        <div class="side-panel">
            <span class="side-step">{ format!("STEP {}/3", step) }</span>
            <p>{ text }</p>
        </div>
    }
}

#[function_component(RegisterSideOne)]
pub fn register_side_one() -> Html {
    side(1, "서비스 이용약관을 확인해 주세요")
}

#[function_component(RegisterSideTwo)]
pub fn register_side_two() -> Html {
    side(2, "로그인에 사용할 정보를 입력해 주세요")
}

#[function_component(RegisterSideThree)]
pub fn register_side_three() -> Html {
    side(3, "거의 다 됐어요")
}
