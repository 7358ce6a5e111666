use yew::prelude::*;

use crate::routes::auth::{LOGIN, REGISTER_STEP_1, REGISTER_STEP_2, REGISTER_STEP_3};
use crate::views::RouterLink;

#[derive(Properties, PartialEq)]
struct StepProps {
    title: AttrValue,
    #[prop_or_default]
    back: Option<AttrValue>,
    next: AttrValue,
    next_label: AttrValue,
    #[prop_or_default]
    children: Children,
}

#[function_component(Step)]
fn step(props: &StepProps) -> Html {
    let on_submit = Callback::from(|e: SubmitEvent| e.prevent_default());

    html! {
        <form class="form-section" onsubmit={on_submit}>
            <h3 class="section-title">{ props.title.clone() }</h3>
            { for props.children.iter() }
            <div class="step-actions">
                if let Some(back) = props.back.clone() {
                    <RouterLink to={back} classes={classes!("btn-secondary")}>{"이전"}</RouterLink>
                }
                <RouterLink to={props.next.clone()} classes={classes!("btn-login")}>
                    { props.next_label.clone() }
                </RouterLink>
            </div>
        </form>
    }
}

#[function_component(RegisterStepOne)]
pub fn register_step_one() -> Html {
    html! {
        <Step title="약관 동의" next={REGISTER_STEP_2} next_label="다음">
            <label class="checkbox">
                <input type="checkbox" name="terms" />{"이용약관에 동의합니다"}
            </label>
        </Step>
    }
}

#[function_component(RegisterStepTwo)]
pub fn register_step_two() -> Html {
    html! {
        <Step title="정보 입력" back={REGISTER_STEP_1} next={REGISTER_STEP_3} next_label="다음">
            <div class="form-group">
                <label for="register-id">{"아이디"}</label>
                <input type="text" id="register-id" name="register-id" />
            </div>
            <div class="form-group">
                <label for="register-password">{"비밀번호"}</label>
                <input type="password" id="register-password" name="register-password" />
            </div>
        </Step>
    }
}

#[function_component(RegisterStepThree)]
pub fn register_step_three() -> Html {
    html! {
        <Step title="가입 완료" back={REGISTER_STEP_2} next={LOGIN} next_label="로그인하러 가기">
            <p>{"가입이 완료되었습니다"}</p>
        </Step>
    }
}
