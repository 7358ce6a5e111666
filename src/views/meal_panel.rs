use yew::prelude::*;

use crate::services::ApiClient;
use crate::state::{AppState, MealPhase, MealStore};

/// Panel "오늘의 식단": lee el módulo meal y dispara el fetch
#[function_component(MealPanel)]
pub fn meal_panel() -> Html {
    let store = use_context::<AppState>()
        .map(|state| state.meal)
        .unwrap_or_default();
    let force_update = use_force_update();

    // Re-render en cada commit del store
    {
        let store = store.clone();
        use_effect_with(store.clone(), move |_| {
            let id = store.subscribe(move || force_update.force_update());
            move || store.unsubscribe(id)
        });
    }

    // Primer fetch al montar
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            if !store.is_fetched() && !store.is_pending() {
                spawn_fetch(store);
            }
            || ()
        });
    }

    let on_fetch = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| spawn_fetch(store.clone()))
    };

    let state = store.state();

    let status = match state.phase() {
        MealPhase::Idle => html! { <p class="meal-status">{"식단 정보가 없습니다"}</p> },
        MealPhase::Pending => html! { <p class="meal-status pending">{"불러오는 중..."}</p> },
        MealPhase::Fetched => html! {},
        MealPhase::Failed => html! {
            <p class="meal-status error">
                { format!("불러오기 실패: {}", state.error.clone().unwrap_or_default()) }
            </p>
        },
    };

    let rows = state
        .meal()
        .map(|meal| {
            html! {
                <ul class="meal-list">
                    <li><span class="meal-label">{"아침"}</span>{ meal.breakfast }</li>
                    <li><span class="meal-label">{"점심"}</span>{ meal.lunch }</li>
                    <li><span class="meal-label">{"저녁"}</span>{ meal.dinner }</li>
                    <li><span class="meal-label">{"간식"}</span>{ meal.nosh }</li>
                </ul>
            }
        })
        .unwrap_or_default();

    html! {
        <aside class="meal-panel">
            <h2>{"오늘의 식단"}</h2>
            { status }
            { rows }
            <button class="btn-refresh" onclick={on_fetch} disabled={state.pending}>
                {"새로고침"}
            </button>
        </aside>
    }
}

fn spawn_fetch(store: MealStore) {
    wasm_bindgen_futures::spawn_local(async move {
        let api = ApiClient::new();
        // El resultado ya queda en el store; la vista lo lee de ahí
        let _ = store.fetch_meal(&api).await;
    });
}
