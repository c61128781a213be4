//! ローディングオーバーレイコンポーネント

use leptos::prelude::*;

#[component]
pub fn LoadingOverlay(visible: Signal<bool>) -> impl IntoView {
    view! {
        <div class="loading-overlay" class:hidden=move || !visible.get()>
            <div class="spinner"></div>
            <p>"正在分析，请稍候..."</p>
        </div>
    }
}
