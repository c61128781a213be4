//! ヘッダーコンポーネント

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <h1>"Profile Lens - 照片性格分析"</h1>
            <p class="text-muted">"上传至少5张照片，生成性格、兴趣与约会建议"</p>
        </header>
    }
}
