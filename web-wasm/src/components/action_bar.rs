//! 操作バーコンポーネント（追加・枚数表示・解析）

use leptos::prelude::*;

fn analyze_label(is_loading: bool) -> &'static str {
    if is_loading { "分析中..." } else { "开始分析" }
}

#[component]
pub fn ActionBar<FA, FN>(
    count: Signal<usize>,
    can_submit: Signal<bool>,
    is_loading: Signal<bool>,
    on_add_more: FA,
    on_analyze: FN,
) -> impl IntoView
where
    FA: Fn(()) + 'static + Clone,
    FN: Fn(()) + 'static + Clone,
{
    view! {
        <div class="preview-actions">
            <p class="image-count">
                "已选择 "<span>{move || count.get()}</span>" 张图片"
            </p>

            <button
                class="btn btn-secondary"
                disabled=move || is_loading.get()
                on:click={
                    let on_add_more = on_add_more.clone();
                    move |_| on_add_more(())
                }
            >
                "添加更多"
            </button>

            <button
                class="btn btn-primary"
                disabled=move || !can_submit.get()
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || analyze_label(is_loading.get())}
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analyze_label() {
        assert_eq!(analyze_label(false), "开始分析");
        assert_eq!(analyze_label(true), "分析中...");
    }
}
