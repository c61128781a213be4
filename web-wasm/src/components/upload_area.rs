//! アップロードエリアコンポーネント

use leptos::prelude::*;
use web_sys::{DragEvent, HtmlInputElement};
use crate::app::{collect_files, BrowserImage};

/// ドラッグ中かどうかでクラスを切り替える
fn area_class(is_dragover: bool) -> &'static str {
    if is_dragover {
        "upload-area drag-over"
    } else {
        "upload-area"
    }
}

#[component]
pub fn UploadArea<F, B>(
    on_files: F,
    on_browse: B,
) -> impl IntoView
where
    F: Fn(Vec<BrowserImage>) + 'static + Clone,
    B: Fn(()) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    // ブラウザ既定のドラッグ動作（ファイルを開く）を止める
    let suppress = |ev: &DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let on_drop = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(false);

        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            on_files(collect_files(&files));
        }
    };

    let on_dragenter = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(true);
    };

    let on_dragover = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(true);
    };

    let on_dragleave = move |ev: DragEvent| {
        suppress(&ev);
        set_is_dragover.set(false);
    };

    view! {
        <div
            class=move || area_class(is_dragover.get())
            on:drop=on_drop
            on:dragenter=on_dragenter
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click={
                let on_browse = on_browse.clone();
                move |_| on_browse(())
            }
        >
            <div class="upload-icon">"📷"</div>
            <p>"拖拽图片到这里，或点击选择"</p>
            <p class="text-muted">"至少需要5张照片"</p>
            <button
                class="btn btn-primary"
                on:click={
                    let on_browse = on_browse.clone();
                    move |ev| {
                        // エリア側のクリックで二重に開かない
                        ev.stop_propagation();
                        on_browse(())
                    }
                }
            >
                "选择图片"
            </button>
        </div>
    }
}

/// 非表示のファイル選択input（複数ボタンから共有）
#[component]
pub fn FileInput<F>(
    input_ref: NodeRef<leptos::html::Input>,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<BrowserImage>) + 'static + Clone,
{
    let on_change = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            on_files(collect_files(&files));
        }
        // 同じファイルを続けて選んでも change が発火するように
        input.set_value("");
    };

    view! {
        <input
            node_ref=input_ref
            type="file"
            accept="image/*"
            multiple=true
            class="hidden"
            on:change=on_change
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_class() {
        assert_eq!(area_class(false), "upload-area");
        assert_eq!(area_class(true), "upload-area drag-over");
    }
}
