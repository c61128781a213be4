//! プレビューグリッドコンポーネント

use leptos::prelude::*;
use profile_lens_common::{FileId, PreviewSlot};

#[component]
pub fn PreviewGrid<FD>(
    slots: Signal<Vec<PreviewSlot>>,
    on_delete: FD,
) -> impl IntoView
where
    FD: Fn(FileId) + 'static + Clone + Send,
{
    view! {
        <div class="preview-container">
            <For
                each=move || slots.get()
                // サムネイル到着で枠を描き直す
                key=|slot| (slot.id, slot.thumbnail.is_some())
                children=move |slot| {
                    let on_delete = on_delete.clone();
                    view! { <PreviewCard preview_slot=slot on_delete=on_delete /> }
                }
            />
        </div>
    }
}

#[component]
fn PreviewCard<FD>(
    preview_slot: PreviewSlot,
    on_delete: FD,
) -> impl IntoView
where
    FD: Fn(FileId) + 'static + Clone + Send,
{
    let slot = preview_slot;
    let id = slot.id;
    let image = match slot.thumbnail {
        Some(data_url) => view! { <img src=data_url alt=slot.name.clone() /> }.into_any(),
        None => view! { <div class="preview-placeholder" title=slot.name.clone()></div> }.into_any(),
    };

    view! {
        <div class="preview-item" data-file-id=id.to_string()>
            {image}
            <button
                class="delete-btn"
                on:click=move |_| on_delete(id)
            >
                "×"
            </button>
        </div>
    }
}
