//! メインアプリケーションコンポーネント

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::FileList;
use profile_lens_common::{FileId, ImageSource, UploadWorkflow, ViewState};
use crate::api::analyze::{self, ENDPOINT};
use crate::components::{
    action_bar::ActionBar,
    header::Header,
    loading_overlay::LoadingOverlay,
    preview_grid::PreviewGrid,
    result_view::ResultView,
    upload_area::{FileInput, UploadArea},
};

/// ワークフローのシグナル（web_sys::File は Send でないためローカル保持）
pub type WorkflowSignal = RwSignal<UploadWorkflow<BrowserImage>, LocalStorage>;

/// ブラウザで選択されたファイル
#[derive(Clone, Debug)]
pub struct BrowserImage {
    file: web_sys::File,
    pub file_name: String,
    pub mime: String,
}

impl BrowserImage {
    pub fn new(file: web_sys::File) -> Self {
        Self {
            file_name: file.name(),
            mime: file.type_(),
            file,
        }
    }

    pub fn file(&self) -> &web_sys::File {
        &self.file
    }
}

impl ImageSource for BrowserImage {
    fn name(&self) -> &str {
        &self.file_name
    }

    fn mime_type(&self) -> &str {
        &self.mime
    }
}

/// FileList → BrowserImage（絞り込みはワークフロー側）
pub fn collect_files(list: &FileList) -> Vec<BrowserImage> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(BrowserImage::new)
        .collect()
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    // アプリケーション状態
    let workflow: WorkflowSignal = RwSignal::new_local(UploadWorkflow::new());
    let file_input = NodeRef::<leptos::html::Input>::new();

    let view_state = move || workflow.with(|w| w.view_state());

    // ファイル取り込みハンドラ（選択・ドロップ共通）
    let on_files = move |files: Vec<BrowserImage>| {
        let accepted = workflow
            .try_update(|w| {
                w.intake(files)
                    .into_iter()
                    .filter_map(|id| w.file(id).map(|f| (id, f.file().clone())))
                    .collect::<Vec<_>>()
            })
            .unwrap_or_default();

        for (id, file) in accepted {
            spawn_preview(workflow, id, file);
        }
    };

    // ファイル選択ダイアログ
    let on_browse = move |_: ()| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    // 削除ハンドラ（位置はクリック時点で解決）
    let on_delete = move |id: FileId| {
        workflow.update(|w| {
            w.remove_by_id(id);
        });
    };

    // 解析開始ハンドラ
    let on_analyze = move |_: ()| {
        let prepared = workflow.try_update(|w| {
            w.begin_submission()
                .map(|submission| analyze::build_form_data(&submission))
        });

        let form = match prepared {
            Some(Ok(form)) => form,
            Some(Err(e)) => {
                gloo::dialogs::alert(&e.user_message());
                return;
            }
            None => return,
        };

        spawn_local(async move {
            let outcome = analyze::analyze(ENDPOINT, form).await;
            // 成功・失敗どちらでもローディングを解除
            if let Some(Err(e)) = workflow.try_update(|w| w.finish_submission(outcome)) {
                gloo::dialogs::alert(&e.user_message());
            }
        });
    };

    // 再分析ハンドラ
    let on_reanalyze = move |_: ()| {
        workflow.update(|w| w.reset());
    };

    // 共有ハンドラ（未実装）
    let on_share = move |_: ()| {
        let message = workflow.with(|w| w.share_message());
        gloo::dialogs::alert(message);
    };

    let slots = Signal::derive(move || workflow.with(|w| w.preview_slots()));
    let count = Signal::derive(move || workflow.with(|w| w.count()));
    let can_submit = Signal::derive(move || workflow.with(|w| w.can_submit()));
    let is_loading = Signal::derive(move || workflow.with(|w| w.is_loading()));

    view! {
        <div class="container" data-view=move || view_state().as_str()>
            <Header />

            <FileInput input_ref=file_input on_files=on_files />

            <main class="main-content" class:hidden=move || view_state() == ViewState::Result>
                <section class="upload-section" class:hidden=move || view_state() != ViewState::Upload>
                    <UploadArea on_files=on_files on_browse=on_browse />
                </section>

                <section class="preview-section" class:hidden=move || view_state() != ViewState::Preview>
                    <PreviewGrid slots=slots on_delete=on_delete />
                    <ActionBar
                        count=count
                        can_submit=can_submit
                        is_loading=is_loading
                        on_add_more=on_browse
                        on_analyze=on_analyze
                    />
                </section>
            </main>

            <section class="result-section" class:hidden=move || view_state() != ViewState::Result>
                {move || {
                    workflow.with(|w| w.report().cloned()).map(|report| view! {
                        <ResultView report=report on_reanalyze=on_reanalyze on_share=on_share />
                    })
                }}
            </section>

            <LoadingOverlay visible=is_loading />
        </div>
    }
}

/// 1ファイル分のサムネイル読込を起動
///
/// 完了順は問わない。削除済みファイルの結果は attach_preview 側で捨てられる。
fn spawn_preview(workflow: WorkflowSignal, id: FileId, file: web_sys::File) {
    spawn_local(async move {
        let blob = gloo::file::File::from(file);
        match gloo::file::futures::read_as_data_url(&blob).await {
            Ok(data_url) => {
                let applied = workflow
                    .try_update(|w| w.attach_preview(id, data_url))
                    .unwrap_or(false);
                if !applied {
                    gloo::console::debug!(format!("stale preview dropped: {}", id));
                }
            }
            Err(e) => {
                gloo::console::error!(format!("preview read failed ({}): {}", blob.name(), e));
            }
        }
    });
}

#[cfg(all(target_arch = "wasm32", test))]
pub(crate) mod wasm_tests {
    use super::*;
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    /// テスト用の File を作る
    pub(crate) fn browser_file(name: &str, mime: &str) -> web_sys::File {
        let parts = js_sys::Array::of1(&JsValue::from_str("dummy"));
        let options = web_sys::FilePropertyBag::new();
        options.set_type(mime);
        web_sys::File::new_with_str_sequence_and_options(&parts, name, &options)
            .expect("File construction failed")
    }

    fn file_list(files: &[web_sys::File]) -> FileList {
        let transfer = web_sys::DataTransfer::new().expect("DataTransfer construction failed");
        for file in files {
            transfer.items().add_with_file(file).expect("add file failed");
        }
        transfer.files().expect("no FileList")
    }

    #[wasm_bindgen_test]
    fn wasm_collect_files_keeps_order_without_filtering() {
        let list = file_list(&[
            browser_file("b.jpg", "image/jpeg"),
            browser_file("notes.txt", "text/plain"),
            browser_file("a.png", "image/png"),
        ]);

        let files = collect_files(&list);
        let names: Vec<&str> = files.iter().map(|f| f.name()).collect();
        assert_eq!(names, vec!["b.jpg", "notes.txt", "a.png"]);
        assert_eq!(files[1].mime_type(), "text/plain");

        let mut workflow = UploadWorkflow::new();
        assert_eq!(workflow.intake(files).len(), 2);
        assert_eq!(workflow.view_state(), ViewState::Preview);
    }
}
