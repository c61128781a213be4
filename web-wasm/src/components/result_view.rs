//! 解析結果コンポーネント

use leptos::prelude::*;
use profile_lens_common::report::{REANALYZE_LABEL, SHARE_LABEL};
use profile_lens_common::{AnalysisReport, SectionStyle};

#[component]
pub fn ResultView<FR, FS>(
    report: AnalysisReport,
    on_reanalyze: FR,
    on_share: FS,
) -> impl IntoView
where
    FR: Fn(()) + 'static + Clone,
    FS: Fn(()) + 'static + Clone,
{
    let cards = report
        .sections()
        .into_iter()
        .map(|section| {
            let body = match section.style {
                SectionStyle::Tags => view! {
                    <div class="tag-container">
                        {section.items.iter().map(|tag| view! { <span class="tag">{tag.clone()}</span> }).collect_view()}
                    </div>
                }
                .into_any(),
                SectionStyle::List => view! {
                    <ul class="suggestion-list">
                        {section.items.iter().map(|item| view! { <li>{item.clone()}</li> }).collect_view()}
                    </ul>
                }
                .into_any(),
            };

            view! {
                <div class="result-card" data-section=section.key data-style=section.style.as_str()>
                    <h3>{section.title}</h3>
                    {body}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="result-view">
            {cards}
            <div class="result-actions">
                <button
                    class="btn btn-secondary"
                    on:click={
                        let on_reanalyze = on_reanalyze.clone();
                        move |_| on_reanalyze(())
                    }
                >
                    {REANALYZE_LABEL}
                </button>
                <button
                    class="btn btn-primary"
                    on:click={
                        let on_share = on_share.clone();
                        move |_| on_share(())
                    }
                >
                    {SHARE_LABEL}
                </button>
            </div>
        </div>
    }
}
