//! Card component for a single memo in the masonry grid.
//!
//! Content is shown as plain text; rich rendering is handled upstream.

use leptos::prelude::*;

use crate::state::memos::Memo;

/// A memo card.
#[component]
pub fn MemoCard(memo: Memo) -> impl IntoView {
    let pinned = memo.pinned;
    let data_name = memo.name.clone();
    view! {
        <article class="memo-card" class:memo-card--pinned=pinned data-name=data_name>
            <header class="memo-card__header">
                <span class="memo-card__name">{memo.name}</span>
                <Show when=move || pinned>
                    <span class="memo-card__pin" title="Pinned">"📌"</span>
                </Show>
            </header>
            <div class="memo-card__content">{memo.content}</div>
        </article>
    }
}
