//! Home page: memo editor pinned above the masonry memo grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Memo data arrives through `MemosState`; this page orders it for display,
//! hands it to `MasonryView`, and keeps new local drafts adjacent to the
//! editor by inserting them at the top of the list.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::masonry_view::MasonryView;
use crate::components::memo_card::MemoCard;
use crate::state::memos::{Memo, MemosState};
use crate::state::view::ViewState;

/// Build a memo for a locally saved draft with a name unused in `state`.
#[must_use]
pub fn draft_memo(state: &MemosState, content: &str, now_ms: i64) -> Option<Memo> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    let mut n = state.items.len() + 1;
    let name = loop {
        let candidate = format!("memos/local-{n}");
        if !state.items.iter().any(|m| m.name == candidate) {
            break candidate;
        }
        n += 1;
    };
    Some(Memo { name, display_time: now_ms, content: content.to_owned(), pinned: false })
}

fn now_ms() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation)]
        {
            js_sys::Date::now() as i64
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}

/// Home page: editor plus memo grid.
#[component]
pub fn HomePage() -> impl IntoView {
    let memos = expect_context::<RwSignal<MemosState>>();
    let view_state = expect_context::<RwSignal<ViewState>>();
    let draft = RwSignal::new(String::new());

    let items = Signal::derive(move || memos.with(MemosState::ordered));
    let list_mode = Signal::derive(move || view_state.get().list_mode);

    let on_save = move |_: leptos::ev::MouseEvent| {
        let content = draft.get_untracked();
        let saved = memos.try_update(|state| {
            let memo = draft_memo(state, &content, now_ms())?;
            state.upsert(memo);
            Some(())
        });
        if saved.flatten().is_some() {
            draft.set(String::new());
        }
    };

    view! {
        <div class="home-page">
            <header class="home-page__header toolbar">
                <span class="toolbar__title">"Memos"</span>
                <span class="toolbar__spacer"></span>
                <button
                    class="btn toolbar__list-toggle"
                    on:click=move |_| view_state.update(|v| {
                        v.toggle_list_mode();
                    })
                    title="Toggle list mode"
                >
                    {move || if list_mode.get() { "Grid" } else { "List" }}
                </button>
            </header>

            <Show when=move || memos.with(|m| m.error.is_some())>
                <p class="home-page__error">{move || memos.with(|m| m.error.clone().unwrap_or_default())}</p>
            </Show>

            <MasonryView
                items=items
                list_mode=list_mode
                prefix=move || {
                    view! {
                        <div class="memo-editor">
                            <textarea
                                class="memo-editor__input"
                                placeholder="Any thoughts..."
                                prop:value=move || draft.get()
                                on:input=move |ev| draft.set(event_target_value(&ev))
                            ></textarea>
                            <button class="btn memo-editor__save" on:click=on_save>
                                "Save"
                            </button>
                        </div>
                    }
                }
                renderer=|memo: Memo| view! { <MemoCard memo/> }
            />
        </div>
    }
}
