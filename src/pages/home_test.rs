use super::*;

fn memo(name: &str) -> Memo {
    Memo { name: name.to_owned(), display_time: 1, content: "x".to_owned(), pinned: false }
}

#[test]
fn blank_draft_is_not_saved() {
    assert_eq!(draft_memo(&MemosState::default(), "   \n", 10), None);
}

#[test]
fn draft_is_trimmed_and_timestamped() {
    let memo = draft_memo(&MemosState::default(), "  hello  ", 10).unwrap();
    assert_eq!(memo.content, "hello");
    assert_eq!(memo.display_time, 10);
    assert_eq!(memo.name, "memos/local-1");
    assert!(!memo.pinned);
}

#[test]
fn draft_name_skips_existing_names() {
    let mut state = MemosState::default();
    state.upsert(memo("memos/local-2"));
    state.upsert(memo("memos/local-3"));
    let draft = draft_memo(&state, "next", 10).unwrap();
    assert_eq!(draft.name, "memos/local-4");
}

#[test]
fn newest_draft_sorts_to_top() {
    let mut state = MemosState::default();
    state.upsert(Memo { display_time: 5, ..memo("memos/a") });
    let draft = draft_memo(&state, "fresh", 9).unwrap();
    state.upsert(draft);
    assert_eq!(state.ordered()[0].name, "memos/local-2");
}
