//! Adaptive masonry grid for memo cards.
//!
//! ARCHITECTURE
//! ============
//! `MasonryView` owns one `masonry::coordinator::LayoutCoordinator` for the
//! lifetime of the rendered list and republishes its `Distribution` through a
//! signal. Columns read that signal and resolve their items from the
//! coordinator, so a column never pairs a fresh distribution with a stale item
//! list. Every rendered cell (and the prefix element) reports its height back
//! through a `HeightReporter` wired to a `ResizeObserver`; those reports are
//! debounced by the coordinator before the grid re-packs.
//!
//! Each column is its own keyed `<For>`. A re-pack that moves a card to a
//! different column unmounts it from the old column and mounts it in the new
//! one, so `renderer` runs again and a fresh `HeightReporter` measures it.
//! Cards that stay in their column are left mounted.

#[cfg(test)]
#[path = "masonry_view_test.rs"]
mod masonry_view_test;

use leptos::prelude::*;
use masonry::coordinator::{LayoutChange, LayoutCoordinator};
use masonry::distribute::Distribution;
use masonry::item::MasonryItem;

#[cfg(feature = "hydrate")]
use std::rc::Rc;

#[cfg(feature = "hydrate")]
use masonry::observe::HeightReporter;

#[cfg(feature = "hydrate")]
use crate::util::dom_observer::{DomSizeObserver, offset_width};
use crate::util::timeout::TimeoutScheduler;
use crate::util::ui_persistence::load_masonry_config;

type Coordinator<T> = LayoutCoordinator<T, TimeoutScheduler>;

/// Copyable handle to one grid's layout state.
struct Layout<T: MasonryItem + 'static> {
    coordinator: StoredValue<Option<Coordinator<T>>, LocalStorage>,
    distribution: RwSignal<Distribution>,
}

impl<T: MasonryItem + 'static> Clone for Layout<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: MasonryItem + 'static> Copy for Layout<T> {}

impl<T: MasonryItem + 'static> Layout<T> {
    /// Feed one event to the coordinator and publish any new distribution.
    fn apply(self, event: impl FnOnce(&mut Coordinator<T>) -> LayoutChange) {
        let mut published = None;
        self.coordinator.update_value(|slot| {
            if let Some(coordinator) = slot.as_mut()
                && event(coordinator) == LayoutChange::Redistributed
            {
                published = Some(coordinator.distribution().clone());
            }
        });
        if let Some(distribution) = published {
            self.distribution.set(distribution);
        }
    }

    /// Items currently assigned to `column`; tracks the distribution signal.
    fn column_items(self, column: usize) -> Vec<T>
    where
        T: Clone,
    {
        self.distribution.track();
        self.coordinator.with_value(|slot| {
            slot.as_ref().map_or_else(Vec::new, |coordinator| {
                coordinator.column_items(column).map(|(_, item)| item.clone()).collect()
            })
        })
    }
}

/// Inline style for a grid with `columns` equal-width columns.
#[must_use]
pub fn grid_template_columns(columns: usize) -> String {
    format!("grid-template-columns: repeat({}, minmax(0, 1fr));", columns.max(1))
}

/// `<For>` key for a rendered item: a new revision remounts the card.
#[must_use]
pub fn render_key<T: MasonryItem>(item: &T) -> (T::Key, i64) {
    (item.key(), item.revision())
}

/// Pinterest-style grid of `items`, each rendered by `renderer`.
///
/// `prefix` is pinned to the top of the first column. `list_mode` forces a
/// single column regardless of container width.
#[component]
pub fn MasonryView<T, R, IV>(
    #[prop(into)] items: Signal<Vec<T>>,
    renderer: R,
    #[prop(optional, into)] prefix: Option<ViewFn>,
    #[prop(into, default = Signal::stored(false))] list_mode: Signal<bool>,
) -> impl IntoView
where
    T: MasonryItem + Clone + Send + Sync + 'static,
    T::Key: Send + Sync + 'static,
    R: Fn(T) -> IV + Clone + Send + Sync + 'static,
    IV: IntoView + 'static,
{
    let layout = Layout { coordinator: StoredValue::new_local(None), distribution: RwSignal::new(Distribution::empty(1)) };

    let scheduler = TimeoutScheduler::new(move || layout.apply(LayoutCoordinator::settle));
    let mut coordinator = LayoutCoordinator::new(load_masonry_config(), scheduler);
    coordinator.set_list_mode(list_mode.get_untracked());
    coordinator.set_items(items.get_untracked());
    layout.distribution.set(coordinator.distribution().clone());
    layout.coordinator.set_value(Some(coordinator));

    Effect::new(move || {
        let next = items.get();
        layout.apply(|c| c.set_items(next));
    });

    Effect::new(move || {
        let forced = list_mode.get();
        layout.apply(|c| c.set_list_mode(forced));
    });

    let container_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        let measure = move || {
            let width = container_ref.get_untracked().map(|el| offset_width(&el));
            layout.apply(|c| c.resize(width));
        };
        Effect::new(move || {
            if container_ref.get().is_some() {
                measure();
            }
        });
        let resize_listener = window_event_listener(leptos::ev::resize, move |_| measure());
        on_cleanup(move || resize_listener.remove());
    }

    on_cleanup(move || {
        layout.coordinator.update_value(|slot| {
            if let Some(coordinator) = slot.as_mut() {
                coordinator.teardown();
            }
        });
    });

    let column_count = move || layout.distribution.with(Distribution::column_count);

    view! {
        <div
            class="masonry"
            class:masonry--list=move || list_mode.get()
            style=move || grid_template_columns(column_count())
            node_ref=container_ref
        >
            <For
                each=move || 0..column_count()
                key=|column| *column
                children=move |column| {
                    let renderer = renderer.clone();
                    let prefix_view = if column == 0 { prefix.clone().map(|p| prefix_cell(layout, p)) } else { None };
                    view! {
                        <div class="masonry__column">
                            {prefix_view}
                            <For
                                each=move || layout.column_items(column)
                                key=|item: &T| render_key(item)
                                children=move |item| masonry_cell(layout, item, renderer.clone())
                            />
                        </div>
                    }
                }
            />
        </div>
    }
}

fn masonry_cell<T, R, IV>(layout: Layout<T>, item: T, renderer: R) -> impl IntoView
where
    T: MasonryItem + Clone + 'static,
    T::Key: 'static,
    R: Fn(T) -> IV,
    IV: IntoView,
{
    let cell_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    observe_height(cell_ref, item.key(), Rc::new(move |key, height| layout.apply(|c| c.report_height(key, height))));
    #[cfg(not(feature = "hydrate"))]
    let _ = layout;

    view! { <div class="masonry__cell" node_ref=cell_ref>{renderer(item)}</div> }
}

fn prefix_cell<T: MasonryItem + 'static>(layout: Layout<T>, prefix: ViewFn) -> impl IntoView {
    let prefix_ref = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    observe_height(prefix_ref, (), Rc::new(move |(), height| layout.apply(|c| c.report_prefix_height(height))));
    #[cfg(not(feature = "hydrate"))]
    let _ = layout;

    view! { <div class="masonry__prefix" node_ref=prefix_ref>{prefix.run()}</div> }
}

/// Report the height of `node_ref` under `key` from mount until cleanup.
#[cfg(feature = "hydrate")]
fn observe_height<K: Clone + 'static>(
    node_ref: NodeRef<leptos::html::Div>,
    key: K,
    report: Rc<dyn Fn(K, u32)>,
) {
    let reporter = StoredValue::new_local(None::<HeightReporter<DomSizeObserver>>);
    Effect::new(move || {
        let Some(element) = node_ref.get() else {
            return;
        };
        if reporter.with_value(Option::is_some) {
            return;
        }
        let mounted =
            HeightReporter::<DomSizeObserver>::mount(&DomSizeObserver, &element, key.clone(), Rc::clone(&report));
        reporter.set_value(Some(mounted));
    });
    on_cleanup(move || {
        reporter.update_value(|slot| {
            if let Some(mounted) = slot.as_mut() {
                mounted.unmount();
            }
        });
    });
}
