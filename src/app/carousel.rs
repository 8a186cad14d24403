use leptos::prelude::*;

use super::language::use_language;
use crate::display::CarouselState;

/// Pages through `items`, `per_page` at a time, with prev/next buttons.
#[component]
pub fn Carousel<T, F>(items: Vec<T>, per_page: usize, render_func: F) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    F: Fn(T) -> AnyView + Send + Sync + 'static,
{
    let lang = use_language();
    let state = RwSignal::new(CarouselState::new(items.len(), per_page));
    let items = StoredValue::new(items);

    let button_class = "absolute top-1/2 -translate-y-1/2 w-10 h-10 rounded-full border border-muted/30 bg-background/80 hover:text-cyan disabled:opacity-30 transition-all duration-200";

    view! {
        <div class="relative max-w-6xl mx-auto px-12">
            <button
                type="button"
                class=format!("{button_class} left-0")
                aria-label=move || lang.t("carousel.previous")
                disabled=move || !state.get().can_prev()
                on:click=move |_| state.update(|s| *s = s.prev())
            >
                "‹"
            </button>
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                {move || {
                    let visible = state.get().visible();
                    items
                        .with_value(|items| items[visible].to_vec())
                        .into_iter()
                        .map(&render_func)
                        .collect_view()
                }}
            </div>
            <button
                type="button"
                class=format!("{button_class} right-0")
                aria-label=move || lang.t("carousel.next")
                disabled=move || !state.get().can_next()
                on:click=move |_| state.update(|s| *s = s.next())
            >
                "›"
            </button>
        </div>
    }
}
