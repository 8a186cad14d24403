use leptos::{either::Either, prelude::*};
use leptos_use::use_window_scroll;

use super::language::{use_language, LanguageSwitcher};
use crate::{
    content::SECTIONS,
    display::{active_section, navbar_is_solid},
};

#[cfg(feature = "hydrate")]
fn section_tops() -> Vec<(&'static str, f64)> {
    use wasm_bindgen::JsCast;

    let doc = document();
    SECTIONS
        .iter()
        .filter_map(|&(id, _)| {
            let el = doc
                .get_element_by_id(id)?
                .dyn_into::<leptos::web_sys::HtmlElement>()
                .ok()?;
            Some((id, f64::from(el.offset_top())))
        })
        .collect()
}

#[cfg(not(feature = "hydrate"))]
fn section_tops() -> Vec<(&'static str, f64)> {
    Vec::new()
}

#[component]
pub fn Navbar() -> impl IntoView {
    let lang = use_language();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);
    let solid = Memo::new(move |_| navbar_is_solid(scroll_y.get()));
    let active = Memo::new(move |_| active_section(scroll_y.get(), &section_tops()));

    let link_class = move |id: &'static str| {
        if active.get() == Some(id) {
            "text-cyan font-medium transition-colors duration-300"
        } else {
            "hover:text-cyan font-medium transition-colors duration-300"
        }
    };

    view! {
        <header class=move || {
            if solid.get() {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-background/90 backdrop-blur-sm border-b border-muted/20"
            } else {
                "fixed top-0 left-0 right-0 z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <nav class="mx-auto max-w-7xl px-6 py-4">
                <div class="flex items-center justify-between">
                    <a href="#home" class="text-2xl font-bold text-purple">
                        "PORTFOLIO"
                    </a>
                    <div class="hidden md:flex items-center space-x-8">
                        {SECTIONS
                            .iter()
                            .map(|&(id, key)| {
                                view! {
                                    <a href=format!("#{id}") class=move || link_class(id)>
                                        {move || lang.t(key)}
                                    </a>
                                }
                            })
                            .collect_view()}
                        <LanguageSwitcher />
                    </div>
                    <div class="flex md:hidden items-center gap-2">
                        <LanguageSwitcher />
                        <button
                            type="button"
                            class="text-2xl hover:text-cyan"
                            aria-label=move || lang.t("nav.menu")
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || {
                                if menu_open.get() {
                                    Either::Left(view! { <i class="extra-close" /> })
                                } else {
                                    Either::Right(view! { <i class="extra-menu" /> })
                                }
                            }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden mt-4 rounded-lg p-4 space-y-3 bg-brightBlack/80">
                        {SECTIONS
                            .iter()
                            .map(|&(id, key)| {
                                view! {
                                    <a
                                        href=format!("#{id}")
                                        class="block w-full px-4 py-3 rounded-lg bg-brightBlack/30 hover:bg-brightBlack/50 transition-colors duration-300"
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {move || lang.t(key)}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Show>
            </nav>
        </header>
    }
}
