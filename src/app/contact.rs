use leptos::prelude::*;

use super::{homepage::SectionHeader, language::use_language};
use crate::{
    content::{ContactEntry, ContactKind, CONTACTS, OWNER_NAME, SECTIONS, SOCIAL_LINKS},
    display::copyright_year,
};

const BUILD_TIME: &str = env!("BUILD_TIME");

fn contact_icon(kind: ContactKind) -> &'static str {
    match kind {
        ContactKind::Phone => "extra-phone",
        ContactKind::Email => "extra-mail",
        ContactKind::Location => "extra-location",
    }
}

#[component]
fn ContactCard(entry: ContactEntry) -> impl IntoView {
    let lang = use_language();
    view! {
        <a
            href=move || entry.href(&lang.t(entry.value_key))
            class="flex items-center gap-4 p-4 rounded-xl border border-muted/30 hover:border-cyan/30 transition-all duration-300"
        >
            <div class="w-12 h-12 flex items-center justify-center rounded-full bg-cyan/10 text-cyan text-xl">
                <i class=contact_icon(entry.kind) />
            </div>
            <div>
                <p class="text-sm text-muted">{move || lang.t(entry.label_key)}</p>
                <p class="font-medium">{move || lang.t(entry.value_key)}</p>
            </div>
        </a>
    }
}

#[component]
pub fn Contact() -> impl IntoView {
    let lang = use_language();
    view! {
        <section id="contact" class="py-20 px-6 bg-brightBlack/20">
            <SectionHeader title_key="contact.title" description_key="contact.description" />
            <div class="max-w-4xl mx-auto section-content">
                <div class="grid md:grid-cols-2 gap-6 mb-12">
                    {CONTACTS
                        .iter()
                        .map(|&entry| view! { <ContactCard entry /> })
                        .collect_view()}
                </div>
                <div class="text-center">
                    <h3 class="text-xl font-bold mb-6">{move || lang.t("contact.social.title")}</h3>
                    <div class="flex justify-center gap-4">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        aria-label=move || lang.t(link.label_key)
                                        class="w-12 h-12 flex items-center justify-center rounded-full border border-muted/30 text-xl hover:text-cyan hover:border-cyan/30 transition-all duration-300"
                                    >
                                        <i class=link.icon />
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let lang = use_language();
    let year = copyright_year(BUILD_TIME)
        .map(|year| year.to_string())
        .unwrap_or_default();

    view! {
        <footer class="py-12 px-6 border-t border-muted/20">
            <div class="max-w-6xl mx-auto grid md:grid-cols-3 gap-8 items-start">
                <div>
                    <h3 class="text-xl font-bold text-purple mb-2">{OWNER_NAME}</h3>
                    <p class="text-muted text-sm">{move || lang.t("footer.role")}</p>
                </div>
                <nav class="flex flex-wrap gap-4 md:justify-center">
                    {SECTIONS
                        .iter()
                        .map(|&(id, key)| {
                            view! {
                                <a
                                    href=format!("#{id}")
                                    class="text-sm text-muted hover:text-cyan transition-colors duration-200"
                                >
                                    {move || lang.t(key)}
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <div class="flex md:justify-end">
                    <a
                        href="#home"
                        aria-label=move || lang.t("footer.top")
                        class="w-10 h-10 flex items-center justify-center rounded-full border border-muted/30 hover:text-cyan hover:border-cyan/30 transition-all duration-300"
                    >
                        <i class="extra-arrow-up" />
                    </a>
                </div>
            </div>
            <div class="max-w-6xl mx-auto mt-8 pt-8 border-t border-muted/20 flex flex-col md:flex-row justify-between gap-2 text-sm text-muted">
                <p>{move || format!("© {year} {OWNER_NAME}. {}", lang.t("footer.rights"))}</p>
                <p>{move || lang.t("footer.madeWith")}</p>
            </div>
        </footer>
    }
}
