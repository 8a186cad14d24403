use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::FromToStringCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

#[cfg(feature = "hydrate")]
use crate::i18n::LANGUAGE_STORAGE_KEY;
use crate::i18n::{translate, Language};

/// Active display language, provided once at the root of the app.
#[derive(Debug, Clone, Copy)]
pub struct LanguageContext {
    language: Signal<Language>,
    set_language: WriteSignal<Language>,
}

impl LanguageContext {
    pub fn get(&self) -> Language {
        self.language.get()
    }

    pub fn get_untracked(&self) -> Language {
        self.language.get_untracked()
    }

    pub fn set(&self, language: Language) {
        log::debug!("language set to {language}");
        self.set_language.set(language);
    }

    pub fn toggle(&self) {
        self.set(self.get_untracked().toggle());
    }

    /// Reactive catalog lookup; missing keys render as the key itself.
    pub fn t(&self, key: &str) -> String {
        translate(self.get(), key)
    }
}

pub fn provide_language_context() -> LanguageContext {
    // server and hydrating client both start from the default; the stored
    // choice is applied once hydration is done
    let (language, set_language) = signal(Language::default());

    #[cfg(feature = "hydrate")]
    {
        let (stored, set_stored, _) =
            use_local_storage::<String, FromToStringCodec>(LANGUAGE_STORAGE_KEY);
        Effect::watch(
            || (),
            move |_, _, _| set_language.set(Language::from_stored(&stored.get_untracked())),
            true,
        );
        Effect::watch(
            move || language.get(),
            move |lang, _, _| set_stored.set(lang.to_string()),
            false,
        );
    }

    let ctx = LanguageContext {
        language: language.into(),
        set_language,
    };
    provide_context(ctx);
    ctx
}

pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}

#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let lang = use_language();
    view! {
        <button
            type="button"
            class="flex items-center gap-2 px-3 py-1 rounded-md text-sm font-medium uppercase hover:text-cyan hover:bg-cyan/10 transition-colors duration-200"
            aria-label=move || lang.t("language.switch")
            on:click=move |_| lang.toggle()
        >
            <i class="extra-language" />
            // shows the language a click switches to
            <span>{move || lang.get().toggle().code()}</span>
        </button>
    }
}
