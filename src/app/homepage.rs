use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    chat::ChatWidget,
    contact::{Contact, Footer},
    language::use_language,
    navbar::Navbar,
    projects::{Certifications, Projects},
    skills::Skills,
};
use crate::content::{about_stats, CV_PATH, TIMELINE};

#[component]
pub fn HomePage() -> impl IntoView {
    let lang = use_language();
    view! {
        <Title text=move || lang.t("nav.home") />
        <Navbar />
        <main class="flex flex-col w-full">
            <Hero />
            <About />
            <Skills />
            <Certifications />
            <Projects />
            <Contact />
        </main>
        <Footer />
        <ChatWidget />
    }
}

/// Section heading shared by every block of the page.
#[component]
pub fn SectionHeader(title_key: &'static str, description_key: &'static str) -> impl IntoView {
    let lang = use_language();
    view! {
        <div class="text-center mb-16 section-content">
            <h2 class="text-4xl lg:text-5xl font-bold mb-4">{move || lang.t(title_key)}</h2>
            <div class="w-24 h-1 bg-cyan mx-auto rounded-full mb-6" />
            {(!description_key.is_empty())
                .then(|| {
                    view! {
                        <p class="text-muted text-lg max-w-2xl mx-auto">
                            {move || lang.t(description_key)}
                        </p>
                    }
                })}
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let lang = use_language();
    view! {
        <section id="home" class="relative min-h-screen flex items-center justify-center px-6 py-20">
            <div class="grid lg:grid-cols-2 gap-12 items-center max-w-6xl w-full">
                <div class="space-y-8 section-content">
                    <div class="space-y-2">
                        <p class="text-cyan text-lg font-medium">{move || lang.t("hero.greeting")}</p>
                        <h1 class="text-5xl lg:text-7xl font-bold">
                            "Gorgui" <br /> <span class="text-purple">"Marena"</span>
                        </h1>
                    </div>
                    <p class="text-xl lg:text-2xl text-muted font-light">
                        {move || lang.t("hero.role")}
                    </p>
                    <p class="text-lg text-muted max-w-lg leading-relaxed">
                        {move || lang.t("hero.description")}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <a
                            href=CV_PATH
                            download="GorguiMarenaCV.pdf"
                            class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-semibold border border-cyan/30 transition-all duration-200"
                        >
                            <i class="extra-download mr-2" />
                            {move || lang.t("hero.downloadCV")}
                        </a>
                        <a
                            href="#about"
                            class="px-6 py-3 rounded-md border border-muted/30 hover:bg-brightBlack/30 transition-all duration-200"
                        >
                            {move || lang.t("hero.discover")}
                        </a>
                    </div>
                </div>
                <div class="flex justify-center lg:justify-end section-content">
                    <div class="relative w-80 h-80 lg:w-96 lg:h-96 rounded-full overflow-hidden border-4 border-cyan/20 shadow-2xl">
                        <img
                            src="/profile.jpg"
                            alt="Gorgui Marena"
                            class="w-full h-full object-cover [object-position:50%_20%]"
                        />
                    </div>
                </div>
            </div>
            <a
                href="#about"
                class="absolute bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-muted hover:text-cyan animate-bounce"
            >
                <span class="text-sm font-medium">{move || lang.t("hero.scroll")}</span>
                <i class="extra-arrow-down" />
            </a>
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    let lang = use_language();
    view! {
        <section id="about" class="py-20 px-6 bg-brightBlack/20">
            <div class="max-w-6xl mx-auto">
                <SectionHeader title_key="about.title" description_key="" />
                <div class="grid lg:grid-cols-2 gap-16 items-start mb-20">
                    <div class="space-y-6 section-content">
                        <p class="text-lg text-muted leading-relaxed">
                            {move || lang.t("about.description")}
                        </p>
                        <div class="flex flex-wrap gap-3 pt-4">
                            {["Python", "Node.js/Express.js", "Java", "Php", "Devops"]
                                .into_iter()
                                .map(|tech| {
                                    view! {
                                        <span class="px-4 py-2 bg-cyan/10 text-cyan rounded-full text-sm font-medium border border-cyan/20">
                                            {tech}
                                        </span>
                                    }
                                })
                                .collect_view()}
                        </div>
                    </div>
                    <div class="grid grid-cols-2 gap-6 section-content">
                        {about_stats()
                            .into_iter()
                            .map(|(label_key, value)| {
                                view! {
                                    <div class="p-6 rounded-xl text-center border border-muted/30 hover:border-cyan/30 transition-all duration-300">
                                        <div class="text-3xl lg:text-4xl font-bold text-purple mb-2">
                                            {value}
                                        </div>
                                        <div class="text-muted text-sm font-medium">
                                            {move || lang.t(label_key)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
                <SectionHeader
                    title_key="about.services.title"
                    description_key="about.services.description"
                />
                <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-8">
                    {TIMELINE
                        .iter()
                        .map(|&(title_key, desc_key)| {
                            view! {
                                <div class="p-6 rounded-xl text-center border border-muted/30 hover:border-cyan/30 transition-all duration-300 section-content">
                                    <h4 class="text-xl font-bold mb-3">{move || lang.t(title_key)}</h4>
                                    <p class="text-muted text-sm leading-relaxed">
                                        {move || lang.t(desc_key)}
                                    </p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
