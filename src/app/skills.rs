use leptos::{either::Either, prelude::*};

use super::{carousel::Carousel, homepage::SectionHeader, language::use_language};
use crate::{
    content::{preview_skills, skills_by_category, Skill},
    display::{progress_offset, DisplayMode, SKILL_GRID_MAX},
};

const RING_RADIUS: f64 = 45.0;

#[component]
fn SkillRing(skill: Skill) -> impl IntoView {
    let lang = use_language();
    let circumference = 2.0 * std::f64::consts::PI * RING_RADIUS;
    let offset = progress_offset(skill.level, circumference);
    view! {
        <div class="flex flex-col items-center group">
            <div class="relative w-32 h-32 mb-4">
                <svg class="w-32 h-32 -rotate-90" viewBox="0 0 100 100">
                    <circle
                        cx="50"
                        cy="50"
                        r=RING_RADIUS.to_string()
                        stroke="currentColor"
                        stroke-width="6"
                        fill="transparent"
                        class="text-muted opacity-20"
                    />
                    <circle
                        cx="50"
                        cy="50"
                        r=RING_RADIUS.to_string()
                        stroke="currentColor"
                        stroke-width="6"
                        fill="transparent"
                        stroke-dasharray=circumference.to_string()
                        stroke-dashoffset=offset.to_string()
                        stroke-linecap="round"
                        class="text-cyan transition-all duration-[2s] ease-out"
                    />
                </svg>
                <div class="absolute inset-0 flex items-center justify-center">
                    <span class="text-2xl font-bold text-purple">{format!("{}%", skill.level)}</span>
                </div>
            </div>
            <div class="text-center">
                <h4 class="text-lg font-bold mb-1">{skill.name}</h4>
                <span class="text-sm px-3 py-1 rounded-full bg-brightBlack text-foreground font-medium">
                    {move || lang.t(skill.category.catalog_key())}
                </span>
            </div>
        </div>
    }
}

#[component]
pub fn Skills() -> impl IntoView {
    let lang = use_language();
    let (show_all, set_show_all) = signal(false);

    let preview = move || {
        view! {
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-5 gap-8 max-w-6xl mx-auto mb-8">
                {preview_skills()
                    .iter()
                    .map(|&skill| view! { <SkillRing skill /> })
                    .collect_view()}
            </div>
        }
    };

    let by_category = move || {
        skills_by_category()
            .into_iter()
            .map(|(category, skills)| {
                let body = match DisplayMode::for_count(skills.len(), SKILL_GRID_MAX) {
                    DisplayMode::Grid => Either::Left(view! {
                        <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 max-w-6xl mx-auto">
                            {skills
                                .into_iter()
                                .map(|skill| view! { <SkillRing skill /> })
                                .collect_view()}
                        </div>
                    }),
                    DisplayMode::Carousel => {
                        let render_func = |skill: Skill| view! { <SkillRing skill /> }.into_any();
                        Either::Right(view! { <Carousel items=skills per_page=4 render_func /> })
                    }
                };
                view! {
                    <div class="mb-16 section-content">
                        <h3 class="text-2xl font-bold mb-8 text-center text-purple">
                            {move || lang.t(category.catalog_key())}
                        </h3>
                        {body}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <section id="skills" class="py-20 px-6">
            <SectionHeader title_key="skills.title" description_key="skills.description" />
            {move || {
                if show_all.get() {
                    Either::Left(by_category())
                } else {
                    Either::Right(preview())
                }
            }}
            <div class="flex justify-center">
                <button
                    type="button"
                    class="bg-cyan/20 hover:bg-cyan/30 text-cyan px-6 py-3 rounded-md font-medium border border-cyan/30 transition-all duration-200"
                    on:click=move |_| set_show_all.update(|v| *v = !*v)
                >
                    {move || {
                        if show_all.get() { lang.t("skills.showLess") } else { lang.t("skills.showAll") }
                    }}
                </button>
            </div>
        </section>
    }
}
