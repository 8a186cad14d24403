use leptos::{either::Either, prelude::*};

use super::{carousel::Carousel, homepage::SectionHeader, language::use_language};
use crate::{
    content::{Certification, Project, ProjectStatus, CERTIFICATIONS, GITHUB_URL, PROJECTS},
    display::{DisplayMode, CERTIFICATION_GRID_MAX},
};

#[component]
fn CertificationCard(certification: Certification) -> impl IntoView {
    let lang = use_language();
    let title_key = certification.title_key();
    let provider_key = certification.provider_key();
    let date_key = certification.date_key();
    let category_key = certification.category_key();
    view! {
        <div class="h-full p-6 rounded-xl border border-muted/30 hover:border-cyan/30 hover:-translate-y-1 transition-all duration-300 flex flex-col">
            <div class="flex items-start justify-between mb-4">
                <i class="extra-award text-3xl text-cyan" />
                <span class="text-xs px-3 py-1 rounded-full bg-purple/10 text-purple font-medium">
                    {move || lang.t(&category_key)}
                </span>
            </div>
            <h3 class="text-lg font-bold mb-2 leading-tight">{move || lang.t(&title_key)}</h3>
            <p class="text-sm text-muted mb-4">{move || lang.t(&provider_key)}</p>
            <p class="text-xs text-muted mb-6 mt-auto">
                {move || format!("{} {}", lang.t("certifications.completed"), lang.t(&date_key))}
            </p>
            <a
                href=certification.link
                target="_blank"
                rel="noopener noreferrer"
                class="text-cyan hover:underline text-sm font-medium"
            >
                {move || lang.t("certifications.view")}
                <i class="extra-external-link ml-1" />
            </a>
        </div>
    }
}

#[component]
pub fn Certifications() -> impl IntoView {
    let body = match DisplayMode::for_count(CERTIFICATIONS.len(), CERTIFICATION_GRID_MAX) {
        DisplayMode::Grid => Either::Left(view! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                {CERTIFICATIONS
                    .iter()
                    .map(|&certification| view! { <CertificationCard certification /> })
                    .collect_view()}
            </div>
        }),
        DisplayMode::Carousel => {
            let render_func = |certification: Certification| {
                view! { <CertificationCard certification /> }.into_any()
            };
            Either::Right(view! {
                <Carousel items=CERTIFICATIONS.to_vec() per_page=3 render_func />
            })
        }
    };

    view! {
        <section id="certifications" class="py-20 px-6 bg-brightBlack/20">
            <SectionHeader
                title_key="certifications.title"
                description_key="certifications.description"
            />
            <div class="section-content">{body}</div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let lang = use_language();
    let title_key = project.title_key();
    let description_key = project.description_key();
    let tech_key = project.tech_key();
    let status_class = match project.status {
        ProjectStatus::Done => "text-xs px-3 py-1 rounded-full bg-green/10 text-green font-medium",
        ProjectStatus::InProgress => {
            "text-xs px-3 py-1 rounded-full bg-yellow/10 text-yellow font-medium"
        }
    };
    view! {
        <article class="p-6 rounded-xl border border-muted/30 hover:border-cyan/30 transition-all duration-300 flex flex-col section-content">
            <div class="flex items-start justify-between mb-4 gap-4">
                <h3 class="text-xl font-bold">{move || lang.t(&title_key)}</h3>
                <span class=status_class>{move || lang.t(project.status.catalog_key())}</span>
            </div>
            <p class="text-muted leading-relaxed mb-6">{move || lang.t(&description_key)}</p>
            <div class="flex items-center justify-between mt-auto">
                <span class="text-sm text-cyan font-medium">{move || lang.t(&tech_key)}</span>
                <a
                    href=GITHUB_URL
                    target="_blank"
                    rel="noopener noreferrer"
                    class="flex items-center gap-2 text-sm hover:text-cyan transition-colors duration-200"
                >
                    <i class="devicon-github-plain" />
                    {move || lang.t("projects.code")}
                </a>
            </div>
        </article>
    }
}

#[component]
pub fn Projects() -> impl IntoView {
    view! {
        <section id="projects" class="py-20 px-6">
            <SectionHeader title_key="projects.title" description_key="projects.description" />
            <div class="grid md:grid-cols-2 gap-8 max-w-6xl mx-auto">
                {PROJECTS
                    .iter()
                    .map(|&project| view! { <ProjectCard project /> })
                    .collect_view()}
            </div>
        </section>
    }
}
