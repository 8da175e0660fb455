//! Routed pages. Every page records a visit to its trail stop on mount.

use dioxus::prelude::*;
use trailhead_types::AppMode;

use crate::app::Route;
use crate::components::TrailMap;
use crate::content::use_content;
use crate::trail::{use_route_visit, use_trail};

#[component]
fn Section(#[props(into)] title: String, children: Element) -> Element {
    use_route_visit();

    rsx! {
        section { class: "page",
            h1 { "{title}" }
            {children}
        }
    }
}

#[component]
pub fn Home() -> Element {
    let content = use_content();
    let profile = content.profile();

    rsx! {
        Section { title: profile.name.clone(),
            p { class: "tagline", "{profile.tagline}" }
            p { "Follow the trail. Visiting a few stops unlocks the recruiter packet." }
            TrailMap {}
            h2 { "Featured projects" }
            ul { class: "card-list",
                for project in content.featured_projects() {
                    li { key: "{project.id}",
                        Link { to: format!("/projects#{}", project.id), "{project.title}" }
                        p { "{project.description}" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn About() -> Element {
    let content = use_content();
    let profile = content.profile();
    let skills = content.skills();

    rsx! {
        Section { title: "About",
            p { "{profile.summary}" }
            ul {
                for highlight in skills.highlights.iter() {
                    li { "{highlight}" }
                }
            }
        }
    }
}

#[component]
pub fn EducationPage() -> Element {
    let content = use_content();
    let education = content.education();

    rsx! {
        Section { title: "Education",
            h2 { "{education.school}" }
            p { "{education.location} - {education.graduation_date}" }
            ul {
                for degree in education.degrees.iter() {
                    li {
                        "{degree.kind} {degree.field}"
                        if let Some(college) = &degree.college {
                            span { class: "muted", " ({college})" }
                        }
                    }
                }
            }
            p { "GPA {education.gpa:.2}" }
            h3 { "Coursework" }
            ul { class: "tags",
                for course in education.coursework.iter() {
                    li { "{course}" }
                }
            }
        }
    }
}

#[component]
pub fn ExperiencePage() -> Element {
    let content = use_content();

    rsx! {
        Section { title: "Experience",
            for job in content.experience() {
                article { key: "{job.id}", id: "{job.id}", class: "card",
                    h2 { "{job.role}" }
                    p { class: "muted", "{job.company} - {job.location} - {job.dates}" }
                    ul {
                        for line in job.description.iter() {
                            li { "{line}" }
                        }
                    }
                    ul { class: "tags",
                        for tech in job.technologies.iter() {
                            li { "{tech}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ProjectsPage() -> Element {
    let content = use_content();

    rsx! {
        Section { title: "Projects",
            for project in content.projects() {
                article { key: "{project.id}", id: "{project.id}", class: "card",
                    h2 { "{project.title}" }
                    p { class: "muted", "{project.dates}" }
                    p { "{project.description}" }
                    for paragraph in project.long_description.iter() {
                        p { "{paragraph}" }
                    }
                    ul { class: "tags",
                        for tech in project.technologies.iter() {
                            li { "{tech}" }
                        }
                    }
                    if let Some(url) = &project.github_url {
                        a { href: "{url}", target: "_blank", "Source" }
                    }
                    if let Some(url) = &project.demo_url {
                        a { href: "{url}", target: "_blank", "Demo" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn SkillsPage() -> Element {
    let content = use_content();

    rsx! {
        Section { title: "Skills",
            for category in content.skills().categories.iter() {
                article { key: "{category.name}", id: "{category.anchor()}", class: "card",
                    h2 { "{category.name}" }
                    p { class: "muted", "{category.description}" }
                    ul { class: "tags",
                        for skill in category.skills.iter() {
                            li { "{skill.name}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn InterestsPage() -> Element {
    let content = use_content();

    rsx! {
        Section { title: "Interests",
            for interest in content.interests().interests.iter() {
                article { key: "{interest.id}", id: "{interest.id}", class: "card",
                    h2 { "{interest.title}" }
                    p { "{interest.description}" }
                    for highlight in interest.highlights.iter() {
                        div { class: "highlight",
                            h3 { "{highlight.title}" }
                            p { class: "muted", "{highlight.dates}" }
                            p { "{highlight.description}" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn ContactPage() -> Element {
    let content = use_content();
    let profile = content.profile();

    rsx! {
        Section { title: "Contact",
            ul { class: "contact-list",
                li { a { href: "mailto:{profile.email}", "{profile.email}" } }
                li { a { href: "{profile.linkedin}", target: "_blank", "LinkedIn" } }
                li { a { href: "{profile.github.personal}", target: "_blank", "GitHub" } }
            }
        }
    }
}

/// App launcher. Also hosts the trail reset, which normal navigation never links to.
#[component]
pub fn Outpost() -> Element {
    let content = use_content();
    let trail = use_trail();

    rsx! {
        Section { title: "Outpost",
            ul { class: "card-list",
                for app in content.apps() {
                    li { key: "{app.id}",
                        Link { to: Route::AppRunner { slug: app.slug.clone() }, "{app.name}" }
                        p { "{app.description}" }
                    }
                }
            }
            button {
                class: "trail-reset",
                onclick: move |_| trail.reset(),
                "Reset trail progress"
            }
        }
    }
}

#[component]
pub fn AppRunner(slug: String) -> Element {
    let content = use_content();

    let Some(app) = content.app_by_slug(&slug) else {
        return rsx! {
            Section { title: "Unknown app",
                p { "No app is registered as \"{slug}\"." }
                Link { to: Route::Outpost {}, "Back to the outpost" }
            }
        };
    };
    let url = app.url.clone().unwrap_or_default();

    rsx! {
        Section { title: app.name.clone(),
            p { "{app.description}" }
            match app.mode {
                AppMode::Internal => rsx! { p { class: "muted", "This app runs inside the site." } },
                AppMode::External => rsx! { a { href: "{url}", target: "_blank", "Open {app.name}" } },
                AppMode::Iframe => rsx! { iframe { class: "app-frame", src: "{url}", title: "{app.name}" } },
            }
        }
    }
}

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Section { title: "Off trail",
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the trailhead" }
        }
    }
}
