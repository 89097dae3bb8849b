use web_sys::MouseEvent;
use yew::prelude::*;

use super::{
    dom,
    hooks::use_scroll_spy,
    layout::{ContactAnchor, MenuEvents},
};
use crate::behaviors::dropdown::DropdownEvent;
use crate::content::{
    CASE_STUDIES, CONTACT_LINKS, HERO_SECTION_ID, JOBS, PROFILE, RESUME_SECTIONS, SKILLS,
};

/// One-page resume. The section nav follows the scroll position and hides
/// once the hero has scrolled away.
#[function_component(Resume)]
pub fn resume() -> Html {
    let spy = use_scroll_spy(RESUME_SECTIONS, HERO_SECTION_ID);
    let menu_events = use_context::<MenuEvents>();

    let section_nav = RESUME_SECTIONS
        .iter()
        .map(|section| {
            let id = section.id;
            let onclick = {
                let menu_events = menu_events.clone();
                Callback::from(move |_: MouseEvent| {
                    if !dom::scroll_to_section(id) {
                        log::debug!("section {id} is not mounted");
                    }
                    if let Some(MenuEvents(events)) = menu_events.as_ref() {
                        events.emit(DropdownEvent::Navigated);
                    }
                })
            };
            let active = spy.active() == id;

            html! {
                <button
                    type="button"
                    class={classes!("section-link", active.then_some("is-active"))}
                    aria-current={active.then_some("location")}
                    onclick={onclick}
                >
                    {section.label}
                </button>
            }
        })
        .collect::<Html>();

    let skills = SKILLS
        .iter()
        .map(|group| {
            html! {
                <div class="skill-group">
                    <h3>{group.heading}</h3>
                    <p>{group.items}</p>
                </div>
            }
        })
        .collect::<Html>();

    let case_studies = CASE_STUDIES
        .iter()
        .map(|study| {
            html! {
                <article class="case-study">
                    <header>
                        <h3>{study.name}</h3>
                        <span class="tag">{study.tag}</span>
                    </header>
                    <p>{study.summary}</p>
                    <ul>
                        { for study.highlights.iter().map(|line| html! { <li>{*line}</li> }) }
                    </ul>
                    <p class="muted"><span class="label">{"Stack: "}</span>{study.stack}</p>
                </article>
            }
        })
        .collect::<Html>();

    let jobs = JOBS
        .iter()
        .map(|job| {
            html! {
                <li class="job">
                    <div>
                        <p class="job-title">{job.title}</p>
                        <p class="muted">{format!("{} · {}", job.employer, job.location)}</p>
                    </div>
                    <p class="muted">{job.period()}</p>
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <div class="resume">
            <nav
                class={classes!("section-nav", (!spy.header_visible()).then_some("is-hidden"))}
                aria-label="Sections"
            >
                {section_nav}
            </nav>

            <section id="home" class="resume-hero">
                <h1>{PROFILE.name}</h1>
                <h2 class="muted">{PROFILE.role}</h2>
            </section>

            <section id="summary" class="section-block" aria-labelledby="summary-heading">
                <h2 id="summary-heading">{"Summary"}</h2>
                { for PROFILE.summary.iter().map(|paragraph| html! { <p>{*paragraph}</p> }) }
            </section>

            <section id="skills" class="section-block" aria-labelledby="skills-heading">
                <h2 id="skills-heading">{"Skills"}</h2>
                <div class="skill-grid">{skills}</div>
            </section>

            <section id="work" class="section-block" aria-labelledby="work-heading">
                <h2 id="work-heading">{"Work"}</h2>
                <div class="case-studies">{case_studies}</div>
            </section>

            <section id="experience" class="section-block" aria-labelledby="experience-heading">
                <h2 id="experience-heading">{"Experience"}</h2>
                <ul class="row-list">{jobs}</ul>
            </section>

            <section id="contact" class="section-block" aria-labelledby="contact-heading">
                <h2 id="contact-heading">{"Contact"}</h2>
                <ul class="inline-list">
                    { for CONTACT_LINKS.iter().map(|link| html! {
                        <li><ContactAnchor link={*link} bracketed=true /></li>
                    }) }
                </ul>
            </section>
        </div>
    }
}
