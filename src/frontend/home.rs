use std::time::Duration;
use web_sys::MouseEvent;
use yew::prelude::*;

use super::{dom, hooks::use_delayed_flag, layout::ThemeButton};
use crate::behaviors::{
    carousel::{Carousel, CarouselAction, DisplayMode},
    theme::Theme,
};
use crate::content::{Project, PROJECTS};

const CONTENT_REVEAL_DELAY: Duration = Duration::from_millis(400);

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
}

#[derive(Properties, PartialEq)]
struct ProjectCardProps {
    project: Project,
}

#[function_component(ProjectCard)]
fn project_card(props: &ProjectCardProps) -> Html {
    let project = props.project;
    let media = match project.image {
        Some(src) => html! { <img class="project-media" src={src} alt={project.name} /> },
        None => html! { <div class="project-media placeholder" aria-hidden="true"></div> },
    };

    html! {
        <article class="project-card">
            {media}
            <div class="project-copy">
                <div>
                    <p class="project-name">{project.name}</p>
                    <p class="muted">{project.date.label()}</p>
                </div>
                <p class="project-description">{project.description}</p>
            </div>
        </article>
    }
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let show_content = use_delayed_flag(CONTENT_REVEAL_DELAY);
    let carousel = use_reducer(|| Carousel::new(PROJECTS.len()));

    let action = {
        let dispatcher = carousel.dispatcher();
        move |action: CarouselAction| {
            let dispatcher = dispatcher.clone();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(action))
        }
    };

    let Some(current) = PROJECTS.get(carousel.index()).copied() else {
        return html! {
            <section class="home">
                <p class="muted">{"NO PROJECTS YET"}</p>
            </section>
        };
    };

    let fade = classes!("fade", show_content.then_some("is-visible"));

    let listing = (carousel.mode() == DisplayMode::Listing).then(|| {
        html! {
            <div class={classes!("project-listing", fade.clone())}>
                { for PROJECTS.iter().enumerate().map(|(index, project)| html! {
                    <button
                        type="button"
                        class={classes!("listing-item", (index == carousel.index()).then_some("is-active"))}
                        onclick={action(CarouselAction::GoTo(index))}
                    >
                        <span>{format!("( {} )", index + 1)}</span>
                        <span>{project.name}</span>
                        <span class="muted">{project.date.label()}</span>
                    </button>
                }) }
            </div>
        }
    });

    let pager = PROJECTS
        .iter()
        .enumerate()
        .map(|(index, project)| {
            html! {
                <button
                    type="button"
                    class={classes!("pager-item", (index == carousel.index()).then_some("is-active"))}
                    aria-label={format!("Show {}", project.name)}
                    onclick={action(CarouselAction::GoTo(index))}
                >
                    {carousel.pager_label(index)}
                </button>
            }
        })
        .collect::<Html>();

    html! {
        <section class="home">
            {listing}

            <div class={classes!("showcase", (carousel.mode() == DisplayMode::Listing).then_some("is-compact"))}>
                <svg class={classes!("arc", "arc-left", fade.clone())} viewBox="0 0 200 400" fill="none" aria-hidden="true">
                    <path d="M 160 20 C 20 20, 20 380, 160 380" />
                </svg>
                if carousel.shows_navigation() {
                    <button
                        type="button"
                        class={classes!("slide-nav", "slide-prev", fade.clone())}
                        aria-label="Previous project"
                        onclick={action(CarouselAction::Prev)}
                    >
                        {"<"}
                    </button>
                }

                <div class={classes!("slide", fade.clone())} key={carousel.index()}>
                    <ProjectCard project={current} />
                </div>

                if carousel.shows_navigation() {
                    <button
                        type="button"
                        class={classes!("slide-nav", "slide-next", fade.clone())}
                        aria-label="Next project"
                        onclick={action(CarouselAction::Next)}
                    >
                        {">"}
                    </button>
                }
                <svg class={classes!("arc", "arc-right", fade.clone())} viewBox="0 0 200 400" fill="none" aria-hidden="true">
                    <path d="M 40 20 C 180 20, 180 380, 40 380" />
                </svg>
            </div>

            <footer class={classes!("home-footer", fade)}>
                <ThemeButton theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                <nav class="pager" aria-label="Projects">{pager}</nav>
                <div class="home-footer-end">
                    <button type="button" class="mode-toggle" onclick={action(CarouselAction::ToggleMode)}>
                        {format!("( = {} )", carousel.mode().switch_label())}
                    </button>
                    <span>{format!("{} ©", dom::current_year())}</span>
                </div>
            </footer>
        </section>
    }
}
