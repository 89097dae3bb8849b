mod about;
mod contact;
mod dom;
mod home;
mod hooks;
mod layout;
mod not_found;
mod resume;
mod typed_title;

use web_sys::window;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::behaviors::theme::Theme;
use about::About;
use contact::Contact;
use home::Home;
use layout::Layout;
use not_found::NotFound;
use resume::Resume;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/about")]
    About,
    #[at("/contact")]
    Contact,
    #[at("/resume")]
    Resume,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route, theme: Theme, on_toggle_theme: Callback<()>) -> Html {
    match route {
        Route::Home => html! { <Home theme={theme} on_toggle_theme={on_toggle_theme} /> },
        Route::About => html! { <About /> },
        Route::Contact => html! { <Contact /> },
        Route::Resume => html! { <Resume /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    let theme = use_state(dom::initial_theme);

    {
        let current = *theme;
        use_effect_with((), move |_| {
            dom::apply_theme(current);
            || ()
        });
    }

    let on_toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_| {
            let next = (*theme).toggled();
            log::debug!("theme switched to {}", next.as_str());
            dom::apply_theme_with_transition(next);
            theme.set(next);
        })
    };

    let render = {
        let current = *theme;
        let on_toggle_theme = on_toggle_theme.clone();
        Callback::from(move |route: Route| switch(route, current, on_toggle_theme.clone()))
    };

    html! {
        <BrowserRouter>
            <Layout theme={*theme} on_toggle_theme={on_toggle_theme}>
                <Switch<Route> render={render} />
            </Layout>
        </BrowserRouter>
    }
}

pub fn run() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);

    yew::Renderer::<App>::with_root(
        window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("app"))
            .expect("missing #app mount point"),
    )
    .render();
}
