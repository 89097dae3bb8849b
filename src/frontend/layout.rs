use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

use super::{dom, hooks::use_dropdown, Route};
use crate::behaviors::{dropdown::DropdownEvent, theme::Theme};
use crate::content::{ContactLink, CONTACT_LINKS, PROFILE};

/// Lets pages report navigation (e.g. jumping to a section) to the menu.
#[derive(Clone, PartialEq)]
pub struct MenuEvents(pub Callback<DropdownEvent>);

struct NavItem {
    route: Route,
    label: &'static str,
}

const CENTER_NAV: &[NavItem] = &[
    NavItem {
        route: Route::Home,
        label: "HOME",
    },
    NavItem {
        route: Route::About,
        label: "ABOUT",
    },
    NavItem {
        route: Route::Resume,
        label: "RESUME",
    },
];

fn bracketed(label: &str, active: bool) -> String {
    if active {
        format!("(   {label}   )")
    } else {
        format!("( {label} )")
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeButtonProps {
    pub theme: Theme,
    pub on_toggle: Callback<()>,
}

#[function_component(ThemeButton)]
pub fn theme_button(props: &ThemeButtonProps) -> Html {
    let onclick = props.on_toggle.reform(|_: MouseEvent| ());

    html! {
        <button
            class="theme-toggle"
            type="button"
            aria-label={props.theme.toggle_label()}
            aria-pressed={props.theme.is_dark().to_string()}
            onclick={onclick}
        >
            {props.theme.footer_label()}
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactAnchorProps {
    pub link: ContactLink,
    #[prop_or_default]
    pub bracketed: bool,
}

#[function_component(ContactAnchor)]
pub fn contact_anchor(props: &ContactAnchorProps) -> Html {
    let link = props.link;
    let label = if props.bracketed {
        bracketed(link.label, false)
    } else {
        link.label.to_string()
    };

    if !link.external {
        return html! { <a class="link" href={link.href}>{label}</a> };
    }

    html! {
        <a class="link" href={link.href} target="_blank" rel="noopener noreferrer">
            {label}
            <span class="sr-only">{" (opens in a new tab)"}</span>
        </a>
    }
}

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub theme: Theme,
    pub on_toggle_theme: Callback<()>,
    pub children: Children,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    let route = use_route::<Route>().unwrap_or(Route::NotFound);
    let menu_ref = use_node_ref();
    let menu = use_dropdown(menu_ref.clone());

    {
        let dispatcher = menu.dispatcher();
        use_effect_with(route.clone(), move |route| {
            log::debug!("route changed to {}", route.to_path());
            dispatcher.dispatch(DropdownEvent::Navigated);
            || ()
        });
    }

    let menu_events = {
        let dispatcher = menu.dispatcher();
        MenuEvents(Callback::from(move |event: DropdownEvent| {
            dispatcher.dispatch(event)
        }))
    };

    let on_toggle_menu = {
        let dispatcher = menu.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(DropdownEvent::Toggle))
    };

    let center_nav = CENTER_NAV
        .iter()
        .map(|item| {
            let active = item.route == route;
            html! {
                <Link<Route>
                    to={item.route.clone()}
                    classes={classes!("nav-item", active.then_some("is-active"))}
                >
                    {bracketed(item.label, active)}
                </Link<Route>>
            }
        })
        .collect::<Html>();

    let panel = menu.is_open().then(|| {
        html! {
            <ul id="contact-links" class="nav-panel">
                { for CONTACT_LINKS.iter().map(|link| html! {
                    <li><ContactAnchor link={*link} /></li>
                }) }
            </ul>
        }
    });

    let on_contact = route == Route::Contact;

    html! {
        <ContextProvider<MenuEvents> context={menu_events}>
            <a class="skip-link" href="#content">{"Skip to main content"}</a>
            <div class="page-shell">
                <nav class="site-nav" aria-label="Primary">
                    <Link<Route> to={Route::Home} classes={classes!("nav-name")}>{PROFILE.short_name}</Link<Route>>
                    <div class="nav-center">{center_nav}</div>
                    <div class="nav-end">
                        <div class="nav-menu" ref={menu_ref}>
                            <button
                                class="nav-item"
                                type="button"
                                aria-expanded={menu.is_open().to_string()}
                                aria-controls="contact-links"
                                onclick={on_toggle_menu}
                            >
                                {bracketed("LINKS", menu.is_open())}
                            </button>
                            {panel}
                        </div>
                        <Link<Route>
                            to={Route::Contact}
                            classes={classes!("nav-item", on_contact.then_some("is-active"))}
                        >
                            {bracketed("CONTACT", on_contact)}
                        </Link<Route>>
                    </div>
                </nav>

                <main id="content" class="site-main">
                    {props.children.clone()}
                </main>

                if route != Route::Home {
                    <footer class="site-footer">
                        <ThemeButton theme={props.theme} on_toggle={props.on_toggle_theme.clone()} />
                        <span>{format!("{} ©", dom::current_year())}</span>
                    </footer>
                }
            </div>
        </ContextProvider<MenuEvents>>
    }
}
