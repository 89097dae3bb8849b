use js_sys::{Date, Function, Reflect};
use std::time::Duration;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::{window, Element, Event, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions};
use yew::NodeRef;

use crate::behaviors::{
    dropdown::ClickTarget,
    scroll_spy::{ScrollObservation, SectionGeometry},
    theme::{Theme, DARK_ROOT_CLASS},
};
use crate::content::SectionLink;

fn system_prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn initial_theme() -> Theme {
    Theme::from_dark(system_prefers_dark())
}

fn root_element() -> Option<Element> {
    window()?.document()?.document_element()
}

pub fn apply_theme(theme: Theme) {
    let Some(root) = root_element() else {
        return;
    };

    let _ = root.set_attribute("data-theme", theme.as_str());
    let classes = root.class_list();
    let _ = classes.remove_1(DARK_ROOT_CLASS);
    if let Some(class) = theme.root_class() {
        let _ = classes.add_1(class);
    }
}

fn prefers_reduced_motion() -> bool {
    window()
        .and_then(|w| {
            w.match_media("(prefers-reduced-motion: reduce)")
                .ok()
                .flatten()
        })
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

/// Applies the theme inside a view transition when the browser has one.
pub fn apply_theme_with_transition(theme: Theme) {
    if prefers_reduced_motion() {
        apply_theme(theme);
        return;
    }

    let Some(document) = window().and_then(|w| w.document()) else {
        apply_theme(theme);
        return;
    };

    let document_js: JsValue = document.into();
    let Ok(start_view_transition) =
        Reflect::get(&document_js, &JsValue::from_str("startViewTransition"))
    else {
        apply_theme(theme);
        return;
    };

    let Some(start_view_transition) = start_view_transition.dyn_ref::<Function>() else {
        apply_theme(theme);
        return;
    };

    let callback = Closure::once_into_js(move || {
        apply_theme(theme);
    });

    if start_view_transition.call1(&document_js, &callback).is_err() {
        apply_theme(theme);
    }
}

pub fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

fn section_element(id: &str) -> Option<HtmlElement> {
    window()?
        .document()?
        .get_element_by_id(id)?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// `None` when the section is not mounted yet.
fn section_geometry(id: &str) -> Option<SectionGeometry> {
    let element = section_element(id)?;
    Some(SectionGeometry::new(
        id,
        f64::from(element.offset_top()),
        f64::from(element.offset_height()),
    ))
}

pub fn measure_sections(sections: &[SectionLink], hero_id: &str) -> ScrollObservation {
    ScrollObservation {
        offset: scroll_offset(),
        sections: sections
            .iter()
            .filter_map(|section| section_geometry(section.id))
            .collect(),
        hero_bottom: section_geometry(hero_id).map(|hero| hero.top + hero.height),
    }
}

/// Smooth-scrolls to a section. Returns false when it is not mounted.
pub fn scroll_to_section(id: &str) -> bool {
    let Some(element) = section_element(id) else {
        return false;
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

/// Anything inside `container` (the toggle and its panel) counts as the
/// panel; the toggle's own handler has already dispatched the toggle.
pub fn classify_click(container: &NodeRef, event: &Event) -> ClickTarget {
    let Some(container) = container.cast::<Node>() else {
        return ClickTarget::Outside;
    };

    let target = event.target().and_then(|target| target.dyn_into::<Node>().ok());
    if container.contains(target.as_ref()) {
        ClickTarget::Panel
    } else {
        ClickTarget::Outside
    }
}

pub fn current_year() -> u32 {
    Date::new_0().get_full_year()
}

pub fn millis(duration: Duration) -> u32 {
    u32::try_from(duration.as_millis()).unwrap_or(u32::MAX)
}
