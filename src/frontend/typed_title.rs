use yew::prelude::*;

use crate::behaviors::typewriter::Typewriter;

#[derive(Properties, PartialEq)]
pub struct TypedTitleProps {
    pub typewriter: Typewriter,
    pub open: &'static str,
    pub close: &'static str,
}

/// Title typed out between a pair of brackets that fade in first.
#[function_component(TypedTitle)]
pub fn typed_title(props: &TypedTitleProps) -> Html {
    let frame = classes!("fade", props.typewriter.frame_visible().then_some("is-visible"));

    html! {
        <h1 class="typed-title" aria-label={props.typewriter.target()}>
            <span class={frame.clone()} aria-hidden="true">{props.open}</span>
            <span class="typed-text" aria-hidden="true">{props.typewriter.text()}</span>
            <span class={frame} aria-hidden="true">{props.close}</span>
        </h1>
    }
}
