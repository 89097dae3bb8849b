use yew::prelude::*;

use super::{hooks::use_typewriter, layout::ContactAnchor, typed_title::TypedTitle};
use crate::behaviors::typewriter::TypewriterTiming;
use crate::content::{CONTACT_LINKS, PROFILE};

#[function_component(Contact)]
pub fn contact() -> Html {
    let typewriter = use_typewriter("CONTACT", TypewriterTiming::default());
    let revealed = typewriter.content_revealed();
    let fade = |step: &'static str| classes!("fade", step, revealed.then_some("is-visible"));

    let socials = CONTACT_LINKS
        .iter()
        .filter(|link| link.external)
        .map(|link| html! { <li><ContactAnchor link={*link} bracketed=true /></li> })
        .collect::<Html>();

    html! {
        <section class="reveal-page">
            <TypedTitle typewriter={typewriter} open="(" close=")" />
            <p class={fade("step-1")}>{"INTERESTED IN WORKING TOGETHER? LET'S TALK."}</p>
            <a class={fade("step-2")} href={format!("mailto:{}", PROFILE.email)}>
                {PROFILE.email.to_uppercase()}
            </a>
            <ul class={classes!("social-links", fade("step-3"))}>{socials}</ul>
        </section>
    }
}
