use yew::prelude::*;

use super::{hooks::use_typewriter, typed_title::TypedTitle};
use crate::behaviors::typewriter::TypewriterTiming;
use crate::content::PROFILE;

#[function_component(About)]
pub fn about() -> Html {
    let typewriter = use_typewriter(PROFILE.short_name, TypewriterTiming::default());
    let bio = classes!("bio", "fade", typewriter.content_revealed().then_some("is-visible"));

    html! {
        <section class="reveal-page centered">
            <TypedTitle typewriter={typewriter} open="[" close="]" />
            <p class={bio}>{PROFILE.bio}</p>
        </section>
    }
}
