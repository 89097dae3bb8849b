use yew::prelude::*;
use yew_router::prelude::*;

use super::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="reveal-page centered">
            <h1 class="typed-title">{"( 4 0 4 )"}</h1>
            <p class="muted">{"PAGE NOT FOUND"}</p>
            <Link<Route> to={Route::Home} classes={classes!("link")}>{"( BACK TO HOME )"}</Link<Route>>
        </section>
    }
}
