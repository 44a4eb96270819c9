use yew::prelude::*;

use crate::i18n::t;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <section class="not-found">
            <p>{ t("app.not_found") }</p>
        </section>
    }
}
