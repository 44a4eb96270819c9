use crate::app::{routing, use_app_services};
use crate::i18n::t;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

const NAV_ROUTES: [Route; 2] = [Route::Inventory, Route::Progress];

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let navigator = use_navigator();
    let services = use_app_services();
    let current = use_route::<Route>();

    let items = NAV_ROUTES.iter().filter_map(|route| {
        let label = t(route.nav_label_key()?);
        let onclick = {
            let navigator = navigator.clone();
            let services = services.clone();
            let route = route.clone();
            Callback::from(move |_: MouseEvent| {
                if let (Some(navigator), Some(services)) = (navigator.as_ref(), services.as_ref()) {
                    routing::navigate(navigator, &services.transitions, route.clone());
                }
            })
        };
        let active = current.as_ref() == Some(route);
        Some(html! {
            <li>
                <button
                    type="button"
                    class={classes!("nav-link", active.then_some("active"))}
                    aria-current={active.then_some("page")}
                    {onclick}
                >
                    { label }
                </button>
            </li>
        })
    });

    html! {
        <header role="banner" class="header">
            <span class="logo">{ t("app.title") }</span>
            <nav aria-label={t("app.title")}>
                <ul class="nav-links">{ for items }</ul>
            </nav>
        </header>
    }
}
