use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::item_popup::ItemPopupContainer;
use crate::components::nav_bar::NavBar;
use crate::router::Route;

pub mod routing;
pub mod services;

pub use services::{AppServices, use_app_services};

#[function_component(App)]
pub fn app() -> Html {
    let router_base = crate::paths::router_base().map(AttrValue::from);
    html! {
        <BrowserRouter basename={router_base}>
            <AppInner />
        </BrowserRouter>
    }
}

#[function_component(AppInner)]
pub fn app_inner() -> Html {
    let services = use_memo((), |_| AppServices::load());
    let services = (*services).clone();
    routing::use_transition_hooks(services.transitions.clone());

    html! {
        <ContextProvider<AppServices> context={services}>
            <div class="app">
                <NavBar />
                <main id="content" class="content" role="main">
                    <Switch<Route> render={switch} />
                </main>
                <ItemPopupContainer />
            </div>
        </ContextProvider<AppServices>>
    }
}

fn switch(route: Route) -> Html {
    use crate::pages::{
        inventory::InventoryPage, not_found::NotFound, progress::ProgressPage, vendor::VendorPage,
    };
    match route {
        Route::Inventory => html! { <InventoryPage /> },
        Route::Progress => html! { <ProgressPage /> },
        Route::Vendor { id } => html! { <VendorPage {id} /> },
        Route::NotFound => html! { <NotFound /> },
    }
}
