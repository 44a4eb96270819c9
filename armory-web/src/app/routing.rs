use std::rc::Rc;

use armory_core::TransitionService;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::router::Route;

/// Run pre-navigation hooks, then push `route`.
pub fn navigate(navigator: &Navigator, transitions: &TransitionService, route: Route) {
    transitions.run_before();
    navigator.push(&route);
}

/// Run pre-navigation hooks when the location changes outside [`navigate`],
/// e.g. browser back/forward.
///
/// The check runs while the calling component renders, so the hooks fire
/// before its children render the new page. Hooks are idempotent so a second
/// run after [`navigate`] is harmless.
#[hook]
pub fn use_transition_hooks(transitions: Rc<TransitionService>) {
    let route = use_route::<Route>();
    let last_route = use_mut_ref(|| None::<Route>);
    if route_changed(&mut last_route.borrow_mut(), route) {
        transitions.run_before();
    }
}

/// Record `current` and report whether it differs from a previously seen
/// route. The first route seen is not a change.
fn route_changed(last: &mut Option<Route>, current: Option<Route>) -> bool {
    let Some(current) = current else {
        return false;
    };
    match last.replace(current.clone()) {
        Some(previous) => previous != current,
        None => false,
    }
}
