use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Inventory,
    #[at("/progress")]
    Progress,
    #[at("/vendors/:id")]
    Vendor { id: u32 },
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// String table key for the navigation label, if the route is in the nav bar.
    #[must_use]
    pub const fn nav_label_key(&self) -> Option<&'static str> {
        match self {
            Self::Inventory => Some("app.nav.inventory"),
            Self::Progress => Some("app.nav.progress"),
            Self::Vendor { .. } | Self::NotFound => None,
        }
    }
}
