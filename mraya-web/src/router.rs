use yew_router::prelude::*;

/// The two recognized paths. Anything else falls back to the home page;
/// there is no 404 state.
#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/thank-you-page")]
    ThankYou,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// Whether this route renders the home page (the default and the
    /// fallback for unrecognized paths).
    #[must_use]
    pub const fn renders_home(&self) -> bool {
        matches!(self, Self::Home | Self::NotFound)
    }
}
