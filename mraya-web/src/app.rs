use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::home::HomePage;
use crate::pages::thank_you::ThankYouPage;
use crate::router::Route;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn switch(route: Route) -> Html {
    if route.renders_home() {
        return html! { <HomePage /> };
    }
    // The stored name is read here, once per navigation to the
    // confirmation page, and handed down as a plain prop.
    let customer_name = crate::storage::load_customer_name().map(AttrValue::from);
    html! { <ThankYouPage {customer_name} /> }
}
