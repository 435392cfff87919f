use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="bg-white shadow-md p-4 text-center sticky top-0 z-40" role="banner">
            <h1 class="text-2xl font-bold text-gray-900">{ "المرايا اللاصقة الأنيقة" }</h1>
            <p class="text-gray-600">{ "الجودة والأناقة في منزلك" }</p>
        </header>
    }
}
