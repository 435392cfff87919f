use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub children: Children,
}

#[function_component(SectionTitle)]
pub fn section_title(p: &Props) -> Html {
    html! {
        <h2 class="text-3xl md:text-4xl font-extrabold text-center text-gray-800 mb-8 md:mb-12">
            { for p.children.iter() }
        </h2>
    }
}
