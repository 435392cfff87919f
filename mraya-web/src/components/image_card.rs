use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub src: AttrValue,
    pub alt: AttrValue,
}

#[function_component(ImageCard)]
pub fn image_card(p: &Props) -> Html {
    html! {
        <div class="bg-white p-2 rounded-xl shadow-lg overflow-hidden">
            <img src={p.src.clone()} alt={p.alt.clone()} class="w-full h-auto rounded-lg" loading="lazy" />
        </div>
    }
}
