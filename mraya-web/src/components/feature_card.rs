use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub text: AttrValue,
}

#[function_component(FeatureCard)]
pub fn feature_card(p: &Props) -> Html {
    html! {
        <div class="bg-slate-700 text-white text-lg md:text-xl font-bold py-3 px-6 rounded-full shadow-lg transition-transform duration-300 hover:scale-105">
            { p.text.clone() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn feature_card_renders_text() {
        let props = Props {
            text: AttrValue::from("مقاومة للكسر"),
        };
        let html = block_on(LocalServerRenderer::<FeatureCard>::with_props(props).render());
        assert!(html.contains("مقاومة للكسر"));
    }
}
