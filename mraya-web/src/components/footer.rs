use yew::prelude::*;

pub const WHATSAPP_URL: &str = "https://wa.me/212000000000";

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="bg-gray-800 text-white text-center p-6 mt-16 md:mt-0 pb-20 md:pb-6">
            <p>{ "© 2024. جميع الحقوق محفوظة." }</p>
            <p>
                { "للطلب عبر الواتساب: " }
                <a href={WHATSAPP_URL} class="text-green-400 font-bold hover:underline">{ "اضغط هنا" }</a>
            </p>
        </footer>
    }
}
