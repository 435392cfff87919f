use yew::prelude::*;

use crate::components::footer::WHATSAPP_URL;

/// Confirmation page. The customer name is read from session storage by the
/// route switch and passed down; without one the greeting renders plain.
#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub customer_name: Option<AttrValue>,
}

#[function_component(ThankYouPage)]
pub fn thank_you_page(props: &Props) -> Html {
    let name_clause = props
        .customer_name
        .as_ref()
        .map(|name| format!("، {name}"))
        .unwrap_or_default();

    html! {
        <div class="bg-gray-100 min-h-screen flex items-center justify-center text-center p-4">
            <div class="bg-white p-8 md:p-12 rounded-2xl shadow-2xl max-w-2xl w-full">
                <div class="text-green-500 mb-4">
                    <svg class="w-24 h-24 mx-auto" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 12l2 2 4-4m6 2a9 9 0 11-18 0 9 9 0 0118 0z" />
                    </svg>
                </div>
                <h1 class="text-3xl md:text-4xl font-extrabold text-gray-800 mb-4">
                    { format!("شكراً لك{name_clause}!") }
                </h1>
                <p class="text-lg text-gray-600 mb-2">{ "لقد تم استلام طلبك بنجاح." }</p>
                <p class="text-lg text-gray-600 mb-8">
                    { "سيتصل بك فريقنا في أقرب وقت لتأكيد معلومات التوصيل." }
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center">
                    <a
                        href="/"
                        class="bg-amber-500 text-white font-bold text-lg px-8 py-3 rounded-lg shadow-lg hover:bg-amber-600"
                    >
                        { "العودة للصفحة الرئيسية" }
                    </a>
                    <a
                        href={WHATSAPP_URL}
                        class="bg-green-500 text-white font-bold text-lg px-8 py-3 rounded-lg shadow-lg hover:bg-green-600"
                    >
                        { "تواصل معنا على واتساب" }
                    </a>
                </div>
            </div>
        </div>
    }
}
