use mraya_order::{OrderField, OrderForm};
use wasm_bindgen::JsCast;
use yew::prelude::*;

const PRODUCT_IMG: &str =
    "https://raw.githubusercontent.com/Asrihalim/image/refs/heads/main/Screenshot%202025-11-06%20224802.png";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub form: OrderForm,
    /// True while a submission is in flight; disables the submit control.
    pub loading: bool,
    #[prop_or_default]
    pub form_error: Option<AttrValue>,
    /// Inline phone message; empty when the number is acceptable.
    #[prop_or_default]
    pub phone_error: AttrValue,
    pub on_close: Callback<()>,
    pub on_input: Callback<(OrderField, String)>,
    pub on_submit: Callback<()>,
}

fn input_callback(field: OrderField, on_input: &Callback<(OrderField, String)>) -> Callback<InputEvent> {
    let cb = on_input.clone();
    Callback::from(move |e: InputEvent| {
        if let Some(input) = e
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        {
            cb.emit((field, input.value()));
        }
    })
}

#[function_component(OrderModal)]
pub fn order_modal(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }

    let on_backdrop = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_close_btn = {
        let cb = props.on_close.clone();
        Callback::from(move |_: MouseEvent| cb.emit(()))
    };
    let on_keydown = {
        let cb = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };
    let stop_bubbling = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_submit = {
        let cb = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    let phone_class = if props.phone_error.is_empty() {
        "w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
    } else {
        "w-full p-3 border border-red-500 rounded-lg focus:ring-2 focus:ring-red-500"
    };

    html! {
        <div
            class="fixed inset-0 bg-black bg-opacity-60 z-50 flex justify-center items-start pt-10"
            role="presentation"
            onclick={on_backdrop}
        >
            <div
                class="bg-white rounded-2xl shadow-2xl max-w-2xl w-full mx-4"
                role="dialog"
                aria-modal="true"
                onclick={stop_bubbling}
                onkeydown={on_keydown}
            >
                <div class="p-6 md:p-10 relative">
                    <button
                        type="button"
                        class="absolute top-4 right-4 text-gray-400 hover:text-gray-600 text-2xl"
                        aria-label="إغلاق"
                        onclick={on_close_btn}
                    >
                        { "×" }
                    </button>
                    <crate::components::section_title::SectionTitle>
                        { "أطلب الآن واستفد من التوصيل المجاني!" }
                    </crate::components::section_title::SectionTitle>
                    <div class="flex items-center justify-center gap-4 md:gap-6 mb-8">
                        <img
                            src={PRODUCT_IMG}
                            alt="مرآة الحائط اللاصقة"
                            class="w-24 h-24 object-cover rounded-lg shadow-md border-2 border-white"
                        />
                        <div class="text-right">
                            <p class="text-4xl font-bold text-amber-600">{ "199 درهم" }</p>
                            <p class="text-gray-600 mt-1">{ "التوصيل بالمجان لجميع مدن المغرب" }</p>
                        </div>
                    </div>
                    <form onsubmit={on_submit} class="space-y-6">
                        <div>
                            <label for="name" class="block text-lg font-medium text-gray-700 mb-1">{ "الإسم الكامل" }</label>
                            <input
                                type="text"
                                id="name"
                                name="name"
                                value={props.form.name.clone()}
                                oninput={input_callback(OrderField::Name, &props.on_input)}
                                required={true}
                                class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
                                placeholder="مثال: محمد أمين"
                            />
                        </div>
                        <div>
                            <label for="phone" class="block text-lg font-medium text-gray-700 mb-1">{ "رقم الهاتف" }</label>
                            <input
                                type="tel"
                                id="phone"
                                name="phone"
                                value={props.form.phone.clone()}
                                oninput={input_callback(OrderField::Phone, &props.on_input)}
                                required={true}
                                class={phone_class}
                                placeholder="06xxxxxxxx"
                            />
                            if !props.phone_error.is_empty() {
                                <p class="text-red-500 text-sm mt-1">{ props.phone_error.clone() }</p>
                            }
                        </div>
                        <div>
                            <label for="city" class="block text-lg font-medium text-gray-700 mb-1">{ "المدينة" }</label>
                            <input
                                type="text"
                                id="city"
                                name="city"
                                value={props.form.city.clone()}
                                oninput={input_callback(OrderField::City, &props.on_input)}
                                required={true}
                                class="w-full p-3 border border-gray-300 rounded-lg focus:ring-2 focus:ring-amber-500 focus:border-amber-500"
                                placeholder="مثال: الدار البيضاء"
                            />
                        </div>
                        <button
                            type="submit"
                            disabled={props.loading}
                            class="w-full bg-amber-500 text-white font-bold text-xl py-4 rounded-lg shadow-lg hover:bg-amber-600 disabled:bg-gray-400 disabled:cursor-not-allowed flex items-center justify-center"
                        >
                            if props.loading {
                                <span class="busy-indicator" aria-hidden="true">{ "…" }</span>
                                { "جاري الإرسال" }
                            } else {
                                { "تأكيد الطلب" }
                            }
                        </button>
                        if let Some(error) = &props.form_error {
                            <p class="text-red-600 text-center mt-4">{ error.clone() }</p>
                        }
                    </form>
                </div>
            </div>
        </div>
    }
}
