use mraya_order::{
    OrderField, OrderForm, OrderPayload, SubmissionOutcome, SubmitPhase, begin_submission,
    validate_phone,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::feature_card::FeatureCard;
use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::components::image_card::ImageCard;
use crate::components::order_modal::OrderModal;
use crate::components::section_title::SectionTitle;
use crate::router::Route;
use crate::submission::{Client, SubmissionClient};
use crate::{dom, scroll_lock, storage, submission};

const IMG_BASE: &str = "https://raw.githubusercontent.com/Asrihalim/image/refs/heads/main";

const FEATURES: [&str; 5] = [
    "مرآة عالية الدقة",
    "مقاومة للكسر",
    "سهلة التركيب",
    "جوانب دائرية وآمنة",
    "تلصق على أي سطح",
];

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let modal_open = use_state(|| false);
    let form = use_state(OrderForm::default);
    let phase = use_state(SubmitPhase::default);
    let form_error = use_state(|| None::<AttrValue>);
    let phone_error = use_state(|| AttrValue::from(""));
    let navigator = use_navigator();

    // Scroll lock follows modal visibility; the teardown releases it on
    // unmount regardless of exit path, including mid-submission.
    {
        let open = *modal_open;
        use_effect_with(open, move |is_open| {
            if *is_open {
                scroll_lock::lock();
            } else {
                scroll_lock::unlock();
            }
            || scroll_lock::unlock()
        });
    }

    let open_modal = {
        let modal_open = modal_open.clone();
        Callback::from(move |_: MouseEvent| modal_open.set(true))
    };
    let close_modal = {
        let modal_open = modal_open.clone();
        // Closing while Submitting does not abort the in-flight request;
        // its outcome still lands when it settles.
        Callback::from(move |()| modal_open.set(false))
    };

    let on_input = {
        let form = form.clone();
        let phone_error = phone_error.clone();
        Callback::from(move |(field, value): (OrderField, String)| {
            let mut next = (*form).clone();
            next.set(field, value);
            if field == OrderField::Phone {
                // Advisory per-keystroke check; the submit-time pass is
                // the authoritative one.
                phone_error.set(AttrValue::from(validate_phone(&next.phone).message));
            }
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let phase = phase.clone();
        let form_error = form_error.clone();
        let phone_error = phone_error.clone();
        let navigator = navigator.clone();
        Callback::from(move |()| {
            if phase.is_submitting() {
                return;
            }
            form_error.set(None);
            let current = (*form).clone();
            phone_error.set(AttrValue::from(validate_phone(&current.phone).message));

            match begin_submission(*phase, &current) {
                Err(err) => form_error.set(Some(AttrValue::from(err.to_string()))),
                Ok(next) => {
                    // A non-accepting phase (e.g. Success with navigation
                    // unavailable) comes back unchanged; only a fresh
                    // transition into Submitting may reach the client.
                    if !next.is_submitting() {
                        return;
                    }
                    phase.set(next);
                    let phase = phase.clone();
                    let form_error = form_error.clone();
                    let navigator = navigator.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        let payload = OrderPayload::new(&current, dom::locale_timestamp());
                        let client = Client::from_endpoint(&submission::configured_endpoint());
                        match client.submit(&payload).await {
                            SubmissionOutcome::Success => {
                                storage::save_customer_name(&payload.name);
                                phase.set(SubmitPhase::Success);
                                if let Some(nav) = navigator {
                                    nav.push(&Route::ThankYou);
                                }
                            }
                            SubmissionOutcome::Failure(err) => {
                                form_error.set(Some(AttrValue::from(err.banner())));
                                phase.set(SubmitPhase::Failed);
                            }
                        }
                    });
                }
            }
        })
    };

    html! {
        <div class="bg-gray-100 min-h-screen text-gray-800">
            <OrderModal
                open={*modal_open}
                form={(*form).clone()}
                loading={phase.is_submitting()}
                form_error={(*form_error).clone()}
                phone_error={(*phone_error).clone()}
                on_close={close_modal}
                on_input={on_input}
                on_submit={on_submit}
            />
            <Header />
            <main class="container mx-auto px-4 py-8 md:py-12">
                <section class="text-center mb-16 fade-in">
                    <h2 class="text-4xl md:text-5xl font-extrabold mb-4 text-slate-800">
                        { "غير ديكور دارك بمرايا عصرية بدون حفير!" }
                    </h2>
                    <p class="text-lg text-gray-700 max-w-3xl mx-auto mb-8">
                        { "مرايا عالية الجودة، مقاومة للكسر، وكتلصق بسهولة على أي حيط. الأناقة والعملية فمنتج واحد." }
                    </p>
                    <div class="flex justify-center">
                        <button
                            onclick={open_modal.clone()}
                            class="bg-amber-500 text-white font-bold text-xl px-10 py-4 rounded-lg shadow-lg hover:bg-amber-600"
                        >
                            { "أطلب الآن بـ 199 درهم فقط" }
                        </button>
                    </div>
                </section>
                <section class="grid md:grid-cols-2 gap-8 md:gap-12 items-center mb-16 fade-in">
                    <div class="order-2 md:order-1 flex flex-col items-center md:items-start gap-4">
                        { for FEATURES.iter().map(|text| html! { <FeatureCard text={*text} /> }) }
                    </div>
                    <div class="order-1 md:order-2">
                        <ImageCard
                            src={format!("{IMG_BASE}/Screenshot%202025-11-06%20224802.png")}
                            alt="مرآة عالية الدقة بمميزات متعددة"
                        />
                    </div>
                </section>
                <section class="my-16 fade-in">
                    <SectionTitle>{ "قياس مثالي لأي مساحة" }</SectionTitle>
                    <ImageCard
                        src={format!("{IMG_BASE}/Screenshot%202025-11-06%20224917.png")}
                        alt="قياسات المرآة 90 سم في 40 سم"
                    />
                </section>
                <section class="my-16 fade-in">
                    <SectionTitle>{ "للإستعمال في مختلف الأماكن" }</SectionTitle>
                    <ImageCard
                        src={format!("{IMG_BASE}/Screenshot%202025-11-06%20224949.png")}
                        alt="استعمالات المرآة في أماكن مختلفة"
                    />
                </section>
                <section class="my-16 fade-in">
                    <SectionTitle>{ "طريقة تركيب سهلة وفي أقل من دقيقة" }</SectionTitle>
                    <ImageCard
                        src={format!("{IMG_BASE}/Screenshot%202025-11-06%20225012.png")}
                        alt="خطوات تركيب المرآة"
                    />
                    <div class="mt-8">
                        <ImageCard
                            src={format!("{IMG_BASE}/Screenshot%202025-11-06%20225042.png")}
                            alt="لا تحتاج للحفر"
                        />
                    </div>
                </section>
                <section class="my-16 fade-in">
                    <SectionTitle>{ "قابلة للتركيب على جميع الأسطح" }</SectionTitle>
                    <ImageCard
                        src={format!("{IMG_BASE}/Screenshot%202025-11-06%20225108.png")}
                        alt="المرآة قابلة للتركيب على أسطح متعددة"
                    />
                </section>
            </main>
            <div class="md:hidden fixed bottom-0 left-0 right-0 bg-white p-3 border-t border-gray-200 shadow-lg z-30">
                <button
                    onclick={open_modal}
                    class="w-full bg-amber-500 text-white font-bold text-lg py-3 rounded-lg shadow-md hover:bg-amber-600"
                >
                    { "أطلب الآن بـ 199 درهم" }
                </button>
            </div>
            <Footer />
        </div>
    }
}
