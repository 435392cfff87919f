use futures::executor::block_on;
use mraya_order::OrderForm;
use mraya_web::components::image_card::{ImageCard, Props as ImageCardProps};
use mraya_web::components::order_modal::{OrderModal, Props as OrderModalProps};
use mraya_web::components::section_title::{Props as SectionTitleProps, SectionTitle};
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};

fn modal_props(open: bool) -> OrderModalProps {
    OrderModalProps {
        open,
        form: OrderForm::default(),
        loading: false,
        form_error: None,
        phone_error: AttrValue::from(""),
        on_close: Callback::noop(),
        on_input: Callback::noop(),
        on_submit: Callback::noop(),
    }
}

#[test]
fn order_modal_renders_when_open_and_skips_when_closed() {
    let html = block_on(LocalServerRenderer::<OrderModal>::with_props(modal_props(true)).render());
    assert!(html.contains("أطلب الآن واستفد من التوصيل المجاني!"));
    assert!(html.contains("تأكيد الطلب"));
    assert!(html.contains("199 درهم"));
    for id in ["name", "phone", "city"] {
        assert!(html.contains(&format!("id=\"{id}\"")), "missing input {id}");
    }

    let html = block_on(LocalServerRenderer::<OrderModal>::with_props(modal_props(false)).render());
    assert!(!html.contains("تأكيد الطلب"));
}

#[test]
fn order_modal_shows_prefilled_values() {
    let mut props = modal_props(true);
    props.form = OrderForm {
        name: "Ahmed".to_string(),
        phone: "0612345678".to_string(),
        city: "Casablanca".to_string(),
    };
    let html = block_on(LocalServerRenderer::<OrderModal>::with_props(props).render());
    assert!(html.contains("Ahmed"));
    assert!(html.contains("0612345678"));
    assert!(html.contains("Casablanca"));
}

#[test]
fn order_modal_loading_disables_submit_and_shows_busy_text() {
    let mut props = modal_props(true);
    props.loading = true;
    let html = block_on(LocalServerRenderer::<OrderModal>::with_props(props).render());
    assert!(html.contains("disabled"));
    assert!(html.contains("جاري الإرسال"));
    assert!(!html.contains("تأكيد الطلب"));
}

#[test]
fn order_modal_surfaces_phone_and_form_errors() {
    let mut props = modal_props(true);
    props.phone_error = AttrValue::from("الرقم غير صحيح");
    props.form_error = Some(AttrValue::from("المرجو ملء جميع الخانات بشكل صحيح."));
    let html = block_on(LocalServerRenderer::<OrderModal>::with_props(props).render());
    assert!(html.contains("الرقم غير صحيح"));
    assert!(html.contains("المرجو ملء جميع الخانات بشكل صحيح."));
    assert!(html.contains("border-red-500"));
}

#[test]
fn image_card_renders_src_and_alt() {
    let props = ImageCardProps {
        src: AttrValue::from("https://example.com/mirror.png"),
        alt: AttrValue::from("مرآة"),
    };
    let html = block_on(LocalServerRenderer::<ImageCard>::with_props(props).render());
    assert!(html.contains("https://example.com/mirror.png"));
    assert!(html.contains("مرآة"));
    assert!(html.contains("loading=\"lazy\""));
}

#[test]
fn section_title_renders_children() {
    let props = SectionTitleProps {
        children: ChildrenRenderer::new(vec![yew::html! { { "قياس مثالي" } }]),
    };
    let html = block_on(LocalServerRenderer::<SectionTitle>::with_props(props).render());
    assert!(html.contains("قياس مثالي"));
    assert!(html.contains("<h2"));
}
