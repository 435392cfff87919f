use futures::executor::block_on;
use mraya_web::pages::home::HomePage;
use mraya_web::pages::thank_you::{Props as ThankYouProps, ThankYouPage};
use yew::{AttrValue, LocalServerRenderer};

#[test]
fn home_page_renders_hero_and_cta() {
    let html = block_on(LocalServerRenderer::<HomePage>::new().render());
    assert!(html.contains("غير ديكور دارك بمرايا عصرية بدون حفير!"));
    assert!(html.contains("أطلب الآن بـ 199 درهم فقط"));
    // Sticky mobile CTA as well.
    assert!(html.contains("أطلب الآن بـ 199 درهم"));
}

#[test]
fn home_page_renders_marketing_sections_and_footer() {
    let html = block_on(LocalServerRenderer::<HomePage>::new().render());
    for copy in [
        "مرآة عالية الدقة",
        "قياس مثالي لأي مساحة",
        "للإستعمال في مختلف الأماكن",
        "طريقة تركيب سهلة وفي أقل من دقيقة",
        "قابلة للتركيب على جميع الأسطح",
        "جميع الحقوق محفوظة",
    ] {
        assert!(html.contains(copy), "missing section copy: {copy}");
    }
    assert!(html.contains("https://wa.me/212000000000"));
}

#[test]
fn home_page_keeps_modal_closed_initially() {
    let html = block_on(LocalServerRenderer::<HomePage>::new().render());
    assert!(!html.contains("تأكيد الطلب"));
}

#[test]
fn thank_you_page_greets_without_name_when_none_stored() {
    let props = ThankYouProps {
        customer_name: None,
    };
    let html = block_on(LocalServerRenderer::<ThankYouPage>::with_props(props).render());
    assert!(html.contains("شكراً لك!"));
    assert!(html.contains("لقد تم استلام طلبك بنجاح."));
}

#[test]
fn thank_you_page_greets_stored_customer_by_name() {
    let props = ThankYouProps {
        customer_name: Some(AttrValue::from("Sara")),
    };
    let html = block_on(LocalServerRenderer::<ThankYouPage>::with_props(props).render());
    assert!(html.contains("شكراً لك، Sara!"));
}

#[test]
fn thank_you_page_offers_two_exit_links() {
    let props = ThankYouProps {
        customer_name: None,
    };
    let html = block_on(LocalServerRenderer::<ThankYouPage>::with_props(props).render());
    assert!(html.contains("href=\"/\""));
    assert!(html.contains("https://wa.me/212000000000"));
    assert!(html.contains("العودة للصفحة الرئيسية"));
    assert!(html.contains("تواصل معنا على واتساب"));
}
