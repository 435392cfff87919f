use wasm_bindgen_test::*;

use mraya_web::storage;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn stored_name_round_trips_and_is_overwritten() {
    storage::save_customer_name("Ahmed");
    assert_eq!(storage::load_customer_name().as_deref(), Some("Ahmed"));

    // The next successful order in the same tab overwrites the slot.
    storage::save_customer_name("Sara");
    assert_eq!(storage::load_customer_name().as_deref(), Some("Sara"));
}

#[wasm_bindgen_test]
fn empty_slot_reads_as_absent() {
    let session = mraya_web::dom::session_storage().expect("sessionStorage");
    session
        .remove_item(storage::CUSTOMER_NAME_KEY)
        .expect("remove key");
    assert_eq!(storage::load_customer_name(), None);
}
