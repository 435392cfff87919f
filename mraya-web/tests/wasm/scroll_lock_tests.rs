use wasm_bindgen_test::*;

use mraya_web::scroll_lock;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn lock_and_unlock_toggle_body_overflow() {
    scroll_lock::unlock();
    assert!(!scroll_lock::is_locked());

    scroll_lock::lock();
    assert!(scroll_lock::is_locked());

    scroll_lock::unlock();
    assert!(!scroll_lock::is_locked());
}

#[wasm_bindgen_test]
fn unlock_is_idempotent_across_close_paths() {
    // Backdrop click, close button, Escape, and unmount all funnel into
    // unlock; repeated releases must leave the lock clear.
    scroll_lock::lock();
    scroll_lock::unlock();
    scroll_lock::unlock();
    assert!(!scroll_lock::is_locked());
}
