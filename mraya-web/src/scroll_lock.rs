//! Body scroll lock paired with modal visibility. The lock is process-wide
//! state on the shared document; it is acquired when the modal opens and
//! must be released on every close path, including unmount mid-submission.

/// Prevent the page behind the modal from scrolling.
pub fn lock() {
    set_body_overflow("hidden");
}

/// Restore normal page scrolling.
pub fn unlock() {
    set_body_overflow("auto");
}

/// Whether the document body is currently scroll-locked.
#[must_use]
pub fn is_locked() -> bool {
    web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
        .and_then(|body| body.style().get_property_value("overflow").ok())
        .is_some_and(|overflow| overflow == "hidden")
}

fn set_body_overflow(value: &str) {
    let Some(body) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.body())
    else {
        return;
    };
    let _ = body.style().set_property("overflow", value);
}
