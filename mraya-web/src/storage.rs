//! Single-slot session store carrying the customer's name across the
//! navigation from the order form to the thank-you page. Tab-scoped; never
//! cleared, only overwritten by the next successful order.

use crate::dom;

pub const CUSTOMER_NAME_KEY: &str = "customerName";

/// Persist the customer name after a successful submission. Failures are
/// reported on the diagnostic channel only; the confirmation page simply
/// renders without a name.
pub fn save_customer_name(name: &str) {
    match dom::session_storage() {
        Ok(storage) => {
            if let Err(err) = storage.set_item(CUSTOMER_NAME_KEY, name) {
                dom::console_error(&format!(
                    "failed to store customer name: {}",
                    dom::js_error_message(&err)
                ));
            }
        }
        Err(err) => dom::console_error(&format!(
            "sessionStorage unavailable: {}",
            dom::js_error_message(&err)
        )),
    }
}

/// Read the stored customer name, if any order succeeded in this tab.
#[must_use]
pub fn load_customer_name() -> Option<String> {
    dom::session_storage()
        .ok()
        .and_then(|storage| storage.get_item(CUSTOMER_NAME_KEY).ok().flatten())
        .filter(|name| !name.is_empty())
}
