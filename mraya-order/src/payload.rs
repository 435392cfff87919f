use serde::{Deserialize, Serialize};

use crate::form::OrderForm;

/// Fixed product identifier sent with every order.
pub const PRODUCT_ID: &str = "Mraya Full Body";

/// A validated order frozen for submission: the three collected fields plus
/// the locale-formatted timestamp and the fixed product identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderPayload {
    pub name: String,
    pub phone: String,
    pub city: String,
    pub timestamp: String,
    pub product: String,
}

impl OrderPayload {
    #[must_use]
    pub fn new(form: &OrderForm, timestamp: String) -> Self {
        Self {
            name: form.name.clone(),
            phone: form.phone.clone(),
            city: form.city.clone(),
            timestamp,
            product: PRODUCT_ID.to_string(),
        }
    }

    /// Field pairs in wire order, ready for form-encoding.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 5] {
        [
            ("name", &self.name),
            ("phone", &self.phone),
            ("city", &self.city),
            ("timestamp", &self.timestamp),
            ("product", &self.product),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_freezes_form_with_product_and_timestamp() {
        let form = OrderForm {
            name: "Sara".to_string(),
            phone: "0512345678".to_string(),
            city: "Rabat".to_string(),
        };
        let payload = OrderPayload::new(&form, "06/11/2025 22:48:02".to_string());
        assert_eq!(payload.product, PRODUCT_ID);
        assert_eq!(
            payload.fields(),
            [
                ("name", "Sara"),
                ("phone", "0512345678"),
                ("city", "Rabat"),
                ("timestamp", "06/11/2025 22:48:02"),
                ("product", "Mraya Full Body"),
            ]
        );
    }

    #[test]
    fn payload_serializes_all_wire_fields() {
        let form = OrderForm {
            name: "Ahmed".to_string(),
            phone: "0612345678".to_string(),
            city: "Casablanca".to_string(),
        };
        let payload = OrderPayload::new(&form, "ts".to_string());
        let value = serde_json::to_value(&payload).expect("payload serializes");
        for key in ["name", "phone", "city", "timestamp", "product"] {
            assert!(value.get(key).is_some(), "missing {key}");
        }
    }
}
