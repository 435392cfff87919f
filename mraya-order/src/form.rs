use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::phone::validate_phone;

/// The three fields collected by the order modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderField {
    Name,
    Phone,
    City,
}

impl OrderField {
    /// Field identifier as used in form markup and the wire payload.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::City => "city",
        }
    }
}

/// Raw order-intake form data. Created empty when the home page mounts and
/// mutated field by field on input events; reset only by page teardown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OrderForm {
    pub name: String,
    pub phone: String,
    pub city: String,
}

/// Form-level gate failure. The message is the banner shown under the
/// submit button; correcting the inputs recovers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("المرجو ملء جميع الخانات بشكل صحيح.")]
    Incomplete,
}

impl OrderForm {
    pub fn set(&mut self, field: OrderField, value: String) {
        match field {
            OrderField::Name => self.name = value,
            OrderField::Phone => self.phone = value,
            OrderField::City => self.city = value,
        }
    }

    #[must_use]
    pub fn get(&self, field: OrderField) -> &str {
        match field {
            OrderField::Name => &self.name,
            OrderField::Phone => &self.phone,
            OrderField::City => &self.city,
        }
    }

    /// Synchronous submission gate: name and city non-empty, phone valid.
    ///
    /// # Errors
    /// Returns `FormError::Incomplete` when any field is missing or the
    /// phone number fails validation.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.name.trim().is_empty() || self.city.trim().is_empty() {
            return Err(FormError::Incomplete);
        }
        if !validate_phone(&self.phone).valid {
            return Err(FormError::Incomplete);
        }
        Ok(())
    }
}
