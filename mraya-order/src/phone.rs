use once_cell::sync::Lazy;
use regex::Regex;

/// Moroccan mobile numbers: 10 digits starting with 06, 07 or 05.
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(06|07|05)\d{8}$").expect("phone pattern is a valid regex"));

pub(crate) const MSG_PHONE_REQUIRED: &str = "المرجو إدخال رقم الهاتف";
pub(crate) const MSG_PHONE_FORMAT: &str =
    "الرقم غير صحيح. يجب أن يبدأ بـ 06، 07 أو 05 ويتكون من 10 أرقام.";

/// Result of checking a phone string, with the user-facing message to show
/// next to the field. An empty message means the number is acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhoneValidation {
    pub valid: bool,
    pub message: &'static str,
}

impl PhoneValidation {
    const fn ok() -> Self {
        Self {
            valid: true,
            message: "",
        }
    }

    const fn rejected(message: &'static str) -> Self {
        Self {
            valid: false,
            message,
        }
    }
}

/// Validate a phone string. Pure; called on every keystroke for inline
/// feedback and once more at submit time, where its verdict is authoritative.
#[must_use]
pub fn validate_phone(phone: &str) -> PhoneValidation {
    if phone.is_empty() {
        return PhoneValidation::rejected(MSG_PHONE_REQUIRED);
    }
    if !PHONE_PATTERN.is_match(phone) {
        return PhoneValidation::rejected(MSG_PHONE_FORMAT);
    }
    PhoneValidation::ok()
}
