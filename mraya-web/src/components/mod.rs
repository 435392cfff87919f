pub mod feature_card;
pub mod footer;
pub mod header;
pub mod image_card;
pub mod order_modal;
pub mod section_title;
