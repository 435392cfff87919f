pub mod home;
pub mod thank_you;
