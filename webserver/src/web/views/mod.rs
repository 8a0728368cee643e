//! HTML views

pub mod enterprise;
pub mod homepage;
pub mod layout;

pub use enterprise::enterprise_card;
pub use homepage::{homepage, homepage_contents};
pub use layout::page;
