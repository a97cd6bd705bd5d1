pub mod html;
pub mod reference;
pub mod reports;
