pub mod discounts;
pub mod visa;
