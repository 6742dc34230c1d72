pub mod pricing;
pub mod search;
pub mod validation;
