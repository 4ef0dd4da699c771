pub mod model;
pub mod referee;
pub mod selector;
