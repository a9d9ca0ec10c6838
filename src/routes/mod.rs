pub mod health_check;
pub mod send_blood_request;

pub use health_check::*;
pub use send_blood_request::*;
