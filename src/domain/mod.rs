pub mod donor;

pub use donor::*;
