pub mod exam;
pub mod lab;

pub use exam::*;
pub use lab::*;
