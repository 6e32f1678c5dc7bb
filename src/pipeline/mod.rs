pub mod diagnosis;
pub mod extraction;
pub mod processor;
pub mod structuring;
