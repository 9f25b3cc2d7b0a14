pub mod clock;
pub mod controller;
pub mod input_adapter;

pub use clock::*;
pub use controller::*;
pub use input_adapter::*;
