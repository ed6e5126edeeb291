//! Observable values

pub mod observable;


pub use observable::*;
