//! HTTP Handlers

mod home;
mod mission;
mod planet;
mod scientist;

pub use home::*;
pub use mission::*;
pub use planet::*;
pub use scientist::*;
