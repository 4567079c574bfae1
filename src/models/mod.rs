pub mod actor;
pub mod film;

pub use actor::*;
pub use film::*;
