#[macro_use]
extern crate serde;

mod error;
pub use error::InputError;

pub mod biometrics;
pub mod body;
pub mod fatigue;
pub mod scores;
pub mod sleep;
pub mod workouts;
