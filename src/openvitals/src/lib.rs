#[macro_use]
extern crate log;

mod snapshot;
pub use snapshot::Snapshot;

mod settings;
pub use settings::Settings;

pub mod report;
pub use report::Report;
