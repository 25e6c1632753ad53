pub mod config;
pub mod constants;
pub mod orbital_state;
pub mod plot;
pub mod satplot_errors;
pub mod server;
pub mod spacetrack;
pub mod three_line;

pub use config::Credentials;
pub use satplot_errors::SatplotError;
pub use spacetrack::{ElementProvider, FetchOutcome, SpaceTrackClient};
