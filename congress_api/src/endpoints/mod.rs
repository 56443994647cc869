//! Endpoint facades: one type per area of the API, each method naming a
//! path template and the shaper applied to its response.

mod bills;
mod members;
mod votes;

pub use self::bills::Bills;
pub use self::members::Members;
pub use self::votes::Votes;
