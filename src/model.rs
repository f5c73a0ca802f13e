pub mod departure_time;
pub mod route;

pub use departure_time::*;
pub use route::*;
