pub mod gen;
pub mod logging;
pub mod model;
