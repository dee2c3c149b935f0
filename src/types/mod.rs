mod inputs;
mod models;

pub use inputs::*;
pub use models::*;
