mod fast_sin;
mod batch;

pub use fast_sin::*;
pub use batch::*;
