
pub use program::{ProgramBuilder, mode, op};
