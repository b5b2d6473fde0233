//! Argument handling for sass invocations.
//!
//! ```text
//! Options + BatchKey → Assemble → InvocationSpec (+ file args from the batch)
//! ```
//!
//! Each stage is a pure function that can be unit-tested independently.

mod assembler;
mod pipeline;
mod registry;

pub use assembler::{build_args, ArgAssembler};
pub use pipeline::InvocationSpec;
pub use registry::{
    flag_name, is_reserved, option_args, CHECK_FLAG, COMPILER_PROGRAM, FORCE_FLAG, SCSS_FLAG,
    UPDATE_FLAG, WRAPPER_ARGS, WRAPPER_PROGRAM,
};
