//! Everything that touches the sass process: lookup, spawning, sequencing.

mod check;
mod invoker;
mod resolve;
mod runner;

pub use check::check_sources;
pub use invoker::{Invoker, ProcessError, SystemInvoker};
pub use resolve::{resolve_compiler, PathResolver, ResolveError, Resolver};
pub use runner::{RunSummary, Runner};
