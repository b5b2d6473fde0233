//! Drive the `sass` compiler over a list of source-to-destination mappings.
//!
//! ```text
//! Config → Classify → Batches → Assemble args → Invoke → Banner
//! ```
//!
//! Files are grouped into at most four batches so `sass` runs once per
//! (fresh/update, native/scss) combination, in a fixed order, stopping at the
//! first failure.

pub mod args;
pub mod banner;
pub mod batch;
pub mod config;
pub mod error;
pub mod logging;
pub mod process;
pub mod task;
