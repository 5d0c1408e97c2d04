//! Judge internals.
//!
//! - run.rs: strategy dispatch and the evaluate flow
//! - prompt.rs: the judge prompt template
//! - client.rs: judge call and response parse boundary

pub(crate) mod client;
pub(crate) mod prompt;
pub(crate) mod run;
