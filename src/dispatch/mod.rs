//! Module for tying the decision logic and the remote exchange together.
//!
//! Every invocation runs to exactly one terminal [Outcome]:
//! - the check path: authority check first, then the policy clock, then at
//!   most one `check` request.
//! - the status path: one `status` request, then one rendered line per
//!   update record in server order.
//!
//! Skips caused by the authority check or the policy clock are successful
//! no-op outcomes, not errors. Protocol errors are logged and propagated,
//! there is no retry or fallback at this layer.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
