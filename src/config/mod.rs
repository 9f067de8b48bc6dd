//! Module for reading the check configuration from the attribute store.
//!
//! Attributes are keyed lookups by name, served from the process
//! environment. A `.env` file in the working directory is loaded into the
//! environment at startup, so the store can be administered as a file.
//!
//! | attribute | meaning |
//! |---|---|
//! | `CHECKVERSION_URL` | administrative service endpoint URL |
//! | `CHECKVERSION_SESSION` | authenticated session token |
//! | `CHECKVERSION_SERVER` | designated check server identifier |
//! | `CHECKVERSION_SERVERS` | comma separated server inventory |
//! | `CHECKVERSION_LOCAL_SERVER` | local server identifier |
//! | `CHECKVERSION_INTERVAL` | check interval, `0` or empty disables |
//! | `CHECKVERSION_LAST_ATTEMPT` | last check attempt timestamp |
//!
//! A missing or unparseable required attribute is fatal.
mod structs;
mod functions;

pub use structs::*;
pub use functions::*;
