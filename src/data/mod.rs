//! External rate-table access
//!
//! One integration: the National Bank of Poland web API, which publishes the
//! official table A mid rates used for every conversion in the simulator.

pub mod nbp;

pub use nbp::NbpClient;
