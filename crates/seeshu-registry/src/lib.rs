//! seeshu-registry
//!
//! Static demo fixtures: the baby record behind the demo ID tag, the
//! consultation doctors, nearby emergency facilities, and the training-hub
//! modules. Nothing here is durable — the fixtures are process-lifetime
//! constants standing in for stores this system does not have.

pub mod babies;
pub mod doctors;
pub mod error;
pub mod facilities;
pub mod training;
