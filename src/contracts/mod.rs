//! Contract subsystem.
//!
//! # Data Flow
//! ```text
//! ContractsConfig / environment
//!     → factory.rs (addresses → cached ContractHandle per ContractName)
//!     → abi.rs (sol! interfaces: calldata encoding, event types)
//!     → events.rs (receipt logs → ParsedEvent → EventRecord)
//! ```

pub mod abi;
pub mod events;
pub mod factory;
pub mod names;

pub use events::{find_event_by_name, parse_receipt, EventRecord, ParsedEvent};
pub use factory::{ContractAddresses, ContractFactory, ContractHandle};
pub use names::ContractName;
