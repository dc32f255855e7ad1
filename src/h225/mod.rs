//! A small demonstration grammar of H.225.0 RAS structures: enough to
//! round-trip a `GatekeeperRequest`/`GatekeeperConfirm` pair through the
//! outer `RasPDU` CHOICE.

pub mod ras;
pub mod ras_message;

pub use ras::{GatekeeperConfirm, GatekeeperRequest};
pub use ras_message::{RasMessage, RasPdu};
