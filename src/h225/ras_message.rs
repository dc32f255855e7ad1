//! `RasMessage`, the outer extensible CHOICE over the RAS alternatives, and
//! `RasPdu`, its wire-level encode/decode entry point.

use super::ras::{GatekeeperConfirm, GatekeeperRequest};
use crate::bits::{BitReader, BitWriter};
use crate::error::{Error, ErrorKind};
use crate::per;

/// Number of root alternatives declared for `RasMessage` in H.225.0 v7.
/// Only [`GatekeeperConfirm`] (index [`GCF_INDEX`]) and
/// [`GatekeeperRequest`] (index [`GRQ_INDEX`]) are materialized; every
/// other index is `UnsupportedFeature` on decode. This mapping is a
/// wire-compatibility constant and must not drift.
pub const RAS_ALTERNATIVE_COUNT: u32 = 33;

const GCF_INDEX: u32 = 1;
const GRQ_INDEX: u32 = 3;

/// The subset of `RasMessage` alternatives this core can encode and decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasMessage {
    GatekeeperConfirm(GatekeeperConfirm),
    GatekeeperRequest(GatekeeperRequest),
}

/// Encoder/decoder for the outer RAS CHOICE.
pub struct RasPdu;

impl RasPdu {
    pub fn encode(writer: &mut BitWriter, message: &RasMessage) -> Result<(), Error> {
        let index = match message {
            RasMessage::GatekeeperConfirm(_) => GCF_INDEX,
            RasMessage::GatekeeperRequest(_) => GRQ_INDEX,
        };
        per::encode_choice_index(writer, index, RAS_ALTERNATIVE_COUNT, true)?;
        match message {
            RasMessage::GatekeeperConfirm(gcf) => gcf.encode(writer),
            RasMessage::GatekeeperRequest(grq) => grq.encode(writer),
        }
    }

    pub fn decode(reader: &mut BitReader) -> Result<RasMessage, Error> {
        let index = per::decode_choice_index(reader, RAS_ALTERNATIVE_COUNT, true)?;
        match index {
            GCF_INDEX => Ok(RasMessage::GatekeeperConfirm(GatekeeperConfirm::decode(reader)?)),
            GRQ_INDEX => Ok(RasMessage::GatekeeperRequest(GatekeeperRequest::decode(reader)?)),
            _ => Err(Error::new(ErrorKind::UnsupportedFeature, "RAS alternative not implemented in this core")),
        }
    }
}
