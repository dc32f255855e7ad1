//! `GatekeeperRequest` (GRQ) and `GatekeeperConfirm` (GCF), the two RAS
//! message bodies materialized in this core.

use crate::bits::{BitReader, BitWriter};
use crate::error::Error;
use crate::per;

/// Number of OPTIONAL slots declared in the real H.225 v7 `GatekeeperRequest`
/// SEQUENCE. Only [`ENDPOINT_ALIAS_SLOT`] is materialized here; the rest of
/// the preamble is always written as zero so the wire layout stays
/// compatible with a v7 peer even though this core only understands one of
/// the optional fields.
pub const GRQ_OPTIONAL_COUNT: u32 = 12;

/// Declaration-order index of `endpointAlias` among the GRQ OPTIONAL slots.
const ENDPOINT_ALIAS_SLOT: u32 = 0;

/// A gatekeeper discovery request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatekeeperRequest {
    pub request_seq_num: u16,
    pub protocol_identifier: Vec<u32>,
    pub endpoint_alias: Option<String>,
}

impl GatekeeperRequest {
    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), Error> {
        per::encode_extension_marker(writer, false)?;

        let mut present = vec![false; GRQ_OPTIONAL_COUNT as usize];
        present[ENDPOINT_ALIAS_SLOT as usize] = self.endpoint_alias.is_some();
        let preamble = per::preamble_from_flags(&present);
        per::encode_sequence_preamble(writer, preamble, GRQ_OPTIONAL_COUNT)?;

        per::encode_constrained_integer(writer, self.request_seq_num as u64, 1, 65535)?;
        per::encode_oid(writer, &self.protocol_identifier)?;

        if let Some(alias) = &self.endpoint_alias {
            per::encode_ia5_string(writer, alias)?;
        }
        Ok(())
    }

    pub fn decode(reader: &mut BitReader) -> Result<Self, Error> {
        let _extension = per::decode_extension_marker(reader)?;
        let preamble = per::decode_sequence_preamble(reader, GRQ_OPTIONAL_COUNT)?;

        let request_seq_num = per::decode_constrained_integer(reader, 1, 65535)? as u16;
        let protocol_identifier = per::decode_oid(reader)?;

        let endpoint_alias = if per::flag_at(preamble, GRQ_OPTIONAL_COUNT, ENDPOINT_ALIAS_SLOT) {
            Some(per::decode_ia5_string(reader, None)?)
        } else {
            None
        };

        Ok(GatekeeperRequest { request_seq_num, protocol_identifier, endpoint_alias })
    }
}

/// No OPTIONAL fields are materialized for GCF in this core; extending it
/// to the full v7 declaration means widening this the same way
/// [`GRQ_OPTIONAL_COUNT`] widens [`GatekeeperRequest`].
pub const GCF_OPTIONAL_COUNT: u32 = 0;

/// A minimal gatekeeper confirmation, carrying only the echoed sequence number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatekeeperConfirm {
    pub request_seq_num: u16,
}

impl GatekeeperConfirm {
    pub fn encode(&self, writer: &mut BitWriter) -> Result<(), Error> {
        per::encode_extension_marker(writer, false)?;
        per::encode_sequence_preamble(writer, 0, GCF_OPTIONAL_COUNT)?;
        per::encode_constrained_integer(writer, self.request_seq_num as u64, 1, 65535)
    }

    pub fn decode(reader: &mut BitReader) -> Result<Self, Error> {
        let _extension = per::decode_extension_marker(reader)?;
        let _preamble = per::decode_sequence_preamble(reader, GCF_OPTIONAL_COUNT)?;
        let request_seq_num = per::decode_constrained_integer(reader, 1, 65535)? as u16;
        Ok(GatekeeperConfirm { request_seq_num })
    }
}
