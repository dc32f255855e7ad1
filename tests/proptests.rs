//! Property-based checks for the quantified invariants laid out alongside
//! the concrete scenarios: bit round-tripping, constrained-integer width,
//! OID and IA5String round trips, and full-GRQ identity.

use h225_ras_codec::bits::{BitReader, BitWriter};
use h225_ras_codec::per;
use h225_ras_codec::{GatekeeperRequest, RasMessage, RasPdu};
use proptest::prelude::*;

fn bit_width(x: u64) -> u32 {
    if x == 0 {
        0
    } else {
        u64::BITS - x.leading_zeros()
    }
}

proptest! {
    #[test]
    fn write_then_read_round_trips_for_any_width(n in 0u32..=64, v in any::<u64>()) {
        let masked = if n == 64 { v } else { v & ((1u64 << n) - 1) };
        let mut w = BitWriter::new();
        w.write_bits(masked, n).unwrap();
        w.align_to_byte();

        let mut r = BitReader::new(w.data());
        prop_assert_eq!(r.read_bits(n).unwrap(), masked);
    }

    #[test]
    fn constrained_integer_round_trips_and_consumes_exact_width(
        min in 0u64..1000,
        span in 0u64..1000,
        offset in 0u64..1000,
    ) {
        let max = min + span;
        let value = min + (offset % (span + 1));

        let mut w = BitWriter::new();
        per::encode_constrained_integer(&mut w, value, min, max).unwrap();
        let expected_bits = if span == 0 { 0 } else { bit_width(span) };
        prop_assert_eq!(w.bit_offset() as u32, expected_bits);

        let mut r = BitReader::new(w.data());
        prop_assert_eq!(per::decode_constrained_integer(&mut r, min, max).unwrap(), value);
    }

    #[test]
    fn oid_round_trips_for_arbitrary_arcs(
        first in 0u32..3,
        second in 0u32..40,
        rest in proptest::collection::vec(0u32..(1 << 28), 0..6),
    ) {
        let mut arcs = vec![first, second];
        arcs.extend(rest);

        let mut w = BitWriter::new();
        per::encode_oid(&mut w, &arcs).unwrap();
        let mut r = BitReader::new(w.data());
        prop_assert_eq!(per::decode_oid(&mut r).unwrap(), arcs);
    }

    #[test]
    fn ia5_string_round_trips_and_byte_aligns(s in "[ -~]{0,200}") {
        let mut w = BitWriter::new();
        per::encode_ia5_string(&mut w, &s).unwrap();
        prop_assert_eq!(w.bit_offset() % 8, 0);

        let mut r = BitReader::new(w.data());
        prop_assert_eq!(per::decode_ia5_string(&mut r, None).unwrap(), s);
    }

    #[test]
    fn grq_round_trips_for_arbitrary_seq_num_and_alias(
        seq in 1u16..=65535,
        rest in proptest::collection::vec(0u32..(1 << 16), 0..4),
        alias in proptest::option::of("[ -~]{0,64}"),
    ) {
        let mut protocol_identifier = vec![0u32, 0];
        protocol_identifier.extend(rest);
        let grq = GatekeeperRequest {
            request_seq_num: seq,
            protocol_identifier,
            endpoint_alias: alias,
        };

        let mut w = BitWriter::new();
        grq.encode(&mut w).unwrap();
        let mut r = BitReader::new(w.data());
        let decoded = GatekeeperRequest::decode(&mut r).unwrap();
        prop_assert_eq!(decoded, grq);
        prop_assert!(r.bits_left() < 8);
    }

    #[test]
    fn raspdu_grq_round_trip_leaves_only_trailing_padding(seq in 1u16..=65535) {
        let message = RasMessage::GatekeeperRequest(GatekeeperRequest {
            request_seq_num: seq,
            protocol_identifier: vec![0, 0, 8, 2250, 0, 7],
            endpoint_alias: None,
        });
        let mut w = BitWriter::new();
        RasPdu::encode(&mut w, &message).unwrap();

        let mut r = BitReader::new(w.data());
        prop_assert_eq!(RasPdu::decode(&mut r).unwrap(), message);
        prop_assert!(r.bits_left() < 8);
    }
}
