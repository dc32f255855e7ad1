#![no_main]
use h225_ras_codec::bits::BitReader;
use h225_ras_codec::RasPdu;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut reader = BitReader::new(data);
    let _ = RasPdu::decode(&mut reader);
});
