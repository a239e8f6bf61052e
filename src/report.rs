use std::{
    fmt,
    time::{Duration, Instant},
};

use crate::{common::EncodingBenchmark, error::CodecError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundTripReport {
    pub format: &'static str,

    pub serialize: Duration,

    pub deserialize: Duration,

    pub size_bytes: usize,
}

impl RoundTripReport {
    #[must_use]
    pub fn serialize_ms(&self) -> f64 {
        duration_ms(self.serialize)
    }

    #[must_use]
    pub fn deserialize_ms(&self) -> f64 {
        duration_ms(self.deserialize)
    }
}

impl fmt::Display for RoundTripReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.format)?;
        writeln!(f, "  Serialize time: {} ms", self.serialize_ms())?;
        writeln!(f, "  Deserialize time: {} ms", self.deserialize_ms())?;
        write!(f, "  Size: {} bytes", self.size_bytes)
    }
}

/// Nanosecond count scaled to fractional milliseconds.
#[must_use]
pub fn duration_ms(duration: Duration) -> f64 {
    duration.as_nanos() as f64 / 1_000_000.0
}

/// Times exactly one encode and one decode of `data` with format `F`.
///
/// Only the codec calls sit between the clock reads. The decoded value is
/// dropped without being compared to `data`.
pub fn measure_roundtrip<T, F>(data: &T) -> Result<RoundTripReport, CodecError>
where
    F: EncodingBenchmark<T>,
{
    let serialize_start = Instant::now();
    let encoded = F::encode(data)?;
    let serialize = serialize_start.elapsed();

    let deserialize_start = Instant::now();
    let decoded = F::decode(&encoded)?;
    let deserialize = deserialize_start.elapsed();

    drop(decoded);

    Ok(RoundTripReport {
        format: F::name(),
        serialize,
        deserialize,
        size_bytes: encoded.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        fixture::{Fixtures, PersonData},
        formats::{JsonFormat, PersonProto, ProtobufFormat},
    };

    #[test]
    fn test_duration_ms_conversion() {
        assert_eq!(duration_ms(Duration::from_nanos(1_500_000)), 1.5);
        assert_eq!(duration_ms(Duration::from_millis(2)), 2.0);
        assert_eq!(duration_ms(Duration::ZERO), 0.0);
    }

    #[test]
    fn test_report_rendering() {
        let report = RoundTripReport {
            format: "JSON",
            serialize: Duration::from_micros(1_250),
            deserialize: Duration::from_nanos(500_000),
            size_bytes: 7_093,
        };

        assert_eq!(
            report.to_string(),
            "JSON:\n  Serialize time: 1.25 ms\n  Deserialize time: 0.5 ms\n  Size: 7093 bytes"
        );
    }

    #[test]
    fn test_measure_standard_fixtures() {
        let fixtures = Fixtures::standard();

        let json = measure_roundtrip::<PersonData, JsonFormat>(&fixtures.data).unwrap();
        let proto = measure_roundtrip::<PersonProto, ProtobufFormat>(&fixtures.person).unwrap();

        assert_eq!(json.format, "JSON");
        assert_eq!(proto.format, "Protobuf");
        assert!(json.serialize_ms() >= 0.0);
        assert!(json.deserialize_ms() >= 0.0);
        assert!(proto.serialize_ms() >= 0.0);
        assert!(proto.deserialize_ms() >= 0.0);
        assert!(proto.size_bytes < json.size_bytes);
    }

    #[test]
    fn test_size_is_repeatable() {
        let fixtures = Fixtures::standard();

        let first = measure_roundtrip::<PersonProto, ProtobufFormat>(&fixtures.person).unwrap();
        let second = measure_roundtrip::<PersonProto, ProtobufFormat>(&fixtures.person).unwrap();

        assert_eq!(first.size_bytes, second.size_bytes);
    }
}
