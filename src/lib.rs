pub mod common;
pub mod error;
pub mod fixture;
pub mod formats;
pub mod report;

pub use common::EncodingBenchmark;
pub use error::CodecError;
pub use fixture::{
    AddressData, FixtureShape, Fixtures, PersonData, create_large_data, create_large_person,
};
pub use formats::{AddressProto, JsonFormat, PersonProto, ProtobufFormat};
pub use report::{RoundTripReport, duration_ms, measure_roundtrip};
