use prost::Message;

use crate::{common::EncodingBenchmark, error::CodecError};

#[derive(Clone, PartialEq, Message)]
pub struct AddressProto {
    #[prost(string, tag = "1")]
    pub street: String,
    #[prost(string, tag = "2")]
    pub city: String,
    #[prost(string, tag = "3")]
    pub state: String,
    #[prost(string, tag = "4")]
    pub zip: String,
}

/// Schema-bound Person: field numbers and wire types are fixed by the
/// `#[prost]` attributes, so the encoding never carries field names.
#[derive(Clone, PartialEq, Message)]
pub struct PersonProto {
    #[prost(string, tag = "1")]
    pub name: String,
    #[prost(int32, tag = "2")]
    pub id: i32,
    #[prost(string, tag = "3")]
    pub email: String,
    #[prost(string, repeated, tag = "4")]
    pub phone_numbers: Vec<String>,
    #[prost(message, repeated, tag = "5")]
    pub addresses: Vec<AddressProto>,
}

pub struct ProtobufFormat;
impl<T: Message + Default> EncodingBenchmark<T> for ProtobufFormat {
    fn name() -> &'static str {
        "Protobuf"
    }
    fn encode(data: &T) -> Result<Vec<u8>, CodecError> {
        Ok(data.encode_to_vec())
    }
    fn decode(data: &[u8]) -> Result<T, CodecError> {
        T::decode(data).map_err(|e| CodecError::decoding("Protobuf", e))
    }
}
