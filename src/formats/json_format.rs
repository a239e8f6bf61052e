use crate::{common::EncodingBenchmark, error::CodecError};
use serde::{Deserialize, Serialize};

pub struct JsonFormat;
impl<T: Serialize + for<'de> Deserialize<'de>> EncodingBenchmark<T> for JsonFormat {
    fn name() -> &'static str {
        "JSON"
    }
    fn encode(data: &T) -> Result<Vec<u8>, CodecError> {
        serde_json::to_vec(data).map_err(|e| CodecError::encoding("JSON", e))
    }
    fn decode(data: &[u8]) -> Result<T, CodecError> {
        serde_json::from_slice(data).map_err(|e| CodecError::decoding("JSON", e))
    }
}
