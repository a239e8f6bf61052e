use crate::error::CodecError;

/// One wire format under test. Implementations are stateless markers so the
/// format is chosen at the call site, e.g. `measure_roundtrip::<_, JsonFormat>`.
pub trait EncodingBenchmark<T> {
    fn name() -> &'static str;
    fn encode(data: &T) -> Result<Vec<u8>, CodecError>;
    fn decode(data: &[u8]) -> Result<T, CodecError>;
}
