pub mod json_format;
pub mod protobuf_format;

pub use json_format::JsonFormat;
pub use protobuf_format::{AddressProto, PersonProto, ProtobufFormat};
