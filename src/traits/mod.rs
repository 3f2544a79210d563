pub mod protocol_header;

pub use protocol_header::{ProtocolHeaderRenderer, ProtocolHeaderRequest};
