//! Record type descriptors and their instances.

pub mod definition;
pub mod instance;

pub use definition::{Method, RecordType, RecordTypeBuilder};
pub use instance::RecordInstance;
