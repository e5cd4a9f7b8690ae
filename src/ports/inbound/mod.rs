/// Inbound ports (Driving ports) - Use case interfaces
///
/// These ports define the interfaces that callers (CLI, page renderers)
/// use to query keyword statistics.
pub mod keyword_query_port;

pub use keyword_query_port::KeywordQueryPort;
