/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: the HTTP backend
/// client, terminal interaction, dashboard formatters and file output.
pub mod outbound;
