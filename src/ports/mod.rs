/// Ports module defining interfaces for hexagonal architecture
///
/// The use cases only see these traits; adapters provide the backend
/// client, the terminal and the output destinations.
pub mod outbound;
