pub mod network_diagram;
pub mod scatter_line;
