//! Input handling for the yearline graph.

pub mod graph_input_handler;

pub use graph_input_handler::{handle_graph_input, GraphInputResult};
