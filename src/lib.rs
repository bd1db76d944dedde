pub mod cli;
pub mod color;
pub mod error;
pub mod pipeline;
pub mod theme;
