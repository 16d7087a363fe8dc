//! Use cases built on the ports.

pub mod generate;
pub mod render;

pub use generate::{next_steps, plan, scaffold_dirs, GenerateService};
pub use render::render_tree;
