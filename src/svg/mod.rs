mod parser;
mod writer;

pub use parser::parse_svg;
pub use writer::{generate_svg, render_svg};
