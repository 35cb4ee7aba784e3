//! `builtin.c` — a flat include manifest of the grouped builtin files.

use super::{Renderer, GENERATED_BANNER};
use crate::assemble::Assembly;

pub struct AggregateRenderer;

impl Renderer for AggregateRenderer {
    fn render(&self, assembly: &Assembly) -> String {
        let mut out = String::new();
        out.push_str(GENERATED_BANNER);
        out.push_str("/* Includes grouped builtin files */\n\n");
        for include in &assembly.includes {
            out.push_str(&format!("#include \"{}\"\n", include));
        }
        out
    }

    fn file_name(&self) -> &str {
        "builtin.c"
    }
}
