//! `builtin.h` — one prototype per primitive, native-only ones behind
//! `JOY_NATIVE_TYPES`.

use super::{Renderer, GENERATED_BANNER};
use crate::assemble::Assembly;

pub const INCLUDE_GUARD: &str = "JOY_BUILTIN_GENERATED_H";
pub const NATIVE_GUARD: &str = "JOY_NATIVE_TYPES";

pub struct HeaderRenderer;

impl Renderer for HeaderRenderer {
    fn render(&self, assembly: &Assembly) -> String {
        let decls = &assembly.declarations;
        let mut out = String::new();

        out.push_str(&format!("#ifndef {INCLUDE_GUARD}\n#define {INCLUDE_GUARD}\n\n"));
        out.push_str(GENERATED_BANNER);
        out.push_str("/* Declares all builtin functions */\n\n");
        out.push_str("#include \"globals.h\"\n\n");

        for symbol in &decls.regular {
            out.push_str(&prototype(symbol));
        }

        if !decls.native.is_empty() {
            out.push_str(&format!("\n#ifdef {NATIVE_GUARD}\n"));
            for symbol in &decls.native {
                out.push_str(&prototype(symbol));
            }
            out.push_str(&format!("#endif /* {NATIVE_GUARD} */\n"));
        }

        out.push_str(&format!("\n#endif /* {INCLUDE_GUARD} */\n"));
        out
    }

    fn file_name(&self) -> &str {
        "builtin.h"
    }
}

fn prototype(symbol: &str) -> String {
    format!("void {}(pEnv env);\n", symbol)
}
