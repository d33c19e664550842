//! Bakes finished atlases into C source form (`fonts.h` / `fonts.c`).
//!
//! The emitted tables are what an embedded renderer links against: one
//! `sdf_data_<name>` byte array and one `glyphs_<name>` entry table per font,
//! tied together by a `fonts[]` table indexed with the `FontName` enum.

use crate::atlas::FontAtlas;

/// Emit the header: struct typedefs, extern declarations, font enum and the
/// static font table.
pub fn emit_header(atlases: &[FontAtlas]) -> String {
    let mut h = String::new();
    h.push_str("#ifndef FONT_H\n#define FONT_H\n\n#include <stdint.h>\n\n");
    h.push_str("typedef struct {\n");
    h.push_str("    uint32_t offset;\n");
    h.push_str("    uint16_t size;\n");
    h.push_str("    uint16_t width;\n");
    h.push_str("    uint16_t height;\n");
    h.push_str("} Glyph;\n\n");

    for atlas in atlases {
        h.push_str(&format!("extern const uint8_t sdf_data_{}[];\n", atlas.name));
        h.push_str(&format!("extern const Glyph glyphs_{}[];\n\n", atlas.name));
    }

    h.push_str("typedef struct {\n");
    h.push_str("    uint8_t size;\n");
    h.push_str("    const uint8_t* sdf_data;\n");
    h.push_str("    const Glyph* glyphs;\n");
    h.push_str("} Font;\n\n");

    h.push_str("typedef enum {\n");
    for atlas in atlases {
        h.push_str(&format!("    {},\n", atlas.name.to_uppercase()));
    }
    h.push_str("} FontName;\n\n");

    h.push_str("static const Font fonts[] = {\n");
    for atlas in atlases {
        h.push_str(&format!(
            "    {{ {}, sdf_data_{}, glyphs_{} }},\n",
            atlas.pixel_size, atlas.name, atlas.name
        ));
    }
    h.push_str("};\n\n");
    h.push_str("#endif // FONT_H\n");
    h
}

/// Emit the source file: the per-font data and glyph tables.
pub fn emit_source(atlases: &[FontAtlas]) -> String {
    let mut c = String::new();
    c.push_str("#include \"fonts.h\"\n\n");

    for atlas in atlases {
        c.push_str(&format!("const uint8_t sdf_data_{}[] = {{\n", atlas.name));
        for (i, value) in atlas.sdf_data.iter().enumerate() {
            c.push_str(&format!("{}, ", value));
            if (i + 1) % 12 == 0 {
                c.push('\n');
            }
        }
        c.push_str("};\n\n");

        c.push_str(&format!("const Glyph glyphs_{}[] = {{\n", atlas.name));
        for glyph in &atlas.glyphs {
            c.push_str(&format!(
                "    {{ {}, {}, {}, {} }},\n",
                glyph.offset, glyph.size, glyph.width, glyph.height
            ));
        }
        c.push_str("};\n");
    }
    c
}
