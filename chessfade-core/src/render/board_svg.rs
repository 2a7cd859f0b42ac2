use shakmaty::{Board, Color, File, Rank, Role, Square};

/// Light square fill.
pub const LIGHT_SQUARE: &str = "#ffce9e";
/// Dark square fill.
pub const DARK_SQUARE: &str = "#d18b47";

/// SVG user units per square.
const SQUARE: f32 = 45.0;

/// Build the SVG document for `board`, white at the bottom, no coordinates or legends.
///
/// The document is `8 * 45` user units wide; `size` only sets the intrinsic width and
/// height so rasterizers can map it onto a `size × size` pixmap.
pub fn board_svg(board: &Board, size: u32) -> String {
    let extent = SQUARE * 8.0;
    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {extent} {extent}">"#
    );

    for (ri, rank) in Rank::ALL.into_iter().enumerate() {
        for (fi, file) in File::ALL.into_iter().enumerate() {
            let x = fi as f32 * SQUARE;
            let y = (7 - ri) as f32 * SQUARE;
            let fill = if (fi + ri) % 2 == 0 {
                DARK_SQUARE
            } else {
                LIGHT_SQUARE
            };
            svg.push_str(&format!(
                r#"<rect x="{x}" y="{y}" width="{SQUARE}" height="{SQUARE}" fill="{fill}"/>"#
            ));

            if let Some(piece) = board.piece_at(Square::from_coords(file, rank)) {
                let (fill, stroke) = match piece.color {
                    Color::White => ("#ffffff", "#000000"),
                    Color::Black => ("#000000", "#000000"),
                };
                svg.push_str(&format!(
                    r#"<g transform="translate({x} {y})" fill="{fill}" stroke="{stroke}" stroke-width="1.5" stroke-linejoin="round">{}</g>"#,
                    glyph(piece.role)
                ));
            }
        }
    }

    svg.push_str("</svg>");
    svg
}

// Glyphs are drawn in a 45×45 box from plain shapes so that no fonts are needed.
fn glyph(role: Role) -> &'static str {
    match role {
        Role::Pawn => concat!(
            r#"<circle cx="22.5" cy="15" r="5"/>"#,
            r#"<path d="M16 36 L29 36 L27 24 C27 21 18 21 18 24 Z"/>"#,
            r#"<path d="M12 39 L33 39 L33 36 L12 36 Z"/>"#,
        ),
        Role::Knight => concat!(
            r#"<path d="M12 39 L33 39 L31 28 C31 20 29 12 22 10 L20 6 L18 11 C14 13 11 18 10 23 L13 25 L17 21 L19 23 C16 27 14 31 12 39 Z"/>"#,
        ),
        Role::Bishop => concat!(
            r#"<path d="M12 39 L33 39 L33 35 L12 35 Z"/>"#,
            r#"<path d="M17 33 L28 33 C31 27 30 19 22.5 12 C15 19 14 27 17 33 Z"/>"#,
            r#"<circle cx="22.5" cy="9" r="2.5"/>"#,
        ),
        Role::Rook => concat!(
            r#"<path d="M11 39 L34 39 L34 35 L31 35 L30 18 L33 18 L33 10 L28.5 10 L28.5 13 L24.5 13 L24.5 10 L20.5 10 L20.5 13 L16.5 13 L16.5 10 L12 10 L12 18 L15 18 L14 35 L11 35 Z"/>"#,
        ),
        Role::Queen => concat!(
            r#"<path d="M11 39 L34 39 L32 31 L36 14 L28 25 L22.5 11 L17 25 L9 14 L13 31 Z"/>"#,
            r#"<circle cx="9" cy="12" r="2"/><circle cx="22.5" cy="9" r="2"/><circle cx="36" cy="12" r="2"/>"#,
        ),
        Role::King => concat!(
            r#"<path d="M21 5 L24 5 L24 8 L27 8 L27 11 L24 11 L24 15 L21 15 L21 11 L18 11 L18 8 L21 8 Z"/>"#,
            r#"<path d="M11 39 L34 39 L33 31 C37 24 33 16 26.5 19 L22.5 24 L18.5 19 C12 16 8 24 12 31 Z"/>"#,
        ),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/board_svg.rs"]
mod tests;
