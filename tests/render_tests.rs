use goban::{
    glyph_for, render_board, GridBuilder, GridConfig, MemorySurface, Palette, PlacementSession,
    Cell, Surface, EMPTY_GLYPH, UNKNOWN_GLYPH,
};

#[test]
fn test_empty_board_render() {
    let mut surface = MemorySurface::board();
    GridBuilder::default().build(&mut surface).unwrap();
    let text = render_board(&surface, &GridConfig::default(), &Palette::default());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 20);
    assert_eq!(
        lines[0],
        "    A B C D E F G H I J K L M N O P Q R S"
    );
    assert!(lines[1].starts_with(" 1  . ."));
    assert!(lines[19].starts_with("19  ."));
}

#[test]
fn test_render_shows_latest_style() {
    let config = GridConfig {
        size: 3,
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    GridBuilder::new(config).build(&mut surface).unwrap();
    let mut session = PlacementSession::default();
    session.place_stone(&mut surface, "A1").unwrap();
    session.place_stone(&mut surface, "C3").unwrap();
    session.place_stone(&mut surface, "C3").unwrap();

    let text = render_board(&surface, &config, session.palette());
    assert_eq!(text, "    A B C\n 1  X . .\n 2  . . .\n 3  . . X\n");
}

#[test]
fn test_glyphs() {
    let palette = Palette::new(["a", "b", "c", "d", "e", "f", "g"]).unwrap();
    assert_eq!(glyph_for(None, &palette), EMPTY_GLYPH);
    assert_eq!(glyph_for(Some("a"), &palette), 'X');
    assert_eq!(glyph_for(Some("b"), &palette), 'O');
    assert_eq!(glyph_for(Some("g"), &palette), UNKNOWN_GLYPH);
    assert_eq!(glyph_for(Some("zz"), &palette), UNKNOWN_GLYPH);
}

#[test]
fn test_foreign_style_renders_unknown() {
    let config = GridConfig {
        size: 2,
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    GridBuilder::new(config).build(&mut surface).unwrap();
    surface.cell_mut("B2").unwrap().add_style("highlight");
    let text = render_board(&surface, &config, &Palette::default());
    assert_eq!(text.lines().last(), Some(" 2  . ?"));
}
