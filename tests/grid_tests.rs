use std::collections::HashSet;

use goban::{
    ActivationHandler, Cell, GridBuilder, GridConfig, GridError, MemorySurface, Offset, Position,
    Surface, BOARD_CONTAINER, BOARD_SIZE,
};

fn built_board() -> (MemorySurface, Vec<String>) {
    let mut surface = MemorySurface::board();
    let labels = GridBuilder::default().build(&mut surface).unwrap();
    (surface, labels)
}

#[test]
fn test_build_creates_every_cell() {
    let (surface, labels) = built_board();
    assert_eq!(labels.len(), BOARD_SIZE * BOARD_SIZE);
    assert_eq!(surface.len(), 361);
    assert_eq!(surface.children(BOARD_CONTAINER).count(), 361);
    assert_eq!(labels.first().map(String::as_str), Some("A1"));
    assert_eq!(labels.last().map(String::as_str), Some("S19"));
}

#[test]
fn test_labels_unique_and_well_formed() {
    let (_, labels) = built_board();
    let unique: HashSet<&String> = labels.iter().collect();
    assert_eq!(unique.len(), labels.len());

    for label in &labels {
        let mut chars = label.chars();
        let col = chars.next().unwrap();
        assert!(('A'..='S').contains(&col), "bad column in {}", label);
        let row: usize = chars.as_str().parse().unwrap();
        assert!((1..=19).contains(&row), "bad row in {}", label);
    }
}

#[test]
fn test_labels_follow_row_major_order() {
    let (_, labels) = built_board();
    // second row starts after the nineteen cells of the first
    assert_eq!(labels[1], "B1");
    assert_eq!(labels[18], "S1");
    assert_eq!(labels[19], "A2");
    assert_eq!(labels[19 * 18 + 8], "I19");
}

#[test]
fn test_each_cell_has_one_place_stone_handler() {
    let (surface, _) = built_board();
    for cell in surface.cells() {
        assert_eq!(cell.handlers(), &[ActivationHandler::PlaceStone]);
        assert!(cell.styles().is_empty());
    }
}

#[test]
fn test_activation_reads_label_from_cell() {
    let (surface, _) = built_board();
    let activations = surface.activate("K10").unwrap();
    assert_eq!(activations.len(), 1);
    assert_eq!(activations[0].label, "K10");
    assert_eq!(activations[0].handler, ActivationHandler::PlaceStone);
}

#[test]
fn test_cell_offsets_on_lattice() {
    let (surface, _) = built_board();
    assert_eq!(surface.cell("A1").unwrap().offset(), Offset::new(2.0, 2.0));
    assert_eq!(surface.cell("C2").unwrap().offset(), Offset::new(6.0, 4.0));
    assert_eq!(surface.cell("S19").unwrap().offset(), Offset::new(38.0, 38.0));

    let builder = GridBuilder::default();
    for cell in surface.cells() {
        let position = Position::parse(cell.id(), builder.config()).unwrap();
        assert_eq!(cell.offset(), builder.offset_of(position));
    }
}

#[test]
fn test_custom_spacing_and_margin() {
    let config = GridConfig {
        size: 3,
        spacing: 10.0,
        margin: 5.0,
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    let labels = GridBuilder::new(config).build(&mut surface).unwrap();
    assert_eq!(labels, ["A1", "B1", "C1", "A2", "B2", "C2", "A3", "B3", "C3"]);
    assert_eq!(surface.cell("C2").unwrap().offset(), Offset::new(25.0, 15.0));
}

#[test]
fn test_short_alphabet_rejected() {
    let config = GridConfig {
        alphabet: "ABCDEFGHJKLMNOPQRS",
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    let err = GridBuilder::new(config).build(&mut surface).unwrap_err();
    assert_eq!(
        err,
        GridError::AlphabetTooShort {
            required: 19,
            available: 18
        }
    );
    assert!(surface.is_empty());
}

#[test]
fn test_duplicate_column_symbol_rejected() {
    let config = GridConfig {
        alphabet: "ABCDEFGHIJKLMNOPQRA",
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    let err = GridBuilder::new(config).build(&mut surface).unwrap_err();
    assert_eq!(err, GridError::DuplicateColumnSymbol('A'));
    assert!(surface.is_empty());
}

#[test]
fn test_longer_alphabet_uses_leading_symbols() {
    let config = GridConfig {
        size: 2,
        alphabet: "XYZ",
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    let labels = GridBuilder::new(config).build(&mut surface).unwrap();
    assert_eq!(labels, ["X1", "Y1", "X2", "Y2"]);
}

#[test]
fn test_missing_container_rejected() {
    let mut surface = MemorySurface::new();
    let err = GridBuilder::default().build(&mut surface).unwrap_err();
    assert_eq!(err, GridError::MissingContainer("board".to_string()));
    assert!(surface.is_empty());
}

#[test]
fn test_zero_size_rejected() {
    let config = GridConfig {
        size: 0,
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    assert_eq!(
        GridBuilder::new(config).build(&mut surface).unwrap_err(),
        GridError::ZeroSize
    );
}

#[test]
fn test_named_container() {
    let config = GridConfig {
        container: "goban",
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::new();
    surface.add_container("goban");
    GridBuilder::new(config).build(&mut surface).unwrap();
    assert_eq!(surface.children("goban").count(), 361);
    assert_eq!(surface.children("board").count(), 0);
}

#[test]
fn test_second_build_on_same_surface_rejected() {
    let (mut surface, _) = built_board();
    let mut session = goban::PlacementSession::default();
    session.place_stone(&mut surface, "A1").unwrap();

    let err = GridBuilder::default().build(&mut surface).unwrap_err();
    assert_eq!(err, GridError::DuplicateCell("A1".to_string()));
    assert_eq!(surface.len(), 361);
    assert_eq!(surface.children(BOARD_CONTAINER).count(), 361);
    assert_eq!(surface.cell("A1").unwrap().styles(), ["black-stone"]);
}

#[test]
fn test_append_rejects_attached_id() {
    let mut surface = MemorySurface::board();
    let cell = surface.create_cell("K10");
    surface.append(BOARD_CONTAINER, cell).unwrap();
    let again = surface.create_cell("K10");
    assert_eq!(
        surface.append(BOARD_CONTAINER, again).unwrap_err(),
        GridError::DuplicateCell("K10".to_string())
    );
    assert_eq!(surface.len(), 1);
    assert!(surface.has_cell("K10"));
}

#[test]
fn test_overlapping_smaller_grid_rejected_untouched() {
    let config = GridConfig {
        size: 2,
        ..GridConfig::default()
    };
    let mut surface = MemorySurface::board();
    let cell = surface.create_cell("B2");
    surface.append(BOARD_CONTAINER, cell).unwrap();
    let err = GridBuilder::new(config).build(&mut surface).unwrap_err();
    assert_eq!(err, GridError::DuplicateCell("B2".to_string()));
    assert_eq!(surface.len(), 1);
}
