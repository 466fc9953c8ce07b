use dojo_starter_core::{
    config::GridGlyphs,
    grid::{render_grid, CellContent, CELL_COUNT, GRID_SIZE},
    model::{Position, TreasurePosition, Vec2},
    render::render_text,
};

fn position(x: i64, y: i64) -> Position {
    Position {
        player: "0x1".into(),
        vec: Vec2::new(x, y),
    }
}

fn treasure(x: i64, y: i64) -> TreasurePosition {
    TreasurePosition {
        vec: Vec2::new(x, y),
        ..TreasurePosition::default()
    }
}

#[test]
fn empty_inputs_render_empty_grid() {
    let grid = render_grid::<Position, TreasurePosition>(None, None);
    assert_eq!(grid.cells.len(), CELL_COUNT);
    assert_eq!(grid.marked_cells().count(), 0);
}

#[test]
fn player_marks_exactly_one_cell() {
    let grid = render_grid::<_, TreasurePosition>(Some(&position(5, 3)), None);
    let marked: Vec<_> = grid.marked_cells().collect();
    assert_eq!(marked.len(), 1);
    assert_eq!((marked[0].x, marked[0].y), (5, 3));
    assert_eq!(marked[0].content, CellContent::Player);
    assert_eq!(marked[0].index, 3 * GRID_SIZE + 5);
}

#[test]
fn treasure_marks_exactly_one_cell() {
    let grid = render_grid::<Position, _>(None, Some(&treasure(19, 19)));
    let marked: Vec<_> = grid.marked_cells().collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].content, CellContent::Treasure);
    assert_eq!(marked[0].index, CELL_COUNT - 1);
}

#[test]
fn shared_cell_shows_both_markers() {
    let grid = render_grid(Some(&position(2, 2)), Some(&treasure(2, 2)));
    let marked: Vec<_> = grid.marked_cells().collect();
    assert_eq!(marked.len(), 1);
    assert_eq!(marked[0].content, CellContent::Both);
    assert!(marked[0].content.has_player());
    assert!(marked[0].content.has_treasure());
}

#[test]
fn separate_cells_get_separate_markers() {
    let grid = render_grid(Some(&position(0, 0)), Some(&treasure(7, 11)));
    assert_eq!(grid.marked_cells().count(), 2);
    assert_eq!(grid.cell(0, 0).unwrap().content, CellContent::Player);
    assert_eq!(grid.cell(7, 11).unwrap().content, CellContent::Treasure);
}

#[test]
fn out_of_range_coordinates_are_not_drawn() {
    let grid = render_grid(Some(&position(25, 0)), Some(&treasure(0, 20)));
    assert_eq!(grid.cells.len(), CELL_COUNT);
    assert_eq!(grid.marked_cells().count(), 0);
}

#[test]
fn negative_coordinates_are_not_drawn() {
    let grid = render_grid(Some(&position(-1, 3)), Some(&treasure(4, -20)));
    assert_eq!(grid.cells.len(), CELL_COUNT);
    assert_eq!(grid.marked_cells().count(), 0);
}

#[test]
fn grid_size_never_changes() {
    let inputs = [
        (None, None),
        (Some(position(1, 1)), None),
        (Some(position(1, 1)), Some(treasure(1, 1))),
        (Some(position(i64::MAX, i64::MAX)), Some(treasure(3, 4))),
    ];
    for (p, t) in &inputs {
        let grid = render_grid(p.as_ref(), t.as_ref());
        assert_eq!(grid.size, GRID_SIZE);
        assert_eq!(grid.cells.len(), CELL_COUNT);
    }
}

#[test]
fn rendering_is_repeatable() {
    let p = position(4, 4);
    let t = treasure(8, 1);
    assert_eq!(render_grid(Some(&p), Some(&t)), render_grid(Some(&p), Some(&t)));
}

#[test]
fn text_adapter_draws_one_glyph_per_cell() {
    let grid = render_grid(Some(&position(1, 0)), Some(&treasure(2, 1)));
    let text = render_text(&grid, &GridGlyphs::default());
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), GRID_SIZE);
    assert!(lines.iter().all(|l| l.chars().count() == GRID_SIZE));
    assert_eq!(&lines[0][..3], ".P.");
    assert_eq!(&lines[1][..3], "..T");
}

#[test]
fn text_adapter_uses_both_glyph() {
    let grid = render_grid(Some(&position(0, 0)), Some(&treasure(0, 0)));
    let text = render_text(&grid, &GridGlyphs::default());
    assert!(text.starts_with('X'));
}
