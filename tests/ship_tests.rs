use shipgame::{Coordinate, GameError, Orientation, Ship};

fn coords(cells: &[(i32, i32)]) -> Vec<Coordinate> {
    cells.iter().map(|&(r, c)| Coordinate::new(r, c)).collect()
}

#[test]
fn test_row_ship_extends_along_columns() -> Result<(), GameError> {
    let ship = Ship::new(3, "C4", Orientation::Row)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, coords(&[(2, 3), (2, 4), (2, 5)]));
    assert_eq!(ship.origin(), Coordinate::new(2, 3));
    assert_eq!(ship.anchor(), "C4");
    assert_eq!(ship.length(), 3);
    Ok(())
}

#[test]
fn test_column_ship_extends_along_rows() -> Result<(), GameError> {
    let ship = Ship::new(4, "A1", Orientation::Column)?;
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(cells, coords(&[(0, 0), (1, 0), (2, 0), (3, 0)]));
    Ok(())
}

#[test]
fn test_footprint_runs_off_the_grid() -> Result<(), GameError> {
    let ship = Ship::new(3, "J9", Orientation::Row)?;
    let footprint: Vec<_> = ship.footprint().collect();
    assert_eq!(footprint, coords(&[(9, 8), (9, 9), (9, 10)]));
    // only the on-grid part is tracked as hull
    assert_eq!(ship.remaining(), 2);
    Ok(())
}

#[test]
fn test_register_hit_and_sunk() -> Result<(), GameError> {
    let mut ship = Ship::new(2, "B2", Orientation::Column)?;
    assert!(!ship.is_sunk());
    assert!(ship.register_hit(Coordinate::new(1, 1)));
    assert!(!ship.is_sunk());
    // second hit on the same cell does nothing
    assert!(!ship.register_hit(Coordinate::new(1, 1)));
    assert_eq!(ship.remaining(), 1);
    // miss
    assert!(!ship.register_hit(Coordinate::new(5, 5)));
    assert!(ship.register_hit(Coordinate::new(2, 1)));
    assert!(ship.is_sunk());
    assert_eq!(ship.cells().count(), 0);
    Ok(())
}

#[test]
fn test_malformed_anchor() {
    assert_eq!(
        Ship::new(2, "Z1", Orientation::Row).unwrap_err(),
        GameError::InvalidCoordinate("Z1".to_string())
    );
}

#[test]
fn test_orientation_names() {
    assert_eq!("ROW".parse::<Orientation>().unwrap(), Orientation::Row);
    assert_eq!("c".parse::<Orientation>().unwrap(), Orientation::Column);
    assert_eq!(Orientation::Column.to_string(), "COLUMN");
    assert!(matches!(
        "DIAGONAL".parse::<Orientation>(),
        Err(GameError::UnknownOrientation(_))
    ));
}
