//! Car sprites: position, body cells and bounding box.

use crate::surface::RenderSurface;
use crate::types::{Glyph, CAR_HEIGHT, CAR_WIDTH};

/// A cell position on a render surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub row: u16,
    pub col: u16,
}

impl Point {
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }
}

/// Axis-aligned box spanned by four corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub upper_left: Point,
    pub upper_right: Point,
    pub lower_left: Point,
    pub lower_right: Point,
}

impl BoundingBox {
    pub fn corners(&self) -> [Point; 4] {
        [
            self.upper_left,
            self.upper_right,
            self.lower_left,
            self.lower_right,
        ]
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: Point) -> bool {
        (self.upper_left.col..=self.upper_right.col).contains(&point.col)
            && (self.upper_left.row..=self.lower_left.row).contains(&point.row)
    }
}

/// Who a sprite belongs to. Only affects the glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteKind {
    Player,
    Obstacle,
}

impl SpriteKind {
    pub fn glyph(&self) -> Glyph {
        match self {
            SpriteKind::Player => Glyph::Player,
            SpriteKind::Obstacle => Glyph::Obstacle,
        }
    }
}

/// Car silhouette as `(row, col)` offsets from the top-left corner.
///
/// ```text
///  #
/// ###
///  #
/// ###
/// ```
pub const CAR_BODY: [(u16, u16); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (1, 2),
    (2, 1),
    (3, 0),
    (3, 1),
    (3, 2),
];

/// A car on the road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sprite {
    row: u16,
    col: u16,
    kind: SpriteKind,
}

impl Sprite {
    pub const WIDTH: u16 = CAR_WIDTH;
    pub const HEIGHT: u16 = CAR_HEIGHT;

    pub fn new(row: u16, col: u16, kind: SpriteKind) -> Self {
        Self { row, col, kind }
    }

    pub fn player(row: u16, col: u16) -> Self {
        Self::new(row, col, SpriteKind::Player)
    }

    pub fn obstacle(row: u16, col: u16) -> Self {
        Self::new(row, col, SpriteKind::Obstacle)
    }

    pub fn row(&self) -> u16 {
        self.row
    }

    pub fn col(&self) -> u16 {
        self.col
    }

    pub fn kind(&self) -> SpriteKind {
        self.kind
    }

    /// Cells to paint, translated to the current position.
    pub fn body(&self) -> [Point; 8] {
        CAR_BODY.map(|(dr, dc)| Point::new(self.row + dr, self.col + dc))
    }

    /// The corner box reaches `WIDTH`/`HEIGHT` cells past the origin, one more
    /// than the body, so cars touching edge to edge still count as hitting.
    pub fn bounding_box(&self) -> BoundingBox {
        let right = self.col + Self::WIDTH;
        let bottom = self.row + Self::HEIGHT;
        BoundingBox {
            upper_left: Point::new(self.row, self.col),
            upper_right: Point::new(self.row, right),
            lower_left: Point::new(bottom, self.col),
            lower_right: Point::new(bottom, right),
        }
    }

    pub fn contains_point(&self, point: Point) -> bool {
        self.bounding_box().contains(point)
    }

    pub fn draw<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        let glyph = self.kind.glyph();
        for p in self.body() {
            surface.write_cell(p.row, p.col, glyph);
        }
    }

    pub fn clear<S: RenderSurface + ?Sized>(&self, surface: &mut S) {
        for p in self.body() {
            surface.clear_cell(p.row, p.col);
        }
    }

    /// Erase the car from `surface`, then reposition it.
    ///
    /// The car is not redrawn; callers draw once all moves for the tick are done.
    pub fn move_to<S: RenderSurface + ?Sized>(&mut self, row: u16, col: u16, surface: &mut S) {
        self.clear(surface);
        self.row = row;
        self.col = col;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    /// Records every write in order.
    #[derive(Default)]
    struct Recorder {
        writes: Vec<(u16, u16, Glyph)>,
    }

    impl RenderSurface for Recorder {
        fn dimensions(&self) -> (u16, u16) {
            (24, 14)
        }
        fn write_cell(&mut self, row: u16, col: u16, glyph: Glyph) {
            self.writes.push((row, col, glyph));
        }
        fn write_text(&mut self, _row: u16, _col: u16, _text: &str) {}
        fn refresh(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn body_is_translated_by_position() {
        let car = Sprite::obstacle(2, 5);
        let body = car.body();
        assert_eq!(body[0], Point::new(2, 6));
        assert_eq!(body[7], Point::new(5, 7));
    }

    #[test]
    fn bounding_box_corners() {
        let bb = Sprite::player(3, 9).bounding_box();
        assert_eq!(bb.upper_left, Point::new(3, 9));
        assert_eq!(bb.upper_right, Point::new(3, 12));
        assert_eq!(bb.lower_left, Point::new(7, 9));
        assert_eq!(bb.lower_right, Point::new(7, 12));
    }

    #[test]
    fn contains_point_is_inclusive() {
        let car = Sprite::obstacle(0, 1);
        assert!(car.contains_point(Point::new(0, 1)));
        assert!(car.contains_point(Point::new(4, 4)));
        assert!(!car.contains_point(Point::new(5, 1)));
        assert!(!car.contains_point(Point::new(0, 0)));
        assert!(!car.contains_point(Point::new(0, 5)));
    }

    #[test]
    fn draw_uses_kind_glyph() {
        let mut s = Recorder::default();
        Sprite::player(0, 0).draw(&mut s);
        assert_eq!(s.writes.len(), 8);
        assert!(s.writes.iter().all(|w| w.2 == Glyph::Player));
    }

    #[test]
    fn move_clears_old_cells_before_repositioning() {
        let mut s = Recorder::default();
        let mut car = Sprite::obstacle(0, 1);
        let old_body = car.body();

        car.move_to(1, 1, &mut s);

        // Only blanks were written, all at the old position.
        assert_eq!(s.writes.len(), 8);
        for (w, p) in s.writes.iter().zip(old_body.iter()) {
            assert_eq!((w.0, w.1, w.2), (p.row, p.col, Glyph::Blank));
        }
        assert_eq!((car.row(), car.col()), (1, 1));
    }
}
