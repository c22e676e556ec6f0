use glam::IVec2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect<T> {
    pub x: T,
    pub y: T,
    pub width: T,
    pub height: T,
}

impl<T> Rect<T> {
    pub const fn new(x: T, y: T, width: T, height: T) -> Self {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Pixel rectangles. Edges follow screen conventions: `right = x + width`,
/// `bottom = y + height`.
impl Rect<i32> {
    /// Build a rectangle from its four edges.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect::new(left, top, right - left, bottom - top)
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn size(&self) -> Size<i32> {
        Size::new(self.width, self.height)
    }

    /// Center point, rounding toward negative infinity on odd spans.
    pub fn center(&self) -> IVec2 {
        IVec2::new(
            (self.left() + self.right()).div_euclid(2),
            (self.top() + self.bottom()).div_euclid(2),
        )
    }

    /// Point containment after growing every edge by `margin`, inclusive.
    ///
    /// Edges are widened to `i64`, so any non-negative margin is accepted.
    pub const fn contains_within(&self, point: IVec2, margin: i32) -> bool {
        let margin = margin as i64;
        let (x, y) = (point.x as i64, point.y as i64);
        x >= self.left() as i64 - margin
            && x <= self.right() as i64 + margin
            && y >= self.top() as i64 - margin
            && y <= self.bottom() as i64 + margin
    }

    /// Whether the interiors of two rectangles overlap. Touching edges do not count.
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl<T> Size<T> {
    pub const fn new(width: T, height: T) -> Self {
        Size { width, height }
    }
}

impl Size<i32> {
    /// Whether both dimensions are strictly positive.
    pub const fn has_area(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}
