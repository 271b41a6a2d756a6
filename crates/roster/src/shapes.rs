/// Anything that can describe itself as a drawing.
pub trait Drawable {
    fn draw(&self) -> String;
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Drawable for Circle {
    fn draw(&self) -> String {
        format!("Circle with radius {:?}", self.radius)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub width: f64,
    pub height: f64,
}

impl Drawable for Rectangle {
    fn draw(&self) -> String {
        format!("Rectangle {:?}x{:?}", self.width, self.height)
    }
}

pub fn draw_shapes(shapes: &[Box<dyn Drawable>]) -> Vec<String> {
    shapes.iter().map(|shape| shape.draw()).collect()
}
