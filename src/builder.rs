use crate::error::Result;
use crate::triangle::{Triangle, Value};

/// Row-by-row construction of a [`Triangle`]; the shape is checked in
/// [`build`](Self::build).
#[derive(Debug, Default, Clone)]
pub struct TriangleBuilder {
    rows: Vec<Vec<Value>>,
}

impl TriangleBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_capacity(height: usize) -> Self {
        Self {
            rows: Vec::with_capacity(height),
        }
    }
    pub fn row<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = Value>,
    {
        self.push_row(values);
        self
    }
    pub fn push_row<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = Value>,
    {
        self.rows.push(values.into_iter().collect());
    }
    pub fn height(&self) -> usize {
        self.rows.len()
    }
    pub fn build(self) -> Result<Triangle> {
        Triangle::new(self.rows)
    }
}
