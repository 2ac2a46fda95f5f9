/// Describes how neighbour lookups treat the edges of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topology {
    /// Coordinates outside the bounds are treated as dead cells.
    Closed,
    /// Opposite edges are stitched together; coordinates wrap modulo
    /// the grid dimensions.
    Torus,
}
