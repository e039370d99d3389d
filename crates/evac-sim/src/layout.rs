//! A coarse picture of the grid for visualisation.

/// What occupies a cell, for display purposes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum CellKind {
    #[default]
    Empty,
    Obstacle,
    Agent,
    Exit,
}

impl CellKind {
    /// One-character rendering.
    pub fn glyph(self) -> char {
        match self {
            CellKind::Empty    => '.',
            CellKind::Obstacle => '#',
            CellKind::Agent    => 'o',
            CellKind::Exit     => 'E',
        }
    }
}

/// Render a `[row][col]` layout as text, one line per row.
pub fn render_layout(layout: &[Vec<CellKind>]) -> String {
    let mut out = String::new();
    for row in layout {
        for kind in row {
            out.push(kind.glyph());
        }
        out.push('\n');
    }
    out
}
