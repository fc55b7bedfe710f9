//! Color classes of the checkerboard.

/// One of the two parity classes of squares.
///
/// `Dark` holds every square whose row and column have the same parity,
/// matching the traditional coloring where `(0, 0)` is dark. A bishop never
/// leaves its shade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Dark,
    Light,
}

impl std::fmt::Display for Shade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Shade::Dark => write!(f, "dark"),
            Shade::Light => write!(f, "light"),
        }
    }
}
