use rand::Rng;

/// Live-cell color, fixed for the whole run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Tint {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pick a random color
    pub fn random() -> Self {
        Self::random_with(&mut rand::rng())
    }

    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(rng.random(), rng.random(), rng.random())
    }
}

impl From<[u8; 3]> for Tint {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

/// Where frames go and where quit signals come from
pub trait RenderSink {
    /// Draw one frame: every live cell as a `cell_size` square at `(x * cell_size, y * cell_size)`
    fn present(&mut self, live_cells: &[(usize, usize)], cell_size: f32, color: Tint);

    /// Whether a quit/cancel signal arrived since the last call. Must not block.
    fn poll_cancel(&mut self) -> bool;
}
