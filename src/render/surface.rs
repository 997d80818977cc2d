use crate::foundation::core::{BezPath, Color, HostSize};

/// A 2D drawing surface with canvas-style paint state.
///
/// Style setters change state used by later `fill`/`stroke` calls. Paint calls are
/// append-only: nothing painted is removed until [`Surface::clear`].
pub trait Surface {
    fn width(&self) -> u32;

    fn height(&self) -> u32;

    fn clear(&mut self);

    fn set_fill_color(&mut self, color: Color);

    fn set_stroke_color(&mut self, color: Color);

    /// Line width in physical pixels.
    fn set_line_width(&mut self, width: f64);

    fn fill(&mut self, path: &BezPath);

    fn stroke(&mut self, path: &BezPath);

    /// Commits queued paint work; called once per surface at the end of a frame.
    fn present(&mut self) {}
}

/// Creates the engine's drawing surfaces.
///
/// Returning `None` means no drawing context is available; the engine then skips
/// frames silently instead of failing.
pub trait SurfaceFactory {
    type Surface: Surface;

    fn create(&mut self, size: HostSize) -> Option<Self::Surface>;
}

/// The engine's two same-sized layers.
pub struct Layers<S> {
    /// Append-only layer, cleared only when an animation starts.
    pub background: S,
    /// Cleared and fully repainted whenever tracked state changes.
    pub foreground: S,
}

impl<S: Surface> Layers<S> {
    pub fn create<F>(factory: &mut F, size: HostSize) -> Option<Self>
    where
        F: SurfaceFactory<Surface = S>,
    {
        let background = factory.create(size)?;
        let foreground = factory.create(size)?;
        Some(Self {
            background,
            foreground,
        })
    }

    pub fn clear(&mut self) {
        self.background.clear();
        self.foreground.clear();
    }

    pub fn present(&mut self) {
        self.background.present();
        self.foreground.present();
    }
}
