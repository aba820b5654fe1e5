use crate::render::emboss::SurfacePaint;

/// Anything that can display a [`SurfacePaint`].
///
/// Painting is best-effort and infallible; each call replaces the previous frame.
pub trait Surface {
    /// Apply one frame of paint.
    fn paint(&mut self, paint: &SurfacePaint);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn paint(&mut self, paint: &SurfacePaint) {
        (**self).paint(paint);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn paint(&mut self, paint: &SurfacePaint) {
        (**self).paint(paint);
    }
}

/// Recording surface for tests, the CLI and debugging.
#[derive(Clone, Debug, Default)]
pub struct PaintLog {
    frames: Vec<SurfacePaint>,
}

impl PaintLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every frame painted so far, oldest first.
    pub fn frames(&self) -> &[SurfacePaint] {
        &self.frames
    }

    /// The most recent frame.
    pub fn last(&self) -> Option<&SurfacePaint> {
        self.frames.last()
    }

    /// Number of frames painted.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// `true` when nothing has been painted.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Forget recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }
}

impl Surface for PaintLog {
    fn paint(&mut self, paint: &SurfacePaint) {
        self.frames.push(*paint);
    }
}
