/// Which part of the view a mutation invalidated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderScope {
    /// Board sidebar and the active board
    App,
    /// Only the active board
    Board,
}

/// Render trigger implemented by the presentation layer.
///
/// Called after every successful mutation, never after a rejected one.
pub trait Renderer: Send + Sync {
    fn render(&self, scope: RenderScope);
}

/// Renderer that draws nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&self, _scope: RenderScope) {}
}

impl<F> Renderer for F
where
    F: Fn(RenderScope) + Send + Sync,
{
    fn render(&self, scope: RenderScope) {
        self(scope)
    }
}
