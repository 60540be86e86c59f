use crate::geometry::PageSetup;

/// A composed, self-contained document ready to be handed to a print surface.
///
/// `html` is a single fragment carrying its own `<style>` element; it has no
/// external style dependencies.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSurface {
    pub title: String,
    pub html: String,
    pub page: PageSetup,
}
