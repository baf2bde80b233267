//! Pagemark Render Library
//!
//! Drawing-surface abstraction, a deterministic software raster
//! backend, and the PNG/PDF exporters for pagemark documents.

pub mod export;
pub mod raster_surface;
mod renderer;
pub mod surface;

pub use export::{export_document_pdf, export_page_png, render_page_to_surface, ExportError};
pub use raster_surface::{RasterSurface, RenderError};
pub use renderer::{caret_color, render_page, selection_color, SELECTION_DASH};
pub use surface::{StrokeOptions, Surface};
