//! Pagemark Core Library
//!
//! Backend-agnostic document model and interaction logic for the
//! pagemark page annotation editor.

pub mod controller;
pub mod document;
pub mod editor;
pub mod geometry;
pub mod hit;
pub mod measure;
pub mod page;
pub mod raster;
pub mod shapes;
pub mod text;

pub use controller::{Controller, DragOp, State, Tool, MAX_RESIZE, MIN_RESIZE};
pub use document::{Document, IdAllocator};
pub use editor::{apply_key, caret_from_click, classify_key, EditorKey};
pub use hit::{hit_test, HandleKind, Hit, HANDLE_SIZE};
pub use measure::{FixedMetrics, TextMeasure};
pub use page::{default_base_color, Background, Page};
pub use raster::{Raster, RasterError};
pub use shapes::{Corners, Rgba, Shape, ShapeId, ShapeStyle};
pub use text::{TextId, TextItem, DEFAULT_FONT_SIZE, LINE_HEIGHT_FACTOR, TEXT_MARGIN};
