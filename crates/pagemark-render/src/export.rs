//! PNG and PDF export.
//!
//! Both exporters run the same drawing routine as the live view onto a
//! fresh offscreen surface, so exported pixels match the screen.

use crate::raster_surface::{RasterSurface, RenderError};
use crate::renderer::render_page;
use image::{DynamicImage, RgbaImage};
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Object, Stream};
use pagemark_core::{Document, Page};
use rusttype::Font;
use thiserror::Error;

/// Points per page pixel: pages are 96 dpi, PDF space is 72 dpi.
const PT_PER_PX: f64 = 72.0 / 96.0;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("document has no pages")]
    EmptyDocument,
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] png::EncodingError),
    #[error("PDF assembly failed: {0}")]
    Pdf(#[from] lopdf::Error),
    #[error("rendered pixel buffer does not match the page size")]
    BufferMismatch,
    #[error("PDF write failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Render one page onto a fresh offscreen surface.
pub fn render_page_to_surface(
    page: &Page,
    font: Option<&Font<'static>>,
) -> Result<RasterSurface, RenderError> {
    let mut surface = RasterSurface::new(page.width, page.height)?;
    if let Some(font) = font {
        surface = surface.with_font(font.clone());
    }
    render_page(&mut surface, page, None);
    Ok(surface)
}

/// Encode one page as a PNG image.
pub fn export_page_png(page: &Page, font: Option<&Font<'static>>) -> Result<Vec<u8>, ExportError> {
    let surface = render_page_to_surface(page, font)?;
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, page.width, page.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&surface.to_rgba8())?;
    }
    log::info!("exported page as PNG ({} bytes)", out.len());
    Ok(out)
}

/// Flatten a page surface to the RGB bytes PDF image objects carry.
fn surface_to_rgb(page: &Page, surface: &RasterSurface) -> Result<Vec<u8>, ExportError> {
    let image = RgbaImage::from_raw(page.width, page.height, surface.to_rgba8())
        .ok_or(ExportError::BufferMismatch)?;
    Ok(DynamicImage::ImageRgba8(image).to_rgb8().into_raw())
}

/// Assemble the whole document as a multi-page PDF.
///
/// Each page is rendered to a raster at its pixel size and embedded as
/// an RGB image object scaled to 72/96 of the pixel dimensions, so a
/// 96 dpi page prints at its on-screen size. Page orientation follows
/// each page's own width and height.
pub fn export_document_pdf(
    document: &Document,
    font: Option<&Font<'static>>,
) -> Result<Vec<u8>, ExportError> {
    if document.page_count() == 0 {
        return Err(ExportError::EmptyDocument);
    }

    let mut pdf = lopdf::Document::with_version("1.5");
    let pages_id = pdf.new_object_id();
    let mut kids: Vec<Object> = Vec::with_capacity(document.page_count());

    for (index, page) in document.pages().iter().enumerate() {
        let surface = render_page_to_surface(page, font)?;
        let rgb = surface_to_rgb(page, &surface)?;

        let image_id = pdf.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => page.width as i64,
                "Height" => page.height as i64,
                "ColorSpace" => "DeviceRGB",
                "BitsPerComponent" => 8,
            },
            rgb,
        ));

        let width_pt = page.width as f64 * PT_PER_PX;
        let height_pt = page.height as f64 * PT_PER_PX;
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width_pt.into(),
                        0.into(),
                        0.into(),
                        height_pt.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(b"Im0".to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let content_id = pdf.add_object(Stream::new(dictionary! {}, content.encode()?));

        let page_id = pdf.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
            "Resources" => dictionary! {
                "XObject" => dictionary! { "Im0" => image_id },
            },
            "Contents" => content_id,
        });
        kids.push(page_id.into());
        log::debug!("embedded page {index} at {width_pt:.1}x{height_pt:.1}pt");
    }

    let count = kids.len() as i64;
    pdf.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    let catalog_id = pdf.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    pdf.trailer.set("Root", catalog_id);
    pdf.compress();

    let mut out = Vec::new();
    pdf.save_to(&mut out)?;
    log::info!(
        "exported {} page(s) as PDF ({} bytes)",
        document.page_count(),
        out.len()
    );
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_is_rejected() {
        let doc = Document::new();
        assert!(matches!(
            export_document_pdf(&doc, None),
            Err(ExportError::EmptyDocument)
        ));
    }

    #[test]
    fn test_surface_to_rgb_drops_alpha() {
        let page = Page::blank(2, 1);
        let surface = render_page_to_surface(&page, None).unwrap();
        let rgb = surface_to_rgb(&page, &surface).unwrap();
        assert_eq!(rgb, vec![0xf9, 0xf8, 0xf8, 0xf9, 0xf8, 0xf8]);
    }
}
