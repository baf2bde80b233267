//! End-to-end tests of the render and export pipeline.

use kurbo::Point;
use pagemark_core::shapes::{Freehand, Line, Rectangle, ShapeStyle};
use pagemark_core::{Document, Page, Rgba, Shape, TextItem};
use pagemark_render::{
    export_document_pdf, export_page_png, render_page, render_page_to_surface, RasterSurface,
};

fn annotated_page() -> Page {
    let mut page = Page::blank(120, 90);

    let mut stroke = Freehand::new(
        1,
        Point::new(10.0, 10.0),
        ShapeStyle {
            color: Rgba::new(200, 40, 40, 255),
            stroke_width: 3.0,
        },
        false,
    );
    stroke.add_point(Point::new(60.0, 30.0));
    stroke.add_point(Point::new(90.0, 70.0));
    page.shapes.push(Shape::Freehand(stroke));

    let mut line = Line::new(2, Point::new(15.0, 80.0), ShapeStyle::default());
    line.corners.drag_to(Point::new(110.0, 15.0));
    line.selected = false;
    page.shapes.push(Shape::Line(line));

    let mut rect = Rectangle::new(3, Point::new(30.0, 30.0), ShapeStyle::default());
    rect.corners.drag_to(Point::new(85.0, 65.0));
    rect.angle = 30.0;
    page.shapes.push(Shape::Rectangle(rect));

    page.texts.push(TextItem::new(
        1,
        Point::new(20.0, 50.0),
        'x',
        Rgba::black(),
        16.0,
    ));
    page
}

#[test]
fn export_matches_live_rendering() {
    let page = annotated_page();

    let mut live = RasterSurface::new(page.width, page.height).unwrap();
    render_page(&mut live, &page, None);

    let exported = render_page_to_surface(&page, None).unwrap();
    assert_eq!(live.to_rgba8(), exported.to_rgba8());
}

#[test]
fn rendering_is_deterministic() {
    let page = annotated_page();
    let first = render_page_to_surface(&page, None).unwrap();
    let second = render_page_to_surface(&page, None).unwrap();
    assert_eq!(first.to_rgba8(), second.to_rgba8());
}

#[test]
fn png_round_trips_rendered_pixels() {
    let page = annotated_page();
    let bytes = export_page_png(&page, None).unwrap();

    let decoder = png::Decoder::new(bytes.as_slice());
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    assert_eq!((info.width, info.height), (page.width, page.height));
    assert_eq!(info.color_type, png::ColorType::Rgba);

    let surface = render_page_to_surface(&page, None).unwrap();
    assert_eq!(&buf[..info.buffer_size()], surface.to_rgba8().as_slice());
}

#[test]
fn pdf_contains_one_page_per_document_page() {
    let mut doc = Document::new();
    doc.add_page(annotated_page());
    doc.add_page(Page::blank(90, 120));

    let bytes = export_document_pdf(&doc, None).unwrap();
    assert!(bytes.starts_with(b"%PDF-1.5"));

    let parsed = lopdf::Document::load_mem(&bytes).unwrap();
    let pages: Vec<_> = parsed.get_pages().into_values().collect();
    assert_eq!(pages.len(), 2);

    // 120x90 px at 96 dpi is 90x67.5 pt, landscape; the second page is
    // portrait.
    let media_box = |id| {
        let dict = parsed.get_dictionary(id).unwrap();
        let array = dict.get(b"MediaBox").unwrap().as_array().unwrap();
        (
            array[2].as_float().unwrap(),
            array[3].as_float().unwrap(),
        )
    };
    let (w0, h0) = media_box(pages[0]);
    assert!((w0 - 90.0).abs() < 0.01 && (h0 - 67.5).abs() < 0.01);
    let (w1, h1) = media_box(pages[1]);
    assert!(w1 < h1);
}

#[test]
fn raster_background_pages_export() {
    use pagemark_core::Raster;
    use std::sync::Arc;

    let raster = Arc::new(
        Raster::solid(40, 30, peniko::Color::from_rgba8(250, 250, 250, 255)).unwrap(),
    );
    let page = Page::from_raster(raster);
    let bytes = export_page_png(&page, None).unwrap();
    assert!(!bytes.is_empty());

    let surface = render_page_to_surface(&page, None).unwrap();
    let data = surface.to_rgba8();
    assert_eq!(&data[..4], &[250, 250, 250, 255]);
}
