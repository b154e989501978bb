use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

/// Draw the map at the world origin, stretched to `(width, height)`
///
/// The image's own aspect ratio is ignored.
pub fn draw_map(ctx: &CanvasRenderingContext2d, image: &HtmlImageElement, (width, height): (f64, f64)) {
    let _ = ctx.draw_image_with_html_image_element_and_dw_and_dh(image, 0.0, 0.0, width, height);
}

/// Native pixel size of a loaded image
#[must_use]
pub fn image_size(image: &HtmlImageElement) -> (f64, f64) {
    (f64::from(image.natural_width()), f64::from(image.natural_height()))
}
