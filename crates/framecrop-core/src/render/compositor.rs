//! Frame composition: clear, draw the transformed image, dim outside the
//! crop window, outline the crop window.

use log::debug;

use super::Surface;
use crate::config::{EditorConfig, MaskStyle};
use crate::decode::DecodedImage;
use crate::geometry::{fit, mask_complement, mask_rect, place, Dimensions, Offset, Rect};
use crate::render::InterpolationFilter;

/// Renders the editor preview into a viewport-sized [`Surface`].
///
/// Holds only immutable session geometry; rendering the same image with the
/// same offset and scale always produces the same frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Compositor {
    viewport: Dimensions,
    mask: Rect,
    style: MaskStyle,
    filter: InterpolationFilter,
}

impl Compositor {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            viewport: config.viewport,
            mask: mask_rect(config.viewport, config.mask),
            style: config.style,
            filter: config.filter,
        }
    }

    pub fn viewport(&self) -> Dimensions {
        self.viewport
    }

    /// The crop window in viewport coordinates.
    pub fn mask_rect(&self) -> Rect {
        self.mask
    }

    /// Where `image` lands in the viewport for the given pan and scale.
    pub fn image_rect(&self, image: &DecodedImage, offset: Offset, scale: f64) -> Rect {
        let draw = fit(self.viewport, image.dimensions());
        place(self.viewport, draw, offset, scale)
    }

    /// Render a full frame.
    ///
    /// Layers, in order:
    /// 1. Clear the whole surface to transparent
    /// 2. The image, fitted then panned and scaled
    /// 3. The dim strips around the crop window and its outline
    pub fn render(&self, surface: &mut Surface, image: &DecodedImage, offset: Offset, scale: f64) {
        debug_assert_eq!(surface.dimensions(), self.viewport, "Surface size mismatch");

        surface.clear();

        if !image.is_empty() {
            let rect = self.image_rect(image, offset, scale);
            debug!(
                "render {}x{} image at ({:.1}, {:.1}) size {:.1}x{:.1}",
                image.width, image.height, rect.x, rect.y, rect.width, rect.height
            );
            surface.draw_image(image, rect, self.filter);
        }

        self.draw_mask(surface);
    }

    /// Dim everything outside the crop window, then outline it.
    ///
    /// The outline path is the crop window grown by `outline_gap` on every
    /// side, so the stroke sits just outside the exported region.
    pub fn draw_mask(&self, surface: &mut Surface) {
        for strip in mask_complement(self.viewport, &self.mask) {
            surface.fill_rect(strip, self.style.dim_color);
        }

        surface.stroke_rect(
            self.mask.inflate(self.style.outline_gap),
            self.style.outline_width,
            self.style.outline_color,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Rgba;

    fn white_image(width: u32, height: u32) -> DecodedImage {
        DecodedImage::filled(width, height, [255, 255, 255, 255])
    }

    fn render(image: &DecodedImage, offset: Offset, scale: f64) -> Surface {
        let config = EditorConfig::default();
        let compositor = Compositor::new(&config);
        let mut surface = Surface::new(config.viewport);
        compositor.render(&mut surface, image, offset, scale);
        surface
    }

    #[test]
    fn test_mask_rect_from_config() {
        let compositor = Compositor::new(&EditorConfig::default());
        assert_eq!(compositor.mask_rect(), Rect::new(160.0, 90.0, 640.0, 360.0));
    }

    #[test]
    fn test_crop_window_shows_image_undimmed() {
        let surface = render(&white_image(192, 108), Offset::ZERO, 1.0);
        assert_eq!(surface.pixel(160, 90), [255, 255, 255, 255]);
        assert_eq!(surface.pixel(480, 270), [255, 255, 255, 255]);
        assert_eq!(surface.pixel(799, 449), [255, 255, 255, 255]);
    }

    #[test]
    fn test_strips_are_dimmed() {
        let surface = render(&white_image(192, 108), Offset::ZERO, 1.0);
        let dimmed = [127, 127, 127, 255];
        assert_eq!(surface.pixel(0, 0), dimmed); // top
        assert_eq!(surface.pixel(480, 539), dimmed); // bottom
        assert_eq!(surface.pixel(10, 270), dimmed); // left
        assert_eq!(surface.pixel(950, 270), dimmed); // right
    }

    #[test]
    fn test_outline_sits_outside_crop_window() {
        let surface = render(&white_image(192, 108), Offset::ZERO, 1.0);

        // Pixels 158 and 159 carry the outline left of x = 160
        let [r, g, _, _] = surface.pixel(159, 270);
        assert!(r > g, "expected reddish outline, got {:?}", surface.pixel(159, 270));
        let [r, g, _, _] = surface.pixel(800, 270);
        assert!(r > g);

        // First and last crop columns are untouched
        assert_eq!(surface.pixel(160, 270), [255, 255, 255, 255]);
        assert_eq!(surface.pixel(799, 270), [255, 255, 255, 255]);
    }

    #[test]
    fn test_empty_background_without_coverage() {
        // Tiny scale leaves most of the frame without image
        let surface = render(&white_image(192, 108), Offset::ZERO, 0.1);

        // Inside the crop window, away from the image: cleared
        assert_eq!(surface.pixel(200, 100), [0, 0, 0, 0]);
        // Outside the crop window: dim over nothing
        assert_eq!(surface.pixel(5, 5), [0, 0, 0, 128]);
        // Image still at the center
        assert_eq!(surface.pixel(480, 270), [255, 255, 255, 255]);
    }

    #[test]
    fn test_render_clears_previous_frame() {
        let config = EditorConfig::default();
        let compositor = Compositor::new(&config);
        let mut surface = Surface::new(config.viewport);
        let image = white_image(192, 108);

        compositor.render(&mut surface, &image, Offset::ZERO, 1.0);
        compositor.render(&mut surface, &image, Offset::ZERO, 0.1);

        assert_eq!(surface.pixel(200, 100), [0, 0, 0, 0]);
    }

    #[test]
    fn test_render_is_idempotent() {
        let config = EditorConfig::default();
        let compositor = Compositor::new(&config);
        let image = white_image(300, 200);

        let mut first = Surface::new(config.viewport);
        compositor.render(&mut first, &image, Offset::new(37.0, -12.0), 1.37);
        let mut second = first.clone();
        compositor.render(&mut second, &image, Offset::new(37.0, -12.0), 1.37);

        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_style() {
        let mut config = EditorConfig::default();
        config.style.dim_color = Rgba::new(0, 0, 255, 255);
        let compositor = Compositor::new(&config);
        let mut surface = Surface::new(config.viewport);
        compositor.render(&mut surface, &white_image(10, 10), Offset::ZERO, 1.0);

        assert_eq!(surface.pixel(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn test_image_rect_matches_geometry() {
        let compositor = Compositor::new(&EditorConfig::default());
        let rect = compositor.image_rect(&white_image(1920, 1080), Offset::new(100.0, 0.0), 1.0);
        assert!((rect.x - 100.0).abs() < 1e-9);
        assert_eq!(rect.y, 0.0);
    }
}
