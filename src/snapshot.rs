use crate::appearance::Appearance;
use crate::grid_state::GridState;
use image::{ImageFormat, Rgba, RgbaImage};
use std::path::Path;

/// Background margin around the grid, so the background color is visible in
/// the rendered image the way it is around the grid in the window.
const MARGIN: u32 = 8;

/// Render the grid to an RGBA image: background, then one bordered cell per
/// pixel, filled with the on or off color.
pub fn render(appearance: &Appearance, state: &GridState) -> RgbaImage {
    let px = appearance.pixel_size.round().max(1.0) as u32;
    let border = appearance.border_width.round() as u32;

    let width = state.columns() as u32 * px + 2 * MARGIN;
    let height = state.rows() as u32 * px + 2 * MARGIN;
    let mut image = RgbaImage::from_pixel(width, height, Rgba(appearance.background));

    for y in 0..state.rows() {
        for x in 0..state.columns() {
            let fill = if state.is_on(x, y) {
                appearance.pixel_on
            } else {
                appearance.pixel_off
            };
            let left = MARGIN + x as u32 * px;
            let top = MARGIN + y as u32 * px;
            fill_rect(&mut image, left, top, px, px, appearance.border);
            if 2 * border < px {
                fill_rect(
                    &mut image,
                    left + border,
                    top + border,
                    px - 2 * border,
                    px - 2 * border,
                    fill,
                );
            }
        }
    }

    image
}

/// Write a rendered grid as a PNG file.
pub fn write_png(image: &RgbaImage, path: impl AsRef<Path>) -> Result<(), image::ImageError> {
    image.save_with_format(path, ImageFormat::Png)
}

fn fill_rect(image: &mut RgbaImage, left: u32, top: u32, width: u32, height: u32, color: [u8; 4]) {
    for y in top..top + height {
        for x in left..left + width {
            image.put_pixel(x, y, Rgba(color));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Options;

    fn default_appearance() -> Appearance {
        Appearance::resolve(&Options::default()).unwrap()
    }

    #[test]
    fn image_dimensions_follow_the_grid() {
        let state = GridState::new(8, 12);
        let image = render(&default_appearance(), &state);
        assert_eq!(image.width(), 12 * 10 + 2 * MARGIN);
        assert_eq!(image.height(), 8 * 10 + 2 * MARGIN);
    }

    #[test]
    fn margin_carries_the_background_color() {
        let state = GridState::new(2, 2);
        let image = render(&default_appearance(), &state);
        assert_eq!(image.get_pixel(0, 0).0, [0, 0, 0, 255]);
        assert_eq!(
            image.get_pixel(image.width() - 1, image.height() - 1).0,
            [0, 0, 0, 255]
        );
    }

    #[test]
    fn cell_centers_carry_the_on_and_off_colors() {
        let mut state = GridState::new(2, 2);
        state.set(1, 0, true);
        let image = render(&default_appearance(), &state);

        // Default pixel size is 10, so cell (x, y) is centered at
        // (MARGIN + 10x + 5, MARGIN + 10y + 5).
        let center = |x: u32, y: u32| image.get_pixel(MARGIN + 10 * x + 5, MARGIN + 10 * y + 5).0;
        assert_eq!(center(0, 0), [17, 17, 17, 255]);
        assert_eq!(center(1, 0), [0, 255, 0, 255]);
    }

    #[test]
    fn cell_edges_carry_the_border_color() {
        let state = GridState::new(1, 1);
        let image = render(&default_appearance(), &state);
        assert_eq!(image.get_pixel(MARGIN, MARGIN).0, [51, 51, 51, 255]);
    }

    #[test]
    fn wide_borders_swallow_the_fill() {
        let appearance = Appearance {
            border_width: 5.0,
            ..default_appearance()
        };
        let state = GridState::new(1, 1);
        let image = render(&appearance, &state);
        assert_eq!(image.get_pixel(MARGIN + 5, MARGIN + 5).0, [51, 51, 51, 255]);
    }
}
