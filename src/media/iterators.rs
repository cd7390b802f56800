//! Row-major channel iterators over RGB carriers.
//!
//! The embedding scheme addresses channels in pixel-major, row-major
//! order with the origin top-left. `image`'s `pixels()` already walks
//! that order, these helpers only flatten it down to the channel level.

use image::RgbImage;

/// every color channel of every pixel, cycling R, G, B within a pixel
pub(crate) fn rgb_channels(img: &RgbImage) -> impl Iterator<Item = &u8> {
    img.pixels().flat_map(|pixel| pixel.0.iter())
}

pub(crate) fn rgb_channels_mut(img: &mut RgbImage) -> impl Iterator<Item = &mut u8> {
    img.pixels_mut().flat_map(|pixel| pixel.0.iter_mut())
}

/// only the blue channel of every pixel, one slot per pixel
pub(crate) fn blue_channels(img: &RgbImage) -> impl Iterator<Item = &u8> {
    img.pixels().map(|pixel| &pixel.0[2])
}

pub(crate) fn blue_channels_mut(img: &mut RgbImage) -> impl Iterator<Item = &mut u8> {
    img.pixels_mut().map(|pixel| &mut pixel.0[2])
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};

    /// every channel of the 2x2 image holds its own traversal index
    fn linear_growing_image() -> RgbImage {
        let mut img = RgbImage::new(2, 2);
        let mut i = 0;
        for y in 0..2 {
            for x in 0..2 {
                *img.get_pixel_mut(x, y) = Rgb([i, i + 1, i + 2]);
                i += 3;
            }
        }
        img
    }

    #[test]
    fn should_iterate_all_channels_row_major() {
        let img = linear_growing_image();

        let channels: Vec<u8> = rgb_channels(&img).copied().collect();

        assert_eq!(channels, (0..12).collect::<Vec<u8>>());
    }

    #[test]
    fn should_iterate_blue_channels_only() {
        let img = linear_growing_image();

        let blues: Vec<u8> = blue_channels(&img).copied().collect();

        assert_eq!(blues, vec![2, 5, 8, 11]);
    }

    #[test]
    fn should_allow_mutation_through_the_channel_iterator() {
        let mut img = linear_growing_image();

        for channel in rgb_channels_mut(&mut img) {
            *channel |= 1;
        }

        assert_eq!(img.get_pixel(0, 0), &Rgb([1, 1, 3]));
        assert_eq!(img.get_pixel(1, 1).0, [9, 11, 11]);
    }

    #[test]
    fn should_only_touch_blue_through_the_blue_iterator() {
        let mut img = linear_growing_image();

        for blue in blue_channels_mut(&mut img) {
            *blue = 0;
        }

        assert_eq!(img.get_pixel(0, 0), &Rgb([0, 1, 0]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([3, 4, 0]));
    }
}
