//! Fidelity metrics between a cover image and its stego counterpart.
//!
//! MSE and NMSE are computed per channel and averaged over the selected
//! scope, so the numbers stay comparable whether a strategy spreads over
//! all three channels or only touches blue.

use image::RgbImage;

use crate::error::StegoError;
use crate::result::Result;

/// selects which channels a metric runs over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelScope {
    /// all three channels, averaged
    All,
    Red,
    Green,
    Blue,
}

impl ChannelScope {
    fn indices(&self) -> &'static [usize] {
        match self {
            ChannelScope::All => &[0, 1, 2],
            ChannelScope::Red => &[0],
            ChannelScope::Green => &[1],
            ChannelScope::Blue => &[2],
        }
    }
}

fn ensure_same_dimensions(a: &RgbImage, b: &RgbImage) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(StegoError::DimensionMismatch {
            left_width: a.width(),
            left_height: a.height(),
            right_width: b.width(),
            right_height: b.height(),
        });
    }

    Ok(())
}

/// mean squared error over the scope's channels
pub fn mse(a: &RgbImage, b: &RgbImage, scope: ChannelScope) -> Result<f64> {
    ensure_same_dimensions(a, b)?;

    let pixels = (a.width() as f64) * (a.height() as f64);
    let channels = scope.indices();
    let sum: f64 = channels
        .iter()
        .map(|&c| {
            let squared_diffs: f64 = a
                .pixels()
                .zip(b.pixels())
                .map(|(pa, pb)| {
                    let diff = f64::from(pa.0[c]) - f64::from(pb.0[c]);
                    diff * diff
                })
                .sum();
            squared_diffs / pixels
        })
        .sum();

    Ok(sum / channels.len() as f64)
}

/// normalized mean squared error, `sum((a-b)^2) / sum(a^2)` per channel
/// averaged over the scope
///
/// Yields `+inf` as soon as one channel's reference signal is all zeros.
pub fn nmse(a: &RgbImage, b: &RgbImage, scope: ChannelScope) -> Result<f64> {
    ensure_same_dimensions(a, b)?;

    let channels = scope.indices();
    let mut sum = 0.0;
    for &c in channels {
        let mut squared_diffs = 0.0;
        let mut reference_energy = 0.0;
        for (pa, pb) in a.pixels().zip(b.pixels()) {
            let va = f64::from(pa.0[c]);
            let diff = va - f64::from(pb.0[c]);
            squared_diffs += diff * diff;
            reference_energy += va * va;
        }
        if reference_energy == 0.0 {
            return Ok(f64::INFINITY);
        }
        sum += squared_diffs / reference_energy;
    }

    Ok(sum / channels.len() as f64)
}

/// number of pixels whose RGB triples differ between the two images
pub fn count_differing_pixels(a: &RgbImage, b: &RgbImage) -> Result<usize> {
    ensure_same_dimensions(a, b)?;

    Ok(a.pixels().zip(b.pixels()).filter(|(pa, pb)| pa != pb).count())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::gradient_carrier;
    use image::Rgb;

    #[test]
    fn identical_images_have_zero_mse_and_nmse() {
        let img = gradient_carrier(8, 8);

        assert_eq!(mse(&img, &img, ChannelScope::All).unwrap(), 0.0);
        assert_eq!(nmse(&img, &img, ChannelScope::All).unwrap(), 0.0);
        assert_eq!(count_differing_pixels(&img, &img).unwrap(), 0);
    }

    #[test]
    fn mse_is_symmetric() {
        let a = gradient_carrier(8, 8);
        let mut b = a.clone();
        b.get_pixel_mut(2, 3).0 = [0, 0, 0];

        assert_eq!(
            mse(&a, &b, ChannelScope::All).unwrap(),
            mse(&b, &a, ChannelScope::All).unwrap()
        );
    }

    #[test]
    fn should_average_the_per_channel_mse() {
        let a = RgbImage::from_pixel(2, 2, Rgb([10, 10, 10]));
        let b = RgbImage::from_pixel(2, 2, Rgb([12, 10, 10]));

        // only red differs, by 2 on every pixel: red MSE 4, others 0
        assert_eq!(mse(&a, &b, ChannelScope::Red).unwrap(), 4.0);
        assert_eq!(mse(&a, &b, ChannelScope::Green).unwrap(), 0.0);
        assert!((mse(&a, &b, ChannelScope::All).unwrap() - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn nmse_normalizes_by_the_reference_energy() {
        let a = RgbImage::from_pixel(1, 1, Rgb([10, 10, 10]));
        let b = RgbImage::from_pixel(1, 1, Rgb([10, 10, 11]));

        // blue: (10-11)^2 / 10^2
        assert!((nmse(&a, &b, ChannelScope::Blue).unwrap() - 0.01).abs() < 1e-12);
    }

    #[test]
    fn nmse_is_infinite_for_an_all_black_reference() {
        let a = RgbImage::new(4, 4);
        let b = gradient_carrier(4, 4);

        assert_eq!(nmse(&a, &b, ChannelScope::All).unwrap(), f64::INFINITY);
    }

    #[test]
    fn should_count_differing_pixels() {
        let a = gradient_carrier(4, 4);
        let mut b = a.clone();
        b.get_pixel_mut(0, 0).0[2] ^= 1;
        b.get_pixel_mut(3, 3).0[0] ^= 1;

        assert_eq!(count_differing_pixels(&a, &b).unwrap(), 2);
    }

    #[test]
    fn should_reject_mismatched_dimensions() {
        let a = gradient_carrier(4, 4);
        let b = gradient_carrier(4, 5);

        assert!(matches!(
            mse(&a, &b, ChannelScope::All),
            Err(StegoError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            nmse(&a, &b, ChannelScope::All),
            Err(StegoError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            count_differing_pixels(&a, &b),
            Err(StegoError::DimensionMismatch { .. })
        ));
    }
}
