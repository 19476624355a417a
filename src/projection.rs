use crate::config::Config;
use crate::player::normalize_angle;
use glam::Vec2;

/// Corrected distances at or below this project to a full-height slice.
const NEAR: f32 = 1e-4;

/// A vertical wall strip in the projected view.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Slice {
    /// horizontal pixel position of the strip
    pub x: f32,
    /// vertical pixel centre
    pub center: f32,
    pub height: f32,
    pub width: f32,
}

impl Slice {
    pub fn top(&self) -> Vec2 {
        Vec2::new(self.x, self.center - self.height / 2.)
    }

    pub fn bottom(&self) -> Vec2 {
        Vec2::new(self.x, self.center + self.height / 2.)
    }
}

/// Remove fish-eye distortion: scale the radial distance by the cosine of the
/// angle between the ray and the view direction.
pub fn correct(distance: f32, heading: f32, ray_angle: f32) -> f32 {
    distance * normalize_angle(heading - ray_angle).cos()
}

/// Projected height of a wall of edge `tile_size` at a corrected distance, never
/// taller than the view. `tile_size` must be the one the distance was cast with.
pub fn wall_height(corrected: f32, tile_size: f32, config: &Config) -> f32 {
    if !(corrected > NEAR) {
        return config.view_height;
    }

    (tile_size * config.projection / corrected).min(config.view_height)
}

/// A ray's position in the fan and the hit it produced.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Sample {
    pub index: usize,
    pub angle: f32,
    pub distance: f32,
}

/// Map a raw hit distance for one ray of the fan to its screen slice.
pub fn project(sample: Sample, heading: f32, tile_size: f32, config: &Config) -> Slice {
    let width = config.slice_width();
    let corrected = correct(sample.distance, heading, sample.angle);

    Slice {
        x: config.view_x + sample.index as f32 * width,
        center: config.window_height as f32 / 2.,
        height: wall_height(corrected, tile_size, config),
        width,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn aligned_ray_is_not_corrected() {
        for distance in [1., 64., 506., 1234.5] {
            assert_eq!(correct(distance, 1.3, 1.3), distance);
        }
    }

    #[test]
    fn correction_is_symmetric_across_heading() {
        let heading = 0.2;
        let delta = 25f32.to_radians();
        let left = correct(100., heading, normalize_angle(heading - delta));
        let right = correct(100., heading, normalize_angle(heading + delta));
        assert!((left - right).abs() < 1e-3);
        assert!((left - 100. * delta.cos()).abs() < 1e-3);
        // wrap-around does not change the result
        assert!((correct(100., 0.1, TAU - 0.1) - 100. * 0.2f32.cos()).abs() < 1e-3);
    }

    #[test]
    fn height_is_monotonic_and_clamped() {
        let config = Config::default();
        let mut previous = f32::INFINITY;
        for i in 0..2000 {
            let distance = i as f32 * 0.5;
            let height = wall_height(distance, 64., &config);
            assert!(height <= previous, "height grew at {distance}");
            assert!(height <= config.view_height);
            assert!(height.is_finite());
            previous = height;
        }

        // a wall one tile away exactly fills the view
        assert_eq!(wall_height(64., 64., &config), 480.);
        assert_eq!(wall_height(32., 64., &config), 480.);
        assert_eq!(wall_height(128., 64., &config), 240.);
    }

    #[test]
    fn degenerate_distances_fill_the_view() {
        let config = Config::default();
        for distance in [0., -0., 1e-9, -5., f32::NAN] {
            assert_eq!(wall_height(distance, 64., &config), config.view_height);
        }
    }

    #[test]
    fn slices_march_across_the_panel() {
        let config = Config::default();
        let at = |index| Sample {
            index,
            angle: 0.,
            distance: 128.,
        };
        let first = project(at(0), 0., 64., &config);
        assert_eq!(first.x, 650.);
        assert_eq!(first.center, 320.);
        assert_eq!(first.height, 240.);
        assert_eq!(first.top(), Vec2::new(650., 200.));
        assert_eq!(first.bottom(), Vec2::new(650., 440.));

        let last = project(at(59), 0., 64., &config);
        assert!((last.x - (650. + 59. * 640. / 60.)).abs() < 1e-3);
        assert!(last.x < config.window_width as f32);
    }

    #[test]
    fn height_scales_with_the_cast_tile_size() {
        let config = Config::default();
        assert_eq!(wall_height(64., 32., &config), 240.);
        assert_eq!(wall_height(64., 128., &config), config.view_height);
        assert_eq!(wall_height(256., 128., &config), 240.);
    }
}
