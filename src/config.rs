use crate::render::Rgb;

/// Every tunable constant of the caster, gathered in one place.
///
/// Defaults reproduce the classic layout: a 1290x640 window with the top-down
/// map on the left and a 640x480 projected view on the right.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Config {
    pub window_width: u32,
    pub window_height: u32,
    /// world-space edge length of one grid cell
    pub tile_size: f32,
    pub num_rays: usize,
    /// field of view in degrees
    pub fov: f32,
    pub view_width: f32,
    pub view_height: f32,
    /// left edge of the projected view, in pixels
    pub view_x: f32,
    /// numerator scale of the projection; with the view height here a wall one
    /// tile away fills the view
    pub projection: f32,
    pub move_step: f32,
    pub turn_step: f32,
    pub clear_color: Rgb,
    pub vertical_shade: Rgb,
    pub horizontal_shade: Rgb,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            window_width: 1290,
            window_height: 640,
            tile_size: 64.,
            num_rays: 60,
            fov: 60.,
            view_width: 640.,
            view_height: 480.,
            view_x: 650.,
            projection: 480.,
            move_step: 5.,
            turn_step: 0.1,
            clear_color: Rgb::new(0.3, 0.3, 0.3),
            vertical_shade: Rgb::new(0.9, 0., 0.),
            horizontal_shade: Rgb::new(0.7, 0., 0.),
        }
    }
}

impl Config {
    /// reject configurations the core cannot render
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.tile_size.is_finite() || self.tile_size <= 0. {
            anyhow::bail!("tile size must be positive, got {}", self.tile_size);
        }
        if self.num_rays == 0 {
            anyhow::bail!("at least one ray is required");
        }
        if !(self.fov > 0. && self.fov < 180.) {
            anyhow::bail!("field of view must be within (0, 180) degrees, got {}", self.fov);
        }
        if self.window_width == 0 || self.window_height == 0 {
            anyhow::bail!("window must not be empty");
        }
        if !(self.view_width > 0. && self.view_height > 0.) {
            anyhow::bail!(
                "view must not be empty, got {}x{}",
                self.view_width,
                self.view_height
            );
        }
        if !(self.projection.is_finite() && self.projection > 0.) {
            anyhow::bail!("projection constant must be positive");
        }
        if !(self.move_step.is_finite() && self.turn_step.is_finite()) {
            anyhow::bail!("movement steps must be finite");
        }

        Ok(())
    }

    /// fov in radians
    pub fn fov_rad(&self) -> f32 {
        self.fov.to_radians()
    }

    /// angle between two neighbouring rays of the fan
    pub fn ray_delta(&self) -> f32 {
        self.fov_rad() / self.num_rays as f32
    }

    /// horizontal pixels covered by one projected slice
    pub fn slice_width(&self) -> f32 {
        self.view_width / self.num_rays as f32
    }
}
