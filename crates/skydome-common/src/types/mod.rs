mod color;
mod core;

pub use self::core::*;
pub use color::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolution_copy_and_equality() {
        let r = Resolution::new(800, 600);
        let r2 = r;
        assert_eq!(r, r2);
    }

    #[test]
    fn resolution_serialization() {
        let r = Resolution::new(1920, 1080);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Resolution = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn resolution_center_is_midpoint() {
        let r = Resolution::new(800, 600);
        assert_eq!(r.center(), (400.0, 300.0));
    }

    #[test]
    fn resolution_pixel_count() {
        assert_eq!(Resolution::new(4, 3).pixel_count(), 12);
    }

    #[test]
    fn rgba_to_rgba8_scales_channels() {
        let c = Rgba::new(1.0, 0.5, 0.0, 1.0);
        assert_eq!(c.to_rgba8(), [255, 128, 0, 255]);
    }

    #[test]
    fn rgba_to_rgba8_clamps_out_of_range() {
        let c = Rgba::new(1.5, -0.2, 0.25, 2.0);
        assert_eq!(c.to_rgba8(), [255, 0, 64, 255]);
    }

    #[test]
    fn rgba_grey_is_opaque() {
        let c = Rgba::grey(0.0);
        assert_eq!(c, Rgba::new(0.0, 0.0, 0.0, 1.0));
    }
}
