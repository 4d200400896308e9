//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# skydome configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Values are read once at startup.

[viewport]
width = 800
height = 600

[camera]
# eye = [0.0, 0.0, 1.0]
# view = [0.0, 0.0, -1.0]   # forward direction, must not be parallel to up
# up = [0.0, 1.0, 0.0]
# fovy = 50.0               # degrees, (0, 180)
# film_depth = 100.0        # > 0

[background]
# mode = "banded"           # banded, checker, texture
# dome_radius = 5000.0
# checker_period = 20.0
# texture = ""

[controller]
# mapping = "planar"        # planar, planar_wheel, planar_pointer_z
# origin = "viewport_center" # viewport_center, first_sample
# factor_x = 0.002
# factor_y = 0.002
# factor_z = 0.001
# invert_y = true
# smoothing = 0.1           # (0, 1]
# wheel_min = -1600.0
# wheel_max = 4000.0

[orbit]
# enabled = true
# count = 3                 # 1-16
# central_mass = 500.0
# first_distance = 150.0
# spacing = 50.0
# min_distance = 0.001

[render]
# frame_rate = 60           # 1-240
# frames = 120
# parallel = true

[logging]
# level = "info"            # trace, debug, info, warn, error
"##
    .to_string()
}
