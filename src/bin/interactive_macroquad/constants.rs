pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const LEFT_MARGIN: f32 = 420.0;
pub const RIGHT_MARGIN: f32 = 40.0;
pub const TOP_MARGIN: f32 = 150.0;
pub const BOTTOM_MARGIN: f32 = 120.0;

pub const TITLE_Y: f32 = 46.0;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const TARGET_MARKER_RADIUS: f32 = 8.0;
pub const DEFAULT_SPEED_MPS: f32 = 50.0;
pub const DEFAULT_ANGLE_DEG: f32 = 30.0;
