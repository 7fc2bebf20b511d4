// Fixed window and media parameters, nothing here is read at runtime.

pub const WINDOW_TITLE: &str = "SDL Tutorial";
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;

/// Directory the key press bitmaps are loaded from (the working directory).
pub const MEDIA_DIR: &str = ".";
