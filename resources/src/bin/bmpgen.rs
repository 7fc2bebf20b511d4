use resources::bmp::{Canvas, Pixel};
use std::env;
use std::path::Path;

const USAGE: &str = "Usage: bmpgen <output>

Writes the five key press bitmaps used by keypress into <output>:
  press.bmp  up.bmp  down.bmp  left.bmp  right.bmp

Each one is a 640x480 image with a bar pointing at the arrow it stands
for (press.bmp gets a centered square).

Examples:
  bmpgen .
      Generate the images in the current directory, next to keypress.";

const WIDTH: usize = 640;
const HEIGHT: usize = 480;
const BAR: usize = 120;

const BACKGROUND: Pixel = Pixel::rgb(0x20, 0x20, 0x28);

#[derive(Copy, Clone)]
enum KeyImage {
    Press,
    Up,
    Down,
    Left,
    Right,
}

impl KeyImage {
    const ALL: [KeyImage; 5] = [
        KeyImage::Press,
        KeyImage::Up,
        KeyImage::Down,
        KeyImage::Left,
        KeyImage::Right,
    ];

    fn file_name(self) -> &'static str {
        match self {
            KeyImage::Press => "press.bmp",
            KeyImage::Up => "up.bmp",
            KeyImage::Down => "down.bmp",
            KeyImage::Left => "left.bmp",
            KeyImage::Right => "right.bmp",
        }
    }
}

fn key_image(key: KeyImage) -> Canvas {
    let mut canvas = Canvas::new(WIDTH, HEIGHT, BACKGROUND);
    match key {
        KeyImage::Press => canvas.fill_rect(
            (WIDTH - BAR) / 2,
            (HEIGHT - BAR) / 2,
            BAR,
            BAR,
            Pixel::rgb(0xe0, 0xe0, 0xe0),
        ),
        KeyImage::Up => canvas.fill_rect(0, 0, WIDTH, BAR, Pixel::rgb(0xd0, 0x40, 0x40)),
        KeyImage::Down => canvas.fill_rect(0, HEIGHT - BAR, WIDTH, BAR, Pixel::rgb(0x40, 0xd0, 0x40)),
        KeyImage::Left => canvas.fill_rect(0, 0, BAR, HEIGHT, Pixel::rgb(0x40, 0x40, 0xd0)),
        KeyImage::Right => canvas.fill_rect(WIDTH - BAR, 0, BAR, HEIGHT, Pixel::rgb(0xd0, 0xd0, 0x40)),
    }
    canvas
}

fn main() {
    let args = env::args().collect::<Vec<String>>();
    if args.len() < 2 || args[1] == "-h" || args[1] == "--help" {
        println!("{USAGE}");
        std::process::exit(1);
    }
    let out_dir = Path::new(&args[1]);
    if !out_dir.is_dir() {
        eprintln!("bmpgen: {out_dir:?} is not a directory");
        std::process::exit(1);
    }

    for key in KeyImage::ALL {
        let dest = out_dir.join(key.file_name());
        if let Err(e) = key_image(key).as_bmp().to_file(&dest) {
            eprintln!("bmpgen: can't write {dest:?}: {e}");
            std::process::exit(1);
        }
        println!("{dest:?}: {WIDTH} x {HEIGHT}");
    }
}
