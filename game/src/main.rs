use backend::config::{MEDIA_DIR, SCREEN_HEIGHT, SCREEN_WIDTH, WINDOW_TITLE};
use backend::event_loop::EventLoop;
use backend::keys::KeySelection;
use backend::media;
use backend::system::System;
use std::path::Path;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stdout)
        .init();

    let system = match System::new(WINDOW_TITLE, SCREEN_WIDTH, SCREEN_HEIGHT) {
        Ok(s) => s,
        Err(e) => {
            // nothing was acquired that is still alive, SDL is already down
            log::error!("{e}");
            log::error!("Failed to initialize!");
            return;
        }
    };

    let loaded = media::load_images(Path::new(MEDIA_DIR), |p| system.load_image(p));
    match loaded {
        Ok(images) => {
            let mut system = system;
            EventLoop::new().run(&mut system, &images);
            system.release(images);
        }
        Err(partial) => {
            log::error!(
                "Failed to load media! ({} of {} images missing)",
                partial.errors.len(),
                KeySelection::COUNT
            );
            system.release(partial);
        }
    }
}
