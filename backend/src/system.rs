use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::surface::Surface;
use std::path::Path;

use crate::error::SystemError;
use crate::event_loop::Screen;
use crate::keys::Key;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum IoEvents {
    Quit,
    KeyDown(Key),
    Other,
}

impl From<Option<Keycode>> for Key {
    fn from(keycode: Option<Keycode>) -> Self {
        match keycode {
            Some(Keycode::Up) => Key::Up,
            Some(Keycode::Down) => Key::Down,
            Some(Keycode::Left) => Key::Left,
            Some(Keycode::Right) => Key::Right,
            _ => Key::Other,
        }
    }
}

/// Everything SDL hands out for the lifetime of the program.
///
/// Fields are declared in release order: the event pump and window go
/// before the video subsystem and the SDL context itself.
pub struct System {
    event_pump: sdl2::EventPump,
    window: sdl2::video::Window,
    video_subsystem: sdl2::VideoSubsystem,
    sdl_context: sdl2::Sdl,
}

impl System {
    pub fn new(title: &str, w: u32, h: u32) -> Result<System, SystemError> {
        let sdl_context = sdl2::init().map_err(SystemError::init("SDL initialization"))?;
        let video_subsystem = sdl_context
            .video()
            .map_err(SystemError::init("SDL video initialization"))?;

        let window = video_subsystem
            .window(title, w, h)
            .build()
            .map_err(|e| SystemError::init("Window creation")(e.to_string()))?;

        let event_pump = sdl_context
            .event_pump()
            .map_err(SystemError::init("Event pump creation"))?;

        // make sure the window really has a drawable surface before going on
        window
            .surface(&event_pump)
            .map_err(SystemError::init("Window surface retrieval"))?;

        log::info!("created {w}x{h} window {title:?}");
        Ok(System {
            event_pump,
            window,
            video_subsystem,
            sdl_context,
        })
    }

    pub fn load_image(&self, path: &Path) -> Result<Surface<'static>, String> {
        Surface::load_bmp(path)
    }

    /// Frees `media` (the loaded images), then the window, then SDL itself.
    pub fn release<M>(self, media: M) {
        drop(media);
        log::debug!("image surfaces freed");

        let System {
            event_pump,
            window,
            video_subsystem,
            sdl_context,
        } = self;
        drop(event_pump);
        drop(window);
        log::debug!("window destroyed");
        drop(video_subsystem);
        drop(sdl_context);
        log::info!("SDL shut down");
    }
}

impl Screen for System {
    type Image = Surface<'static>;

    fn poll_events(&mut self) -> Vec<IoEvents> {
        self.event_pump
            .poll_iter()
            .map(|event| match event {
                Event::Quit { .. } => IoEvents::Quit,
                Event::KeyDown { keycode, .. } => IoEvents::KeyDown(Key::from(keycode)),
                _ => IoEvents::Other,
            })
            .collect()
    }

    fn show(&mut self, image: &Surface<'static>) -> Result<(), SystemError> {
        let mut screen = self
            .window
            .surface(&self.event_pump)
            .map_err(SystemError::Draw)?;
        image
            .blit(None, &mut screen, None)
            .map_err(SystemError::Draw)?;
        screen.update_window().map_err(SystemError::Draw)
    }
}
