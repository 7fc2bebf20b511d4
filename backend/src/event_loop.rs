use crate::error::SystemError;
use crate::keys::{ImageSet, KeySelection};
use crate::system::IoEvents;

/// Something that produces input events and can put an image on screen.
pub trait Screen {
    type Image;

    /// Drains every pending event without blocking.
    fn poll_events(&mut self) -> Vec<IoEvents>;

    /// Copies `image` over the whole drawable surface and presents it.
    fn show(&mut self, image: &Self::Image) -> Result<(), SystemError>;
}

#[derive(Debug)]
pub struct EventLoop {
    selection: KeySelection,
    running: bool,
}

impl Default for EventLoop {
    fn default() -> Self {
        Self {
            selection: KeySelection::Default,
            running: true,
        }
    }
}

impl EventLoop {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> KeySelection {
        self.selection
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn handle(&mut self, event: &IoEvents) {
        match event {
            IoEvents::Quit => self.running = false,
            IoEvents::KeyDown(key) => {
                let sel = KeySelection::from_key(*key);
                if sel != self.selection {
                    log::debug!("selection {:?} -> {sel:?}", self.selection);
                }
                self.selection = sel;
            }
            IoEvents::Other => {}
        }
    }

    /// Runs until a quit event has been seen, returns the number of frames drawn.
    ///
    /// A quit only takes effect at the top of the next iteration: the rest of
    /// the drained events are still applied and the frame is still presented.
    pub fn run<S: Screen>(&mut self, screen: &mut S, images: &ImageSet<S::Image>) -> usize {
        let mut frames = 0;
        while self.running {
            for event in screen.poll_events() {
                self.handle(&event);
            }

            if let Err(e) = screen.show(&images[self.selection]) {
                log::warn!("{e}");
            }
            frames += 1;
        }
        log::info!("event loop finished after {frames} frames");
        frames
    }
}
