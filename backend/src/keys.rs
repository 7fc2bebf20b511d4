use std::ops::Index;

/// Backend neutral key code, only the keys the demo reacts to are named.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// Which of the five images is on screen.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum KeySelection {
    #[default]
    Default,
    Up,
    Down,
    Left,
    Right,
}

impl KeySelection {
    pub const COUNT: usize = 5;
    /// Load order, also the slot order of the tables below.
    pub const ALL: [KeySelection; KeySelection::COUNT] = [
        KeySelection::Default,
        KeySelection::Up,
        KeySelection::Down,
        KeySelection::Left,
        KeySelection::Right,
    ];

    pub fn from_key(key: Key) -> Self {
        match key {
            Key::Up => KeySelection::Up,
            Key::Down => KeySelection::Down,
            Key::Left => KeySelection::Left,
            Key::Right => KeySelection::Right,
            Key::Other => KeySelection::Default,
        }
    }

    pub fn file_name(self) -> &'static str {
        match self {
            KeySelection::Default => "press.bmp",
            KeySelection::Up => "up.bmp",
            KeySelection::Down => "down.bmp",
            KeySelection::Left => "left.bmp",
            KeySelection::Right => "right.bmp",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KeySelection::Default => "default",
            KeySelection::Up => "up",
            KeySelection::Down => "down",
            KeySelection::Left => "left",
            KeySelection::Right => "right",
        }
    }

    #[inline(always)]
    fn slot(self) -> usize {
        self as usize
    }
}

/// Images loaded so far, any slot may still be empty.
#[derive(Debug)]
pub struct ImageTable<S> {
    slots: [Option<S>; KeySelection::COUNT],
}

impl<S> Default for ImageTable<S> {
    fn default() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }
}

impl<S> ImageTable<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, sel: KeySelection, image: S) -> Option<S> {
        self.slots[sel.slot()].replace(image)
    }

    pub fn get(&self, sel: KeySelection) -> Option<&S> {
        self.slots[sel.slot()].as_ref()
    }

    pub fn loaded_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn missing(&self) -> Vec<KeySelection> {
        KeySelection::ALL
            .into_iter()
            .filter(|sel| self.get(*sel).is_none())
            .collect()
    }

    /// Turns a fully populated table into an `ImageSet`, otherwise hands the
    /// table back untouched.
    pub fn complete(self) -> Result<ImageSet<S>, ImageTable<S>> {
        match self.slots {
            [Some(d), Some(u), Some(dn), Some(l), Some(r)] => Ok(ImageSet {
                slots: [d, u, dn, l, r],
            }),
            slots => Err(ImageTable { slots }),
        }
    }
}

/// One image per `KeySelection`, guaranteed.
#[derive(Debug)]
pub struct ImageSet<S> {
    slots: [S; KeySelection::COUNT],
}

impl<S> Index<KeySelection> for ImageSet<S> {
    type Output = S;
    #[inline(always)]
    fn index(&self, sel: KeySelection) -> &S {
        &self.slots[sel.slot()]
    }
}
