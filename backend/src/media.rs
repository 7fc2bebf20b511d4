use crate::error::SystemError;
use crate::keys::{ImageSet, ImageTable, KeySelection};
use std::path::Path;

/// What is left when at least one bitmap failed to load.
#[derive(Debug)]
pub struct PartialLoad<S> {
    pub table: ImageTable<S>,
    pub errors: Vec<SystemError>,
}

/// Loads `press.bmp`, `up.bmp`, `down.bmp`, `left.bmp` and `right.bmp` from `dir`.
///
/// Every file is attempted even after a failure so that all problems get
/// reported in one run. Only a complete set is usable by the event loop;
/// anything else comes back as `PartialLoad` holding whatever did load.
pub fn load_images<S, F>(dir: &Path, mut load: F) -> Result<ImageSet<S>, PartialLoad<S>>
where
    F: FnMut(&Path) -> Result<S, String>,
{
    let mut table = ImageTable::new();
    let mut errors = Vec::new();

    for sel in KeySelection::ALL {
        let path = dir.join(sel.file_name());
        match load(&path) {
            Ok(image) => {
                log::debug!("loaded {path:?} for {} key", sel.label());
                table.insert(sel, image);
            }
            Err(reason) => {
                let e = SystemError::Load { path, reason };
                log::error!("{e}");
                log::error!("Failed to load {} image!", sel.label());
                errors.push(e);
            }
        }
    }

    match table.complete() {
        Ok(images) => Ok(images),
        Err(table) => Err(PartialLoad { table, errors }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::path::PathBuf;
    use std::rc::Rc;

    /// Stand-in for a surface that counts how many times it was freed.
    #[derive(Debug)]
    struct FakeImage {
        name: String,
        freed: Rc<Cell<usize>>,
    }

    impl Drop for FakeImage {
        fn drop(&mut self) {
            self.freed.set(self.freed.get() + 1);
        }
    }

    fn loader_failing_on(
        missing: &'static [&'static str],
        freed: Rc<Cell<usize>>,
        attempts: Rc<RefCell<Vec<PathBuf>>>,
    ) -> impl FnMut(&Path) -> Result<FakeImage, String> {
        move |path: &Path| {
            attempts.borrow_mut().push(path.to_path_buf());
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            if missing.contains(&name.as_str()) {
                Err(format!("Couldn't open {name}"))
            } else {
                Ok(FakeImage {
                    name,
                    freed: freed.clone(),
                })
            }
        }
    }

    #[test]
    fn all_present_gives_a_complete_set() {
        let freed = Rc::new(Cell::new(0));
        let attempts = Rc::new(RefCell::new(Vec::new()));
        let images = load_images(
            Path::new("media"),
            loader_failing_on(&[], freed.clone(), attempts.clone()),
        )
        .unwrap();

        assert_eq!(images[KeySelection::Default].name, "press.bmp");
        assert_eq!(images[KeySelection::Right].name, "right.bmp");
        assert_eq!(
            *attempts.borrow(),
            vec![
                PathBuf::from("media/press.bmp"),
                PathBuf::from("media/up.bmp"),
                PathBuf::from("media/down.bmp"),
                PathBuf::from("media/left.bmp"),
                PathBuf::from("media/right.bmp"),
            ]
        );

        drop(images);
        assert_eq!(freed.get(), 5);
    }

    #[test]
    fn one_missing_file_keeps_the_other_four() {
        let freed = Rc::new(Cell::new(0));
        let attempts = Rc::new(RefCell::new(Vec::new()));
        let partial = load_images(
            Path::new("."),
            loader_failing_on(&["left.bmp"], freed.clone(), attempts.clone()),
        )
        .unwrap_err();

        // loading carried on past the failure
        assert_eq!(attempts.borrow().len(), 5);
        assert_eq!(partial.table.loaded_count(), 4);
        assert!(partial.table.get(KeySelection::Left).is_none());
        assert_eq!(
            partial.table.get(KeySelection::Right).map(|i| i.name.as_str()),
            Some("right.bmp")
        );

        assert_eq!(partial.errors.len(), 1);
        match &partial.errors[0] {
            SystemError::Load { path, reason } => {
                assert_eq!(path, &PathBuf::from("./left.bmp"));
                assert_eq!(reason, "Couldn't open left.bmp");
            }
            e => panic!("unexpected error {e}"),
        }

        // tearing down a partial table frees exactly what was loaded
        drop(partial);
        assert_eq!(freed.get(), 4);
    }

    #[test]
    fn every_failure_is_reported() {
        let freed = Rc::new(Cell::new(0));
        let attempts = Rc::new(RefCell::new(Vec::new()));
        let partial = load_images(
            Path::new("."),
            loader_failing_on(
                &["press.bmp", "up.bmp", "down.bmp", "left.bmp", "right.bmp"],
                freed.clone(),
                attempts,
            ),
        )
        .unwrap_err();

        assert_eq!(partial.errors.len(), 5);
        assert_eq!(partial.table.missing(), KeySelection::ALL.to_vec());
        drop(partial);
        assert_eq!(freed.get(), 0);
    }

    #[test]
    fn loads_real_bitmaps_through_sdl() {
        use sdl2::surface::Surface;

        let dir = std::env::temp_dir().join(format!("keypress-media-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        for (i, sel) in KeySelection::ALL.iter().enumerate() {
            let pixels = vec![(i * 40) as u8; 3 * 8 * 4];
            resources::bmp::BMP::from_mem(8, 4, &pixels)
                .to_file(&dir.join(sel.file_name()))
                .unwrap();
        }
        std::fs::remove_file(dir.join("down.bmp")).unwrap();

        let partial = match load_images(&dir, |p| Surface::load_bmp(p)) {
            Err(partial) => partial,
            Ok(_) => panic!("down.bmp was removed, loading must not succeed"),
        };
        assert_eq!(partial.table.missing(), vec![KeySelection::Down]);
        let up = partial.table.get(KeySelection::Up).unwrap();
        assert_eq!((up.width(), up.height()), (8, 4));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
