//! Trait for frame producers (video files, image folders, synthetic clips).

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::tracker::Frame;

/// A stream of decoded frames in acquisition order.
///
/// # Example
///
/// ```ignore
/// use trackbench::{Frame, FrameSource, Result};
///
/// struct Blank {
///     left: usize,
/// }
///
/// impl FrameSource for Blank {
///     fn next_frame(&mut self) -> Result<Option<Frame>> {
///         if self.left == 0 {
///             return Ok(None);
///         }
///         self.left -= 1;
///         Ok(Some(Frame::new(64, 48)))
///     }
/// }
/// ```
pub trait FrameSource {
    /// Decode the next frame.
    ///
    /// `Ok(None)` signals that the stream is exhausted. Decoding problems
    /// are reported as errors.
    fn next_frame(&mut self) -> Result<Option<Frame>>;
}

impl<S: FrameSource + ?Sized> FrameSource for &mut S {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        (**self).next_frame()
    }
}

impl<S: FrameSource + ?Sized> FrameSource for Box<S> {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        (**self).next_frame()
    }
}

/// Frames already held in memory.
#[derive(Debug, Clone, Default)]
pub struct FrameList {
    frames: VecDeque<Frame>,
}

impl FrameList {
    pub fn new(frames: impl IntoIterator<Item = Frame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FrameSource for FrameList {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        Ok(self.frames.pop_front())
    }
}

/// File extensions treated as still images, compared case-insensitively.
pub const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "bmp", "tiff"];

/// Image files directly inside `dir`, sorted by path.
pub fn list_images(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>> {
    let mut files = fs::read_dir(dir)?
        .map(|entry| entry.map(|entry| entry.path()))
        .collect::<std::io::Result<Vec<_>>>()?;
    files.retain(|path| {
        path.is_file()
            && path
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
    });
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_list_drains_in_order() {
        let mut list = FrameList::new([Frame::new(1, 1), Frame::new(2, 2)]);
        assert_eq!(list.len(), 2);

        assert_eq!(list.next_frame().unwrap().unwrap().width(), 1);
        assert_eq!(list.next_frame().unwrap().unwrap().width(), 2);
        assert!(list.next_frame().unwrap().is_none());
        assert!(list.next_frame().unwrap().is_none());
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_images_sorted_and_filtered() {
        let dir = std::env::temp_dir().join(format!("trackbench-list-{}", std::process::id()));
        fs::create_dir_all(dir.join("nested.jpg")).unwrap();
        for name in ["frame_010.jpg", "frame_002.PNG", "frame_001.jpeg", "notes.txt", "frame"] {
            fs::write(dir.join(name), b"").unwrap();
        }

        let names: Vec<_> = list_images(&dir)
            .unwrap()
            .iter()
            .map(|path| path.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(names, ["frame_001.jpeg", "frame_002.PNG", "frame_010.jpg"]);
    }

    #[test]
    fn test_list_images_missing_dir() {
        let dir = std::env::temp_dir().join("trackbench-does-not-exist");
        assert!(matches!(list_images(dir), Err(crate::Error::Io(_))));
    }
}
