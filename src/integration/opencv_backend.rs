//! OpenCV backend: KCF/CSRT trackers, video and image-folder decoding,
//! HighGUI display and frame dumps.
//!
//! Frames travel through the crate in RGB order. Everything OpenCV decodes
//! or encodes is BGR, so conversion happens at this boundary only.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use opencv::boxed_ref::BoxedRef;
use opencv::core::{Mat, Ptr, Rect as CvRect, Vec3b};
use opencv::highgui;
use opencv::imgcodecs::{self, IMREAD_COLOR};
use opencv::imgproc::{self, COLOR_BGR2RGB, COLOR_RGB2BGR};
use opencv::prelude::*;
use opencv::tracking::{TrackerCSRT, TrackerKCF};
use opencv::videoio::{CAP_ANY, VideoCapture};

use crate::error::{Error, Result};
use crate::tracker::{Frame, Rect, TrackerKind, VisualTracker};

use super::{FrameSink, FrameSource, frame_file_name, list_images};

fn to_cv_rect(rect: &Rect) -> CvRect {
    let (x, y, width, height) = rect.round();
    CvRect::new(x, y, width, height)
}

fn from_cv_rect(rect: CvRect) -> Rect {
    Rect::new(
        rect.x as f32,
        rect.y as f32,
        rect.width as f32,
        rect.height as f32,
    )
}

/// Borrow an RGB frame as an 8UC3 `Mat` without copying.
fn rgb_view(frame: &Frame) -> Result<BoxedRef<'_, Mat>> {
    Ok(Mat::new_rows_cols_with_bytes::<Vec3b>(
        frame.height() as i32,
        frame.width() as i32,
        frame.as_bytes(),
    )?)
}

fn frame_from_bgr(bgr: &Mat) -> Result<Frame> {
    let mut rgb = Mat::default();
    imgproc::cvt_color_def(bgr, &mut rgb, COLOR_BGR2RGB)?;
    let bytes = rgb.data_bytes()?.to_vec();
    Frame::from_rgb_bytes(rgb.cols() as usize, rgb.rows() as usize, bytes)
}

fn frame_to_bgr(frame: &Frame) -> Result<Mat> {
    let rgb = rgb_view(frame)?;
    let mut bgr = Mat::default();
    imgproc::cvt_color_def(&rgb, &mut bgr, COLOR_RGB2BGR)?;
    Ok(bgr)
}

enum Algorithm {
    Kcf(Ptr<TrackerKCF>),
    Csrt(Ptr<TrackerCSRT>),
}

/// OpenCV's KCF or CSRT tracker with default parameters.
pub struct OpenCvTracker {
    algorithm: Algorithm,
}

impl OpenCvTracker {
    pub fn new(kind: TrackerKind) -> Result<Self> {
        let algorithm = match kind {
            TrackerKind::Kcf => Algorithm::Kcf(TrackerKCF::create_def()?),
            TrackerKind::Csrt => Algorithm::Csrt(TrackerCSRT::create_def()?),
        };
        Ok(Self { algorithm })
    }
}

impl VisualTracker for OpenCvTracker {
    fn init(&mut self, frame: &Frame, seed: Rect) -> Result<()> {
        let image = rgb_view(frame)?;
        let bbox = to_cv_rect(&seed);
        match &mut self.algorithm {
            Algorithm::Kcf(tracker) => tracker.init(&image, bbox)?,
            Algorithm::Csrt(tracker) => tracker.init(&image, bbox)?,
        }
        Ok(())
    }

    fn update(&mut self, frame: &Frame) -> Result<Option<Rect>> {
        let image = rgb_view(frame)?;
        let mut bbox = CvRect::default();
        let found = match &mut self.algorithm {
            Algorithm::Kcf(tracker) => tracker.update(&image, &mut bbox)?,
            Algorithm::Csrt(tracker) => tracker.update(&image, &mut bbox)?,
        };
        Ok(found.then(|| from_cv_rect(bbox)))
    }
}

/// Frames decoded from a video file.
pub struct VideoFileSource {
    capture: VideoCapture,
    buffer: Mat,
}

impl VideoFileSource {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let capture = VideoCapture::from_file(&path.to_string_lossy(), CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(Error::other(format!(
                "cannot open video {}",
                path.display()
            )));
        }
        log::info!("video opened: {}", path.display());

        Ok(Self {
            capture,
            buffer: Mat::default(),
        })
    }
}

impl FrameSource for VideoFileSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        if !self.capture.read(&mut self.buffer)? || self.buffer.empty() {
            return Ok(None);
        }
        frame_from_bgr(&self.buffer).map(Some)
    }
}

/// Image files of one folder, in file name order.
pub struct ImageDirSource {
    files: VecDeque<PathBuf>,
}

impl ImageDirSource {
    pub fn open(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let files = list_images(dir)?;
        log::info!("{} images in {}", files.len(), dir.display());

        Ok(Self {
            files: files.into(),
        })
    }

    /// Images not yet shown.
    pub fn remaining(&self) -> usize {
        self.files.len()
    }
}

impl FrameSource for ImageDirSource {
    fn next_frame(&mut self) -> Result<Option<Frame>> {
        let Some(path) = self.files.pop_front() else {
            return Ok(None);
        };
        log::info!("show {}", path.display());

        let image = imgcodecs::imread(&path.to_string_lossy(), IMREAD_COLOR)?;
        if image.empty() {
            return Err(Error::other(format!("cannot decode {}", path.display())));
        }
        frame_from_bgr(&image).map(Some)
    }
}

/// A HighGUI window.
pub struct HighGuiWindow {
    name: String,
}

impl HighGuiWindow {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        highgui::named_window(&name, highgui::WINDOW_AUTOSIZE)?;
        Ok(Self { name })
    }
}

impl FrameSink for HighGuiWindow {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        let bgr = frame_to_bgr(frame)?;
        highgui::imshow(&self.name, &bgr)?;
        Ok(())
    }

    fn hold(&mut self, duration: Duration) -> Result<()> {
        // wait_key(0) blocks until a key press
        let millis = duration.as_millis().clamp(1, i32::MAX as u128) as i32;
        highgui::wait_key(millis)?;
        Ok(())
    }
}

impl Drop for HighGuiWindow {
    fn drop(&mut self) {
        let _ = highgui::destroy_window(&self.name);
    }
}

/// Writes every frame to `<dir>/frame_NNN.jpg`.
pub struct FrameDirWriter {
    dir: PathBuf,
    written: usize,
}

impl FrameDirWriter {
    pub fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir, written: 0 })
    }

    pub fn written(&self) -> usize {
        self.written
    }
}

impl FrameSink for FrameDirWriter {
    fn show(&mut self, frame: &Frame) -> Result<()> {
        let path = self.dir.join(frame_file_name(self.written));
        let bgr = frame_to_bgr(frame)?;
        if !imgcodecs::imwrite_def(&path.to_string_lossy(), &bgr)? {
            return Err(Error::other(format!("cannot write {}", path.display())));
        }
        self.written += 1;
        Ok(())
    }
}
