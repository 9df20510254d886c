use crate::error::{BoardError, Result};
use egui::ColorImage;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, Receiver, TryRecvError};

/// Decoded background pixels plus the image's original size.
pub struct LoadedImage {
    pub image: ColorImage,
    pub original_size: egui::Vec2,
}

impl LoadedImage {
    pub fn from_dynamic(image: DynamicImage) -> Self {
        let original_size = egui::vec2(image.width() as f32, image.height() as f32);
        Self {
            image: color_image_from_dynamic(image),
            original_size,
        }
    }
}

pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let bytes = fs::read(path).map_err(|source| BoardError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let decoded = image::guess_format(&bytes)
        .or_else(|_| ImageFormat::from_path(path))
        .and_then(|format| image::load_from_memory_with_format(&bytes, format))
        .map_err(|source| BoardError::Image {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(LoadedImage::from_dynamic(decoded))
}

fn color_image_from_dynamic(image: DynamicImage) -> ColorImage {
    let rgba = image.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    ColorImage::from_rgba_unmultiplied(size, &rgba.into_raw())
}

pub type ImageLoadResponse = Result<LoadedImage>;

/// A background decode running on the rayon pool.
pub struct BackgroundLoad {
    path: PathBuf,
    receiver: Receiver<ImageLoadResponse>,
}

impl BackgroundLoad {
    /// Starts decoding `path`. The task is never cancelled.
    pub fn spawn(path: PathBuf) -> Self {
        let (sender, receiver) = mpsc::channel();
        let task_path = path.clone();
        rayon::spawn(move || {
            let result = load_image(&task_path);
            // The receiver is gone if the window already closed.
            let _ = sender.send(result);
        });
        Self { path, receiver }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Checks in on the decode without blocking.
    pub fn poll(&self) -> Option<ImageLoadResponse> {
        match self.receiver.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => Some(Err(BoardError::Read {
                path: self.path.clone(),
                source: std::io::Error::new(
                    std::io::ErrorKind::Other,
                    "image loader stopped without a result",
                ),
            })),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};
    use std::time::{Duration, Instant};

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("flower_board_{name}_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_png(path: &Path, width: u32, height: u32) {
        let img = RgbaImage::from_pixel(width, height, Rgba([200, 100, 50, 255]));
        img.save_with_format(path, ImageFormat::Png).unwrap();
    }

    #[test]
    fn test_load_reports_original_size() {
        let dir = temp_dir("load");
        let path = dir.join("bg.png");
        write_png(&path, 8, 4);

        let loaded = load_image(&path).unwrap();
        assert_eq!(loaded.original_size, egui::vec2(8.0, 4.0));
        assert_eq!(loaded.image.size, [8, 4]);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let err = load_image(Path::new("/definitely/not/here/flower.jpg")).err().unwrap();
        assert!(matches!(err, BoardError::Read { .. }));
    }

    #[test]
    fn test_garbage_is_image_error() {
        let dir = temp_dir("garbage");
        let path = dir.join("bg.jpg");
        fs::write(&path, b"not an image").unwrap();
        let err = load_image(&path).err().unwrap();
        assert!(matches!(err, BoardError::Image { .. }));
    }

    #[test]
    fn test_background_load_completes() {
        let dir = temp_dir("async");
        let path = dir.join("bg.png");
        write_png(&path, 6, 3);

        let load = BackgroundLoad::spawn(path.clone());
        assert_eq!(load.path(), path.as_path());
        let deadline = Instant::now() + Duration::from_secs(10);
        let result = loop {
            if let Some(result) = load.poll() {
                break result;
            }
            assert!(Instant::now() < deadline, "background load timed out");
            std::thread::sleep(Duration::from_millis(5));
        };
        assert_eq!(result.unwrap().original_size, egui::vec2(6.0, 3.0));
    }
}
