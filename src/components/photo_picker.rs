//! Photo Picker Component
//!
//! Opens a native file dialog, downsizes the chosen image and re-encodes it
//! as JPEG so the report body stays small.

use dioxus::prelude::*;
use ecoguard_ui::{Button, ButtonVariant};
use image::{DynamicImage, GenericImageView, ImageFormat};
use rfd::FileDialog;

/// Longest edge of an attached photo, in pixels
const MAX_EDGE: u32 = 1600;

/// A photo ready to attach to a report.
#[derive(Clone, PartialEq, Debug)]
pub struct PickedPhoto {
    pub file_name: String,
    pub jpeg: Vec<u8>,
}

/// File picker button that hands back a re-encoded photo.
///
/// # Examples
///
/// ```rust,ignore
/// rsx! {
///     PhotoPicker {
///         on_pick: move |photo: PickedPhoto| form.write().set_photo(Some(photo.jpeg)),
///     }
/// }
/// ```
#[component]
pub fn PhotoPicker(
    /// Callback with the encoded photo
    on_pick: EventHandler<PickedPhoto>,
    /// Name of the currently attached file, if any
    #[props(default)]
    attached: Option<String>,
) -> Element {
    let mut loading = use_signal(|| false);
    let mut error = use_signal(|| Option::<String>::None);

    let handle_pick = move |_: ()| {
        loading.set(true);
        error.set(None);

        spawn(async move {
            // The dialog blocks, so keep it off the UI thread
            let picked = tokio::task::spawn_blocking(move || {
                let path = FileDialog::new()
                    .add_filter("images", &["png", "jpg", "jpeg", "webp"])
                    .set_title("Выберите фотографию")
                    .pick_file()?;
                Some(load_photo(&path))
            })
            .await;

            match picked {
                Ok(Some(Ok(photo))) => {
                    tracing::debug!(file = %photo.file_name, bytes = photo.jpeg.len(), "photo attached");
                    on_pick.call(photo);
                }
                Ok(Some(Err(e))) => error.set(Some(e)),
                // Cancelled
                Ok(None) => {}
                Err(e) => {
                    tracing::warn!("File picker task failed: {}", e);
                    error.set(Some("Не удалось открыть выбор файла.".to_string()));
                }
            }
            loading.set(false);
        });
    };

    rsx! {
        div { class: "photo-picker",
            Button {
                variant: ButtonVariant::Outline,
                onclick: handle_pick,
                disabled: loading(),
                if loading() {
                    "Обработка..."
                } else if attached.is_some() {
                    "Заменить фото"
                } else {
                    "\u{1F4F7} Прикрепить фото"
                }
            }

            if let Some(name) = &attached {
                span { class: "photo-picker__name", "{name}" }
            }

            if let Some(err) = error() {
                div { class: "photo-picker__error", "{err}" }
            }
        }
    }
}

/// Read, downsize and JPEG-encode the image at `path`.
fn load_photo(path: &std::path::Path) -> Result<PickedPhoto, String> {
    let img = image::open(path).map_err(|e| format!("Не удалось прочитать изображение: {e}"))?;
    let jpeg = encode_jpeg(shrink(img)).map_err(|e| format!("Не удалось сжать изображение: {e}"))?;
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo.jpg".to_string());
    Ok(PickedPhoto { file_name, jpeg })
}

fn shrink(img: DynamicImage) -> DynamicImage {
    let (width, height) = img.dimensions();
    if width.max(height) <= MAX_EDGE {
        return img;
    }
    let (w, h) = fit_within(width, height, MAX_EDGE);
    img.thumbnail(w, h)
}

/// Scale `(width, height)` so the longer edge is at most `max`, keeping ratio.
fn fit_within(width: u32, height: u32, max: u32) -> (u32, u32) {
    let longest = width.max(height);
    if longest <= max || longest == 0 {
        return (width, height);
    }
    let scale = max as f64 / longest as f64;
    let w = ((width as f64 * scale).round() as u32).max(1);
    let h = ((height as f64 * scale).round() as u32).max(1);
    (w, h)
}

// JPEG has no alpha channel
fn encode_jpeg(img: DynamicImage) -> image::ImageResult<Vec<u8>> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());
    let mut buffer = Vec::new();
    rgb.write_to(&mut std::io::Cursor::new(&mut buffer), ImageFormat::Jpeg)?;
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_within_keeps_small_images() {
        assert_eq!(fit_within(800, 600, 1600), (800, 600));
    }

    #[test]
    fn fit_within_scales_longest_edge() {
        assert_eq!(fit_within(3200, 2400, 1600), (1600, 1200));
        assert_eq!(fit_within(1000, 4000, 1600), (400, 1600));
    }

    #[test]
    fn encode_jpeg_drops_alpha() {
        let img = DynamicImage::new_rgba8(4, 4);
        let bytes = encode_jpeg(img).unwrap();
        // JPEG SOI marker
        assert_eq!(&bytes[..2], &[0xff, 0xd8]);
    }
}
