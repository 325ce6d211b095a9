/// Errors raised while rendering or exporting launcher icons.
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("icon size must be at least 1 pixel, got {0}")]
    InvalidSize(u32),

    #[error("failed to write icon file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode icon: {0}")]
    Image(#[from] image::ImageError),
}
