use std::fs;
use std::path::Path;

use crate::error::IconError;
use crate::icon::{self, IconStyle};

/// Android launcher densities and their icon edge lengths in pixels.
pub const DENSITIES: [(&str, u32); 5] = [
    ("mdpi", 48),
    ("hdpi", 72),
    ("xhdpi", 96),
    ("xxhdpi", 144),
    ("xxxhdpi", 192),
];

/// Where the Android resource tree lives, relative to the repo root.
pub const ANDROID_RES_DIR: &str = "android/app/src/main/res";

pub const PLAY_STORE_SIZE: u32 = 512;
pub const HIRES_SIZE: u32 = 1024;

/// Check once, before any rendering starts, that this build of the
/// image crate can actually encode PNG.
pub fn png_support_available() -> bool {
    image::ImageFormat::Png.can_write()
}

/// Write `ic_launcher.png` and `ic_launcher_round.png` for every
/// (density, size) entry in the manifest, creating the
/// `mipmap-<density>` folders as needed.
///
/// Re-running against the same directory overwrites every file with
/// identical bytes, so a failed run can simply be started again.
pub fn export_launcher_icons(
    base_dir: &Path,
    manifest: &[(&str, u32)],
    style: &IconStyle,
) -> Result<(), IconError> {
    for &(density, size) in manifest {
        let img = icon::generate_icon(size, style)?;
        let dir = base_dir.join(format!("mipmap-{density}"));
        fs::create_dir_all(&dir)?;

        let path = dir.join("ic_launcher.png");
        img.save(&path)?;
        println!("Wrote {} ({}x{})", path.display(), size, size);

        let round_path = dir.join("ic_launcher_round.png");
        icon::round_variant(&img).save(&round_path)?;
        println!("Wrote {} ({}x{})", round_path.display(), size, size);
    }
    Ok(())
}

/// Store-listing icons, written as flat files next to the repo root
/// rather than into the density tree.
pub fn export_store_icons(root_dir: &Path, style: &IconStyle) -> Result<(), IconError> {
    let targets = [
        (PLAY_STORE_SIZE, "google-play-icon-512.png"),
        (HIRES_SIZE, "app-icon-1024.png"),
    ];
    for (size, name) in targets {
        let img = icon::generate_icon(size, style)?;
        let path = root_dir.join(name);
        img.save(&path)?;
        println!("Wrote {} ({}x{})", path.display(), size, size);
    }
    Ok(())
}
