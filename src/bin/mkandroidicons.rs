use std::path::Path;

use habiticons::export::{self, ANDROID_RES_DIR, DENSITIES};
use habiticons::icon::IconStyle;

fn main() {
    if !export::png_support_available() {
        eprintln!("PNG support is missing from this build; cannot write icons.");
        std::process::exit(1);
    }

    let style = IconStyle::default();

    // 1) One icon pair per launcher density
    let base = Path::new(ANDROID_RES_DIR);
    println!("Updating launcher icons under {}", base.display());
    export::export_launcher_icons(base, &DENSITIES, &style)
        .unwrap_or_else(|e| panic!("failed to export launcher icons: {e}"));

    // 2) Store-listing icons at the repo root
    export::export_store_icons(Path::new("."), &style)
        .unwrap_or_else(|e| panic!("failed to export store icons: {e}"));

    println!("All launcher icons updated");
}
