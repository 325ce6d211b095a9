use std::path::Path;

use habiticons::export;
use habiticons::icon::{self, IconStyle};

fn main() {
    if !export::png_support_available() {
        eprintln!("PNG support is missing from this build; cannot write icons.");
        std::process::exit(1);
    }

    let size = export::HIRES_SIZE;
    let img = icon::generate_icon(size, &IconStyle::default())
        .unwrap_or_else(|e| panic!("failed to render app icon: {e}"));
    let out = Path::new("app-icon-1024.png");
    img.save(out).expect("failed to save icon png");
    println!("Wrote {} ({}x{})", out.display(), size, size);
}
