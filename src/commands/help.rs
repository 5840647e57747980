//! Help and version output.

/// Print usage information.
pub fn show_help() {
    println!(
        "themr v{} - automatic light/dark theme switching from sunrise and sunset",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("Usage: themr [OPTIONS] [COMMAND]");
    println!();
    println!("Running without a command executes the decision pipeline once:");
    println!("settings are loaded and migrated, the sun times cache is populated");
    println!("if absent, and the current moment is classified as Light or Dark.");
    println!();
    println!("Commands:");
    println!("  update            Recompute and rewrite the sun times cache");
    println!("  status            Show effective settings and the current verdict");
    println!();
    println!("Options:");
    println!("  -c, --config DIR  Use DIR for settings and cache files");
    println!("  -h, --help        Print this help");
    println!("  -V, --version     Print version");
}

/// Print the version line.
pub fn show_version() {
    println!("themr v{}", env!("CARGO_PKG_VERSION"));
}
