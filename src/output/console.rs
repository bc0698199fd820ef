//! Console output utilities.

use console::style;

use crate::config::QuerySpec;

/// Print an info message.
pub fn print_info(message: &str) {
    println!("{} {}", style("INFO").cyan().bold(), message);
}

/// Print a warning message.
pub fn print_warning(message: &str) {
    println!("{} {}", style("WARN").yellow().bold(), message);
}

/// Print an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", style("ERROR").red().bold(), message);
}

/// Print the application banner.
pub fn print_banner() {
    let banner = r#"
╔═══════════════════════════════════════════════════════╗
║     Unsplash Downloader                               ║
║     Random wallpapers from searches and collections   ║
╚═══════════════════════════════════════════════════════╝
"#;
    println!("{}", style(banner).cyan());
}

/// Print configuration summary.
pub fn print_config_summary(queries: &[QuerySpec], wallpaper_dir: &str, log_dir: &str) {
    println!();
    println!("{}", style("Configuration:").bold());
    for query in queries {
        println!("  Query: {}", query);
    }
    println!("  Wallpapers: {}", wallpaper_dir);
    println!("  Logs: {}", log_dir);
    println!();
}
