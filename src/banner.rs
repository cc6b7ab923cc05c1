// src/banner.rs

/// Prints the application startup banner to the console.
pub fn print_banner() {
    let banner = r#"
  ____            _     _   _  ___
 / ___|_____   _(_) __| | / |/ _ \
| |   / _ \ \ / / |/ _` | | | (_) |
| |__| (_) \ V /| | (_| | | |\__, |
 \____\___/ \_/ |_|\__,_| |_|  /_/

    India COVID-19 State & District Portal
"#;
    println!("{}", banner);
}
