use std::path::Path;

use whorl::{Options, Viewer};

const CONFIG_PATH: &str = "whorl.toml";

fn main() {
    env_logger::init();

    let image_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "assets/images".to_string());

    let options = if Path::new(CONFIG_PATH).exists() {
        match Options::load(Path::new(CONFIG_PATH)) {
            Ok(opts) => {
                log::info!("Loaded options from {CONFIG_PATH}");
                opts
            }
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        }
    } else {
        Options::default()
    };

    if let Err(e) = Viewer::builder()
        .with_image_dir(&image_dir)
        .with_options(options)
        .run()
    {
        log::error!("{e}");
        std::process::exit(1);
    }
}
