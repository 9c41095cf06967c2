//! Entry point for the **hyprlayout** daemon.
//!
//! Applies the right layout once for whatever is connected at launch, then
//! follows Hyprland's event socket and re-applies it on every monitor
//! hotplug.  Runs until killed.

use hyprlayout::config::{self, Config};
use hyprlayout::hyprland::ctl::Hyprctl;
use hyprlayout::hyprland::listener::EventListener;
use hyprlayout::layout_file::LayoutFile;
use hyprlayout::sync::LayoutSync;
use log::info;

/// Try to load the config from `$XDG_CONFIG_HOME/hyprlayout/config.json`,
/// falling back to compiled-in defaults.
fn load_config() -> Config {
    let path = config::config_dir().join("config.json");
    match Config::load(&path) {
        Ok(cfg) => {
            info!("loaded config from {}", path.display());
            cfg
        }
        Err(e) => {
            info!("no config file ({}), using defaults", e);
            Config::default()
        }
    }
}

fn main() {
    env_logger::init();

    let config = load_config();

    let hyprctl = Hyprctl::new(config.hyprctl.clone(), config.timing.command_timeout());
    let layout_file = LayoutFile::new(config.layout_file_path());
    info!("managing {}", layout_file.path().display());

    let sync = LayoutSync::new(hyprctl, layout_file);
    sync.sync();

    let listener = EventListener::new(config::event_socket_path_from_env(), &config.timing);
    info!("watching {}", listener.path().display());
    listener.run(|_| {
        sync.sync();
    });
}
