use helpsite_core::config::{ConfigLoader, default_config_path};
use helpsite_core::navigation::flatten;
use std::path::Path;

pub fn run(config: Option<&Path>) {
    match ConfigLoader::load(config) {
        Ok(rc) => {
            println!("OK   hsite doctor");
            println!(
                "path: {}",
                config.map_or_else(
                    || default_config_path().display().to_string(),
                    |p| p.display().to_string()
                )
            );
            println!("site_root: {}", rc.site_root.display());
            println!(
                "content_dir: {}{}",
                rc.content_dir.display(),
                if rc.content_dir.is_dir() { "" } else { " (missing)" }
            );
            println!("base_url: {}", rc.site.base_url);
            println!("compatibility_date: {}", rc.site.compatibility_date);
            println!("ssr: {}", rc.site.ssr);
            println!("nitro_preset: {}", rc.site.nitro_preset);
            println!("image_provider: {}", rc.site.image_provider);
            println!("modules: {}", rc.site.modules.join(", "));
            println!(
                "route_rules: {}",
                rc.site.route_rules.patterns().collect::<Vec<_>>().join(", ")
            );
            println!("menu_items: {}", flatten(&rc.menu).len());
            println!(
                "videos: {}",
                rc.videos.iter().map(|c| c.videos.len()).sum::<usize>()
            );
            println!("logging.level: {}", rc.logging.level);
        }
        Err(e) => {
            println!("FAIL hsite doctor");
            println!("{e}");
            if config.is_none() {
                println!("looked for: {}", default_config_path().display());
            }
            crate::logging::flush();
            std::process::exit(1);
        }
    }
}
