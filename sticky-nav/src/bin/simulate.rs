//! Sticky Nav Simulator - replays a scroll trace against an in-memory page
//!
//! Usage: `simulate [scenario.json]`
//!
//! ```json
//! {
//!   "settings": { "position": 0 },
//!   "nav_height": 2000,
//!   "content_height": 3000,
//!   "viewport_height": 800,
//!   "scroll": [100, 1600, 400, 0]
//! }
//! ```

use std::fs;

use anyhow::Context;
use log::info;
use serde::Deserialize;
use sticky_nav::prelude::*;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    settings: NavOptions,
    nav_height: Px,
    content_height: Px,
    viewport_height: Px,
    #[serde(default = "default_viewport_width")]
    viewport_width: Px,
    scroll: Vec<Px>,
}

fn default_viewport_width() -> Px {
    1280
}

impl Scenario {
    /// Tall nav next to taller content: scroll 100px, then 1500px more
    fn builtin() -> Self {
        Self {
            settings: NavOptions::default(),
            nav_height: 2000,
            content_height: 3000,
            viewport_height: 800,
            viewport_width: default_viewport_width(),
            scroll: vec![100, 1600],
        }
    }

    fn load(path: &str) -> NavResult<Self> {
        let json = fs::read_to_string(path)?;
        let scenario: Scenario = serde_json::from_str(&json)?;
        scenario.validate()?;
        Ok(scenario)
    }

    fn validate(&self) -> NavResult<()> {
        if self.nav_height < 0 || self.content_height < 0 || self.viewport_height <= 0 {
            return Err(NavError::Scenario("heights must be positive".to_string()));
        }
        if self.scroll.iter().any(|&top| top < 0) {
            return Err(NavError::Scenario("scroll offsets must not be negative".to_string()));
        }
        Ok(())
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let scenario = match std::env::args().nth(1) {
        Some(path) => Scenario::load(&path).with_context(|| format!("loading {}", path))?,
        None => Scenario::builtin(),
    };

    println!("=== Sticky Nav Simulation ===\n");
    println!(
        "nav {}px, content {}px, viewport {}x{}px",
        scenario.nav_height,
        scenario.content_height,
        scenario.viewport_width,
        scenario.viewport_height
    );

    let page = MemoryPage::new(
        scenario.nav_height,
        scenario.content_height,
        Viewport::new(scenario.viewport_width, scenario.viewport_height),
    );

    let mut nav = Navigation::new();
    let wiring = nav.init(page, scenario.settings.clone());
    info!("wiring: {:?}", wiring);

    for &scroll_top in &scenario.scroll {
        if let Some(page) = nav.page_mut() {
            page.scroll_to(scroll_top);
        }

        let applied = match wiring.tracking {
            Some(Tracking::Wheel) => match nav.on_wheel() {
                WheelOutcome::Released(reason) => {
                    println!("scroll {:>6}px -> released ({})", scroll_top, reason);
                    continue;
                }
                _ => nav.on_frame(),
            },
            Some(Tracking::Scroll) => nav.on_scroll(),
            None => None,
        };

        match applied {
            Some(top) => println!("scroll {:>6}px -> top {:>6}px", scroll_top, top),
            None => println!("scroll {:>6}px -> unchanged", scroll_top),
        }
    }

    if let Some(state) = nav.state() {
        println!("\nfinal state: position {}px, top {}px", state.position, state.top);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_reports_io_and_parse_errors() {
        let missing = Scenario::load("does/not/exist.json");
        assert!(matches!(missing, Err(NavError::IoError(_))));

        let path = std::env::temp_dir().join("sticky-nav-bad-scenario.json");
        fs::write(&path, "{ not json").unwrap();
        let parsed = Scenario::load(path.to_str().unwrap());
        assert!(matches!(parsed, Err(NavError::SerializationError(_))));
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_validate_rejects_negative_scroll() {
        let mut scenario = Scenario::builtin();
        assert!(scenario.validate().is_ok());
        scenario.scroll.push(-1);
        assert!(matches!(scenario.validate(), Err(NavError::Scenario(_))));
    }
}
