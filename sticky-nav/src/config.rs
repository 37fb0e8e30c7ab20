//! Navigation options and merged settings

use serde::{Deserialize, Serialize};

use crate::error::{NavError, NavResult};
use crate::geometry::Px;

/// Layout direction of the navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Side column; scroll tracking and min heights are enabled
    #[default]
    Vertical,
    /// Top bar; only section toggling is wired
    Horizontal,
}

/// Which page signal drives repositioning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tracking {
    /// Wheel events, coalesced to one recomputation per animation frame
    #[default]
    Wheel,
    /// Scroll events, recomputed synchronously
    Scroll,
}

/// User supplied options. Every key is optional; missing keys fall back to
/// [`Settings::default`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavOptions {
    /// Viewport width below which manual positioning is suspended
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub breakpoint: Option<Px>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Resting `top` of the nav, as set by the page's CSS
    #[serde(default, alias = "initialOffset", skip_serializing_if = "Option::is_none")]
    pub position: Option<Px>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_heights: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tracking: Option<Tracking>,
}

impl NavOptions {
    /// Parse options from a JSON object
    pub fn from_json(json: &str) -> NavResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(NavError::InvalidOptions(format!(
                "expected an object, found {}",
                value
            )));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn breakpoint(mut self, width: Px) -> Self {
        self.breakpoint = Some(width);
        self
    }

    pub fn orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn position(mut self, position: Px) -> Self {
        self.position = Some(position);
        self
    }

    pub fn min_heights(mut self, enabled: bool) -> Self {
        self.min_heights = Some(enabled);
        self
    }

    pub fn tracking(mut self, tracking: Tracking) -> Self {
        self.tracking = Some(tracking);
        self
    }
}

/// Settings for one activation. Immutable once the widget is active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub breakpoint: Option<Px>,
    pub orientation: Orientation,
    /// Resting offset, also the ceiling of the clamp
    pub position: Px,
    pub min_heights: bool,
    pub tracking: Tracking,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            breakpoint: None,
            orientation: Orientation::Vertical,
            position: 0,
            min_heights: true,
            tracking: Tracking::Wheel,
        }
    }
}

impl Settings {
    /// Shallow merge of `options` over the defaults; supplied keys win.
    pub fn merged(options: NavOptions) -> Self {
        let defaults = Self::default();
        Self {
            breakpoint: options.breakpoint.or(defaults.breakpoint),
            orientation: options.orientation.unwrap_or(defaults.orientation),
            position: options.position.unwrap_or(defaults.position),
            min_heights: options.min_heights.unwrap_or(defaults.min_heights),
            tracking: options.tracking.unwrap_or(defaults.tracking),
        }
    }

    pub fn is_vertical(&self) -> bool {
        self.orientation == Orientation::Vertical
    }

    /// Listeners an activation with these settings must acquire
    pub fn wiring(&self) -> Wiring {
        let vertical = self.is_vertical();
        Wiring {
            click: true,
            tracking: vertical.then_some(self.tracking),
            resize: vertical,
        }
    }
}

/// Event listeners acquired on activation and released on deactivation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Wiring {
    /// Click on the nav element
    pub click: bool,
    /// Wheel on the document or scroll on the window
    pub tracking: Option<Tracking>,
    /// Resize on the window
    pub resize: bool,
}
