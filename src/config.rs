//! Tunable layout parameters for a [`WindowManager`](crate::window::WindowManager).

use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("minimum window size must be non-zero, got {width}x{height}")]
    ZeroMinimumSize { width: u32, height: u32 },
    #[error("mobile breakpoint must be non-zero")]
    ZeroBreakpoint,
    #[error("default size {width}x{height} is below the minimum {min_width}x{min_height}")]
    DefaultBelowMinimum {
        width: u32,
        height: u32,
        min_width: u32,
        min_height: u32,
    },
    #[error("{name} must not be negative, got {value}")]
    NegativeMargin { name: &'static str, value: i32 },
    #[error("title bar ({title_bar}px) must be taller than the resize border ({border}px)")]
    TitleBarTooShort { title_bar: u32, border: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WmConfig {
    pub min_width: u32,
    pub min_height: u32,
    pub mobile_breakpoint: u32,
    pub mobile_chrome_height: u32,
    pub dock_margin: i32,
    pub edge_margin: i32,
    pub cascade_gap: i32,
    pub cascade_origin: (i32, i32),
    pub cascade_step: i32,
    pub default_width: u32,
    pub default_height: u32,
    pub initial_z_index: u64,
    pub resize_border: u32,
    pub title_bar_height: u32,
}

impl Default for WmConfig {
    fn default() -> Self {
        Self {
            min_width: MIN_WINDOW_WIDTH,
            min_height: MIN_WINDOW_HEIGHT,
            mobile_breakpoint: MOBILE_BREAKPOINT,
            mobile_chrome_height: MOBILE_CHROME_HEIGHT,
            dock_margin: DOCK_MARGIN,
            edge_margin: EDGE_MARGIN,
            cascade_gap: CASCADE_GAP,
            cascade_origin: (CASCADE_ORIGIN_X, CASCADE_ORIGIN_Y),
            cascade_step: CASCADE_STEP,
            default_width: DEFAULT_WINDOW_WIDTH,
            default_height: DEFAULT_WINDOW_HEIGHT,
            initial_z_index: INITIAL_Z_INDEX,
            resize_border: RESIZE_BORDER,
            title_bar_height: TITLE_BAR_HEIGHT,
        }
    }
}

impl WmConfig {
    /// Check the invariants the geometry engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_width == 0 || self.min_height == 0 {
            return Err(ConfigError::ZeroMinimumSize {
                width: self.min_width,
                height: self.min_height,
            });
        }
        if self.mobile_breakpoint == 0 {
            return Err(ConfigError::ZeroBreakpoint);
        }
        if self.default_width < self.min_width || self.default_height < self.min_height {
            return Err(ConfigError::DefaultBelowMinimum {
                width: self.default_width,
                height: self.default_height,
                min_width: self.min_width,
                min_height: self.min_height,
            });
        }
        for (name, value) in [
            ("dock_margin", self.dock_margin),
            ("edge_margin", self.edge_margin),
            ("cascade_gap", self.cascade_gap),
            ("cascade_step", self.cascade_step),
        ] {
            if value < 0 {
                return Err(ConfigError::NegativeMargin { name, value });
            }
        }
        if self.title_bar_height <= self.resize_border {
            return Err(ConfigError::TitleBarTooShort {
                title_bar: self.title_bar_height,
                border: self.resize_border,
            });
        }
        Ok(())
    }

    /// Top-left corner of the `index`-th cascaded desktop window.
    pub fn cascade_position(&self, index: usize) -> (i32, i32) {
        let offset = self.cascade_step.saturating_mul(index as i32);
        let (ox, oy) = self.cascade_origin;
        (
            ox + self.cascade_gap + offset,
            oy + self.cascade_gap + offset,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(WmConfig::default().validate(), Ok(()));
    }

    #[test]
    fn first_cascade_slot_is_offset_by_gap() {
        let cfg = WmConfig::default();
        assert_eq!(cfg.cascade_position(0), (116, 36));
        assert_eq!(cfg.cascade_position(2), (196, 116));
    }

    #[test]
    fn rejects_zero_floor() {
        let cfg = WmConfig {
            min_width: 0,
            ..WmConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ZeroMinimumSize { width: 0, .. })
        ));
    }

    #[test]
    fn rejects_default_smaller_than_floor() {
        let cfg = WmConfig {
            min_height: 600,
            ..WmConfig::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::DefaultBelowMinimum { .. })
        ));
    }

    #[test]
    fn rejects_negative_margin() {
        let cfg = WmConfig {
            dock_margin: -1,
            ..WmConfig::default()
        };
        assert_eq!(
            cfg.validate(),
            Err(ConfigError::NegativeMargin {
                name: "dock_margin",
                value: -1
            })
        );
    }
}
