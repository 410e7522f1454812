use crate::types::*;
use crate::units::Mm;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Calibration settings for one imposition run.
///
/// Lengths are in millimeters. The record is immutable in use: the
/// `with_*` methods return an adjusted copy.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ImpositionSettings {
    /// Horizontal shift applied to every placed page
    pub x_offset_mm: f32,
    /// Vertical shift applied to every placed page
    pub y_offset_mm: f32,
    /// Spacing that pushes both slots away from the sheet centerline
    pub gutter_mm: f32,
    /// Uniform scale factor; 1.0 = 100%
    pub scale: f32,
    /// Extra horizontal shift applied only on back sheets
    pub duplex_correction_mm: f32,
    /// Draw the dashed center guide and the side label
    pub draw_center_line: bool,
}

impl Default for ImpositionSettings {
    fn default() -> Self {
        Self {
            x_offset_mm: 0.0,
            y_offset_mm: 0.0,
            gutter_mm: 0.0,
            scale: 1.0,
            duplex_correction_mm: 0.0,
            draw_center_line: true,
        }
    }
}

impl ImpositionSettings {
    pub fn with_x_offset_mm(self, x_offset_mm: f32) -> Self {
        Self {
            x_offset_mm,
            ..self
        }
    }

    pub fn with_y_offset_mm(self, y_offset_mm: f32) -> Self {
        Self {
            y_offset_mm,
            ..self
        }
    }

    pub fn with_gutter_mm(self, gutter_mm: f32) -> Self {
        Self { gutter_mm, ..self }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self { scale, ..self }
    }

    pub fn with_duplex_correction_mm(self, duplex_correction_mm: f32) -> Self {
        Self {
            duplex_correction_mm,
            ..self
        }
    }

    pub fn with_center_line(self, draw_center_line: bool) -> Self {
        Self {
            draw_center_line,
            ..self
        }
    }

    pub fn x_offset(&self) -> Mm {
        Mm(self.x_offset_mm)
    }

    pub fn y_offset(&self) -> Mm {
        Mm(self.y_offset_mm)
    }

    pub fn gutter(&self) -> Mm {
        Mm(self.gutter_mm)
    }

    pub fn duplex_correction(&self) -> Mm {
        Mm(self.duplex_correction_mm)
    }

    /// Horizontal offset for pages on the given sheet side.
    ///
    /// Back sheets add the duplex correction on top of the global offset.
    /// Page placement and the back guide line both go through here.
    pub fn horizontal_offset(&self, side: SheetSide) -> Mm {
        match side {
            SheetSide::Front => self.x_offset(),
            SheetSide::Back => self.x_offset() + self.duplex_correction(),
        }
    }

    /// Load settings from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let settings = serde_json::from_slice(&bytes)
            .map_err(|e| ImposeError::Config(format!("Failed to parse settings: {}", e)))?;
        Ok(settings)
    }

    /// Save settings to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| ImposeError::Config(format!("Failed to serialize settings: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Strict check for callers that want one.
    ///
    /// `impose` never calls this: out-of-range values only move pages, they
    /// are not errors.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("x_offset_mm", self.x_offset_mm),
            ("y_offset_mm", self.y_offset_mm),
            ("gutter_mm", self.gutter_mm),
            ("duplex_correction_mm", self.duplex_correction_mm),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(ImposeError::Config(format!(
                    "{} must be a finite number, got {}",
                    name, value
                )));
            }
        }

        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ImposeError::Config(format!(
                "scale must be a positive number, got {}",
                self.scale
            )));
        }

        Ok(())
    }
}
