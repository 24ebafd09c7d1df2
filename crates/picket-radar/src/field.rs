//! Sampled precipitation field.
//!
//! A row-major scalar grid of rain rates over the scenario area. The engine
//! only consumes samples; how the field was produced is out of scope.

use picket_core::error::RadarError;
use picket_core::types::Position;

/// 2D rain-rate field (mm/h) over the scenario grid.
#[derive(Debug, Clone)]
pub struct RainField {
    /// Rain rates, row-major (south-to-north rows, west-to-east columns).
    data: Vec<f64>,
    width: usize,
    height: usize,
    /// Grid resolution (cells per km).
    cells_per_km: f64,
    /// World position of the grid's southwest corner (km).
    origin: Position,
    /// Cap applied to every sample (mm/h).
    cap_mm_hr: f64,
}

impl RainField {
    /// Build a field by sampling `f(x_km, y_km)` at every cell center of a
    /// square grid of `extent_km` per side, southwest corner at `origin`.
    pub fn from_fn<F>(
        origin: Position,
        extent_km: f64,
        cells_per_km: f64,
        cap_mm_hr: f64,
        f: F,
    ) -> Self
    where
        F: Fn(f64, f64) -> f64,
    {
        let cells = ((extent_km * cells_per_km).ceil() as usize).max(1);
        let cell_km = 1.0 / cells_per_km;
        let mut data = Vec::with_capacity(cells * cells);
        for row in 0..cells {
            let y = origin.y + (row as f64 + 0.5) * cell_km;
            for col in 0..cells {
                let x = origin.x + (col as f64 + 0.5) * cell_km;
                data.push(f(x, y).clamp(0.0, cap_mm_hr));
            }
        }
        Self {
            data,
            width: cells,
            height: cells,
            cells_per_km,
            origin,
            cap_mm_hr,
        }
    }

    /// Grid cell edge length (km). Ray-marching uses this as its step.
    pub fn cell_km(&self) -> f64 {
        1.0 / self.cells_per_km
    }

    /// Bilinearly interpolated rain rate (mm/h) at a world position,
    /// clamped into [0, cap]. Positions outside the grid clamp to the edge.
    pub fn sample(&self, x_km: f64, y_km: f64) -> Result<f64, RadarError> {
        // Convert to fractional cell-center coordinates.
        let fx = (x_km - self.origin.x) * self.cells_per_km - 0.5;
        let fy = (y_km - self.origin.y) * self.cells_per_km - 0.5;

        let fx = fx.clamp(0.0, (self.width - 1) as f64);
        let fy = fy.clamp(0.0, (self.height - 1) as f64);

        let x0 = fx.floor() as usize;
        let y0 = fy.floor() as usize;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);
        let tx = fx - x0 as f64;
        let ty = fy - y0 as f64;

        let v00 = self.data[y0 * self.width + x0];
        let v01 = self.data[y0 * self.width + x1];
        let v10 = self.data[y1 * self.width + x0];
        let v11 = self.data[y1 * self.width + x1];

        let south = v00 + (v01 - v00) * tx;
        let north = v10 + (v11 - v10) * tx;
        let value = south + (north - south) * ty;

        if !value.is_finite() {
            return Err(RadarError::BadFieldSample { x_km, y_km });
        }
        Ok(value.clamp(0.0, self.cap_mm_hr))
    }
}
