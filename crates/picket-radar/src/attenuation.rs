//! Rain attenuation lookup table.
//!
//! One-way specific attenuation (dB/km) over a fixed (frequency, rain-rate)
//! grid, bilinearly interpolated and clamped to the dataset edges.

use picket_core::error::RadarError;

/// Frequency grid rows (GHz), fixed 2 GHz step.
const FREQUENCIES_GHZ: [f64; 8] = [2.0, 4.0, 6.0, 8.0, 10.0, 12.0, 14.0, 16.0];

/// Rain-rate grid columns (mm/h), fixed non-uniform scale.
const RAIN_RATES_MM_HR: [f64; 10] = [
    0.25, 1.25, 2.5, 5.0, 12.5, 25.0, 50.0, 100.0, 150.0, 200.0,
];

/// One-way specific attenuation (dB/km), row per frequency, column per
/// rain rate. Values follow the k·R^α power-law fit for horizontal
/// polarization at 20 °C.
const SPECIFIC_ATTENUATION_DB_KM: [[f64; 10]; 8] = [
    // 2 GHz
    [
        1.9313e-5, 1.0746e-4, 2.2503e-4, 4.7126e-4, 1.2521e-3, 2.6221e-3, 5.4912e-3, 1.1500e-2,
        1.7720e-2, 2.4083e-2,
    ],
    // 4 GHz
    [
        1.1640e-5, 1.5309e-4, 4.6436e-4, 1.4085e-3, 6.1071e-3, 1.8525e-2, 5.6191e-2, 1.7045e-1,
        3.2621e-1, 5.1702e-1,
    ],
    // 6 GHz
    [
        7.7854e-5, 1.0061e-3, 3.0289e-3, 9.1184e-3, 3.9142e-2, 1.1784e-1, 3.5475e-1, 1.0680,
        2.0349, 3.2151,
    ],
    // 8 GHz
    [
        5.9869e-4, 5.6121e-3, 1.4713e-2, 3.8573e-2, 1.3792e-1, 3.6158e-1, 9.4795e-1, 2.4852,
        4.3674, 6.5156,
    ],
    // 10 GHz
    [
        2.1303e-3, 1.6111e-2, 3.8507e-2, 9.2038e-2, 2.9122e-1, 6.9605e-1, 1.6637, 3.9764, 6.6200,
        9.5042,
    ],
    // 12 GHz
    [
        4.6316e-3, 3.1065e-2, 7.0507e-2, 1.6003e-1, 4.7290e-1, 1.0733, 2.4361, 5.5293, 8.9310,
        12.550,
    ],
    // 14 GHz
    [
        7.7007e-3, 4.8203e-2, 1.0620e-1, 2.3398e-1, 6.6478e-1, 1.4646, 3.2269, 7.1095, 11.285,
        15.664,
    ],
    // 16 GHz
    [
        1.1359e-2, 6.7645e-2, 1.4587e-1, 3.1454e-1, 8.6863e-1, 1.8731, 4.0390, 8.7096, 13.653,
        18.781,
    ],
];

/// Bilinear lookup of one-way specific rain attenuation.
///
/// Constructed through [`AttenuationTable::load`], which validates the
/// embedded dataset once; a constructed table can always be queried.
#[derive(Debug, Clone)]
pub struct AttenuationTable {
    frequencies_ghz: &'static [f64],
    rain_rates_mm_hr: &'static [f64],
    values_db_km: &'static [[f64; 10]; 8],
}

impl AttenuationTable {
    /// Load and validate the embedded dataset.
    pub fn load() -> Result<Self, RadarError> {
        Self::from_dataset(
            &FREQUENCIES_GHZ,
            &RAIN_RATES_MM_HR,
            &SPECIFIC_ATTENUATION_DB_KM,
        )
    }

    /// Validate a dataset and bind it into a queryable table.
    fn from_dataset(
        frequencies_ghz: &'static [f64],
        rain_rates_mm_hr: &'static [f64],
        values_db_km: &'static [[f64; 10]; 8],
    ) -> Result<Self, RadarError> {
        if frequencies_ghz.len() < 2 || rain_rates_mm_hr.len() < 2 {
            return Err(RadarError::TableUninitialized);
        }
        if !frequencies_ghz.windows(2).all(|w| w[0] < w[1]) {
            return Err(RadarError::MalformedDataset(
                "frequency axis must be strictly increasing",
            ));
        }
        if !rain_rates_mm_hr.windows(2).all(|w| w[0] < w[1]) {
            return Err(RadarError::MalformedDataset(
                "rain-rate axis must be strictly increasing",
            ));
        }
        if values_db_km
            .iter()
            .flatten()
            .any(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(RadarError::MalformedDataset(
                "attenuation values must be finite and non-negative",
            ));
        }
        Ok(Self {
            frequencies_ghz,
            rain_rates_mm_hr,
            values_db_km,
        })
    }

    /// One-way specific attenuation (dB/km) at the given frequency and
    /// rain rate, clamped to the dataset ranges.
    ///
    /// Interpolates bilinearly across the two nearest grid rows and
    /// columns; a coordinate exactly on a grid line degenerates to direct
    /// lookup along that axis.
    pub fn lookup(&self, frequency_ghz: f64, rain_rate_mm_hr: f64) -> f64 {
        let (fi, ft) = Self::bracket(self.frequencies_ghz, frequency_ghz);
        let (ri, rt) = Self::bracket(self.rain_rates_mm_hr, rain_rate_mm_hr);

        let v00 = self.values_db_km[fi][ri];
        let v01 = self.values_db_km[fi][ri + 1];
        let v10 = self.values_db_km[fi + 1][ri];
        let v11 = self.values_db_km[fi + 1][ri + 1];

        let low = v00 + (v01 - v00) * rt;
        let high = v10 + (v11 - v10) * rt;
        low + (high - low) * ft
    }

    /// Find the cell `[i, i+1]` bracketing `x` on `axis`, returning the
    /// lower index and the interpolation fraction in [0, 1]. Values outside
    /// the axis clamp to the nearest edge.
    fn bracket(axis: &[f64], x: f64) -> (usize, f64) {
        let last = axis.len() - 1;
        if x <= axis[0] {
            return (0, 0.0);
        }
        if x >= axis[last] {
            return (last - 1, 1.0);
        }
        // axis is strictly increasing, so partition_point finds the upper node
        let upper = axis.partition_point(|v| *v < x).max(1);
        let i = upper - 1;
        let t = (x - axis[i]) / (axis[upper] - axis[i]);
        (i, t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_validates() {
        assert!(AttenuationTable::load().is_ok());
    }

    #[test]
    fn test_lookup_at_grid_node_is_exact() {
        let table = AttenuationTable::load().unwrap();
        for (fi, f) in FREQUENCIES_GHZ.iter().enumerate() {
            for (ri, r) in RAIN_RATES_MM_HR.iter().enumerate() {
                let v = table.lookup(*f, *r);
                let expected = SPECIFIC_ATTENUATION_DB_KM[fi][ri];
                assert!(
                    (v - expected).abs() < 1e-12,
                    "node ({f} GHz, {r} mm/h): got {v}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn test_lookup_at_midpoint_is_mean() {
        let table = AttenuationTable::load().unwrap();
        // Midpoint along the frequency axis at a fixed rain-rate node.
        let v = table.lookup(9.0, 25.0);
        let expected = (SPECIFIC_ATTENUATION_DB_KM[3][5] + SPECIFIC_ATTENUATION_DB_KM[4][5]) / 2.0;
        assert!((v - expected).abs() < 1e-12, "got {v}, expected {expected}");

        // Midpoint along the rain-rate axis at a fixed frequency node.
        let v = table.lookup(10.0, 37.5);
        let expected = (SPECIFIC_ATTENUATION_DB_KM[4][5] + SPECIFIC_ATTENUATION_DB_KM[4][6]) / 2.0;
        assert!((v - expected).abs() < 1e-12, "got {v}, expected {expected}");
    }

    #[test]
    fn test_lookup_clamps_out_of_range() {
        let table = AttenuationTable::load().unwrap();
        assert_eq!(table.lookup(0.5, 25.0), table.lookup(2.0, 25.0));
        assert_eq!(table.lookup(40.0, 25.0), table.lookup(16.0, 25.0));
        assert_eq!(table.lookup(10.0, 0.0), table.lookup(10.0, 0.25));
        assert_eq!(table.lookup(10.0, 500.0), table.lookup(10.0, 200.0));
    }

    #[test]
    fn test_lookup_monotonic_in_both_axes() {
        let table = AttenuationTable::load().unwrap();
        let mut prev = 0.0;
        for r in [1.0, 5.0, 20.0, 60.0, 120.0] {
            let v = table.lookup(10.0, r);
            assert!(v > prev, "attenuation should grow with rain rate");
            prev = v;
        }
        let mut prev = 0.0;
        for f in [4.0, 7.0, 11.0, 15.0] {
            let v = table.lookup(f, 25.0);
            assert!(v > prev, "attenuation should grow with frequency");
            prev = v;
        }
    }
}
