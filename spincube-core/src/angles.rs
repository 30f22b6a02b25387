/// Precomputed sine table replacing per-frame trigonometry
use crate::error::ConfigError;

/// Angular resolution used by the stock configuration: quarter-degree steps,
/// giving a 1440-entry table.
pub const DEFAULT_STEP_DEGREES: f32 = 0.25;

/// Sine samples spanning one full turn at a fixed sub-degree step.
///
/// Cosine is never stored: `cos a == sin (a + 90 degrees)`, so `cos_at` reads
/// the same table a quarter turn ahead. `f32::sin` is called only while the
/// table is built; the per-frame rotation path is pure lookups.
pub struct AngleTable {
    samples: Vec<f32>,
    quarter_turn: usize,
}

impl AngleTable {
    /// Populate the table for angles `0, step, 2*step, ...` covering exactly
    /// one full turn. The step must divide 90 degrees into a whole number of
    /// entries so the cosine offset lands on a table slot.
    pub fn build(step_degrees: f32) -> Result<Self, ConfigError> {
        if !step_degrees.is_finite() || step_degrees <= 0.0 {
            return Err(ConfigError::UnevenAngleStep(step_degrees));
        }
        let per_quarter = 90.0 / step_degrees;
        if (per_quarter - per_quarter.round()).abs() > 1e-6 || per_quarter.round() < 1.0 {
            return Err(ConfigError::UnevenAngleStep(step_degrees));
        }
        let quarter_turn = per_quarter.round() as usize;
        let len = quarter_turn * 4;
        let mut samples = Vec::with_capacity(len);
        for i in 0..len {
            samples.push((i as f32 * step_degrees).to_radians().sin());
        }
        Ok(Self {
            samples,
            quarter_turn,
        })
    }

    /// Number of entries in one full turn.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Number of entries spanning 90 degrees.
    pub fn quarter_turn(&self) -> usize {
        self.quarter_turn
    }

    /// Sine at a table index, wrapped circularly.
    pub fn sin_at(&self, index: usize) -> f32 {
        self.samples[index % self.samples.len()]
    }

    /// Cosine at a table index: the sine lookup a quarter turn ahead.
    pub fn cos_at(&self, index: usize) -> f32 {
        self.sin_at(index + self.quarter_turn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_degree_table_has_1440_entries() {
        let table = AngleTable::build(DEFAULT_STEP_DEGREES).unwrap();
        assert_eq!(table.len(), 1440);
        assert_eq!(table.quarter_turn(), 360);
    }

    #[test]
    fn known_samples() {
        let table = AngleTable::build(DEFAULT_STEP_DEGREES).unwrap();
        assert_eq!(table.sin_at(0), 0.0);
        assert!((table.sin_at(360) - 1.0).abs() < 1e-6);
        assert!(table.sin_at(720).abs() < 1e-6);
        assert!((table.sin_at(1080) + 1.0).abs() < 1e-6);
    }

    #[test]
    fn cosine_is_sine_a_quarter_turn_ahead() {
        let table = AngleTable::build(DEFAULT_STEP_DEGREES).unwrap();
        for i in 0..table.len() {
            assert_eq!(
                table.cos_at(i),
                table.sin_at((i + table.quarter_turn()) % table.len())
            );
        }
    }

    #[test]
    fn lookups_wrap_circularly() {
        let table = AngleTable::build(DEFAULT_STEP_DEGREES).unwrap();
        assert_eq!(table.sin_at(1440), table.sin_at(0));
        assert_eq!(table.sin_at(1500), table.sin_at(60));
    }

    #[test]
    fn rejects_steps_that_do_not_divide_a_quarter_turn() {
        assert!(matches!(
            AngleTable::build(0.7),
            Err(ConfigError::UnevenAngleStep(_))
        ));
        assert!(matches!(
            AngleTable::build(0.0),
            Err(ConfigError::UnevenAngleStep(_))
        ));
        assert!(matches!(
            AngleTable::build(-1.0),
            Err(ConfigError::UnevenAngleStep(_))
        ));
    }

    #[test]
    fn coarser_steps_scale_the_table() {
        let table = AngleTable::build(1.0).unwrap();
        assert_eq!(table.len(), 360);
        assert_eq!(table.quarter_turn(), 90);
        assert!((table.cos_at(0) - 1.0).abs() < 1e-6);
    }
}
