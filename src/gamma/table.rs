use super::{gamma, GammaValue};
use crate::error::{FvmError, FvmResult};
use crate::global_variables::*;
use colored::*;
use num_complex::Complex64;
use rayon::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub struct GammaTable {
    pub entries: Vec<(Float, GammaValue)>,
}

impl GammaTable {
    pub fn build(start: Float, end: Float, step: Float) -> FvmResult<Self> {
        if !(start.is_finite() && end.is_finite() && step.is_finite()) {
            return Err(FvmError::Config(format!(
                "non-finite gamma table range: {start}..{end} by {step}"
            )));
        }
        if step <= 0.0 || end < start {
            return Err(FvmError::Config(format!(
                "invalid gamma table range: {start}..{end} by {step}"
            )));
        }
        let intervals = ((end - start) / step + 1e-9).floor();
        if !intervals.is_finite() || intervals >= MAX_TABLE_POINTS as Float {
            return Err(FvmError::Config(format!(
                "gamma table range {start}..{end} by {step} exceeds {MAX_TABLE_POINTS} points"
            )));
        }
        let number_of_points = intervals as usize + 1;
        let entries = (0..number_of_points)
            .into_par_iter()
            .map(|k| {
                let x = start + (k as Float) * step;
                let value = gamma(Complex64::new(x, 0.0));
                if !value.is_finite() {
                    log::warn!("gamma is not finite at x = {x}: the table row is {value}");
                }
                (x, value)
            })
            .collect::<Vec<_>>();
        log::debug!("built a gamma table with {number_of_points} points");
        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write<P: AsRef<Path>>(&self, path: P) -> FvmResult<()> {
        let mut file = BufWriter::new(File::create(path)?);
        writeln!(file, "{:>16} {:>16} {:>16}", "x", "gamma_re", "gamma_im")?;
        for (x, value) in &self.entries {
            writeln!(
                file,
                "{:>16.8e} {:>16.8e} {:>16.8e}",
                x,
                value.re(),
                value.im()
            )?;
        }
        file.flush()?;
        Ok(())
    }

    pub fn write_to_post_processing(&self) -> FvmResult<PathBuf> {
        let path = Path::new(crate::io::POST_PROCESSING_PATH).join(crate::io::GAMMA_TABLE_FILE);
        println!(
            "Writing the gamma table: {}.\n",
            path.to_string_lossy().yellow().bold()
        );
        self.write(&path)?;
        log::info!("wrote {} gamma values to {}", self.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn build_includes_both_ends() {
        let table = GammaTable::build(1.0, 5.0, 0.5).unwrap();
        assert_eq!(table.len(), 9);
        assert_eq!(table.entries[0].0, 1.0);
        assert_eq!(table.entries[8].0, 5.0);
        assert!((table.entries[8].1.re() - 24.0).abs() < 1e-9);
    }

    #[test]
    fn build_keeps_ascending_order() {
        let table = GammaTable::build(-2.75, 3.0, 0.25).unwrap();
        for pair in table.entries.windows(2) {
            assert!(pair[1].0 > pair[0].0);
        }
    }

    #[test]
    fn build_rejects_bad_ranges() {
        assert!(GammaTable::build(1.0, 0.0, 0.1).is_err());
        assert!(GammaTable::build(0.0, 1.0, 0.0).is_err());
        assert!(GammaTable::build(0.0, Float::NAN, 0.1).is_err());
    }

    #[test]
    fn build_rejects_ranges_with_too_many_points() {
        for step in [1e-300, 1e-12, Float::MIN_POSITIVE] {
            let err = GammaTable::build(0.0, 1.0, step).err().unwrap();
            assert!(matches!(err, FvmError::Config(_)));
        }
        assert!(GammaTable::build(-1e300, 1e300, 1.0).is_err());
        assert!(GammaTable::build(0.0, MAX_TABLE_POINTS as Float, 1.0).is_err());
        assert_eq!(GammaTable::build(0.0, 1000.0, 0.125).unwrap().len(), 8001);
    }

    #[test]
    fn poles_stay_in_the_table_as_non_finite_rows() {
        let table = GammaTable::build(-2.0, 1.0, 1.0).unwrap();
        assert_eq!(table.len(), 4);
        assert!(!table.entries[0].1.is_finite());
        assert!(!table.entries[2].1.is_finite());
        assert!(table.entries[3].1.is_finite());
    }

    #[test]
    fn write_emits_header_and_one_line_per_entry() {
        let table = GammaTable::build(1.0, 3.0, 1.0).unwrap();
        let path = std::env::temp_dir().join(format!("gamma_table_{}.dat", std::process::id()));
        table.write(&path).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("gamma_re"));
        let last: Vec<Float> = lines[3]
            .split_whitespace()
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(last.len(), 3);
        assert!((last[1] - 2.0).abs() < 1e-6);
        assert_eq!(last[2], 0.0);
    }
}
