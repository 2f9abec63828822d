pub mod table;

use crate::error::{FvmError, FvmResult};
use crate::global_variables::*;
use num_complex::Complex64;
use std::f64::consts::PI;
use std::fmt;

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum GammaValue {
    Real(Float),
    Complex(Complex64),
}

impl GammaValue {
    pub fn re(&self) -> Float {
        match self {
            GammaValue::Real(re) => *re,
            GammaValue::Complex(z) => z.re,
        }
    }

    pub fn im(&self) -> Float {
        match self {
            GammaValue::Real(_) => 0.0,
            GammaValue::Complex(z) => z.im,
        }
    }

    pub fn is_real(&self) -> bool {
        matches!(self, GammaValue::Real(_))
    }

    pub fn is_finite(&self) -> bool {
        match self {
            GammaValue::Real(re) => re.is_finite(),
            GammaValue::Complex(z) => z.is_finite(),
        }
    }

    pub fn to_complex(&self) -> Complex64 {
        match self {
            GammaValue::Real(re) => Complex64::new(*re, 0.0),
            GammaValue::Complex(z) => *z,
        }
    }
}

impl From<GammaValue> for Complex64 {
    fn from(value: GammaValue) -> Self {
        value.to_complex()
    }
}

impl fmt::Display for GammaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GammaValue::Real(re) => write!(f, "{re}"),
            GammaValue::Complex(z) => write!(f, "{z}"),
        }
    }
}

pub fn drop_imag(z: Complex64) -> GammaValue {
    if z.im.abs() <= IMAGINARY_EPSILON {
        GammaValue::Real(z.re)
    } else {
        GammaValue::Complex(z)
    }
}

// Valid for Re(z) >= 0.5.
fn lanczos_series(z: Complex64) -> Complex64 {
    let z = z - 1.0;
    let mut sum = Complex64::new(LANCZOS_LEADING, 0.0);
    for (k, &p) in LANCZOS_COEFFICIENTS.iter().enumerate() {
        sum += (z + ((k + 1) as Float)).inv() * p;
        log::trace!("lanczos partial sum {k}: {sum}");
    }
    let t = z + LANCZOS_G + 0.5;
    log::trace!("lanczos t: {t}");
    (2.0 * PI).sqrt() * t.powc(z + 0.5) * (-t).exp() * sum
}

// Poles are not guarded: non-positive integers give non-finite values.
pub fn evaluate(z: Complex64) -> Complex64 {
    if z.re < 0.5 {
        let reflected = drop_imag(lanczos_series(Complex64::new(1.0, 0.0) - z)).to_complex();
        if !reflected.is_finite() {
            // Γ(1 - z) overflows, so Γ(z) underflows.
            return Complex64::new(0.0, 0.0);
        }
        Complex64::new(PI, 0.0) / ((z * PI).sin() * reflected)
    } else {
        lanczos_series(z)
    }
}

pub fn gamma(z: Complex64) -> GammaValue {
    drop_imag(evaluate(z))
}

pub fn try_gamma(z: Complex64) -> FvmResult<GammaValue> {
    if z.im == 0.0 && z.re <= 0.0 && z.re.fract() == 0.0 {
        return Err(FvmError::Pole { re: z.re });
    }
    let value = evaluate(z);
    if !value.is_finite() {
        return Err(FvmError::NonFinite { z });
    }
    Ok(drop_imag(value))
}

pub fn reflection_defect(z: Complex64) -> Float {
    let product = evaluate(z) * evaluate(Complex64::new(1.0, 0.0) - z) * (z * PI).sin();
    (product - PI).norm()
}

pub struct CheckResult {
    pub label: String,
    pub error: Float,
}

impl CheckResult {
    pub fn passed(&self) -> bool {
        self.error <= REFLECTION_TOLERANCE
    }
}

pub fn self_checks() -> Vec<CheckResult> {
    let mut checks = Vec::new();
    let mut factorial = 1.0;
    for n in 1..=10u32 {
        if n > 1 {
            factorial *= (n - 1) as Float;
        }
        let value = gamma(Complex64::new(n as Float, 0.0));
        checks.push(CheckResult {
            label: format!("gamma({n}) = {}!", n - 1),
            error: (value.to_complex() - factorial).norm() / factorial,
        });
    }
    let value = gamma(Complex64::new(0.5, 0.0));
    checks.push(CheckResult {
        label: "gamma(0.5) = sqrt(pi)".to_string(),
        error: (value.to_complex() - PI.sqrt()).norm(),
    });
    for z in [
        Complex64::new(0.25, 0.0),
        Complex64::new(-1.7, 0.0),
        Complex64::new(0.3, 1.2),
    ] {
        checks.push(CheckResult {
            label: format!("reflection at {z}"),
            error: reflection_defect(z),
        });
    }
    checks
}

pub trait GammaFn {
    type Output;

    fn gamma(&self) -> Self::Output;
}

impl GammaFn for f32 {
    type Output = f32;

    fn gamma(&self) -> f32 {
        gamma(Complex64::new(*self as Float, 0.0)).re() as f32
    }
}

impl GammaFn for f64 {
    type Output = f64;

    fn gamma(&self) -> f64 {
        gamma(Complex64::new(*self, 0.0)).re()
    }
}

impl GammaFn for Complex64 {
    type Output = GammaValue;

    fn gamma(&self) -> GammaValue {
        gamma(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_real_gamma(arg: Float, expected: Float) {
        let actual = gamma(Complex64::new(arg, 0.0));
        assert!(actual.is_real(), "Γ({arg}) = {actual} is not real");
        let relative = ((actual.re() - expected) / expected).abs();
        assert!(relative < 1e-10, "Γ({arg}) = {actual}, expected {expected}");
    }

    #[test]
    fn gamma_of_one_half_is_sqrt_pi() {
        assert_real_gamma(0.5, PI.sqrt());
    }

    #[test]
    fn gamma_of_positive_integers_is_factorial() {
        assert_real_gamma(1.0, 1.0);
        assert_real_gamma(2.0, 1.0);
        assert_real_gamma(3.0, 2.0);
        assert_real_gamma(5.0, 24.0);
        assert_real_gamma(8.0, 5040.0);
    }

    #[test]
    fn gamma_reflects_negative_arguments() {
        assert_real_gamma(-0.5, -2.0 * PI.sqrt());
        assert_real_gamma(-1.5, 4.0 * PI.sqrt() / 3.0);
        assert_real_gamma(0.3, 2.991568987687591);
    }

    #[test]
    fn gamma_of_complex_argument() {
        let value = gamma(Complex64::new(1.0, 1.0));
        assert!(!value.is_real());
        let expected = Complex64::new(0.49801566811835604, -0.15494982830181069);
        assert!((value.to_complex() - expected).norm() < 1e-10);
    }

    #[test]
    fn gamma_is_symmetric_under_conjugation() {
        let z = Complex64::new(2.5, 0.75);
        let direct = gamma(z).to_complex();
        let conjugate = gamma(z.conj()).to_complex();
        assert!((direct.conj() - conjugate).norm() < 1e-12);
    }

    #[test]
    fn drop_imag_threshold() {
        assert_eq!(drop_imag(Complex64::new(3.0, 1e-8)), GammaValue::Real(3.0));
        assert_eq!(drop_imag(Complex64::new(3.0, -1e-7)), GammaValue::Real(3.0));
        assert!(!drop_imag(Complex64::new(3.0, 2e-7)).is_real());
    }

    #[test]
    fn reflection_defect_is_small_off_the_integers() {
        for x in [0.1, 0.25, 0.7, 1.3, -2.4] {
            assert!(reflection_defect(Complex64::new(x, 0.0)) < 1e-9);
        }
        assert!(reflection_defect(Complex64::new(0.2, 0.4)) < 1e-9);
    }

    #[test]
    fn try_gamma_rejects_poles() {
        for re in [0.0, -1.0, -3.0] {
            let err = try_gamma(Complex64::new(re, 0.0)).unwrap_err();
            assert!(matches!(err, FvmError::Pole { .. }));
        }
        assert!(try_gamma(Complex64::new(-1.0, 0.5)).is_ok());
    }

    #[test]
    fn try_gamma_rejects_overflow() {
        let err = try_gamma(Complex64::new(500.0, 0.0)).unwrap_err();
        assert!(matches!(err, FvmError::NonFinite { .. }));
    }

    #[test]
    fn large_negative_arguments_underflow_to_zero() {
        assert_eq!(try_gamma(Complex64::new(-180.5, 0.0)).unwrap(), GammaValue::Real(0.0));
        assert_eq!(gamma(Complex64::new(-250.25, 0.0)), GammaValue::Real(0.0));
        assert!(try_gamma(Complex64::new(-180.0, 0.0)).is_err());
        assert!(gamma(Complex64::new(-20.5, 0.0)).re() != 0.0);
    }

    #[test]
    fn unguarded_gamma_is_not_finite_at_a_pole() {
        assert!(!gamma(Complex64::new(0.0, 0.0)).is_finite());
    }

    #[test]
    fn self_checks_pass() {
        let checks = self_checks();
        assert_eq!(checks.len(), 14);
        for check in checks {
            assert!(check.passed(), "{} failed with error {}", check.label, check.error);
        }
    }

    #[test]
    fn gamma_fn_trait() {
        assert!((GammaFn::gamma(&5.0f64) - 24.0).abs() < 1e-9);
        assert!((GammaFn::gamma(&4.0f32) - 6.0).abs() < 1e-4);
        let z = Complex64::new(3.0, 0.0);
        assert_eq!(GammaFn::gamma(&z), gamma(z));
    }
}
