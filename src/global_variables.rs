pub const CASE_NAME: &'static str = "Unit Grid";

pub type Float = f64;

pub const LANCZOS_G: Float = 7.0;

pub const LANCZOS_LEADING: Float = 0.99999999999980993;

pub const LANCZOS_COEFFICIENTS: [Float; 8] = [
    676.5203681218851,
    -1259.1392167224028,
    771.32342877765313,
    -176.61502916214059,
    12.507343278686905,
    -0.13857109526572012,
    9.9843695780195716e-6,
    1.5056327351493116e-7,
];

pub const IMAGINARY_EPSILON: Float = 1e-7;

pub const REFLECTION_TOLERANCE: Float = 1e-9;

pub const NX: usize = 10;

pub const NY: usize = 10;

pub const DELTA_X: Float = 1.0;

pub const DELTA_T: Float = 0.01;

pub const MAX_TABLE_POINTS: usize = 10_000_000;

pub const MAX_CELLS: usize = 100_000_000;
