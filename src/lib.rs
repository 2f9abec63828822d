pub mod error;
pub mod gamma;
pub mod global_variables;
pub mod io;
pub mod logger;
pub mod mesh;
pub mod post;

pub use error::{FvmError, FvmResult};
pub use gamma::{gamma, try_gamma, GammaFn, GammaValue};
pub use global_variables::*;
pub use mesh::{Cell, Face, FaceSide, Grid, MeshConditions, Vec2};
