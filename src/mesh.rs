pub mod io;
pub mod post;

pub use io::MeshConditions;

use crate::error::{FvmError, FvmResult};
use crate::global_variables::*;
use rayon::prelude::*;
use std::fmt;
use std::ops::{Add, Mul, Sub};

pub const D: usize = 2;

pub const NUMBER_OF_FACES: usize = 4;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vec2 {
    pub x: Float,
    pub y: Float,
}

impl Vec2 {
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y }
    }

    pub fn from_index(i: usize, j: usize, delta_x: Float) -> Self {
        Self::new((i as Float) * delta_x, (j as Float) * delta_x)
    }

    pub fn norm(&self) -> Float {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x + other.x, self.y + other.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, other: Vec2) -> Vec2 {
        Vec2::new(self.x - other.x, self.y - other.y)
    }
}

impl Mul<Float> for Vec2 {
    type Output = Vec2;

    fn mul(self, scalar: Float) -> Vec2 {
        Vec2::new(self.x * scalar, self.y * scalar)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    pub a: Vec2,
    pub b: Vec2,
}

impl Face {
    pub const fn new(a: Vec2, b: Vec2) -> Self {
        Self { a, b }
    }

    pub fn center(&self) -> Vec2 {
        (self.a + self.b) * 0.5
    }

    pub fn length(&self) -> Float {
        (self.b - self.a).norm()
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.a, self.b)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FaceSide {
    South = 0,
    West = 1,
    East = 2,
    North = 3,
}

impl FaceSide {
    pub const ALL: [FaceSide; NUMBER_OF_FACES] = [
        FaceSide::South,
        FaceSide::West,
        FaceSide::East,
        FaceSide::North,
    ];

    pub fn offset(&self) -> [i32; D] {
        match self {
            FaceSide::South => [0, -1],
            FaceSide::West => [-1, 0],
            FaceSide::East => [1, 0],
            FaceSide::North => [0, 1],
        }
    }

    pub fn opposite(&self) -> FaceSide {
        match self {
            FaceSide::South => FaceSide::North,
            FaceSide::West => FaceSide::East,
            FaceSide::East => FaceSide::West,
            FaceSide::North => FaceSide::South,
        }
    }
}

impl fmt::Display for FaceSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FaceSide::South => "south",
            FaceSide::West => "west",
            FaceSide::East => "east",
            FaceSide::North => "north",
        };
        write!(f, "{name}")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub index: [usize; D],

    pub faces: [Face; NUMBER_OF_FACES],

    pub pressure: Float,

    pub velocity_x: Float,

    pub velocity_y: Float,
}

impl Cell {
    pub fn new(index: [usize; D], delta_x: Float) -> Self {
        let [i, j] = index;
        let corner = |di: usize, dj: usize| Vec2::from_index(i + di, j + dj, delta_x);
        let faces = [
            Face::new(corner(0, 0), corner(1, 0)),
            Face::new(corner(0, 0), corner(0, 1)),
            Face::new(corner(1, 0), corner(1, 1)),
            Face::new(corner(0, 1), corner(1, 1)),
        ];
        Self {
            index,
            faces,
            pressure: 0.0,
            velocity_x: 0.0,
            velocity_y: 0.0,
        }
    }

    pub fn face(&self, side: FaceSide) -> &Face {
        &self.faces[side as usize]
    }

    pub fn corners(&self) -> [Vec2; 4] {
        let south = self.face(FaceSide::South);
        let north = self.face(FaceSide::North);
        [south.a, south.b, north.a, north.b]
    }

    pub fn center(&self) -> Vec2 {
        let sum = self
            .faces
            .iter()
            .fold(Vec2::new(0.0, 0.0), |acc, face| acc + face.center());
        sum * (1.0 / NUMBER_OF_FACES as Float)
    }

    pub fn area(&self) -> Float {
        self.face(FaceSide::South).length() * self.face(FaceSide::West).length()
    }

    pub fn velocity(&self) -> [Float; D] {
        [self.velocity_x, self.velocity_y]
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [i, j] = self.index;
        write!(f, "Cell [{i}, {j}]:")?;
        for side in FaceSide::ALL {
            write!(f, " {side} {};", self.face(side))?;
        }
        write!(
            f,
            " p = {}, u = ({}, {})",
            self.pressure, self.velocity_x, self.velocity_y
        )
    }
}

// Cell (i, j) lives at i + nx * j.
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    pub nx: usize,
    pub ny: usize,
    pub delta_x: Float,
    pub delta_t: Float,
    pub cells: Vec<Cell>,
}

impl Grid {
    pub fn new() -> Self {
        Self::build(NX, NY, DELTA_X, DELTA_T)
    }

    pub fn with_dimensions(nx: usize, ny: usize, delta_x: Float, delta_t: Float) -> FvmResult<Self> {
        let number_of_cells = nx.checked_mul(ny).unwrap_or(usize::MAX);
        if nx == 0
            || ny == 0
            || number_of_cells > MAX_CELLS
            || !(delta_x > 0.0)
            || !delta_x.is_finite()
        {
            return Err(FvmError::InvalidDimensions { nx, ny, delta_x });
        }
        if !(delta_t > 0.0) || !delta_t.is_finite() {
            return Err(FvmError::Config(format!("invalid time step: {delta_t}")));
        }
        Ok(Self::build(nx, ny, delta_x, delta_t))
    }

    pub fn from_conditions(conditions: &MeshConditions) -> FvmResult<Self> {
        Self::with_dimensions(
            conditions.nx,
            conditions.ny,
            conditions.delta_x,
            conditions.delta_t,
        )
    }

    fn build(nx: usize, ny: usize, delta_x: Float, delta_t: Float) -> Self {
        let cells = (0..nx * ny)
            .into_par_iter()
            .map(|k| Cell::new([k % nx, k / nx], delta_x))
            .collect::<Vec<Cell>>();
        log::info!("built a {nx}x{ny} grid with {} cells", cells.len());
        Self {
            nx,
            ny,
            delta_x,
            delta_t,
            cells,
        }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn lx(&self) -> Float {
        (self.nx as Float) * self.delta_x
    }

    pub fn ly(&self) -> Float {
        (self.ny as Float) * self.delta_x
    }

    fn flat_index(&self, index: [usize; D]) -> FvmResult<usize> {
        let [i, j] = index;
        if i >= self.nx || j >= self.ny {
            return Err(FvmError::GridOutOfBounds {
                i,
                j,
                nx: self.nx,
                ny: self.ny,
            });
        }
        Ok(i + self.nx * j)
    }

    pub fn cell(&self, index: [usize; D]) -> FvmResult<&Cell> {
        let k = self.flat_index(index)?;
        Ok(&self.cells[k])
    }

    pub fn cell_mut(&mut self, index: [usize; D]) -> FvmResult<&mut Cell> {
        let k = self.flat_index(index)?;
        Ok(&mut self.cells[k])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.nx)
    }

    pub fn boundary_sides(&self, index: [usize; D]) -> FvmResult<Vec<FaceSide>> {
        self.flat_index(index)?;
        let [i, j] = index;
        let mut boundary_sides = Vec::new();
        if j == 0 {
            boundary_sides.push(FaceSide::South);
        }
        if i == 0 {
            boundary_sides.push(FaceSide::West);
        }
        if i == self.nx - 1 {
            boundary_sides.push(FaceSide::East);
        }
        if j == self.ny - 1 {
            boundary_sides.push(FaceSide::North);
        }
        Ok(boundary_sides)
    }

    pub fn neighbor(&self, index: [usize; D], side: FaceSide) -> FvmResult<Option<[usize; D]>> {
        self.flat_index(index)?;
        let [i, j] = index;
        let [di, dj] = side.offset();
        let new_i = (i as i64) + (di as i64);
        let new_j = (j as i64) + (dj as i64);
        if new_i < 0 || new_j < 0 || new_i >= self.nx as i64 || new_j >= self.ny as i64 {
            return Ok(None);
        }
        Ok(Some([new_i as usize, new_j as usize]))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Grid {}x{} (delta_x = {}, delta_t = {})",
            self.nx, self.ny, self.delta_x, self.delta_t
        )?;
        for (j, row) in self.rows().enumerate() {
            writeln!(f, "row {j}:")?;
            for cell in row {
                writeln!(f, "  {cell}")?;
            }
        }
        Ok(())
    }
}

pub fn run() -> FvmResult<()> {
    crate::io::create_case_directories()?;
    let conditions = MeshConditions::build_case_conditions()?;
    let grid = Grid::from_conditions(&conditions)?;
    grid.write_case_parameters(&conditions.case_name)?;
    post::write_post_processing(&grid, post::compute_number_of_cells, "number_of_cells.dat")?;
    post::write_post_processing(&grid, post::compute_total_area, "total_area.dat")?;
    post::write_post_processing(&grid, post::compute_mean_pressure, "mean_pressure.dat")?;
    post::write_post_processing(&grid, post::compute_mean_velocities, "mean_velocities.dat")?;
    post::vtk::run_vtk_post_processing(&grid, &conditions.case_name)?;
    Ok(())
}
