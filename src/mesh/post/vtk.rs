use crate::error::FvmResult;
use crate::mesh::io::case_name_prefix;
use crate::mesh::{Grid, Vec2};
use colored::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

// (nx + 1) x (ny + 1) corner points, x fastest.
pub fn write_grid_vtk<W: Write>(grid: &Grid, writer: &mut W) -> FvmResult<()> {
    let number_of_points = (grid.nx + 1) * (grid.ny + 1);
    writeln!(writer, "# vtk DataFile Version 3.0")?;
    writeln!(writer, "FVM grid data")?;
    writeln!(writer, "ASCII")?;
    writeln!(writer, "DATASET STRUCTURED_GRID")?;
    writeln!(writer, "DIMENSIONS {} {} 1", grid.nx + 1, grid.ny + 1)?;
    writeln!(writer, "POINTS {} float", number_of_points)?;
    for j in 0..=grid.ny {
        for i in 0..=grid.nx {
            let point = Vec2::from_index(i, j, grid.delta_x);
            writeln!(writer, "{:>.6e} {:>.6e} 0.0", point.x, point.y)?;
        }
    }
    writeln!(writer, "CELL_DATA {}", grid.len())?;
    writeln!(writer, "SCALARS pressure float 1")?;
    writeln!(writer, "LOOKUP_TABLE default")?;
    for cell in &grid.cells {
        writeln!(writer, "{:>.6e}", cell.pressure)?;
    }
    writeln!(writer, "VECTORS velocity float")?;
    for cell in &grid.cells {
        writeln!(
            writer,
            "{:>.6e} {:>.6e} 0.0",
            cell.velocity_x, cell.velocity_y
        )?;
    }
    Ok(())
}

pub fn run_vtk_post_processing(grid: &Grid, case_name: &str) -> FvmResult<PathBuf> {
    let path_str = format!("{}_grid.vtk", case_name_prefix(case_name));
    let path = Path::new(crate::io::VTK_PATH).join(&path_str);
    println!("Writing {}.\n", path_str.yellow().bold());
    let mut file = BufWriter::new(File::create(&path)?);
    write_grid_vtk(grid, &mut file)?;
    file.flush()?;
    log::info!("wrote the grid to {}", path.display());
    Ok(path)
}
