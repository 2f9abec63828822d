pub mod vtk;

use super::Grid;
use crate::error::FvmResult;
use crate::global_variables::*;
use crate::post::PostResult;
use colored::*;
use rayon::prelude::*;
use std::path::Path;

pub fn compute_number_of_cells(grid: &Grid) -> Vec<PostResult> {
    let number_of_cells_result = PostResult::new(
        "n_cells",
        "number of cells",
        grid.len() as Float,
    );
    let nx_result = PostResult::new("nx", "cells in x", grid.nx as Float);
    let ny_result = PostResult::new("ny", "cells in y", grid.ny as Float);
    vec![number_of_cells_result, nx_result, ny_result]
}

pub fn compute_total_area(grid: &Grid) -> Vec<PostResult> {
    let total_area = grid.cells.par_iter().map(|cell| cell.area()).sum::<Float>();
    vec![PostResult::new("total_area", "total area", total_area)]
}

pub fn compute_mean_pressure(grid: &Grid) -> Vec<PostResult> {
    let pressure_sum = grid.cells.par_iter().map(|cell| cell.pressure).sum::<Float>();
    let pressure_mean = pressure_sum / grid.len() as Float;
    vec![PostResult::new(
        "mean_pressure",
        "mean pressure",
        pressure_mean,
    )]
}

pub fn compute_mean_velocities(grid: &Grid) -> Vec<PostResult> {
    let number_of_cells = grid.len() as Float;
    let ux_sum = grid.cells.par_iter().map(|cell| cell.velocity_x).sum::<Float>();
    let uy_sum = grid.cells.par_iter().map(|cell| cell.velocity_y).sum::<Float>();
    let u_sum = grid
        .cells
        .par_iter()
        .map(|cell| (cell.velocity_x * cell.velocity_x + cell.velocity_y * cell.velocity_y).sqrt())
        .sum::<Float>();
    vec![
        PostResult::new(
            "mean_velocity",
            "mean velocity (magnitude)",
            u_sum / number_of_cells,
        ),
        PostResult::new(
            "mean_velocity_x",
            "mean velocity (x)",
            ux_sum / number_of_cells,
        ),
        PostResult::new(
            "mean_velocity_y",
            "mean velocity (y)",
            uy_sum / number_of_cells,
        ),
    ]
}

pub fn write_post_processing<F>(grid: &Grid, function: F, file_name: &str) -> FvmResult<()>
where
    F: Fn(&Grid) -> Vec<PostResult>,
{
    let post_results = function(grid);
    let path = Path::new(crate::io::POST_PROCESSING_PATH).join(file_name);
    println!(
        "Writing the post-processing file: {}.\n",
        path.to_string_lossy().yellow().bold()
    );
    for post_result in &post_results {
        println!("{}", post_result.to_string().green());
    }
    println!();
    crate::io::write_post_results(&path, &post_results)?;
    log::info!("wrote {} post-processing values to {}", post_results.len(), path.display());
    Ok(())
}
