use crate::error::{FvmError, FvmResult};
use crate::post::PostResult;
use colored::*;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::Path;
use std::str::FromStr;

pub const PRE_PROCESSING_PATH: &'static str = "./pre_processing";

pub const CASE_CONDITIONS_FILE: &'static str = "case_conditions.jou";

pub const CASE_PARAMETERS_FILE: &'static str = "case_parameters.jou";

pub const POST_PROCESSING_PATH: &'static str = "./post_processing";

pub const VTK_PATH: &'static str = "./post_processing/vtk_files";

pub const GAMMA_TABLE_FILE: &'static str = "gamma_table.dat";

pub fn create_case_directories() -> FvmResult<()> {
    let list_of_paths = [PRE_PROCESSING_PATH, POST_PROCESSING_PATH, VTK_PATH];
    for path_str in list_of_paths {
        let path = Path::new(path_str);
        if !path.exists() {
            println!("Creating the {} path.\n", path_str.yellow().bold());
            fs::create_dir_all(path)?;
        } else {
            log::debug!("the {path_str} path already exists");
        }
    }
    Ok(())
}

pub fn read_case_conditions() -> FvmResult<HashMap<String, String>> {
    let path = Path::new(PRE_PROCESSING_PATH).join(CASE_CONDITIONS_FILE);
    read_parameters_file(path)
}

pub fn read_parameters_file<P: AsRef<Path>>(path: P) -> FvmResult<HashMap<String, String>> {
    let mut file = File::open(path)?;
    let mut contents = String::new();
    file.read_to_string(&mut contents)?;
    Ok(extract_parameters(&contents))
}

pub fn extract_parameters(contents: &str) -> HashMap<String, String> {
    contents
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.starts_with("#"))
        .filter(|line| !line.is_empty())
        .map(|line| {
            let mut parts = line.splitn(2, "=");
            let key = parts.next().unwrap_or("").trim().to_string();
            let value = parts.next().unwrap_or("").trim().to_string();
            (key, value)
        })
        .collect::<HashMap<String, String>>()
}

pub fn parse_parameter<T>(parameters: &HashMap<String, String>, key: &str, default: T) -> FvmResult<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match parameters.get(key) {
        None => Ok(default),
        Some(value) => value.parse::<T>().map_err(|e| {
            FvmError::Config(format!("invalid value `{value}` for `{key}`: {e}"))
        }),
    }
}

pub fn write_parameters<P: AsRef<Path>>(path: P, parameters: &[(&str, String)]) -> FvmResult<()> {
    let mut file = File::create(path)?;
    for (key, value) in parameters {
        writeln!(file, "{key} = {value}")?;
    }
    Ok(())
}

pub fn write_post_results<P: AsRef<Path>>(path: P, post_results: &[PostResult]) -> FvmResult<()> {
    let mut file = File::create(path)?;
    for (n, post_result) in post_results.iter().enumerate() {
        if n > 0 {
            write!(file, " ")?;
        }
        write!(file, "{:>16}", post_result.name)?;
    }
    writeln!(file)?;
    for (n, post_result) in post_results.iter().enumerate() {
        if n > 0 {
            write!(file, " ")?;
        }
        write!(file, "{:>16.8e}", post_result.value)?;
    }
    writeln!(file)?;
    Ok(())
}
