use super::Grid;
use crate::error::FvmResult;
use crate::global_variables::*;
use crate::io::parse_parameter;
use colored::*;
use std::collections::HashMap;
use std::path::Path;

#[derive(Clone, Debug, PartialEq)]
pub struct MeshConditions {
    pub case_name: String,
    pub nx: usize,
    pub ny: usize,
    pub delta_x: Float,
    pub delta_t: Float,
}

impl MeshConditions {
    pub fn new() -> Self {
        Self {
            case_name: String::from(CASE_NAME),
            nx: NX,
            ny: NY,
            delta_x: DELTA_X,
            delta_t: DELTA_T,
        }
    }

    pub fn from_conditions(conditions: &HashMap<String, String>) -> FvmResult<Self> {
        let defaults = Self::new();
        Ok(Self {
            case_name: parse_parameter(conditions, "case_name", defaults.case_name)?,
            nx: parse_parameter(conditions, "nx", defaults.nx)?,
            ny: parse_parameter(conditions, "ny", defaults.ny)?,
            delta_x: parse_parameter(conditions, "delta_x", defaults.delta_x)?,
            delta_t: parse_parameter(conditions, "delta_t", defaults.delta_t)?,
        })
    }

    pub fn build_case_conditions() -> FvmResult<Self> {
        let case_conditions_path =
            Path::new(crate::io::PRE_PROCESSING_PATH).join(crate::io::CASE_CONDITIONS_FILE);
        if case_conditions_path.exists() {
            println!(
                "Reading the case conditions file: {}.\n",
                case_conditions_path.to_string_lossy().yellow().bold()
            );
            let conditions = crate::io::read_case_conditions()?;
            let mesh_conditions = Self::from_conditions(&conditions)?;
            log::debug!("case conditions: {mesh_conditions:?}");
            Ok(mesh_conditions)
        } else {
            log::debug!("no case conditions file, using the default {NX}x{NY} grid");
            Ok(Self::new())
        }
    }

    pub fn case_name_prefix(&self) -> String {
        case_name_prefix(&self.case_name)
    }
}

impl Default for MeshConditions {
    fn default() -> Self {
        Self::new()
    }
}

pub fn case_name_prefix(case_name: &str) -> String {
    case_name.replace(" ", "_").to_lowercase()
}

impl Grid {
    pub fn case_parameters(&self, case_name: &str) -> Vec<(&'static str, String)> {
        vec![
            ("case_name", case_name.to_string()),
            ("nx", self.nx.to_string()),
            ("ny", self.ny.to_string()),
            ("delta_x", self.delta_x.to_string()),
            ("delta_t", self.delta_t.to_string()),
            ("lx", self.lx().to_string()),
            ("ly", self.ly().to_string()),
        ]
    }

    pub fn write_case_parameters(&self, case_name: &str) -> FvmResult<()> {
        let path = Path::new(crate::io::POST_PROCESSING_PATH).join(crate::io::CASE_PARAMETERS_FILE);
        println!(
            "Writing the case parameters file: {}.\n",
            path.to_string_lossy().yellow().bold()
        );
        crate::io::write_parameters(&path, &self.case_parameters(case_name))
    }
}
