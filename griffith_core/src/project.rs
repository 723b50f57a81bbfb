//! # Fracture Study Projects
//!
//! A `Project` bundles the calculations done for one assessment (a component,
//! a repair, a test program) and is stored as JSON in a `.grf` file.
//!
//! ```text
//! Project
//! ├── meta: ProjectMetadata (schema version, analyst, job, component, timestamps)
//! ├── settings: GlobalSettings (step count, display units)
//! └── items: HashMap<Uuid, CalculationItem>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use griffith_core::calculations::r_curve::RCurveInput;
//! use griffith_core::calculations::CalculationItem;
//! use griffith_core::project::Project;
//!
//! let mut project = Project::new("Jane Analyst", "26-042", "Wing spar lug");
//! let input: RCurveInput = serde_json::from_str(r#"{ "label": "R-1", "initial_crack": 0.05 }"#).unwrap();
//! let id = project.add_item(CalculationItem::RCurve(input));
//!
//! let outputs = project.run_all();
//! assert!(outputs[&id].is_ok());
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculations::fatigue::{IntegrationConfig, DEFAULT_STEP_COUNT};
use crate::calculations::{CalculationItem, CalculationOutput};
use crate::errors::GriffithResult;
use crate::units::{LengthUnit, StressUnit};

/// Schema version written into new project files
pub const SCHEMA_VERSION: &str = "0.1.0";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub meta: ProjectMetadata,

    pub settings: GlobalSettings,

    /// Calculations keyed by a stable id, so renaming or reordering never
    /// breaks references to an item
    pub items: HashMap<Uuid, CalculationItem>,
}

impl Project {
    /// Start an empty project stamped with the current time.
    pub fn new(analyst: impl Into<String>, job_id: impl Into<String>, component: impl Into<String>) -> Self {
        let now = Utc::now();
        Project {
            meta: ProjectMetadata {
                version: SCHEMA_VERSION.to_string(),
                analyst: analyst.into(),
                job_id: job_id.into(),
                component: component.into(),
                created: now,
                modified: now,
            },
            settings: GlobalSettings::default(),
            items: HashMap::new(),
        }
    }

    /// Store a calculation and return its new id.
    pub fn add_item(&mut self, item: CalculationItem) -> Uuid {
        let id = Uuid::new_v4();
        self.items.insert(id, item);
        self.touch();
        id
    }

    pub fn remove_item(&mut self, id: &Uuid) -> Option<CalculationItem> {
        let removed = self.items.remove(id);
        if removed.is_some() {
            self.touch();
        }
        removed
    }

    pub fn get_item(&self, id: &Uuid) -> Option<&CalculationItem> {
        self.items.get(id)
    }

    /// Mutable access; counts as a modification when the id exists.
    pub fn get_item_mut(&mut self, id: &Uuid) -> Option<&mut CalculationItem> {
        let item = self.items.get_mut(id)?;
        self.meta.modified = Utc::now();
        Some(item)
    }

    /// Ids of every item with the given `calc_type()` ("FatigueGrowth", ...)
    pub fn ids_of_type(&self, calc_type: &str) -> Vec<Uuid> {
        self.items
            .iter()
            .filter(|(_, item)| item.calc_type() == calc_type)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Re-run every stored calculation. Each item succeeds or fails on its own.
    pub fn run_all(&self) -> HashMap<Uuid, GriffithResult<CalculationOutput>> {
        self.items.iter().map(|(id, item)| (*id, item.run())).collect()
    }

    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

impl Default for Project {
    fn default() -> Self {
        Project::new("", "", "")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Schema version the file was written with
    pub version: String,

    /// Responsible analyst
    pub analyst: String,

    pub job_id: String,

    /// Component or specimen under assessment
    pub component: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Defaults applied to new calculations and to result display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GlobalSettings {
    pub default_step_count: usize,

    /// Crack length unit on growth curves
    pub length_display: LengthUnit,

    /// Unit stresses are entered in
    pub stress_unit: StressUnit,
}

impl GlobalSettings {
    pub fn integration_config(&self) -> IntegrationConfig {
        IntegrationConfig::new(self.default_step_count)
    }
}

impl Default for GlobalSettings {
    fn default() -> Self {
        GlobalSettings {
            default_step_count: DEFAULT_STEP_COUNT,
            length_display: LengthUnit::Millimeters,
            stress_unit: StressUnit::MPa,
        }
    }
}
