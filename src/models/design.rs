//! Application design: the input bundle of a compilation run
//!
//! Parsing a design from spreadsheets or files is an external collaborator;
//! this module only offers string-level serde conveniences.

use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::alteration::PageAlteration;
use super::page::Page;
use super::record::{CompositeRecord, Record};
use super::template::PageTemplate;

/// Named mappings for records, page templates, pre-authored pages, and
/// page alterations
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApplicationDesign {
    #[serde(default)]
    pub records: BTreeMap<String, Record>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub page_templates: BTreeMap<String, PageTemplate>,
    /// Pre-authored pages; these win over template expansion on name conflicts
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pages: BTreeMap<String, Page>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub page_alterations: BTreeMap<String, PageAlteration>,
}

impl ApplicationDesign {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a design from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).context("Failed to parse application design from YAML")
    }

    /// Parse a design from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse application design from JSON")
    }

    /// Serialize the design to a YAML string
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize application design to YAML")
    }

    /// The composite records of the design, keyed by name
    pub fn composites(&self) -> BTreeMap<String, CompositeRecord> {
        self.records
            .iter()
            .filter_map(|(name, record)| match record {
                Record::Composite(c) => Some((name.clone(), c.clone())),
                _ => None,
            })
            .collect()
    }
}
