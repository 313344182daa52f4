// Demo configuration - sample data for the driver binaries, loaded from TOML.
// Every section is optional and falls back to the built-in sample data.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::composite::{Manager, Member, OrgNode};
use crate::error::{PatternError, Result};
use crate::prototype::{Address, Employee};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EmployeeConfig {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_no: String,
}

impl Default for EmployeeConfig {
    fn default() -> Self {
        Self {
            first_name: "Md".to_string(),
            last_name: "Faisal".to_string(),
            email: "test@gmail.com".to_string(),
            mobile_no: "0170000000".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AddressConfig {
    pub road_no: String,
    pub house_no: String,
}

impl Default for AddressConfig {
    fn default() -> Self {
        Self {
            road_no: "12345".to_string(),
            house_no: "34".to_string(),
        }
    }
}

/// Values the prototype demo writes into its copies.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct EditsConfig {
    pub shallow_mobile_no: String,
    pub shallow_road_no: String,
    pub deep_road_no: String,
}

impl Default for EditsConfig {
    fn default() -> Self {
        Self {
            shallow_mobile_no: "019870000".to_string(),
            shallow_road_no: "2546".to_string(),
            deep_road_no: "455".to_string(),
        }
    }
}

/// Unknown kinds are rejected by the factory, not by the parser.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggerEntry {
    pub kind: String,
    pub message: String,
}

/// An org chart entry. Present `subordinates` (even empty) makes it a manager.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OrgEntry {
    pub name: String,
    pub job_title: String,
    #[serde(default)]
    pub subordinates: Option<Vec<OrgEntry>>,
}

impl OrgEntry {
    pub fn to_node(&self) -> OrgNode {
        match &self.subordinates {
            None => Member::new(&self.name, &self.job_title).into(),
            Some(children) => {
                let mut manager = Manager::new(&self.name, &self.job_title);
                for child in children {
                    manager.add_subordinate(child.to_node());
                }
                manager.into()
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub employee: EmployeeConfig,
    pub address: AddressConfig,
    pub edits: EditsConfig,
    pub loggers: Vec<LoggerEntry>,
    pub organization: OrgEntry,
}

impl Default for DemoConfig {
    fn default() -> Self {
        let member = |name: &str, job_title: &str| OrgEntry {
            name: name.to_string(),
            job_title: job_title.to_string(),
            subordinates: None,
        };

        Self {
            employee: EmployeeConfig::default(),
            address: AddressConfig::default(),
            edits: EditsConfig::default(),
            loggers: vec![
                LoggerEntry {
                    kind: "memory".to_string(),
                    message: "This is a simulated memory logger.".to_string(),
                },
                LoggerEntry {
                    kind: "redis".to_string(),
                    message: "This is a simulated Redis logger.".to_string(),
                },
            ],
            organization: OrgEntry {
                name: "John Doe".to_string(),
                job_title: "CEO".to_string(),
                subordinates: Some(vec![OrgEntry {
                    name: "Jane Smith".to_string(),
                    job_title: "Development Manager".to_string(),
                    subordinates: Some(vec![
                        member("Alice Johnson", "Developer"),
                        member("Bob Brown", "Designer"),
                    ]),
                }]),
            },
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content =
            fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        Self::from_toml_str(&content)
    }

    pub fn build_employee(&self) -> Employee {
        let e = &self.employee;
        Employee::new(
            &e.first_name,
            &e.last_name,
            &e.email,
            &e.mobile_no,
            Address::new(&self.address.road_no, &self.address.house_no),
        )
    }

    pub fn build_org_chart(&self) -> OrgNode {
        self.organization.to_node()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config = DemoConfig::from_toml_str("").unwrap();
        assert_eq!(config, DemoConfig::default());
        assert_eq!(config.build_employee().mobile_no(), "0170000000");
    }

    #[test]
    fn test_bundled_sample_matches_defaults() {
        let config = DemoConfig::from_toml_str(include_str!("../demos/demo.toml")).unwrap();
        assert_eq!(config, DemoConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = DemoConfig::from_toml_str(
            r#"
            [employee]
            first_name = "Ada"

            [address]
            road_no = "7"
            "#,
        )
        .unwrap();

        assert_eq!(config.employee.first_name, "Ada");
        assert_eq!(config.employee.last_name, "Faisal");
        assert_eq!(config.address.road_no, "7");
        assert_eq!(config.address.house_no, "34");
        assert_eq!(config.edits, EditsConfig::default());
    }

    #[test]
    fn test_org_chart_from_toml() {
        let config = DemoConfig::from_toml_str(
            r#"
            [organization]
            name = "Grace"
            job_title = "CTO"

            [[organization.subordinates]]
            name = "Linus"
            job_title = "Engineer"

            [[organization.subordinates]]
            name = "Barbara"
            job_title = "Team Lead"
            subordinates = []
            "#,
        )
        .unwrap();

        let chart = config.build_org_chart();
        assert_eq!(
            chart.details(),
            vec!["CTO: Grace", "Engineer: Linus", "Team Lead: Barbara"]
        );
        match &chart {
            OrgNode::Manager(m) => assert!(matches!(m.subordinates()[1], OrgNode::Manager(_))),
            OrgNode::Member(_) => panic!("root should be a manager"),
        }
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = DemoConfig::from_toml_str("[employee\nfirst_name = ").unwrap_err();
        assert!(matches!(err, PatternError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[loggers]]\nkind = \"redis\"\nmessage = \"hello\"").unwrap();

        let config = DemoConfig::load(file.path()).unwrap();
        assert_eq!(
            config.loggers,
            vec![LoggerEntry {
                kind: "redis".to_string(),
                message: "hello".to_string(),
            }]
        );
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DemoConfig::load(dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, PatternError::ConfigRead { .. }));
    }
}
