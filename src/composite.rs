// Composite Pattern - one capability over leaves and containers
// The org chart owns its children, so a cycle cannot be constructed.

use std::io::Write;

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    job_title: String,
}

impl Member {
    pub fn new(name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_title: job_title.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manager {
    name: String,
    job_title: String,
    subordinates: Vec<OrgNode>,
}

impl Manager {
    pub fn new(name: impl Into<String>, job_title: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_title: job_title.into(),
            subordinates: Vec::new(),
        }
    }

    pub fn add_subordinate(&mut self, node: impl Into<OrgNode>) {
        self.subordinates.push(node.into());
    }

    pub fn subordinates(&self) -> &[OrgNode] {
        &self.subordinates
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgNode {
    Member(Member),
    Manager(Manager),
}

impl From<Member> for OrgNode {
    fn from(member: Member) -> Self {
        OrgNode::Member(member)
    }
}

impl From<Manager> for OrgNode {
    fn from(manager: Manager) -> Self {
        OrgNode::Manager(manager)
    }
}

impl OrgNode {
    pub fn name(&self) -> &str {
        match self {
            OrgNode::Member(m) => &m.name,
            OrgNode::Manager(m) => &m.name,
        }
    }

    pub fn job_title(&self) -> &str {
        match self {
            OrgNode::Member(m) => &m.job_title,
            OrgNode::Manager(m) => &m.job_title,
        }
    }

    /// `"<job title>: <name>"`
    pub fn summary(&self) -> String {
        format!("{}: {}", self.job_title(), self.name())
    }

    /// Pre-order: the node itself, then each subordinate in insertion order.
    pub fn display_details(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.summary())?;
        if let OrgNode::Manager(manager) = self {
            for subordinate in &manager.subordinates {
                subordinate.display_details(out)?;
            }
        }
        Ok(())
    }

    pub fn details(&self) -> Vec<String> {
        let mut lines = Vec::new();
        self.collect_details(&mut lines);
        lines
    }

    fn collect_details(&self, lines: &mut Vec<String>) {
        lines.push(self.summary());
        if let OrgNode::Manager(manager) = self {
            for subordinate in &manager.subordinates {
                subordinate.collect_details(lines);
            }
        }
    }

    pub fn headcount(&self) -> usize {
        match self {
            OrgNode::Member(_) => 1,
            OrgNode::Manager(m) => {
                1 + m.subordinates.iter().map(OrgNode::headcount).sum::<usize>()
            }
        }
    }

    pub fn depth(&self) -> usize {
        match self {
            OrgNode::Member(_) => 1,
            OrgNode::Manager(m) => {
                1 + m.subordinates.iter().map(OrgNode::depth).max().unwrap_or(0)
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
