// Demo scenarios driven by the binaries. Each writes plain text to `out`;
// the exact wording is for people, the returned values are for tests.

use std::io::Write;

use crate::composite::OrgNode;
use crate::config::DemoConfig;
use crate::error::Result;
use crate::factory::{LoggerFactory, LoggerKind};
use crate::prototype::{Employee, Prototype};
use crate::singleton::Singleton;

/// The three records left behind by the prototype scenario.
#[derive(Debug)]
pub struct PrototypeReport {
    pub original: Employee,
    pub shallow: Employee,
    pub deep: Employee,
}

pub fn run_prototype(config: &DemoConfig, out: &mut dyn Write) -> Result<PrototypeReport> {
    let edits = &config.edits;
    let original = config.build_employee();

    let mut shallow = original.shallow_copy();
    shallow.set_mobile_no(&edits.shallow_mobile_no);
    shallow.set_road_no(&edits.shallow_road_no);

    let deep = original.deep_copy();
    deep.set_road_no(&edits.deep_road_no);

    writeln!(out, "Employee: {} <{}>", original.full_name(), original.email())?;
    writeln!(out, "Original mobile:      {}", original.mobile_no())?;
    writeln!(out, "Shallow copy mobile:  {}", shallow.mobile_no())?;
    writeln!(out, "Original road:        {}", original.address_ref().road_no)?;
    writeln!(out, "Shallow copy road:    {}", shallow.address_ref().road_no)?;
    writeln!(out, "Deep copy road:       {}", deep.address_ref().road_no)?;
    writeln!(
        out,
        "Shallow copy shares address: {}",
        shallow.shares_address_with(&original)
    )?;
    writeln!(
        out,
        "Deep copy shares address:    {}",
        deep.shares_address_with(&original)
    )?;

    Ok(PrototypeReport {
        original,
        shallow,
        deep,
    })
}

/// Logs each configured message through a freshly created logger.
/// Stops at the first unsupported kind.
pub fn run_factory(config: &DemoConfig, out: &mut dyn Write) -> Result<Vec<LoggerKind>> {
    let factory = LoggerFactory::new();
    let mut used = Vec::with_capacity(config.loggers.len());
    for entry in &config.loggers {
        let logger = factory.create_logger_named(&entry.kind)?;
        logger.log(out, &entry.message)?;
        used.push(logger.kind());
    }
    Ok(used)
}

pub fn run_singleton(out: &mut dyn Write) -> Result<bool> {
    let first = Singleton::instance();
    let second = Singleton::instance();
    let same = std::ptr::eq(first, second);

    writeln!(out, "Same instance: {same}")?;
    writeln!(out, "Constructions: {}", Singleton::construction_count())?;
    Ok(same)
}

pub fn run_composite(config: &DemoConfig, out: &mut dyn Write) -> Result<OrgNode> {
    let chart = config.build_org_chart();
    chart.display_details(out)?;
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoggerEntry;
    use crate::error::PatternError;

    fn render<T>(run: impl FnOnce(&mut dyn Write) -> Result<T>) -> (T, String) {
        let mut out = Vec::new();
        let value = run(&mut out).unwrap();
        (value, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_prototype_scenario() {
        let config = DemoConfig::default();
        let (report, text) = render(|out| run_prototype(&config, out));

        assert_eq!(report.original.mobile_no(), "0170000000");
        assert_eq!(report.shallow.mobile_no(), "019870000");
        assert_eq!(report.original.address_ref().road_no, "2546");
        assert_eq!(report.deep.address_ref().road_no, "455");
        assert!(report.shallow.shares_address_with(&report.original));
        assert!(!report.deep.shares_address_with(&report.original));

        assert!(text.contains("Original mobile:      0170000000"));
        assert!(text.contains("Deep copy shares address:    false"));
    }

    #[test]
    fn test_factory_demo_logs_each_entry() {
        let config = DemoConfig::default();
        let (kinds, text) = render(|out| run_factory(&config, out));

        assert_eq!(kinds, vec![LoggerKind::Memory, LoggerKind::Redis]);
        assert_eq!(
            text,
            "Memory Log: This is a simulated memory logger.\n\
             Redis Log: This is a simulated Redis logger.\n"
        );
    }

    #[test]
    fn test_factory_demo_stops_on_unknown_kind() {
        let mut config = DemoConfig::default();
        config.loggers.insert(
            1,
            LoggerEntry {
                kind: "syslog".to_string(),
                message: "never written".to_string(),
            },
        );

        let mut out = Vec::new();
        let err = run_factory(&config, &mut out).unwrap_err();
        assert!(matches!(err, PatternError::UnsupportedKind { ref value } if value == "syslog"));
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Memory Log: This is a simulated memory logger.\n"
        );
    }

    #[test]
    fn test_singleton_demo() {
        let (same, text) = render(run_singleton);
        assert!(same);
        assert!(text.contains("Constructions: 1"));
    }

    #[test]
    fn test_composite_demo() {
        let config = DemoConfig::default();
        let (chart, text) = render(|out| run_composite(&config, out));

        assert_eq!(chart.headcount(), 4);
        assert_eq!(text.lines().next(), Some("CEO: John Doe"));
        assert_eq!(text.lines().last(), Some("Designer: Bob Brown"));
    }
}
