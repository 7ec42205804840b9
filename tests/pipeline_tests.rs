use breqd::collector::{collect_with, NodeRuntime, Probe, StaticCatalog, UnitCatalog};
use breqd::utils::error::CollectError;
use std::collections::BTreeSet;

/// Probe whose duration depends on the unit name only
struct LengthProbe;

impl Probe for LengthProbe {
    fn measure_once(&self, unit: &str) -> Result<u64, CollectError> {
        Ok(unit.len() as u64 * 1_000)
    }
}

#[test]
fn test_pipeline_keeps_every_unit() {
    let catalog = StaticCatalog::new([
        "assert",
        "buffer",
        "child_process",
        "fs",
        "http",
        "node:sea",
        "node:test",
        "node:test/reporters",
        "os",
        "path",
    ]);

    let durations = collect_with(&catalog, &LengthProbe, 3).unwrap();
    let ranked = breqd::rank(&durations).unwrap();
    let events = breqd::format(&ranked).unwrap();

    assert_eq!(events.len(), durations.len());

    let keys: BTreeSet<&str> = durations.keys().map(String::as_str).collect();
    let names: BTreeSet<&str> = events.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(keys, names);

    assert_eq!(events[0].name, "node:test/reporters");
    assert_eq!(events[0].ts, 0.0);
    for pair in events.windows(2) {
        assert!(pair[0].dur >= pair[1].dur);
        assert!(pair[0].ts <= pair[1].ts);
    }
}

#[test]
#[ignore = "requires a Node.js runtime on PATH (or BREQD_RUNTIME)"]
fn test_collect_from_node() {
    let durations = breqd::collect().unwrap();

    assert!(
        durations.len() > 60,
        "Number of builtin modules, {}, must be at least 60",
        durations.len()
    );
    for (name, duration) in &durations {
        assert!(*duration > 0.0, "'{}' took {} ns", name, duration);
    }

    let ranked = breqd::rank(&durations).unwrap();
    let events = breqd::format(&ranked).unwrap();
    assert_eq!(events.len(), durations.len());
}

#[test]
#[ignore = "requires a Node.js runtime on PATH (or BREQD_RUNTIME)"]
fn test_node_enumeration_includes_prefix_only_units() {
    let runtime = NodeRuntime::from_env();
    let units = runtime.enumerate().unwrap();

    assert!(units.iter().any(|u| u == "fs"));
    assert!(units.iter().any(|u| u == "node:test"));

    let info = runtime.info().unwrap();
    assert!(info.version.starts_with('v'));
}
