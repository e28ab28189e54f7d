use std::collections::BTreeMap;
use std::path::PathBuf;

use gx_gases::{Gas, GasSystem};
use gx_plan::schema::*;
use gx_plan::{PlanError, ValidationError, load, load_json, load_yaml, save_json, save_yaml};

fn plan() -> RunPlan {
    RunPlan {
        version: 1,
        name: "Nitrox 32 top-up".to_string(),
        source: CylinderDef {
            volume_l: 50.0,
            pressure_bar: 300.0,
            twinset: false,
        },
        destination: CylinderDef {
            volume_l: 24.0,
            pressure_bar: 60.0,
            twinset: true,
        },
        gas: BTreeMap::from([("O2".to_string(), 0.32)]),
        temperature_c: 18.0,
        gas_system: GasSystemDef::VanDerWaals,
    }
}

fn demo(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../demos")
        .join(name)
}

#[test]
fn roundtrip_yaml() {
    let path = std::env::temp_dir().join("gx_plan_roundtrip.yaml");
    save_yaml(&path, &plan()).unwrap();
    let loaded = load_yaml(&path).unwrap();
    assert_eq!(plan(), loaded);
}

#[test]
fn roundtrip_json() {
    let path = std::env::temp_dir().join("gx_plan_roundtrip.json");
    save_json(&path, &plan()).unwrap();
    let loaded = load(&path).unwrap();
    assert_eq!(plan(), loaded);
}

#[test]
fn defaults_are_air_at_20_c_van_der_waals() {
    let yaml = r#"
version: 1
name: minimal
source:
  volume_l: 12.0
  pressure_bar: 200.0
destination:
  volume_l: 12.0
  pressure_bar: 50.0
"#;
    let plan: RunPlan = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(plan.temperature_c, 20.0);
    assert_eq!(plan.gas_system, GasSystemDef::VanDerWaals);
    assert!(!plan.source.twinset);

    let resolved = plan.resolve().unwrap();
    assert_eq!(resolved.composition.fraction(Gas::Oxygen), 0.21);
    assert!((resolved.composition.fraction(Gas::Nitrogen) - 0.79).abs() < 1e-12);
    assert_eq!(resolved.gas_system, GasSystem::VanDerWaals);
}

#[test]
fn demo_plans_load() {
    let yaml = load(&demo("twinset_fill.yaml")).unwrap();
    assert_eq!(yaml.gas_system, GasSystemDef::Ideal);
    assert!(yaml.source.twinset && yaml.destination.twinset);

    let json = load_json(&demo("trimix_stage.json")).unwrap();
    let resolved = json.resolve().unwrap();
    assert!((resolved.composition.fraction(Gas::Helium) - 0.45).abs() < 1e-12);
    assert!(!resolved.configuration.destination_twinset);
}

#[test]
fn save_rejects_invalid_plan() {
    let bad = RunPlan {
        destination: CylinderDef {
            volume_l: 24.0,
            pressure_bar: 320.0,
            twinset: true,
        },
        ..plan()
    };
    let path = std::env::temp_dir().join("gx_plan_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &bad),
        Err(PlanError::Transfer(_))
    ));
}

#[test]
fn unsupported_version() {
    let future = RunPlan {
        version: 7,
        ..plan()
    };
    assert!(matches!(
        gx_plan::validate_plan(&future),
        Err(PlanError::Validation(ValidationError::UnsupportedVersion {
            version: 7
        }))
    ));
}

#[test]
fn empty_name() {
    let unnamed = RunPlan {
        name: "  ".to_string(),
        ..plan()
    };
    assert!(matches!(
        gx_plan::validate_plan(&unnamed),
        Err(PlanError::Validation(ValidationError::InvalidValue { .. }))
    ));
}

#[test]
fn missing_file() {
    let path = std::env::temp_dir().join("gx_plan_does_not_exist.yaml");
    assert!(matches!(load_yaml(&path), Err(PlanError::Io(_))));
}
