//! Requirement and conflict validation across a mod set.
//!
//! Validation is a full pass: every declared relation of every mod is
//! checked, and errors accumulate in declaration order instead of stopping
//! at the first problem. The ordering walk only runs on a set that came
//! through here clean.

use std::collections::HashMap;

use modkit_core::definition::ModDefinition;

/// Check every declared requirement and conflict of every mod in `defs`.
///
/// Returns the accumulated error strings, outer order following `defs` and
/// inner order following each mod's declarations. An empty vector means the
/// set is safe to hand to the ordering walk.
pub fn validate(defs: &[ModDefinition]) -> Vec<String> {
    let index = index_by_key(defs);
    let mut errors = Vec::new();

    for def in defs {
        for req in &def.requires {
            match index.get(&req.id.to_lowercase()) {
                None => {
                    // The version check is skipped for an absent dependency;
                    // the missing requirement is the one reportable fact.
                    errors.push(format!(
                        "Mod '{}' requires mod '{}', but it is not present.",
                        def.id, req.id
                    ));
                }
                Some(dep) => {
                    if let Some(constraint) = &req.constraint {
                        if !constraint.accepts(&dep.version) {
                            errors.push(format!(
                                "Mod '{}' requires mod '{}' with version constraint '{constraint}', but found version '{}'.",
                                def.id, req.id, dep.version
                            ));
                        }
                    }
                }
            }
        }

        for conflict in &def.conflicts_with {
            // An absent conflict target is harmless.
            let Some(found) = index.get(&conflict.id.to_lowercase()) else {
                continue;
            };
            match &conflict.constraint {
                None => {
                    errors.push(format!(
                        "Mod '{}' conflicts with mod '{}' (version: '{}').",
                        def.id, conflict.id, found.version
                    ));
                }
                Some(constraint) if constraint.accepts(&found.version) => {
                    errors.push(format!(
                        "Mod '{}' conflicts with mod '{}' (version: '{}', constraint: '{constraint}').",
                        def.id, conflict.id, found.version
                    ));
                }
                Some(_) => {}
            }
        }
    }

    errors
}

/// Case-insensitive identifier lookup for one resolution run.
pub(crate) fn index_by_key(defs: &[ModDefinition]) -> HashMap<String, &ModDefinition> {
    defs.iter().map(|def| (def.key(), def)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use modkit_core::constraint::VersionConstraint;
    use modkit_core::definition::ModRef;
    use modkit_core::version::ModVersion;

    fn def(id: &str, version: &str) -> ModDefinition {
        ModDefinition {
            id: id.to_string(),
            name: id.to_string(),
            version: ModVersion::parse(version).unwrap(),
            requires: Vec::new(),
            conflicts_with: Vec::new(),
            install_dir: format!("mods/{id}").into(),
            verbosity: None,
        }
    }

    fn reference(id: &str, constraint: Option<&str>) -> ModRef {
        ModRef {
            id: id.to_string(),
            constraint: constraint.map(|c| VersionConstraint::parse(c).unwrap()),
        }
    }

    #[test]
    fn clean_set_produces_no_errors() {
        let mut a = def("A", "1.0.0");
        a.requires.push(reference("B", Some(">=1.0")));
        let b = def("B", "1.2.0");

        assert!(validate(&[a, b]).is_empty());
    }

    #[test]
    fn missing_requirement_is_reported() {
        let mut a = def("A", "1.0.0");
        a.requires.push(reference("B", None));

        let errors = validate(&[a]);
        assert_eq!(
            errors,
            vec!["Mod 'A' requires mod 'B', but it is not present.".to_string()]
        );
    }

    #[test]
    fn missing_requirement_skips_the_version_check() {
        let mut a = def("A", "1.0.0");
        a.requires.push(reference("B", Some(">=2.0.0")));

        let errors = validate(&[a]);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].ends_with("but it is not present."));
    }

    #[test]
    fn unsatisfied_requirement_constraint_is_reported() {
        let mut a = def("A", "1.0.0");
        a.requires.push(reference("B", Some(">=2.0.0")));
        let b = def("B", "1.0.0");

        let errors = validate(&[a, b]);
        assert_eq!(
            errors,
            vec![
                "Mod 'A' requires mod 'B' with version constraint '>=2.0.0', \
                 but found version '1.0.0'."
                    .to_string()
            ]
        );
    }

    #[test]
    fn unconditional_conflict_is_reported() {
        let mut a = def("A", "1.0.0");
        a.conflicts_with.push(reference("B", None));
        let b = def("B", "3.1");

        let errors = validate(&[a, b]);
        assert_eq!(
            errors,
            vec!["Mod 'A' conflicts with mod 'B' (version: '3.1').".to_string()]
        );
    }

    #[test]
    fn constrained_conflict_fires_only_when_the_constraint_matches() {
        let mut a = def("A", "1.0.0");
        a.conflicts_with.push(reference("B", Some(">=2.0")));

        let old_b = def("B", "1.9.0");
        let errors = validate(&[a.clone(), old_b]);
        assert!(errors.is_empty());

        let new_b = def("B", "2.0");
        let errors = validate(&[a, new_b]);
        assert_eq!(
            errors,
            vec![
                "Mod 'A' conflicts with mod 'B' (version: '2.0', constraint: '>=2.0')."
                    .to_string()
            ]
        );
    }

    #[test]
    fn absent_conflict_target_is_not_an_error() {
        let mut a = def("A", "1.0.0");
        a.conflicts_with.push(reference("ghost", None));

        assert!(validate(&[a]).is_empty());
    }

    #[test]
    fn identifier_lookup_ignores_case() {
        let mut a = def("A", "1.0.0");
        a.requires.push(reference("CORE-LIB", Some(">=1.2")));
        let core = def("Core-Lib", "1.4.0");

        assert!(validate(&[a, core]).is_empty());
    }

    #[test]
    fn errors_accumulate_in_declaration_order() {
        let mut a = def("A", "1.0.0");
        a.requires.push(reference("missing-one", None));
        a.requires.push(reference("B", Some(">2.0")));
        a.conflicts_with.push(reference("C", None));
        let b = def("B", "2.0");
        let c = def("C", "1.0");

        let errors = validate(&[a, b, c]);
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("missing-one"));
        assert!(errors[1].contains("version constraint '>2.0'"));
        assert!(errors[2].contains("conflicts with mod 'C'"));
    }
}
