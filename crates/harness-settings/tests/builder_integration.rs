//! Integration tests for SettingsBuilder workflows.
//!
//! Covers multi-database construction, the database/collection count
//! properties, complete diagnostics and settings file round trips.

use harness_settings::prelude::*;
use rstest::*;
use tempfile::TempDir;

/// Fixture providing the two-database configuration used by the example suites
#[fixture]
fn example_settings() -> HarnessConfiguration {
	SettingsBuilder::new()
		.add_database("test")
		.with_connection_string("conn")
		.drop_database_first()
		.add_collection("col1", true, "path1")
		.add_collection("col2", true, "path2")
		.add_database("test2")
		.with_connection_string("conn2")
		.drop_database_first()
		.add_collection("col1", true, "path1")
		.add_collection("col2", true, "path2")
		.build()
		.expect("example settings should be valid")
}

#[fixture]
fn temp_dir() -> TempDir {
	TempDir::new().expect("Failed to create temporary directory")
}

#[rstest]
fn test_example_settings_shape(example_settings: HarnessConfiguration) {
	assert_eq!(example_settings.database_names(), vec!["test", "test2"]);

	for database in example_settings.databases() {
		assert!(database.drop_before_use());
		let names: Vec<_> = database.collections().iter().map(|c| c.name()).collect();
		assert_eq!(names, vec!["col1", "col2"]);
	}
	assert_eq!(
		example_settings.database("test2").unwrap().connection_string(),
		"conn2"
	);
}

/// Test: database and collection counts follow the calls made
///
/// Why: every `add_database` yields one database and every `add_collection`
/// lands in the database that was current when it was called.
#[rstest]
#[case(&[0])]
#[case(&[3])]
#[case(&[2, 0, 5])]
#[case(&[1, 1, 1, 1])]
fn test_counts_follow_calls(#[case] collections_per_database: &[usize]) {
	let mut builder = SettingsBuilder::new();
	for (db_idx, count) in collections_per_database.iter().enumerate() {
		builder = builder
			.add_database(format!("db{}", db_idx))
			.with_connection_string(format!("conn{}", db_idx));
		for col_idx in 0..*count {
			builder = builder.add_collection(format!("col{}", col_idx), false, "");
		}
	}

	let config = builder.build().unwrap();
	assert_eq!(config.len(), collections_per_database.len());
	for (database, expected) in config.databases().iter().zip(collections_per_database) {
		assert_eq!(database.collections().len(), *expected);
	}
}

#[rstest]
fn test_collection_order_is_preserved() {
	let config = SettingsBuilder::new()
		.add_database("test")
		.with_connection_string("conn")
		.add_collection("zeta", false, "")
		.add_collection("alpha", false, "")
		.add_collection("mid", false, "")
		.build()
		.unwrap();

	let names: Vec<_> = config.databases()[0]
		.collections()
		.iter()
		.map(|c| c.name())
		.collect();
	assert_eq!(names, vec!["zeta", "alpha", "mid"]);
}

#[rstest]
fn test_conditional_collections() {
	let include_audit = false;

	let mut builder = SettingsBuilder::new()
		.add_database("test")
		.with_connection_string("conn")
		.add_collection("people", true, "people.json");
	if include_audit {
		builder = builder.add_collection("audit", false, "");
	}

	let config = builder.build().unwrap();
	assert_eq!(config.databases()[0].collections().len(), 1);
}

/// Test: build reports every violation in one pass
#[rstest]
fn test_build_reports_all_violations() {
	let err = SettingsBuilder::new()
		.add_database("")
		.with_connection_string("conn")
		.add_database("dup")
		.add_collection("", false, "")
		.add_collection("seeded", true, "")
		.add_database("dup")
		.with_connection_string("conn")
		.build()
		.unwrap_err();

	let violations = err.violations().expect("validation error expected");
	assert_eq!(
		violations.violations(),
		&[
			Violation::EmptyDatabaseName { index: 0 },
			Violation::MissingConnectionString {
				database: "dup".to_string()
			},
			Violation::EmptyCollectionName {
				database: "dup".to_string(),
				index: 0
			},
			Violation::MissingDataSourcePath {
				database: "dup".to_string(),
				collection: "seeded".to_string()
			},
			Violation::DuplicateDatabaseName {
				name: "dup".to_string()
			},
		]
	);
}

#[rstest]
fn test_invalid_sequence_takes_precedence_over_validation() {
	let result = SettingsBuilder::new()
		.with_connection_string("conn")
		.add_database("")
		.build();
	assert!(matches!(
		result,
		Err(SettingsError::InvalidSequence {
			operation: "with_connection_string"
		})
	));
}

/// Test: builder -> model -> settings file -> model is lossless
#[rstest]
fn test_settings_file_round_trip(example_settings: HarnessConfiguration, temp_dir: TempDir) {
	let path = temp_dir.path().join("ExampleSuite.json");

	SettingsSerializer::new()
		.write_to_file(&example_settings, &path)
		.unwrap();
	let reloaded = SettingsParser::new().parse_file(&path).unwrap();

	assert_eq!(reloaded, example_settings);
}

#[rstest]
fn test_compact_round_trip(example_settings: HarnessConfiguration) {
	let content = SettingsSerializer::new()
		.with_pretty(false)
		.serialize(&example_settings)
		.unwrap();
	let reloaded = SettingsParser::new()
		.parse_string(&content, SettingsFormat::Json)
		.unwrap();
	assert_eq!(reloaded, example_settings);
}

#[cfg(feature = "yaml")]
#[rstest]
fn test_yaml_round_trip(example_settings: HarnessConfiguration, temp_dir: TempDir) {
	let path = temp_dir.path().join("ExampleSuite.yml");

	SettingsSerializer::new()
		.with_format(SettingsFormat::Yaml)
		.write_to_file(&example_settings, &path)
		.unwrap();
	let reloaded = SettingsParser::new().parse_file(&path).unwrap();

	assert_eq!(reloaded, example_settings);
}

#[rstest]
fn test_configuration_is_shareable_across_threads(example_settings: HarnessConfiguration) {
	let shared = std::sync::Arc::new(example_settings);

	let handles: Vec<_> = (0..4)
		.map(|_| {
			let config = std::sync::Arc::clone(&shared);
			std::thread::spawn(move || config.database_names().len())
		})
		.collect();

	for handle in handles {
		assert_eq!(handle.join().unwrap(), 2);
	}
}
