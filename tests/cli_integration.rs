//! Integration tests for TeachMaster
//!
//! Library-level tests run the lesson-plan store against a real SQLite
//! database in a temporary directory. Binary-level tests run the
//! `teachmaster` executable with an isolated HOME and database.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::{tempdir, TempDir};

use teachmaster_cli::catalog::{self, Category, CategoryFilter, TechniqueQuery};
use teachmaster_cli::planner::{LessonPlanStore, STORAGE_KEY};
use teachmaster_cli::storage::{Database, KeyValueStore, LessonPlanDraft, LessonPlanPatch};

// =============================================================================
// Test Helpers
// =============================================================================

/// Creates a test database in a temporary directory.
/// Returns the Database instance and the temp directory (which must be kept alive).
fn create_test_db() -> (Database, TempDir) {
    let dir = tempdir().expect("Failed to create temp directory");
    let db_path = dir.path().join("test.db");
    let db = Database::open(&db_path).expect("Failed to open test database");
    (db, dir)
}

fn draft(title: &str, subject: &str) -> LessonPlanDraft {
    LessonPlanDraft {
        title: title.to_string(),
        subject: subject.to_string(),
        ..Default::default()
    }
}

/// A `teachmaster` command with HOME and the database inside `dir`.
fn teachmaster(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("teachmaster").expect("Binary should build");
    cmd.env("HOME", dir.path())
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .arg("--db")
        .arg(dir.path().join("plans.db"));
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().expect("Failed to run teachmaster");
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("Output should be JSON")
}

// =============================================================================
// Store Tests
// =============================================================================

mod store_tests {
    use super::*;

    #[test]
    fn test_round_trip_through_sqlite() {
        let dir = tempdir().expect("Failed to create temp directory");
        let db_path = dir.path().join("plans.db");

        let expected = {
            let db = Database::open(&db_path).expect("Failed to open database");
            let mut store =
                LessonPlanStore::open_with_seed(db, Vec::new()).expect("Failed to open store");
            let first = store.create(draft("Weather", "Science")).unwrap();
            store.create(draft("Poetry", "Literature")).unwrap();
            store
                .update(
                    &first.id,
                    LessonPlanPatch {
                        objectives: Some(vec!["Name clouds".to_string(), "".to_string()]),
                        ..Default::default()
                    },
                )
                .unwrap();
            store.list().to_vec()
        };

        let db = Database::open(&db_path).expect("Failed to reopen database");
        let store = LessonPlanStore::open(db).expect("Failed to reopen store");

        assert_eq!(store.list(), expected.as_slice());
        assert_eq!(store.list()[0].title, "Poetry");
        assert_eq!(store.list()[1].objectives, vec!["Name clouds".to_string()]);
    }

    #[test]
    fn test_corrupted_slot_falls_back_to_seed() {
        let (mut db, _dir) = create_test_db();
        db.set(STORAGE_KEY, "not json at all").unwrap();

        let store = LessonPlanStore::open(db).expect("Corrupted slot should not fail");
        assert_eq!(store.len(), 1, "Default seed has one example plan");

        let db = store.into_storage();
        let raw = db.get(STORAGE_KEY).unwrap().expect("Seed should be written");
        let parsed: Value = serde_json::from_str(&raw).unwrap();
        assert!(parsed.is_array());
    }

    #[test]
    fn test_reads_browser_format() {
        let (mut db, _dir) = create_test_db();
        db.set(
            STORAGE_KEY,
            r#"[{"id":"lp_1717000000000","title":"Дроби","subject":"Математика","grade_level":"5","duration":"45 минут","objectives":["Сравнивать дроби"],"materials":[],"lesson_outline":"","teacher_actions":"","student_actions":"","assessment_method":"","notes":"","techniques_used":["think-pair-share"],"created_date":"2024-05-29T16:26:40.000Z"}]"#,
        )
        .unwrap();

        let store = LessonPlanStore::open(db).expect("Failed to open store");
        let plan = store.get("lp_1717000000000").expect("Plan should load");
        assert_eq!(plan.title, "Дроби");
        assert_eq!(plan.techniques_used, vec!["think-pair-share".to_string()]);
    }

    #[test]
    fn test_delete_twice() {
        let (db, _dir) = create_test_db();
        let mut store = LessonPlanStore::open_with_seed(db, Vec::new()).unwrap();
        let plan = store.create(draft("A", "B")).unwrap();

        assert!(store.delete(&plan.id).unwrap());
        assert!(!store.delete(&plan.id).unwrap());
        assert!(store.is_empty());
    }
}

// =============================================================================
// Catalog Tests
// =============================================================================

mod catalog_tests {
    use super::*;

    #[test]
    fn test_unfiltered_catalog_is_complete() {
        let found = catalog::filter_techniques(catalog::techniques(), &TechniqueQuery::default());
        assert_eq!(found.len(), catalog::techniques().len());
    }

    #[test]
    fn test_assessment_category_ignores_nothing_else() {
        let query = TechniqueQuery::new("", "assessment".parse::<CategoryFilter>().unwrap());
        let found = catalog::filter_techniques(catalog::techniques(), &query);

        assert!(!found.is_empty());
        assert!(found.iter().all(|t| t.category == Category::Assessment));
    }
}

// =============================================================================
// Binary Tests
// =============================================================================

mod binary_tests {
    use super::*;

    #[test]
    fn test_techniques_search() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["techniques", "--search", "EXIT"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Exit Ticket"))
            .stdout(predicate::str::contains("Jigsaw").not());
    }

    #[test]
    fn test_techniques_category_json() {
        let dir = tempdir().unwrap();
        let json = stdout_json(teachmaster(&dir).args([
            "techniques",
            "--category",
            "assessment",
            "--format",
            "json",
        ]));

        let items = json.as_array().expect("Should be an array");
        assert!(!items.is_empty());
        assert!(items.iter().all(|t| t["category"] == "assessment"));
    }

    #[test]
    fn test_techniques_no_match() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["techniques", "--search", "xylophone"])
            .assert()
            .success()
            .stdout(predicate::str::contains("No techniques found."));
    }

    #[test]
    fn test_techniques_unknown_category() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["techniques", "--category", "cooking"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown category"));
    }

    #[test]
    fn test_technique_detail() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["technique", "jigsaw"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Jigsaw"))
            .stdout(predicate::str::contains("How to apply"));

        teachmaster(&dir)
            .args(["technique", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Technique not found"));
    }

    #[test]
    fn test_plan_lifecycle() {
        let dir = tempdir().unwrap();

        let created = stdout_json(teachmaster(&dir).args([
            "new",
            "--title",
            "Fractions",
            "--subject",
            "Math",
            "--objective",
            "Compare",
            "--objective",
            " ",
            "--technique",
            "exit-ticket",
            "--format",
            "json",
        ]));
        let id = created["id"].as_str().expect("id").to_string();
        assert_eq!(created["objectives"], serde_json::json!(["Compare"]));

        let plans = stdout_json(teachmaster(&dir).args(["plans", "--format", "json"]));
        let plans = plans.as_array().unwrap();
        assert_eq!(plans.len(), 2, "Example plan plus the new one");
        assert_eq!(plans[0]["id"], id.as_str(), "Newest plan comes first");

        let updated = stdout_json(teachmaster(&dir).args([
            "edit",
            &id,
            "--title",
            "Equivalent Fractions",
            "--format",
            "json",
        ]));
        assert_eq!(updated["title"], "Equivalent Fractions");
        assert_eq!(updated["subject"], "Math");
        assert_eq!(updated["created_date"], created["created_date"]);

        teachmaster(&dir)
            .args(["plan", &id, "--format", "markdown"])
            .assert()
            .success()
            .stdout(predicate::str::contains("# Equivalent Fractions"))
            .stdout(predicate::str::contains("Exit Ticket"));

        teachmaster(&dir)
            .args(["delete", &id, "--force"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Deleted"));

        let plans = stdout_json(teachmaster(&dir).args(["plans", "--format", "json"]));
        assert_eq!(plans.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_new_requires_title() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["new", "--title", "  ", "--subject", "Math"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Title is required"));
    }

    #[test]
    fn test_edit_unknown_plan() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["edit", "lp_missing", "--title", "X"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("No lesson plan found"));
    }

    #[test]
    fn test_delete_without_confirmation_is_cancelled() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["delete", "lp_example"])
            .write_stdin("n\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("Cancelled"));

        let plans = stdout_json(teachmaster(&dir).args(["plans", "--format", "json"]));
        assert_eq!(plans.as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_open_routes() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["open", "/PMP/techniquedetail?id=gallery-walk"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Gallery Walk"));

        teachmaster(&dir)
            .args(["open", "/"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Lesson plans created"));

        teachmaster(&dir)
            .args(["open", "/settings"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Page not found"));
    }

    #[test]
    fn test_config_disables_seed() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["config", "set", "seed_example_plans", "false"])
            .assert()
            .success();

        teachmaster(&dir)
            .args(["config", "get", "seed_example_plans"])
            .assert()
            .success()
            .stdout(predicate::str::contains("false"));

        let plans = stdout_json(teachmaster(&dir).args(["plans", "--format", "json"]));
        assert!(plans.as_array().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_config_can_be_repaired() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join(".teachmaster");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config directory");
        std::fs::write(config_dir.join("config.yaml"), "recent_plans_limit: [oops\n")
            .expect("Failed to write config file");

        teachmaster(&dir)
            .args(["plans"])
            .assert()
            .success()
            .stderr(predicate::str::contains("using default settings"));

        teachmaster(&dir)
            .args(["config", "set", "recent_plans_limit", "3"])
            .assert()
            .success();

        teachmaster(&dir)
            .args(["config", "get", "recent_plans_limit"])
            .assert()
            .success()
            .stdout(predicate::str::contains("3"))
            .stderr(predicate::str::contains("using default settings").not());
    }

    #[test]
    fn test_plans_limit_zero_with_plans() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["plans", "--limit", "0"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Lesson plans (1 plan)"))
            .stdout(predicate::str::contains("No lesson plans yet.").not());
    }

    #[test]
    fn test_open_percent_encoded_id() {
        let dir = tempdir().unwrap();
        teachmaster(&dir)
            .args(["open", "/techniquedetail?id=think%2Dpair%2Dshare"])
            .assert()
            .success()
            .stdout(predicate::str::contains("Think-Pair-Share"));
    }

    #[test]
    fn test_dashboard_json() {
        let dir = tempdir().unwrap();
        let stats = stdout_json(teachmaster(&dir).args(["dashboard", "--format", "json"]));

        assert_eq!(stats["categories"], 8);
        assert_eq!(stats["lesson_plans"], 1);
        assert_eq!(stats["featured"].as_array().unwrap().len(), 4);
    }
}
