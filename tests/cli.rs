use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const WALKTHROUGH: &str = r#"{"events": [
    {"type": "submit_identity", "name": "Ana", "email": "ana@x.co"},
    {"type": "select_file", "slot": 0, "file": {"name": "q1.mp4", "size": 10485760, "mime_type": "video/mp4"}},
    {"type": "select_file", "slot": 1, "file": {"name": "q2.mp4", "size": 209715200, "mime_type": "video/mp4"}},
    {"type": "select_file", "slot": 1, "file": {"name": "q2.mov", "size": 5242880, "mime_type": "video/mov"}},
    {"type": "select_file", "slot": 2, "file": {"name": "notes.txt", "size": 100, "mime_type": "text/plain"}},
    {"type": "select_file", "slot": 2, "file": {"name": "q3.avi", "size": 1048576, "mime_type": "video/avi"}},
    {"type": "submit_videos"}
]}"#;

struct TestEnv {
    tmp: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            tmp: TempDir::new().expect("create temp dir"),
        }
    }

    fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.tmp.path().join(name);
        fs::write(&path, content).expect("write fixture");
        path
    }

    fn path(&self, name: &str) -> PathBuf {
        self.tmp.path().join(name)
    }

    fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("assessa");
        cmd.current_dir(self.tmp.path()).env("RUST_LOG", "error");
        cmd
    }

    fn stdout(&self, args: &[&str]) -> String {
        let out = self
            .cmd()
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        String::from_utf8(out).expect("utf-8 output")
    }
}

#[test]
fn run_walkthrough_json() {
    let env = TestEnv::new();
    let script = env.write("script.json", WALKTHROUGH);

    let out = env.stdout(&[
        "run",
        script.to_str().unwrap(),
        "--json",
        "--instant",
        "--score",
        "82",
    ]);
    let report: Value = serde_json::from_str(&out).expect("valid json output");

    let outcomes = report["outcomes"].as_array().unwrap();
    assert_eq!(outcomes.len(), 7);
    assert_eq!(outcomes[2]["status"], "rejected");
    assert_eq!(outcomes[2]["code"], "UPLOAD_REJECTED");
    assert_eq!(outcomes[4]["status"], "rejected");
    assert_eq!(outcomes[6]["status"], "applied");
    assert_eq!(outcomes[6]["step"], "result");

    assert_eq!(report["view"]["progress"], 100);
    assert_eq!(report["view"]["result"]["score"], 82);
    assert_eq!(report["view"]["result"]["passed"], true);
}

#[test]
fn run_writes_snapshot_then_documents() {
    let env = TestEnv::new();
    let script = env.write("script.json", WALKTHROUGH);
    let snapshot = env.path("out/snapshot.json");

    env.stdout(&[
        "run",
        script.to_str().unwrap(),
        "--instant",
        "--score",
        "82",
        "--output",
        snapshot.to_str().unwrap(),
    ]);
    assert!(snapshot.exists());

    let certificate = env.stdout(&[
        "document",
        snapshot.to_str().unwrap(),
        "--kind",
        "certificate",
    ]);
    assert!(certificate.contains("Ana"));
    assert!(certificate.contains("82/100"));

    let report_path = env.path("report.md");
    env.stdout(&[
        "document",
        snapshot.to_str().unwrap(),
        "--kind",
        "report",
        "--output",
        report_path.to_str().unwrap(),
    ]);
    let report = fs::read_to_string(&report_path).unwrap();
    assert!(report.contains("Result: PASSED"));
    assert!(report.contains("q2.mov (5 MB)"));
}

#[test]
fn certificate_refused_for_failed_candidate() {
    let env = TestEnv::new();
    let script = env.write("script.json", WALKTHROUGH);
    let snapshot = env.path("snapshot.json");

    env.stdout(&[
        "run",
        script.to_str().unwrap(),
        "--instant",
        "--score",
        "65",
        "-o",
        snapshot.to_str().unwrap(),
    ]);

    env.cmd()
        .args(["document", snapshot.to_str().unwrap(), "--kind", "certificate"])
        .assert()
        .code(1);
}

#[test]
fn check_reports_partial_uploads() {
    let env = TestEnv::new();
    let profile = env.write(
        "profile.json",
        r#"{"name": "Ana", "email": "ana@x.co",
            "uploads": [{"name": "q1.mp4", "size": 1024, "mime_type": "video/mp4"}, null, null]}"#,
    );

    let out = env.stdout(&["check", profile.to_str().unwrap(), "--json"]);
    let reports: Value = serde_json::from_str(&out).unwrap();
    let reports = reports.as_array().unwrap();

    assert_eq!(reports.len(), 4);
    assert_eq!(reports[1]["allowed"], true);
    assert_eq!(reports[2]["allowed"], false);
    assert!(reports[2]["reason"].as_str().unwrap().contains("1 of 3"));
    assert_eq!(reports[3]["allowed"], false);
}

#[test]
fn config_file_in_working_dir_is_used() {
    let env = TestEnv::new();
    env.write(
        "assessa.json",
        r#"{"evaluation": {"tick_interval_ms": 0, "settle_delay_ms": 0, "seed": 5}}"#,
    );
    let script = env.write("script.json", WALKTHROUGH);

    // No --instant: the zero delays come from the config
    let out = env.stdout(&["run", script.to_str().unwrap(), "--json"]);
    let report: Value = serde_json::from_str(&out).unwrap();
    let score = report["view"]["result"]["score"].as_u64().unwrap();
    assert!((60..=99).contains(&score));
}

#[test]
fn missing_script_fails() {
    let env = TestEnv::new();
    env.cmd().args(["run", "nope.json"]).assert().code(1);
}

#[test]
fn invalid_config_fails() {
    let env = TestEnv::new();
    let config = env.write("bad.json", "{ not json");
    let script = env.write("script.json", WALKTHROUGH);

    env.cmd()
        .args([
            "--config",
            config.to_str().unwrap(),
            "run",
            script.to_str().unwrap(),
            "--instant",
        ])
        .assert()
        .code(1);
}

#[test]
fn check_rejects_profile_with_stale_result() {
    let env = TestEnv::new();
    let profile = env.write(
        "profile.json",
        r#"{"name": "Ana", "email": "ana@x.co", "score": 65, "passed": true}"#,
    );

    env.cmd()
        .args(["check", profile.to_str().unwrap()])
        .assert()
        .code(1);
}
