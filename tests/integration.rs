use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

fn lexrag_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_lexrag"))
}

fn write_config(root: &Path, body: &str) -> PathBuf {
    let path = root.join("lexrag.toml");
    fs::write(&path, body).unwrap();
    path
}

fn run_lexrag(config_path: Option<&Path>, args: &[&str]) -> (String, String, bool) {
    let binary = lexrag_binary();
    let mut cmd = Command::new(&binary);
    cmd.env_remove("DATA_PATH").env_remove("RUST_LOG");
    if let Some(path) = config_path {
        cmd.arg("--config").arg(path);
    }
    let output = cmd
        .args(args)
        .output()
        .unwrap_or_else(|e| panic!("Failed to run lexrag binary at {:?}: {}", binary, e));

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    (stdout, stderr, output.status.success())
}

#[test]
fn test_basic_uses_builtin_handbook() {
    let (stdout, stderr, ok) = run_lexrag(None, &["basic"]);
    assert!(ok, "basic failed: {}", stderr);
    assert!(stdout.contains("Loaded 5 documents"));
    assert!(stdout.contains("Question: How many vacation days do I get?"));
    assert!(stdout.contains("Company Vacation Policy"));
    assert!(stdout.contains("Based on the available information:"));
}

#[test]
fn test_basic_json_output() {
    let (stdout, stderr, ok) = run_lexrag(None, &["basic", "--json", "vacation", "days"]);
    assert!(ok, "basic --json failed: {}", stderr);

    let result: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["question"], "vacation days");
    assert_eq!(result["sources"][0]["title"], "Company Vacation Policy");
    assert!(result["sources"].as_array().unwrap().len() <= 3);
}

#[test]
fn test_basic_with_docs_directory() {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("remote_work.txt"), "Remote work is allowed three days per week.").unwrap();
    fs::write(docs.join("parking.txt"), "Parking permits are issued by facilities.").unwrap();
    fs::write(docs.join("ignored.md"), "Remote remote remote").unwrap();

    let (stdout, stderr, ok) = run_lexrag(
        None,
        &["basic", "--json", "--docs", docs.to_str().unwrap(), "remote", "work"],
    );
    assert!(ok, "basic failed: {}", stderr);

    let result: Value = serde_json::from_str(&stdout).unwrap();
    let sources = result["sources"].as_array().unwrap();
    assert_eq!(sources.len(), 1);
    assert_eq!(sources[0]["title"], "Remote Work");
    assert_eq!(sources[0]["document_id"], "2");
}

#[test]
fn test_empty_docs_directory_falls_back() {
    let tmp = TempDir::new().unwrap();
    let (stdout, stderr, ok) = run_lexrag(None, &["basic", "--docs", tmp.path().to_str().unwrap()]);
    assert!(ok, "basic failed: {}", stderr);
    assert!(stdout.contains("Loaded 5 documents"));
}

#[test]
fn test_top_k_from_config() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), "[retrieval]\ntop_k = 1\n");

    let (stdout, stderr, ok) = run_lexrag(Some(&config), &["basic", "--json", "company", "policy"]);
    assert!(ok, "basic failed: {}", stderr);
    let result: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["sources"].as_array().unwrap().len(), 1);
}

#[test]
fn test_invalid_config_fails() {
    let tmp = TempDir::new().unwrap();
    let config = write_config(tmp.path(), "[retrieval]\ntop_k = 0\n");

    let (_, stderr, ok) = run_lexrag(Some(&config), &["basic"]);
    assert!(!ok);
    assert!(stderr.contains("top_k"));
}

#[test]
fn test_compliance_redacts_and_exports_audit() {
    let tmp = TempDir::new().unwrap();
    let audit_path = tmp.path().join("out").join("audit.json");

    let (stdout, stderr, ok) = run_lexrag(
        None,
        &[
            "compliance",
            "--user",
            "auditor",
            "--audit-out",
            audit_path.to_str().unwrap(),
            "My SSN is 123-45-6789, which patient records retention rules apply?",
        ],
    );
    assert!(ok, "compliance failed: {}", stderr);
    assert!(!stdout.contains("123-45-6789"));
    assert!(stdout.contains("[REDACTED-SSN]"));
    assert!(stdout.contains("PII Detected in Question: Yes"));
    assert!(stdout.contains("Classification: CONFIDENTIAL"));
    assert!(stdout.contains("(ID: HIPAA-001)"));
    assert!(stdout.contains("Audit log exported to"));

    let entries: Value = serde_json::from_str(&fs::read_to_string(&audit_path).unwrap()).unwrap();
    let actions: Vec<&str> = entries
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["action"].as_str().unwrap())
        .collect();
    assert_eq!(actions[0], "SYSTEM_INIT");
    assert_eq!(actions[1], "PII_DETECTED_IN_QUERY");
    assert_eq!(actions[2], "SEARCH");
    assert_eq!(*actions.last().unwrap(), "ANSWER_GENERATED");
    assert!(entries
        .as_array()
        .unwrap()
        .iter()
        .all(|e| e["user_id"] == "auditor"));
}

#[test]
fn test_compliance_docs_directory_is_classified() {
    let tmp = TempDir::new().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("notes.txt"), "Internal roadmap notes for the platform team.").unwrap();
    fs::write(docs.join("payroll.txt"), "Confidential payroll bands for the platform team.").unwrap();

    let (stdout, stderr, ok) = run_lexrag(
        None,
        &["compliance", "--json", "--docs", docs.to_str().unwrap(), "platform", "team"],
    );
    assert!(ok, "compliance failed: {}", stderr);

    let result: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(result["classification"], "CONFIDENTIAL");
    let ids: Vec<&str> = result["sources"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["document_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec!["DOC-001", "DOC-002"]);
    assert_eq!(result["sources"][0]["category"], "user_document");
}

#[test]
fn test_generate_then_enterprise() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("real_world");

    let (stdout, stderr, ok) = run_lexrag(None, &["generate", data.to_str().unwrap()]);
    assert!(ok, "generate failed: {}", stderr);
    assert!(stdout.contains("Generated 9 documents"));
    assert!(data.join("pharma_regulations").join("drug_safety_protocols.txt").is_file());

    let (stdout, stderr, ok) = run_lexrag(
        None,
        &[
            "enterprise",
            "--json",
            "--data",
            data.to_str().unwrap(),
            "Which transaction approval levels apply?",
        ],
    );
    assert!(ok, "enterprise failed: {}", stderr);
    let result: Value = serde_json::from_str(&stdout).unwrap();
    assert!(result["answer"]
        .as_str()
        .unwrap()
        .starts_with("Financial transactions over $50,000"));
    assert!(result["sources"][0]["document_id"]
        .as_str()
        .unwrap()
        .starts_with("finance_reports/"));
}

#[test]
fn test_enterprise_reads_data_path_env() {
    let tmp = TempDir::new().unwrap();
    let data = tmp.path().join("custom");
    let dir = data.join("hr_policies");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join("parental_leave.txt"), "Parental leave lasts sixteen weeks.").unwrap();

    let output = Command::new(lexrag_binary())
        .env("DATA_PATH", &data)
        .env_remove("RUST_LOG")
        .args(["enterprise", "employee parental leave weeks"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Loaded 1 documents"));
    assert!(stdout.contains("hr_policies/parental_leave.txt (hr_policies)"));
    assert!(stdout.contains("Employees receive comprehensive benefits"));
}
