// tests/cli_e2e.rs
//
// Runs the built binary in scratch working directories.
//
use std::fs;
use std::path::PathBuf;
use std::process::Command;

fn tmp_dir(name: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    p.push(format!("naics_cli_{}", name));
    let _ = fs::remove_dir_all(&p);
    fs::create_dir_all(&p).unwrap();
    p
}

fn naics_html(dir: &PathBuf) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_naics_html"))
        .current_dir(dir)
        .output()
        .unwrap()
}

#[test]
fn missing_input_exits_nonzero_and_names_the_path() {
    let dir = tmp_dir("missing");
    let out = naics_html(&dir);

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("naics.csv"), "stderr: {stderr}");
    assert!(out.stdout.is_empty());
    assert!(!dir.join("index.html").exists());
}

#[test]
fn success_prints_confirmation_and_writes_index() {
    let dir = tmp_dir("ok");
    fs::write(
        dir.join("naics.csv"),
        "Code,Description,Level,Parent_Code\n\"111\",\"Crop Production\",2,11\n",
    )
    .unwrap();

    let out = naics_html(&dir);

    assert!(out.status.success());
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "Successfully generated index.html with all NAICS codes from naics.csv\n"
    );
    let doc = fs::read_to_string(dir.join("index.html")).unwrap();
    assert!(doc.contains("<td>Crop Production</td>"));
    assert!(dir.join("naics_html.log").is_file());
}
