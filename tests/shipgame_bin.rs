use std::io::Write;
use std::process::{Command, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_shipgame");

fn demo_script() -> String {
    format!("{}/demos/short_match.txt", env!("CARGO_MANIFEST_DIR"))
}

#[test]
fn script_file_with_json_summary() {
    let output = Command::new(BIN)
        .args([demo_script().as_str(), "--json"])
        .env("SHIPGAME_LOG", "info")
        .output()
        .expect("failed to run shipgame");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("non utf8 output");
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 27, "{stdout}");

    // four placements, the grid dump of `show second`, then the shots
    assert_eq!(lines[..4], ["ok", "ok", "ok", "ok"]);
    assert_eq!(lines[4], "  1 2 3 4 5 6 7 8 9 10");
    assert!(lines[5].starts_with("A x x "));
    assert!(lines[12].starts_with("H   x x x "));
    assert_eq!(
        lines[15..26],
        ["hit", "miss", "sunk", "1", "hit", "hit", "hit", "hit", "sunk", "sunk", "FIRST_WON"]
    );

    let summary: serde_json::Value =
        serde_json::from_str(lines[26]).expect("last line is not json");
    assert_eq!(summary["state"], "FIRST_WON");
    assert_eq!(summary["turn"], "second");
    assert_eq!(summary["remaining"]["first"], 1);
    assert_eq!(summary["remaining"]["second"], 0);

    // log records go to stderr, never into the result stream
    let stderr = String::from_utf8(output.stderr).expect("non utf8 output");
    assert!(stderr.contains("first sank the last ship; FIRST_WON"), "{stderr}");
    assert!(!stdout.contains("INFO"));
}

#[test]
fn script_from_stdin() {
    let mut child = Command::new(BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .expect("failed to run shipgame");
    child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(b"place first 2 A1 ROW\nfire second A1\nstate\n")
        .expect("failed to write script");
    let output = child.wait_with_output().expect("shipgame did not finish");
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "ok\nrejected: it is not this player's turn\nUNFINISHED\n"
    );
}

#[test]
fn missing_script_fails() {
    let output = Command::new(BIN)
        .arg(format!("{}/demos/no_such_script.txt", env!("CARGO_MANIFEST_DIR")))
        .output()
        .expect("failed to run shipgame");
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("opening script"), "{stderr}");
}
