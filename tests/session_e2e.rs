use assert_cmd::Command;
use predicates::prelude::*;

fn hms(config_dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("hms").unwrap();
    cmd.env("HMS_CONFIG_DIR", config_dir)
        .env("NO_COLOR", "1")
        .env_remove("HMS_LOG");
    cmd
}

#[test]
fn full_patient_lifecycle() {
    let temp_dir = tempfile::tempdir().unwrap();

    // login, add patient, search, delete, show all, exit
    let script = "jadu\n12345\n\
                  1\n1\nAmina\n30\nF\nflu\n\
                  2\namina\n\
                  3\n1\n\
                  18\n\
                  19\n";

    hms(temp_dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"))
        .stdout(predicate::str::contains("Patient added (id 1): Amina"))
        .stdout(predicate::str::contains("diagnosis: flu"))
        .stdout(predicate::str::contains("Patient deleted (id 1): Amina"))
        .stdout(predicate::str::contains("(none)"))
        .stdout(predicate::str::contains("Exiting the system. Goodbye!"));
}

#[test]
fn three_bad_logins_exit_nonzero() {
    let temp_dir = tempfile::tempdir().unwrap();

    hms(temp_dir.path())
        .write_stdin("jadu\nwrong\njadu\nwrong\njadu\nwrong\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Too many failed attempts. Exiting."))
        .stdout(predicate::str::contains("Main Menu").not())
        .stderr(predicate::str::contains("Authentication failed"));
}

#[test]
fn inventory_low_stock_and_update() {
    let temp_dir = tempfile::tempdir().unwrap();

    let script = "jadu\n12345\n\
                  11\n1\ngauze\n5\n\
                  11\n2\nsaline\n10\n\
                  11\n3\ngloves\n15\n\
                  12\n3\n\n2\n\
                  13\n10\n\
                  19\n";

    hms(temp_dir.path())
        .write_stdin(script)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory item updated (id 3): quantity"))
        .stdout(predicate::str::contains("item: gauze"))
        .stdout(predicate::str::contains("item: gloves  quantity: 2"))
        .stdout(predicate::str::contains("item: saline  quantity").not());
}

#[test]
fn config_file_changes_credentials() {
    let temp_dir = tempfile::tempdir().unwrap();
    std::fs::write(
        temp_dir.path().join("config.json"),
        r#"{ "operator": "desk", "password": "pw", "max_login_attempts": 1 }"#,
    )
    .unwrap();

    hms(temp_dir.path())
        .write_stdin("desk\npw\n19\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Login successful!"));

    hms(temp_dir.path())
        .write_stdin("jadu\n12345\n")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Too many failed attempts. Exiting."));
}

#[test]
fn config_init_writes_defaults() {
    let temp_dir = tempfile::tempdir().unwrap();
    let config_dir = temp_dir.path().join("hms");

    hms(&config_dir)
        .arg("config")
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("operator = jadu"))
        .stdout(predicate::str::contains("password = *****"))
        .stdout(predicate::str::contains("low-stock-threshold = 10"));

    assert!(config_dir.join("config.json").exists());
}
