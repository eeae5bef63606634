//! End-to-end tests for the clipsplit binary

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::cargo::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use serial_test::serial;
use tempfile::TempDir;

/// Command with no clipsplit variables leaking in from the caller's environment
fn clipsplit(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("clipsplit"));
    cmd.current_dir(dir)
        .env_remove("CLIPSPLIT_INTERVALS")
        .env_remove("CLIPSPLIT_OUTPUT")
        .env_remove("CLIPSPLIT_FFMPEG")
        .env_remove("CLIPSPLIT_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

fn write_intervals(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("continuous_intervals.txt");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
#[serial]
fn test_parse_prints_startup_echo() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(temp_dir.path(), "video.mp4\nfoo ('0:00:00', '0:01:30') bar\n");

    clipsplit(temp_dir.path())
        .arg("parse")
        .assert()
        .success()
        .stdout(predicate::str::contains("Video path: video.mp4"))
        .stdout(predicate::str::contains("Time ranges: [('0:00:00', '0:01:30')]"));
}

#[test]
#[serial]
fn test_parse_json() {
    let temp_dir = TempDir::new().unwrap();
    let intervals = write_intervals(
        temp_dir.path(),
        "video.mp4\nno timestamps here\n('1:02:03','1:02:10')\n",
    );

    let output = clipsplit(temp_dir.path())
        .arg("parse")
        .arg("--intervals")
        .arg(&intervals)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["video_path"], "video.mp4");
    assert_eq!(json["ranges"][0]["start"], "1:02:03");
    assert_eq!(json["ranges"][0]["end"], "1:02:10");
    assert!(json.get("warnings").is_none());
}

#[test]
#[serial]
fn test_parse_strict_lists_warnings() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(
        temp_dir.path(),
        "video.mp4\nno timestamps here\n('0:00:05', '0:00:10')\n",
    );

    clipsplit(temp_dir.path())
        .args(["parse", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Warning: line 2: no interval found: no timestamps here",
        ));
}

#[test]
#[serial]
fn test_strict_warning_printed_once() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(temp_dir.path(), "video.mp4\nno timestamps here\n");

    let output = clipsplit(temp_dir.path())
        .args(["--log-level", "debug", "parse", "--strict"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stdout.matches("no timestamps here").count(), 1);
    assert!(!stderr.contains("no timestamps here"));
}

#[test]
#[serial]
fn test_split_json_includes_strict_warnings() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(
        temp_dir.path(),
        "video.mp4\nno timestamps here\n('0:00:05', '0:00:10')\n",
    );

    let output = clipsplit(temp_dir.path())
        .args(["split", "--strict", "--json", "--dry-run"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["warnings"][0]["line"], 2);
    assert_eq!(json["warnings"][0]["text"], "no timestamps here");
    assert_eq!(json["clips"][0]["output_path"], "output_clips/clip_1.mp4");
}

#[test]
#[serial]
fn test_missing_interval_file_fails() {
    let temp_dir = TempDir::new().unwrap();

    clipsplit(temp_dir.path())
        .arg("split")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Interval file not found"));

    assert!(!temp_dir.path().join("output_clips").exists());
}

#[test]
#[serial]
fn test_default_run_with_no_intervals_creates_folder() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(temp_dir.path(), "video.mp4\nnothing to cut\n");

    clipsplit(temp_dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Video path: video.mp4"))
        .stdout(predicate::str::contains("Time ranges: []"))
        .stdout(predicate::str::contains("Saved:").not());

    let output = temp_dir.path().join("output_clips");
    assert!(output.is_dir());
    assert_eq!(fs::read_dir(&output).unwrap().count(), 0);
}

#[test]
#[serial]
fn test_config_file_sets_output_folder() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(temp_dir.path(), "video.mp4\n");
    fs::write(
        temp_dir.path().join("clipsplit.toml"),
        "[split]\noutput_folder = \"from_config\"\n",
    )
    .unwrap();

    clipsplit(temp_dir.path()).arg("split").assert().success();

    assert!(temp_dir.path().join("from_config").is_dir());
    assert!(!temp_dir.path().join("output_clips").exists());
}

#[test]
#[serial]
fn test_invalid_config_file_fails() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(temp_dir.path(), "video.mp4\n");
    fs::write(temp_dir.path().join("clipsplit.toml"), "[split]\njobs = \"many\"\n").unwrap();

    clipsplit(temp_dir.path())
        .arg("split")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
#[serial]
fn test_dry_run_does_not_create_output() {
    let temp_dir = TempDir::new().unwrap();
    write_intervals(
        temp_dir.path(),
        "video.mp4\n('0:00:00', '0:00:10')\n('0:00:10', '0:00:20')\n",
    );

    clipsplit(temp_dir.path())
        .args(["split", "--dry-run", "--ffmpeg", "clipsplit-no-such-ffmpeg"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Would save: output_clips"))
        .stdout(predicate::str::contains("clip_2.mp4"));

    assert!(!temp_dir.path().join("output_clips").exists());
}

#[cfg(unix)]
mod with_fake_ffmpeg {
    use super::*;
    use std::os::unix::fs::PermissionsExt;

    /// Script standing in for ffmpeg; the output path is the argument before `-y`
    fn fake_ffmpeg(dir: &Path, succeed: bool) -> PathBuf {
        let path = dir.join(if succeed { "ffmpeg-ok" } else { "ffmpeg-fail" });
        let body = if succeed {
            "#!/bin/sh\nprev=\"\"\nfor arg; do out=\"$prev\"; prev=\"$arg\"; done\nprintf '%s\\n' \"$*\" > \"$out\"\n"
        } else {
            "#!/bin/sh\necho 'Invalid data found when processing input' >&2\nexit 1\n"
        };
        fs::write(&path, body).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }

    #[test]
    #[serial]
    fn test_split_saves_numbered_clips() {
        let temp_dir = TempDir::new().unwrap();
        let ffmpeg = fake_ffmpeg(temp_dir.path(), true);
        write_intervals(
            temp_dir.path(),
            "video.mp4\nA ('0:00:00', '0:00:10')\nB ('0:01:00', '0:01:10')\n",
        );

        clipsplit(temp_dir.path())
            .arg("split")
            .arg("--ffmpeg")
            .arg(&ffmpeg)
            .assert()
            .success()
            .stdout(predicate::str::contains("Saved: output_clips/clip_1.mp4"))
            .stdout(predicate::str::contains("Saved: output_clips/clip_2.mp4"));

        let second = fs::read_to_string(temp_dir.path().join("output_clips/clip_2.mp4")).unwrap();
        assert!(second.contains("-i video.mp4 -ss 0:01:00 -to 0:01:10 -c copy"));
    }

    #[test]
    #[serial]
    fn test_split_overwrites_previous_run() {
        let temp_dir = TempDir::new().unwrap();
        let ffmpeg = fake_ffmpeg(temp_dir.path(), true);
        write_intervals(temp_dir.path(), "video.mp4\n('0:00:00', '0:00:10')\n");
        let output = temp_dir.path().join("output_clips");
        fs::create_dir_all(&output).unwrap();
        fs::write(output.join("clip_1.mp4"), "stale").unwrap();

        for _ in 0..2 {
            clipsplit(temp_dir.path())
                .arg("split")
                .arg("--ffmpeg")
                .arg(&ffmpeg)
                .assert()
                .success();
        }

        let content = fs::read_to_string(output.join("clip_1.mp4")).unwrap();
        assert!(content.contains("-ss 0:00:00 -to 0:00:10"));
    }

    #[test]
    #[serial]
    fn test_tool_failure_aborts_batch() {
        let temp_dir = TempDir::new().unwrap();
        let ffmpeg = fake_ffmpeg(temp_dir.path(), false);
        write_intervals(
            temp_dir.path(),
            "video.mp4\n('0:00:00', '0:00:10')\n('0:00:10', '0:00:20')\n",
        );

        clipsplit(temp_dir.path())
            .arg("split")
            .arg("--ffmpeg")
            .arg(&ffmpeg)
            .assert()
            .failure()
            .stdout(predicate::str::contains("Saved:").not())
            .stderr(predicate::str::contains("Clip 1"))
            .stderr(predicate::str::contains("Invalid data found"));
    }

    #[test]
    #[serial]
    fn test_continue_on_error_reports_all_failures() {
        let temp_dir = TempDir::new().unwrap();
        let ffmpeg = fake_ffmpeg(temp_dir.path(), false);
        write_intervals(
            temp_dir.path(),
            "video.mp4\n('0:00:00', '0:00:10')\n('0:00:10', '0:00:20')\n",
        );

        clipsplit(temp_dir.path())
            .arg("split")
            .arg("--ffmpeg")
            .arg(&ffmpeg)
            .arg("--continue-on-error")
            .assert()
            .failure()
            .stdout(predicate::str::contains("Failed: 2 of 2 clips"))
            .stderr(predicate::str::contains("2 of 2 clips failed"));
    }

    #[test]
    #[serial]
    fn test_split_json_report() {
        let temp_dir = TempDir::new().unwrap();
        let ffmpeg = fake_ffmpeg(temp_dir.path(), true);
        write_intervals(temp_dir.path(), "video.mp4\n('0:00:00', '0:00:10')\n");

        let output = clipsplit(temp_dir.path())
            .args(["split", "--json", "--jobs", "2"])
            .arg("--ffmpeg")
            .arg(&ffmpeg)
            .output()
            .unwrap();
        assert!(output.status.success());

        let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(json["video_path"], "video.mp4");
        assert_eq!(json["clips"][0]["index"], 1);
        assert_eq!(json["clips"][0]["output_path"], "output_clips/clip_1.mp4");
        assert_eq!(json["dry_run"], false);
    }
}
