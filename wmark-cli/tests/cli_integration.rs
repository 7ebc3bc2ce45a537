use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn wmark_cmd() -> Command {
    Command::cargo_bin("wmark").expect("Failed to find wmark binary")
}

#[test]
fn test_apply_nonexistent_input_dir_fails_without_side_effects() -> Result<(), Box<dyn Error>> {
    let workspace = tempdir()?;
    let input_dir = workspace.path().join("does_not_exist");
    let output_dir = workspace.path().join("out");
    let watermark = workspace.path().join("logo.png");
    fs::write(&watermark, "png")?;

    let mut cmd = wmark_cmd();
    cmd.arg("apply")
        .arg(&input_dir)
        .arg(&output_dir)
        .arg(&watermark);

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("not found"));

    // A failed pre-flight check must not leave an output directory behind.
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn test_apply_missing_watermark_fails() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let output_dir = tempdir()?;
    fs::write(input_dir.path().join("a.jpg"), "jpg")?;

    let mut cmd = wmark_cmd();
    cmd.arg("apply")
        .arg(input_dir.path())
        .arg(output_dir.path())
        .arg(input_dir.path().join("missing_logo.png"));

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("missing_logo.png"));

    Ok(())
}

#[test]
fn test_apply_empty_input_dir_is_informational_success() -> Result<(), Box<dyn Error>> {
    let workspace = tempdir()?;
    let input_dir = workspace.path().join("in");
    let output_dir = workspace.path().join("out");
    fs::create_dir(&input_dir)?;
    fs::write(input_dir.join("readme.txt"), "not media")?;
    let watermark = workspace.path().join("logo.png");
    fs::write(&watermark, "png")?;

    let mut cmd = wmark_cmd();
    cmd.arg("apply")
        .arg(&input_dir)
        .arg(&output_dir)
        .arg(&watermark);

    cmd.assert()
        .success()
        .stderr(contains("No supported media files found"));

    // Nothing to do, so no output directory is created either.
    assert!(!output_dir.exists());

    Ok(())
}

#[test]
fn test_apply_invalid_position_mode_fails_before_any_job() -> Result<(), Box<dyn Error>> {
    let workspace = tempdir()?;
    let input_dir = workspace.path().join("in");
    let output_dir = workspace.path().join("out");
    fs::create_dir(&input_dir)?;
    fs::write(input_dir.join("a.jpg"), "jpg")?;
    let watermark = workspace.path().join("logo.png");
    fs::write(&watermark, "png")?;

    let mut cmd = wmark_cmd();
    cmd.arg("apply")
        .arg(&input_dir)
        .arg(&output_dir)
        .arg(&watermark)
        .arg("--position")
        .arg("xyz");

    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("Invalid position mode 'xyz'"))
        .stderr(contains("tl, tr, bl, br, random"));

    // No file was touched.
    assert!(!output_dir.exists());

    Ok(())
}

// --- Tests below run the full pipeline against a stub engine script ---

/// Writes an executable stub standing in for ffmpeg.
///
/// The stub accepts the `-version` probe, fails any invocation whose
/// arguments mention `bad_clip`, and otherwise creates the output file
/// (its last argument) to simulate a successful pipeline.
#[cfg(unix)]
fn write_stub_engine(dir: &std::path::Path) -> Result<std::path::PathBuf, Box<dyn Error>> {
    use std::os::unix::fs::PermissionsExt;

    let stub = dir.join("fake-ffmpeg");
    fs::write(
        &stub,
        "#!/bin/sh\n\
         if [ \"$1\" = \"-version\" ]; then\n\
           echo \"fake-ffmpeg version 0.0\"\n\
           exit 0\n\
         fi\n\
         for arg in \"$@\"; do last=\"$arg\"; done\n\
         case \"$*\" in\n\
           *bad_clip*) echo \"Error opening input: corrupt data\" >&2; exit 1;;\n\
         esac\n\
         : > \"$last\"\n\
         exit 0\n",
    )?;
    fs::set_permissions(&stub, fs::Permissions::from_mode(0o755))?;
    Ok(stub)
}

#[cfg(unix)]
#[test]
fn test_apply_watermarks_eligible_files_only() -> Result<(), Box<dyn Error>> {
    let workspace = tempdir()?;
    let input_dir = workspace.path().join("in");
    let output_dir = workspace.path().join("out");
    fs::create_dir(&input_dir)?;
    fs::write(input_dir.join("a.jpg"), "jpg")?;
    fs::write(input_dir.join("b.mp4"), "mp4")?;
    fs::write(input_dir.join("readme.txt"), "not media")?;
    let watermark = workspace.path().join("logo.png");
    fs::write(&watermark, "png")?;
    let stub = write_stub_engine(workspace.path())?;

    let mut cmd = wmark_cmd();
    cmd.arg("apply")
        .arg(&input_dir)
        .arg(&output_dir)
        .arg(&watermark)
        .arg("--position")
        .arg("tl")
        .arg("--ffmpeg-path")
        .arg(&stub);

    cmd.assert().success().stderr(contains("Succeeded"));

    assert!(output_dir.join("wm_a.jpg").exists());
    assert!(output_dir.join("wm_b.mp4").exists());
    assert!(!output_dir.join("wm_readme.txt").exists());

    // The run log recorded one started and one completed event per job.
    let logs_dir = output_dir.join("logs");
    let run_log = fs::read_dir(&logs_dir)?
        .next()
        .expect("run log file exists")?
        .path();
    let log_content = fs::read_to_string(run_log)?;
    assert_eq!(log_content.matches("\"job_started\"").count(), 2);
    assert_eq!(log_content.matches("\"job_completed\"").count(), 2);

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_apply_engine_failure_does_not_abort_siblings() -> Result<(), Box<dyn Error>> {
    let workspace = tempdir()?;
    let input_dir = workspace.path().join("in");
    let output_dir = workspace.path().join("out");
    fs::create_dir(&input_dir)?;
    fs::write(input_dir.join("bad_clip.mp4"), "mp4")?;
    fs::write(input_dir.join("good_clip.mp4"), "mp4")?;
    let watermark = workspace.path().join("logo.png");
    fs::write(&watermark, "png")?;
    let stub = write_stub_engine(workspace.path())?;

    let mut cmd = wmark_cmd();
    cmd.arg("apply")
        .arg(&input_dir)
        .arg(&output_dir)
        .arg(&watermark)
        .arg("--position")
        .arg("br")
        .arg("--jobs")
        .arg("1")
        .arg("--ffmpeg-path")
        .arg(&stub);

    // Per-file failures are aggregated into a non-zero exit.
    cmd.assert()
        .failure()
        .code(1)
        .stderr(contains("bad_clip.mp4 failed"))
        .stderr(contains("1 of 2 job(s) failed"));

    // The sibling job still completed and its output exists on disk.
    assert!(output_dir.join("wm_good_clip.mp4").exists());
    assert!(!output_dir.join("wm_bad_clip.mp4").exists());

    Ok(())
}
