use std::fs;
use std::io::Write;
use std::path::Path;
use std::process::{exit, Command, ExitStatus};

use clap::{Parser, Subcommand, ValueEnum};
use zip::write::FileOptions;
use zip::{CompressionMethod, ZipWriter};

const RUNTIME_BIN: &str = "summary_runtime";

// ── CLI definition ─────────────────────────────────────────────────

#[derive(Parser)]
#[command(
    name = "xtask",
    about = "Task runner for the frame summary workspace",
    long_about = "A unified CLI for packaging the summary Lambda, invoking it\n\
                  locally, and running CI checks in the frame summary workspace."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Invoke the summary handler once outside the Lambda platform
    Invoke,
    /// Run CI checks (fmt, clippy, tests)
    Ci {
        /// Job to run
        #[arg(value_enum, default_value_t = CiJob::Check)]
        job: CiJob,
    },
    /// Build and package the Rust Lambda artifact
    ServerlessPackage {
        /// Compilation target triple for the Lambda binary
        #[arg(long, default_value = "x86_64-unknown-linux-gnu")]
        target: String,
        /// Build profile used for the binary
        #[arg(value_enum, long, default_value_t = BuildProfile::Release)]
        profile: BuildProfile,
    },
}

#[derive(Clone, ValueEnum)]
enum CiJob {
    /// Formatting, clippy, and tests
    Check,
    /// Run check and a local invocation of the runtime binary
    All,
}

#[derive(Clone, Copy, ValueEnum)]
enum BuildProfile {
    Debug,
    Release,
}

impl BuildProfile {
    fn dir_name(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }

    fn as_cargo_flag(self) -> Option<&'static str> {
        match self {
            Self::Debug => None,
            Self::Release => Some("--release"),
        }
    }
}

// ── helpers ────────────────────────────────────────────────────────

fn step(label: &str) {
    eprintln!("\n=== {label} ===");
}

fn cargo(args: &[&str]) -> ExitStatus {
    eprintln!("+ cargo {}", args.join(" "));
    Command::new("cargo")
        .args(args)
        .status()
        .expect("failed to execute cargo")
}

fn run_cargo(args: &[&str]) {
    let status = cargo(args);
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

fn package_serverless_lambda(target: &str, profile: BuildProfile) {
    ensure_rust_target_installed(target);

    step("Build summary lambda binary");

    let mut cargo_args = vec![
        "build",
        "-p",
        "frame_summary_lambda",
        "--target",
        target,
        "--bin",
        RUNTIME_BIN,
    ];
    if let Some(flag) = profile.as_cargo_flag() {
        cargo_args.push(flag);
    }
    run_cargo(&cargo_args);

    step("Package lambda zip artifact");
    let target_dir = Path::new("target").join(target).join(profile.dir_name());
    let dist_dir = Path::new("dist");
    fs::create_dir_all(dist_dir).expect("failed to create lambda dist directory");

    let binary_path = target_dir.join(binary_name(RUNTIME_BIN, target));
    let zip_path = dist_dir.join(format!("{RUNTIME_BIN}.zip"));
    if let Err(error) = package_lambda_zip(&binary_path, &zip_path) {
        eprintln!(
            "failed to package '{}' into '{}': {error}",
            binary_path.display(),
            zip_path.display()
        );
        exit(1);
    }

    eprintln!("\nPackaged artifact:\n- {}", zip_path.display());
}

fn ensure_rust_target_installed(target: &str) {
    let output = match Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
    {
        Ok(value) if value.status.success() => value,
        Ok(_) | Err(_) => {
            eprintln!("warning: could not list installed rust targets; skipping target preflight");
            return;
        }
    };

    let installed = String::from_utf8_lossy(&output.stdout);
    if !installed.lines().any(|line| line.trim() == target) {
        eprintln!(
            "required rust target `{target}` is not installed. install it with `rustup target add {target}` and re-run `cargo run -p xtask -- serverless-package`"
        );
        exit(1);
    }
}

fn binary_name(bin_name: &str, target: &str) -> String {
    if target.contains("windows") {
        format!("{bin_name}.exe")
    } else {
        bin_name.to_string()
    }
}

/// Lambda's `provided` runtimes execute an entry named `bootstrap`.
fn package_lambda_zip(binary_path: &Path, zip_path: &Path) -> zip::result::ZipResult<()> {
    let binary = fs::read(binary_path)?;
    let mut zip = ZipWriter::new(fs::File::create(zip_path)?);
    let options = FileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .unix_permissions(0o755);

    zip.start_file("bootstrap", options)?;
    zip.write_all(&binary)?;
    zip.finish()?;
    Ok(())
}

// ── CI jobs ────────────────────────────────────────────────────────

fn ci_check() {
    step("Check formatting");
    run_cargo(&["fmt", "--all", "--", "--check"]);

    step("Clippy");
    run_cargo(&[
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ]);

    step("Test frame_summary_core");
    run_cargo(&["test", "-p", "frame_summary_core"]);

    step("Test frame_summary_lambda");
    run_cargo(&["test", "-p", "frame_summary_lambda"]);
}

fn invoke_locally() {
    step("Invoke summary_runtime locally");
    // The binary only polls the runtime API when this variable is present.
    eprintln!("+ cargo run -p frame_summary_lambda --bin {RUNTIME_BIN}");
    let status = Command::new("cargo")
        .args(["run", "-p", "frame_summary_lambda", "--bin", RUNTIME_BIN])
        .env_remove("AWS_LAMBDA_RUNTIME_API")
        .status()
        .expect("failed to execute cargo");
    if !status.success() {
        exit(status.code().unwrap_or(1));
    }
}

// ── main ───────────────────────────────────────────────────────────

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Invoke => invoke_locally(),
        Commands::Ci { job } => {
            match job {
                CiJob::Check => ci_check(),
                CiJob::All => {
                    ci_check();
                    invoke_locally();
                }
            }
            eprintln!("\nCI job passed.");
        }
        Commands::ServerlessPackage { target, profile } => {
            package_serverless_lambda(&target, profile);
        }
    }
}
