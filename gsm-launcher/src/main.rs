#![windows_subsystem = "windows"]
#![warn(clippy::all)]

use color_eyre::eyre::anyhow;
use color_eyre::Result;
use gsm_launcher::PlatformSpawner;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Installs error reporting, plus a file logger when `RUST_LOG` is set.
///
/// Nothing is written to disk unless logging was explicitly asked for.
fn setup() -> Result<Option<WorkerGuard>> {
    color_eyre::install()?;

    if std::env::var("RUST_LOG").is_err() {
        return Ok(None);
    }

    let log_dir = dirs::data_local_dir()
        .ok_or_else(|| anyhow!("there is no local data directory"))?
        .join("gsm-launcher");
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, "gsm-launcher.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt::Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(non_blocking)
            .with_ansi(false)
            .finish(),
    )?;

    // https://github.com/tokio-rs/tracing/blob/master/examples/examples/panic_hook.rs
    std::panic::set_hook(Box::new(|panic| {
        if let Some(location) = panic.location() {
            tracing::error!(
                message = %panic,
                panic.file = location.file(),
                panic.line = location.line(),
                panic.column = location.column(),
            );
        } else {
            tracing::error!(message = %panic);
        }
    }));

    Ok(Some(guard))
}

fn main() -> Result<()> {
    // logging is best-effort, it must never stop the launch
    let _guard = setup().ok().flatten();

    let (launcher, result) = gsm_launcher::run(&PlatformSpawner::default());
    launcher.apply_failure_policy(result)?;

    Ok(())
}
