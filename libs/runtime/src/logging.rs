use crate::config::{LoggingConfig, Section};
use std::{
    io::Write,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};
use tracing::level_filters::LevelFilter;
use tracing::Level;
use tracing_subscriber::{filter::Targets, fmt, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use file_rotate::{
    compression::Compression,
    suffix::{AppendTimestamp, FileLimit},
    ContentLimit, FileRotate,
};

const DEFAULT_MAX_SIZE_MB: u64 = 100;

fn parse_level(s: &str) -> Option<Level> {
    match s.to_ascii_lowercase().as_str() {
        "trace" => Some(Level::TRACE),
        "debug" => Some(Level::DEBUG),
        "info" => Some(Level::INFO),
        "warn" => Some(Level::WARN),
        "error" => Some(Level::ERROR),
        "off" | "none" | "" => None,
        _ => Some(Level::INFO),
    }
}

// -------- rotating writer --------

#[derive(Clone)]
struct RollingWriter(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl RollingWriter {
    fn open(path: &Path, max_bytes: usize) -> anyhow::Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let rot = FileRotate::new(
            path,
            AppendTimestamp::default(FileLimit::Age(chrono::Duration::days(7))),
            ContentLimit::BytesSurpassed(max_bytes),
            Compression::None,
            #[cfg(unix)]
            None,
        );
        Ok(Self(Arc::new(Mutex::new(rot))))
    }
}

struct RollingWriterHandle(Arc<Mutex<FileRotate<AppendTimestamp>>>);

impl Write for RollingWriterHandle {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.0.lock() {
            Ok(mut rot) => rot.write(buf),
            Err(_) => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.0.lock() {
            Ok(mut rot) => rot.flush(),
            Err(_) => Ok(()),
        }
    }
}

impl<'a> fmt::MakeWriter<'a> for RollingWriter {
    type Writer = RollingWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        RollingWriterHandle(self.0.clone())
    }
}

/// Resolve a log file path against `base_dir` (home_dir).
fn resolve_log_path(file: &str, base_dir: &Path) -> PathBuf {
    let p = Path::new(file);
    if p.is_absolute() {
        p.to_path_buf()
    } else {
        base_dir.join(p)
    }
}

// -------- public init --------

/// Initialize logging from a configuration.
///
/// The "default" section is the catch-all; any other key names a crate
/// (target prefix) whose records are routed to that section's console level
/// and log file instead.
pub fn init_logging_from_config(cfg: &LoggingConfig, base_dir: &Path) {
    // Bridge `log` → `tracing` *before* installing the subscriber
    let _ = tracing_log::LogTracer::init();

    if cfg.is_empty() {
        init_default_logging();
        return;
    }

    let default_section = cfg.get("default");
    let subsystems: Vec<(&String, &Section)> =
        cfg.iter().filter(|(k, _)| k.as_str() != "default").collect();

    // Console: default catch-all level plus per-subsystem overrides.
    let mut console_targets = Targets::new().with_default(
        default_section
            .and_then(|s| parse_level(&s.console_level))
            .map_or(LevelFilter::OFF, LevelFilter::from_level),
    );
    for (name, section) in &subsystems {
        let level = parse_level(&section.console_level)
            .map_or(LevelFilter::OFF, LevelFilter::from_level);
        console_targets = console_targets.with_target((*name).clone(), level);
    }

    let console_layer: BoxedLayer = fmt::layer()
        .with_target(true)
        .with_writer(std::io::stderr)
        .with_filter(console_targets)
        .boxed();

    let mut layers: Vec<BoxedLayer> = vec![console_layer];

    // Default file sink: everything at file_level except the named subsystems.
    if let Some(section) = default_section {
        if let Some(layer) = file_layer_for(section, base_dir, |level| {
            let mut targets = Targets::new().with_default(LevelFilter::from_level(level));
            for (name, _) in &subsystems {
                targets = targets.with_target((*name).clone(), LevelFilter::OFF);
            }
            targets
        }) {
            layers.push(layer);
        }
    }

    // One dedicated file sink per subsystem section.
    for (name, section) in &subsystems {
        if let Some(layer) = file_layer_for(section, base_dir, |level| {
            Targets::new()
                .with_default(LevelFilter::OFF)
                .with_target((*name).clone(), LevelFilter::from_level(level))
        }) {
            layers.push(layer);
        }
    }

    let _ = tracing_subscriber::registry().with(layers).try_init();
}

type BoxedLayer = Box<dyn Layer<tracing_subscriber::Registry> + Send + Sync>;

fn file_layer_for(
    section: &Section,
    base_dir: &Path,
    targets_for: impl Fn(Level) -> Targets,
) -> Option<BoxedLayer> {
    let level = parse_level(&section.file_level)?;
    if section.file.trim().is_empty() {
        return None;
    }

    let path = resolve_log_path(&section.file, base_dir);
    let max_bytes = section.max_size_mb.unwrap_or(DEFAULT_MAX_SIZE_MB) as usize * 1024 * 1024;
    let writer = match RollingWriter::open(&path, max_bytes) {
        Ok(w) => w,
        Err(err) => {
            eprintln!("Failed to open log file {}: {err}", path.display());
            return None;
        }
    };

    Some(
        fmt::layer()
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
            .with_filter(targets_for(level))
            .boxed(),
    )
}

fn init_default_logging() {
    let _ = fmt()
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_parsing() {
        assert_eq!(parse_level("debug"), Some(Level::DEBUG));
        assert_eq!(parse_level("WARN"), Some(Level::WARN));
        assert_eq!(parse_level("off"), None);
        assert_eq!(parse_level(""), None);
        // Unknown strings fall back to info rather than silencing the sink.
        assert_eq!(parse_level("verbose"), Some(Level::INFO));
    }

    #[test]
    fn relative_log_paths_resolve_under_base_dir() {
        let base = Path::new("/srv/faithfin");
        assert_eq!(
            resolve_log_path("logs/api.log", base),
            PathBuf::from("/srv/faithfin/logs/api.log")
        );
        assert_eq!(
            resolve_log_path("/var/log/api.log", base),
            PathBuf::from("/var/log/api.log")
        );
    }
}
