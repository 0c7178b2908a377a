use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use lesson_core::Catalog;
use lesson_core::model::LessonId;
use services::ConfigError;
use services::ViewerConfig;
use services::config::{CATALOG_ENV, CHART_DELAY_ENV, IDENTITY_ENV};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

/// Browse lessons, take the quick quizzes, and unlock AP sections.
#[derive(Parser, Debug)]
#[command(name = "lessons")]
struct Args {
    /// JSON lesson catalog to load instead of the bundled lessons.
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Delay before a lesson chart is drawn.
    #[arg(long, value_name = "MS")]
    chart_delay_ms: Option<u64>,

    /// Skip the identity widget; AP sections stay locked.
    #[arg(long)]
    no_identity: bool,

    /// Lesson id to open on launch.
    #[arg(long, value_name = "LESSON_ID")]
    open: Option<LessonId>,

    /// Log filter directive (falls back to RUST_LOG, then "info").
    #[arg(long)]
    log: Option<String>,
}

impl Args {
    /// Whether a flag was given for the setting read from `var`.
    fn overrides(&self, var: &str) -> bool {
        match var {
            CATALOG_ENV => self.catalog.is_some(),
            CHART_DELAY_ENV => self.chart_delay_ms.is_some(),
            IDENTITY_ENV => self.no_identity,
            _ => false,
        }
    }

    /// Flags over environment over defaults. Variables shadowed by a flag are
    /// never parsed.
    fn resolve_config(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<ViewerConfig, ConfigError> {
        let mut config = ViewerConfig::from_lookup(|var| {
            if self.overrides(var) {
                None
            } else {
                lookup(var)
            }
        })?;
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ViewerConfig) {
        if let Some(path) = &self.catalog {
            config.catalog_path = Some(path.clone());
        }
        if let Some(ms) = self.chart_delay_ms {
            config.chart_delay = Duration::from_millis(ms);
        }
        if self.no_identity {
            config.identity_enabled = false;
        }
    }
}

struct DesktopApp {
    catalog: Arc<Catalog>,
    config: ViewerConfig,
    initial_lesson: Option<LessonId>,
}

impl UiApp for DesktopApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn config(&self) -> ViewerConfig {
        self.config.clone()
    }

    fn initial_lesson(&self) -> Option<LessonId> {
        self.initial_lesson.clone()
    }
}

fn init_tracing(directive: Option<&str>) {
    let filter = directive
        .map(EnvFilter::new)
        .or_else(|| EnvFilter::try_from_default_env().ok())
        .unwrap_or_else(|| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_catalog(config: &ViewerConfig) -> Result<Catalog, lesson_core::CatalogError> {
    match &config.catalog_path {
        Some(path) => {
            info!(path = %path.display(), "loading lesson catalog");
            Catalog::load(path)
        }
        None => Catalog::builtin(),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_tracing(args.log.as_deref());

    let config = args.resolve_config(|var| std::env::var(var).ok())?;

    let catalog = Arc::new(load_catalog(&config)?);
    info!(lessons = catalog.len(), identity = config.identity_enabled, "catalog ready");

    if let Some(id) = &args.open {
        if catalog.get(id).is_none() {
            warn!(lesson = %id, "--open names an unknown lesson; starting on the topic list");
        }
    }

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        catalog,
        config,
        initial_lesson: args.open,
    });
    let context = build_app_context(&app);

    // tao can open an always-on-top window on some macOS setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Lessons")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // Reported once here; library errors are not logged on the way up.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
