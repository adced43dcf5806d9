//! Colorful console output for chain builds.
//!
//! Provides a custom `tracing` layer that formats ChainForge events with colors.
//!
//! ## Log Levels
//!
//! - **INFO**: Build start/end, generated and verified files
//! - **DEBUG**: Each committed action
//! - **TRACE**: Pathfinder fallbacks

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static BUILD_START_NANOS: AtomicU64 = AtomicU64::new(0);

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_FILTER: &str = "chainforge_solver=info,chainforge_io=info";

/// Initializes the console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the ChainForge banner and sets up tracing.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(ChainConsoleLayer)
            .try_init();
    });
}

// Marks the start of a build for elapsed time tracking.
fn mark_build_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    BUILD_START_NANOS.store(nanos, Ordering::Relaxed);
}

// Returns elapsed time since build start.
fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = BUILD_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
  ____ _           _       _____
 / ___| |__   __ _(_)_ __ |  ___|__  _ __ __ _  ___
| |   | '_ \ / _` | | '_ \| |_ / _ \| '__/ _` |/ _ \
| |___| | | | (_| | | | | |  _| (_) | | | (_| |  __/
 \____|_| |_|\__,_|_|_| |_|_|  \___/|_|  \__, |\___|
                                         |___/
"#;

    let version_line = format!(
        "                 v{} - Greedy Addition Chain Builder\n",
        VERSION
    );

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats ChainForge events with colors.
pub struct ChainConsoleLayer;

impl<S: Subscriber> Layer<S> for ChainConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();

        if !target.starts_with("chainforge_solver")
            && !target.starts_with("chainforge_io")
            && !target.starts_with("chainforge::")
        {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    path: Option<String>,
    target_count: Option<u64>,
    max_target: Option<u64>,
    actions: Option<u64>,
    duration_ms: Option<u64>,
    candidates_priced: Option<u64>,
    path_estimates: Option<u64>,
    speed: Option<u64>,
    step: Option<u64>,
    sum: Option<u64>,
    addend1: Option<u64>,
    addend2: Option<u64>,
    cost: Option<u64>,
    remaining: Option<u64>,
    target: Option<u64>,
    expansions: Option<u64>,
    targets: Option<u64>,
    count: Option<u64>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        match field.name() {
            "event" => self.event = Some(s.trim_matches('"').to_string()),
            "path" => self.path = Some(s.trim_matches('"').to_string()),
            _ => {}
        }
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "target_count" => self.target_count = Some(value),
            "max_target" => self.max_target = Some(value),
            "actions" => self.actions = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "candidates_priced" => self.candidates_priced = Some(value),
            "path_estimates" => self.path_estimates = Some(value),
            "speed" => self.speed = Some(value),
            "step" => self.step = Some(value),
            "sum" => self.sum = Some(value),
            "addend1" => self.addend1 = Some(value),
            "addend2" => self.addend2 = Some(value),
            "cost" => self.cost = Some(value),
            "remaining" => self.remaining = Some(value),
            "target" => self.target = Some(value),
            "expansions" => self.expansions = Some(value),
            "targets" => self.targets = Some(value),
            "count" => self.count = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        match field.name() {
            "event" => self.event = Some(value.to_string()),
            "path" => self.path = Some(value.to_string()),
            _ => {}
        }
    }
}

fn format_event(v: &EventVisitor) -> String {
    let event = v.event.as_deref().unwrap_or("");

    match event {
        "build_start" => format_build_start(v),
        "build_end" => format_build_end(v),
        "step" => format_step(v),
        "pathfinder_fallback" => format_fallback(v),
        "generated" => format_generated(v),
        "verified" => format_verified(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn number(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_build_start(v: &EventVisitor) -> String {
    mark_build_start();
    let targets = v.target_count.unwrap_or(0);
    let max_target = v.max_target.unwrap_or(1);

    format!(
        "{} {} Building │ {} targets │ max {}",
        format_elapsed(),
        "▶".bright_green().bold(),
        number(targets).bright_yellow(),
        number(max_target).bright_yellow(),
    )
}

fn format_build_end(v: &EventVisitor) -> String {
    let actions = v.actions.unwrap_or(0);
    let duration = v.duration_ms.unwrap_or(0);
    let priced = v.candidates_priced.unwrap_or(0);
    let estimates = v.path_estimates.unwrap_or(0);
    let speed = v.speed.unwrap_or(0);

    let mut output = format!(
        "{} {} Build complete │ {} │ {} actions │ {} candidates/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(duration).yellow(),
        number(actions).white().bold(),
        number(speed).bright_magenta().bold(),
    );

    // Summary box
    output.push_str("\n\n");
    output.push_str(&box_rule('╔', '╗'));
    output.push('\n');
    output.push_str(&box_row("Actions:", &number(actions)));
    output.push('\n');
    output.push_str(&box_row("Candidates priced:", &number(priced)));
    output.push('\n');
    output.push_str(&box_row("Path estimates:", &number(estimates)));
    output.push('\n');
    output.push_str(&box_rule('╚', '╝'));
    output.push('\n');

    output
}

fn box_rule(left: char, right: char) -> String {
    format!("{left}{}{right}", "═".repeat(58))
        .bright_cyan()
        .to_string()
}

fn box_row(label: &str, value: &str) -> String {
    format!(
        "{}  {:<20}{:>34}  {}",
        "║".bright_cyan(),
        label,
        value,
        "║".bright_cyan()
    )
}

fn format_step(v: &EventVisitor) -> String {
    let step = v.step.unwrap_or(0);
    let sum = v.sum.unwrap_or(0);
    let addend1 = v.addend1.unwrap_or(0);
    let addend2 = v.addend2.unwrap_or(0);
    let cost = v.cost.unwrap_or(0);
    let remaining = v.remaining.unwrap_or(0);

    let icon = if cost == 0 {
        "✓".bright_green().to_string()
    } else {
        "·".bright_black().to_string()
    };

    format!(
        "{} {} Step {:>8} │ {} + {} = {} │ cost {} │ {} remaining",
        format_elapsed(),
        icon,
        number(step).bright_black(),
        number(addend1),
        number(addend2),
        number(sum).white().bold(),
        number(cost).bright_magenta(),
        number(remaining).bright_yellow(),
    )
}

fn format_fallback(v: &EventVisitor) -> String {
    format!(
        "{} {} Search for {} exhausted after {} expansions",
        format_elapsed(),
        "↯".yellow(),
        number(v.target.unwrap_or(0)).white(),
        number(v.expansions.unwrap_or(0)).bright_black(),
    )
}

fn format_generated(v: &EventVisitor) -> String {
    format!(
        "{} Generated {} targets │ {}",
        "✚".bright_green().bold(),
        number(v.count.unwrap_or(0)).bright_yellow(),
        v.path.as_deref().unwrap_or("").white(),
    )
}

fn format_verified(v: &EventVisitor) -> String {
    format!(
        "{} Replayed {} actions │ {} targets reached",
        "✓".bright_green().bold(),
        number(v.actions.unwrap_or(0)).white(),
        number(v.targets.unwrap_or(0)).bright_yellow(),
    )
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}
