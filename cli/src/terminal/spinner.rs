use std::io::Write;
use std::sync::OnceLock;
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

static SPINNER: OnceLock<ProgressBar> = OnceLock::new();

const TICK_STRINGS: &[&str] = &[
    "▁▁▁▁▁",
    "▁▂▂▂▁",
    "▁▄▂▄▁",
    "▂▄▆▄▂",
    "▄▆█▆▄",
    "▂▄▆▄▂",
    "▁▄▂▄▁",
    "▁▂▂▂▁",
];

fn get_spinner() -> &'static ProgressBar {
    SPINNER.get_or_init(init_spinner)
}

fn init_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_strings(TICK_STRINGS));
    }
    pb
}

/// Spinner shown while a request is in flight. Cleared on drop.
pub struct SpinnerGuard {
    active: bool,
}

pub fn start(msg: String, q_level: u8) -> SpinnerGuard {
    if q_level > 0 {
        return SpinnerGuard { active: false };
    }
    let pb = get_spinner();
    pb.set_message(msg);
    pb.enable_steady_tick(Duration::from_millis(100));
    SpinnerGuard { active: true }
}

impl Drop for SpinnerGuard {
    fn drop(&mut self) {
        if self.active
            && let Some(pb) = SPINNER.get()
        {
            pb.disable_steady_tick();
            pb.finish_and_clear();
        }
    }
}

/// Routes log output around the spinner so lines are not torn by redraws.
pub struct SpinnerWriter;

impl Write for SpinnerWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match SPINNER.get() {
            Some(pb) if !pb.is_finished() => pb.suspend(|| std::io::stderr().write_all(buf))?,
            _ => std::io::stderr().write_all(buf)?,
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        std::io::stderr().flush()
    }
}
