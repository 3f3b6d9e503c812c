//! zview: replays a host event script against an edit view and prints the
//! backend requests it produces, one JSON object per line.
//!
//! Usage: `zview [--paint] [--blink] [--config=PATH] <script.jsonl | ->`
//!
//! With `--blink` the caret is driven by a real timer while focused, and
//! every toggle that arrives between events repaints the last dirty rect.

use std::io::{self, Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc::{self, Receiver};
use std::time::Instant;

use zview::app::{parse_script, Replay, ReplayOptions};
use zview::core::{Result, ViewError};
use zview::kernel::services::adapters::{
    ensure_config_file, load_config, rpc_channel, ConfigService, RpcReceiver,
};
use zview::kernel::services::ports::ViewConfig;
use zview::views::editor::{BlinkDriver, BlinkTick, EditView};

mod logging;

struct Args {
    script: String,
    config: Option<PathBuf>,
    paint: bool,
    blink: bool,
}

fn parse_args() -> Option<Args> {
    let mut script = None;
    let mut config = None;
    let mut paint = false;
    let mut blink = false;

    for arg in std::env::args().skip(1) {
        if arg == "--paint" {
            paint = true;
        } else if arg == "--blink" {
            blink = true;
        } else if let Some(value) = arg.strip_prefix("--config=") {
            config = Some(PathBuf::from(value));
        } else if script.is_none() {
            script = Some(arg);
        }
    }

    Some(Args {
        script: script?,
        config,
        paint,
        blink,
    })
}

fn load_view_config(path: Option<&PathBuf>) -> Result<ViewConfig> {
    if let Some(path) = path {
        return Ok(ConfigService::load_from_path(path)?.config().clone());
    }
    if let Err(e) = ensure_config_file() {
        tracing::warn!(error = %e, "cannot create default view config");
    }
    Ok(load_config().unwrap_or_default())
}

fn read_script(source: &str) -> Result<String> {
    if source == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text)?;
        return Ok(text);
    }
    Ok(std::fs::read_to_string(source)?)
}

fn flush_requests(rx: &mut RpcReceiver, out: &mut impl Write) -> Result<()> {
    for notification in rx.drain() {
        writeln!(out, "{}", notification.to_json_line()?)?;
    }
    Ok(())
}

fn blink_runtime() -> Option<tokio::runtime::Runtime> {
    match tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .thread_name("zview-blink")
        .enable_all()
        .build()
    {
        Ok(rt) => Some(rt),
        Err(e) => {
            tracing::warn!(error = %e, "cannot start blink runtime, caret stays steady");
            None
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = load_view_config(args.config.as_ref())?;
    let events = parse_script(&read_script(&args.script)?)?;
    tracing::info!(events = events.len(), script = %args.script, "replay start");

    let (sink, mut rx) = rpc_channel();
    let mut view = EditView::new(sink, &config);

    // Outlives `replay`, which owns the timer task.
    let runtime = if args.blink { blink_runtime() } else { None };
    let mut ticks: Option<Receiver<BlinkTick>> = None;
    if let Some(rt) = &runtime {
        let (tick_tx, tick_rx) = mpsc::channel();
        view = view.with_blink_driver(BlinkDriver::new(rt.handle().clone(), tick_tx));
        ticks = Some(tick_rx);
    }
    let mut replay = Replay::new(view, ReplayOptions { paint: args.paint });

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let stderr = io::stderr();
    let mut report = stderr.lock();

    for event in events {
        replay.apply(event, &mut report)?;
        if let Some(ticks) = &ticks {
            for _ in ticks.try_iter() {
                replay.blink_tick(Instant::now(), &mut report)?;
            }
        }
        flush_requests(&mut rx, &mut out)?;
    }
    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let Some(args) = parse_args() else {
        eprintln!("usage: zview [--paint] [--blink] [--config=PATH] <script.jsonl | ->");
        return ExitCode::from(2);
    };

    let logging_guard = logging::init();
    if logging_guard.is_none() {
        eprintln!("zview: logging disabled");
    }

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "replay failed");
            eprintln!("zview: {e}");
            if let Some(guard) = &logging_guard {
                eprintln!("zview: see logs in {}", guard.log_dir().display());
            }
            if matches!(e, ViewError::Io(_)) {
                ExitCode::from(74)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}
