use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};

use crossinput::config::DispatchPolicy;
use crossinput::{Config, InputSession, Script, SourceCapabilities, SyntheticSource};

#[derive(Parser, Debug)]
#[command(name = "crossinput")]
#[command(
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("CROSSINPUT_GIT_HASH"), ")"),
    about = "Replay raw input scripts through the normalization session"
)]
struct Cli {
    /// Signal script to replay (TOML). Runs a small built-in demo when omitted
    #[arg(value_name = "SCRIPT")]
    script: Option<PathBuf>,

    /// Load configuration from this file instead of the default location
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Dispatch policy override (immediate or queued)
    #[arg(long, short = 'p', value_name = "POLICY")]
    policy: Option<String>,

    /// Advertise the source without pointer lock support
    #[arg(long, action = ArgAction::SetTrue)]
    no_pointer_lock: bool,

    /// Advertise the source without fullscreen support
    #[arg(long, action = ArgAction::SetTrue)]
    no_fullscreen: bool,

    /// Print a state summary after the script finishes
    #[arg(long, short = 's', action = ArgAction::SetTrue)]
    show_state: bool,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(raw) = &cli.policy {
        config.dispatch.policy = raw.parse::<DispatchPolicy>().map_err(anyhow::Error::msg)?;
    }

    let capabilities = SourceCapabilities {
        pointer_lock: config.source.pointer_lock && !cli.no_pointer_lock,
        fullscreen: config.source.fullscreen && !cli.no_fullscreen,
    };

    let script = match &cli.script {
        Some(path) => Script::load(path)?,
        None => {
            log::info!("No script given, replaying built-in demo");
            Script::demo()
        }
    };

    let policy = config.dispatch.policy;
    let mut session = InputSession::with_config(
        SyntheticSource::with_capabilities(capabilities),
        config.dispatch,
    );
    install_trace_callbacks(&mut session);

    log::info!(
        "Replaying {} signal(s) with {policy} dispatch",
        script.signals.len()
    );
    for signal in script.signals {
        session.ingest(signal);
    }
    if policy == DispatchPolicy::Queued {
        let delivered = session.poll_events();
        log::info!("Delivered {delivered} queued event(s)");
    }
    if session.dropped_events() > 0 {
        log::warn!("{} event(s) were dropped", session.dropped_events());
    }

    if cli.show_state || config.trace.show_state {
        print_state_summary(&session);
    }

    Ok(())
}

/// Installs one printing callback per event kind, so a replayed script turns
/// into a line-per-event trace on stdout.
fn install_trace_callbacks(session: &mut InputSession<SyntheticSource>) {
    session.set_key_callback(|key, _scancode, action, mods| {
        println!("key {key:?} {action} mods={mods}");
    });
    session.set_mouse_button_callback(|button, action, mods| {
        println!("mouse-button {button} {action} mods={mods}");
    });
    session.set_cursor_pos_callback(|x, y| {
        println!("cursor-pos {x} {y}");
    });
    session.set_mouse_movement_callback(|x, y, dx, dy| {
        println!("mouse-movement {x} {y} {dx} {dy}");
    });
    session.set_scroll_callback(|xoff, yoff| {
        println!("scroll {xoff} {yoff}");
    });
    session.set_framebuffer_size_callback(|width, height| {
        println!("framebuffer-size {width} {height}");
    });
    session.set_size_callback(|width, height| {
        println!("window-size {width} {height}");
    });
}

fn print_state_summary(session: &InputSession<SyntheticSource>) {
    let (x, y) = session.get_cursor_pos();
    let (width, height) = session.get_window_size();
    let (fb_width, fb_height) = session.get_framebuffer_size();
    println!(
        "state: cursor=({x}, {y}) window={width}x{height} framebuffer={fb_width}x{fb_height} \
         cursor-mode={} touches={} dropped={}",
        session.cursor_mode(),
        session.touch_points().len(),
        session.dropped_events()
    );
}
