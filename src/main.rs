//! `rolodex`: scroll a cylinder of links with the mouse.
//!
//! Wheel or drag to rotate, click an item to open it, `q`/`Esc`/`Ctrl+C`
//! to quit.

use clap::Parser;
use crossbeam_channel::select;
use rolodex::{
    config, Engine, InputEvent, KeyCode, Layout, Rect, RegionId, Rolodex, StatusBar, TickerActor, Widget,
};
use std::path::PathBuf;

const WHEEL: RegionId = RegionId(1);
const FOOTER: RegionId = RegionId(2);
const WHEEL_WIDTH: u16 = 64;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file (TOML); defaults to the platform config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() -> Result<(), rolodex::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();
    let settings = config::load(args.config.as_deref())?;

    let mut engine = Engine::with_config(settings.engine.to_engine_config())?;
    let mut layout = build_layout(engine.width(), engine.height());

    let mut wheel = Rolodex::mount(&layout, WHEEL, &settings.rolodex);
    let mut footer = StatusBar::new(layout.get(FOOTER).unwrap_or(Rect::ZERO));
    footer.set_left("wheel/drag: scroll  click: open  q: quit");
    wheel.set_running(!wheel.bounds().is_empty());

    let ticker = TickerActor::at_fps(engine.config().target_fps)?;
    let input = engine.input_receiver().clone();

    draw(&mut engine, &wheel, &footer);
    engine.redraw();

    while engine.is_running() {
        select! {
            recv(input) -> event => {
                let Ok(event) = event else {
                    engine.stop();
                    continue;
                };
                match event {
                    InputEvent::Key { code: KeyCode::Esc | KeyCode::Char('q'), .. } => engine.stop(),
                    InputEvent::Key { code: KeyCode::Char('c'), modifiers } if modifiers.control => engine.stop(),
                    InputEvent::Resize { width, height } => {
                        engine.handle_resize(width, height);
                        let size = (engine.width(), engine.height());
                        if layout.terminal_size() != size {
                            layout = build_layout(size.0, size.1);
                            wheel.remount(&layout);
                            footer.set_bounds(layout.get(FOOTER).unwrap_or(Rect::ZERO));
                        }
                        // Nothing to animate in a region with no rows
                        wheel.set_running(!wheel.bounds().is_empty());
                        draw(&mut engine, &wheel, &footer);
                        engine.redraw();
                    }
                    InputEvent::Error(e) => log::warn!("Input error: {e}"),
                    InputEvent::Shutdown => engine.stop(),
                    other => {
                        wheel.handle_input(&other);
                    }
                }
            }
            recv(ticker.receiver()) -> tick => {
                if tick.is_err() {
                    engine.stop();
                    continue;
                }
                wheel.tick();
                if let Some(activation) = wheel.take_activation() {
                    footer.set_right(format!("{} -> {}", activation.code, activation.url));
                }
                if wheel.needs_redraw() || footer.needs_redraw() {
                    draw(&mut engine, &wheel, &footer);
                    engine.present();
                }
                wheel.clear_redraw();
                footer.clear_redraw();
            }
        }
    }

    ticker.join();
    Ok(())
}

/// Wheel centred above a one-row footer.
fn build_layout(width: u16, height: u16) -> Layout {
    let mut layout = Layout::new(width, height);
    let (body, footer) = Rect::from_size(width, height).split_vertical(height.saturating_sub(1));
    layout.insert(WHEEL, body.centered(WHEEL_WIDTH, body.height));
    layout.insert(FOOTER, footer);
    layout
}

fn draw(engine: &mut Engine, wheel: &Rolodex, footer: &StatusBar) {
    let buffer = engine.buffer_mut();
    buffer.clear();
    wheel.render(buffer);
    footer.render(buffer);
}
