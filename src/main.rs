use anim_core::{AnimationParams, FrameDriver, Viewport};
use winit::{event::Event, event_loop::EventLoop, window::WindowBuilder};

mod constants;
mod events;
mod frame;
mod input;
mod render;
mod tween;

use constants::{FIELD_FLAG, REPORT_INTERVAL_SEC, WINDOW_TITLE};
use frame::FrameContext;
use render::LogRenderer;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let params = if std::env::args().any(|a| a == FIELD_FLAG) {
        AnimationParams::particle_field()
    } else {
        AnimationParams::default()
    };

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(WINDOW_TITLE)
        .build(&event_loop)?;

    let size = window.inner_size();
    let viewport = Viewport::new(size.width.max(1) as f32, size.height.max(1) as f32)?;
    let driver = FrameDriver::new(params, viewport)?;
    let mut ctx = FrameContext::new(driver, LogRenderer::new(REPORT_INTERVAL_SEC));
    log::info!("[host] scroll with the wheel, Z toggles particle mode, Up/Down tune parallax");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => {
            if !ctx.handle(&event) {
                elwt.exit();
            }
        }
        Event::AboutToWait => window.request_redraw(),
        _ => {}
    })?;
    Ok(())
}
