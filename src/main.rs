use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use nursery_scene::view::{ViewAction, ViewKey};
use nursery_scene::{State, ViewerOptions};
use winit::{
    dpi::LogicalSize,
    event::*,
    event_loop::EventLoop,
    keyboard::PhysicalKey,
    window::{CursorGrabMode, WindowBuilder},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Window width in pixels
    #[arg(long, default_value_t = 1000)]
    width: u32,

    /// Window height in pixels
    #[arg(long, default_value_t = 800)]
    height: u32,

    /// Directory holding the scene's texture images
    #[arg(long, default_value = "textures")]
    textures: PathBuf,

    /// Initial vertical field of view in degrees (1-90)
    #[arg(long, default_value_t = 80.0)]
    fov: f32,
}

impl From<Args> for ViewerOptions {
    fn from(args: Args) -> Self {
        Self {
            width: args.width,
            height: args.height,
            texture_dir: args.textures,
            fov: args.fov,
        }
    }
}

/// Pixels scrolled per unit of movement-speed change.
const PIXELS_PER_SCROLL_LINE: f32 = 40.0;

fn capture_cursor(state: &mut State) {
    let window = state.window();
    let grabbed = window
        .set_cursor_grab(CursorGrabMode::Confined)
        .or_else(|_| window.set_cursor_grab(CursorGrabMode::Locked));
    if let Err(err) = grabbed {
        log::warn!("Could not capture cursor: {}", err);
    }
    window.set_cursor_visible(false);
    state.capture_pointer();
}

fn run(options: ViewerOptions) -> anyhow::Result<()> {
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Nursery")
        .with_inner_size(LogicalSize::new(options.width, options.height))
        .build(&event_loop)?;

    let mut state = State::new(window, &options)?;
    let mut cursor_captured = false;

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { window_id, event } if window_id == state.window().id() => match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: key_state,
                        ..
                    },
                ..
            } => {
                if let Some(key) = ViewKey::from_key_code(code) {
                    state.process_keyboard(key, key_state == ElementState::Pressed);
                }
            }
            WindowEvent::MouseInput {
                state: ElementState::Pressed,
                button: MouseButton::Left,
                ..
            } => {
                if !cursor_captured {
                    capture_cursor(&mut state);
                    cursor_captured = true;
                }
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let amount = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(position) => position.y as f32 / PIXELS_PER_SCROLL_LINE,
                };
                state.process_scroll(amount);
            }
            WindowEvent::Resized(new_size) => state.resize(new_size),
            WindowEvent::RedrawRequested => match state.render() {
                Ok(()) => {}
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                    let size = state.size();
                    state.resize(size);
                }
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("Out of GPU memory, exiting");
                    elwt.exit();
                }
                Err(err) => log::warn!("Dropped frame: {}", err),
            },
            _ => {}
        },
        Event::DeviceEvent {
            event: DeviceEvent::MouseMotion { delta },
            ..
        } if cursor_captured => {
            state.process_mouse_motion(delta.0, delta.1);
        }
        Event::AboutToWait => {
            if state.update() == ViewAction::Exit {
                elwt.exit();
            } else {
                state.window().request_redraw();
            }
        }
        _ => {}
    })?;

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(args.into()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
