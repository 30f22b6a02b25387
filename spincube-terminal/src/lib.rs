/// Terminal frontend: drives the cube pipeline over a character-cell surface
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self},
};
use spincube_core::{CubeConfig, FrameDriver, FrameOutcome, RenderStyle};
use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::CellSurface;

/// Rolling frames-per-second estimate over one-second windows. Only frames
/// that actually rendered are counted, so pausing drops the reading to zero
/// instead of reporting the idle loop rate.
struct FpsCounter {
    window_start: Instant,
    frames: u32,
    fps: f32,
}

impl FpsCounter {
    fn new() -> Self {
        Self {
            window_start: Instant::now(),
            frames: 0,
            fps: 0.0,
        }
    }

    fn frame_rendered(&mut self) {
        self.frames += 1;
    }

    /// Refresh the estimate once a full second has elapsed.
    fn sample(&mut self, now: Instant) {
        let elapsed = now - self.window_start;
        if elapsed.as_secs() >= 1 {
            self.fps = self.frames as f32 / elapsed.as_secs_f32();
            self.frames = 0;
            self.window_start = now;
        }
    }

    fn fps(&self) -> f32 {
        self.fps
    }
}

/// Main application struct for the terminal cube
pub struct TerminalApp {
    driver: FrameDriver,
    surface: CellSurface,
    running: bool,
    paused: bool,
    fps: FpsCounter,
}

impl TerminalApp {
    pub fn new() -> io::Result<Self> {
        let (width, height) = terminal::size()?;
        let driver = FrameDriver::new(sized_config(width, height))
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

        Ok(Self {
            driver,
            surface: CellSurface::new(width as usize, height as usize),
            running: true,
            paused: false,
            fps: FpsCounter::new(),
        })
    }

    pub fn run(&mut self) -> io::Result<()> {
        terminal::enable_raw_mode()?;
        execute!(stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;

        let result = self.main_loop();

        // Cleanup
        terminal::disable_raw_mode()?;
        execute!(stdout(), terminal::LeaveAlternateScreen, cursor::Show)?;

        result
    }

    fn main_loop(&mut self) -> io::Result<()> {
        let target_frame_time = Duration::from_millis(1000 / 30); // 30 FPS target

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            if event::poll(Duration::from_millis(0))? {
                self.handle_input()?;
            }

            if !self.paused {
                self.render()?;
                self.fps.frame_rendered();
            }

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }

            self.fps.sample(Instant::now());
        }

        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        if let Event::Key(KeyEvent { code, .. }) = event::read()? {
            match code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.running = false;
                }
                KeyCode::Char('1') => {
                    self.driver.set_style(RenderStyle::Line);
                }
                KeyCode::Char('2') => {
                    self.driver.set_style(RenderStyle::Hidden);
                }
                KeyCode::Char('3') => {
                    self.driver.set_style(RenderStyle::Filled);
                }
                KeyCode::Char(' ') => {
                    self.paused = !self.paused;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn render(&mut self) -> io::Result<()> {
        let outcome = self.driver.advance_and_render(&mut self.surface);

        let mut stdout = stdout();
        queue!(stdout, cursor::MoveTo(0, 0))?;

        self.surface.draw(&mut stdout)?;

        let faces = match outcome {
            FrameOutcome::Rendered { visible_faces } => format!("{visible_faces} faces"),
            FrameOutcome::Skipped => "frame skipped".to_string(),
        };
        queue!(
            stdout,
            cursor::MoveTo(0, 0),
            SetForegroundColor(Color::Yellow),
            Print(format!(
                "Spincube | FPS: {:.1} | {} | {faces} | 1=line 2=hidden 3=filled Space=pause Q=quit",
                self.fps.fps(),
                style_name(self.driver.style()),
            )),
            ResetColor
        )?;

        stdout.flush()?;
        Ok(())
    }
}

fn style_name(style: RenderStyle) -> &'static str {
    match style {
        RenderStyle::Line => "line",
        RenderStyle::Hidden => "hidden",
        RenderStyle::Filled => "filled",
    }
}

/// Scale the stock configuration to the terminal: keep the original
/// size-to-distance ratio, sized to the smaller logical axis (the surface
/// exposes two logical rows per cell) so the cube never leaves the grid.
fn sized_config(width: u16, height: u16) -> CubeConfig {
    let fit = width.min(height * 2).max(4) as f32 / 2.0;
    let half_extent = (fit * 0.35).max(1.0);
    CubeConfig {
        half_extent,
        view_distance: half_extent * 5.12,
        ..CubeConfig::default()
    }
}
