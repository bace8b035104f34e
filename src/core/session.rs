//! Terminal session: drives the clock tick and input events
//!
//! Everything runs on one task. A `tokio::select!` loop waits for the
//! shutdown signal, the next input line, or the next interval tick, applies
//! it synchronously, and redraws. Input lines arrive over a channel from a
//! reader thread, so shutdown never waits on a blocked terminal read.

use super::{BinaryClock, CubeRotator};
use crate::displayers::{render_frame, TerminalClockFace, TerminalCube};
use crate::ui::{Command, CommandError};
use anyhow::{Context, Result};
use bitcube_core::BoxedTimeSource;
use log::{debug, error, info, trace, warn};
use std::future::Future;
use std::io::Write;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

/// ANSI clear screen + cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

/// What the loop does after handling a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<'a> {
    clock: BinaryClock<&'a mut TerminalClockFace>,
    cube: Option<CubeRotator<&'a mut TerminalCube>>,
    source: BoxedTimeSource,
    clear_screen: bool,
}

impl<'a> Session<'a> {
    pub fn new(
        clock: BinaryClock<&'a mut TerminalClockFace>,
        cube: Option<CubeRotator<&'a mut TerminalCube>>,
        source: BoxedTimeSource,
    ) -> Self {
        Self {
            clock,
            cube,
            source,
            clear_screen: true,
        }
    }

    /// Emit frames without the ANSI clear prefix
    pub fn without_clear_screen(mut self) -> Self {
        self.clear_screen = false;
        self
    }

    /// Refresh the time source; a failed refresh keeps the previous reading
    fn refresh_source(&mut self) {
        if let Err(e) = self.source.update() {
            error!("Error updating time source {}: {}", self.source.id(), e);
        }
    }

    /// Periodic update
    pub fn on_tick(&mut self) {
        let start = Instant::now();
        self.refresh_source();
        let reading = self.source.reading();
        self.clock.tick(&reading);
        trace!("Update cycle took {:?}", start.elapsed());
    }

    /// Apply one input event
    pub fn handle(&mut self, command: Command) -> Flow {
        match command {
            Command::ToggleDisplay => {
                self.refresh_source();
                let reading = self.source.reading();
                self.clock.toggle_display_mode(&reading);
            }
            Command::ToggleHour => {
                self.refresh_source();
                let reading = self.source.reading();
                self.clock.toggle_hour_mode(&reading);
            }
            Command::Press(pos) => {
                if let Some(cube) = self.cube.as_mut() {
                    cube.press(pos);
                }
            }
            Command::Move(pos) => {
                if let Some(cube) = self.cube.as_mut() {
                    cube.moved(pos);
                }
            }
            Command::Release => {
                if let Some(cube) = self.cube.as_mut() {
                    cube.release();
                }
            }
            Command::Leave => {
                if let Some(cube) = self.cube.as_mut() {
                    cube.leave();
                }
            }
            Command::Redraw => {}
            Command::Quit => return Flow::Quit,
        }
        Flow::Continue
    }

    /// Current frame text
    pub fn frame(&self) -> String {
        let cube = self.cube.as_ref().map(|cube| &**cube.target());
        render_frame(self.clock.surface(), cube)
    }

    /// Write the current frame
    pub fn draw<W: Write>(&self, out: &mut W) -> Result<()> {
        if self.clear_screen {
            out.write_all(CLEAR_SCREEN.as_bytes())?;
        }
        out.write_all(self.frame().as_bytes())?;
        out.flush().context("Failed to flush frame")?;
        Ok(())
    }

    /// Run until `quit`, end of input, or `shutdown` resolves
    pub async fn run<W, F>(
        mut self,
        mut input: mpsc::Receiver<String>,
        interval: Duration,
        out: &mut W,
        shutdown: F,
    ) -> Result<()>
    where
        W: Write,
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        info!("Clock running, ticking every {:?}", interval);
        loop {
            tokio::select! {
                biased;

                _ = &mut shutdown => {
                    info!("Interrupted");
                    break;
                }
                line = input.recv() => {
                    let Some(line) = line else {
                        debug!("Input closed");
                        break;
                    };
                    match line.parse::<Command>() {
                        Ok(command) => {
                            if self.handle(command) == Flow::Quit {
                                break;
                            }
                        }
                        Err(CommandError::Empty) => continue,
                        Err(e) => warn!("Ignoring input: {}", e),
                    }
                }
                _ = ticker.tick() => self.on_tick(),
            }
            self.draw(out)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bitcube_core::{
        ClockEncoder, ClockReading, DragRotator, PointerPos, Slot, TimeSource,
    };

    /// Source that advances one second on every refresh
    struct SteppingSource {
        reading: ClockReading,
    }

    impl TimeSource for SteppingSource {
        fn id(&self) -> &str {
            "stepping"
        }

        fn update(&mut self) -> Result<()> {
            self.reading.second += 1;
            Ok(())
        }

        fn reading(&self) -> ClockReading {
            self.reading
        }
    }

    /// Source whose refresh always fails
    struct BrokenSource;

    impl TimeSource for BrokenSource {
        fn id(&self) -> &str {
            "broken"
        }

        fn update(&mut self) -> Result<()> {
            anyhow::bail!("clock unavailable")
        }

        fn reading(&self) -> ClockReading {
            reading()
        }
    }

    fn reading() -> ClockReading {
        ClockReading::new(2024, 3, 17, 23, 5, 9)
    }

    fn source() -> BoxedTimeSource {
        Box::new(SteppingSource { reading: reading() })
    }

    fn runtime() -> tokio::runtime::Runtime {
        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap()
    }

    fn input_lines(lines: &[&str]) -> mpsc::Receiver<String> {
        let (tx, rx) = mpsc::channel(lines.len().max(1));
        for line in lines {
            tx.try_send(line.to_string()).unwrap();
        }
        rx
    }

    #[test]
    fn test_handle_toggles_and_drag() {
        let mut face = TerminalClockFace::new();
        let mut cube = TerminalCube::default();
        {
            let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
            let rotator = CubeRotator::attach(&mut cube, DragRotator::default()).unwrap();
            let mut session = Session::new(clock, Some(rotator), source());

            assert_eq!(session.handle(Command::ToggleDisplay), Flow::Continue);
            session.handle(Command::Press(PointerPos::new(10.0, 10.0)));
            session.handle(Command::Move(PointerPos::new(20.0, 10.0)));
            assert!(session.frame().contains("cursor: grabbing  transition: none"));
            session.handle(Command::Leave);
            assert_eq!(session.handle(Command::Quit), Flow::Quit);
        }

        assert_eq!(face.text(Slot::Hours), Some("0010 0011"));
        assert_eq!(face.text(Slot::Seconds), Some("0001 0000"));
        assert!(face.bcd_active());
        assert_eq!(cube.rotation().yaw, 34.0);
        assert!(cube.transitions_enabled());
        assert!(!cube.is_grabbing());
    }

    #[test]
    fn test_pointer_events_ignored_without_cube() {
        let mut face = TerminalClockFace::new();
        let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
        let mut session = Session::new(clock, None, source());

        assert_eq!(session.handle(Command::Press(PointerPos::new(1.0, 1.0))), Flow::Continue);
        assert_eq!(session.handle(Command::Move(PointerPos::new(5.0, 1.0))), Flow::Continue);
        assert!(session.frame().contains("rotation disabled"));
    }

    #[test]
    fn test_tick_refreshes_source_before_encoding() {
        let mut face = TerminalClockFace::new();
        {
            let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
            let mut session = Session::new(clock, None, source());
            session.on_tick();
        }
        assert_eq!(face.text(Slot::Seconds), Some("001010"));
    }

    #[test]
    fn test_failed_refresh_keeps_previous_reading() {
        let mut face = TerminalClockFace::new();
        {
            let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
            let mut session = Session::new(clock, None, Box::new(BrokenSource));
            session.on_tick();
        }
        assert_eq!(face.text(Slot::Seconds), Some("001001"));
    }

    #[test]
    fn test_run_processes_input_until_quit() {
        let mut face = TerminalClockFace::new();
        let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
        let session = Session::new(clock, None, source()).without_clear_screen();
        let input = input_lines(&["b", "bogus", "", "h", "q"]);
        let mut out = Vec::new();

        runtime()
            .block_on(session.run(
                input,
                Duration::from_secs(60),
                &mut out,
                std::future::pending(),
            ))
            .unwrap();

        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("[*BCD*]  [ 12/24 0001 0010 ]"));
        assert!(output.contains("[*BCD*]  [ 12/24 0010 0100 ]"));
        assert!(!output.contains(CLEAR_SCREEN));
        assert_eq!(face.text(Slot::Hours), Some("0001 0001"));
    }

    #[test]
    fn test_run_stops_at_end_of_input() {
        let mut face = TerminalClockFace::new();
        let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
        let session = Session::new(clock, None, source());
        let mut out = Vec::new();

        let result = runtime().block_on(session.run(
            input_lines(&[]),
            Duration::from_secs(60),
            &mut out,
            std::future::pending(),
        ));

        assert!(result.is_ok());
    }

    #[test]
    fn test_run_returns_on_interrupt_while_input_is_open() {
        let mut face = TerminalClockFace::new();
        let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
        let session = Session::new(clock, None, source());
        // Sender stays alive, so no line and no end of input ever arrive
        let (_tx, input) = mpsc::channel::<String>(1);
        let mut out = Vec::new();

        let result = runtime().block_on(session.run(
            input,
            Duration::from_secs(60),
            &mut out,
            std::future::ready(()),
        ));

        assert!(result.is_ok());
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_returns_on_later_interrupt() {
        let mut face = TerminalClockFace::new();
        let clock = BinaryClock::attach(&mut face, ClockEncoder::default(), &reading()).unwrap();
        let session = Session::new(clock, None, source()).without_clear_screen();
        let (_tx, input) = mpsc::channel::<String>(1);
        let mut out = Vec::new();

        let rt = runtime();
        let _guard = rt.enter();
        let result = rt.block_on(session.run(
            input,
            Duration::from_secs(60),
            &mut out,
            tokio::time::sleep(Duration::from_millis(20)),
        ));

        assert!(result.is_ok());
        // The first tick fires immediately and draws one frame
        assert!(String::from_utf8(out).unwrap().contains("HOURS"));
    }
}
