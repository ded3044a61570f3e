//! Drives a `ScenePlan` against a terminal: timed in-place redraws for the
//! step sequence, then either one final print or the unbounded frame loop.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use canvas_lang::{Finale, ScenePlan, Step};

pub struct Player<W: Write> {
    out: W,
    /// Lines occupied by the live display region, for in-place overwriting.
    live_lines: usize,
}

impl<W: Write> Player<W> {
    pub fn new(out: W) -> Self {
        Self { out, live_lines: 0 }
    }

    /// Play the whole plan. A `Loop` finale never returns when `loop_limit`
    /// is `None`; tests pass a bounded lap count instead.
    pub fn play(&mut self, plan: &ScenePlan, loop_limit: Option<usize>) -> io::Result<()> {
        for step in &plan.steps {
            match step {
                Step::Show { content, hold } => {
                    self.show(content)?;
                    pause(*hold);
                }
                Step::Pause(duration) => pause(*duration),
            }
        }

        match &plan.finale {
            Finale::Static(content) => {
                writeln!(self.out, "{content}")?;
                self.out.flush()
            }
            Finale::Loop { frames, hold } => {
                let mut laps = 0usize;
                loop {
                    for frame in frames {
                        self.show(frame)?;
                        pause(*hold);
                    }
                    laps += 1;
                    if loop_limit.is_some_and(|limit| laps >= limit) {
                        return Ok(());
                    }
                }
            }
        }
    }

    /// Overwrite the previous live region: jump the cursor back to its first
    /// line, erase downward, and write the new content. Writes never
    /// interleave; each call fully replaces the displayed region.
    fn show(&mut self, content: &str) -> io::Result<()> {
        if self.live_lines > 0 {
            write!(self.out, "\x1b[{}F\x1b[0J", self.live_lines)?;
        }
        writeln!(self.out, "{content}")?;
        self.out.flush()?;
        self.live_lines = content.matches('\n').count() + 1;
        Ok(())
    }
}

fn pause(duration: Duration) {
    if !duration.is_zero() {
        thread::sleep(duration);
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
