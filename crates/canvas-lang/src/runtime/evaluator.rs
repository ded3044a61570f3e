//! Tree-walking evaluator. Walks a `Canvas` once, top to bottom, threading
//! the accumulating output buffer, and produces a `ScenePlan` describing what
//! to display and when. No terminal writes and no sleeping happen here; the
//! player drives the plan afterwards.

use std::time::Duration;

use crate::runtime::plan::{Finale, ScenePlan, Step};
use crate::runtime::render::Renderer;
use crate::runtime::state::SceneState;
use crate::syntax::ast::{Canvas, Command};

/// Hold per rainbow iteration.
const RAINBOW_HOLD: Duration = Duration::from_millis(10);
/// Lower bound on the per-frame hold of an `animate` block, in ms.
const MIN_FRAME_HOLD_MS: u64 = 50;
/// Hold per frame in the terminal frame loop.
const LOOP_HOLD: Duration = Duration::from_millis(100);

pub struct Evaluator<'a> {
    renderer: &'a dyn Renderer,
    state: SceneState,
    steps: Vec<Step>,
}

impl<'a> Evaluator<'a> {
    pub fn new(renderer: &'a dyn Renderer) -> Self {
        Self { renderer, state: SceneState::default(), steps: Vec::new() }
    }

    /// One full walk over the command tree in declaration order.
    pub fn eval(mut self, canvas: &Canvas) -> ScenePlan {
        let mut output = String::new();
        for command in &canvas.commands {
            output = self.eval_command(command, output);
        }

        // A single `frame` anywhere in the program switches the finale from a
        // one-shot print to the unbounded frame loop.
        let finale = if self.state.frames.is_empty() {
            Finale::Static(self.renderer.composite(&self.state.background, &output))
        } else {
            let frames = self.state.frames.iter()
                .map(|f| self.renderer.composite(&self.state.background, f))
                .collect();
            Finale::Loop { frames, hold: LOOP_HOLD }
        };

        ScenePlan { steps: self.steps, finale }
    }

    /// Evaluate one command against the current buffer and return the buffer
    /// that the next command sees.
    fn eval_command(&mut self, command: &Command, buffer: String) -> String {
        match command {
            Command::Background { color } => {
                self.state.background = color.clone();
                buffer
            }

            Command::Circle { radius, fill, .. } => {
                buffer + &self.renderer.circle(*radius, fill)
            }
            Command::Rect { width, height, fill, .. } => {
                buffer + &self.renderer.rect(*width, *height, fill)
            }
            Command::Text { text, color, size, .. } => {
                buffer + &self.renderer.text(text, color, *size)
            }
            Command::Line { x1, y1, x2, y2, color } => {
                buffer + &self.renderer.line(*x1, *y1, *x2, *y2, color)
            }

            Command::Variable { name, value } => {
                self.state.variables.insert(name.clone(), *value);
                buffer
            }

            Command::Wait { duration } => {
                self.steps.push(Step::Pause(Duration::from_millis(*duration)));
                buffer
            }

            // Transient hue-cycling display over the current buffer. Nothing
            // is appended; the buffer passes through unchanged.
            Command::Rainbow { text, duration, .. } => {
                for i in 0..*duration {
                    let colored = self.renderer.rainbow(text, i);
                    let surface = format!("{buffer}{colored}");
                    self.steps.push(Step::Show {
                        content: self.renderer.composite(&self.state.background, &surface),
                        hold: RAINBOW_HOLD,
                    });
                }
                buffer
            }

            // A frame renders into its own isolated buffer and lands in the
            // shared frame collection, wherever it appears in the tree.
            Command::Frame { commands } => {
                let content = self.eval_isolated(commands);
                self.state.frames.push(content);
                buffer
            }

            Command::Animate { frames, duration } => {
                self.eval_animate(frames, *duration);
                buffer
            }
        }
    }

    /// Evaluate a command list into a fresh buffer.
    fn eval_isolated(&mut self, commands: &[Command]) -> String {
        let mut content = String::new();
        for command in commands {
            content = self.eval_command(command, content);
        }
        content
    }

    /// Render each nested `frame` into its own snapshot (anything else inside
    /// the block is skipped), then emit the inline playback steps cycling
    /// through them for roughly `duration` ms.
    fn eval_animate(&mut self, frames: &[Command], duration: u64) {
        let mut rendered = Vec::new();
        for entry in frames {
            if let Command::Frame { commands } = entry {
                let content = self.eval_isolated(commands);
                rendered.push(content);
            }
        }
        if rendered.is_empty() {
            return;
        }

        let hold_ms = MIN_FRAME_HOLD_MS.max(duration / rendered.len() as u64);
        let ticks = duration.div_ceil(hold_ms);
        for i in 0..ticks {
            let frame = &rendered[i as usize % rendered.len()];
            self.steps.push(Step::Show {
                content: self.renderer.composite(&self.state.background, frame),
                hold: Duration::from_millis(hold_ms),
            });
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
