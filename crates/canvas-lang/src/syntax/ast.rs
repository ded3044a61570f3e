//! The command tree. Built once by the parser, walked once by the evaluator,
//! in declaration order. Later `background` commands override earlier ones and
//! draw commands accumulate into the active buffer in sequence, so order is
//! semantically meaningful.

/// Root of a scene description: `canvas { ... }`. Exactly one per program.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub commands: Vec<Command>,
}

/// One instruction of the scene language.
///
/// String fields fall in two groups. Display text (`Text::text`,
/// `Rainbow::text`) has its quotes stripped by the parser. Color fields
/// (`color`, `fill`) carry the raw quoted literal; the color pipeline strips
/// quotes when resolving the color.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// `background "red";`
    Background { color: String },
    /// `circle at(x, y) radius r fill "blue";`
    Circle { x: f64, y: f64, radius: f64, fill: String },
    /// `rect at(x, y) width w height h fill "blue";`
    Rect { x: f64, y: f64, width: f64, height: f64, fill: String },
    /// `text "hi" at(x, y) size 20 color "white";`
    Text { text: String, x: f64, y: f64, size: u32, color: String },
    /// `line from(x1, y1) to(x2, y2) color "gray";`
    Line { x1: f64, y1: f64, x2: f64, y2: f64, color: String },
    /// `var name = 3.5;` — stored in scene state, not yet interpolated
    /// into other commands.
    Variable { name: String, value: f64 },
    /// `rainbow "hi" at(x, y) duration 50;` — transient hue-cycling display.
    Rainbow { text: String, x: f64, y: f64, duration: u64 },
    /// `wait 100;` — pause in milliseconds.
    Wait { duration: u64 },
    /// `frame { ... }` — renders its commands into an isolated snapshot
    /// collected for the terminal frame loop.
    Frame { commands: Vec<Command> },
    /// `animate { frame {...} ... } for 1000;` — plays its frames once,
    /// inline, over the given total duration in milliseconds.
    Animate { frames: Vec<Command>, duration: u64 },
}
