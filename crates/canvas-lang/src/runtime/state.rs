use std::collections::HashMap;

/// Mutable scene state owned by the evaluator for the length of one run.
#[derive(Debug, Clone)]
pub struct SceneState {
    /// Active background color. Commands may override it at any point; the
    /// value current at each composite point wins.
    pub background: String,
    /// `var` declarations. Recorded but not yet interpolated into other
    /// commands.
    pub variables: HashMap<String, f64>,
    /// Snapshots collected from top-level and nested `frame` blocks, in
    /// declaration order.
    pub frames: Vec<String>,
}

impl Default for SceneState {
    fn default() -> Self {
        Self {
            background: "black".to_string(),
            variables: HashMap::new(),
            frames: Vec::new(),
        }
    }
}
