pub mod evaluator;
pub mod plan;
pub mod render;
pub mod state;

pub use evaluator::Evaluator;
pub use plan::{Finale, ScenePlan, Step};
pub use render::Renderer;
pub use state::SceneState;
