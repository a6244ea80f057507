//! Embassy tasks

mod blinker;
mod renderer;
mod spawner;
mod victory;

pub use blinker::blinker_task;
pub use renderer::renderer_task;
pub use spawner::spawner_task;
pub use victory::victory_task;
