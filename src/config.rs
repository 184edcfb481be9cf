use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ImportConfig {
    /// Log skipped entities at info level instead of debug.
    pub verbose: bool,
    /// Draw a progress bar while iterating records.
    pub show_progress: bool,
    /// Delay requested for the library reload that follows each import.
    pub reload_delay: Duration,
    /// Also link lights into the scene's root collection.
    pub link_lights_to_scene_root: bool,
}

impl Default for ImportConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            show_progress: false,
            reload_delay: Duration::from_millis(10),
            link_lights_to_scene_root: true,
        }
    }
}
