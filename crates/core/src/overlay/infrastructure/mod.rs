pub mod laughing_man_renderer;
