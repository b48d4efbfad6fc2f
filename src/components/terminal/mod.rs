mod input;
mod output;
mod screen;
mod terminal;

pub use input::Input;
pub use output::Output;
pub use screen::Screen;
pub use terminal::Terminal;
