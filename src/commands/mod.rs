pub mod check;
pub mod completions;
pub mod matrix;
pub mod run;
pub mod settings;
pub mod versions;
