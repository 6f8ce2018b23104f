pub mod prompts;
pub mod render;

pub use prompts::{
    prompt_action, prompt_edit, prompt_ingredient, prompt_line_index, prompt_number, prompt_path,
    prompt_simulation_name, prompt_yes_no, Action,
};
pub use render::{display_comparison, display_summary, display_working_set};
