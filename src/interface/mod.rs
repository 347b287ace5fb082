pub mod prompts;
pub mod render;

pub use prompts::{
    collect_estimate_request, prompt_dish_name, prompt_serving_size, prompt_serving_unit,
    prompt_yes_no,
};
pub use render::{display_food_list, display_record};
