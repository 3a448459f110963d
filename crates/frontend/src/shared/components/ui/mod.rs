pub mod input;
pub mod multi_select;
pub mod select;

pub use input::Input;
pub use multi_select::MultiSelect;
pub use select::Select;
