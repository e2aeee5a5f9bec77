mod view;
mod view_model;

pub use view::CategoryFormModal;
pub use view_model::CategoryFormVm;
