mod view;
mod view_model;

pub use view::ProductFormModal;
pub use view_model::ProductFormVm;
