mod custom_subplots;
pub use custom_subplots::CustomSubplots;

mod fixed_subplots;
pub use fixed_subplots::FixedSubplots;

mod home;
pub use home::Home;

mod not_found;
pub use not_found::NotFound;

mod shared_axes;
pub use shared_axes::SharedAxes;

mod subplot_layout;
pub use subplot_layout::SubplotLayout;
