mod home;
pub use home::Home;

mod upload;
pub use upload::UploadIngredients;
