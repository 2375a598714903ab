use ascii_textr::PathProvider;
use std::path::PathBuf;

/// Native "open file" dialog
pub struct DialogPathProvider;

impl PathProvider for DialogPathProvider {
    fn pick_image(&self) -> Option<PathBuf> {
        log::debug!("no image path given, opening file picker");
        rfd::FileDialog::new()
            .set_title("Select an image file")
            .add_filter("Image Files", &["png", "jpg", "jpeg"])
            .add_filter("All Files", &["*"])
            .pick_file()
    }
}
