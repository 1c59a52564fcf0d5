pub mod browser;
pub mod page;

pub use browser::{BrowserViewer, ViewerConfig};

use crate::error::Result;
use crate::figure::Figure;

/// Something that can put a figure in front of the user.
///
/// `show` blocks until the figure has been dismissed.
pub trait Viewer {
    fn show(&mut self, figure: &Figure) -> Result<()>;
}
