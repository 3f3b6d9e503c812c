pub mod color;
pub mod geom;
pub mod metrics;
pub mod painter;

pub use color::Color;
pub use geom::{Point, Rect};
pub use metrics::{FontMetrics, MonospaceLayout, TextDrawingMetrics, TextLayout};
pub use painter::{PaintCmd, Painter};
