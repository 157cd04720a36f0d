//! Output renderers: a self-contained HTML report and a timeline CSV.

pub mod csv;
pub mod html;

pub use self::csv::render_timeline_csv;
pub use self::html::render_html_report;
