//! Report rendering

mod pdf;


pub use pdf::PdfReportGenerator;
