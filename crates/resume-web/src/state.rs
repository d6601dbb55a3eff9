use std::sync::Arc;

use resume_core::{EntityOracle, PdfBackend};
use resume_parsing::ResumeExtractor;

pub struct AppState {
    pub backend: Arc<dyn PdfBackend>,
    pub oracle: Box<dyn EntityOracle>,
    pub extractor: ResumeExtractor,
}
