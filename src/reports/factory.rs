use std::sync::Arc;
use crate::core::clock::Clock;
use crate::core::state::SharedState;
use crate::reports::domain::ReportService;
use crate::reports::domain::service::ReportServiceImpl;

pub fn create_report_service(state: SharedState, clock: Arc<dyn Clock>) -> Box<dyn ReportService> {
    Box::new(ReportServiceImpl::new(state, clock))
}
