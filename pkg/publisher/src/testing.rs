//! In-memory stand-ins for the charting service and the id store.

use anyhow::Result;
use pkg_datawrapper::{ApiError, ChartApi};
use pkg_types::map::MapId;
use pkg_types::metadata::{CreateChartRequest, MetadataUpdate};
use pkg_types::publish::PublishResult;
use std::cell::RefCell;

use crate::store::MapIdStore;

pub const SNIPPET: &str = "<iframe title=\"Irish Covid19 Cases\" id=\"datawrapper-chart-nEw42\"></iframe>";

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Create(CreateChartRequest),
    Patch(MapId, MetadataUpdate),
    PutData(MapId, String),
    Publish(MapId),
}

/// Records every call; operations named in `failing` return a 500.
pub struct FakeChartApi {
    calls: RefCell<Vec<Call>>,
    failing: Vec<&'static str>,
    new_id: String,
    embed_codes: bool,
}

impl FakeChartApi {
    pub fn new() -> Self {
        Self {
            calls: RefCell::new(Vec::new()),
            failing: Vec::new(),
            new_id: "nEw42".to_string(),
            embed_codes: true,
        }
    }

    /// Make `op` (`create`, `patch`, `put`, `publish`) fail.
    pub fn failing(mut self, op: &'static str) -> Self {
        self.failing.push(op);
        self
    }

    /// Publish succeeds but returns no embed codes.
    pub fn without_embed_codes(mut self) -> Self {
        self.embed_codes = false;
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn check(&self, op: &'static str, url: String) -> Result<(), ApiError> {
        if self.failing.contains(&op) {
            return Err(ApiError::Status {
                method: "FAKE",
                url,
                status: 500,
                body: format!("{} rejected", op),
            });
        }
        Ok(())
    }
}

impl ChartApi for FakeChartApi {
    fn create_chart(&self, request: &CreateChartRequest) -> Result<MapId, ApiError> {
        self.calls.borrow_mut().push(Call::Create(request.clone()));
        self.check("create", "/v3/charts".to_string())?;
        Ok(MapId::new(self.new_id.clone()))
    }

    fn patch_metadata(&self, id: &MapId, update: &MetadataUpdate) -> Result<(), ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::Patch(id.clone(), update.clone()));
        self.check("patch", format!("/v3/charts/{}", id))
    }

    fn put_data(&self, id: &MapId, body: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(Call::PutData(id.clone(), body));
        self.check("put", format!("/v3/charts/{}/data", id))
    }

    fn publish(&self, id: &MapId) -> Result<PublishResult, ApiError> {
        self.calls.borrow_mut().push(Call::Publish(id.clone()));
        self.check("publish", format!("/charts/{}/publish", id))?;
        if !self.embed_codes {
            let body = serde_json::json!({"data": {"metadata": {"publish": {}}}});
            return Ok(serde_json::from_value(body).expect("fake publish body"));
        }
        let body = serde_json::json!({
            "data": {
                "id": id.as_str(),
                "metadata": {
                    "publish": {
                        "embed-codes": {
                            "embed-method-responsive": SNIPPET,
                            "embed-method-iframe": "<iframe></iframe>"
                        }
                    }
                }
            }
        });
        Ok(serde_json::from_value(body).expect("fake publish body"))
    }
}

/// Id store that remembers what was saved.
#[derive(Default)]
pub struct MemoryStore {
    pub initial: Option<MapId>,
    pub saved: Vec<MapId>,
}

impl MapIdStore for MemoryStore {
    fn load(&self) -> Option<MapId> {
        self.saved.last().cloned().or_else(|| self.initial.clone())
    }

    fn save(&mut self, id: &MapId) -> Result<()> {
        self.saved.push(id.clone());
        Ok(())
    }
}
