use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracer_common::config::{ConfigSource, FileConfig};
use tracer_common::constants::{EVENTS_PATH, LABELS_PATH, TRACERS_PATH, TRACER_SERVER_KEY};
use tracer_common::types::{Label, LabelId, Request, Tracer, TracerEvent, TracerId};
use tracing::{trace, warn};
use url::Url;

use crate::endpoint::endpoint_url;
use crate::error::{ClientError, EventSubmitFailure, Result};
use crate::transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};

/// Typed access to the tracer API.
///
/// Every call runs the same pipeline once: encode the body, resolve the server
/// address from configuration, send, then decode. Nothing is retried and the
/// client keeps no state between calls.
pub struct RemoteStoreClient<C, T> {
    config: C,
    transport: T,
}

impl RemoteStoreClient<FileConfig, ReqwestTransport> {
    pub fn from_config(config: FileConfig) -> Self {
        Self::new(config, ReqwestTransport::new())
    }
}

impl<C: ConfigSource, T: HttpTransport> RemoteStoreClient<C, T> {
    pub fn new(config: C, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Posts a request bundle to `/tracers`. The response body is discarded.
    pub async fn add_tracers(&self, request: &Request) -> Result<()> {
        trace!("Adding the following tracers: {:?}", request.tracers);
        self.post_json("tracer request", &[TRACERS_PATH], request).await
    }

    pub async fn get_tracers(&self) -> Result<Vec<Tracer>> {
        trace!("Getting all the tracers");
        self.get_json("tracers", &[TRACERS_PATH]).await
    }

    /// Submits every event to the tracer it is keyed by.
    ///
    /// Events are sent one after another in ascending tracer id order, and a
    /// failure never stops the remaining submissions. The returned list holds
    /// one entry per event that failed; an empty list means all succeeded.
    pub async fn add_tracer_events(
        &self,
        tracer_events: BTreeMap<TracerId, TracerEvent>,
    ) -> Vec<EventSubmitFailure> {
        trace!("Adding {} tracer events", tracer_events.len());
        let mut failures = Vec::new();

        for (tracer_id, tracer_event) in tracer_events {
            if let Err(error) = self.add_tracer_event(tracer_event, tracer_id).await {
                failures.push(EventSubmitFailure { tracer_id, error });
            }
        }

        if !failures.is_empty() {
            warn!("{} tracer events could not be submitted", failures.len());
        }

        failures
    }

    /// Posts one event to `/tracers/{tracer_id}/events`, overwriting the
    /// event's own `tracer_id` first.
    pub async fn add_tracer_event(
        &self,
        mut tracer_event: TracerEvent,
        tracer_id: TracerId,
    ) -> Result<()> {
        trace!(
            "Adding the following tracer event: {:?}, tracer ID: {}",
            tracer_event,
            tracer_id
        );
        tracer_event.tracer_id = tracer_id;

        let tracer_id = tracer_id.to_string();
        self.post_json(
            "tracer event",
            &[TRACERS_PATH, tracer_id.as_str(), EVENTS_PATH],
            &tracer_event,
        )
        .await
    }

    pub async fn add_label(&self, label: &Label) -> Result<()> {
        trace!("Adding the following label: {:?}", label);
        self.post_json("label", &[LABELS_PATH], label).await
    }

    pub async fn get_labels(&self) -> Result<Vec<Label>> {
        trace!("Getting all the labels");
        self.get_json("labels", &[LABELS_PATH]).await
    }

    /// Fetches a single label.
    ///
    /// The label is read from `/tracers/{id}`, which is where the server has
    /// historically answered label lookups; `/labels/{id}` is not used until
    /// the server contract confirms it.
    pub async fn get_label(&self, id: LabelId) -> Result<Label> {
        trace!("Getting the label {}", id);
        let id = id.to_string();
        self.get_json("label", &[TRACERS_PATH, id.as_str()]).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let address = self
            .config
            .read_config(TRACER_SERVER_KEY)
            .map_err(|source| ClientError::Config {
                key: TRACER_SERVER_KEY,
                source,
            })?;

        endpoint_url(&address, segments)
    }

    async fn post_json<B>(&self, what: &'static str, segments: &[&str], body: &B) -> Result<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let result = async {
            let body =
                serde_json::to_vec(body).map_err(|source| ClientError::Encode { what, source })?;
            trace!(
                "Encoded the {} into the following JSON: {}",
                what,
                String::from_utf8_lossy(&body)
            );

            let url = self.endpoint(segments)?;
            self.execute(HttpRequest::post_json(url, body)).await?;
            Ok::<_, ClientError>(())
        }
        .await;

        result.inspect_err(|err| warn!("{}", err))
    }

    async fn get_json<R: DeserializeOwned>(
        &self,
        what: &'static str,
        segments: &[&str],
    ) -> Result<R> {
        let result = async {
            let url = self.endpoint(segments)?;
            let response = self.execute(HttpRequest::get(url.clone())).await?;
            trace!(
                "Read the following from the response: {}",
                String::from_utf8_lossy(&response.body)
            );

            serde_json::from_slice::<R>(&response.body).map_err(|source| ClientError::Decode {
                what,
                url: url.to_string(),
                source,
            })
        }
        .await;

        result.inspect_err(|err| warn!("{}", err))
    }

    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        let method = request.method.clone();
        let url = request.url.to_string();
        trace!("Sending {} request to {}", method, url);

        let response = self
            .transport
            .send(request)
            .await
            .map_err(|source| ClientError::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        if !response.status.is_success() {
            return Err(ClientError::Server {
                method,
                url,
                status: response.status.as_u16(),
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        trace!("Request submitted successfully");
        Ok(response)
    }
}
